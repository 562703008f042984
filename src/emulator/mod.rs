//! Daemon lifecycle for the managed emulator process.
//!
//! This module keeps at most one emulator instance running under a
//! well-known identity: a PID record on disk names the currently managed
//! process. Teardown reads the record, interrupts the recorded process
//! tree if it is still alive, and deletes the record; startup spawns a
//! fresh detached instance and records its PID. Teardown is always fully
//! sequenced before startup, so two instances never coexist under the
//! controller's management.

mod start;
mod stop;
mod tree;

pub use start::start_emulator;
pub use stop::stop_emulator;
