//! A small library for running a local Firestore emulator as a managed
//! background daemon.
//!
//! The controller keeps at most one emulator instance alive per user,
//! identified by a PID record on disk. Stopping tears down the recorded
//! process tree and removes the record; starting spawns a fresh detached
//! instance bound to a fixed loopback endpoint and records its PID, so
//! test tooling can be pointed at the emulator with a single exported
//! environment variable.

pub mod emulator;
pub mod settings;

pub use emulator::{start_emulator, stop_emulator};
pub use settings::Settings;
