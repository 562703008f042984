//! Provides functionality for stopping a previously started emulator
//! instance.

use crate::emulator::tree::{is_process_alive, terminate_tree};
use crate::settings::Settings;
use std::fs;
use std::io;

/// Stops the emulator instance named by the PID record, if any.
///
/// Reads the PID record, delivers an interrupt to the recorded process
/// and its full descendant tree when the process is still alive, and
/// deletes the record. A missing record is a no-op, and a record naming a
/// process that has already exited is removed without any signal being
/// sent. Signaling is fire-and-forget: the function does not wait for
/// the tree to exit.
///
/// # Returns
///
/// Returns `Ok(true)` if a live process tree was signaled, `Ok(false)`
/// if there was nothing to stop.
///
/// # Errors
///
/// Returns an error if:
/// - The PID record exists but cannot be read or deleted
/// - The PID record is empty or does not contain a valid PID
pub fn stop_emulator(settings: &Settings) -> io::Result<bool> {
    if !settings.pid_file.exists() {
        return Ok(false);
    }

    let contents = fs::read_to_string(&settings.pid_file)?;
    let pid_str = contents.trim();

    if pid_str.is_empty() {
        return Err(io::Error::new(
            io::ErrorKind::InvalidData,
            "PID record is empty or contains no valid PID",
        ));
    }

    let pid = pid_str.parse::<i32>().map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidData,
            format!("Invalid PID in record: '{}'", pid_str),
        )
    })?;

    let killed = if is_process_alive(pid) {
        eprintln!("Killing existing firestore emulator with PID {}", pid);
        terminate_tree(pid);
        true
    } else {
        false
    };

    fs::remove_file(&settings.pid_file)?;
    Ok(killed)
}
