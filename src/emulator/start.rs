//! Provides functionality for launching a fresh detached emulator
//! instance.

use crate::settings::Settings;
use std::fs::{self, File};
use std::io;
use std::process::{Command, Stdio};
use std::thread;

/// Program used to launch the emulator.
const EMULATOR_PROGRAM: &str = "gcloud";

/// Leading arguments of the emulator invocation; the `--host-port` flag
/// is appended from the settings.
const EMULATOR_ARGS: &[&str] = &["beta", "emulators", "firestore", "start"];

/// Starts a new emulator instance bound to the configured endpoint.
///
/// The emulator is spawned fully detached: standard input comes from the
/// null device, standard output and standard error are redirected to the
/// two log files (recreated, replacing prior contents), and the child's
/// lifetime is independent of the controller's. On success the spawned
/// PID is written to the PID record.
///
/// The caller is expected to have torn down any previous instance first;
/// this function does not inspect the PID record before overwriting it.
///
/// # Returns
///
/// Returns the PID of the spawned emulator process.
///
/// # Errors
///
/// Returns an error if:
/// - The emulator binary cannot be launched
/// - Either log file cannot be created
/// - The PID record cannot be written
pub fn start_emulator(settings: &Settings) -> io::Result<i32> {
    let mut args: Vec<String> = EMULATOR_ARGS.iter().map(|arg| arg.to_string()).collect();
    args.push(format!("--host-port={}", settings.endpoint()));
    start_emulator_with_command(settings, EMULATOR_PROGRAM.to_string(), args)
}

/// Starts an instance with a custom command in place of the emulator
/// binary (for testing).
#[cfg(test)]
pub(crate) fn start_emulator_with_test_command(
    settings: &Settings,
    program: &str,
    args: &[&str],
) -> io::Result<i32> {
    start_emulator_with_command(
        settings,
        program.to_string(),
        args.iter().map(|arg| arg.to_string()).collect(),
    )
}

/// Internal function that handles the actual spawn and record keeping.
fn start_emulator_with_command(
    settings: &Settings,
    program: String,
    args: Vec<String>,
) -> io::Result<i32> {
    eprintln!("Starting new firestore emulator at {}", settings.endpoint());

    // The spawn happens on a short-lived helper thread joined right away,
    // so the child is fully detached before the controller returns. The
    // join completes as soon as the spawn does.
    let stdout_log = settings.stdout_log.clone();
    let stderr_log = settings.stderr_log.clone();
    let launcher = thread::spawn(move || -> io::Result<u32> {
        let stdout = File::create(stdout_log)?;
        let stderr = File::create(stderr_log)?;
        let child = Command::new(program)
            .args(args)
            .stdin(Stdio::null())
            .stdout(stdout)
            .stderr(stderr)
            .spawn()?;
        Ok(child.id())
    });

    let pid = launcher.join().map_err(|_| {
        io::Error::new(io::ErrorKind::Other, "Emulator launcher thread panicked")
    })??;

    eprintln!("Started firestore emulator with PID {}", pid);
    fs::write(&settings.pid_file, format!("{}\n", pid))?;

    Ok(pid as i32)
}
