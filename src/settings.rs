//! Runtime settings for the emulator controller.
//!
//! All filesystem paths and the network endpoint are fixed per invoking
//! user. They are resolved once at startup into an immutable [`Settings`]
//! value that is threaded through every operation, so nothing else in the
//! crate reads the environment or hardcodes a path.

use std::io;
use std::path::{Path, PathBuf};

/// IPv4 loopback address the emulator binds to.
pub const HOST: &str = "127.0.0.1";

/// TCP port the emulator binds to.
pub const PORT: u16 = 8444;

/// Environment variable client libraries read to find the emulator.
pub const EMULATOR_HOST_VAR: &str = "FIRESTORE_EMULATOR_HOST";

/// Directory holding the per-user runtime files.
const RUNTIME_DIR: &str = "/tmp";

/// Immutable per-invocation settings: the invoking user, the emulator's
/// bind endpoint, and the three runtime file paths derived from the user
/// name.
#[derive(Debug, Clone)]
pub struct Settings {
    /// Name of the invoking user; scopes the runtime files.
    pub user: String,
    /// Address the emulator binds to.
    pub host: String,
    /// Port the emulator binds to.
    pub port: u16,
    /// Path of the PID record naming the managed emulator process.
    pub pid_file: PathBuf,
    /// Path receiving the emulator's standard output.
    pub stdout_log: PathBuf,
    /// Path receiving the emulator's standard error.
    pub stderr_log: PathBuf,
}

impl Settings {
    /// Builds the settings for the invoking user.
    ///
    /// The user name comes from the `USER` environment variable and scopes
    /// the PID record and both log files under `/tmp`.
    ///
    /// # Errors
    ///
    /// Returns an error if `USER` is not set in the environment.
    pub fn from_env() -> io::Result<Self> {
        let user = std::env::var("USER").map_err(|_| {
            io::Error::new(
                io::ErrorKind::NotFound,
                "Unable to determine invoking user (USER is not set)",
            )
        })?;
        Ok(Self::in_dir(&user, RUNTIME_DIR))
    }

    /// Builds settings with the runtime files placed under `dir` instead
    /// of the default runtime directory. Path derivation is otherwise
    /// identical to [`Settings::from_env`].
    pub fn in_dir<P: AsRef<Path>>(user: &str, dir: P) -> Self {
        let dir = dir.as_ref();
        Settings {
            user: user.to_string(),
            host: HOST.to_string(),
            port: PORT,
            pid_file: dir.join(format!("{}.firestore.pid", user)),
            stdout_log: dir.join(format!("{}.firestore.log", user)),
            stderr_log: dir.join(format!("{}.firestore.err", user)),
        }
    }

    /// Returns the `host:port` pair clients connect to.
    pub fn endpoint(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Returns the single line of shell syntax that points client
    /// libraries at the emulator.
    pub fn export_line(&self) -> String {
        format!("export {}=\"{}\"", EMULATOR_HOST_VAR, self.endpoint())
    }
}
