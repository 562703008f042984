//! Process introspection and tree termination over the `/proc` interface.

use nix::sys::signal::{kill, Signal};
use nix::unistd::Pid;
use std::fs;
use std::path::PathBuf;

/// Checks if a process with the given PID currently exists.
///
/// # Arguments
///
/// * `pid` - The process ID to check.
///
/// # Returns
///
/// Returns `true` if the process exists, `false` otherwise.
pub(crate) fn is_process_alive(pid: i32) -> bool {
    match kill(Pid::from_raw(pid), None) {
        Ok(()) => true,  // Process exists
        Err(_) => false, // Process doesn't exist or we don't have permission
    }
}

/// Delivers `SIGINT` to the process with the given PID and to every
/// process transitively spawned by it, descendants before ancestors.
///
/// For each task (thread) of the process, the task's direct children are
/// terminated recursively before the task itself is signaled; the main
/// task's id equals the PID, so the root process is signaled last within
/// its own subtree. Signal delivery is not checked: a process that exits
/// between enumeration and signaling is simply missed. The caller is
/// responsible for confirming the root PID is alive before invoking.
pub(crate) fn terminate_tree(pid: i32) {
    for task in tasks_of(pid) {
        for child in children_of(pid, task) {
            terminate_tree(child);
        }
        let _ = kill(Pid::from_raw(task), Signal::SIGINT);
    }
}

/// Lists the task (thread) ids of a process, read from
/// `/proc/<pid>/task`. A process that no longer exists yields an empty
/// list.
pub(crate) fn tasks_of(pid: i32) -> Vec<i32> {
    let task_dir = PathBuf::from("/proc").join(pid.to_string()).join("task");
    let entries = match fs::read_dir(task_dir) {
        Ok(entries) => entries,
        Err(_) => return Vec::new(),
    };

    entries
        .filter_map(|entry| entry.ok())
        .filter_map(|entry| entry.file_name().to_str().and_then(|name| name.parse().ok()))
        .collect()
}

/// Lists the direct child PIDs recorded for one task of a process, read
/// from `/proc/<pid>/task/<task>/children`. A task that has disappeared
/// yields an empty list.
pub(crate) fn children_of(pid: i32, task: i32) -> Vec<i32> {
    let children_path = format!("/proc/{}/task/{}/children", pid, task);
    match fs::read_to_string(children_path) {
        Ok(contents) => contents
            .split_whitespace()
            .filter_map(|child| child.parse().ok())
            .collect(),
        Err(_) => Vec::new(),
    }
}
