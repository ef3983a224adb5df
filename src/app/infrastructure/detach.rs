//! Re-exec into the background so the launching terminal is released.
//!
//! One hop only: the child is started with `ADOME_DETACHED=1`, and that
//! marker is checked before any spawn.

use std::ffi::OsString;
use std::io;
use std::path::PathBuf;
use std::process::{Command, Stdio};

/// Marker passed to the detached child.
pub const DETACHED_ENV: &str = "ADOME_DETACHED";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetachDecision {
    /// Keep running in this process.
    Stay,
    /// Spawn a detached child, then exit.
    Detach,
}

/// Decide once, before any spawn, whether to re-exec.
pub fn decide(foreground: bool, marker: Option<&str>) -> DetachDecision {
    if foreground || marker == Some("1") {
        DetachDecision::Stay
    } else {
        DetachDecision::Detach
    }
}

/// Decide from the real process environment.
pub fn decide_from_env(foreground: bool) -> DetachDecision {
    let marker = std::env::var(DETACHED_ENV).ok();
    decide(foreground, marker.as_deref())
}

/// Build the child command: same executable, same arguments, marker set,
/// no inherited stdio, new session.
pub fn detached_command(program: PathBuf, args: Vec<OsString>) -> Command {
    let mut command = Command::new(program);
    command
        .args(args)
        .env(DETACHED_ENV, "1")
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null());
    new_session(&mut command);
    command
}

#[cfg(unix)]
fn new_session(command: &mut Command) {
    use std::os::unix::process::CommandExt;

    let hook = || -> io::Result<()> {
        if unsafe { libc::setsid() } == -1 {
            return Err(io::Error::last_os_error());
        }
        Ok(())
    };
    // SAFETY: setsid is async-signal-safe and touches no parent state.
    unsafe {
        command.pre_exec(hook);
    }
}

#[cfg(windows)]
fn new_session(command: &mut Command) {
    use std::os::windows::process::CommandExt;

    const DETACHED_PROCESS: u32 = 0x0000_0008;
    const CREATE_NEW_PROCESS_GROUP: u32 = 0x0000_0200;
    command.creation_flags(DETACHED_PROCESS | CREATE_NEW_PROCESS_GROUP);
}

/// Start the detached copy of this process. Returns the child's pid.
///
/// The caller exits right after; the child is never waited on.
pub fn spawn_detached() -> io::Result<u32> {
    let program = std::env::current_exe()?;
    let args: Vec<OsString> = std::env::args_os().skip(1).collect();
    let child = detached_command(program, args).spawn()?;
    Ok(child.id())
}
