// System command
use crate::shell::ast::ParsedCommand;
use crate::shell::error::report_error;
use crate::shell::resolver::resolve;
use crate::shell::search_path::SearchPath;
use anyhow::{Context, Result, anyhow};
use log::debug;
use nix::libc::STDOUT_FILENO;
use nix::sys::wait::{WaitStatus, waitpid};
use nix::unistd::{ForkResult, Pid, dup2, execv, fork};
use std::ffi::CString;
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::os::fd::AsRawFd;
use std::os::unix::ffi::OsStringExt;
use std::os::unix::fs::OpenOptionsExt;

/// Exit status of a child whose program image could not be replaced.
pub const EXEC_FAILURE_STATUS: i32 = 127;

const REDIRECT_FILE_MODE: u32 = 0o644;

/// An external command that has been validated, resolved and had its redirect
/// target opened, ready to be started in a child process.
///
/// Everything that allocates or can fail is done here, before the fork.
pub struct PreparedLaunch {
    program: String,
    path: CString,
    argv: Vec<CString>,
    redirect: Option<File>,
}

impl PreparedLaunch {
    pub fn prepare(cmd: &ParsedCommand, search_path: &SearchPath) -> Result<Self> {
        let program = cmd.program();
        let resolved = resolve(program, search_path)
            .with_context(|| format!("{}: command not found", program))?;
        debug!("Resolved '{}' to {}", program, resolved.display());

        let path = CString::new(resolved.into_os_string().into_vec())
            .context("Executable path contains a NUL byte")?;
        let argv = cmd
            .argv
            .iter()
            .map(|arg| CString::new(arg.as_str()))
            .collect::<Result<Vec<_>, _>>()
            .context("Argument contains a NUL byte")?;

        let redirect = match &cmd.redirect {
            Some(target) => Some(open_redirect_target(target)?),
            None => None,
        };

        Ok(Self {
            program: program.to_string(),
            path,
            argv,
            redirect,
        })
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    /// Replaces the current process image. Only ever called in a child.
    pub fn exec(self) -> ! {
        let Self {
            program,
            path,
            argv,
            redirect,
        } = self;

        if let Some(file) = redirect {
            if let Err(e) = dup2(file.as_raw_fd(), STDOUT_FILENO) {
                report_error(&anyhow!("{}: failed to redirect stdout: {}", program, e));
                std::process::exit(1);
            }
            // fd 1 now holds the file; the original descriptor is closed here
            drop(file);
        }

        let err = match execv(&path, &argv) {
            Ok(never) => match never {},
            Err(e) => e,
        };
        report_error(&anyhow!("{}: exec failed: {}", program, err));
        std::process::exit(EXEC_FAILURE_STATUS);
    }
}

fn open_redirect_target(target: &str) -> Result<File> {
    OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .mode(REDIRECT_FILE_MODE)
        .open(target)
        .with_context(|| format!("Failed to open file: {}", target))
}

/// Starts one external command and blocks until it has been reaped.
///
/// The child's exit status is only logged.
pub fn launch_and_wait(cmd: &ParsedCommand, search_path: &SearchPath) -> Result<()> {
    let prepared = PreparedLaunch::prepare(cmd, search_path)?;

    // Anything still buffered would otherwise be written twice
    std::io::stdout().flush().ok();

    // SAFETY: the child only duplicates a descriptor and calls execv, or exits.
    let fork_result = unsafe { fork() }
        .with_context(|| format!("Failed to create process for: {}", prepared.program()))?;

    match fork_result {
        ForkResult::Child => prepared.exec(),
        ForkResult::Parent { child } => {
            let program = prepared.program().to_string();
            // Parent's copy of the redirect target is not needed anymore
            drop(prepared);
            debug!("Started '{}' as pid {}", program, child);
            let status = reap(child)?;
            debug!("'{}' finished: {}", program, describe_status(&status));
            Ok(())
        }
    }
}

/// Waits for exactly one child, retrying if the wait is interrupted.
pub fn reap(child: Pid) -> Result<WaitStatus> {
    loop {
        match waitpid(child, None) {
            Err(nix::errno::Errno::EINTR) => continue,
            other => return other.with_context(|| format!("Failed to wait for pid {}", child)),
        }
    }
}

pub fn describe_status(status: &WaitStatus) -> String {
    match status {
        WaitStatus::Exited(pid, code) => format!("pid {} exited with status {}", pid, code),
        WaitStatus::Signaled(pid, signal, _) => format!("pid {} killed by {:?}", pid, signal),
        other => format!("{:?}", other),
    }
}
