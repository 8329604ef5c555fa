use crate::shell::commands::system::{describe_status, reap};
use crate::shell::context::ShellContext;
use crate::shell::error::{BatchLaunchError, report_error};
use crate::shell::executor::run_in_child;
use anyhow::Result;
use log::{debug, error};
use nix::unistd::{ForkResult, Pid, fork};
use std::io::Write;

/// Launches every command in its own process without waiting in between,
/// then reaps them all in launch order.
///
/// A failed fork is returned as `BatchLaunchError`, which the caller treats as
/// fatal. Children already started at that point are left to finish.
pub fn run_batch(commands: &[String], ctx: &mut ShellContext) -> Result<()> {
    std::io::stdout().flush().ok();

    let mut children: Vec<(Pid, &str)> = Vec::with_capacity(commands.len());

    for (index, command) in commands.iter().enumerate() {
        // SAFETY: the input loop is single-threaded, so the child cannot
        // inherit a lock held by another thread.
        match unsafe { fork() } {
            Ok(ForkResult::Child) => run_member(command, ctx),
            Ok(ForkResult::Parent { child }) => {
                debug!("Batch member {} '{}' started as pid {}", index + 1, command, child);
                children.push((child, command.as_str()));
            }
            Err(source) => {
                return Err(BatchLaunchError {
                    index,
                    command: command.clone(),
                    source,
                }
                .into());
            }
        }
    }

    for (child, command) in children {
        match reap(child) {
            Ok(status) => debug!("Batch member '{}': {}", command, describe_status(&status)),
            Err(e) => error!("{:#}", e),
        }
    }
    Ok(())
}

// Every exit path terminates the child; it never falls back into the batch loop.
fn run_member(command: &str, ctx: &mut ShellContext) -> ! {
    if let Err(e) = run_in_child(command, ctx) {
        report_error(&e);
    }
    std::io::stdout().flush().ok();
    std::process::exit(0);
}
