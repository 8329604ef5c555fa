use crate::shell::commands::builtins::dispatch_builtin;
use crate::shell::commands::system::{PreparedLaunch, launch_and_wait};
use crate::shell::context::ShellContext;
use crate::shell::parser::parse_command;
use anyhow::Result;
use log::debug;

/// Runs one command on its own: built-ins change this process, anything
/// else is launched and waited for before returning.
pub fn run_standalone(command_text: &str, ctx: &mut ShellContext) -> Result<()> {
    let cmd = parse_command(command_text)?;
    debug!("Parsed: {:?}", cmd);

    if dispatch_builtin(&cmd, ctx)? {
        return Ok(());
    }
    launch_and_wait(&cmd, &ctx.search_path)
}

/// Runs one command as a batch member, inside a child that was already forked.
///
/// Returns only if the command was a built-in or failed before its program
/// could be started; otherwise the process image is replaced.
pub fn run_in_child(command_text: &str, ctx: &mut ShellContext) -> Result<()> {
    let cmd = parse_command(command_text)?;
    debug!("[pid {}] Parsed: {:?}", std::process::id(), cmd);

    if dispatch_builtin(&cmd, ctx)? {
        return Ok(());
    }
    PreparedLaunch::prepare(&cmd, &ctx.search_path)?.exec()
}
