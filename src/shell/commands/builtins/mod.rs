pub mod env;

use crate::shell::ast::ParsedCommand;
use crate::shell::context::ShellContext;
use anyhow::{Result, bail};
use log::debug;

/// Helper to register all built-in commands at once
pub fn register_all_builtins(ctx: &mut ShellContext) {
    ctx.register_command("exit", Box::new(env::exit::ExitCommand));
    ctx.register_command("cd", Box::new(env::cd::CdCommand));
    ctx.register_command("path", Box::new(env::path::PathCommand));
}

/// Runs `cmd` in-process if its name is a built-in.
///
/// Returns `Ok(false)` when the name is not a built-in and the caller has to
/// launch it as an external program.
pub fn dispatch_builtin(cmd: &ParsedCommand, ctx: &mut ShellContext) -> Result<bool> {
    let registry = ctx.registry.clone();
    let Some(builtin) = registry.get(cmd.program()) else {
        return Ok(false);
    };

    if cmd.redirect.is_some() {
        bail!("{}: built-ins do not support output redirection", cmd.program());
    }

    debug!("Built-in: {:?}", cmd.argv);
    builtin.execute(&cmd.argv, ctx)?;
    Ok(true)
}
