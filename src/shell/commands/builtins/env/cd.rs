// Cd command

use crate::shell::commands::Executable;
use crate::shell::context::ShellContext;
use anyhow::{Context, Result, bail};
use log::debug;
use std::env;

pub struct CdCommand;
impl Executable for CdCommand {
    fn execute(&self, args: &[String], _ctx: &mut ShellContext) -> Result<()> {
        // args[0] is "cd". args[1] is the target.
        if args.len() != 2 {
            bail!("cd: expected exactly one argument, got {}", args.len() - 1);
        }

        let target = &args[1];
        env::set_current_dir(target)
            .with_context(|| format!("cd: cannot change directory to {}", target))?;
        debug!("cwd is now {:?}", env::current_dir().ok());
        Ok(())
    }
}
