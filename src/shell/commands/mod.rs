pub mod builtins;
pub mod system;

use crate::shell::context::ShellContext;
use anyhow::Result;

/// A command that runs inside the shell process itself.
pub trait Executable {
    /// `args[0]` is the command name.
    fn execute(&self, args: &[String], ctx: &mut ShellContext) -> Result<()>;
}
