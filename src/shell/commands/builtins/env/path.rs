// Path command

use crate::shell::commands::Executable;
use crate::shell::context::ShellContext;
use anyhow::Result;
use log::debug;

/// Replaces the whole search path; no arguments leaves it empty.
pub struct PathCommand;
impl Executable for PathCommand {
    fn execute(&self, args: &[String], ctx: &mut ShellContext) -> Result<()> {
        ctx.search_path.clear();
        for dir in &args[1..] {
            ctx.search_path.add(dir.as_str());
        }
        if ctx.search_path.is_empty() {
            debug!("Search path: (empty)");
        } else {
            debug!("Search path: {}", ctx.search_path.list().join(":"));
        }
        Ok(())
    }
}
