// Exit command

use crate::shell::commands::Executable;
use crate::shell::context::ShellContext;
use anyhow::{Result, bail};
use std::io::Write;

pub struct ExitCommand;
impl Executable for ExitCommand {
    fn execute(&self, args: &[String], _ctx: &mut ShellContext) -> Result<()> {
        if args.len() > 1 {
            bail!("exit: takes no arguments, got {}", args.len() - 1);
        }
        std::io::stdout().flush().ok();
        std::process::exit(0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shell::search_path::SearchPath;

    #[test]
    fn test_exit_with_arguments_is_rejected() {
        let mut ctx = ShellContext::new(SearchPath::default());
        let args = ["exit".to_string(), "1".to_string()];
        assert!(ExitCommand.execute(&args, &mut ctx).is_err());
    }
}
