pub mod ast;
pub mod batch;
pub mod commands;
pub mod context;
pub mod error;
pub mod executor;
pub mod parser;
pub mod resolver;
pub mod search_path;

use anyhow::{Result, anyhow};
use ast::CommandSlot;
use context::ShellContext;
use error::report_error;

#[cfg(test)]
mod tests;

/// Runs every command on one input line.
///
/// Non-fatal problems are reported as they occur and never abort the rest of
/// the line. Only errors the shell cannot survive are returned.
pub fn run_line(line: &str, ctx: &mut ShellContext) -> Result<()> {
    let mut commands = Vec::new();
    for slot in parser::split_into_commands(line) {
        match slot {
            CommandSlot::Command(text) => commands.push(text),
            CommandSlot::Malformed => report_error(&anyhow!("Empty command around '&' in: {}", line.trim())),
        }
    }

    match commands.as_slice() {
        [] => Ok(()),
        [single] => {
            if let Err(e) = executor::run_standalone(single, ctx) {
                report_error(&e);
            }
            Ok(())
        }
        _ => batch::run_batch(&commands, ctx),
    }
}
