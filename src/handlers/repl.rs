use anyhow::{Context, Result};
use colored::*;
use log::debug;
use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::Path;
use crate::config::WishConfig;
use crate::shell::context::ShellContext;
use crate::shell::run_line;
use crate::shell::search_path::SearchPath;

pub fn run_repl(config: &WishConfig, batch_file: Option<&Path>) -> Result<()> {
    let mut ctx = ShellContext::new(SearchPath::new(config.path.clone()));

    match batch_file {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("Failed to open batch file: {}", path.display()))?;
            run_loop(BufReader::new(file), &mut ctx, None)
        }
        None => run_loop(io::stdin().lock(), &mut ctx, Some(config.prompt.as_str())),
    }
}

/// Reads and runs lines until end of input. The prompt is only shown in
/// interactive mode.
///
/// Lines are read as raw bytes; a line that is not valid UTF-8 is decoded
/// lossily and still run, so only real I/O errors end the loop.
fn run_loop<R: BufRead>(mut input: R, ctx: &mut ShellContext, prompt: Option<&str>) -> Result<()> {
    let mut buf = Vec::new();
    loop {
        if let Some(p) = prompt {
            print!("{}", p.bold());
            io::stdout().flush().context("Failed to flush prompt")?;
        }

        buf.clear();
        let read = input.read_until(b'\n', &mut buf).context("Failed to read input line")?;
        if read == 0 {
            if prompt.is_some() {
                // Leave the terminal on a fresh line
                println!();
            }
            return Ok(());
        }

        let line = String::from_utf8_lossy(&buf);
        if let std::borrow::Cow::Owned(_) = line {
            debug!("Input line is not valid UTF-8, decoded as: {:?}", line);
        }
        run_line(&line, ctx)?;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_loop_runs_every_line_until_eof() {
        let mut ctx = ShellContext::new(SearchPath::new(["/bin"]));
        let input = Cursor::new("path /a\n\n   \n&\npath /b /c\n");
        run_loop(input, &mut ctx, None).unwrap();
        assert_eq!(ctx.search_path.list(), ["/b", "/c"]);
    }

    #[test]
    fn test_last_line_without_newline_is_run() {
        let mut ctx = ShellContext::new(SearchPath::new(["/bin"]));
        run_loop(Cursor::new("path /opt"), &mut ctx, None).unwrap();
        assert_eq!(ctx.search_path.list(), ["/opt"]);
    }

    #[test]
    fn test_invalid_utf8_line_runs_and_loop_continues() {
        let mut ctx = ShellContext::new(SearchPath::new(["/bin"]));
        let input = Cursor::new(b"path /caf\xe9 /x\npath /ok \xff/y\n".to_vec());
        run_loop(input, &mut ctx, None).unwrap();
        assert_eq!(ctx.search_path.list(), ["/ok", "\u{FFFD}/y"]);
    }

    #[test]
    fn test_read_error_ends_the_loop() {
        struct Broken;
        impl io::Read for Broken {
            fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
                Err(io::Error::other("disk went away"))
            }
        }

        let mut ctx = ShellContext::new(SearchPath::new(["/bin"]));
        let res = run_loop(BufReader::new(Broken), &mut ctx, None);
        assert!(res.is_err());
    }
}
