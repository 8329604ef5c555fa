use colored::*;
use env_logger::Env;
use log::{Level, LevelFilter};
use std::io::Write;

fn level_tag(level: Level) -> ColoredString {
    match level {
        Level::Error => "[error]".red().bold(),
        Level::Warn => "[warn]".yellow(),
        Level::Info => "[info]".cyan(),
        Level::Debug => "[debug]".blue(),
        Level::Trace => "[trace]".dimmed(),
    }
}

/// Diagnostics are off unless `--debug` is given or `RUST_LOG` asks for them.
pub fn init_logger(debug: bool) {
    let mut builder = env_logger::Builder::from_env(Env::default().default_filter_or("off"));
    if debug {
        builder.filter_level(LevelFilter::Debug);
    }
    builder
        .format(|buf, record| writeln!(buf, "{} {}", level_tag(record.level()), record.args()))
        .init();
}
