use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "wish", version, about = "wish: a minimal shell")]
pub struct Cli {
    /// Read commands from this file instead of the terminal (no prompt)
    pub batch_file: Option<PathBuf>,

    /// Print diagnostics (parsing, lookups, child statuses) to stderr
    #[arg(short = 'd', long = "debug")]
    pub debug: bool,

    /// TOML file with the initial search path and prompt
    #[arg(short = 'c', long = "config")]
    pub config: Option<PathBuf>,
}
