mod cli;
mod config;
mod handlers;
mod logger;
mod shell;

use clap::Parser;
use cli::Cli;
use config::load_config;
use handlers::repl;
use log::error;
use shell::error::{BatchLaunchError, report_error};
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();
    logger::init_logger(cli.debug);

    let result = load_config(cli.config.as_deref())
        .and_then(|config| repl::run_repl(&config, cli.batch_file.as_deref()));

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            if let Some(fatal) = e.downcast_ref::<BatchLaunchError>() {
                error!("Aborting: {}", fatal);
            }
            report_error(&e);
            ExitCode::FAILURE
        }
    }
}
