use log::debug;
use std::fmt;

/// The one message users ever see for a failed command.
pub const ERROR_MESSAGE: &str = "An error has occurred";

/// Prints the uniform error line; the detailed chain only goes to the debug log.
pub fn report_error(err: &anyhow::Error) {
    debug!("{:#}", err);
    eprintln!("{}", ERROR_MESSAGE);
}

/// Process creation failed part-way through a parallel batch.
///
/// Siblings may already be running at this point, so the shell cannot carry on.
#[derive(Debug)]
pub struct BatchLaunchError {
    pub index: usize,
    pub command: String,
    pub source: nix::Error,
}

impl fmt::Display for BatchLaunchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Failed to create process {} for '{}': {}",
            self.index + 1,
            self.command,
            self.source
        )
    }
}

impl std::error::Error for BatchLaunchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.source)
    }
}
