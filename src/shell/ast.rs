/// One slot of an input line after splitting on the parallel marker.
#[derive(Debug, Clone, PartialEq)]
pub enum CommandSlot {
    // Raw command text, trimmed: "ls -la > out.txt"
    Command(String),
    // Empty slot: "& ls" or "ls & & pwd"
    Malformed,
}

/// A single command broken into words, with its output redirection split off.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedCommand {
    /// argv[0] is the command name as typed, never the resolved path.
    pub argv: Vec<String>,
    /// Target of "> file", already removed from `argv`.
    pub redirect: Option<String>,
}

impl ParsedCommand {
    pub fn program(&self) -> &str {
        &self.argv[0]
    }
}
