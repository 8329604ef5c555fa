use crate::shell::search_path::SearchPath;
use log::debug;
use nix::unistd::{AccessFlags, access};
use std::path::{Path, PathBuf};

fn has_separator(name: &str) -> bool {
    name.contains('/')
}

fn is_executable(path: &Path) -> bool {
    path.is_file() && access(path, AccessFlags::X_OK).is_ok()
}

/// Resolves a command name to an executable file.
///
/// Names containing `/` are taken literally and never looked up in the search
/// path. Bare names are joined onto each search-path entry in order; entries
/// are used verbatim, with no `:` splitting or `~` expansion.
pub fn resolve(name: &str, search_path: &SearchPath) -> Option<PathBuf> {
    if name.is_empty() {
        return None;
    }

    if has_separator(name) {
        let literal = PathBuf::from(name);
        return is_executable(&literal).then_some(literal);
    }

    for dir in search_path.list() {
        let candidate = Path::new(dir).join(name);
        if is_executable(&candidate) {
            return Some(candidate);
        }
        debug!("'{}' not executable in {}", name, dir);
    }
    None
}
