use std::collections::HashMap;
use std::sync::Arc;
use crate::shell::commands::Executable;
use crate::shell::search_path::SearchPath;

/// State owned by the input loop and handed to every command.
///
/// The working directory is not stored here: it is process state so that
/// forked batch members each get their own copy.
pub struct ShellContext {
    pub search_path: SearchPath,
    pub registry: Arc<HashMap<String, Box<dyn Executable>>>,
}

impl ShellContext {
    pub fn new(search_path: SearchPath) -> Self {
        let mut ctx = Self {
            search_path,
            registry: Arc::new(HashMap::new()),
        };
        crate::shell::commands::builtins::register_all_builtins(&mut ctx);
        ctx
    }

    pub fn register_command(&mut self, name: &str, command: Box<dyn Executable>) {
        if let Some(map) = Arc::get_mut(&mut self.registry) {
            map.insert(name.to_string(), command);
        } else {
            // Only happens if a dispatch is in flight
            log::warn!("Cannot register '{}': registry is in use", name);
        }
    }
}
