/// Ordered list of directories consulted for bare command names.
///
/// Duplicates are allowed; the first directory holding a match wins.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchPath {
    dirs: Vec<String>,
}

impl SearchPath {
    pub fn new<I, S>(dirs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            dirs: dirs.into_iter().map(Into::into).collect(),
        }
    }

    pub fn add(&mut self, dir: impl Into<String>) {
        self.dirs.push(dir.into());
    }

    pub fn clear(&mut self) {
        self.dirs.clear();
    }

    pub fn list(&self) -> &[String] {
        &self.dirs
    }

    pub fn is_empty(&self) -> bool {
        self.dirs.is_empty()
    }
}
