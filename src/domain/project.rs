//! Project files listed in a solution

use std::path::{Path, PathBuf};

/// A project file on disk, identified by its path and classified by its name
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ProjectFile {
    pub path: PathBuf,
    /// File stem, e.g. `Acme.Blogging.Application` for `Acme.Blogging.Application.csproj`
    pub name: String,
}

impl ProjectFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let name = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
        Self { path, name }
    }

    /// Directory holding the project file
    pub fn directory(&self) -> &Path {
        self.path.parent().unwrap_or_else(|| Path::new("."))
    }

    /// Whether the project name ends with `suffix`, ignoring ASCII case
    pub fn has_name_suffix(&self, suffix: &str) -> bool {
        let name = self.name.as_bytes();
        let suffix = suffix.as_bytes();
        name.len() >= suffix.len() && name[name.len() - suffix.len()..].eq_ignore_ascii_case(suffix)
    }
}
