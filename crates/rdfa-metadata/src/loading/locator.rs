//! Map type names onto definition files and back.

use std::path::{Path, PathBuf};

use tracing::debug;

use super::driver::DriverOptions;
use super::error::LoadError;

/// Searches an ordered list of directories for definition files.
///
/// File names are derived from type names by replacing the namespace
/// separator with `.` and appending the extension, so `blog::Article`
/// becomes `blog.Article.xml`.
#[derive(Debug, Clone)]
pub struct DefinitionLocator {
    directories: Vec<PathBuf>,
    extension: String,
    separator: String,
}

impl DefinitionLocator {
    pub fn new(directories: Vec<PathBuf>, extension: &str, separator: &str) -> Self {
        Self {
            directories,
            extension: extension.trim_start_matches('.').to_string(),
            separator: separator.to_string(),
        }
    }

    pub fn from_options(options: &DriverOptions) -> Self {
        Self::new(
            options.directories.clone(),
            &options.extension,
            &options.namespace_separator,
        )
    }

    /// File name a definition of `type_name` is stored under.
    pub fn file_name(&self, type_name: &str) -> String {
        format!(
            "{}.{}",
            type_name.replace(self.separator.as_str(), "."),
            self.extension
        )
    }

    /// Reverse of [`file_name`](Self::file_name). Accepts a bare file name or
    /// a path; only the last component is used.
    pub fn type_name(&self, file_name: &str) -> String {
        let base = Path::new(file_name)
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or(file_name);
        let suffix = format!(".{}", self.extension);
        let stem = base.strip_suffix(suffix.as_str()).unwrap_or(base);
        stem.replace('.', &self.separator)
    }

    /// First directory holding a definition for `type_name`. Earlier
    /// directories shadow later ones. The file is not opened.
    pub fn locate(&self, type_name: &str) -> Option<PathBuf> {
        let file_name = self.file_name(type_name);
        let found = self
            .directories
            .iter()
            .map(|dir| dir.join(&file_name))
            .find(|candidate| candidate.is_file());
        match &found {
            Some(path) => debug!(type_name, path = %path.display(), "definition located"),
            None => debug!(type_name, file_name = %file_name, "no definition file"),
        }
        found
    }

    /// Every definition file, sorted by name within a directory, directories
    /// in configured order. Missing directories contribute nothing.
    pub fn definition_files(&self) -> Result<Vec<PathBuf>, LoadError> {
        let mut files = Vec::new();
        for dir in &self.directories {
            let pattern = format!(
                "{}/*.{}",
                glob::Pattern::escape(&dir.to_string_lossy()),
                glob::Pattern::escape(&self.extension)
            );
            let before = files.len();
            for entry in glob::glob(&pattern)? {
                let path = entry?;
                if path.is_file() {
                    files.push(path);
                }
            }
            debug!(dir = %dir.display(), count = files.len() - before, "scanned definition directory");
        }
        Ok(files)
    }
}
