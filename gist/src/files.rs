//! Local files collected for create and edit requests.

use std::path::{Path, PathBuf};

use super::error::{Error, Result};

/// Contents of local files keyed by base name, in input order.
#[derive(Debug, Clone, Default)]
pub struct LocalFiles {
    entries: Vec<LocalFile>,
}

#[derive(Debug, Clone)]
struct LocalFile {
    name: String,
    path: PathBuf,
    content: String,
}

impl LocalFiles {
    /// Reads every path into a name/content mapping.
    ///
    /// All paths are checked before any is read: a path that is not a
    /// regular file, or two paths sharing a base name, fail the whole batch.
    pub fn collect<I, P>(paths: I) -> Result<Self>
    where
        I: IntoIterator<Item = P>,
        P: AsRef<Path>,
    {
        let paths: Vec<PathBuf> = paths.into_iter().map(|p| p.as_ref().to_path_buf()).collect();
        if paths.is_empty() {
            return Err(Error::Config("at least one file is required".to_string()));
        }

        let mut named: Vec<(String, PathBuf)> = Vec::with_capacity(paths.len());
        for path in paths {
            if !path.is_file() {
                return Err(Error::FileNotFound(path));
            }
            let name = base_name(&path)?;
            if let Some((_, first)) = named.iter().find(|(n, _)| *n == name) {
                return Err(Error::DuplicateFilename {
                    name,
                    first: first.clone(),
                    second: path,
                });
            }
            named.push((name, path));
        }

        let mut entries = Vec::with_capacity(named.len());
        for (name, path) in named {
            let content = std::fs::read_to_string(&path)?;
            tracing::debug!(file = %path.display(), bytes = content.len(), "read local file");
            entries.push(LocalFile {
                name,
                path,
                content,
            });
        }

        Ok(Self { entries })
    }

    /// Returns the gist filenames in input order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|f| f.name.as_str())
    }

    /// Returns the local path a gist filename was read from.
    pub fn path_of(&self, name: &str) -> Option<&Path> {
        self.entries
            .iter()
            .find(|f| f.name == name)
            .map(|f| f.path.as_path())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Consumes the set, yielding `(name, content)` pairs.
    pub fn into_contents(self) -> impl Iterator<Item = (String, String)> {
        self.entries.into_iter().map(|f| (f.name, f.content))
    }
}

fn base_name(path: &Path) -> Result<String> {
    path.file_name()
        .and_then(|n| n.to_str())
        .map(str::to_string)
        .ok_or_else(|| Error::Config(format!("{} has no usable file name", path.display())))
}
