//! Request and response types for the Gists API.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{
    de::{MapAccess, Visitor},
    ser::SerializeMap,
    Deserialize, Deserializer, Serialize, Serializer,
};

use super::error::Error;

// ==================== Gist ====================

/// A gist as returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Gist {
    /// Gist identifier.
    pub id: String,

    /// Web URL of the gist.
    pub html_url: String,

    /// Description; the API sends `null` when none was set.
    #[serde(default)]
    pub description: Option<String>,

    /// Whether the gist is public.
    #[serde(default)]
    pub public: bool,

    /// Files in the order the API returned them.
    pub files: GistFiles,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner: Option<Owner>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

impl Gist {
    /// Returns the first file in response order.
    pub fn first_file(&self) -> Option<&GistFile> {
        self.files.first().map(|(_, file)| file)
    }

    /// Returns the description, or an empty string when unset.
    pub fn description_or_empty(&self) -> &str {
        self.description.as_deref().unwrap_or("")
    }
}

/// Owner of a gist.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Owner {
    pub login: String,
}

/// A single file inside a gist.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GistFile {
    pub filename: String,

    #[serde(default)]
    pub language: Option<String>,

    /// Direct download URL of the file content.
    #[serde(default)]
    pub raw_url: String,

    #[serde(default)]
    pub size: u64,

    /// Set when `content` was cut short and must be fetched from `raw_url`.
    #[serde(default)]
    pub truncated: bool,

    /// File content. Absent in list responses.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
}

// ==================== Gist Files ====================

/// Filename to file mapping that keeps the order of the response body.
///
/// Filenames are unique keys; a repeated key replaces the earlier entry in
/// place.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GistFiles {
    entries: Vec<(String, GistFile)>,
}

impl GistFiles {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a file, replacing any entry with the same name in place.
    pub fn insert(&mut self, name: impl Into<String>, file: GistFile) {
        let name = name.into();
        match self.entries.iter_mut().find(|(n, _)| *n == name) {
            Some(entry) => entry.1 = file,
            None => self.entries.push((name, file)),
        }
    }

    pub fn get(&self, name: &str) -> Option<&GistFile> {
        self.entries.iter().find(|(n, _)| n == name).map(|(_, f)| f)
    }

    pub fn first(&self) -> Option<(&str, &GistFile)> {
        self.entries.first().map(|(n, f)| (n.as_str(), f))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(n, _)| n.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &GistFile)> {
        self.entries.iter().map(|(n, f)| (n.as_str(), f))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'de> Deserialize<'de> for GistFiles {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct FilesVisitor;

        impl<'de> Visitor<'de> for FilesVisitor {
            type Value = GistFiles;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map of filename to gist file")
            }

            fn visit_map<A>(self, mut map: A) -> std::result::Result<GistFiles, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut files = GistFiles::new();
                while let Some((name, file)) = map.next_entry::<String, GistFile>()? {
                    files.insert(name, file);
                }
                Ok(files)
            }
        }

        deserializer.deserialize_map(FilesVisitor)
    }
}

impl Serialize for GistFiles {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, file) in &self.entries {
            map.serialize_entry(name, file)?;
        }
        map.end()
    }
}

// ==================== Visibility ====================

/// Visibility of a new gist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Visibility {
    #[default]
    Public,
    /// Secret gist, reachable only by URL.
    Private,
}

impl Visibility {
    /// Returns true for public gists.
    pub fn is_public(self) -> bool {
        self == Visibility::Public
    }
}

impl FromStr for Visibility {
    type Err = Error;

    /// Accepts the usual boolean spellings, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "yes" | "true" | "t" | "y" | "1" => Ok(Visibility::Public),
            "no" | "false" | "f" | "n" | "0" => Ok(Visibility::Private),
            _ => Err(Error::InvalidVisibility(s.to_string())),
        }
    }
}

impl fmt::Display for Visibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Visibility::Public => f.write_str("public"),
            Visibility::Private => f.write_str("private"),
        }
    }
}

// ==================== Requests ====================

/// File body for create requests.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FileContent {
    pub content: String,
}

/// Request body for `POST /gists`.
#[derive(Debug, Clone, Serialize)]
pub struct CreateGistRequest {
    pub files: BTreeMap<String, FileContent>,
    pub description: String,
    pub public: bool,
}

impl CreateGistRequest {
    /// Builds a create request from name/content pairs.
    pub fn new(
        files: impl IntoIterator<Item = (String, String)>,
        description: impl Into<String>,
        visibility: Visibility,
    ) -> Self {
        Self {
            files: files
                .into_iter()
                .map(|(name, content)| (name, FileContent { content }))
                .collect(),
            description: description.into(),
            public: visibility.is_public(),
        }
    }
}

/// File body for edit requests.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FileEdit {
    pub content: String,
    pub filename: String,
}

/// Request body for `PATCH /gists/{id}`.
///
/// A `None` file entry serializes as `null`, which deletes that file.
#[derive(Debug, Clone, Default, Serialize)]
pub struct EditGistRequest {
    /// New description; left untouched remotely when `None`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    pub files: BTreeMap<String, Option<FileEdit>>,
}

impl EditGistRequest {
    /// Builds an edit request that updates the given files and keeps any
    /// others the gist already has.
    pub fn merging(
        files: impl IntoIterator<Item = (String, String)>,
        description: Option<String>,
    ) -> Self {
        Self {
            description,
            files: files
                .into_iter()
                .map(|(name, content)| {
                    let edit = FileEdit {
                        content,
                        filename: name.clone(),
                    };
                    (name, Some(edit))
                })
                .collect(),
        }
    }

    /// Builds an edit request whose result holds exactly the given files:
    /// every file of `existing` not among them is deleted.
    pub fn replacing(
        existing: &Gist,
        files: impl IntoIterator<Item = (String, String)>,
        description: Option<String>,
    ) -> Self {
        let mut req = Self::merging(files, description);
        for name in existing.files.names() {
            req.files.entry(name.to_string()).or_insert(None);
        }
        req
    }

    /// Returns the names of files this request deletes.
    pub fn deleted(&self) -> impl Iterator<Item = &str> {
        self.files
            .iter()
            .filter(|(_, edit)| edit.is_none())
            .map(|(name, _)| name.as_str())
    }
}
