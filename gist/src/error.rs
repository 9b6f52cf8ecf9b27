//! Error types for the Gists API client.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for gist operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for gist operations.
#[derive(Error, Debug)]
pub enum Error {
    /// Non-success status returned by the API.
    #[error("github: {message} (status={status})")]
    Api {
        status: u16,
        message: String,
        documentation_url: Option<String>,
    },

    /// Transport failure: connection, TLS, timeout.
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// The response body did not match the expected schema.
    #[error("unexpected response shape: {0}")]
    Json(#[from] serde_json::Error),

    /// IO error while reading local files.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid configuration.
    #[error("invalid configuration: {0}")]
    Config(String),

    /// A gist id or username that cannot name a remote resource.
    #[error("invalid {what}: '{value}'")]
    InvalidArgument { what: &'static str, value: String },

    /// A local input path is missing or is not a regular file.
    #[error("{} is not a file", .0.display())]
    FileNotFound(PathBuf),

    /// Two input paths share a base name and would collide in the gist.
    #[error("duplicate filename '{name}': {} and {}", .first.display(), .second.display())]
    DuplicateFilename {
        name: String,
        first: PathBuf,
        second: PathBuf,
    },

    /// A visibility token was not one of the recognized booleans.
    #[error("boolean value expected, got '{0}'")]
    InvalidVisibility(String),

    /// The gist exists but carries no files.
    #[error("gist {0} has no files")]
    EmptyGist(String),

    /// Other error.
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Creates a new API error.
    pub fn api(status: u16, message: impl Into<String>) -> Self {
        Error::Api {
            status,
            message: message.into(),
            documentation_url: None,
        }
    }

    /// Returns the HTTP status for API errors.
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Api { status, .. } => Some(*status),
            Error::Http(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Returns true if the API reported the resource as missing.
    ///
    /// A malformed gist id also comes back as 404, so both cases land here.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::Api { status: 404, .. })
    }

    /// Returns true for any 4xx status from the API.
    pub fn is_client_error(&self) -> bool {
        matches!(self, Error::Api { status: 400..=499, .. })
    }

    /// Returns true if an id or username was rejected, locally or by the API.
    pub fn is_bad_reference(&self) -> bool {
        self.is_client_error() || matches!(self, Error::InvalidArgument { .. })
    }

    /// Returns true if the credential was rejected.
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Error::Api { status: 401 | 403, .. })
    }

    /// Returns true if the error was raised before any request was sent.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Error::Config(_)
                | Error::InvalidArgument { .. }
                | Error::FileNotFound(_)
                | Error::DuplicateFilename { .. }
                | Error::InvalidVisibility(_)
        )
    }

    /// Returns true for connection-level failures.
    pub fn is_transport(&self) -> bool {
        matches!(self, Error::Http(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classification() {
        assert!(Error::api(404, "Not Found").is_not_found());
        assert!(!Error::api(422, "Validation Failed").is_not_found());
        assert!(Error::api(401, "Bad credentials").is_unauthorized());
        assert!(Error::api(403, "Forbidden").is_unauthorized());
        assert!(Error::FileNotFound(PathBuf::from("a.txt")).is_validation());
        assert!(Error::InvalidVisibility("maybe".into()).is_validation());
        assert!(!Error::api(500, "boom").is_validation());
    }

    #[test]
    fn test_bad_reference() {
        assert!(Error::api(404, "Not Found").is_bad_reference());
        assert!(Error::api(422, "Validation Failed").is_bad_reference());
        assert!(Error::api(400, "Bad Request").is_bad_reference());
        let invalid = Error::InvalidArgument {
            what: "gist id",
            value: "abc/def".into(),
        };
        assert!(invalid.is_bad_reference());
        assert!(invalid.is_validation());
        assert_eq!(invalid.to_string(), "invalid gist id: 'abc/def'");
        assert!(!Error::api(500, "boom").is_bad_reference());
        assert!(!Error::api(503, "unavailable").is_client_error());
        assert!(!Error::EmptyGist("x".into()).is_bad_reference());
    }

    #[test]
    fn test_display() {
        let err = Error::FileNotFound(PathBuf::from("notes/missing.txt"));
        assert_eq!(err.to_string(), "notes/missing.txt is not a file");

        let err = Error::DuplicateFilename {
            name: "a.txt".into(),
            first: PathBuf::from("x/a.txt"),
            second: PathBuf::from("y/a.txt"),
        };
        assert_eq!(err.to_string(), "duplicate filename 'a.txt': x/a.txt and y/a.txt");

        assert_eq!(
            Error::api(404, "Not Found").to_string(),
            "github: Not Found (status=404)"
        );
    }
}
