//! Bearer credential for write operations.

use std::fmt;

use super::error::{Error, Result};

/// Personal access token authorizing gist creation and edits.
///
/// The credential is handed to each write call explicitly; the client
/// itself never stores one, so read-only calls are always anonymous.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential {
    token: String,
}

impl Credential {
    /// Creates a credential from a raw token. Surrounding whitespace is
    /// stripped, since token files usually end with a newline.
    pub fn new(token: impl AsRef<str>) -> Result<Self> {
        let token = token.as_ref().trim();
        if token.is_empty() {
            return Err(Error::Config("token must be non-empty".to_string()));
        }
        Ok(Self {
            token: token.to_string(),
        })
    }

    /// Returns the raw token.
    pub fn token(&self) -> &str {
        &self.token
    }

    /// Returns the `Authorization` header value.
    pub(crate) fn authorization(&self) -> String {
        format!("Bearer {}", self.token)
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Credential(<redacted>)")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_trims_whitespace() {
        let cred = Credential::new("  ghp_abc\n").unwrap();
        assert_eq!(cred.token(), "ghp_abc");
        assert_eq!(cred.authorization(), "Bearer ghp_abc");
    }

    #[test]
    fn test_new_rejects_blank() {
        assert!(matches!(Credential::new(" \n"), Err(Error::Config(_))));
    }

    #[test]
    fn test_debug_hides_token() {
        let cred = Credential::new("ghp_0123456789abcdef").unwrap();
        assert_eq!(format!("{:?}", cred), "Credential(<redacted>)");
    }
}
