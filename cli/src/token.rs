//! Token file loading.

use std::path::Path;

/// Legacy token file read from the working directory.
pub const DEFAULT_TOKEN_FILE: &str = "TOKEN";

/// Reads a token from a file, trimming surrounding whitespace.
pub fn load_token_file(path: impl AsRef<Path>) -> anyhow::Result<String> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("cannot read token file {}: {}", path.display(), e))?;

    let token = content.trim();
    if token.is_empty() {
        anyhow::bail!("token file {} is empty", path.display());
    }

    Ok(token.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_load_trims_newline() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "ghp_abcdef").unwrap();

        assert_eq!(load_token_file(file.path()).unwrap(), "ghp_abcdef");
    }

    #[test]
    fn test_load_empty_file() {
        let file = NamedTempFile::new().unwrap();
        let err = load_token_file(file.path()).unwrap_err();
        assert!(err.to_string().contains("is empty"));
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_token_file(dir.path().join("TOKEN")).unwrap_err();
        assert!(err.to_string().contains("cannot read token file"));
    }
}
