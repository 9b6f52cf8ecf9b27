//! Gist service.

use std::sync::Arc;

use super::{
    credential::Credential,
    error::{Error, Result},
    http::HttpClient,
    types::{CreateGistRequest, EditGistRequest, Gist},
};

/// Gist service: fetch, list, create and edit.
pub struct GistService {
    http: Arc<HttpClient>,
}

impl GistService {
    pub(crate) fn new(http: Arc<HttpClient>) -> Self {
        Self { http }
    }

    /// Gets a single gist.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let gist = client.gists().get("aa5a315d61ae9438b18d").await?;
    /// println!("{} ({} files)", gist.html_url, gist.files.len());
    /// ```
    pub async fn get(&self, id: &str) -> Result<Gist> {
        check_segment("gist id", id)?;
        self.http.get(&format!("/gists/{}", id)).await
    }

    /// Returns the content of the first file of a gist, byte for byte.
    ///
    /// Truncated files are downloaded in full from their raw URL.
    pub async fn primary_content(&self, id: &str) -> Result<Vec<u8>> {
        let gist = self.get(id).await?;
        let file = gist
            .first_file()
            .ok_or_else(|| Error::EmptyGist(gist.id.clone()))?;

        match &file.content {
            Some(content) if !file.truncated => Ok(content.clone().into_bytes()),
            _ if !file.raw_url.is_empty() => self.raw(&file.raw_url).await,
            _ => Err(Error::Other(format!(
                "file {} of gist {} has neither content nor raw_url",
                file.filename, gist.id
            ))),
        }
    }

    /// Lists public gists of a user, in the order the API returns them.
    ///
    /// Only the first page is fetched.
    pub async fn list_for_user(&self, username: &str) -> Result<Vec<Gist>> {
        check_segment("username", username)?;
        self.http.get(&format!("/users/{}/gists", username)).await
    }

    /// Creates a gist.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let files = LocalFiles::collect(["notes.txt"])?;
    /// let req = CreateGistRequest::new(files.into_contents(), "scratch", Visibility::Private);
    /// let gist = client.gists().create(&credential, &req).await?;
    /// ```
    pub async fn create(&self, credential: &Credential, req: &CreateGistRequest) -> Result<Gist> {
        if req.files.is_empty() {
            return Err(Error::Config("a gist needs at least one file".to_string()));
        }
        self.http.send("POST", "/gists", req, credential).await
    }

    /// Edits a gist. The description is replaced when set and each listed
    /// file is written, renamed or, when `None`, deleted.
    pub async fn edit(
        &self,
        credential: &Credential,
        id: &str,
        req: &EditGistRequest,
    ) -> Result<Gist> {
        check_segment("gist id", id)?;
        self.http
            .send("PATCH", &format!("/gists/{}", id), req, credential)
            .await
    }

    /// Downloads raw file content without decoding it.
    pub async fn raw(&self, raw_url: &str) -> Result<Vec<u8>> {
        self.http.get_bytes(raw_url).await
    }
}

/// Rejects values that would change the request path.
fn check_segment(what: &'static str, value: &str) -> Result<()> {
    let malformed = value.is_empty()
        || value
            .chars()
            .any(|c| c.is_whitespace() || matches!(c, '/' | '?' | '#' | '%'));
    if malformed {
        return Err(Error::InvalidArgument {
            what,
            value: value.to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_segment() {
        assert!(check_segment("gist id", "0ba2b2a39f8f66caa5630549239f35a2").is_ok());
        assert!(check_segment("username", "snowman-under-water").is_ok());
        assert!(check_segment("gist id", "").unwrap_err().is_validation());
        assert!(check_segment("username", "../admin").unwrap_err().is_bad_reference());
        assert!(check_segment("username", "a b").is_err());
        assert!(check_segment("gist id", "abc?x=1").is_err());
    }
}
