//! HTTP client implementation for the Gists API.

use std::time::Duration;

use reqwest::{
    header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION, USER_AGENT},
    Client as ReqwestClient, RequestBuilder, Response,
};
use serde::{de::DeserializeOwned, Deserialize, Serialize};

use super::{
    credential::Credential,
    error::{Error, Result},
};

const GITHUB_JSON: &str = "application/vnd.github+json";
const API_VERSION_HEADER: &str = "x-github-api-version";
const API_VERSION: &str = "2022-11-28";

/// HTTP client for the Gists API.
pub struct HttpClient {
    client: ReqwestClient,
    base_url: String,
}

impl HttpClient {
    /// Creates a new HTTP client.
    pub fn new(base_url: String, user_agent: &str, timeout: Duration) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static(GITHUB_JSON));
        headers.insert(API_VERSION_HEADER, HeaderValue::from_static(API_VERSION));
        headers.insert(
            USER_AGENT,
            HeaderValue::from_str(user_agent).map_err(|e| Error::Config(e.to_string()))?,
        );

        let client = ReqwestClient::builder()
            .default_headers(headers)
            .timeout(timeout)
            .build()?;

        Ok(Self { client, base_url })
    }

    /// Returns the base URL requests are resolved against.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Makes an anonymous GET request and decodes the JSON response.
    pub async fn get<R>(&self, path: &str) -> Result<R>
    where
        R: DeserializeOwned,
    {
        let request = self.build("GET", path)?;
        self.execute("GET", path, request).await
    }

    /// Makes an authorized request with a JSON body.
    pub async fn send<T, R>(
        &self,
        method: &str,
        path: &str,
        body: &T,
        credential: &Credential,
    ) -> Result<R>
    where
        T: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let auth = HeaderValue::from_str(&credential.authorization())
            .map_err(|_| Error::Config("token contains invalid header characters".to_string()))?;

        let request = self
            .build(method, path)?
            .header(AUTHORIZATION, auth)
            .json(body);

        self.execute(method, path, request).await
    }

    /// Downloads a URL as bytes. Used for raw file content.
    pub async fn get_bytes(&self, url: &str) -> Result<Vec<u8>> {
        tracing::debug!(url, "GET raw");
        let response = self.client.get(url).send().await?;
        let status = response.status();
        let body = response.bytes().await?;

        if !status.is_success() {
            return Err(parse_error(&body, status.as_u16()));
        }

        Ok(body.to_vec())
    }

    fn build(&self, method: &str, path: &str) -> Result<RequestBuilder> {
        let url = format!("{}{}", self.base_url, path);

        let request = match method {
            "GET" => self.client.get(&url),
            "POST" => self.client.post(&url),
            "PATCH" => self.client.patch(&url),
            "DELETE" => self.client.delete(&url),
            _ => return Err(Error::Other(format!("unsupported method: {}", method))),
        };

        Ok(request)
    }

    async fn execute<R>(&self, method: &str, path: &str, request: RequestBuilder) -> Result<R>
    where
        R: DeserializeOwned,
    {
        tracing::debug!(method, path, "sending request");
        let response = request.send().await?;
        tracing::debug!(method, path, status = response.status().as_u16(), "received response");
        handle_response(response).await
    }
}

/// Decodes a successful response, or turns the body into an API error.
async fn handle_response<R>(response: Response) -> Result<R>
where
    R: DeserializeOwned,
{
    let status = response.status();
    let body = response.bytes().await?;

    if !status.is_success() {
        return Err(parse_error(&body, status.as_u16()));
    }

    serde_json::from_slice(&body).map_err(Error::from)
}

/// Error body returned by the GitHub API.
#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    message: String,
    #[serde(default)]
    documentation_url: Option<String>,
}

fn parse_error(body: &[u8], status: u16) -> Error {
    if let Ok(err) = serde_json::from_slice::<ApiErrorBody>(body) {
        return Error::Api {
            status,
            message: err.message,
            documentation_url: err.documentation_url,
        };
    }

    let text = String::from_utf8_lossy(body);
    let message = if text.trim().is_empty() {
        format!("request failed with status {}", status)
    } else {
        text.trim().to_string()
    };
    Error::api(status, message)
}
