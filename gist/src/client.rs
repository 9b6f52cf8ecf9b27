//! Gists API client.

use std::sync::Arc;
use std::time::Duration;

use super::{
    error::{Error, Result},
    gist::GistService,
    http::HttpClient,
};

/// Default GitHub REST API base URL.
pub const DEFAULT_BASE_URL: &str = "https://api.github.com";

/// Default per-request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// User agent sent with every request. GitHub rejects requests without one.
pub const DEFAULT_USER_AGENT: &str = concat!("gistkit-gist-rust/", env!("CARGO_PKG_VERSION"));

/// Gists API client.
///
/// # Example
///
/// ```rust,ignore
/// use gistkit_gist::Client;
///
/// let client = Client::new()?;
/// let content = client.gists().primary_content("0ba2b2a39f8f66caa5630549239f35a2").await?;
/// ```
pub struct Client {
    http: Arc<HttpClient>,
    config: ClientConfig,
}

#[derive(Clone)]
struct ClientConfig {
    base_url: String,
    timeout: Duration,
}

impl Client {
    /// Creates a client against the public GitHub API.
    pub fn new() -> Result<Self> {
        ClientBuilder::new().build()
    }

    /// Creates a new client builder for more configuration options.
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    /// Returns the configured base URL.
    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    /// Returns the configured request timeout.
    pub fn timeout(&self) -> Duration {
        self.config.timeout
    }

    /// Returns the gist service.
    pub fn gists(&self) -> GistService {
        GistService::new(self.http.clone())
    }

    /// Returns a reference to the internal HTTP client.
    pub fn http(&self) -> &Arc<HttpClient> {
        &self.http
    }
}

/// Builder for creating a Gists API client.
pub struct ClientBuilder {
    base_url: String,
    timeout: Duration,
    user_agent: String,
}

impl Default for ClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ClientBuilder {
    /// Creates a new client builder.
    pub fn new() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }

    /// Sets a custom base URL, e.g. a GitHub Enterprise API root or a test server.
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Sets the timeout applied to every request.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Sets the User-Agent header value.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Builds the client.
    pub fn build(self) -> Result<Client> {
        if self.base_url.is_empty() {
            return Err(Error::Config("base_url must be non-empty".to_string()));
        }
        if self.timeout.is_zero() {
            return Err(Error::Config("timeout must be greater than zero".to_string()));
        }

        let base_url = self.base_url.trim_end_matches('/').to_string();
        let http = HttpClient::new(base_url.clone(), &self.user_agent, self.timeout)?;

        Ok(Client {
            http: Arc::new(http),
            config: ClientConfig {
                base_url,
                timeout: self.timeout,
            },
        })
    }
}
