//! HTTP client for fetching listing pages
//!
//! Provides a client that:
//! - Attaches one preformatted credential header to every request
//! - Trusts only the configured trust anchor (no system roots)
//! - Streams each response body into a fresh [`ByteSink`]
//! - Surfaces transport failures only; status codes pass through

use super::sink::ByteSink;
use crate::error::{Error, Result};
use async_trait::async_trait;
use reqwest::header::{HeaderName, HeaderValue};
use reqwest::redirect::Policy;
use reqwest::{Certificate, Client};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, warn};
use url::Url;

/// Configuration for the HTTP client
#[derive(Debug, Clone)]
pub struct HttpClientConfig {
    /// Request timeout, covering connect and body transfer
    pub timeout: Duration,
    /// User agent string
    pub user_agent: String,
    /// Credential header line, `"<header-name>:<token>"`
    pub credential: Option<String>,
    /// PEM file holding the only certificate(s) trusted for TLS
    pub trust_anchor: Option<PathBuf>,
}

impl Default for HttpClientConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
            user_agent: format!("sp-mo-listing/{}", env!("CARGO_PKG_VERSION")),
            credential: None,
            trust_anchor: None,
        }
    }
}

impl HttpClientConfig {
    /// Create a new config builder
    pub fn builder() -> HttpClientConfigBuilder {
        HttpClientConfigBuilder::default()
    }
}

/// Builder for HTTP client config
#[derive(Default)]
pub struct HttpClientConfigBuilder {
    config: HttpClientConfig,
}

impl HttpClientConfigBuilder {
    /// Set the request timeout
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = timeout;
        self
    }

    /// Set user agent
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.config.user_agent = agent.into();
        self
    }

    /// Set the credential header line
    pub fn credential(mut self, header_line: impl Into<String>) -> Self {
        self.config.credential = Some(header_line.into());
        self
    }

    /// Pin TLS trust to the certificate(s) in this PEM file
    pub fn trust_anchor(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.trust_anchor = Some(path.into());
        self
    }

    /// Build the config
    pub fn build(self) -> HttpClientConfig {
        self.config
    }
}

/// A parsed `"<header-name>:<token>"` credential line
#[derive(Debug, Clone)]
pub struct CredentialHeader {
    name: HeaderName,
    value: HeaderValue,
}

impl CredentialHeader {
    /// Parse a header line of the form `Name:value`.
    ///
    /// Whitespace around the value is trimmed, as an HTTP header line would be.
    pub fn parse(line: &str) -> Result<Self> {
        let (name, value) = line
            .split_once(':')
            .ok_or_else(|| Error::invalid_value("api_token", "expected '<header-name>:<token>'"))?;

        let name = HeaderName::from_bytes(name.trim().as_bytes())
            .map_err(|e| Error::invalid_value("api_token", format!("bad header name: {e}")))?;
        let mut value = HeaderValue::from_str(value.trim())
            .map_err(|e| Error::invalid_value("api_token", format!("bad header value: {e}")))?;
        value.set_sensitive(true);

        Ok(Self { name, value })
    }

    /// Header name
    pub fn name(&self) -> &HeaderName {
        &self.name
    }

    /// Header value
    pub fn value(&self) -> &HeaderValue {
        &self.value
    }
}

/// Source of raw page bodies.
///
/// The listing driver only needs "give me the bytes behind this URL";
/// [`HttpClient`] is the production implementation.
#[async_trait]
pub trait PageFetcher: Send + Sync {
    /// Perform exactly one fetch of `url` and return its body
    async fn fetch(&self, url: &str) -> Result<ByteSink>;
}

/// HTTP client for listing pages
pub struct HttpClient {
    client: Client,
    config: HttpClientConfig,
    credential: Option<CredentialHeader>,
}

impl HttpClient {
    /// Create a client with the given configuration.
    ///
    /// Built-in root certificates are always disabled; when no trust anchor
    /// is configured, every TLS handshake fails and only plain HTTP works.
    pub fn with_config(config: HttpClientConfig) -> Result<Self> {
        let credential = config
            .credential
            .as_deref()
            .map(CredentialHeader::parse)
            .transpose()?;

        let mut builder = Client::builder()
            .timeout(config.timeout)
            .user_agent(&config.user_agent)
            .redirect(Policy::none())
            .tls_built_in_root_certs(false);

        if let Some(path) = &config.trust_anchor {
            let certs = load_trust_anchor(path)?;
            debug!("Pinned {} trust anchor(s) from {}", certs.len(), path.display());
            for cert in certs {
                builder = builder.add_root_certificate(cert);
            }
        }

        let client = builder.build()?;

        Ok(Self {
            client,
            config,
            credential,
        })
    }

    /// Get the client configuration
    pub fn config(&self) -> &HttpClientConfig {
        &self.config
    }

    /// Fetch one page and stream its body into a new sink
    pub async fn get_page(&self, url: &str) -> Result<ByteSink> {
        let url = Url::parse(url)?;

        let mut req = self.client.get(url.clone());
        if let Some(credential) = &self.credential {
            req = req.header(credential.name().clone(), credential.value().clone());
        }

        let mut response = req.send().await?;
        let status = response.status();
        if status.is_success() {
            debug!("GET {} -> {}", url, status.as_u16());
        } else {
            warn!("GET {} returned HTTP {}, passing body to decoder", url, status);
        }

        let mut sink = ByteSink::new();

        while let Some(chunk) = response.chunk().await? {
            sink.append(&chunk)?;
        }

        debug!("Read {} bytes from {}", sink.len(), url);
        Ok(sink)
    }
}

#[async_trait]
impl PageFetcher for HttpClient {
    async fn fetch(&self, url: &str) -> Result<ByteSink> {
        self.get_page(url).await
    }
}

impl std::fmt::Debug for HttpClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpClient")
            .field("timeout", &self.config.timeout)
            .field("trust_anchor", &self.config.trust_anchor)
            .field("has_credential", &self.credential.is_some())
            .finish_non_exhaustive()
    }
}

/// Read the PEM trust anchor bundle from disk.
///
/// Every certificate in the file becomes a root; a file with none is an error.
fn load_trust_anchor(path: &Path) -> Result<Vec<Certificate>> {
    let pem = std::fs::read(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            Error::FileNotFound {
                path: path.display().to_string(),
            }
        } else {
            Error::trust_anchor(path.display().to_string(), e.to_string())
        }
    })?;

    let certs = Certificate::from_pem_bundle(&pem)
        .map_err(|e| Error::trust_anchor(path.display().to_string(), e.to_string()))?;
    if certs.is_empty() {
        return Err(Error::trust_anchor(
            path.display().to_string(),
            "no certificates found",
        ));
    }
    Ok(certs)
}
