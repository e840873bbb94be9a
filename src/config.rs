//! Listing configuration
//!
//! Settings come from three layers, lowest precedence first: built-in
//! defaults, an optional YAML file, and command-line flags.
//!
//! ```yaml
//! url: https://leader.example.com/api/sp/managed_objects/?perPage=15
//! api_token: "X-Arbux-APIToken:eFvokphdyGHA_M4oLlLtfDnlIf9bpjFnn0mWlDqw"
//! cert_file: ./certfile
//! timeout_secs: 30
//! format: table
//! ```

use crate::error::{Error, Result, ResultExt};
use crate::http::{CredentialHeader, HttpClientConfig};
use crate::output::OutputFormat;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Complete listing configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ListingConfig {
    /// First page of the managed-object listing
    #[serde(default)]
    pub url: Option<String>,

    /// Credential header line, `"<header-name>:<token>"`
    #[serde(default)]
    pub api_token: Option<String>,

    /// PEM trust anchor for the API's TLS certificate
    #[serde(default = "default_cert_file")]
    pub cert_file: PathBuf,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// User agent override
    #[serde(default)]
    pub user_agent: Option<String>,

    /// Report format
    #[serde(default)]
    pub format: OutputFormat,
}

fn default_cert_file() -> PathBuf {
    PathBuf::from("./certfile")
}

fn default_timeout_secs() -> u64 {
    30
}

impl Default for ListingConfig {
    fn default() -> Self {
        Self {
            url: None,
            api_token: None,
            cert_file: default_cert_file(),
            timeout_secs: default_timeout_secs(),
            user_agent: None,
            format: OutputFormat::default(),
        }
    }
}

/// Values supplied on the command line; `None` leaves the file value alone
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub url: Option<String>,
    pub api_token: Option<String>,
    pub cert_file: Option<PathBuf>,
    pub timeout_secs: Option<u64>,
    pub format: Option<OutputFormat>,
}

impl ListingConfig {
    /// Parse a YAML config document
    pub fn from_yaml(content: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(content)?)
    }

    /// Load a YAML config file
    pub fn from_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(Error::FileNotFound {
                path: path.display().to_string(),
            });
        }
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        Self::from_yaml(&content)
    }

    /// Apply command-line overrides
    #[must_use]
    pub fn with_overrides(mut self, overrides: ConfigOverrides) -> Self {
        if let Some(url) = overrides.url {
            self.url = Some(url);
        }
        if let Some(token) = overrides.api_token {
            self.api_token = Some(token);
        }
        if let Some(cert_file) = overrides.cert_file {
            self.cert_file = cert_file;
        }
        if let Some(timeout) = overrides.timeout_secs {
            self.timeout_secs = timeout;
        }
        if let Some(format) = overrides.format {
            self.format = format;
        }
        self
    }

    /// Check that the config is complete and well-formed
    pub fn validate(&self) -> Result<()> {
        let url = self.url.as_deref().ok_or_else(|| Error::missing_config("url"))?;
        let parsed = url::Url::parse(url)?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(Error::invalid_value(
                "url",
                format!("unsupported scheme '{}'", parsed.scheme()),
            ));
        }

        let token = self
            .api_token
            .as_deref()
            .ok_or_else(|| Error::missing_config("api_token"))?;
        CredentialHeader::parse(token)?;

        if self.timeout_secs == 0 {
            return Err(Error::invalid_value("timeout_secs", "must be greater than 0"));
        }

        Ok(())
    }

    /// Starting URL; call [`validate`](Self::validate) first
    pub fn start_url(&self) -> Result<&str> {
        self.url.as_deref().ok_or_else(|| Error::missing_config("url"))
    }

    /// Build the HTTP client configuration
    pub fn http_config(&self) -> HttpClientConfig {
        let mut builder = HttpClientConfig::builder()
            .timeout(Duration::from_secs(self.timeout_secs))
            .trust_anchor(self.cert_file.clone());
        if let Some(token) = &self.api_token {
            builder = builder.credential(token);
        }
        if let Some(agent) = &self.user_agent {
            builder = builder.user_agent(agent);
        }
        builder.build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const TOKEN: &str = "X-Arbux-APIToken:eFvokphdyGHA_M4oLlLtfDnlIf9bpjFnn0mWlDqw";

    fn valid() -> ListingConfig {
        ListingConfig {
            url: Some("https://leader.example.com/api/sp/managed_objects/?perPage=15".into()),
            api_token: Some(TOKEN.into()),
            ..ListingConfig::default()
        }
    }

    #[test]
    fn test_defaults() {
        let config = ListingConfig::default();
        assert_eq!(config.cert_file, PathBuf::from("./certfile"));
        assert_eq!(config.timeout_secs, 30);
        assert_eq!(config.format, OutputFormat::Table);
        assert!(config.url.is_none());
    }

    #[test]
    fn test_from_yaml() {
        let yaml = r#"
url: https://leader.example.com/api/sp/managed_objects/?perPage=50
api_token: "X-Arbux-APIToken:abc"
cert_file: /etc/sp/ca.pem
timeout_secs: 10
format: json
"#;
        let config = ListingConfig::from_yaml(yaml).unwrap();
        assert_eq!(
            config.url.as_deref(),
            Some("https://leader.example.com/api/sp/managed_objects/?perPage=50")
        );
        assert_eq!(config.api_token.as_deref(), Some("X-Arbux-APIToken:abc"));
        assert_eq!(config.cert_file, PathBuf::from("/etc/sp/ca.pem"));
        assert_eq!(config.timeout_secs, 10);
        assert_eq!(config.format, OutputFormat::Json);
    }

    #[test]
    fn test_from_yaml_partial_uses_defaults() {
        let config = ListingConfig::from_yaml("url: https://a.example.com/\n").unwrap();
        assert_eq!(config.timeout_secs, 30);
        assert_eq!(config.cert_file, PathBuf::from("./certfile"));
    }

    #[test]
    fn test_from_yaml_unknown_field() {
        let result = ListingConfig::from_yaml("urll: https://a.example.com/\n");
        assert!(matches!(result, Err(Error::YamlParse(_))));
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "url: https://a.example.com/").unwrap();
        writeln!(file, "api_token: \"X-Token:t\"").unwrap();

        let config = ListingConfig::from_file(file.path()).unwrap();
        assert_eq!(config.api_token.as_deref(), Some("X-Token:t"));
    }

    #[test]
    fn test_from_file_missing() {
        let result = ListingConfig::from_file(Path::new("/nonexistent/listing.yaml"));
        assert!(matches!(result, Err(Error::FileNotFound { .. })));
    }

    #[test]
    fn test_overrides_take_precedence() {
        let config = valid().with_overrides(ConfigOverrides {
            url: Some("https://other.example.com/".into()),
            cert_file: Some(PathBuf::from("/tmp/ca.pem")),
            timeout_secs: Some(5),
            format: Some(OutputFormat::Json),
            ..ConfigOverrides::default()
        });

        assert_eq!(config.url.as_deref(), Some("https://other.example.com/"));
        assert_eq!(config.api_token.as_deref(), Some(TOKEN));
        assert_eq!(config.cert_file, PathBuf::from("/tmp/ca.pem"));
        assert_eq!(config.timeout_secs, 5);
        assert_eq!(config.format, OutputFormat::Json);
    }

    #[test]
    fn test_validate_ok() {
        valid().validate().unwrap();
    }

    #[test]
    fn test_validate_missing_url() {
        let config = ListingConfig {
            url: None,
            ..valid()
        };
        assert!(matches!(
            config.validate(),
            Err(Error::MissingConfigField { field }) if field == "url"
        ));
    }

    #[test]
    fn test_validate_bad_url() {
        let config = ListingConfig {
            url: Some("leader.example.com/api".into()),
            ..valid()
        };
        assert!(matches!(config.validate(), Err(Error::InvalidUrl(_))));

        let config = ListingConfig {
            url: Some("ftp://leader.example.com/api".into()),
            ..valid()
        };
        assert!(matches!(
            config.validate(),
            Err(Error::InvalidConfigValue { .. })
        ));
    }

    #[test]
    fn test_validate_bad_token() {
        let config = ListingConfig {
            api_token: Some("just-a-token".into()),
            ..valid()
        };
        assert!(matches!(
            config.validate(),
            Err(Error::InvalidConfigValue { .. })
        ));

        let config = ListingConfig {
            api_token: None,
            ..valid()
        };
        assert!(matches!(
            config.validate(),
            Err(Error::MissingConfigField { .. })
        ));
    }

    #[test]
    fn test_validate_zero_timeout() {
        let config = ListingConfig {
            timeout_secs: 0,
            ..valid()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_http_config() {
        let config = ListingConfig {
            user_agent: Some("mo-listing-test".into()),
            timeout_secs: 7,
            ..valid()
        };
        let http = config.http_config();
        assert_eq!(http.timeout, Duration::from_secs(7));
        assert_eq!(http.credential.as_deref(), Some(TOKEN));
        assert_eq!(http.trust_anchor, Some(PathBuf::from("./certfile")));
        assert_eq!(http.user_agent, "mo-listing-test");
    }
}
