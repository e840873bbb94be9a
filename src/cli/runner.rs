//! CLI runner - executes a listing run

use crate::cli::commands::Cli;
use crate::config::ListingConfig;
use crate::error::Result;
use crate::http::HttpClient;
use crate::output::{JsonLinesReport, OutputFormat, TableReport};
use crate::pagination::{ListingDriver, ListingStats};
use tracing::debug;

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Resolve the effective configuration: defaults, then file, then flags
    pub fn load_config(&self) -> Result<ListingConfig> {
        let base = match &self.cli.config {
            Some(path) => ListingConfig::from_file(path)?,
            None => ListingConfig::default(),
        };
        let config = base.with_overrides(self.cli.overrides());
        config.validate()?;
        Ok(config)
    }

    /// Run the listing, writing the report to stdout
    pub async fn run(&self) -> Result<ListingStats> {
        let config = self.load_config()?;
        let start_url = config.start_url()?;
        debug!(
            "Listing from {} (trust anchor {})",
            start_url,
            config.cert_file.display()
        );

        let client = HttpClient::with_config(config.http_config())?;
        let driver = ListingDriver::new(client);
        let stdout = std::io::stdout();

        match config.format {
            OutputFormat::Table => {
                let mut report = TableReport::new(stdout);
                driver.run(start_url, &mut report).await
            }
            OutputFormat::Json => {
                let mut report = JsonLinesReport::new(stdout);
                driver.run(start_url, &mut report).await
            }
        }
    }
}
