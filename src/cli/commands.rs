//! CLI arguments

use crate::config::ConfigOverrides;
use crate::output::OutputFormat;
use clap::Parser;
use std::path::PathBuf;
use tracing::Level;
use tracing_subscriber::EnvFilter;

/// List SP managed objects as a fixed-width table
#[derive(Parser, Debug)]
#[command(name = "mo-listing")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Configuration file (YAML)
    #[arg(short = 'C', long)]
    pub config: Option<PathBuf>,

    /// First page of the managed-object listing
    #[arg(short, long)]
    pub url: Option<String>,

    /// Credential header line, e.g. "X-Arbux-APIToken:<token>"
    #[arg(short = 't', long)]
    pub api_token: Option<String>,

    /// PEM file with the certificate to trust for TLS
    #[arg(long)]
    pub cert_file: Option<PathBuf>,

    /// Request timeout in seconds
    #[arg(long)]
    pub timeout: Option<u64>,

    /// Output format
    #[arg(short, long)]
    pub format: Option<OutputFormat>,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Flags that override config file values
    pub fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            url: self.url.clone(),
            api_token: self.api_token.clone(),
            cert_file: self.cert_file.clone(),
            timeout_secs: self.timeout,
            format: self.format,
        }
    }

    /// Log filter for this run.
    ///
    /// A non-empty, valid `RUST_LOG` wins outright; otherwise everything at
    /// INFO (DEBUG with `--verbose`) and above is logged.
    pub fn log_filter(&self, rust_log: Option<&str>) -> EnvFilter {
        let level = if self.verbose { Level::DEBUG } else { Level::INFO };

        rust_log
            .filter(|directives| !directives.trim().is_empty())
            .and_then(|directives| EnvFilter::try_new(directives).ok())
            .unwrap_or_else(|| EnvFilter::default().add_directive(level.into()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;
    use tracing::level_filters::LevelFilter;

    #[test_case(false, None, LevelFilter::INFO ; "default is info")]
    #[test_case(true, None, LevelFilter::DEBUG ; "verbose is debug")]
    #[test_case(true, Some("warn"), LevelFilter::WARN ; "rust_log beats verbose")]
    #[test_case(false, Some("sp_mo_listing=trace"), LevelFilter::TRACE ; "rust_log target directive")]
    #[test_case(false, Some("  "), LevelFilter::INFO ; "blank rust_log ignored")]
    #[test_case(true, Some("sp_mo_listing=loud"), LevelFilter::DEBUG ; "invalid rust_log falls back")]
    fn test_log_filter(verbose: bool, rust_log: Option<&str>, expected: LevelFilter) {
        let mut args = vec!["mo-listing"];
        if verbose {
            args.push("-v");
        }
        let cli = Cli::parse_from(args);

        assert_eq!(cli.log_filter(rust_log).max_level_hint(), Some(expected));
    }
}
