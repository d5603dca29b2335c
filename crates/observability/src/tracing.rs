//! Tracing/logging initialization.
//!
//! Configured from the environment:
//! - `RUST_LOG`: filter directives (default `info`)
//! - `LOG_FORMAT`: `json` (default), `pretty` or `compact`

use core::str::FromStr;

use anyhow::{Context, anyhow, bail};
use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "info";

/// Output format of the fmt subscriber.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Json,
    Pretty,
    Compact,
}

impl FromStr for LogFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "pretty" => Ok(Self::Pretty),
            "compact" => Ok(Self::Compact),
            other => bail!("unknown log format {other:?} (expected json, pretty or compact)"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TracingConfig {
    pub filter: String,
    pub format: LogFormat,
}

impl Default for TracingConfig {
    fn default() -> Self {
        Self {
            filter: DEFAULT_FILTER.to_string(),
            format: LogFormat::default(),
        }
    }
}

impl TracingConfig {
    /// Read `RUST_LOG` / `LOG_FORMAT` from the process environment.
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the config from an arbitrary variable lookup.
    ///
    /// Both variables are validated here, so a config returned as `Ok` only
    /// fails to install when a subscriber is already set.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let filter = lookup("RUST_LOG")
            .filter(|f| !f.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_FILTER.to_string());

        let format = match lookup("LOG_FORMAT") {
            Some(raw) => raw.parse().context("invalid LOG_FORMAT")?,
            None => LogFormat::default(),
        };

        let config = Self { filter, format };
        config.env_filter().context("invalid RUST_LOG")?;
        Ok(config)
    }

    fn env_filter(&self) -> anyhow::Result<EnvFilter> {
        EnvFilter::try_new(&self.filter)
            .with_context(|| format!("invalid tracing filter {:?}", self.filter))
    }

    /// Install the global subscriber. Fails if one is already installed.
    pub fn try_init(&self) -> anyhow::Result<()> {
        let filter = self.env_filter()?;
        let builder = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_timer(tracing_subscriber::fmt::time::SystemTime)
            .with_target(false);

        let installed = match self.format {
            LogFormat::Json => builder.json().try_init(),
            LogFormat::Pretty => builder.pretty().try_init(),
            LogFormat::Compact => builder.compact().try_init(),
        };

        installed
            .map_err(|err| anyhow!(err))
            .context("installing global tracing subscriber")
    }
}

/// Initialize tracing/logging for the process.
///
/// Safe to call multiple times (subsequent calls are no-ops). A malformed
/// `RUST_LOG` or `LOG_FORMAT` falls back to the defaults, with a warning once
/// the subscriber is up.
pub fn init() {
    let (config, config_error) = match TracingConfig::from_env() {
        Ok(config) => (config, None),
        Err(err) => (TracingConfig::default(), Some(err)),
    };

    if config.try_init().is_ok() {
        if let Some(err) = config_error {
            ::tracing::warn!(error = %format!("{err:#}"), "ignoring tracing configuration from environment");
        }
    }
}
