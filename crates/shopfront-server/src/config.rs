//! Command-line and environment configuration.
//!
//! Every flag falls back to an environment variable, then to a default, so
//! the server runs unconfigured in development and is fully driven by the
//! environment in deployment.

use crate::logging::{LogFormat, LogSettings};
use clap::Parser;
use std::path::PathBuf;

/// Secondary development origin always allowed alongside the frontend URL.
pub const EXTRA_DEV_ORIGIN: &str = "http://localhost:3001";

/// Shopfront catalog server.
#[derive(Debug, Clone, Parser)]
#[command(name = "shopfront", version, about = "Serve the product catalog as a read-only JSON API")]
pub struct Config {
    /// Port to listen on.
    #[arg(long, env = "PORT", default_value_t = 8080)]
    pub port: u16,

    /// Host to bind. Empty binds all interfaces.
    #[arg(long, env = "HOST", default_value = "")]
    pub host: String,

    /// Frontend origin allowed by CORS.
    #[arg(long, env = "FRONTEND_URL", default_value = "http://localhost:3000")]
    pub frontend_url: String,

    /// JSON file with the catalog seed. Uses the built-in sample when unset.
    #[arg(long, env = "CATALOG_PATH")]
    pub catalog: Option<PathBuf>,

    /// Log filter directive, e.g. `info` or `shopfront_server=debug`.
    #[arg(long, env = "LOG_LEVEL", default_value = "info")]
    pub log_level: String,

    /// Log output format.
    #[arg(long, env = "LOG_FORMAT", value_enum, default_value_t = LogFormat::Text)]
    pub log_format: LogFormat,

    /// Deployment environment; `development` enables colored text logs.
    #[arg(long = "env", env = "ENV", default_value = "production")]
    pub environment: String,

    /// Allow ANSI colors in text logs (development only).
    #[arg(long, env = "LOG_COLORS", default_value_t = true, action = clap::ArgAction::Set)]
    pub log_colors: bool,
}

impl Config {
    /// `host:port` to bind, using all interfaces when no host is set.
    pub fn server_address(&self) -> String {
        let host = self.host.trim();
        if host.is_empty() {
            format!("0.0.0.0:{}", self.port)
        } else {
            format!("{host}:{}", self.port)
        }
    }

    /// Origins allowed by CORS, without duplicates.
    pub fn allowed_origins(&self) -> Vec<String> {
        let mut origins = vec![self.frontend_url.trim().to_string()];
        if !origins.iter().any(|o| o == EXTRA_DEV_ORIGIN) {
            origins.push(EXTRA_DEV_ORIGIN.to_string());
        }
        origins.retain(|o| !o.is_empty());
        origins
    }

    pub fn log_settings(&self) -> LogSettings {
        let development = self.environment.eq_ignore_ascii_case("development");
        LogSettings {
            level: self.log_level.clone(),
            format: self.log_format,
            ansi: development && self.log_colors,
        }
    }
}
