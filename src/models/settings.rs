// SPDX-License-Identifier: BSD-3-Clause
// Copyright (c) 2026 Aleksandr Ptakhin

use std::env;
use std::net::SocketAddr;
use thiserror::Error;

/// Environment variable holding the web UI listen address
pub const BIND_ENV: &str = "SEO_CHECKER_BIND";

/// Bind to all interfaces by default (required for Docker)
pub const DEFAULT_BIND: &str = "0.0.0.0:3000";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SettingsError {
    #[error("{name} must be a socket address like 127.0.0.1:3000, got: {value}")]
    InvalidAddress { name: &'static str, value: String },
}

/// Settings for `seo-checker serve`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerSettings {
    pub bind: SocketAddr,
}

impl ServerSettings {
    /// Resolve settings from an explicit `--bind` value, then `SEO_CHECKER_BIND`,
    /// then the default.
    pub fn resolve(cli_bind: Option<&str>) -> Result<Self, SettingsError> {
        let from_env = env::var(BIND_ENV).ok();
        let (name, value) = match (cli_bind, from_env.as_deref()) {
            (Some(value), _) => ("--bind", value),
            (None, Some(value)) => (BIND_ENV, value),
            (None, None) => ("default bind", DEFAULT_BIND),
        };
        Self::parse(name, value)
    }

    fn parse(name: &'static str, value: &str) -> Result<Self, SettingsError> {
        value
            .trim()
            .parse::<SocketAddr>()
            .map(|bind| Self { bind })
            .map_err(|_| SettingsError::InvalidAddress {
                name,
                value: value.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_address() {
        let settings = ServerSettings::parse("--bind", "127.0.0.1:8080").unwrap();
        assert_eq!(settings.bind, "127.0.0.1:8080".parse().unwrap());
    }

    #[test]
    fn test_parse_invalid_address() {
        let err = ServerSettings::parse("--bind", "localhost").unwrap_err();
        assert_eq!(
            err,
            SettingsError::InvalidAddress {
                name: "--bind",
                value: "localhost".to_string()
            }
        );
        assert!(err.to_string().contains("--bind"));
    }

    #[test]
    fn test_cli_value_wins() {
        let settings = ServerSettings::resolve(Some("127.0.0.1:4000")).unwrap();
        assert_eq!(settings.bind.port(), 4000);
    }

    #[test]
    fn test_default_bind_parses() {
        let settings = ServerSettings::parse("default bind", DEFAULT_BIND).unwrap();
        assert_eq!(settings.bind.port(), 3000);
    }
}
