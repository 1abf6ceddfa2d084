//! Application configuration management

use std::env;
use std::net::{IpAddr, SocketAddr};

use anyhow::{Context, Result};

/// Application configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    /// Interface to bind
    pub host: String,

    /// Server port
    pub port: u16,

    /// Serve the GraphiQL console on GET /graphql
    pub graphiql_enabled: bool,

    /// Start with the demo authors and films
    pub seed_data: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 5000,
            graphiql_enabled: true,
            seed_data: true,
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_vars(|key| env::var(key).ok())
    }

    /// Load configuration from an arbitrary variable source
    pub fn from_vars<F>(var: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        Ok(Self {
            host: var("HOST").unwrap_or(defaults.host),

            port: match var("PORT") {
                Some(port) => port.parse().context("Invalid PORT")?,
                None => defaults.port,
            },

            graphiql_enabled: var("GRAPHIQL_ENABLED")
                .map(|v| v == "true" || v == "1")
                .unwrap_or(defaults.graphiql_enabled),

            seed_data: var("SEED_DATA")
                .map(|v| v == "true" || v == "1")
                .unwrap_or(defaults.seed_data),
        })
    }

    /// Socket address the server listens on
    pub fn bind_addr(&self) -> Result<SocketAddr> {
        let ip: IpAddr = self
            .host
            .parse()
            .with_context(|| format!("Invalid HOST: {}", self.host))?;
        Ok(SocketAddr::new(ip, self.port))
    }
}
