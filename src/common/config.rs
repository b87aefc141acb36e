// src/common/config.rs
//! Server configuration from the environment, with a CLI override for the port

use std::env;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use tracing::{info, warn};

pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_MAX_BODY_BYTES: usize = 64 * 1024;
const DEFAULT_CORS_ORIGINS: &str = "http://localhost:3000,http://localhost:5173";

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: IpAddr,
    pub port: u16,
    pub cors_origins: Vec<String>,
    pub max_body_bytes: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: DEFAULT_PORT,
            cors_origins: split_origins(DEFAULT_CORS_ORIGINS),
            max_body_bytes: DEFAULT_MAX_BODY_BYTES,
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from any key lookup. Unparseable values fall back to the default
    /// with a warning instead of aborting startup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let host = parse_or_default(&lookup, "HOST", defaults.host);
        let port = parse_or_default(&lookup, "PORT", defaults.port);
        let max_body_bytes = parse_or_default(&lookup, "MAX_BODY_BYTES", defaults.max_body_bytes);
        let cors_origins = lookup("CORS_ORIGINS")
            .map(|raw| split_origins(&raw))
            .unwrap_or(defaults.cors_origins);

        Self {
            host,
            port,
            cors_origins,
            max_body_bytes,
        }
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

fn parse_or_default<F, T>(lookup: &F, key: &str, default: T) -> T
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr + std::fmt::Display,
{
    match lookup(key) {
        Some(raw) => match raw.trim().parse() {
            Ok(value) => value,
            Err(_) => {
                warn!(key, value = %raw, default = %default, "Ignoring unparseable setting");
                default
            }
        },
        None => default,
    }
}

fn split_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|origin| origin.trim().to_string())
        .filter(|origin| !origin.is_empty())
        .collect()
}

/// Log the effective configuration on startup
pub fn log_config_status(config: &ServerConfig) {
    info!(
        addr = %config.socket_addr(),
        max_body_bytes = config.max_body_bytes,
        cors_origins = ?config.cors_origins,
        "Server configuration loaded"
    );
}

/// Find `--port <n>` or `--port=<n>` in an argument list
pub fn parse_port_arg<I, S>(args: I) -> Option<u16>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut args = args.into_iter();
    while let Some(arg) = args.next() {
        let arg = arg.as_ref();
        if let Some(value) = arg.strip_prefix("--port=") {
            return value.parse().ok();
        }
        if arg == "--port" {
            return args.next().and_then(|value| value.as_ref().parse().ok());
        }
    }
    None
}

/// Override the port from CLI args
pub fn apply_cli_override(mut config: ServerConfig) -> ServerConfig {
    if let Some(port) = parse_port_arg(env::args().skip(1)) {
        info!(port, "CLI override: PORT");
        config.port = port;
    }

    config
}
