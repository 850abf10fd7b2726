//! Server configuration from the environment

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;

use anyhow::Context;

pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_WEB_ROOT: &str = "web";
pub const DEFAULT_PING_MESSAGE: &str = "ping";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: IpAddr,
    pub port: u16,
    /// Directory holding the built single-page app
    pub web_root: PathBuf,
    /// Body of `GET /api/ping`
    pub ping_message: String,
    /// Send `Cross-Origin-Embedder-Policy: require-corp`
    ///
    /// Off by default: it blocks article images and the relay SDK, which are
    /// served cross-origin without CORP headers.
    pub isolation: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::LOCALHOST),
            port: DEFAULT_PORT,
            web_root: PathBuf::from(DEFAULT_WEB_ROOT),
            ping_message: DEFAULT_PING_MESSAGE.to_string(),
            isolation: false,
        }
    }
}

impl ServerConfig {
    /// Read `PORT`, `HOST`, `WEB_ROOT`, `PING_MESSAGE` and `CROSS_ORIGIN_ISOLATION`
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key/value source; unset keys keep their defaults
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let mut config = Self::default();

        if let Some(port) = lookup("PORT") {
            config.port = port
                .trim()
                .parse()
                .with_context(|| format!("PORT must be a port number, got {port:?}"))?;
        }
        if let Some(host) = lookup("HOST") {
            config.host = host
                .trim()
                .parse()
                .with_context(|| format!("HOST must be an IP address, got {host:?}"))?;
        }
        if let Some(root) = lookup("WEB_ROOT").filter(|r| !r.is_empty()) {
            config.web_root = PathBuf::from(root);
        }
        if let Some(message) = lookup("PING_MESSAGE") {
            config.ping_message = message;
        }
        if let Some(flag) = lookup("CROSS_ORIGIN_ISOLATION") {
            config.isolation = matches!(flag.trim(), "1" | "true" | "yes" | "on");
        }

        Ok(config)
    }

    pub fn addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}
