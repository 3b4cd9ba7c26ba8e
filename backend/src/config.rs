//! Server configuration.
//!
//! The service listens on a fixed port; the struct exists so the binary and
//! the tests build the listener from the same place (tests use port `0`).

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

/// Fixed listening port.
pub const DEFAULT_PORT: u16 = 8080;

/// Value of the `Server` response header.
pub const DEFAULT_SERVER_NAME: &str = "DreamBerd Mathematics";

/// Listener address and response identity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: IpAddr,
    pub port: u16,
    pub server_name: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: DEFAULT_PORT,
            server_name: DEFAULT_SERVER_NAME.to_string(),
        }
    }
}

impl ServerConfig {
    /// Config bound to an ephemeral port on loopback.
    pub fn loopback_ephemeral() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::LOCALHOST),
            port: 0,
            ..Default::default()
        }
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}
