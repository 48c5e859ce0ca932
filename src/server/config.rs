//! Server configuration from command-line flags and environment variables.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use clap::Parser;

use super::logging::LogFormat;

/// Default listening port.
pub const DEFAULT_PORT: u16 = 3000;

/// Runtime configuration of `cardcheck-server`.
///
/// Every flag falls back to a `CARDCHECK_*` environment variable.
#[derive(Debug, Clone, PartialEq, Eq, Parser)]
#[command(name = "cardcheck-server", version, about = "Card number validation REST API")]
pub struct ServerConfig {
    /// Address to bind
    #[arg(long, env = "CARDCHECK_HOST", default_value_t = IpAddr::V4(Ipv4Addr::UNSPECIFIED))]
    pub host: IpAddr,

    /// Port to listen on
    #[arg(short, long, env = "CARDCHECK_PORT", default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// Log output format
    #[arg(long, env = "CARDCHECK_LOG_FORMAT", value_enum, default_value_t = LogFormat::Pretty)]
    pub log_format: LogFormat,
}

impl ServerConfig {
    /// Returns the socket address to bind.
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: DEFAULT_PORT,
            log_format: LogFormat::Pretty,
        }
    }
}
