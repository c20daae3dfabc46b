use std::net::SocketAddr;

const DEFAULT_ADDR: &str = "127.0.0.1:8081";

/// Runtime settings for the development server.
#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    pub addr: SocketAddr,
    /// Start with an empty loan table instead of the seed rows.
    pub empty: bool,
}

impl ServerConfig {
    /// Read `LOAN_SERVER_ADDR` and `LOAN_SERVER_EMPTY`, loading `.env` first
    /// when present. An unparseable address falls back to the default.
    pub fn from_env() -> Self {
        let _ = dotenvy::dotenv();

        let raw_addr = std::env::var("LOAN_SERVER_ADDR").unwrap_or_else(|_| DEFAULT_ADDR.to_string());
        let empty = std::env::var("LOAN_SERVER_EMPTY")
            .map(|v| matches!(v.as_str(), "1" | "true" | "yes"))
            .unwrap_or(false);

        Self {
            addr: parse_addr(&raw_addr),
            empty,
        }
    }
}

fn parse_addr(raw: &str) -> SocketAddr {
    raw.parse().unwrap_or_else(|e| {
        tracing::warn!(value = raw, error = %e, "invalid LOAN_SERVER_ADDR, using {DEFAULT_ADDR}");
        default_addr()
    })
}

fn default_addr() -> SocketAddr {
    SocketAddr::from(([127, 0, 0, 1], 8081))
}
