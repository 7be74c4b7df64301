use serde::Deserialize;
use std::env;
use std::net::{AddrParseError, SocketAddr};

// Top-level configuration container, populated from the environment
// once at startup.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub app: AppConfig,
    pub booking: BookingConfig,
    pub table: TableConfig,
    pub orders: OrderGatewayConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub environment: String,
    pub rust_log: String,
}

impl AppConfig {
    /// The socket address the server binds, from HOST and PORT.
    pub fn listen_addr(&self) -> Result<SocketAddr, AddrParseError> {
        format!("{}:{}", self.host, self.port).parse()
    }
}

// Knobs for the seat selection flow.
#[derive(Debug, Clone, Deserialize)]
pub struct BookingConfig {
    pub max_seat_selections: usize,
}

// Defaults for the admin data tables.
#[derive(Debug, Clone, Deserialize)]
pub struct TableConfig {
    pub default_page_size: usize,
    pub max_page_size: usize,
}

// Mock order gateway settings.
#[derive(Debug, Clone, Deserialize)]
pub struct OrderGatewayConfig {
    pub latency_ms: u64,
}

impl Config {
    pub fn from_env() -> Self {
        Config {
            app: AppConfig {
                host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
                port: env::var("PORT")
                    .unwrap_or_else(|_| "8000".to_string())
                    .parse()
                    .expect("PORT must be a valid number"),
                environment: env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string()),
                rust_log: env::var("RUST_LOG")
                    .unwrap_or_else(|_| "cinema_system=debug,tower_http=debug".to_string()),
            },
            booking: BookingConfig {
                max_seat_selections: env::var("MAX_SEAT_SELECTIONS")
                    .unwrap_or_else(|_| "10".to_string())
                    .parse()
                    .expect("MAX_SEAT_SELECTIONS must be a valid number"),
            },
            table: TableConfig {
                default_page_size: env::var("DEFAULT_PAGE_SIZE")
                    .unwrap_or_else(|_| "10".to_string())
                    .parse()
                    .expect("DEFAULT_PAGE_SIZE must be a valid number"),
                max_page_size: env::var("MAX_PAGE_SIZE")
                    .unwrap_or_else(|_| "100".to_string())
                    .parse()
                    .expect("MAX_PAGE_SIZE must be a valid number"),
            },
            orders: OrderGatewayConfig {
                latency_ms: env::var("ORDER_GATEWAY_LATENCY_MS")
                    .unwrap_or_else(|_| "300".to_string())
                    .parse()
                    .expect("ORDER_GATEWAY_LATENCY_MS must be a valid number"),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn listen_addr_combines_host_and_port() {
        let config = Config::default();
        let addr = config.app.listen_addr().expect("host and port parse");
        assert_eq!(addr.ip().to_string(), "127.0.0.1");
        assert_eq!(addr.port(), 0);
    }

    #[test]
    fn listen_addr_rejects_a_malformed_host() {
        let mut config = Config::default();
        config.app.host = "not a host".to_string();
        assert!(config.app.listen_addr().is_err());
    }
}

#[cfg(test)]
impl Default for Config {
    /// Test fixture: defaults without touching the process environment.
    fn default() -> Self {
        Config {
            app: AppConfig {
                host: "127.0.0.1".to_string(),
                port: 0,
                environment: "test".to_string(),
                rust_log: "cinema_system=debug".to_string(),
            },
            booking: BookingConfig {
                max_seat_selections: 10,
            },
            table: TableConfig {
                default_page_size: 10,
                max_page_size: 100,
            },
            orders: OrderGatewayConfig { latency_ms: 0 },
        }
    }
}
