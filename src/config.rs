use clap::Parser;
use reqwest::Url;
use std::time::Duration;

pub const DEFAULT_ENDPOINT: &str = "http://localhost:5000/orders/";

/// Command-line arguments for the order desk.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Order collection endpoint
    #[arg(long, env = "ORDER_DESK_ENDPOINT", default_value = DEFAULT_ENDPOINT)]
    pub endpoint: Url,

    /// HTTP request timeout in seconds
    #[arg(long, env = "ORDER_DESK_TIMEOUT_SECS", default_value_t = 30)]
    pub timeout_secs: u64,

    /// Log level (trace, debug, info, warn, error); RUST_LOG takes precedence
    #[arg(short, long, default_value = "info")]
    pub log_level: String,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub endpoint: Url,
    pub timeout: Duration,
    pub log_level: String,
}

impl Config {
    pub fn from_args() -> Self {
        Args::parse().into()
    }
}

impl From<Args> for Config {
    fn from(args: Args) -> Self {
        Self {
            endpoint: args.endpoint,
            timeout: Duration::from_secs(args.timeout_secs),
            log_level: args.log_level,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_point_at_local_order_service() {
        let config: Config = Args::try_parse_from(["order_desk"]).unwrap().into();

        assert_eq!(config.endpoint.as_str(), DEFAULT_ENDPOINT);
        assert_eq!(config.timeout, Duration::from_secs(30));
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn flags_override_defaults() {
        let config: Config = Args::try_parse_from([
            "order_desk",
            "--endpoint",
            "https://orders.example.com/api/orders",
            "--timeout-secs",
            "5",
            "-l",
            "debug",
        ])
        .unwrap()
        .into();

        assert_eq!(config.endpoint.host_str(), Some("orders.example.com"));
        assert_eq!(config.timeout, Duration::from_secs(5));
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    fn rejects_malformed_endpoint() {
        assert!(Args::try_parse_from(["order_desk", "--endpoint", "not a url"]).is_err());
    }
}
