//! Configuration loading from command-line flags and environment variables.

use std::net::SocketAddr;

use clap::Parser;

use crate::config::schema::{
    ListenerConfig, LogFormat, ObservabilityConfig, PaymentConfig, PaymentIdScheme,
    SecurityConfig, ServiceConfig, TimeoutConfig,
};
use crate::config::validation::validate_config;
use crate::error::ConfigError;

/// Command-line interface. Each flag falls back to an environment variable.
#[derive(Debug, Clone, Parser)]
#[command(name = "payment-service")]
#[command(version, about = "Payment HTTP service with health endpoints", long_about = None)]
pub struct Cli {
    /// Port to listen on.
    #[arg(long, env = "PORT", default_value_t = 8080)]
    pub port: u16,

    /// Interface to bind.
    #[arg(long, env = "BIND_HOST", default_value = "0.0.0.0")]
    pub host: String,

    /// Seconds to wait for in-flight requests after SIGINT/SIGTERM.
    #[arg(long, env = "SHUTDOWN_TIMEOUT_SECS", default_value_t = 30)]
    pub shutdown_timeout_secs: u64,

    /// Per-request timeout in seconds.
    #[arg(long, env = "REQUEST_TIMEOUT_SECS", default_value_t = 30)]
    pub request_timeout_secs: u64,

    /// Maximum accepted request body in bytes.
    #[arg(long, env = "MAX_BODY_BYTES", default_value_t = 2 * 1024 * 1024)]
    pub max_body_bytes: usize,

    #[arg(long, env = "PAYMENT_ID_SCHEME", value_enum, default_value_t = PaymentIdScheme::Unique)]
    pub payment_id_scheme: PaymentIdScheme,

    /// Reject payments with non-positive amounts or malformed currencies.
    #[arg(long, env = "STRICT_VALIDATION")]
    pub strict_validation: bool,

    #[arg(long, env = "LOG_FORMAT", value_enum, default_value_t = LogFormat::Pretty)]
    pub log_format: LogFormat,

    /// Bind address for the Prometheus exporter (disabled when unset).
    #[arg(long, env = "METRICS_ADDRESS")]
    pub metrics_address: Option<SocketAddr>,
}

impl From<Cli> for ServiceConfig {
    fn from(cli: Cli) -> Self {
        Self {
            listener: ListenerConfig {
                bind_address: bind_address(&cli.host, cli.port),
            },
            timeouts: TimeoutConfig {
                shutdown_secs: cli.shutdown_timeout_secs,
                request_secs: cli.request_timeout_secs,
            },
            security: SecurityConfig {
                max_body_size: cli.max_body_bytes,
            },
            payments: PaymentConfig {
                id_scheme: cli.payment_id_scheme,
                strict_validation: cli.strict_validation,
            },
            observability: ObservabilityConfig {
                log_format: cli.log_format,
                metrics_address: cli.metrics_address,
            },
        }
    }
}

fn bind_address(host: &str, port: u16) -> String {
    if host.contains(':') && !host.starts_with('[') {
        format!("[{host}]:{port}")
    } else {
        format!("{host}:{port}")
    }
}

/// Build and validate the configuration from parsed CLI arguments.
pub fn load_config(cli: Cli) -> Result<ServiceConfig, ConfigError> {
    let config = ServiceConfig::from(cli);
    validate_config(&config).map_err(ConfigError)?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        let mut argv = vec!["payment-service"];
        argv.extend_from_slice(args);
        Cli::try_parse_from(argv).unwrap()
    }

    #[test]
    fn explicit_flags_override_defaults() {
        let config = load_config(parse(&[
            "--port",
            "9001",
            "--host",
            "127.0.0.1",
            "--shutdown-timeout-secs",
            "5",
            "--payment-id-scheme",
            "timestamp",
            "--strict-validation",
            "--log-format",
            "json",
        ]))
        .unwrap();

        assert_eq!(config.listener.bind_address, "127.0.0.1:9001");
        assert_eq!(config.timeouts.shutdown_secs, 5);
        assert_eq!(config.payments.id_scheme, PaymentIdScheme::Timestamp);
        assert!(config.payments.strict_validation);
        assert_eq!(config.observability.log_format, LogFormat::Json);
    }

    #[test]
    fn ipv6_hosts_are_bracketed() {
        assert_eq!(bind_address("::1", 8080), "[::1]:8080");
        assert_eq!(bind_address("[::1]", 8080), "[::1]:8080");
        assert_eq!(bind_address("0.0.0.0", 8080), "0.0.0.0:8080");
    }

    #[test]
    fn zero_shutdown_timeout_is_rejected() {
        let err = load_config(parse(&["--shutdown-timeout-secs", "0", "--host", "127.0.0.1"]))
            .unwrap_err();
        assert!(err.to_string().contains("shutdown timeout"));
    }

    #[test]
    fn unparsable_host_is_rejected() {
        assert!(load_config(parse(&["--host", "not a host"])).is_err());
    }

    #[test]
    fn metrics_address_is_parsed_once_at_the_edge() {
        let config = load_config(parse(&["--metrics-address", "127.0.0.1:9090"])).unwrap();
        assert_eq!(
            config.observability.metrics_address,
            Some(SocketAddr::from(([127, 0, 0, 1], 9090)))
        );
        assert!(Cli::try_parse_from(["payment-service", "--metrics-address", "localhost"]).is_err());
    }

    #[test]
    fn non_numeric_port_fails_to_parse() {
        assert!(Cli::try_parse_from(["payment-service", "--port", "eighty"]).is_err());
    }
}
