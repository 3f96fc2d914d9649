//! Health report model.

use serde::Serialize;
use time::format_description::well_known::Rfc3339;
use time::OffsetDateTime;

/// Service name reported by every health endpoint.
pub const SERVICE_NAME: &str = "fintech-payment-service";

/// Reported health. Only one variant exists: the handler never fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ServiceStatus {
    Healthy,
}

/// Fixed identity of the running service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceInfo {
    pub name: &'static str,
    pub version: &'static str,
}

impl Default for ServiceInfo {
    fn default() -> Self {
        Self {
            name: SERVICE_NAME,
            version: env!("CARGO_PKG_VERSION"),
        }
    }
}

/// Body of `/health`, `/health/ready` and `/health/live`.
#[derive(Debug, Clone, Serialize)]
pub struct HealthStatus {
    pub status: ServiceStatus,
    pub service: &'static str,
    pub version: &'static str,
    /// RFC3339, whole seconds, UTC.
    pub timestamp: String,
}

impl HealthStatus {
    /// Build a fresh report stamped with the current time.
    pub fn now(info: &ServiceInfo) -> Self {
        Self::at(info, OffsetDateTime::now_utc())
    }

    pub fn at(info: &ServiceInfo, at: OffsetDateTime) -> Self {
        Self {
            status: ServiceStatus::Healthy,
            service: info.name,
            version: info.version,
            timestamp: format_timestamp(at),
        }
    }
}

fn format_timestamp(at: OffsetDateTime) -> String {
    let at = at.to_offset(time::UtcOffset::UTC);
    let truncated = at.replace_nanosecond(0).unwrap_or(at);
    // Rfc3339 formatting only fails for years outside 0..=9999.
    truncated
        .format(&Rfc3339)
        .unwrap_or_else(|_| truncated.unix_timestamp().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::datetime;

    #[test]
    fn serializes_expected_shape() {
        let status = HealthStatus::at(
            &ServiceInfo::default(),
            datetime!(2024-03-01 12:30:45.123 UTC),
        );
        let json = serde_json::to_value(&status).unwrap();

        assert_eq!(json["status"], "healthy");
        assert_eq!(json["service"], "fintech-payment-service");
        assert_eq!(json["version"], env!("CARGO_PKG_VERSION"));
        assert_eq!(json["timestamp"], "2024-03-01T12:30:45Z");
    }

    #[test]
    fn non_utc_input_is_normalized() {
        let status = HealthStatus::at(
            &ServiceInfo::default(),
            datetime!(2024-03-01 14:30:45 +2),
        );
        assert_eq!(status.timestamp, "2024-03-01T12:30:45Z");
    }

    #[test]
    fn now_parses_back_as_rfc3339() {
        let status = HealthStatus::now(&ServiceInfo::default());
        let parsed = OffsetDateTime::parse(&status.timestamp, &Rfc3339).unwrap();
        let drift = (OffsetDateTime::now_utc() - parsed).whole_seconds().abs();
        assert!(drift <= 1);
    }
}
