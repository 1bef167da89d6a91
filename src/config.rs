//! Configuration handling for the booking form

use crate::error::ConfigError;
use crate::state::{ADDRESS, EMAIL, FULL_NAME, MOBILE};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;
use std::str::FromStr;

/// Default collector endpoint. Replace the form id before going live.
pub const DEFAULT_ENDPOINT: &str = "https://docs.google.com/forms/d/e/YOUR_FORM_ID/formResponse";

const ENDPOINT_ENV: &str = "RIDE_BOOKING_ENDPOINT";
const TRANSPORT_ENV: &str = "RIDE_BOOKING_TRANSPORT";

/// Which collector transport to use
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TransportKind {
    /// Timed coin-flip, no network I/O
    #[default]
    Simulated,
    /// Real form-encoded POST to the endpoint
    Http,
}

impl FromStr for TransportKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "simulated" => Ok(TransportKind::Simulated),
            "http" => Ok(TransportKind::Http),
            other => Err(ConfigError::UnknownTransport(other.to_string())),
        }
    }
}

/// Static configuration supplied to the controller at construction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BookingConfig {
    /// Collector endpoint URL
    pub endpoint: String,
    /// Logical field name -> collector field identifier
    pub field_mappings: BTreeMap<String, String>,
    /// Transport used for submissions
    pub transport: TransportKind,
    /// Delay of the simulated transport
    pub simulated_delay_ms: u64,
    /// Probability that a simulated submission succeeds
    pub simulated_success_rate: f64,
}

impl Default for BookingConfig {
    fn default() -> Self {
        let field_mappings = [
            (FULL_NAME, "entry.YOUR_NAME_ENTRY_ID"),
            (MOBILE, "entry.YOUR_MOBILE_ENTRY_ID"),
            (EMAIL, "entry.YOUR_EMAIL_ENTRY_ID"),
            (ADDRESS, "entry.YOUR_ADDRESS_ENTRY_ID"),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();

        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            field_mappings,
            transport: TransportKind::Simulated,
            simulated_delay_ms: 1500,
            simulated_success_rate: 0.9,
        }
    }
}

impl BookingConfig {
    /// Get the config file path
    pub fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("com", "ridebooking", "ride-booking-tui")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration from file, then apply environment overrides.
    ///
    /// On first launch the defaults are written out so there is a file to edit.
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = match Self::config_path() {
            Some(path) if path.exists() => {
                let content = fs::read_to_string(&path)?;
                serde_json::from_str(&content)?
            }
            Some(path) => {
                let config = Self::default();
                if let Err(e) = config.save() {
                    tracing::warn!("Could not write default config to {}: {e}", path.display());
                }
                config
            }
            None => Self::default(),
        };

        config.apply_overrides(
            std::env::var(ENDPOINT_ENV).ok(),
            std::env::var(TRANSPORT_ENV).ok(),
        )?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to file
    pub fn save(&self) -> Result<(), ConfigError> {
        if let Some(path) = Self::config_path() {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)?;
            }
            let content = serde_json::to_string_pretty(self)?;
            fs::write(&path, content)?;
        }
        Ok(())
    }

    /// Apply endpoint/transport overrides (normally read from the environment)
    pub fn apply_overrides(
        &mut self,
        endpoint: Option<String>,
        transport: Option<String>,
    ) -> Result<(), ConfigError> {
        if let Some(endpoint) = endpoint.filter(|e| !e.trim().is_empty()) {
            self.endpoint = endpoint.trim().to_string();
        }
        if let Some(transport) = transport {
            self.transport = transport.parse()?;
        }
        Ok(())
    }

    /// Check the configuration is usable
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.field_mappings.is_empty() {
            return Err(ConfigError::EmptyMapping);
        }
        if !(0.0..=1.0).contains(&self.simulated_success_rate) {
            return Err(ConfigError::InvalidSuccessRate(
                self.simulated_success_rate,
            ));
        }
        // The simulated transport never touches the endpoint.
        if self.transport == TransportKind::Http {
            self.endpoint_url()?;
        }
        Ok(())
    }

    /// Parse the endpoint as a URL
    pub fn endpoint_url(&self) -> Result<url::Url, ConfigError> {
        url::Url::parse(&self.endpoint).map_err(|source| ConfigError::InvalidEndpoint {
            url: self.endpoint.clone(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_config() {
        let config = BookingConfig::default();
        assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(config.transport, TransportKind::Simulated);
        assert_eq!(config.simulated_delay_ms, 1500);
        assert_eq!(config.simulated_success_rate, 0.9);
        assert_eq!(config.field_mappings.len(), 4);
        assert_eq!(
            config.field_mappings.get("mobile").map(String::as_str),
            Some("entry.YOUR_MOBILE_ENTRY_ID")
        );
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_serialization_roundtrip() {
        let config = BookingConfig {
            transport: TransportKind::Http,
            endpoint: "https://example.com/collect".to_string(),
            ..Default::default()
        };

        let json = serde_json::to_string(&config).unwrap();
        assert!(json.contains("\"transport\":\"http\""));
        let parsed: BookingConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_deserialize_from_empty_json_uses_defaults() {
        let parsed: BookingConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(parsed, BookingConfig::default());
    }

    #[test]
    fn test_deserialize_with_extra_fields() {
        let json = r#"{"simulated_delay_ms": 10, "unknown_field": "value"}"#;
        let parsed: BookingConfig = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.simulated_delay_ms, 10);
    }

    #[test]
    fn test_transport_from_str() {
        assert_eq!("http".parse::<TransportKind>().unwrap(), TransportKind::Http);
        assert_eq!(
            " Simulated ".parse::<TransportKind>().unwrap(),
            TransportKind::Simulated
        );
        assert!(matches!(
            "carrier-pigeon".parse::<TransportKind>(),
            Err(ConfigError::UnknownTransport(_))
        ));
    }

    #[test]
    fn test_overrides_replace_endpoint_and_transport() {
        let mut config = BookingConfig::default();
        config
            .apply_overrides(
                Some("https://collector.test/form".to_string()),
                Some("http".to_string()),
            )
            .unwrap();
        assert_eq!(config.endpoint, "https://collector.test/form");
        assert_eq!(config.transport, TransportKind::Http);
    }

    #[test]
    fn test_blank_endpoint_override_is_ignored() {
        let mut config = BookingConfig::default();
        config.apply_overrides(Some("  ".to_string()), None).unwrap();
        assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
    }

    #[test]
    fn test_validate_rejects_bad_success_rate() {
        let config = BookingConfig {
            simulated_success_rate: 1.5,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidSuccessRate(_))
        ));
    }

    #[test]
    fn test_validate_rejects_empty_mapping() {
        let config = BookingConfig {
            field_mappings: BTreeMap::new(),
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::EmptyMapping)));
    }

    #[test]
    fn test_validate_rejects_bad_endpoint_only_for_http() {
        let mut config = BookingConfig {
            endpoint: "not a url".to_string(),
            ..Default::default()
        };
        assert!(config.validate().is_ok());

        config.transport = TransportKind::Http;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidEndpoint { .. })
        ));
    }

    #[test]
    fn test_config_path_returns_option() {
        let _path = BookingConfig::config_path();
    }
}
