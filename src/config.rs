//! Configuration handling for the TUI

use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Identity of the EmailJS service that delivers enquiries.
///
/// The defaults are the school's registered service; a config file can
/// override any of them without rebuilding. None of these values ever come
/// from user input.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MailerConfig {
    /// EmailJS service identifier
    pub service_id: String,
    /// EmailJS template identifier
    pub template_id: String,
    /// EmailJS public key (account credential)
    pub public_key: String,
    /// Admissions inbox that receives every enquiry
    pub destination_address: String,
}

impl Default for MailerConfig {
    fn default() -> Self {
        Self {
            service_id: "service_9cjlbbc".to_string(),
            template_id: "template_qpcwcqx".to_string(),
            public_key: "JYi8NlKp6UccPd_vD".to_string(),
            destination_address: "admissions@gmsongole.com".to_string(),
        }
    }
}

impl MailerConfig {
    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("com", "gmsongole", "admission-tui")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration from file, falling back to the defaults
    pub fn load() -> Result<Self> {
        let path = Self::config_path();

        if let Some(path) = path {
            if path.exists() {
                let content = fs::read_to_string(&path)?;
                let config: MailerConfig = serde_json::from_str(&content)?;
                return Ok(config);
            }
        }

        Ok(Self::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = MailerConfig::default();
        assert_eq!(config.service_id, "service_9cjlbbc");
        assert_eq!(config.template_id, "template_qpcwcqx");
        assert_eq!(config.public_key, "JYi8NlKp6UccPd_vD");
        assert_eq!(config.destination_address, "admissions@gmsongole.com");
    }

    #[test]
    fn test_serialization_round_trip() {
        let config = MailerConfig {
            service_id: "service_test".to_string(),
            template_id: "template_test".to_string(),
            public_key: "key_test".to_string(),
            destination_address: "test@example.com".to_string(),
        };

        let json = serde_json::to_string(&config).unwrap();
        let parsed: MailerConfig = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed.service_id, "service_test");
        assert_eq!(parsed.template_id, "template_test");
        assert_eq!(parsed.public_key, "key_test");
        assert_eq!(parsed.destination_address, "test@example.com");
    }

    #[test]
    fn test_partial_config_keeps_defaults() {
        let json = r#"{"destination_address": "other@example.com"}"#;
        let parsed: MailerConfig = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.destination_address, "other@example.com");
        assert_eq!(parsed.service_id, "service_9cjlbbc");
    }

    #[test]
    fn test_deserialize_from_empty_json() {
        let json = "{}";
        let parsed: MailerConfig = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.service_id, "service_9cjlbbc");
    }

    #[test]
    fn test_deserialize_with_extra_fields() {
        // Should ignore unknown fields
        let json = r#"{"service_id": "service_x", "unknown_field": "value"}"#;
        let parsed: MailerConfig = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.service_id, "service_x");
    }

    #[test]
    fn test_load_returns_defaults_when_no_file() {
        let result = MailerConfig::load();
        assert!(result.is_ok());
    }
}
