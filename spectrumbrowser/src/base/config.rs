use serde::{Deserialize, Serialize};

use crate::vars::{
    DEFAULT_INITIAL_DAYS, DEFAULT_MAX_DAYS, DEFAULT_SERVICE_URL,
};
use crate::ClientError;

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct ClientConfig {
    pub service_url: String,
    pub max_days: u32,
    pub initial_days: u32,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            service_url: DEFAULT_SERVICE_URL.to_string(),
            max_days: DEFAULT_MAX_DAYS,
            initial_days: DEFAULT_INITIAL_DAYS,
        }
    }
}

impl ClientConfig {
    pub fn from_yaml(content: &str) -> Result<Self, ClientError> {
        let config: ClientConfig = serde_yaml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Parse `content`, falling back to the defaults when it is not usable.
    pub fn from_yaml_or_default(content: &str) -> Self {
        match Self::from_yaml(content) {
            Ok(config) => config,
            Err(err) => {
                log::error!("{}, using default configuration", err);
                Self::default()
            }
        }
    }

    pub fn validate(&self) -> Result<(), ClientError> {
        if self.max_days == 0 {
            return Err(ClientError::Config(
                "max_days must be at least 1".to_string(),
            ));
        }
        if self.initial_days < 1 || self.initial_days > self.max_days {
            return Err(ClientError::Config(format!(
                "initial_days must be in the range [1:{}]",
                self.max_days
            )));
        }
        Ok(())
    }

    pub fn change_password_url(&self) -> String {
        format!("{}/changePassword", self.service_url.trim_end_matches('/'))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_yaml() {
        let config = ClientConfig::from_yaml(
            "service_url: https://example.org/sb/\nmax_days: 14\n",
        )
        .unwrap();
        assert_eq!(config.max_days, 14);
        assert_eq!(config.initial_days, DEFAULT_INITIAL_DAYS);
        assert_eq!(
            config.change_password_url(),
            "https://example.org/sb/changePassword"
        );
    }

    #[test]
    fn test_invalid_config_falls_back_to_default() {
        assert!(ClientConfig::from_yaml("max_days: 0\n").is_err());
        assert!(
            ClientConfig::from_yaml("max_days: 5\ninitial_days: 6\n").is_err()
        );
        assert!(ClientConfig::from_yaml("max_days: [1, 2]\n").is_err());

        let config = ClientConfig::from_yaml_or_default("max_days: 0\n");
        assert_eq!(config, ClientConfig::default());
        assert_eq!(
            config.change_password_url(),
            "/spectrumbrowser/changePassword"
        );
    }
}
