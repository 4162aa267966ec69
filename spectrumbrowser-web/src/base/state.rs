use spectrumbrowser::ClientConfig;

use crate::vars::CLIENT_CONFIG;

#[derive(Clone, Debug)]
pub struct GlobalState {
    pub config: ClientConfig,
    pub day_count: Option<u32>,
}

impl GlobalState {
    fn new() -> Self {
        Self {
            config: ClientConfig::from_yaml_or_default(CLIENT_CONFIG),
            day_count: None,
        }
    }

    /// Day count of the last accepted commit, else the configured default.
    pub fn day_count(&self) -> u32 {
        self.day_count.unwrap_or(self.config.initial_days)
    }
}

impl Default for GlobalState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use wasm_bindgen_test::*;

    use super::*;

    #[wasm_bindgen_test]
    fn test_bundled_config_is_valid() {
        let config = ClientConfig::from_yaml(CLIENT_CONFIG).unwrap();
        assert_eq!(config, GlobalState::default().config);
        assert_eq!(GlobalState::default().day_count(), config.initial_days);
    }
}
