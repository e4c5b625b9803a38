use serde::{Deserialize, Serialize};
use crate::helpers::config_helper::ConfigHelper;

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ScanConfig {
    #[serde(default = "ConfigHelper::default_timeout_secs")]
    pub timeout_secs: u64,

    #[serde(default = "ConfigHelper::default_workers")]
    pub workers: usize,

    #[serde(default = "ConfigHelper::default_skip_on_timeout")]
    pub skip_on_timeout: bool,

    #[serde(default)]
    pub sequential: bool,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            timeout_secs: ConfigHelper::default_timeout_secs(),
            workers: ConfigHelper::default_workers(),
            skip_on_timeout: ConfigHelper::default_skip_on_timeout(),
            sequential: false,
        }
    }
}
