use serde::{Deserialize, Serialize};
use crate::helpers::config_helper::ConfigHelper;

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct CategoryConfig {
    #[serde(default = "ConfigHelper::default_category_enabled")]
    pub compute: bool,

    #[serde(default = "ConfigHelper::default_category_enabled")]
    pub storage: bool,

    #[serde(default = "ConfigHelper::default_category_enabled")]
    pub sql: bool,

    #[serde(default = "ConfigHelper::default_category_enabled")]
    pub other: bool,
}

impl Default for CategoryConfig {
    fn default() -> Self {
        Self { compute: true, storage: true, sql: true, other: true }
    }
}
