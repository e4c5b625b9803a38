use serde::{Deserialize, Serialize};
use crate::structs::config::category_config::CategoryConfig;
use crate::structs::config::output_config::OutputConfig;
use crate::structs::config::scan_config::ScanConfig;

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub scan: ScanConfig,

    #[serde(default)]
    pub categories: CategoryConfig,

    #[serde(default)]
    pub output: OutputConfig,
}
