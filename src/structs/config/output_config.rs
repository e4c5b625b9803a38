use std::path::PathBuf;
use serde::{Deserialize, Serialize};
use crate::helpers::config_helper::ConfigHelper;

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct OutputConfig {
    #[serde(default = "ConfigHelper::default_output_dir")]
    pub output_dir: String,

    #[serde(default = "ConfigHelper::default_report_file")]
    pub report_file: String,

    #[serde(default = "ConfigHelper::default_deletion_file")]
    pub deletion_file: String,
}

impl OutputConfig {
    pub fn report_path(&self) -> PathBuf {
        PathBuf::from(&self.output_dir).join(&self.report_file)
    }

    pub fn deletion_path(&self) -> PathBuf {
        PathBuf::from(&self.output_dir).join(&self.deletion_file)
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            output_dir: ConfigHelper::default_output_dir(),
            report_file: ConfigHelper::default_report_file(),
            deletion_file: ConfigHelper::default_deletion_file(),
        }
    }
}
