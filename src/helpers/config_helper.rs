use crate::config::constants::{
    DEFAULT_COMMAND_TIMEOUT_SECS, DEFAULT_WORKERS, DELETION_FILE_NAME, REPORT_FILE_NAME,
};

pub struct ConfigHelper;

impl ConfigHelper {
    pub fn default_timeout_secs() -> u64 {
        DEFAULT_COMMAND_TIMEOUT_SECS
    }

    pub fn default_workers() -> usize {
        DEFAULT_WORKERS
    }

    pub fn default_skip_on_timeout() -> bool {
        true
    }

    pub fn default_category_enabled() -> bool {
        true
    }

    pub fn default_output_dir() -> String {
        ".".to_string()
    }

    pub fn default_report_file() -> String {
        REPORT_FILE_NAME.to_string()
    }

    pub fn default_deletion_file() -> String {
        DELETION_FILE_NAME.to_string()
    }
}
