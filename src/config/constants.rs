use std::time::Duration;

pub const DEFAULT_COMMAND_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_WORKERS: usize = 10;

/// Activity older than this forces the obsolete verdict.
pub const OBSOLETE_AFTER_DAYS: i64 = 180;
/// Activity older than this (but within the obsolete window) only flags
/// the project for review.
pub const LOW_ACTIVITY_AFTER_DAYS: i64 = 90;

/// The one lifecycle state that does not count against a project.
pub const ACTIVE_LIFECYCLE_STATE: &str = "ACTIVE";
pub const UNKNOWN_LIFECYCLE_STATE: &str = "UNKNOWN";
pub const UNKNOWN_PROJECT_NUMBER: &str = "N/A";

pub const REPORT_FILE_NAME: &str = "obsolete_projects_report.json";
pub const DELETION_FILE_NAME: &str = "projects_for_deletion.json";

pub const CONFIG_DIR_NAME: &str = ".cloudsweep";
pub const CONFIG_FILE_NAME: &str = "config.toml";

pub const PROGRESS_BAR_WIDTH: usize = 30;
pub const ACTIVE_PROJECTS_SHOWN: usize = 10;

pub fn timeout_duration(seconds: u64) -> Duration {
    Duration::from_secs(seconds)
}
