use std::time::Duration;
use crate::config::constants::timeout_duration;
use crate::structs::config::config::Config;
use crate::structs::resource_inventory::CategoryToggles;

/// Effective settings for one scan: config-file defaults with CLI
/// overrides already applied.
#[derive(Debug, Clone)]
pub struct ScanOptions {
    pub timeout: Duration,
    pub skip_on_timeout: bool,
    pub limit: Option<usize>,
    pub workers: usize,
    pub sequential: bool,
    pub fresh: bool,
    pub categories: CategoryToggles,
}

pub struct ScanFlags {
    pub timeout: Option<u64>,
    pub no_skip_timeout: bool,
    pub limit: Option<usize>,
    pub skip_compute: bool,
    pub skip_storage: bool,
    pub skip_sql: bool,
    pub skip_other: bool,
    pub workers: Option<usize>,
    pub sequential: bool,
    pub fresh: bool,
}

impl ScanOptions {
    pub fn from_config(config: &Config, flags: &ScanFlags) -> Self {
        Self {
            timeout: timeout_duration(flags.timeout.unwrap_or(config.scan.timeout_secs)),
            skip_on_timeout: if flags.no_skip_timeout { false } else { config.scan.skip_on_timeout },
            limit: flags.limit,
            workers: flags.workers.unwrap_or(config.scan.workers),
            sequential: flags.sequential || config.scan.sequential,
            fresh: flags.fresh,
            categories: CategoryToggles {
                compute: config.categories.compute && !flags.skip_compute,
                storage: config.categories.storage && !flags.skip_storage,
                sql: config.categories.sql && !flags.skip_sql,
                other: config.categories.other && !flags.skip_other,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn no_flags() -> ScanFlags {
        ScanFlags {
            timeout: None,
            no_skip_timeout: false,
            limit: None,
            skip_compute: false,
            skip_storage: false,
            skip_sql: false,
            skip_other: false,
            workers: None,
            sequential: false,
            fresh: false,
        }
    }

    #[test]
    fn config_supplies_defaults() {
        let options = ScanOptions::from_config(&Config::default(), &no_flags());
        assert_eq!(options.timeout, Duration::from_secs(30));
        assert_eq!(options.workers, 10);
        assert!(options.skip_on_timeout);
        assert!(options.categories.compute);
    }

    #[test]
    fn flags_override_config() {
        let flags = ScanFlags {
            timeout: Some(5),
            no_skip_timeout: true,
            workers: Some(2),
            skip_storage: true,
            ..no_flags()
        };
        let options = ScanOptions::from_config(&Config::default(), &flags);
        assert_eq!(options.timeout, Duration::from_secs(5));
        assert_eq!(options.workers, 2);
        assert!(!options.skip_on_timeout);
        assert!(!options.categories.storage);
        assert!(options.categories.compute);
    }
}
