use std::fs;
use std::path::PathBuf;
use crate::config::constants::{CONFIG_DIR_NAME, CONFIG_FILE_NAME};
use crate::errors::{CloudsweepError, CloudsweepResult};
use crate::structs::config::config::Config;

pub struct ConfigManager;

impl ConfigManager {
    fn config_path() -> PathBuf {
        dirs::home_dir()
            .map(|d| d.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
            .unwrap_or_default()
    }

    pub fn load() -> CloudsweepResult<Config> {
        let config_path = Self::config_path();

        if config_path.exists() {
            log::info!("📋 Loading config from: {}", config_path.display());
            let content = fs::read_to_string(&config_path).map_err(|e| {
                CloudsweepError::ConfigurationFileError {
                    path: config_path.display().to_string(),
                    reason: e.to_string(),
                }
            })?;
            let config: Config = toml::from_str(&content)?;
            return Ok(config);
        }

        Ok(Config::default())
    }

    pub fn create_sample_config() -> CloudsweepResult<()> {
        let sample_config = r#"# Cloudsweep Configuration

[scan]
# Timeout in seconds for each gcloud command
timeout_secs = 30

# Number of projects analyzed in parallel
workers = 10

# Skip projects whose inventory fetch times out (false = abort the scan)
skip_on_timeout = true

# Process projects one at a time (debugging / deterministic log order)
sequential = false

# Which service groups to inventory
[categories]
compute = true   # VM instances, disks, snapshots, images
storage = true   # Cloud Storage buckets
sql = true       # Cloud SQL instances
other = true     # App Engine, Cloud Functions

[output]
# Directory for both generated files
output_dir = "."

# Full categorized report (also used for resume)
report_file = "obsolete_projects_report.json"

# Deletion-ready extract
deletion_file = "projects_for_deletion.json"
"#;
        let config_path = Self::config_path();
        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&config_path, sample_config)?;
        log::info!("✅ Created sample config at: {}", config_path.display());
        Ok(())
    }

    pub fn validate_config(config: &Config) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        if config.scan.workers == 0 {
            errors.push("scan.workers must be at least 1".to_string());
        }

        if config.scan.timeout_secs == 0 {
            errors.push("scan.timeout_secs must be at least 1".to_string());
        }

        if config.output.report_file == config.output.deletion_file {
            errors.push("output.report_file and output.deletion_file must differ".to_string());
        }

        let output_dir = std::path::Path::new(&config.output.output_dir);
        if output_dir.exists() && !output_dir.is_dir() {
            errors.push(format!("output.output_dir is not a directory: {}", config.output.output_dir));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::structs::config::config::Config;

    #[test]
    fn default_config_validates() {
        assert!(ConfigManager::validate_config(&Config::default()).is_ok());
    }

    #[test]
    fn zero_workers_is_rejected() {
        let mut config = Config::default();
        config.scan.workers = 0;
        let errors = ConfigManager::validate_config(&config).unwrap_err();
        assert!(errors.iter().any(|e| e.contains("workers")));
    }

    #[test]
    fn colliding_output_files_are_rejected() {
        let mut config = Config::default();
        config.output.deletion_file = config.output.report_file.clone();
        assert!(ConfigManager::validate_config(&config).is_err());
    }

    #[test]
    fn sample_config_parses_back() {
        // The sample shipped by `init` must stay in sync with the structs.
        let sample = r#"
[scan]
timeout_secs = 30
workers = 10
skip_on_timeout = true
sequential = false

[categories]
compute = true
storage = true
sql = true
other = true

[output]
output_dir = "."
report_file = "obsolete_projects_report.json"
deletion_file = "projects_for_deletion.json"
"#;
        let config: Config = toml::from_str(sample).unwrap();
        assert_eq!(config.scan.workers, 10);
        assert!(config.categories.sql);
    }
}
