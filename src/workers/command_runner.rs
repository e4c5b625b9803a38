use std::sync::Arc;
use std::time::Instant;
use crate::config::config_manager::ConfigManager;
use crate::enums::commands::Commands;
use crate::errors::{CloudsweepError, CloudsweepResult};
use crate::logger::fleet_report_logger::FleetReportLogger;
use crate::services::analysis_store::AnalysisStore;
use crate::services::asset_inventory::GcloudAssetInventory;
use crate::services::fleet_catalog::GcloudFleetCatalog;
use crate::services::gcloud::GcloudRunner;
use crate::services::project_analyzer::ProjectAnalyzer;
use crate::services::scan_coordinator::ScanCoordinator;
use crate::structs::config::config::Config;
use crate::structs::scan_options::{ScanFlags, ScanOptions};
use crate::traits::inventory_provider::InventoryProvider;
use crate::traits::project_source::ProjectSource;

pub struct CommandRunner {
    start_time: Option<Instant>,
}

impl CommandRunner {
    pub fn new() -> Self {
        Self { start_time: None }
    }

    pub async fn run_command(&mut self, command: Commands) -> CloudsweepResult<()> {
        self.start_time = Some(Instant::now());

        let result = match command {
            Commands::Init => self.init_command().await,
            Commands::Scan {
                timeout,
                no_skip_timeout,
                limit,
                skip_compute,
                skip_storage,
                skip_sql,
                skip_other,
                workers,
                sequential,
                fresh,
            } => {
                self.scan_command(ScanFlags {
                    timeout,
                    no_skip_timeout,
                    limit,
                    skip_compute,
                    skip_storage,
                    skip_sql,
                    skip_other,
                    workers,
                    sequential,
                    fresh,
                })
                .await
            }
            Commands::Report => self.report_command().await,
            Commands::Validate => self.validate_command().await,
            Commands::Clean => self.clean_command().await,
        };

        if let Some(start) = self.start_time {
            let duration = start.elapsed();
            log::info!("⏱️ Command completed in {:.2}s", duration.as_secs_f64());
        }

        result
    }

    async fn init_command(&self) -> CloudsweepResult<()> {
        log::info!("🚀 Initializing cloudsweep configuration...");

        match ConfigManager::create_sample_config() {
            Ok(()) => {
                log::info!("✅ Configuration file created successfully!");
                log::info!("📝 Edit the configuration file to tune timeouts, workers and output paths.");
                log::info!("🔧 Run 'cloudsweep validate' to check your configuration.");
                Ok(())
            }
            Err(e) => {
                log::error!("❌ Failed to create configuration: {}", e);
                Err(e)
            }
        }
    }

    async fn scan_command(&self, flags: ScanFlags) -> CloudsweepResult<()> {
        log::info!("🔍 Starting fleet scan...");

        let config = self.load_validated_config()?;
        let options = ScanOptions::from_config(&config, &flags);
        FleetReportLogger::print_scan_header(&options);

        let source: Arc<dyn ProjectSource> =
            Arc::new(GcloudFleetCatalog::new(GcloudRunner::new(options.timeout)));
        let provider: Arc<dyn InventoryProvider> =
            Arc::new(GcloudAssetInventory::new(options.timeout, options.categories));
        let store = Arc::new(AnalysisStore::new(
            config.output.report_path(),
            config.output.deletion_path(),
        ));
        let analyzer = Arc::new(ProjectAnalyzer::new(
            Arc::clone(&source),
            provider,
            options.categories,
        ));

        let coordinator =
            ScanCoordinator::new(source, analyzer, Arc::clone(&store), options);
        let summary = coordinator.run().await?;

        FleetReportLogger::print_summary(&store.snapshot());
        let elapsed = self.start_time.map(|s| s.elapsed()).unwrap_or_default();
        FleetReportLogger::print_scan_footer(
            &summary,
            elapsed,
            &config.output.report_path(),
            &config.output.deletion_path(),
        );

        Ok(())
    }

    async fn report_command(&self) -> CloudsweepResult<()> {
        log::info!("📜 Loading saved analysis report...");

        let config = ConfigManager::load()?;
        let store = AnalysisStore::new(config.output.report_path(), config.output.deletion_path());

        if store.load().await == 0 {
            log::info!("⚠️ No saved report found at {}.", config.output.report_path().display());
            log::info!("💡 Run 'cloudsweep scan' first.");
            return Ok(());
        }

        FleetReportLogger::print_summary(&store.snapshot());
        Ok(())
    }

    async fn validate_command(&self) -> CloudsweepResult<()> {
        log::info!("🔍 Validating cloudsweep configuration...");

        let config = match ConfigManager::load() {
            Ok(config) => {
                log::info!("✅ Configuration file loaded successfully");
                config
            }
            Err(e) => {
                log::error!("❌ Failed to load configuration: {}", e);
                log::error!("💡 Run 'cloudsweep init' to create a configuration file.");
                return Err(e);
            }
        };

        match ConfigManager::validate_config(&config) {
            Ok(()) => {
                log::info!("✅ Configuration is valid");
                log::info!(
                    "📊 Scan defaults: {} workers, {}s timeout, output in '{}'",
                    config.scan.workers,
                    config.scan.timeout_secs,
                    config.output.output_dir
                );
                Ok(())
            }
            Err(errors) => {
                log::error!("❌ Issues found:");
                for error in &errors {
                    log::error!("   - {}", error);
                }
                Err(CloudsweepError::config_error(
                    "configuration validation failed",
                    None,
                    Some("fix the issues above and re-run 'cloudsweep validate'"),
                ))
            }
        }
    }

    async fn clean_command(&self) -> CloudsweepResult<()> {
        let config = ConfigManager::load()?;
        let store = AnalysisStore::new(config.output.report_path(), config.output.deletion_path());
        store.clear().await;
        Ok(())
    }

    fn load_validated_config(&self) -> CloudsweepResult<Config> {
        let config = match ConfigManager::load() {
            Ok(config) => config,
            Err(e) => {
                log::error!("❌ Failed to load configuration: {}", e);
                log::error!("💡 Run 'cloudsweep init' to create a configuration file.");
                return Err(e);
            }
        };

        if let Err(errors) = ConfigManager::validate_config(&config) {
            for error in &errors {
                log::error!("❌ {}", error);
            }
            return Err(CloudsweepError::config_error(
                "configuration validation failed",
                None,
                Some("run 'cloudsweep validate' for details"),
            ));
        }

        Ok(config)
    }
}
