use std::sync::Arc;
use chrono::Local;
use crate::config::constants::{UNKNOWN_LIFECYCLE_STATE, UNKNOWN_PROJECT_NUMBER};
use crate::enums::analysis_outcome::{AnalysisOutcome, SkipReason};
use crate::enums::fetch_outcome::FetchOutcome;
use crate::errors::CloudsweepResult;
use crate::services::activity_extractor::ActivityExtractor;
use crate::services::obsolescence_classifier::ObsolescenceClassifier;
use crate::structs::analysis_record::AnalysisRecord;
use crate::structs::project_descriptor::ProjectDescriptor;
use crate::structs::resource_counts::ResourceCounts;
use crate::structs::resource_inventory::CategoryToggles;
use crate::traits::inventory_provider::InventoryProvider;
use crate::traits::project_source::ProjectSource;

/// One project's full pipeline: detail resolution, inventory fetch,
/// category filtering, activity extraction, classification. All state
/// is task-local; the caller owns store insertion.
pub struct ProjectAnalyzer {
    source: Arc<dyn ProjectSource>,
    provider: Arc<dyn InventoryProvider>,
    categories: CategoryToggles,
}

impl ProjectAnalyzer {
    pub fn new(
        source: Arc<dyn ProjectSource>,
        provider: Arc<dyn InventoryProvider>,
        categories: CategoryToggles,
    ) -> Self {
        Self { source, provider, categories }
    }

    pub async fn analyze(&self, project: &ProjectDescriptor) -> CloudsweepResult<AnalysisOutcome> {
        let (project_number, lifecycle_state) = self.resolve_details(project).await;

        log::info!(
            "📋 Analyzing: {} ({}) - State: {}",
            project.display_name(),
            project.project_id,
            lifecycle_state
        );

        let fetch = self.provider.inventory(&project.project_id).await;
        match fetch.outcome {
            FetchOutcome::Timeout => return Ok(AnalysisOutcome::Skipped(SkipReason::Timeout)),
            FetchOutcome::Failure => {
                log::error!("✗ Inventory provider failed for {}", project.project_id);
                return Ok(AnalysisOutcome::Skipped(SkipReason::ProviderFailure));
            }
            FetchOutcome::Success => {}
        }

        let mut inventory = fetch.inventory;
        inventory.retain_enabled(&self.categories);
        let resource_counts = inventory.counts();
        let total_resources = resource_counts.total();
        Self::log_resource_summary(&resource_counts);

        let last_activity = ActivityExtractor::last_activity(&inventory);
        match last_activity {
            Some(last) => log::info!("Last Activity: {}", last.format("%Y-%m-%d")),
            None => log::info!("Last Activity: none found"),
        }

        let verdict = ObsolescenceClassifier::classify(
            total_resources,
            last_activity,
            &lifecycle_state,
            Local::now().naive_local(),
        );
        for reason in &verdict.reasons {
            log::warn!("  → {}", reason);
        }

        let record = AnalysisRecord {
            project_id: project.project_id.clone(),
            project_name: project.display_name().to_string(),
            project_number,
            lifecycle_state,
            total_resources,
            resource_counts,
            last_activity,
            days_since_activity: verdict.days_since_activity,
            is_obsolete: verdict.is_obsolete,
            obsolete_reasons: verdict.reasons,
        };
        Ok(AnalysisOutcome::Analyzed(record))
    }

    /// The listing usually carries number and state already; describe
    /// only when it did not, saving one gcloud call per project. A
    /// failed describe degrades to placeholders rather than losing the
    /// project.
    async fn resolve_details(&self, project: &ProjectDescriptor) -> (String, String) {
        if let (Some(number), Some(state)) = (&project.project_number, &project.lifecycle_state) {
            return (number.clone(), state.clone());
        }

        log::info!("Fetching project details for: {}", project.project_id);
        match self.source.describe_project(&project.project_id).await {
            Ok(details) => (
                details.project_number.unwrap_or_else(|| UNKNOWN_PROJECT_NUMBER.to_string()),
                details.lifecycle_state.unwrap_or_else(|| UNKNOWN_LIFECYCLE_STATE.to_string()),
            ),
            Err(e) => {
                log::warn!("⚠️ Could not fetch details for {}: {}", project.project_id, e);
                (UNKNOWN_PROJECT_NUMBER.to_string(), UNKNOWN_LIFECYCLE_STATE.to_string())
            }
        }
    }

    fn log_resource_summary(counts: &ResourceCounts) {
        log::info!("Resource Summary:");
        log::info!(
            "  • Compute: {} instances, {} disks, {} snapshots, {} images",
            counts.instances,
            counts.disks,
            counts.snapshots,
            counts.images
        );
        log::info!("  • Storage: {} buckets", counts.buckets);
        log::info!("  • SQL: {} instances", counts.sql_instances);
        log::info!("  • App Engine: {}", counts.app_engines);
        log::info!("  • Cloud Functions: {}", counts.cloud_functions);
        log::info!("  • Other: {}", counts.other);
        log::info!("  • Total: {}", counts.total());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use crate::enums::resource_category::ResourceCategory;
    use crate::errors::{CloudsweepError, CloudsweepResult};
    use crate::structs::resource_inventory::ResourceInventory;
    use crate::structs::resource_record::ResourceRecord;
    use crate::traits::inventory_provider::InventoryFetch;

    struct StubSource {
        describes: AtomicUsize,
        fail_describe: bool,
    }

    #[async_trait]
    impl ProjectSource for StubSource {
        async fn list_projects(&self) -> CloudsweepResult<Vec<ProjectDescriptor>> {
            Ok(Vec::new())
        }

        async fn describe_project(&self, project_id: &str) -> CloudsweepResult<ProjectDescriptor> {
            self.describes.fetch_add(1, Ordering::SeqCst);
            if self.fail_describe {
                return Err(CloudsweepError::fleet_error("projects describe", "boom"));
            }
            Ok(ProjectDescriptor {
                project_id: project_id.to_string(),
                name: Some("described".to_string()),
                project_number: Some("777".to_string()),
                lifecycle_state: Some("DELETE_REQUESTED".to_string()),
            })
        }
    }

    struct StubProvider {
        outcome: FetchOutcome,
    }

    #[async_trait]
    impl InventoryProvider for StubProvider {
        async fn inventory(&self, _project_id: &str) -> InventoryFetch {
            let mut inventory = ResourceInventory::default();
            inventory.push(
                ResourceCategory::Buckets,
                ResourceRecord {
                    update_time: Some("2024-01-01T00:00:00Z".to_string()),
                    ..Default::default()
                },
            );
            InventoryFetch { inventory, outcome: self.outcome }
        }
    }

    fn full_descriptor() -> ProjectDescriptor {
        ProjectDescriptor {
            project_id: "demo".to_string(),
            name: Some("demo".to_string()),
            project_number: Some("1".to_string()),
            lifecycle_state: Some("ACTIVE".to_string()),
        }
    }

    #[tokio::test]
    async fn listing_fields_avoid_the_describe_call() {
        let source = Arc::new(StubSource { describes: AtomicUsize::new(0), fail_describe: false });
        let analyzer = ProjectAnalyzer::new(
            Arc::clone(&source) as Arc<dyn ProjectSource>,
            Arc::new(StubProvider { outcome: FetchOutcome::Success }),
            CategoryToggles::default(),
        );

        let outcome = analyzer.analyze(&full_descriptor()).await.unwrap();
        assert!(matches!(outcome, AnalysisOutcome::Analyzed(_)));
        assert_eq!(source.describes.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn missing_lifecycle_state_triggers_describe() {
        let source = Arc::new(StubSource { describes: AtomicUsize::new(0), fail_describe: false });
        let analyzer = ProjectAnalyzer::new(
            Arc::clone(&source) as Arc<dyn ProjectSource>,
            Arc::new(StubProvider { outcome: FetchOutcome::Success }),
            CategoryToggles::default(),
        );

        let descriptor = ProjectDescriptor {
            project_id: "demo".to_string(),
            name: None,
            project_number: None,
            lifecycle_state: None,
        };
        let outcome = analyzer.analyze(&descriptor).await.unwrap();
        assert_eq!(source.describes.load(Ordering::SeqCst), 1);

        let AnalysisOutcome::Analyzed(record) = outcome else {
            panic!("expected analyzed outcome");
        };
        assert_eq!(record.project_number, "777");
        assert_eq!(record.lifecycle_state, "DELETE_REQUESTED");
        assert!(record.is_obsolete);
    }

    #[tokio::test]
    async fn failed_describe_degrades_to_placeholders() {
        let source = Arc::new(StubSource { describes: AtomicUsize::new(0), fail_describe: true });
        let analyzer = ProjectAnalyzer::new(
            Arc::clone(&source) as Arc<dyn ProjectSource>,
            Arc::new(StubProvider { outcome: FetchOutcome::Success }),
            CategoryToggles::default(),
        );

        let descriptor = ProjectDescriptor {
            project_id: "demo".to_string(),
            name: None,
            project_number: None,
            lifecycle_state: None,
        };
        let AnalysisOutcome::Analyzed(record) = analyzer.analyze(&descriptor).await.unwrap() else {
            panic!("expected analyzed outcome");
        };
        assert_eq!(record.project_number, "N/A");
        assert_eq!(record.lifecycle_state, "UNKNOWN");
    }

    #[tokio::test]
    async fn timeout_outcome_becomes_a_skip() {
        let analyzer = ProjectAnalyzer::new(
            Arc::new(StubSource { describes: AtomicUsize::new(0), fail_describe: false }),
            Arc::new(StubProvider { outcome: FetchOutcome::Timeout }),
            CategoryToggles::default(),
        );

        let outcome = analyzer.analyze(&full_descriptor()).await.unwrap();
        assert!(matches!(outcome, AnalysisOutcome::Skipped(SkipReason::Timeout)));
    }

    #[tokio::test]
    async fn disabled_storage_hides_the_bucket() {
        let toggles = CategoryToggles { storage: false, ..Default::default() };
        let analyzer = ProjectAnalyzer::new(
            Arc::new(StubSource { describes: AtomicUsize::new(0), fail_describe: false }),
            Arc::new(StubProvider { outcome: FetchOutcome::Success }),
            toggles,
        );

        let AnalysisOutcome::Analyzed(record) = analyzer.analyze(&full_descriptor()).await.unwrap() else {
            panic!("expected analyzed outcome");
        };
        assert_eq!(record.total_resources, 0);
        assert!(record.is_obsolete);
        assert_eq!(record.obsolete_reasons, vec!["No resources found".to_string()]);
        assert!(record.last_activity.is_none());
    }
}
