use std::time::Duration;
use async_trait::async_trait;
use crate::enums::resource_category::ResourceCategory;
use crate::services::gcloud::GcloudRunner;
use crate::structs::resource_inventory::{CategoryToggles, ResourceInventory};
use crate::structs::resource_record::ResourceRecord;
use crate::traits::inventory_provider::{InventoryFetch, InventoryProvider};

/// Per-service listing commands for the fallback path, probed in a
/// fixed order. The project id is appended to each argument list.
const FALLBACK_PROBES: &[(ResourceCategory, &[&str])] = &[
    (ResourceCategory::Instances, &["compute", "instances", "list", "--project"]),
    (ResourceCategory::Disks, &["compute", "disks", "list", "--project"]),
    (ResourceCategory::Snapshots, &["compute", "snapshots", "list", "--project"]),
    (ResourceCategory::Images, &["compute", "images", "list", "--project"]),
    (ResourceCategory::Buckets, &["storage", "buckets", "list", "--project"]),
    (ResourceCategory::SqlInstances, &["sql", "instances", "list", "--project"]),
    (ResourceCategory::AppEngines, &["app", "instances", "list", "--project"]),
    (ResourceCategory::CloudFunctions, &["functions", "list", "--project"]),
];

/// Inventory provider backed by the Cloud Asset Inventory API, with a
/// silent fallback to per-service listings when the bulk query fails
/// outright (not on timeout — a timeout is the caller's decision).
pub struct GcloudAssetInventory {
    runner: GcloudRunner,
    timeout: Duration,
    toggles: CategoryToggles,
}

impl GcloudAssetInventory {
    pub fn new(timeout: Duration, toggles: CategoryToggles) -> Self {
        Self { runner: GcloudRunner::new(timeout), timeout, toggles }
    }

    fn collect_records(
        inventory: &mut ResourceInventory,
        items: &[serde_json::Value],
        fixed_category: Option<ResourceCategory>,
    ) {
        for item in items {
            let record: ResourceRecord = match serde_json::from_value(item.clone()) {
                Ok(record) => record,
                Err(_) => ResourceRecord::default(),
            };
            let category = fixed_category.unwrap_or_else(|| {
                record
                    .asset_type
                    .as_deref()
                    .map(ResourceCategory::from_asset_type)
                    .unwrap_or(ResourceCategory::Other)
            });
            inventory.push(category, record);
        }
    }

    async fn fallback_inventory(&self, project_id: &str) -> InventoryFetch {
        log::warn!("  Using fallback: individual service checks");
        let mut inventory = ResourceInventory::default();
        let mut any_succeeded = false;

        for (category, args) in FALLBACK_PROBES {
            if !self.toggles.allows(*category) {
                continue;
            }

            let mut full_args: Vec<&str> = args.to_vec();
            full_args.push(project_id);

            let outcome = self.runner.run_json(&full_args).await;
            if outcome.timed_out {
                log::warn!("  ⚠️ {} check timed out, abandoning remaining checks", category.as_str());
                return InventoryFetch::timeout(inventory);
            }
            if !outcome.success {
                log::warn!("  → {} not accessible or not enabled", category.as_str());
                continue;
            }
            any_succeeded = true;

            let found = outcome.items().len();
            if found > 0 {
                log::info!("    ✓ Found {} {} resource(s)", found, category.as_str());
            }
            Self::collect_records(&mut inventory, outcome.items(), Some(*category));
        }

        // Every probe failing means the project was never observed at
        // all; reporting success here would misclassify it as empty.
        if !any_succeeded {
            log::error!("  ✗ All fallback checks failed for {}", project_id);
            return InventoryFetch::failure();
        }

        InventoryFetch::success(inventory)
    }
}

#[async_trait]
impl InventoryProvider for GcloudAssetInventory {
    async fn inventory(&self, project_id: &str) -> InventoryFetch {
        log::info!("  Checking all resources via Asset Inventory API...");
        let scope = format!("projects/{}", project_id);

        // The bulk query covers every service in one call, so it gets
        // double the per-command budget.
        let outcome = self
            .runner
            .run_json_with_timeout(
                &["asset", "search-all-resources", "--scope", &scope],
                self.timeout * 2,
            )
            .await;

        if outcome.timed_out {
            log::warn!("  ⚠️ Asset Inventory query timed out for {}", project_id);
            return InventoryFetch::timeout(ResourceInventory::default());
        }
        if !outcome.success {
            log::warn!("  → Asset Inventory query failed, falling back to individual service checks...");
            return self.fallback_inventory(project_id).await;
        }

        let mut inventory = ResourceInventory::default();
        Self::collect_records(&mut inventory, outcome.items(), None);
        log::info!("  ✓ Retrieved {} asset(s) from Asset Inventory API", inventory.total_count());

        InventoryFetch::success(inventory)
    }
}
