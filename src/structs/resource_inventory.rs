use std::collections::BTreeMap;
use crate::enums::resource_category::{CategoryGroup, ResourceCategory};
use crate::structs::resource_counts::ResourceCounts;
use crate::structs::resource_record::ResourceRecord;

/// Toggle state for the four service groups an operator can exclude
/// from a scan. `true` means the group is checked.
#[derive(Debug, Clone, Copy)]
pub struct CategoryToggles {
    pub compute: bool,
    pub storage: bool,
    pub sql: bool,
    pub other: bool,
}

impl Default for CategoryToggles {
    fn default() -> Self {
        Self { compute: true, storage: true, sql: true, other: true }
    }
}

impl CategoryToggles {
    pub fn allows(&self, category: ResourceCategory) -> bool {
        match category.group() {
            CategoryGroup::Compute => self.compute,
            CategoryGroup::Storage => self.storage,
            CategoryGroup::Sql => self.sql,
            CategoryGroup::Other => self.other,
            CategoryGroup::Unclassified => true,
        }
    }
}

/// A project's categorized resources. Each record lives in exactly one
/// category, so the total is always the sum of the per-category counts.
#[derive(Debug, Clone, Default)]
pub struct ResourceInventory {
    categories: BTreeMap<ResourceCategory, Vec<ResourceRecord>>,
}

impl ResourceInventory {
    pub fn push(&mut self, category: ResourceCategory, record: ResourceRecord) {
        self.categories.entry(category).or_default().push(record);
    }

    pub fn count_in(&self, category: ResourceCategory) -> usize {
        self.categories.get(&category).map_or(0, Vec::len)
    }

    pub fn total_count(&self) -> usize {
        self.categories.values().map(Vec::len).sum()
    }

    pub fn iter_records(&self) -> impl Iterator<Item = &ResourceRecord> {
        self.categories.values().flatten()
    }

    /// Drop every category whose service group is toggled off. Covers
    /// the bulk inventory path, which fetches everything regardless of
    /// toggles; the total reflects the filtered view afterwards.
    pub fn retain_enabled(&mut self, toggles: &CategoryToggles) {
        self.categories.retain(|category, _| toggles.allows(*category));
    }

    pub fn counts(&self) -> ResourceCounts {
        ResourceCounts {
            instances: self.count_in(ResourceCategory::Instances),
            disks: self.count_in(ResourceCategory::Disks),
            snapshots: self.count_in(ResourceCategory::Snapshots),
            images: self.count_in(ResourceCategory::Images),
            buckets: self.count_in(ResourceCategory::Buckets),
            sql_instances: self.count_in(ResourceCategory::SqlInstances),
            app_engines: self.count_in(ResourceCategory::AppEngines),
            cloud_functions: self.count_in(ResourceCategory::CloudFunctions),
            other: self.count_in(ResourceCategory::Other),
        }
    }
}
