use serde::{Deserialize, Serialize};

/// Per-category resource counts — the only resource data an analysis
/// record retains, to keep the persisted artifacts small.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResourceCounts {
    pub instances: usize,
    pub disks: usize,
    pub snapshots: usize,
    pub images: usize,
    pub buckets: usize,
    pub sql_instances: usize,
    pub app_engines: usize,
    pub cloud_functions: usize,
    pub other: usize,
}

impl ResourceCounts {
    pub fn total(&self) -> usize {
        self.instances
            + self.disks
            + self.snapshots
            + self.images
            + self.buckets
            + self.sql_instances
            + self.app_engines
            + self.cloud_functions
            + self.other
    }
}
