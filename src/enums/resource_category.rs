use std::collections::HashMap;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

static ASSET_TYPE_CATEGORIES: Lazy<HashMap<&'static str, ResourceCategory>> = Lazy::new(|| {
    HashMap::from([
        ("compute.googleapis.com/Instance", ResourceCategory::Instances),
        ("compute.googleapis.com/Disk", ResourceCategory::Disks),
        ("compute.googleapis.com/Snapshot", ResourceCategory::Snapshots),
        ("compute.googleapis.com/Image", ResourceCategory::Images),
        ("storage.googleapis.com/Bucket", ResourceCategory::Buckets),
        ("sqladmin.googleapis.com/Instance", ResourceCategory::SqlInstances),
        ("appengine.googleapis.com/Application", ResourceCategory::AppEngines),
        ("appengine.googleapis.com/Version", ResourceCategory::AppEngines),
        ("cloudfunctions.googleapis.com/CloudFunction", ResourceCategory::CloudFunctions),
    ])
});

/// Every inventoried resource lands in exactly one category; anything
/// the asset-type table does not recognize falls into `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResourceCategory {
    Instances,
    Disks,
    Snapshots,
    Images,
    Buckets,
    SqlInstances,
    AppEngines,
    CloudFunctions,
    Other,
}

/// The service groups an operator can toggle off for a scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoryGroup {
    Compute,
    Storage,
    Sql,
    Other,
    /// The unclassified bucket; never toggleable.
    Unclassified,
}

impl ResourceCategory {
    pub const ALL: [Self; 9] = [
        Self::Instances,
        Self::Disks,
        Self::Snapshots,
        Self::Images,
        Self::Buckets,
        Self::SqlInstances,
        Self::AppEngines,
        Self::CloudFunctions,
        Self::Other,
    ];

    pub fn from_asset_type(asset_type: &str) -> Self {
        ASSET_TYPE_CATEGORIES.get(asset_type).copied().unwrap_or(Self::Other)
    }

    pub fn group(&self) -> CategoryGroup {
        match self {
            Self::Instances | Self::Disks | Self::Snapshots | Self::Images => CategoryGroup::Compute,
            Self::Buckets => CategoryGroup::Storage,
            Self::SqlInstances => CategoryGroup::Sql,
            Self::AppEngines | Self::CloudFunctions => CategoryGroup::Other,
            Self::Other => CategoryGroup::Unclassified,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Instances => "instances",
            Self::Disks => "disks",
            Self::Snapshots => "snapshots",
            Self::Images => "images",
            Self::Buckets => "buckets",
            Self::SqlInstances => "sql_instances",
            Self::AppEngines => "app_engines",
            Self::CloudFunctions => "cloud_functions",
            Self::Other => "other",
        }
    }
}
