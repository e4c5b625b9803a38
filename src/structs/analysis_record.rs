use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use crate::structs::resource_counts::ResourceCounts;

/// The durable unit of scan work: one project's verdict plus the
/// counts that justify it. Inserted into the store exactly once per
/// scan and never mutated in place; a fresh start replaces it
/// wholesale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisRecord {
    pub project_id: String,
    pub project_name: String,
    pub project_number: String,
    pub lifecycle_state: String,
    pub total_resources: usize,
    pub resource_counts: ResourceCounts,
    pub last_activity: Option<NaiveDateTime>,
    pub days_since_activity: Option<i64>,
    pub is_obsolete: bool,
    pub obsolete_reasons: Vec<String>,
}
