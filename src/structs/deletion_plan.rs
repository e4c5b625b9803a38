use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use crate::enums::obsolescence_tier::ObsolescenceTier;
use crate::structs::analysis_record::AnalysisRecord;
use crate::structs::resource_counts::ResourceCounts;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeletionStatus {
    SafeToDelete,
    ReviewRequired,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeletionMetadata {
    pub generated_at: NaiveDateTime,
    pub generated_by: String,
    pub version: String,
    pub in_progress: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeletionSummary {
    pub total_safe_to_delete: usize,
    pub total_need_review: usize,
    pub total_candidates: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeletionEntry {
    pub project_id: String,
    pub project_name: String,
    pub project_number: String,
    pub lifecycle_state: String,
    pub total_resources: usize,
    pub last_activity: Option<NaiveDateTime>,
    pub days_since_activity: Option<i64>,
    pub obsolete_reasons: Vec<String>,
    pub deletion_status: DeletionStatus,
    pub resource_counts: ResourceCounts,
}

impl DeletionEntry {
    fn from_record(record: &AnalysisRecord, deletion_status: DeletionStatus) -> Self {
        Self {
            project_id: record.project_id.clone(),
            project_name: record.project_name.clone(),
            project_number: record.project_number.clone(),
            lifecycle_state: record.lifecycle_state.clone(),
            total_resources: record.total_resources,
            last_activity: record.last_activity,
            days_since_activity: record.days_since_activity,
            obsolete_reasons: record.obsolete_reasons.clone(),
            deletion_status,
            resource_counts: record.resource_counts.clone(),
        }
    }
}

/// The deletion-ready extract — the second persisted artifact, shaped
/// for a downstream deletion tool. This tool itself never deletes
/// anything.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeletionPlan {
    pub metadata: DeletionMetadata,
    pub summary: DeletionSummary,
    pub projects_to_delete: Vec<DeletionEntry>,
    pub projects_to_review: Vec<DeletionEntry>,
}

impl DeletionPlan {
    pub fn build(records: &[AnalysisRecord], generated_at: NaiveDateTime, in_progress: bool) -> Self {
        let mut projects_to_delete = Vec::new();
        let mut projects_to_review = Vec::new();

        for record in records {
            match ObsolescenceTier::of(record) {
                ObsolescenceTier::Obsolete => {
                    projects_to_delete.push(DeletionEntry::from_record(record, DeletionStatus::SafeToDelete));
                }
                ObsolescenceTier::PotentiallyObsolete => {
                    projects_to_review.push(DeletionEntry::from_record(record, DeletionStatus::ReviewRequired));
                }
                ObsolescenceTier::Active => {}
            }
        }

        Self {
            metadata: DeletionMetadata {
                generated_at,
                generated_by: env!("CARGO_PKG_NAME").to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                in_progress,
            },
            summary: DeletionSummary {
                total_safe_to_delete: projects_to_delete.len(),
                total_need_review: projects_to_review.len(),
                total_candidates: projects_to_delete.len() + projects_to_review.len(),
            },
            projects_to_delete,
            projects_to_review,
        }
    }
}
