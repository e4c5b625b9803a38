use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use crate::enums::obsolescence_tier::ObsolescenceTier;
use crate::structs::analysis_record::AnalysisRecord;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportMetadata {
    pub generated_at: NaiveDateTime,
    pub total_analyzed: usize,
    pub in_progress: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportSummary {
    pub obsolete: usize,
    pub potentially_obsolete: usize,
    pub active: usize,
}

/// The full categorized report — one of the two persisted artifacts,
/// and the one the resume path reads back.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FullReport {
    pub metadata: ReportMetadata,
    pub summary: ReportSummary,
    pub obsolete: Vec<AnalysisRecord>,
    pub potentially_obsolete: Vec<AnalysisRecord>,
    pub active: Vec<AnalysisRecord>,
}

impl FullReport {
    /// Partition records by the derived tier. Callers pass records
    /// already sorted by project id so the artifact is deterministic.
    pub fn build(records: Vec<AnalysisRecord>, generated_at: NaiveDateTime, in_progress: bool) -> Self {
        let total_analyzed = records.len();
        let mut obsolete = Vec::new();
        let mut potentially_obsolete = Vec::new();
        let mut active = Vec::new();

        for record in records {
            match ObsolescenceTier::of(&record) {
                ObsolescenceTier::Obsolete => obsolete.push(record),
                ObsolescenceTier::PotentiallyObsolete => potentially_obsolete.push(record),
                ObsolescenceTier::Active => active.push(record),
            }
        }

        Self {
            metadata: ReportMetadata { generated_at, total_analyzed, in_progress },
            summary: ReportSummary {
                obsolete: obsolete.len(),
                potentially_obsolete: potentially_obsolete.len(),
                active: active.len(),
            },
            obsolete,
            potentially_obsolete,
            active,
        }
    }

    /// All records regardless of tier, for store reconstruction.
    pub fn into_records(self) -> Vec<AnalysisRecord> {
        let mut records = self.obsolete;
        records.extend(self.potentially_obsolete);
        records.extend(self.active);
        records
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::structs::resource_counts::ResourceCounts;
    use chrono::Utc;

    fn record(id: &str, is_obsolete: bool, reasons: Vec<&str>) -> AnalysisRecord {
        AnalysisRecord {
            project_id: id.to_string(),
            project_name: id.to_string(),
            project_number: "1".to_string(),
            lifecycle_state: "ACTIVE".to_string(),
            total_resources: 1,
            resource_counts: ResourceCounts { buckets: 1, ..Default::default() },
            last_activity: None,
            days_since_activity: None,
            is_obsolete,
            obsolete_reasons: reasons.into_iter().map(String::from).collect(),
        }
    }

    #[test]
    fn partition_is_exhaustive_and_disjoint() {
        let records = vec![
            record("a", true, vec!["No resources found"]),
            record("b", false, vec!["Low activity (last used 100 days ago)"]),
            record("c", false, vec![]),
        ];
        let report = FullReport::build(records, Utc::now().naive_utc(), true);

        assert_eq!(report.metadata.total_analyzed, 3);
        assert_eq!(report.summary.obsolete, 1);
        assert_eq!(report.summary.potentially_obsolete, 1);
        assert_eq!(report.summary.active, 1);
        assert_eq!(report.obsolete[0].project_id, "a");
        assert_eq!(report.potentially_obsolete[0].project_id, "b");
        assert_eq!(report.active[0].project_id, "c");
    }

    #[test]
    fn into_records_recovers_every_record() {
        let records = vec![
            record("a", true, vec!["No resources found"]),
            record("b", false, vec![]),
        ];
        let report = FullReport::build(records.clone(), Utc::now().naive_utc(), false);
        let mut recovered = report.into_records();
        recovered.sort_by(|x, y| x.project_id.cmp(&y.project_id));
        assert_eq!(recovered, records);
    }
}
