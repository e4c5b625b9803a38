use crate::structs::analysis_record::AnalysisRecord;

/// Reporting bucket derived from an analysis record.
///
/// Never persisted as its own field: the boolean flag plus the reason
/// list are the source of truth, and every consumer (report
/// partitioning, deletion extraction, console summary) re-derives the
/// tier through this one function so they cannot drift apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObsolescenceTier {
    Obsolete,
    PotentiallyObsolete,
    Active,
}

impl ObsolescenceTier {
    pub fn of(record: &AnalysisRecord) -> Self {
        if record.is_obsolete {
            Self::Obsolete
        } else if !record.obsolete_reasons.is_empty() {
            Self::PotentiallyObsolete
        } else {
            Self::Active
        }
    }
}
