use crate::structs::analysis_record::AnalysisRecord;

/// Why a project was skipped for this run instead of analyzed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    Timeout,
    ProviderFailure,
}

impl SkipReason {
    pub fn describe(&self) -> &'static str {
        match self {
            Self::Timeout => "inventory fetch timed out",
            Self::ProviderFailure => "inventory provider failed",
        }
    }
}

/// Result of one project's trip through the analysis pipeline.
///
/// Skipped projects are never inserted into the store; they stay out of
/// both persisted artifacts and remain pending for a future run.
pub enum AnalysisOutcome {
    Analyzed(AnalysisRecord),
    Skipped(SkipReason),
}
