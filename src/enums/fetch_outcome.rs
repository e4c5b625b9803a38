use serde::{Deserialize, Serialize};

/// How an inventory fetch concluded. The bulk path and the per-service
/// fallback path report through the same three outcomes; callers never
/// learn which path ran.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FetchOutcome {
    Success,
    Timeout,
    Failure,
}
