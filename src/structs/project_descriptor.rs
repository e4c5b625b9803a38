use serde::{Deserialize, Serialize};

/// One row of `gcloud projects list`. Everything but the id is optional
/// because the listing may omit fields the describe call backfills.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectDescriptor {
    pub project_id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub project_number: Option<String>,
    #[serde(default)]
    pub lifecycle_state: Option<String>,
}

impl ProjectDescriptor {
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or("N/A")
    }
}
