use async_trait::async_trait;
use crate::errors::CloudsweepResult;
use crate::structs::project_descriptor::ProjectDescriptor;

/// Fleet enumeration boundary. The production implementation shells
/// out to gcloud; tests substitute a fixed fleet.
#[async_trait]
pub trait ProjectSource: Send + Sync {
    async fn list_projects(&self) -> CloudsweepResult<Vec<ProjectDescriptor>>;

    /// Per-project detail, used only when the listing omitted the
    /// lifecycle state or project number.
    async fn describe_project(&self, project_id: &str) -> CloudsweepResult<ProjectDescriptor>;
}
