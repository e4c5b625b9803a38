use async_trait::async_trait;
use crate::errors::{CloudsweepError, CloudsweepResult};
use crate::services::gcloud::GcloudRunner;
use crate::structs::project_descriptor::ProjectDescriptor;
use crate::traits::project_source::ProjectSource;

/// Fleet enumeration over the gcloud CLI.
pub struct GcloudFleetCatalog {
    runner: GcloudRunner,
}

impl GcloudFleetCatalog {
    pub fn new(runner: GcloudRunner) -> Self {
        Self { runner }
    }
}

#[async_trait]
impl ProjectSource for GcloudFleetCatalog {
    async fn list_projects(&self) -> CloudsweepResult<Vec<ProjectDescriptor>> {
        log::info!("Fetching list of all accessible projects...");
        let outcome = self.runner.run_json(&["projects", "list"]).await;
        if !outcome.success {
            let reason = if outcome.timed_out { "command timed out" } else { "gcloud exited with an error" };
            return Err(CloudsweepError::fleet_error("projects list", reason));
        }

        let projects: Vec<ProjectDescriptor> = serde_json::from_value(outcome.data)?;
        log::info!("✅ Found {} project(s) accessible", projects.len());
        Ok(projects)
    }

    async fn describe_project(&self, project_id: &str) -> CloudsweepResult<ProjectDescriptor> {
        let outcome = self.runner.run_json(&["projects", "describe", project_id]).await;
        if !outcome.success {
            let reason = if outcome.timed_out { "command timed out" } else { "gcloud exited with an error" };
            return Err(CloudsweepError::fleet_error("projects describe", reason));
        }

        Ok(serde_json::from_value(outcome.data)?)
    }
}
