use std::path::{Path, PathBuf};
use chrono::Local;
use dashmap::DashMap;
use serde::Serialize;
use tokio::sync::Mutex;
use crate::errors::CloudsweepResult;
use crate::structs::analysis_record::AnalysisRecord;
use crate::structs::deletion_plan::DeletionPlan;
use crate::structs::project_descriptor::ProjectDescriptor;
use crate::structs::report::FullReport;

/// In-memory analyses keyed by project id, mirrored to both persisted
/// artifacts after every insertion so that a killed scan loses at most
/// its in-flight projects.
///
/// Map mutation and file I/O are synchronized separately: the map is a
/// concurrent structure, and a dedicated mutex serializes flushes so no
/// lock is ever held across both. A flush always serializes the
/// complete current map, so racing flushes converge — whichever
/// finishes last wrote a superset of the earlier one.
pub struct AnalysisStore {
    report_path: PathBuf,
    deletion_path: PathBuf,
    analyses: DashMap<String, AnalysisRecord>,
    flush_lock: Mutex<()>,
}

impl AnalysisStore {
    pub fn new(report_path: PathBuf, deletion_path: PathBuf) -> Self {
        Self {
            report_path,
            deletion_path,
            analyses: DashMap::new(),
            flush_lock: Mutex::new(()),
        }
    }

    /// Rebuild the map from a previously persisted report. A missing or
    /// unparseable file means no prior progress — never an error.
    pub async fn load(&self) -> usize {
        self.analyses.clear();

        let bytes = match tokio::fs::read(&self.report_path).await {
            Ok(bytes) => bytes,
            Err(_) => return 0,
        };

        match serde_json::from_slice::<FullReport>(&bytes) {
            Ok(report) => {
                for record in report.into_records() {
                    self.analyses.insert(record.project_id.clone(), record);
                }
                let loaded = self.analyses.len();
                if loaded > 0 {
                    log::info!("✅ Loaded progress: {} projects already analyzed", loaded);
                }
                loaded
            }
            Err(e) => {
                log::warn!("⚠️ Could not load previous progress ({}), starting fresh", e);
                0
            }
        }
    }

    /// Record one completed analysis and immediately rewrite both
    /// artifacts.
    pub async fn insert(&self, record: AnalysisRecord) {
        self.analyses.insert(record.project_id.clone(), record);
        self.flush(true).await;
    }

    /// The resume filter: projects not yet present in the store.
    pub fn pending(&self, all_projects: &[ProjectDescriptor]) -> Vec<ProjectDescriptor> {
        let pending: Vec<ProjectDescriptor> = all_projects
            .iter()
            .filter(|project| !self.analyses.contains_key(&project.project_id))
            .cloned()
            .collect();

        let already_analyzed = all_projects.len() - pending.len();
        if already_analyzed > 0 {
            log::info!("⏭️ Skipping {} already-analyzed projects", already_analyzed);
        }
        pending
    }

    /// Fresh-start path: drop both artifacts and empty the map.
    pub async fn clear(&self) {
        for path in [&self.report_path, &self.deletion_path] {
            if let Err(e) = tokio::fs::remove_file(path).await {
                if e.kind() != std::io::ErrorKind::NotFound {
                    log::warn!("⚠️ Could not remove {}: {}", path.display(), e);
                }
            }
        }
        self.analyses.clear();
        log::info!("🧹 Output files cleared");
    }

    /// One last flush with the in-progress flag lowered.
    pub async fn finalize(&self) {
        self.flush(false).await;
        log::info!("💾 Final files saved:");
        log::info!("  - {}", self.report_path.display());
        log::info!("  - {}", self.deletion_path.display());
    }

    pub fn len(&self) -> usize {
        self.analyses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.analyses.is_empty()
    }

    /// All records, sorted by project id so artifacts and summaries are
    /// deterministic regardless of completion order.
    pub fn snapshot(&self) -> Vec<AnalysisRecord> {
        let mut records: Vec<AnalysisRecord> =
            self.analyses.iter().map(|entry| entry.value().clone()).collect();
        records.sort_by(|a, b| a.project_id.cmp(&b.project_id));
        records
    }

    async fn flush(&self, in_progress: bool) {
        let _guard = self.flush_lock.lock().await;

        let records = self.snapshot();
        let generated_at = Local::now().naive_local();
        let report = FullReport::build(records.clone(), generated_at, in_progress);
        let plan = DeletionPlan::build(&records, generated_at, in_progress);

        // Write failures leave the in-memory map as the source of truth
        // until the next flush succeeds.
        if let Err(e) = Self::write_json(&self.report_path, &report).await {
            log::warn!("⚠️ Could not save report: {}", e);
        }
        if let Err(e) = Self::write_json(&self.deletion_path, &plan).await {
            log::warn!("⚠️ Could not save deletion file: {}", e);
        }
    }

    async fn write_json<T: Serialize>(path: &Path, value: &T) -> CloudsweepResult<()> {
        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }

        let bytes = serde_json::to_vec_pretty(value)?;
        let tmp = path.with_extension("json.tmp");
        tokio::fs::write(&tmp, bytes).await?;
        tokio::fs::rename(&tmp, path).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::structs::resource_counts::ResourceCounts;
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn store_in(dir: &TempDir) -> AnalysisStore {
        AnalysisStore::new(dir.path().join("report.json"), dir.path().join("deletion.json"))
    }

    fn record(id: &str, is_obsolete: bool, reasons: Vec<&str>) -> AnalysisRecord {
        AnalysisRecord {
            project_id: id.to_string(),
            project_name: format!("{}-name", id),
            project_number: "42".to_string(),
            lifecycle_state: "ACTIVE".to_string(),
            total_resources: 2,
            resource_counts: ResourceCounts { instances: 1, buckets: 1, ..Default::default() },
            last_activity: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap().and_hms_opt(0, 0, 0),
            days_since_activity: Some(120),
            is_obsolete,
            obsolete_reasons: reasons.into_iter().map(String::from).collect(),
        }
    }

    fn descriptor(id: &str) -> ProjectDescriptor {
        ProjectDescriptor {
            project_id: id.to_string(),
            name: Some(id.to_string()),
            project_number: Some("42".to_string()),
            lifecycle_state: Some("ACTIVE".to_string()),
        }
    }

    #[tokio::test]
    async fn flush_then_reload_round_trips_every_record() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);

        store.insert(record("alpha", true, vec!["No resources found"])).await;
        store.insert(record("beta", false, vec!["Low activity (last used 120 days ago)"])).await;
        store.insert(record("gamma", false, vec![])).await;
        let before = store.snapshot();

        let reloaded = store_in(&dir);
        assert_eq!(reloaded.load().await, 3);
        assert_eq!(reloaded.snapshot(), before);
    }

    #[tokio::test]
    async fn missing_and_corrupt_reports_mean_empty_state() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        assert_eq!(store.load().await, 0);

        tokio::fs::write(dir.path().join("report.json"), b"{ not json").await.unwrap();
        assert_eq!(store.load().await, 0);
        assert!(store.is_empty());
    }

    #[tokio::test]
    async fn pending_filters_out_recorded_projects() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        store.insert(record("alpha", false, vec![])).await;

        let all = vec![descriptor("alpha"), descriptor("beta")];
        let pending = store.pending(&all);
        assert_eq!(pending.len(), 1);
        assert_eq!(pending[0].project_id, "beta");
    }

    #[tokio::test]
    async fn clear_removes_both_artifacts() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        store.insert(record("alpha", false, vec![])).await;
        assert!(dir.path().join("report.json").exists());
        assert!(dir.path().join("deletion.json").exists());

        store.clear().await;
        assert!(!dir.path().join("report.json").exists());
        assert!(!dir.path().join("deletion.json").exists());
        assert!(store.is_empty());
    }

    #[tokio::test]
    async fn finalize_lowers_the_in_progress_flag() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        store.insert(record("alpha", true, vec!["No resources found"])).await;

        let bytes = tokio::fs::read(dir.path().join("report.json")).await.unwrap();
        let report: FullReport = serde_json::from_slice(&bytes).unwrap();
        assert!(report.metadata.in_progress);

        store.finalize().await;
        let bytes = tokio::fs::read(dir.path().join("report.json")).await.unwrap();
        let report: FullReport = serde_json::from_slice(&bytes).unwrap();
        assert!(!report.metadata.in_progress);
        assert_eq!(report.metadata.total_analyzed, 1);

        let bytes = tokio::fs::read(dir.path().join("deletion.json")).await.unwrap();
        let plan: DeletionPlan = serde_json::from_slice(&bytes).unwrap();
        assert!(!plan.metadata.in_progress);
        assert_eq!(plan.summary.total_safe_to_delete, 1);
    }

    #[tokio::test]
    async fn artifacts_never_keep_a_stale_tmp_file() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        store.insert(record("alpha", false, vec![])).await;

        assert!(!dir.path().join("report.json.tmp").exists());
        assert!(!dir.path().join("deletion.json.tmp").exists());
    }

    #[tokio::test]
    async fn concurrent_inserts_all_survive_the_last_flush() {
        let dir = TempDir::new().unwrap();
        let store = std::sync::Arc::new(store_in(&dir));

        let mut handles = Vec::new();
        for i in 0..8 {
            let store = std::sync::Arc::clone(&store);
            handles.push(tokio::spawn(async move {
                store.insert(record(&format!("project-{}", i), false, vec![])).await;
            }));
        }
        for handle in handles {
            handle.await.unwrap();
        }
        store.finalize().await;

        let reloaded = store_in(&dir);
        assert_eq!(reloaded.load().await, 8);
    }
}
