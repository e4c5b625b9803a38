use std::sync::Arc;
use futures::StreamExt;
use crate::enums::analysis_outcome::{AnalysisOutcome, SkipReason};
use crate::enums::obsolescence_tier::ObsolescenceTier;
use crate::errors::{CloudsweepError, CloudsweepResult};
use crate::logger::progress_logger::ProgressLogger;
use crate::services::analysis_store::AnalysisStore;
use crate::services::project_analyzer::ProjectAnalyzer;
use crate::structs::project_descriptor::ProjectDescriptor;
use crate::structs::scan_options::ScanOptions;
use crate::structs::scan_summary::ScanSummary;
use crate::traits::project_source::ProjectSource;

enum DispatchOutcome {
    Completed,
    Skipped,
}

/// Turns the project list into a completed scan: resume-or-fresh, the
/// pending filter, bounded fan-out, and final report emission. All
/// shared mutable state lives in the store; the coordinator aggregates
/// dispatch results only after every task has joined.
pub struct ScanCoordinator {
    source: Arc<dyn ProjectSource>,
    analyzer: Arc<ProjectAnalyzer>,
    store: Arc<AnalysisStore>,
    options: ScanOptions,
}

impl ScanCoordinator {
    pub fn new(
        source: Arc<dyn ProjectSource>,
        analyzer: Arc<ProjectAnalyzer>,
        store: Arc<AnalysisStore>,
        options: ScanOptions,
    ) -> Self {
        Self { source, analyzer, store, options }
    }

    pub async fn run(&self) -> CloudsweepResult<ScanSummary> {
        if self.options.fresh {
            self.store.clear().await;
        } else {
            self.store.load().await;
        }

        log::info!("📦 STEP 1: Fetching all projects...");
        let mut all_projects = self.source.list_projects().await?;
        if all_projects.is_empty() {
            return Err(CloudsweepError::fleet_error(
                "projects list",
                "no projects found or accessible",
            ));
        }

        if let Some(limit) = self.options.limit {
            if limit < all_projects.len() {
                all_projects.truncate(limit);
                log::warn!("⚠️ Limited to first {} projects for analysis", limit);
            }
        }

        let pending = self.store.pending(&all_projects);

        let dispatch_result = if pending.is_empty() {
            log::info!("✅ All projects already analyzed! Generating final report...");
            Ok((0, 0))
        } else {
            log::info!("Will analyze {} project(s)", pending.len());
            log::info!("🔎 STEP 2: Analyzing each project...");
            if self.options.sequential {
                self.run_sequential(&pending).await
            } else {
                Ok(self.run_parallel(pending).await)
            }
        };

        // Finalize even on a strict-mode abort: completed work stays
        // persisted with the in-progress flag lowered.
        log::info!("📄 STEP 3: Finalizing...");
        self.store.finalize().await;

        let (analyzed, skipped) = dispatch_result?;
        Ok(self.summarize(analyzed, skipped))
    }

    /// Bounded worker-pool mode. Timeouts and per-project failures are
    /// always converted to skips here — one slow project must never
    /// cancel its siblings.
    async fn run_parallel(&self, pending: Vec<ProjectDescriptor>) -> (usize, usize) {
        let total = pending.len();
        let workers = self.options.workers.max(1);
        log::info!("🚀 Starting parallel analysis with {} workers...", workers);

        let progress = Arc::new(ProgressLogger::new(total));
        let outcomes: Vec<DispatchOutcome> = futures::stream::iter(pending.into_iter().map(|project| {
            let analyzer = Arc::clone(&self.analyzer);
            let store = Arc::clone(&self.store);
            let progress = Arc::clone(&progress);
            async move {
                match analyzer.analyze(&project).await {
                    Ok(AnalysisOutcome::Analyzed(record)) => {
                        store.insert(record).await;
                        progress.completed(&project.project_id);
                        DispatchOutcome::Completed
                    }
                    Ok(AnalysisOutcome::Skipped(reason)) => {
                        progress.skipped(&project.project_id, reason.describe());
                        DispatchOutcome::Skipped
                    }
                    Err(e) => {
                        progress.skipped(&project.project_id, &e.to_string());
                        DispatchOutcome::Skipped
                    }
                }
            }
        }))
        .buffer_unordered(workers)
        .collect()
        .await;

        let skipped = outcomes
            .iter()
            .filter(|outcome| matches!(outcome, DispatchOutcome::Skipped))
            .count();
        let analyzed = total - skipped;
        log::info!("✓ Parallel analysis complete: {}/{} projects analyzed", analyzed, total);
        (analyzed, skipped)
    }

    /// One project at a time, deterministic log order. Strict mode
    /// turns the first timeout into a scan-level abort; everything
    /// already completed has been persisted by then.
    async fn run_sequential(&self, pending: &[ProjectDescriptor]) -> CloudsweepResult<(usize, usize)> {
        let total = pending.len();
        let mut analyzed = 0;
        let mut skipped = 0;

        for (index, project) in pending.iter().enumerate() {
            log::info!("[{}/{}] Starting analysis...", index + 1, total);
            match self.analyzer.analyze(project).await {
                Ok(AnalysisOutcome::Analyzed(record)) => {
                    self.store.insert(record).await;
                    analyzed += 1;
                    log::info!("[{}/{}] ✓ Completed: {}", index + 1, total, project.project_id);
                }
                Ok(AnalysisOutcome::Skipped(SkipReason::Timeout)) if !self.options.skip_on_timeout => {
                    log::error!("[{}/{}] ✗ Timeout analyzing {}", index + 1, total, project.project_id);
                    return Err(CloudsweepError::scan_aborted(
                        analyzed,
                        "inventory fetch timed out with skip-on-timeout disabled",
                    ));
                }
                Ok(AnalysisOutcome::Skipped(reason)) => {
                    skipped += 1;
                    log::warn!(
                        "[{}/{}] ⚠️ Skipped {}: {}",
                        index + 1,
                        total,
                        project.project_id,
                        reason.describe()
                    );
                }
                Err(e) => {
                    skipped += 1;
                    log::error!(
                        "[{}/{}] ✗ Error analyzing {}: {}",
                        index + 1,
                        total,
                        project.project_id,
                        e
                    );
                }
            }
        }

        Ok((analyzed, skipped))
    }

    fn summarize(&self, analyzed: usize, skipped: usize) -> ScanSummary {
        let mut summary = ScanSummary { analyzed, skipped, ..Default::default() };
        for record in self.store.snapshot() {
            match ObsolescenceTier::of(&record) {
                ObsolescenceTier::Obsolete => summary.obsolete += 1,
                ObsolescenceTier::PotentiallyObsolete => summary.potentially_obsolete += 1,
                ObsolescenceTier::Active => summary.active += 1,
            }
        }
        summary
    }
}
