use std::time::Duration;
use crate::config::constants::ACTIVE_PROJECTS_SHOWN;
use crate::enums::obsolescence_tier::ObsolescenceTier;
use crate::structs::analysis_record::AnalysisRecord;
use crate::structs::scan_options::ScanOptions;
use crate::structs::scan_summary::ScanSummary;

pub struct FleetReportLogger {}

impl FleetReportLogger {
    pub fn print_scan_header(options: &ScanOptions) {
        log::info!("🔍 Google Cloud Project Obsolete Analysis");
        log::info!("{}", "=".repeat(80));
        log::info!("Timeout per command: {}s", options.timeout.as_secs());
        if options.sequential {
            log::info!("Mode: Sequential (single-threaded)");
        } else {
            log::info!("Mode: Parallel ({} workers)", options.workers);
        }
        if options.fresh {
            log::info!("Fresh: Starting from scratch (clearing existing progress)");
        } else {
            log::info!("Resume: Will skip already-analyzed projects (use --fresh to restart)");
        }
        if let Some(limit) = options.limit {
            log::info!("Limit: Analyzing first {} projects only", limit);
        }

        let mut skipped_groups = Vec::new();
        if !options.categories.compute {
            skipped_groups.push("Compute");
        }
        if !options.categories.storage {
            skipped_groups.push("Storage");
        }
        if !options.categories.sql {
            skipped_groups.push("SQL");
        }
        if !options.categories.other {
            skipped_groups.push("Other (App Engine, Cloud Functions)");
        }
        if !skipped_groups.is_empty() {
            log::info!("Skipping services: {}", skipped_groups.join(", "));
        }
        log::info!("{}", "=".repeat(80));
    }

    pub fn print_summary(records: &[AnalysisRecord]) {
        let mut obsolete: Vec<&AnalysisRecord> = Vec::new();
        let mut potentially_obsolete: Vec<&AnalysisRecord> = Vec::new();
        let mut active: Vec<&AnalysisRecord> = Vec::new();
        for record in records {
            match ObsolescenceTier::of(record) {
                ObsolescenceTier::Obsolete => obsolete.push(record),
                ObsolescenceTier::PotentiallyObsolete => potentially_obsolete.push(record),
                ObsolescenceTier::Active => active.push(record),
            }
        }

        log::info!("{}", "=".repeat(80));
        log::info!("📊 ANALYSIS SUMMARY");
        log::info!("{}", "=".repeat(80));

        log::info!("🔴 DEFINITELY OBSOLETE ({} projects):", obsolete.len());
        if obsolete.is_empty() {
            log::info!("  None found");
        }
        for record in &obsolete {
            log::info!("  • {} ({})", record.project_name, record.project_id);
            log::info!("    State: {}", record.lifecycle_state);
            log::info!("    Resources: {}", record.total_resources);
            Self::print_last_activity(record);
            log::info!("    Reasons: {}", record.obsolete_reasons.join(", "));
        }

        log::info!("🟡 POTENTIALLY OBSOLETE ({} projects):", potentially_obsolete.len());
        if potentially_obsolete.is_empty() {
            log::info!("  None found");
        }
        for record in &potentially_obsolete {
            log::info!("  • {} ({})", record.project_name, record.project_id);
            log::info!("    Resources: {}", record.total_resources);
            Self::print_last_activity(record);
            log::info!("    Concerns: {}", record.obsolete_reasons.join(", "));
        }

        log::info!("🟢 ACTIVE PROJECTS ({} projects):", active.len());
        if active.is_empty() {
            log::info!("  None found");
        }
        for record in active.iter().take(ACTIVE_PROJECTS_SHOWN) {
            log::info!(
                "  • {} ({}) - {} resources",
                record.project_name,
                record.project_id,
                record.total_resources
            );
        }
        if active.len() > ACTIVE_PROJECTS_SHOWN {
            log::info!("  ... and {} more", active.len() - ACTIVE_PROJECTS_SHOWN);
        }
    }

    pub fn print_scan_footer(
        summary: &ScanSummary,
        elapsed: Duration,
        report_path: &std::path::Path,
        deletion_path: &std::path::Path,
    ) {
        log::info!("{}", "=".repeat(80));
        log::info!("✅ Analysis complete!");
        log::info!(
            "Total time: {:.2} seconds ({:.2} minutes)",
            elapsed.as_secs_f64(),
            elapsed.as_secs_f64() / 60.0
        );
        if summary.skipped > 0 {
            log::warn!("⚠️ {} project(s) failed/timed out and were skipped", summary.skipped);
        }
        log::info!(
            "📊 {} project(s) on record ({} analyzed this run)",
            summary.total_recorded(),
            summary.analyzed
        );
        log::info!("Generated files (updated after every project):");
        log::info!("  - {} - Full categorized report (also used for resume)", report_path.display());
        log::info!("  - {} - Deletion-ready file", deletion_path.display());
        log::info!("{}", "=".repeat(80));
    }

    fn print_last_activity(record: &AnalysisRecord) {
        if let Some(last_activity) = record.last_activity {
            let days = record
                .days_since_activity
                .map_or_else(|| "?".to_string(), |d| d.to_string());
            log::info!(
                "    Last Activity: {} ({} days ago)",
                last_activity.format("%Y-%m-%d"),
                days
            );
        }
    }
}
