pub mod analysis_record;
pub mod cli;
pub mod config;
pub mod deletion_plan;
pub mod project_descriptor;
pub mod report;
pub mod resource_counts;
pub mod resource_inventory;
pub mod resource_record;
pub mod scan_options;
pub mod scan_summary;
