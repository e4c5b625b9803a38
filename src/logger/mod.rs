pub mod fleet_report_logger;
pub mod progress_logger;
