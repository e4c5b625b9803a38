pub mod analysis_outcome;
pub mod commands;
pub mod fetch_outcome;
pub mod obsolescence_tier;
pub mod resource_category;
