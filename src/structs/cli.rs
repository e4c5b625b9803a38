use clap::Parser;
use crate::enums::commands::Commands;

#[derive(Parser)]
#[clap(name = "cloudsweep")]
#[clap(about = "Find obsolete GCP projects", long_about = None)]
pub struct Cli {
    #[clap(subcommand)]
    pub command: Commands,
}
