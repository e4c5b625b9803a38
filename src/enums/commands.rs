use clap::Subcommand;

#[derive(Subcommand)]
pub enum Commands {
    /// Create a sample configuration file
    Init,
    /// Analyze every accessible project and classify obsolete ones
    Scan {
        /// Timeout in seconds for each gcloud command
        #[clap(long)]
        timeout: Option<u64>,
        /// Abort the scan instead of skipping projects when commands time out
        #[clap(long)]
        no_skip_timeout: bool,
        /// Limit number of projects to analyze (useful for testing)
        #[clap(short, long)]
        limit: Option<usize>,
        /// Skip checking compute resources (VM instances, disks, snapshots, images)
        #[clap(long)]
        skip_compute: bool,
        /// Skip checking storage resources (Cloud Storage buckets)
        #[clap(long)]
        skip_storage: bool,
        /// Skip checking SQL resources (Cloud SQL instances)
        #[clap(long)]
        skip_sql: bool,
        /// Skip checking other resources (App Engine, Cloud Functions)
        #[clap(long)]
        skip_other: bool,
        /// Number of parallel workers
        #[clap(short, long)]
        workers: Option<usize>,
        /// Disable parallel processing (slower, for debugging)
        #[clap(long)]
        sequential: bool,
        /// Clear output files and start fresh (default: resume)
        #[clap(long)]
        fresh: bool,
    },
    /// Print the categorized summary from the persisted report
    Report,
    /// Check the configuration file for problems
    Validate,
    /// Delete both persisted output files
    Clean,
}
