use crate::structs::cli::Cli;
use clap::Parser;
use crate::workers::command_runner::CommandRunner;

mod structs;
mod services;
mod helpers;
mod enums;
mod traits;
mod errors;
mod logger;
mod config;
mod workers;

#[tokio::main]
async fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_secs()
        .init();

    let cli = Cli::parse();
    let mut runner = CommandRunner::new();
    if let Err(e) = runner.run_command(cli.command).await {
        let severity = e.severity();
        eprintln!("{} [{}] {}", severity.emoji(), severity.name(), e.user_message());
        if e.is_recoverable() {
            eprintln!("🔄 This error is recoverable - you can retry the operation");
        }
        std::process::exit(1);
    }
}
