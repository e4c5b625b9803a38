use std::process::Stdio;
use std::time::{Duration, Instant};
use serde_json::Value;
use tokio::process::Command;
use tokio::time::timeout;

/// How a gcloud invocation ended. `timed_out` implies `!success`; the
/// expired process is killed, never awaited.
pub struct GcloudOutcome {
    pub success: bool,
    pub timed_out: bool,
    pub data: Value,
}

impl GcloudOutcome {
    fn failure() -> Self {
        Self { success: false, timed_out: false, data: Value::Null }
    }

    fn timeout() -> Self {
        Self { success: false, timed_out: true, data: Value::Null }
    }

    pub fn items(&self) -> &[Value] {
        self.data.as_array().map(Vec::as_slice).unwrap_or(&[])
    }
}

/// Runs gcloud commands with JSON output and a hard wall-clock limit.
pub struct GcloudRunner {
    timeout: Duration,
}

impl GcloudRunner {
    pub fn new(timeout: Duration) -> Self {
        Self { timeout }
    }

    pub async fn run_json(&self, args: &[&str]) -> GcloudOutcome {
        self.run_json_with_timeout(args, self.timeout).await
    }

    pub async fn run_json_with_timeout(&self, args: &[&str], limit: Duration) -> GcloudOutcome {
        let mut command = Command::new("gcloud");
        command.args(args);
        if !args.iter().any(|arg| arg.starts_with("--format")) {
            command.args(["--format", "json"]);
        }
        command
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true);

        log::debug!("🔧 Executing: gcloud {} (timeout: {}s)", args.join(" "), limit.as_secs());

        let started = Instant::now();
        let child = match command.spawn() {
            Ok(child) => child,
            Err(e) => {
                log::error!("✗ Failed to spawn gcloud: {}", e);
                return GcloudOutcome::failure();
            }
        };

        match timeout(limit, child.wait_with_output()).await {
            Ok(Ok(output)) => {
                let elapsed = started.elapsed().as_secs_f64();
                if output.status.success() {
                    log::debug!("✓ Completed in {:.2}s (output: {} bytes)", elapsed, output.stdout.len());
                    match serde_json::from_slice(&output.stdout) {
                        Ok(data) => GcloudOutcome { success: true, timed_out: false, data },
                        Err(_) => {
                            log::warn!("⚠️ Could not parse JSON response, treating as empty");
                            GcloudOutcome { success: true, timed_out: false, data: Value::Array(Vec::new()) }
                        }
                    }
                } else {
                    let stderr = String::from_utf8_lossy(&output.stderr);
                    let preview: String = stderr.chars().take(150).collect::<String>().replace('\n', " ");
                    log::error!("✗ Failed in {:.2}s (exit code: {:?})", elapsed, output.status.code());
                    if !preview.is_empty() {
                        log::error!("  Error preview: {}...", preview);
                    }
                    GcloudOutcome::failure()
                }
            }
            Ok(Err(e)) => {
                log::error!("✗ Could not collect gcloud output: {}", e);
                GcloudOutcome::failure()
            }
            Err(_) => {
                // Dropping the wait future kills the child (kill_on_drop).
                log::warn!(
                    "⏰ Timeout after {:.2}s (limit: {}s), abandoning command",
                    started.elapsed().as_secs_f64(),
                    limit.as_secs()
                );
                GcloudOutcome::timeout()
            }
        }
    }
}
