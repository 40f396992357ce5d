//! `run` command -- execute the full lifecycle and report the verdict

use std::io::Write;

use tracing::info;

use restcanary_core::config::CanaryConfig;
use restcanary_core::report::{RunReport, Verdict};
use restcanary_lifecycle::{HttpObjectsApi, LifecycleRunner};

use crate::error::CliError;
use crate::output::{OutputWriter, Render};

/// Execute the `run` command.
///
/// Builds the HTTP client from the service config, runs all six
/// scenarios, renders the report, and turns a non-passing run into a
/// [`CliError::ContractFailure`] so the process exits non-zero.
pub async fn execute(config: &CanaryConfig, writer: &OutputWriter) -> Result<(), CliError> {
    let api =
        HttpObjectsApi::from_config(&config.service).map_err(|e| CliError::Config(e.to_string()))?;
    let runner = LifecycleRunner::new(api, config);

    info!(base_url = %config.service.base_url, "starting lifecycle run");
    let report = runner.run().await;

    let failed = !report.is_success();
    let overall = report.overall().to_string();
    writer.render(&report)?;

    if failed {
        return Err(CliError::ContractFailure(overall));
    }
    Ok(())
}

impl Render for RunReport {
    fn render_text(&self, w: &mut dyn Write) -> std::io::Result<()> {
        use colored::Colorize;

        writeln!(w, "Lifecycle Run: {}", self.base_url.bold())?;
        writeln!(w, "Run ID: {}", self.run_id)?;
        writeln!(w)?;
        writeln!(w, "{:<16} {:<8} {:>8}", "Scenario", "Verdict", "Duration")?;
        writeln!(w, "{}", "-".repeat(64))?;

        for scenario in &self.scenarios {
            let verdict = match &scenario.verdict {
                Verdict::Passed => "PASS".green().bold(),
                Verdict::Failed(_) => "FAIL".red().bold(),
                Verdict::Skipped(_) => "SKIP".yellow().bold(),
            };
            let note = match &scenario.verdict {
                Verdict::Passed => scenario.detail.clone().unwrap_or_default(),
                Verdict::Failed(reason) | Verdict::Skipped(reason) => reason.clone(),
            };
            writeln!(
                w,
                "{:<16} {:<8} {:>6}ms  {}",
                scenario.scenario, verdict, scenario.duration_ms, note
            )?;
        }

        writeln!(w)?;
        writeln!(
            w,
            "Passed: {}  Failed: {}  Skipped: {}  ({}ms total)",
            self.passed, self.failed, self.skipped, self.duration_ms
        )?;

        if self.is_success() {
            writeln!(w, "Overall: {}", "PASS".green().bold())?;
        } else {
            writeln!(w, "Overall: {}", "FAIL".red().bold())?;
        }

        Ok(())
    }
}
