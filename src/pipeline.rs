//! One linear run: fetch issues, enrich messages, write the report.
//!
//! The first error from any stage aborts the run. The report file is only
//! touched after every issue has been enriched.

use crate::client::SonarClient;
use crate::config::Settings;
use crate::error::Result;
use crate::models::RunSummary;
use crate::{enrich, issues, output, report, rules};
use serde_json::Value as Json;

/// Execute the whole pipeline for `settings`, printing progress in the
/// given output mode.
pub fn run(settings: &Settings, output_mode: &str) -> Result<RunSummary> {
    let client = SonarClient::new(settings)?;
    tracing::info!(url = %settings.url, project = %settings.project, "starting run");

    output::progress(output_mode, "Fetching issues from SonarQube...");
    let mut fetched = issues::fetch_issues(&client, settings)?;
    let issue_count = fetched.issue_count();
    output::progress(output_mode, &format!("Fetched {} issues.", issue_count));

    output::progress(
        output_mode,
        "Updating issue messages with mitigation and impact details...",
    );
    let mut rule_lookups = 0usize;
    let enriched = match fetched.report.get_mut("issues") {
        Some(Json::Array(list)) => enrich::update_messages(list, |rule| {
            rule_lookups += 1;
            rules::fetch_rule_details(&client, rule)
        })?,
        _ => 0,
    };

    let path = settings.report.display().to_string();
    output::progress(output_mode, &format!("Saving updated issues to {}...", path));
    report::write_report(&settings.report, &fetched.report)?;

    Ok(RunSummary {
        pages: fetched.pages,
        issues: issue_count,
        enriched,
        rule_lookups,
        report: path,
    })
}
