//! Console rendering for progress lines, the run summary, and errors.
//!
//! Supports `human` (default) and `json`. In JSON mode progress lines are
//! suppressed and one summary object is printed when the run ends.

use crate::error::Error;
use crate::models::RunSummary;
use crate::utils;
use owo_colors::OwoColorize;
use serde_json::json;
use serde_json::Value as JsonVal;

/// Print one progress line (human mode only).
pub fn progress(output: &str, msg: &str) {
    if output == "json" {
        return;
    }
    println!("{} {}", utils::info_prefix(utils::use_colors(output)), msg);
}

/// Print the final summary.
pub fn print_summary(summary: &RunSummary, output: &str) {
    match output {
        "json" => match serde_json::to_string_pretty(&compose_summary_json(summary)) {
            Ok(s) => println!("{}", s),
            Err(e) => eprintln!("{} {}", utils::error_prefix(false), e),
        },
        _ => {
            let color = utils::use_colors(output);
            let line = format!("Report generated: {}", summary.report);
            if color {
                println!("{} {}", utils::done_prefix(true), line.bold());
            } else {
                println!("{} {}", utils::done_prefix(false), line);
            }
            println!(
                "— Summary — pages={} issues={} enriched={} rule_lookups={}",
                summary.pages, summary.issues, summary.enriched, summary.rule_lookups
            );
        }
    }
}

/// Print a fatal error. Goes to stdout alongside the progress lines.
pub fn print_error(err: &Error, output: &str) {
    match output {
        "json" => {
            let out = compose_error_json(err);
            println!("{}", out);
        }
        _ => {
            let color = utils::use_colors(output);
            println!(
                "{} An error occurred: {}",
                utils::error_prefix(color),
                err
            );
        }
    }
}

/// Compose summary JSON (pure) for testing.
pub fn compose_summary_json(summary: &RunSummary) -> JsonVal {
    json!({"status": "ok", "summary": summary})
}

/// Compose error JSON (pure) for testing.
pub fn compose_error_json(err: &Error) -> JsonVal {
    json!({
        "status": "error",
        "exitCode": err.exit_code(),
        "error": err.to_string(),
    })
}
