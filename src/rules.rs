//! Rule lookup via `api/rules/show` and rendering of mitigation/impact text.

use crate::client::SonarClient;
use crate::error::{Error, Result};
use crate::models::rule::{RuleDetail, RuleShowResponse, RuleText};

pub const RULES_SHOW: &str = "/api/rules/show";

/// Fetch one rule and render its text blocks. Called once per issue; the
/// same key may be requested many times in a run.
pub fn fetch_rule_details(client: &SonarClient, rule_key: &str) -> Result<RuleText> {
    tracing::debug!(rule = rule_key, "fetching rule details");
    let body = client.get_json(RULES_SHOW, &[("key", rule_key.to_string())])?;
    let parsed: RuleShowResponse = serde_json::from_value(body).map_err(|e| Error::Decode {
        url: format!("{}{}", client.base_url(), RULES_SHOW),
        reason: format!("invalid rule payload for {rule_key}: {e}"),
    })?;
    Ok(render_rule_text(&parsed.rule))
}

/// Build the mitigation and impact blocks for `rule`.
pub fn render_rule_text(rule: &RuleDetail) -> RuleText {
    RuleText {
        mitigation: mitigation_text(rule),
        impact: impact_text(rule),
    }
}

/// Four labelled lines; absent values print as `None`.
pub fn mitigation_text(rule: &RuleDetail) -> String {
    let block = format!(
        "Rule Key: {}\nName: {}\nSeverity: {}\nDescription: {}",
        or_none(&rule.key),
        or_none(&rule.name),
        or_none(&rule.severity),
        rule.html_desc.as_deref().unwrap_or("").trim()
    );
    block.trim().to_string()
}

/// One line per impact in server order; empty when there are none.
pub fn impact_text(rule: &RuleDetail) -> String {
    rule.impacts
        .iter()
        .map(|i| {
            format!(
                "Software Quality: {}, Severity: {}",
                i.software_quality.as_deref().unwrap_or("N/A"),
                i.severity.as_deref().unwrap_or("N/A")
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
        .trim()
        .to_string()
}

fn or_none(v: &Option<String>) -> &str {
    v.as_deref().unwrap_or("None")
}
