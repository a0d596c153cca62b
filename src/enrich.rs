//! Prepends rule mitigation and impact text to issue messages.

use crate::error::{Error, Result};
use crate::models::rule::RuleText;
use serde_json::Value as Json;

/// Rewrite `message` on every issue that has one, in order, calling
/// `lookup` with the issue's rule key each time. Issues without a
/// `message` are left as they are. Returns the number rewritten.
pub fn update_messages<F>(issues: &mut [Json], mut lookup: F) -> Result<usize>
where
    F: FnMut(&str) -> Result<RuleText>,
{
    let mut rewritten = 0;
    for (index, issue) in issues.iter_mut().enumerate() {
        let Some(obj) = issue.as_object_mut() else {
            continue;
        };
        let Some(original) = obj.get("message") else {
            continue;
        };
        let original = match original {
            Json::String(s) => s.clone(),
            other => other.to_string(),
        };
        let rule = obj
            .get("rule")
            .and_then(Json::as_str)
            .ok_or(Error::MissingRule { index })?;

        let text = lookup(rule)?;
        obj.insert(
            "message".into(),
            Json::String(compose_message(&text, &original)),
        );
        rewritten += 1;
    }
    tracing::info!(rewritten, total = issues.len(), "issue messages updated");
    Ok(rewritten)
}

/// `Mitigation: …\nImpact: …\nOriginal: …`
pub fn compose_message(text: &RuleText, original: &str) -> String {
    format!(
        "Mitigation: {}\nImpact: {}\nOriginal: {}",
        text.mitigation, text.impact, original
    )
}
