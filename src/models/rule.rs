//! Rule schema returned by `api/rules/show`.

use serde::{Deserialize, Deserializer};

#[derive(Debug, Deserialize, Default)]
/// Response body of the rule lookup; `rule` may be absent.
pub struct RuleShowResponse {
    #[serde(default)]
    pub rule: RuleDetail,
}

#[derive(Debug, Deserialize, Default, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
/// Descriptive metadata for one rule. Only the fields used in messages are
/// modeled; the server sends many more.
pub struct RuleDetail {
    pub key: Option<String>,
    pub name: Option<String>,
    pub severity: Option<String>,
    pub html_desc: Option<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub impacts: Vec<Impact>,
}

// `"impacts": null` means no impacts.
fn null_as_empty<'de, D>(d: D) -> Result<Vec<Impact>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<Impact>>::deserialize(d)?.unwrap_or_default())
}

#[derive(Debug, Deserialize, Default, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
/// One (software quality, severity) pair.
pub struct Impact {
    pub software_quality: Option<String>,
    pub severity: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Text blocks prepended to an issue message.
pub struct RuleText {
    pub mitigation: String,
    pub impact: String,
}
