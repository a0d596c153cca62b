//! Shared data models for the issues and rules endpoints and run output.

pub mod paging;
pub mod rule;

use serde::Serialize;
use serde_json::{Map, Value as Json};

/// The issues-search envelope: the first page's response object whose
/// `issues` field holds every issue across all pages.
pub type Report = Map<String, Json>;

#[derive(Debug, Serialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
/// Counters collected over one run; printed by `output`.
pub struct RunSummary {
    pub pages: usize,
    pub issues: usize,
    pub enriched: usize,
    pub rule_lookups: usize,
    pub report: String,
}
