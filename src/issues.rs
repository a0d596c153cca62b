//! Issue retrieval across all pages of `api/issues/search`.
//!
//! Pages are requested in order starting at `p=1`. Pagination stops when the
//! page just received satisfies `pageIndex * pageSize >= total`; the count
//! of issues actually accumulated plays no part in that decision.

use crate::client::SonarClient;
use crate::config::Settings;
use crate::error::{Error, Result};
use crate::models::paging::Paging;
use crate::models::Report;
use serde_json::Value as Json;

pub const ISSUES_SEARCH: &str = "/api/issues/search";

/// The report envelope plus how many page requests it took.
#[derive(Debug)]
pub struct FetchedIssues {
    pub report: Report,
    pub pages: usize,
}

impl FetchedIssues {
    pub fn issue_count(&self) -> usize {
        self.report
            .get("issues")
            .and_then(Json::as_array)
            .map_or(0, Vec::len)
    }
}

/// Fetch every issue of the configured project.
pub fn fetch_issues(client: &SonarClient, settings: &Settings) -> Result<FetchedIssues> {
    let url = format!("{}{}", client.base_url(), ISSUES_SEARCH);
    collect_pages(&url, |page| {
        tracing::debug!(project = %settings.project, page, "fetching issues page");
        client.get_json(
            ISSUES_SEARCH,
            &[
                ("componentKeys", settings.project.clone()),
                ("ps", settings.page_size.to_string()),
                ("p", page.to_string()),
            ],
        )
    })
}

/// Drive pagination with `fetch_page(p)` and merge the pages into one
/// envelope. `url` only labels decode errors.
pub fn collect_pages<F>(url: &str, mut fetch_page: F) -> Result<FetchedIssues>
where
    F: FnMut(u64) -> Result<Json>,
{
    let mut page: u64 = 1;
    let mut pages = 0usize;
    let mut first: Option<Report> = None;
    let mut all: Vec<Json> = Vec::new();

    loop {
        let body = fetch_page(page)?;
        pages += 1;
        let mut obj = match body {
            Json::Object(m) => m,
            other => {
                return Err(Error::Decode {
                    url: url.to_string(),
                    reason: format!("expected a JSON object, got {}", kind(&other)),
                })
            }
        };

        let paging = match obj.get("paging") {
            Some(v) => serde_json::from_value::<Paging>(v.clone()).map_err(|e| Error::Decode {
                url: url.to_string(),
                reason: format!("invalid paging block: {e}"),
            })?,
            None => Paging::default(),
        };

        match obj.get_mut("issues").map(Json::take) {
            Some(Json::Array(items)) => {
                tracing::debug!(page, received = items.len(), total = paging.total, "issues page");
                all.extend(items);
            }
            Some(Json::Null) | None => {}
            Some(other) => {
                return Err(Error::Decode {
                    url: url.to_string(),
                    reason: format!("`issues` must be an array, got {}", kind(&other)),
                })
            }
        }

        if first.is_none() {
            first = Some(obj);
        }
        if paging.is_last() {
            break;
        }
        page += 1;
    }

    let mut report = first.unwrap_or_default();
    report.insert("issues".into(), Json::Array(all));
    Ok(FetchedIssues { report, pages })
}

fn kind(v: &Json) -> &'static str {
    match v {
        Json::Null => "null",
        Json::Bool(_) => "a boolean",
        Json::Number(_) => "a number",
        Json::String(_) => "a string",
        Json::Array(_) => "an array",
        Json::Object(_) => "an object",
    }
}
