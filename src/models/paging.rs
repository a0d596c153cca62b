//! `paging` block of the issues-search response.

use serde::Deserialize;

#[derive(Debug, Deserialize, Clone, Copy, PartialEq)]
#[serde(rename_all = "camelCase")]
/// Paging metadata; absent fields take the values a first page of the
/// default size would carry.
pub struct Paging {
    #[serde(default = "one")]
    pub page_index: u64,
    #[serde(default = "default_page_size")]
    pub page_size: u64,
    #[serde(default)]
    pub total: u64,
}

fn one() -> u64 {
    1
}

fn default_page_size() -> u64 {
    crate::config::DEFAULT_PAGE_SIZE as u64
}

impl Default for Paging {
    fn default() -> Self {
        Self {
            page_index: one(),
            page_size: default_page_size(),
            total: 0,
        }
    }
}

impl Paging {
    /// True once the page just fetched reaches or passes `total`.
    pub fn is_last(&self) -> bool {
        self.page_index.saturating_mul(self.page_size) >= self.total
    }
}
