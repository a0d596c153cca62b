//! sonar-mitigate core library.
//!
//! Fetches all issues of a SonarQube project, prepends each issue message
//! with its rule's mitigation and impact text, and writes the enriched
//! issues-search envelope to a JSON file.
//!
//! High-level modules:
//! - `cli`: CLI argument parsing (binary uses this).
//! - `config`: Settings resolution from CLI, environment, file and defaults.
//! - `client`: Blocking basic-auth HTTP client.
//! - `issues`: Paginated issue retrieval.
//! - `rules`: Rule lookup and mitigation/impact rendering.
//! - `enrich`: Message rewriting.
//! - `report`: Indented JSON report writer.
//! - `pipeline`: The end-to-end run.
//! - `models`: Paging, rule and summary types.
//! - `output`: Human/JSON console printers.
pub mod cli;
pub mod client;
pub mod config;
pub mod enrich;
pub mod error;
pub mod issues;
pub mod models;
pub mod output;
pub mod pipeline;
pub mod report;
pub mod rules;
pub mod utils;

pub use error::{Error, Result};
