//! CLI argument parsing via `clap`.

use crate::config::Overrides;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "sonar-mitigate",
    version,
    about = "Enrich SonarQube issues with rule mitigation and impact details",
    long_about = "Fetch every issue of a SonarQube project, prepend each issue message with its rule's mitigation and impact text, and write the result as JSON.\n\nConfiguration precedence: CLI > environment > sonar-mitigate.toml > defaults.",
    after_help = "Environment:\n  SONARQUBE_URL, SONARQUBE_USERNAME, SONARQUBE_PASSWORD, SONARQUBE_PROJECT_ID,\n  SONAR_REPORT_FILE, SONARQUBE_PAGE_SIZE\n\nExamples:\n  sonar-mitigate --url https://sonar.example.com --project acme-api\n  SONARQUBE_PASSWORD=... sonar-mitigate --report out/acme.json --output json"
)]
/// Top-level CLI options.
pub struct Cli {
    #[arg(long, help = "SonarQube base URL")]
    pub url: Option<String>,
    #[arg(long, help = "Basic-auth username")]
    pub username: Option<String>,
    #[arg(long, help = "Basic-auth password")]
    pub password: Option<String>,
    #[arg(long, help = "Project key to report on")]
    pub project: Option<String>,
    #[arg(long, help = "Output report path (default: sonar_report.json)")]
    pub report: Option<String>,
    #[arg(long, help = "Issues per page request (default: 500)")]
    pub page_size: Option<u32>,
    #[arg(long, help = "Config file (default: ./sonar-mitigate.{toml,yaml,yml})")]
    pub config: Option<PathBuf>,
    #[arg(long, default_value = "human", help = "Console output mode: human|json")]
    pub output: String,
    #[arg(long, help = "Log filter for stderr diagnostics, e.g. debug (default: RUST_LOG or warn)")]
    pub log_level: Option<String>,
}

impl Cli {
    /// Settings given explicitly on the command line.
    pub fn overrides(&self) -> Overrides {
        Overrides {
            url: self.url.clone(),
            username: self.username.clone(),
            password: self.password.clone(),
            project: self.project.clone(),
            report: self.report.clone(),
            page_size: self.page_size,
        }
    }
}
