//! Configuration discovery and effective settings resolution.
//!
//! Connection settings come from four layers. Precedence:
//! CLI > environment > config file > defaults.
//!
//! The config file is `sonar-mitigate.toml|yaml|yml` in the working
//! directory, or whatever `--config` points at. Defaults:
//! - `url`: `http://your-sonarqube-url`
//! - `username`: `admin`
//! - `password`: `your-sonarqube-password`
//! - `project`: `sample-project-key`
//! - `report`: `sonar_report.json`
//! - `pageSize`: 500

use crate::error::{Error, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

pub const ENV_URL: &str = "SONARQUBE_URL";
pub const ENV_USERNAME: &str = "SONARQUBE_USERNAME";
pub const ENV_PASSWORD: &str = "SONARQUBE_PASSWORD";
pub const ENV_PROJECT: &str = "SONARQUBE_PROJECT_ID";
pub const ENV_REPORT: &str = "SONAR_REPORT_FILE";
pub const ENV_PAGE_SIZE: &str = "SONARQUBE_PAGE_SIZE";

pub const DEFAULT_URL: &str = "http://your-sonarqube-url";
pub const DEFAULT_USERNAME: &str = "admin";
pub const DEFAULT_PASSWORD: &str = "your-sonarqube-password";
pub const DEFAULT_PROJECT: &str = "sample-project-key";
pub const DEFAULT_REPORT: &str = "sonar_report.json";
pub const DEFAULT_PAGE_SIZE: u32 = 500;

const CONFIG_NAMES: [&str; 3] = [
    "sonar-mitigate.toml",
    "sonar-mitigate.yaml",
    "sonar-mitigate.yml",
];

#[derive(Debug, Default, Deserialize, Clone, PartialEq)]
/// Optional settings loaded from `sonar-mitigate.toml|yaml`.
pub struct FileConfig {
    pub url: Option<String>,
    pub username: Option<String>,
    pub password: Option<String>,
    pub project: Option<String>,
    pub report: Option<String>,
    #[serde(rename = "pageSize")]
    pub page_size: Option<u32>,
}

#[derive(Debug, Default, Clone)]
/// Values passed explicitly on the command line.
pub struct Overrides {
    pub url: Option<String>,
    pub username: Option<String>,
    pub password: Option<String>,
    pub project: Option<String>,
    pub report: Option<String>,
    pub page_size: Option<u32>,
}

#[derive(Clone, PartialEq)]
/// Fully-resolved settings, built once at startup and handed to each stage.
pub struct Settings {
    pub url: String,
    pub username: String,
    pub password: String,
    pub project: String,
    pub report: PathBuf,
    pub page_size: u32,
}

// Keeps the password out of logs and panic messages.
impl std::fmt::Debug for Settings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Settings")
            .field("url", &self.url)
            .field("username", &self.username)
            .field("password", &"***")
            .field("project", &self.project)
            .field("report", &self.report)
            .field("page_size", &self.page_size)
            .finish()
    }
}

/// Parse a config file, choosing TOML or YAML by extension.
pub fn load_config_file(path: &Path) -> Result<FileConfig> {
    let s = fs::read_to_string(path).map_err(|e| {
        Error::Config(format!("cannot read config {}: {}", path.display(), e))
    })?;
    let is_yaml = matches!(
        path.extension().and_then(|e| e.to_str()),
        Some("yaml") | Some("yml")
    );
    if is_yaml {
        serde_yaml::from_str(&s)
            .map_err(|e| Error::Config(format!("invalid config {}: {}", path.display(), e)))
    } else {
        toml::from_str(&s)
            .map_err(|e| Error::Config(format!("invalid config {}: {}", path.display(), e)))
    }
}

/// Load the first `sonar-mitigate.{toml,yaml,yml}` found in `dir`, if any.
pub fn load_config(dir: &Path) -> Result<Option<FileConfig>> {
    for name in CONFIG_NAMES {
        let p = dir.join(name);
        if p.is_file() {
            return load_config_file(&p).map(Some);
        }
    }
    Ok(None)
}

/// Read an environment variable. Set-but-empty stays empty; it does not
/// fall back to a lower layer.
pub fn process_env(name: &str) -> Option<String> {
    std::env::var_os(name).map(|v| v.to_string_lossy().into_owned())
}

/// Resolve `Settings` by merging CLI flags, environment, config file and
/// defaults, then reject empty connection parameters.
pub fn resolve_settings(
    cli: &Overrides,
    env: &dyn Fn(&str) -> Option<String>,
    file: Option<&FileConfig>,
) -> Result<Settings> {
    let file = file.cloned().unwrap_or_default();
    let pick = |cli: &Option<String>, var: &str, file: Option<String>, default: &str| {
        cli.clone()
            .or_else(|| env(var))
            .or(file)
            .unwrap_or_else(|| default.to_string())
    };

    let url = pick(&cli.url, ENV_URL, file.url, DEFAULT_URL);
    let username = pick(&cli.username, ENV_USERNAME, file.username, DEFAULT_USERNAME);
    let password = pick(&cli.password, ENV_PASSWORD, file.password, DEFAULT_PASSWORD);
    let project = pick(&cli.project, ENV_PROJECT, file.project, DEFAULT_PROJECT);
    let report = pick(&cli.report, ENV_REPORT, file.report, DEFAULT_REPORT);

    let page_size = match cli.page_size {
        Some(n) => n,
        None => match env(ENV_PAGE_SIZE) {
            Some(raw) => raw.trim().parse::<u32>().map_err(|_| {
                Error::Config(format!(
                    "{} must be a positive integer, got '{}'",
                    ENV_PAGE_SIZE, raw
                ))
            })?,
            None => file.page_size.unwrap_or(DEFAULT_PAGE_SIZE),
        },
    };

    let url = url.trim_end_matches('/').to_string();
    let missing: Vec<&str> = [
        ("url", &url),
        ("username", &username),
        ("password", &password),
        ("project", &project),
    ]
    .iter()
    .filter(|(_, v)| v.is_empty())
    .map(|(k, _)| *k)
    .collect();
    if !missing.is_empty() {
        return Err(Error::Config(format!(
            "missing required SonarQube connection setting(s): {}",
            missing.join(", ")
        )));
    }
    if page_size == 0 {
        return Err(Error::Config("page size must be greater than zero".into()));
    }

    Ok(Settings {
        url,
        username,
        password,
        project,
        report: PathBuf::from(report),
        page_size,
    })
}
