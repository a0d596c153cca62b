//! Console prefixes shared by progress and error output.

use owo_colors::OwoColorize;

/// Colors are off for JSON output and when `NO_COLOR` is set.
pub fn use_colors(output: &str) -> bool {
    output != "json" && std::env::var_os("NO_COLOR").is_none()
}

pub fn error_prefix(color: bool) -> String {
    if color {
        "✖ error:".red().bold().to_string()
    } else {
        "✖ error:".to_string()
    }
}

pub fn info_prefix(color: bool) -> String {
    if color {
        "◆".blue().bold().to_string()
    } else {
        "◆".to_string()
    }
}

pub fn done_prefix(color: bool) -> String {
    if color {
        "✔".green().bold().to_string()
    } else {
        "✔".to_string()
    }
}
