//! Report serialization.
//!
//! The report is rendered with four-space indentation into a temporary file
//! next to the destination and then persisted over it, so readers never see
//! a half-written report.

use crate::error::{Error, Result};
use crate::models::Report;
use serde::Serialize;
use std::fs;
use std::io::Write;
use std::path::Path;

/// Render `report` as indented JSON with a trailing newline.
pub fn render_report(report: &Report) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    let fmt = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, fmt);
    report.serialize(&mut ser)?;
    buf.push(b'\n');
    Ok(buf)
}

/// Write `report` to `path`, replacing any existing file.
pub fn write_report(path: &Path, report: &Report) -> Result<()> {
    let bytes = render_report(report)?;
    let io_err = |source| Error::Io {
        path: path.to_path_buf(),
        source,
    };

    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    let mut tmp = new_temp_in(dir).map_err(io_err)?;
    // An existing report keeps its mode; new reports get the umask default.
    if let Ok(meta) = fs::metadata(path) {
        tmp.as_file()
            .set_permissions(meta.permissions())
            .map_err(io_err)?;
    }
    tmp.write_all(&bytes).map_err(io_err)?;
    tmp.flush().map_err(io_err)?;
    tmp.persist(path).map_err(|e| io_err(e.error))?;
    tracing::info!(path = %path.display(), bytes = bytes.len(), "report written");
    Ok(())
}

#[cfg(unix)]
fn new_temp_in(dir: &Path) -> std::io::Result<tempfile::NamedTempFile> {
    use std::os::unix::fs::PermissionsExt;
    // The mode passes through open(2), so the process umask still applies.
    tempfile::Builder::new()
        .permissions(fs::Permissions::from_mode(0o666))
        .tempfile_in(dir)
}

#[cfg(not(unix))]
fn new_temp_in(dir: &Path) -> std::io::Result<tempfile::NamedTempFile> {
    tempfile::NamedTempFile::new_in(dir)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::fs;
    use tempfile::tempdir;

    fn sample() -> Report {
        match json!({
            "total": 1,
            "paging": {"pageIndex": 1, "pageSize": 500, "total": 1},
            "issues": [{"rule": "R1", "message": "Mitigation: x\nImpact: \nOriginal: y"}]
        }) {
            serde_json::Value::Object(m) => m,
            _ => unreachable!(),
        }
    }

    #[test]
    fn test_four_space_indent_and_key_order() {
        let out = String::from_utf8(render_report(&sample()).unwrap()).unwrap();
        assert!(out.starts_with("{\n    \"total\": 1,\n    \"paging\": {\n        \"pageIndex\": 1"));
        assert!(out.ends_with("}\n"));
        // newlines inside messages stay escaped
        assert!(out.contains("Mitigation: x\\nImpact: \\nOriginal: y"));
    }

    #[test]
    fn test_overwrites_existing_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("sonar_report.json");
        fs::write(&path, "stale content that is much longer than nothing at all").unwrap();
        write_report(&path, &sample()).unwrap();
        let back: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(back["issues"][0]["rule"], "R1");
        // only the report remains; the temp file was persisted, not left behind
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 1);
    }

    #[cfg(unix)]
    #[test]
    fn test_existing_report_keeps_its_mode() {
        use std::os::unix::fs::PermissionsExt;
        let dir = tempdir().unwrap();
        let path = dir.path().join("sonar_report.json");
        fs::write(&path, "old").unwrap();
        fs::set_permissions(&path, fs::Permissions::from_mode(0o640)).unwrap();
        write_report(&path, &sample()).unwrap();
        let mode = fs::metadata(&path).unwrap().permissions().mode() & 0o777;
        assert_eq!(mode, 0o640);
    }

    #[cfg(unix)]
    #[test]
    fn test_new_report_gets_umask_default_mode() {
        use std::os::unix::fs::PermissionsExt;
        let dir = tempdir().unwrap();
        // A plain create shows what the umask yields for a new file.
        let plain = dir.path().join("plain.json");
        fs::write(&plain, "").unwrap();
        let expected = fs::metadata(&plain).unwrap().permissions().mode() & 0o777;

        let path = dir.path().join("fresh.json");
        write_report(&path, &sample()).unwrap();
        let mode = fs::metadata(&path).unwrap().permissions().mode() & 0o777;
        assert_eq!(mode, expected);
    }

    #[test]
    fn test_unwritable_destination_is_io_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("missing-dir").join("report.json");
        let err = write_report(&path, &sample()).unwrap_err();
        assert!(matches!(err, Error::Io { .. }));
        assert!(!path.exists());
    }
}
