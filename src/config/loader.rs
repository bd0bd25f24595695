//! Environment file loading.

use std::fs;
use std::path::Path;

use crate::environment::EnvironmentSnapshot;
use crate::error::{HoverError, Result};

/// Load an environment snapshot from a YAML or JSON file.
///
/// # Errors
///
/// Returns `ConfigNotFound` if the file doesn't exist.
/// Returns `ConfigParseError` if the contents are invalid.
pub fn load_snapshot_file(path: &Path) -> Result<EnvironmentSnapshot> {
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            HoverError::ConfigNotFound {
                path: path.to_path_buf(),
            }
        } else {
            HoverError::Io(e)
        }
    })?;

    parse_snapshot(&content, path)
}

/// Parse snapshot content. JSON is accepted as a subset of YAML.
///
/// An empty document yields a snapshot where every query is unsupported.
///
/// # Arguments
///
/// * `content` - The YAML or JSON content to parse
/// * `source_path` - Path for error reporting
pub fn parse_snapshot(content: &str, source_path: &Path) -> Result<EnvironmentSnapshot> {
    if content.trim().is_empty() {
        return Ok(EnvironmentSnapshot::unsupported());
    }

    serde_yaml::from_str(content).map_err(|e| HoverError::ConfigParseError {
        path: source_path.to_path_buf(),
        message: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use tempfile::TempDir;

    #[test]
    fn load_yaml_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("device.yml");
        fs::write(&path, "hover: true\nmax_touch_points: 0\n").unwrap();

        let snap = load_snapshot_file(&path).unwrap();
        assert_eq!(snap.hover, Some(true));
        assert_eq!(snap.max_touch_points, Some(0));
    }

    #[test]
    fn load_json_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("device.json");
        fs::write(&path, r#"{"any_hover": true, "touch_start": true}"#).unwrap();

        let snap = load_snapshot_file(&path).unwrap();
        assert_eq!(snap.any_hover, Some(true));
        assert_eq!(snap.touch_start, Some(true));
    }

    #[test]
    fn missing_file_is_config_not_found() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("nope.yml");

        let err = load_snapshot_file(&path).unwrap_err();
        assert!(matches!(err, HoverError::ConfigNotFound { .. }));
    }

    #[test]
    fn invalid_content_is_parse_error() {
        let err = parse_snapshot("hover: sometimes", &PathBuf::from("device.yml")).unwrap_err();
        match err {
            HoverError::ConfigParseError { path, .. } => {
                assert_eq!(path, PathBuf::from("device.yml"));
            }
            other => panic!("Expected ConfigParseError, got {:?}", other),
        }
    }

    #[test]
    fn empty_content_is_all_unsupported() {
        let snap = parse_snapshot("  \n", &PathBuf::from("device.yml")).unwrap();
        assert_eq!(snap, EnvironmentSnapshot::unsupported());
    }
}
