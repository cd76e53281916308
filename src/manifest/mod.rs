//! JSON manifest collaborators.
//!
//! This module is the crate's file-read/write boundary: absence-tolerant JSON
//! reads (missing or unparsable files read as `None`, never an error) and
//! accessors for the version field and plugin entries of the two manifests
//! the engine keeps in sync: the app manifest (`app.json`) and the package
//! manifest (`package.json`).

use serde_json::Value;
use std::fs;
use std::path::Path;

use crate::error::{LiftoffError, Result};

/// Default app manifest file name (primary, authoritative for the version).
pub const APP_MANIFEST: &str = "app.json";

/// Default package manifest file name (secondary, kept for ecosystem
/// compatibility).
pub const PACKAGE_MANIFEST: &str = "package.json";

/// Read a JSON document, treating any failure as absence.
pub fn read_json(path: &Path) -> Option<Value> {
    let content = fs::read_to_string(path).ok()?;
    match serde_json::from_str(&content) {
        Ok(value) => Some(value),
        Err(e) => {
            tracing::debug!(path = %path.display(), error = %e, "Unparsable JSON treated as absent");
            None
        }
    }
}

/// Write a JSON document, pretty-printed, creating parent directories.
pub fn write_json_pretty(path: &Path, value: &Value) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = serde_json::to_string_pretty(value).map_err(|e| LiftoffError::SerializeError {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;
    fs::write(path, content)?;
    Ok(())
}

/// Version field of the app manifest: `expo.version`, falling back to a
/// top-level `version` for bare (non-Expo-shaped) manifests.
pub fn app_version(doc: &Value) -> Option<&str> {
    doc.pointer("/expo/version")
        .or_else(|| doc.get("version"))
        .and_then(Value::as_str)
}

/// Set the version field of the app manifest in place.
///
/// Writes `expo.version` when an `expo` object exists, otherwise a top-level
/// `version`. Non-object documents are left untouched.
pub fn set_app_version(doc: &mut Value, version: &str) {
    if let Some(expo) = doc.get_mut("expo").and_then(Value::as_object_mut) {
        expo.insert("version".to_string(), Value::String(version.to_string()));
    } else if let Some(root) = doc.as_object_mut() {
        root.insert("version".to_string(), Value::String(version.to_string()));
    }
}

/// Version field of the package manifest (top-level `version`).
pub fn package_version(doc: &Value) -> Option<&str> {
    doc.get("version").and_then(Value::as_str)
}

/// Set the top-level `version` of the package manifest in place.
pub fn set_package_version(doc: &mut Value, version: &str) {
    if let Some(root) = doc.as_object_mut() {
        root.insert("version".to_string(), Value::String(version.to_string()));
    }
}

/// Look up a plugin's configuration object in the app manifest.
///
/// Entries in `expo.plugins` are either a bare plugin name (no configuration)
/// or a `[name, config]` pair; only the latter yields a value here.
pub fn plugin_config<'a>(doc: &'a Value, name: &str) -> Option<&'a Value> {
    let plugins = doc.pointer("/expo/plugins")?.as_array()?;
    plugins.iter().find_map(|entry| {
        let pair = entry.as_array()?;
        if pair.first()?.as_str()? == name {
            pair.get(1)
        } else {
            None
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::TempDir;

    #[test]
    fn read_json_missing_file_is_none() {
        let temp = TempDir::new().unwrap();
        assert!(read_json(&temp.path().join("nope.json")).is_none());
    }

    #[test]
    fn read_json_unparsable_is_none() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("bad.json");
        fs::write(&path, "{ not json").unwrap();
        assert!(read_json(&path).is_none());
    }

    #[test]
    fn write_then_read_round_trips() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("nested").join("doc.json");
        let doc = json!({"version": "1.2.3"});

        write_json_pretty(&path, &doc).unwrap();
        assert_eq!(read_json(&path), Some(doc));
    }

    #[test]
    fn app_version_prefers_expo_field() {
        let doc = json!({"expo": {"version": "2.0.0"}, "version": "1.0.0"});
        assert_eq!(app_version(&doc), Some("2.0.0"));
    }

    #[test]
    fn app_version_falls_back_to_top_level() {
        let doc = json!({"version": "1.0.0"});
        assert_eq!(app_version(&doc), Some("1.0.0"));
    }

    #[test]
    fn app_version_absent_is_none() {
        assert_eq!(app_version(&json!({"name": "demo"})), None);
    }

    #[test]
    fn set_app_version_writes_expo_field() {
        let mut doc = json!({"expo": {"version": "1.0.0", "name": "demo"}});
        set_app_version(&mut doc, "1.1.0");
        assert_eq!(doc.pointer("/expo/version"), Some(&json!("1.1.0")));
        assert_eq!(doc.pointer("/expo/name"), Some(&json!("demo")));
    }

    #[test]
    fn set_app_version_writes_top_level_without_expo() {
        let mut doc = json!({"name": "demo"});
        set_app_version(&mut doc, "1.1.0");
        assert_eq!(doc.get("version"), Some(&json!("1.1.0")));
    }

    #[test]
    fn package_version_round_trip() {
        let mut doc = json!({"name": "demo", "version": "1.0.0"});
        assert_eq!(package_version(&doc), Some("1.0.0"));
        set_package_version(&mut doc, "1.0.1");
        assert_eq!(package_version(&doc), Some("1.0.1"));
    }

    #[test]
    fn plugin_config_finds_pair_entry() {
        let doc = json!({"expo": {"plugins": [
            "expo-font",
            ["expo-build-properties", {"ios": {"deploymentTarget": "15.1"}}]
        ]}});

        let config = plugin_config(&doc, "expo-build-properties").unwrap();
        assert_eq!(
            config.pointer("/ios/deploymentTarget"),
            Some(&json!("15.1"))
        );
    }

    #[test]
    fn plugin_config_ignores_bare_entries() {
        let doc = json!({"expo": {"plugins": ["expo-build-properties"]}});
        assert!(plugin_config(&doc, "expo-build-properties").is_none());
    }

    #[test]
    fn plugin_config_none_without_plugins() {
        assert!(plugin_config(&json!({"expo": {}}), "expo-build-properties").is_none());
    }
}
