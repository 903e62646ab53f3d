use anyhow::{Context, Result, anyhow};
use log::{debug, trace};
use serde_json::Value;
use std::{fs, path::Path};

use crate::rule::PackageSet;

pub const BUILTINS_KEY: &str = "imports/builtins";
pub const PACKAGES_KEY: &str = "imports/packages";

/// Lists of module names that sort ahead of other bare specifiers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Settings {
    pub builtins: Vec<String>,
    pub packages: Vec<String>,
}

impl Settings {
    pub fn from_value(value: &Value) -> Result<Self> {
        Ok(Self {
            builtins: package_list(value, BUILTINS_KEY)?,
            packages: package_list(value, PACKAGES_KEY)?,
        })
    }

    pub fn parse(text: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(text).context("Settings are not valid JSON")?;
        Self::from_value(&value)
    }

    pub fn load(path: &Path) -> Result<Self> {
        debug!("Loading settings from {}", path.display());
        let text = fs::read_to_string(path)
            .with_context(|| format!("Failed to read settings from {}", path.display()))?;
        let settings = Self::parse(&text)
            .with_context(|| format!("Invalid settings in {}", path.display()))?;
        debug!(
            "Loaded {} builtins and {} packages from settings",
            settings.builtins.len(),
            settings.packages.len()
        );
        Ok(settings)
    }

    pub fn known_packages(&self) -> PackageSet {
        self.builtins.iter().chain(&self.packages).cloned().collect()
    }
}

fn package_list(settings: &Value, key: &str) -> Result<Vec<String>> {
    let array = match settings.get(key) {
        None | Some(Value::Null) => {
            trace!("Setting '{}' not present", key);
            return Ok(Vec::new());
        }
        Some(Value::Array(array)) => array,
        Some(_) => return Err(anyhow!("Expected the \"{}\" setting to be an array of paths", key)),
    };

    array
        .iter()
        .map(|element| match element {
            Value::String(s) => Ok(s.clone()),
            other => Err(anyhow!(
                "Expected elements of the \"{}\" setting to be strings, instead found an element of type \"{}\"",
                key,
                js_type_name(other)
            )),
        })
        .collect()
}

fn js_type_name(value: &Value) -> &'static str {
    match value {
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Null | Value::Array(_) | Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::TempDir;

    #[test]
    fn test_reads_both_lists() {
        let settings = Settings::from_value(&json!({
            "imports/builtins": ["fs", "@b/builtin"],
            "imports/packages": ["react"],
        }))
        .unwrap();
        assert_eq!(settings.builtins, vec!["fs", "@b/builtin"]);
        assert_eq!(settings.packages, vec!["react"]);

        let known = settings.known_packages();
        assert_eq!(known.len(), 3);
        assert!(known.contains("@b/builtin"));
        assert!(known.contains("react"));
    }

    #[test]
    fn test_missing_and_null_are_empty() {
        let settings = Settings::from_value(&json!({ "imports/builtins": null })).unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_non_array_is_rejected() {
        let err = Settings::from_value(&json!({ "imports/packages": "react" })).unwrap_err();
        assert_eq!(err.to_string(), "Expected the \"imports/packages\" setting to be an array of paths");
    }

    #[test]
    fn test_non_string_element_is_rejected() {
        let err = Settings::from_value(&json!({ "imports/builtins": ["fs", 42] })).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Expected elements of the \"imports/builtins\" setting to be strings, instead found an element of type \"number\""
        );

        let err = Settings::from_value(&json!({ "imports/builtins": [null] })).unwrap_err();
        assert!(err.to_string().contains("\"object\""));
    }

    #[test]
    fn test_load_from_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join(".oxiorder.json");
        fs::write(&path, r#"{ "imports/packages": ["lodash"] }"#).unwrap();
        let settings = Settings::load(&path).unwrap();
        assert_eq!(settings.packages, vec!["lodash"]);
        assert!(settings.builtins.is_empty());
    }

    #[test]
    fn test_load_invalid_json() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join(".oxiorder.json");
        fs::write(&path, "{ not json").unwrap();
        let err = Settings::load(&path).unwrap_err();
        assert!(format!("{:#}", err).contains("Invalid settings"));
    }
}
