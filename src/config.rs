//! Configuration for pagination extraction
//!
//! Hosts that use different query parameter names, or want a different page
//! size or sort field when the request leaves them out, describe that here.
//! Every field has a default, so an empty YAML document is a valid config.

use crate::error::{Error, Result};
use crate::types::{DEFAULT_ORDER_FIELD, DEFAULT_SIZE};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

// ============================================================================
// Top-Level Config
// ============================================================================

/// Extraction defaults and parameter names
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginationConfig {
    /// Page size when the size parameter is absent or empty
    #[serde(default = "default_size")]
    pub default_size: i64,

    /// Sort field when the order-by parameter is absent or empty
    #[serde(default = "default_order_field")]
    pub default_order_field: String,

    /// Query parameter names
    #[serde(default)]
    pub params: ParamNames,
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self {
            default_size: default_size(),
            default_order_field: default_order_field(),
            params: ParamNames::default(),
        }
    }
}

fn default_size() -> i64 {
    DEFAULT_SIZE
}

fn default_order_field() -> String {
    DEFAULT_ORDER_FIELD.to_string()
}

// ============================================================================
// Parameter Names
// ============================================================================

/// Names of the query parameters read from the request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParamNames {
    /// Page number parameter, `page` by default
    #[serde(default = "default_page_param")]
    pub page_param: String,

    /// Page size parameter, `size` by default
    #[serde(default = "default_size_param")]
    pub size_param: String,

    /// Sort field parameter, `orderBy` by default
    #[serde(default = "default_order_by_param")]
    pub order_by_param: String,

    /// Sort direction parameter, `orderDir` by default
    #[serde(default = "default_order_dir_param")]
    pub order_dir_param: String,
}

impl Default for ParamNames {
    fn default() -> Self {
        Self {
            page_param: default_page_param(),
            size_param: default_size_param(),
            order_by_param: default_order_by_param(),
            order_dir_param: default_order_dir_param(),
        }
    }
}

impl ParamNames {
    /// All names, in extraction order
    pub fn all(&self) -> [&str; 4] {
        [
            &self.page_param,
            &self.size_param,
            &self.order_by_param,
            &self.order_dir_param,
        ]
    }
}

fn default_page_param() -> String {
    "page".to_string()
}

fn default_size_param() -> String {
    "size".to_string()
}

fn default_order_by_param() -> String {
    "orderBy".to_string()
}

fn default_order_dir_param() -> String {
    "orderDir".to_string()
}

// ============================================================================
// Loading
// ============================================================================

/// Load a config from a YAML file
pub fn load_config(path: impl AsRef<Path>) -> Result<PaginationConfig> {
    let content = fs::read_to_string(path)?;
    load_config_from_str(&content)
}

/// Load a config from a YAML string
pub fn load_config_from_str(yaml: &str) -> Result<PaginationConfig> {
    // An empty document deserializes to unit, not to an empty mapping
    if yaml.trim().is_empty() {
        return Ok(PaginationConfig::default());
    }

    let config: PaginationConfig = serde_yaml::from_str(yaml)?;

    validate_config(&config)?;
    Ok(config)
}

/// Validate a config
fn validate_config(config: &PaginationConfig) -> Result<()> {
    if config.default_order_field.is_empty() {
        return Err(Error::config("default_order_field cannot be empty"));
    }

    let names = config.params.all();
    for (i, name) in names.iter().enumerate() {
        if name.is_empty() {
            return Err(Error::config("Query parameter names cannot be empty"));
        }
        if names[..i].contains(name) {
            return Err(Error::config(format!(
                "Query parameter name '{name}' is used more than once"
            )));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = PaginationConfig::default();
        assert_eq!(config.default_size, 10);
        assert_eq!(config.default_order_field, "id");
        assert_eq!(config.params.all(), ["page", "size", "orderBy", "orderDir"]);
    }

    #[test]
    fn test_empty_yaml_is_default() {
        assert_eq!(load_config_from_str("").unwrap(), PaginationConfig::default());
        assert_eq!(load_config_from_str("{}").unwrap(), PaginationConfig::default());
    }

    #[test]
    fn test_partial_yaml() {
        let yaml = r#"
default_size: 25
params:
  size_param: per_page
"#;

        let config = load_config_from_str(yaml).unwrap();
        assert_eq!(config.default_size, 25);
        assert_eq!(config.default_order_field, "id");
        assert_eq!(config.params.size_param, "per_page");
        assert_eq!(config.params.page_param, "page");
    }

    #[test]
    fn test_rejects_duplicate_param_names() {
        let yaml = r#"
params:
  page_param: p
  size_param: p
"#;

        let err = load_config_from_str(yaml).unwrap_err();
        assert!(err.to_string().contains("'p' is used more than once"));
    }

    #[test]
    fn test_rejects_empty_names() {
        let err = load_config_from_str("params:\n  order_dir_param: \"\"\n").unwrap_err();
        assert!(matches!(err, Error::Config { .. }));

        let err = load_config_from_str("default_order_field: \"\"\n").unwrap_err();
        assert!(err.to_string().contains("default_order_field"));
    }

    #[test]
    fn test_rejects_malformed_yaml() {
        let err = load_config_from_str("default_size: [1, 2").unwrap_err();
        assert!(matches!(err, Error::YamlParse(_)));
        assert!(err.to_string().starts_with("Failed to parse YAML"));
        assert!(!err.is_client_error());

        let err = load_config_from_str("default_size: ten").unwrap_err();
        assert!(matches!(err, Error::YamlParse(_)));
    }

    #[test]
    fn test_load_config_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "default_order_field: created_at").unwrap();

        let config = load_config(file.path()).unwrap();
        assert_eq!(config.default_order_field, "created_at");
    }

    #[test]
    fn test_load_config_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_config(dir.path().join("missing.yaml")).unwrap_err();
        assert!(matches!(&err, Error::Io(e) if e.kind() == std::io::ErrorKind::NotFound));
    }
}
