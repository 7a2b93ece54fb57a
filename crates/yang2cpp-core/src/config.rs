//! Configuration parsing
//!
//! An optional YAML file supplies defaults for options that are tedious to
//! repeat on every invocation. Command-line flags always win over values
//! loaded here.
//!
//! ```yaml
//! pyang: /usr/local/bin/pyang
//! search_paths:
//!   - ./modules
//! output_directory: ./generated
//! ```

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Generator configuration file contents
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Command used to normalize YANG into YIN
    #[serde(default = "default_pyang")]
    pub pyang: String,

    /// Module search paths, appended after those given with `-p`
    #[serde(default)]
    pub search_paths: Vec<String>,

    /// Directory for generated files when none is given on the command line
    #[serde(default)]
    pub output_directory: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            pyang: default_pyang(),
            search_paths: Vec::new(),
            output_directory: None,
        }
    }
}

fn default_pyang() -> String {
    "pyang".to_string()
}

impl Config {
    /// Load configuration from a YAML file
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let config = Config::load("yang2cpp.yaml")?;
    /// println!("normalizer: {}", config.pyang);
    /// ```
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        if !path.is_file() {
            return Err(Error::ConfigNotFound {
                path: path.display().to_string(),
            });
        }

        let contents = std::fs::read_to_string(path)?;
        let config: Config = serde_yaml::from_str(&contents)?;
        tracing::debug!("Loaded configuration from {}", path.display());

        Ok(config)
    }

    /// Load configuration if a path is given, otherwise use defaults
    pub fn load_optional<P: AsRef<Path>>(path: Option<P>) -> Result<Self> {
        match path {
            Some(p) => Self::load(p),
            None => Ok(Self::default()),
        }
    }

    /// Command-line search paths followed by configured ones
    pub fn merged_search_paths(&self, cli_paths: &[String]) -> Vec<String> {
        cli_paths
            .iter()
            .chain(self.search_paths.iter())
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.pyang, "pyang");
        assert!(config.search_paths.is_empty());
        assert!(config.output_directory.is_none());
    }

    #[test]
    fn test_parse_minimal_config() {
        let config: Config = serde_yaml::from_str("search_paths: [a]\n").unwrap();
        assert_eq!(config.pyang, "pyang");
        assert_eq!(config.search_paths, vec!["a".to_string()]);
    }

    #[test]
    fn test_parse_full_config() {
        let yaml = r#"
pyang: /opt/pyang/bin/pyang
search_paths:
  - ./modules
  - /usr/share/yang
output_directory: ./generated
"#;
        let config: Config = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.pyang, "/opt/pyang/bin/pyang");
        assert_eq!(config.search_paths.len(), 2);
        assert_eq!(config.output_directory, Some(PathBuf::from("./generated")));
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("yang2cpp.yaml");
        std::fs::write(&path, "pyang: my-pyang\n").unwrap();

        let config = Config::load(&path).unwrap();
        assert_eq!(config.pyang, "my-pyang");
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = Config::load(dir.path().join("nope.yaml"));
        assert!(matches!(result, Err(Error::ConfigNotFound { .. })));
    }

    #[test]
    fn test_load_invalid_yaml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.yaml");
        std::fs::write(&path, "search_paths: [unclosed\n").unwrap();

        assert!(matches!(Config::load(&path), Err(Error::ConfigParse(_))));
    }

    #[test]
    fn test_load_optional_none_gives_default() {
        let config = Config::load_optional(None::<&Path>).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_merged_search_paths_cli_first() {
        let config = Config {
            search_paths: vec!["cfg".to_string()],
            ..Default::default()
        };
        let merged = config.merged_search_paths(&["cli1:cli2".to_string()]);
        assert_eq!(merged, vec!["cli1:cli2".to_string(), "cfg".to_string()]);
    }
}
