//! Schema normalization
//!
//! Turning raw YANG text into the attributed element tree is delegated to
//! an injected [`SchemaNormalizer`]. The pipeline never spawns processes
//! itself.

use std::path::Path;

use async_trait::async_trait;
use tokio::process::Command;
use yang2cpp_core::{AttributedElement, parse_yin};

use crate::error::{Error, Result};

/// Converts a schema file into its attributed element tree
#[async_trait]
pub trait SchemaNormalizer: Send + Sync {
    /// Normalize `input`, resolving imports through `search_paths`
    async fn normalize(&self, input: &Path, search_paths: &[String]) -> Result<AttributedElement>;
}

/// Normalizes YANG files by running `pyang -f yin`
#[derive(Debug, Clone)]
pub struct PyangNormalizer {
    command: String,
}

impl PyangNormalizer {
    /// Use `command` as the pyang executable
    pub fn new(command: impl Into<String>) -> Self {
        Self {
            command: command.into(),
        }
    }

    /// Arguments passed to pyang for one input file
    pub fn arguments(input: &Path, search_paths: &[String]) -> Vec<String> {
        let mut args = vec![
            input.display().to_string(),
            "-f".to_string(),
            "yin".to_string(),
        ];
        for path in search_paths {
            args.push("-p".to_string());
            args.push(path.clone());
        }
        args
    }
}

impl Default for PyangNormalizer {
    fn default() -> Self {
        Self::new("pyang")
    }
}

#[async_trait]
impl SchemaNormalizer for PyangNormalizer {
    async fn normalize(&self, input: &Path, search_paths: &[String]) -> Result<AttributedElement> {
        let failure = |message: String| Error::Normalization {
            input: input.display().to_string(),
            message,
        };

        tracing::debug!("Running {} on {}", self.command, input.display());

        let output = Command::new(&self.command)
            .args(Self::arguments(input, search_paths))
            .output()
            .await
            .map_err(|e| failure(format!("failed to run {}: {}", self.command, e)))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(failure(format!(
                "{} exited with {}: {}",
                self.command,
                output.status,
                stderr.trim()
            )));
        }

        let yin = String::from_utf8_lossy(&output.stdout);
        parse_yin(&yin).map_err(|e| failure(e.to_string()))
    }
}

/// Reads input that is already YIN; search paths are ignored
#[derive(Debug, Clone, Copy, Default)]
pub struct YinNormalizer;

#[async_trait]
impl SchemaNormalizer for YinNormalizer {
    async fn normalize(&self, input: &Path, _search_paths: &[String]) -> Result<AttributedElement> {
        let failure = |message: String| Error::Normalization {
            input: input.display().to_string(),
            message,
        };

        let yin = tokio::fs::read_to_string(input)
            .await
            .map_err(|e| failure(e.to_string()))?;
        parse_yin(&yin).map_err(|e| failure(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pyang_arguments() {
        let args = PyangNormalizer::arguments(
            Path::new("sensor.yang"),
            &["a:b".to_string(), "c".to_string()],
        );
        assert_eq!(
            args,
            vec!["sensor.yang", "-f", "yin", "-p", "a:b", "-p", "c"]
        );
    }

    #[test]
    fn test_pyang_default_command() {
        assert_eq!(PyangNormalizer::default().command, "pyang");
    }

    #[tokio::test]
    async fn test_missing_pyang_is_normalization_error() {
        let normalizer = PyangNormalizer::new("yang2cpp-test-no-such-command");
        let err = normalizer
            .normalize(Path::new("sensor.yang"), &[])
            .await
            .unwrap_err();

        match err {
            Error::Normalization { input, message } => {
                assert_eq!(input, "sensor.yang");
                assert!(message.contains("yang2cpp-test-no-such-command"));
            }
            other => panic!("Expected Normalization, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_yin_normalizer_reads_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("m.yin");
        std::fs::write(&path, r#"<module name="m"/>"#).unwrap();

        let root = YinNormalizer.normalize(&path, &[]).await.unwrap();
        assert_eq!(root.attribute("name"), Some("m"));
    }

    #[tokio::test]
    async fn test_yin_normalizer_bad_xml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.yin");
        std::fs::write(&path, "<module>").unwrap();

        let result = YinNormalizer.normalize(&path, &[]).await;
        assert!(matches!(result, Err(Error::Normalization { .. })));
    }

    #[tokio::test]
    async fn test_yin_normalizer_missing_file() {
        let result = YinNormalizer
            .normalize(Path::new("/nonexistent/input.yin"), &[])
            .await;
        assert!(matches!(result, Err(Error::Normalization { .. })));
    }
}
