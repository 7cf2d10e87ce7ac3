use std::fs;
use std::path::Path;
use std::time::Duration;

use anyhow::Result;
use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Files probed, in order, when `CONFIG_PATH` is not set.
pub const DEFAULT_CONFIG_FILES: [&str; 2] = ["probe.yaml", "probe.json"];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProbeConfig {
    #[serde(default = "default_api_url")]
    pub api_url: String,
    #[serde(default = "default_target_lang")]
    pub target_lang: String,
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
    /// Print the locally cleaned text next to each original text.
    #[serde(default = "default_true")]
    pub cleaning_preview: bool,
}

fn default_api_url() -> String {
    "http://localhost:8080/translate".to_string()
}

fn default_target_lang() -> String {
    "fr".to_string()
}

fn default_timeout_ms() -> u64 {
    10_000
}

fn default_true() -> bool {
    true
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            target_lang: default_target_lang(),
            timeout_ms: default_timeout_ms(),
            cleaning_preview: default_true(),
        }
    }
}

impl ProbeConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    /// Load configuration from a YAML or JSON file, picked by extension.
    pub fn load(path: &str) -> Result<Self> {
        if !Path::new(path).exists() {
            anyhow::bail!("Configuration file not found: {}", path);
        }

        let content = substitute_env_vars(&read_text_file(path)?)?;

        let path_lower = path.to_lowercase();
        let config = if path_lower.ends_with(".json") {
            serde_json::from_str(&content)?
        } else if content.trim().is_empty() {
            Self::default()
        } else {
            serde_yaml::from_str(&content)?
        };
        Ok(config)
    }

    /// Resolve the configuration for a run.
    ///
    /// An explicit `config_path` must exist and parse. Otherwise the first of
    /// `DEFAULT_CONFIG_FILES` found in the working directory is used, and
    /// with none present the defaults apply. Returns the path that was
    /// loaded, if any.
    pub fn resolve(config_path: Option<&str>) -> Result<(Self, Option<String>)> {
        if let Some(path) = config_path {
            return Ok((Self::load(path)?, Some(path.to_string())));
        }

        for path in DEFAULT_CONFIG_FILES {
            if Path::new(path).exists() {
                return Ok((Self::load(path)?, Some(path.to_string())));
            }
            debug!("No configuration at {}", path);
        }

        Ok((Self::default(), None))
    }
}

/// Read a UTF-8 text file, dropping a leading byte order mark.
fn read_text_file(path: &str) -> Result<String> {
    let bytes = fs::read(path)?;
    let (cow, had_errors) = encoding_rs::UTF_8.decode_with_bom_removal(&bytes);
    if had_errors {
        anyhow::bail!("Configuration file is not valid UTF-8: {}", path);
    }
    Ok(cow.into_owned())
}

/// Replace `${VAR_NAME}` with the value of the environment variable.
/// Unset variables are left as written.
fn substitute_env_vars(content: &str) -> Result<String> {
    let pattern = Regex::new(r"\$\{(\w+)\}")?;
    let replaced = pattern.replace_all(content, |caps: &regex::Captures| {
        std::env::var(&caps[1]).unwrap_or_else(|_| caps[0].to_string())
    });
    Ok(replaced.into_owned())
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    fn write_temp(suffix: &str, content: &[u8]) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
        file.write_all(content).unwrap();
        file
    }

    #[test]
    fn defaults_match_the_local_service() {
        let config = ProbeConfig::default();
        assert_eq!(config.api_url, "http://localhost:8080/translate");
        assert_eq!(config.target_lang, "fr");
        assert_eq!(config.timeout(), Duration::from_secs(10));
        assert!(config.cleaning_preview);
    }

    #[test]
    fn yaml_overrides_only_given_fields() {
        let file = write_temp(".yaml", b"target_lang: de\ntimeout_ms: 500\n");
        let config = ProbeConfig::load(file.path().to_str().unwrap()).unwrap();
        assert_eq!(config.target_lang, "de");
        assert_eq!(config.timeout_ms, 500);
        assert_eq!(config.api_url, "http://localhost:8080/translate");
    }

    #[test]
    fn json_with_bom_is_accepted() {
        let mut content = vec![0xEF, 0xBB, 0xBF];
        content.extend_from_slice(
            br#"{"api_url": "http://127.0.0.1:9999/translate", "cleaning_preview": false}"#,
        );
        let file = write_temp(".json", &content);
        let config = ProbeConfig::load(file.path().to_str().unwrap()).unwrap();
        assert_eq!(config.api_url, "http://127.0.0.1:9999/translate");
        assert!(!config.cleaning_preview);
    }

    #[test]
    fn env_vars_are_substituted() {
        std::env::set_var("TRANSFLOW_PROBE_TEST_LANG", "es");
        let file = write_temp(".yaml", b"target_lang: ${TRANSFLOW_PROBE_TEST_LANG}\n");
        let config = ProbeConfig::load(file.path().to_str().unwrap()).unwrap();
        assert_eq!(config.target_lang, "es");
    }

    #[test]
    fn unset_env_var_is_left_in_place() {
        let out = substitute_env_vars("url: ${TRANSFLOW_PROBE_SURELY_UNSET}").unwrap();
        assert_eq!(out, "url: ${TRANSFLOW_PROBE_SURELY_UNSET}");
    }

    #[test]
    fn explicit_missing_file_is_an_error() {
        let err = ProbeConfig::resolve(Some("/nonexistent/probe.yaml")).unwrap_err();
        assert!(err.to_string().contains("Configuration file not found"));
    }

    #[test]
    fn malformed_file_is_an_error() {
        let file = write_temp(".json", b"{ not json");
        assert!(ProbeConfig::load(file.path().to_str().unwrap()).is_err());
    }
}
