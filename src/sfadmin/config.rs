use crate::error::{Result, SfAdminError};
use crate::exec::DEFAULT_EXECUTABLE;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";

/// Keys accepted by `sfadmin config`.
pub const CONFIG_KEYS: &[&str] = &["target-org", "executable"];

/// Configuration for sfadmin, stored in `<config dir>/config.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SfAdminConfig {
    /// Org alias used when `--org` is not given. `None` defers to the
    /// default org configured in the sf CLI itself.
    #[serde(default)]
    pub target_org: Option<String>,

    /// Name or path of the Salesforce CLI executable
    #[serde(default = "default_executable")]
    pub executable: String,
}

fn default_executable() -> String {
    DEFAULT_EXECUTABLE.to_string()
}

impl Default for SfAdminConfig {
    fn default() -> Self {
        Self {
            target_org: None,
            executable: default_executable(),
        }
    }
}

impl SfAdminConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)?;
        let config: SfAdminConfig = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();
        fs::create_dir_all(config_dir)?;

        let content = serde_json::to_string_pretty(self)?;
        fs::write(config_dir.join(CONFIG_FILENAME), content)?;
        Ok(())
    }

    pub fn get(&self, key: &str) -> Result<String> {
        match key {
            "target-org" => Ok(self.target_org.clone().unwrap_or_default()),
            "executable" => Ok(self.executable.clone()),
            other => Err(unknown_key(other)),
        }
    }

    /// Sets a value by its command-line key. An empty target org clears it.
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let value = value.trim();
        match key {
            "target-org" => {
                self.target_org = if value.is_empty() {
                    None
                } else {
                    Some(value.to_string())
                };
            }
            "executable" => {
                if value.is_empty() {
                    return Err(SfAdminError::Config("executable cannot be empty".into()));
                }
                self.executable = value.to_string();
            }
            other => return Err(unknown_key(other)),
        }
        Ok(())
    }
}

fn unknown_key(key: &str) -> SfAdminError {
    SfAdminError::Config(format!(
        "Unknown config key: {} (expected one of: {})",
        key,
        CONFIG_KEYS.join(", ")
    ))
}
