use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use std::{collections::BTreeMap, env, fmt::Debug, fs, ops::RangeBounds, path::Path};

/// Environment variable naming an optional session configuration file.
pub const CONFIG_ENV_VAR: &str = "SAMPLE_SESSION_CONFIG";

/// Compute session configuration.
///
/// Every field has a default, so a TOML file only needs the keys it
/// overrides. See [`SessionConfig::from_file`] for loading.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SessionConfig {
    /// Application name reported by the session.
    pub app_name: String,
    /// Master URL, e.g. `local[*]`.
    pub master: String,

    /// Number of rows rendered by `show`.
    pub show_rows: usize,
    /// Maximum cell width rendered by `show` (0 disables truncation).
    pub truncate: usize,

    /// Additional `key = "value"` settings exposed through `Session::conf`.
    pub extra: BTreeMap<String, String>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            app_name: "sample-package".to_string(),
            master: "local[*]".to_string(),
            show_rows: 20,
            truncate: 20,
            extra: BTreeMap::new(),
        }
    }
}

impl SessionConfig {
    /// Load a [`SessionConfig`] from a TOML file.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read, deserialized,
    /// or if the configuration values are invalid.
    pub fn from_file<P: AsRef<Path>>(file: P) -> Result<Self> {
        let file = file.as_ref();
        let contents =
            fs::read_to_string(file).with_context(|| format!("failed to read {file:?}"))?;

        let config: SessionConfig =
            toml::from_str(&contents).context("failed to deserialize config")?;

        config.validate().context("failed to validate config")?;

        Ok(config)
    }

    /// Load the file named by [`CONFIG_ENV_VAR`], or fall back to the defaults.
    pub fn from_env() -> Result<Self> {
        match env::var_os(CONFIG_ENV_VAR) {
            Some(file) => {
                log::info!("loading session config from {file:?}");
                Self::from_file(&file).with_context(|| format!("failed to load {file:?}"))
            }
            None => Ok(Self::default()),
        }
    }

    pub fn validate(&self) -> Result<()> {
        check_non_empty(&self.app_name).context("invalid application name")?;
        check_non_empty(&self.master).context("invalid master")?;

        check_num(self.show_rows, 1..10_000).context("invalid number of rows to show")?;
        check_num(self.truncate, 0..1_000).context("invalid truncation width")?;

        Ok(())
    }
}

fn check_num<T, R>(num: T, range: R) -> Result<()>
where
    T: PartialOrd + Debug,
    R: RangeBounds<T> + Debug,
{
    if !range.contains(&num) {
        bail!("number must be in the range {range:?}, but is {num:?}");
    }
    Ok(())
}

fn check_non_empty(string: &str) -> Result<()> {
    if string.trim().is_empty() {
        bail!("string must not be empty");
    }
    Ok(())
}
