//! Loader for Scout's configuration: YAML file + environment overlays.
//!
//! Precedence, lowest first: built-in defaults, the YAML file (optional),
//! `SCOUT__`-prefixed environment variables (`__` separates nesting, so
//! `SCOUT__MEDIUM__RESPONSE_DELAY_MS=250` sets `medium.response_delay_ms`).
//! `${VAR}` placeholders in any string value are expanded after merging.
//! Command-line flags are layered on top by the binary.
use config::{Config, ConfigError, Environment, File, FileFormat};
use serde::Deserialize;
use serde_json::Value;
use std::path::{Path, PathBuf};

const MAXIMUM_ENV_EXPANSION_DEPTH: usize = 8;

pub const ENV_PREFIX: &str = "SCOUT";
pub const DEFAULT_CONFIG_FILE: &str = "scout.yaml";

#[derive(Debug, Clone, Deserialize)]
pub struct ScoutConfig {
    /// Starting account; may also come from the command line.
    #[serde(default)]
    pub handle: Option<String>,
    #[serde(default = "default_min_recommends")]
    pub min_recommends: u64,
    #[serde(default)]
    pub medium: MediumConfig,
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct MediumConfig {
    pub origin: String,
    pub request_timeout_secs: u64,
    /// Pause after each post's responses are fetched.
    pub response_delay_ms: u64,
    pub recency_days: i64,
}

impl Default for MediumConfig {
    fn default() -> Self {
        Self {
            origin: "https://medium.com".into(),
            request_timeout_secs: 15,
            response_delay_ms: 1000,
            recency_days: 30,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub csv_path: PathBuf,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            csv_path: PathBuf::from("interesting_people.csv"),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub dir: Option<PathBuf>,
    /// `text` or `json`.
    pub format: String,
    pub stderr: bool,
    /// Used when `RUST_LOG` is unset.
    pub filter: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            dir: None,
            format: "text".into(),
            stderr: false,
            filter: "info".into(),
        }
    }
}

fn default_min_recommends() -> u64 {
    10
}

fn expand_env_in_value(v: &mut Value) {
    match v {
        Value::String(s) => {
            if s.contains('$') {
                let mut cur = std::mem::take(s);
                for _ in 0..MAXIMUM_ENV_EXPANSION_DEPTH {
                    let expanded = match shellexpand::env(&cur) {
                        Ok(cow) => cow.into_owned(),
                        Err(_) => break,
                    };
                    if expanded == cur {
                        break;
                    }
                    cur = expanded;
                }
                *s = cur;
            }
        }
        Value::Array(arr) => arr.iter_mut().for_each(expand_env_in_value),
        Value::Object(obj) => obj.values_mut().for_each(expand_env_in_value),
        _ => {}
    }
}

/// Builder over the `config` crate sources.
pub struct ScoutConfigLoader {
    builder: config::ConfigBuilder<config::builder::DefaultState>,
}

impl Default for ScoutConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl ScoutConfigLoader {
    /// Start from defaults with `SCOUT__` environment overrides.
    ///
    /// ```
    /// use scout_config::ScoutConfigLoader;
    ///
    /// let config = ScoutConfigLoader::new()
    ///     .with_yaml_str("handle: alice")
    ///     .load()
    ///     .expect("valid config");
    ///
    /// assert_eq!(config.handle.as_deref(), Some("alice"));
    /// assert_eq!(config.min_recommends, 10);
    /// assert_eq!(config.medium.recency_days, 30);
    /// ```
    pub fn new() -> Self {
        Self {
            builder: Config::builder(),
        }
    }

    /// Attach a required YAML/TOML/JSON file; the format is inferred from the suffix.
    pub fn with_file<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.builder = self
            .builder
            .add_source(File::from(path.as_ref()).required(true));
        self
    }

    /// Attach a file that may not exist.
    pub fn with_optional_file<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.builder = self
            .builder
            .add_source(File::from(path.as_ref()).required(false));
        self
    }

    /// Merge an inline YAML snippet.
    ///
    /// ```
    /// use scout_config::ScoutConfigLoader;
    ///
    /// let cfg = ScoutConfigLoader::new()
    ///     .with_yaml_str(
    ///         r#"
    /// handle: "alice"
    /// min_recommends: 25
    /// medium:
    ///   response_delay_ms: 250
    /// "#,
    ///     )
    ///     .load()
    ///     .unwrap();
    ///
    /// assert_eq!(cfg.min_recommends, 25);
    /// assert_eq!(cfg.medium.response_delay_ms, 250);
    /// assert_eq!(cfg.medium.origin, "https://medium.com");
    /// ```
    pub fn with_yaml_str(mut self, yaml: &str) -> Self {
        self.builder = self
            .builder
            .add_source(File::from_str(yaml, FileFormat::Yaml));
        self
    }

    /// Merge all sources, apply environment overrides, expand `${VAR}`, and
    /// deserialize.
    ///
    /// ```
    /// use scout_config::ScoutConfigLoader;
    ///
    /// unsafe { std::env::set_var("SCOUT_DOC_HANDLE", "injected-from-env"); }
    ///
    /// let config = ScoutConfigLoader::new()
    ///     .with_yaml_str(r#"handle: "${SCOUT_DOC_HANDLE}""#)
    ///     .load()
    ///     .expect("valid configuration");
    ///
    /// assert_eq!(config.handle.as_deref(), Some("injected-from-env"));
    ///
    /// unsafe { std::env::remove_var("SCOUT_DOC_HANDLE"); }
    /// ```
    pub fn load(self) -> Result<ScoutConfig, ConfigError> {
        let cfg = self
            .builder
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let mut v: Value = cfg.try_deserialize()?;
        expand_env_in_value(&mut v);

        serde_json::from_value(v).map_err(|e| ConfigError::Message(e.to_string()))
    }
}
