use serde_yaml::{Mapping, Value};
use std::path::Path;

/// Version stamped into configurations by [`YamlConfig::upgrade_legacy`].
pub const CURRENT_CONFIG_VERSION: &str = "1.4";

/// Versions whose layout needs no upgrade.
const UP_TO_DATE_VERSIONS: [&str; 2] = ["1.3", CURRENT_CONFIG_VERSION];

/// Errors from loading a configuration document.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("configuration root must be a mapping")]
    NotAMapping,
    #[error("invalid value {value:?} for key {key}")]
    InvalidValue { key: String, value: String },
}

/// Hierarchical key lookup with typed accessors.
///
/// Paths are given as segments (`["worlds", "nether", "radius"]`) so that
/// world names containing the separator still resolve. A lookup yields
/// `None` when the key is missing or holds a value of another type.
pub trait ConfigSource {
    fn bool_at(&self, path: &[&str]) -> Option<bool>;

    fn int_at(&self, path: &[&str]) -> Option<i64>;

    fn str_at(&self, path: &[&str]) -> Option<String>;

    fn bool_or(&self, path: &[&str], default: bool) -> bool {
        self.bool_at(path).unwrap_or(default)
    }

    fn int_or(&self, path: &[&str], default: i64) -> i64 {
        self.int_at(path).unwrap_or(default)
    }
}

/// Configuration source backed by a YAML document.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct YamlConfig {
    root: Mapping,
}

impl YamlConfig {
    /// An empty configuration: every lookup falls back to its default.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Parse a YAML document. An empty document is an empty configuration.
    pub fn parse(text: &str) -> Result<Self, ConfigError> {
        match serde_yaml::from_str::<Value>(text)? {
            Value::Null => Ok(Self::empty()),
            Value::Mapping(root) => Ok(Self { root }),
            _ => Err(ConfigError::NotAMapping),
        }
    }

    /// Read and parse a YAML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path.as_ref())?;
        let config = Self::parse(&text)?;
        tracing::debug!(path = %path.as_ref().display(), "loaded configuration file");
        Ok(config)
    }

    /// Serialize back to YAML.
    pub fn to_yaml(&self) -> Result<String, ConfigError> {
        Ok(serde_yaml::to_string(&self.root)?)
    }

    /// Bring a pre-1.3 document up to date.
    ///
    /// Old documents named the global radius `range`; its value is carried
    /// over into `radius`, replacing any `radius` present. Returns true when
    /// the document was changed.
    pub fn upgrade_legacy(&mut self) -> bool {
        let version = self.str_at(&["config_version"]);
        if version
            .as_deref()
            .is_some_and(|v| UP_TO_DATE_VERSIONS.contains(&v))
        {
            return false;
        }

        if let Some(range) = self.root.remove("range") {
            self.root.insert(Value::from("radius"), range);
        }
        self.root.insert(
            Value::from("config_version"),
            Value::from(CURRENT_CONFIG_VERSION),
        );
        tracing::info!(
            from = version.as_deref().unwrap_or("none"),
            to = CURRENT_CONFIG_VERSION,
            "upgraded configuration"
        );
        true
    }

    fn value_at(&self, path: &[&str]) -> Option<&Value> {
        let (first, rest) = path.split_first()?;
        let mut value = self.root.get(*first)?;
        for segment in rest {
            value = value.get(*segment)?;
        }
        Some(value)
    }
}

impl ConfigSource for YamlConfig {
    fn bool_at(&self, path: &[&str]) -> Option<bool> {
        self.value_at(path)?.as_bool()
    }

    fn int_at(&self, path: &[&str]) -> Option<i64> {
        self.value_at(path)?.as_i64()
    }

    fn str_at(&self, path: &[&str]) -> Option<String> {
        match self.value_at(path)? {
            Value::String(s) => Some(s.clone()),
            // Unquoted versions such as `config_version: 1.3` parse as numbers.
            Value::Number(n) => Some(n.to_string()),
            _ => None,
        }
    }
}
