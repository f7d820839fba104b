use std::fs;
use std::path::{Path, PathBuf};

use crate::errors::StudioError;

const DEFAULT_EXPORT_DIR: &str = ".";

/// Read-only defaults for the shell, loaded from a JSON file.
///
/// ```json
/// {
///   "export": {
///     "class_name": "hero",
///     "vendor_prefixes": true,
///     "directory": "./styles",
///     "timestamp": false
///   }
/// }
/// ```
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct StudioConfig {
    class_name: String,
    vendor_prefixes: bool,
    export_dir: PathBuf,
    timestamp: bool,
}

impl Default for StudioConfig {
    fn default() -> Self {
        Self {
            class_name: String::new(),
            vendor_prefixes: false,
            export_dir: PathBuf::from(DEFAULT_EXPORT_DIR),
            timestamp: true,
        }
    }
}

impl StudioConfig {
    pub(crate) fn class_name(&self) -> &str {
        &self.class_name
    }

    pub(crate) fn vendor_prefixes(&self) -> bool {
        self.vendor_prefixes
    }

    pub(crate) fn export_dir(&self) -> &Path {
        &self.export_dir
    }

    pub(crate) fn timestamp(&self) -> bool {
        self.timestamp
    }

    /// Read known fields, keeping defaults for anything missing or of the
    /// wrong type.
    pub(crate) fn from_json(value: &serde_json::Value) -> Self {
        let mut config = StudioConfig::default();
        let Some(export) = value.get("export") else {
            return config;
        };

        if let Some(class_name) = read_string_field(export, "class_name")
            .filter(|value| is_css_identifier(value))
        {
            config.class_name = class_name;
        }

        if let Some(prefixes) = read_bool_field(export, "vendor_prefixes") {
            config.vendor_prefixes = prefixes;
        }

        if let Some(directory) = read_string_field(export, "directory")
            .filter(|value| !value.trim().is_empty())
        {
            config.export_dir = PathBuf::from(directory);
        }

        if let Some(timestamp) = read_bool_field(export, "timestamp") {
            config.timestamp = timestamp;
        }

        config
    }
}

/// Status describing how the config was obtained.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum ConfigLoadStatus {
    Loaded,
    Missing,
    Invalid(String),
}

/// Result of loading the config file.
#[derive(Debug, Clone)]
pub(crate) struct ConfigLoad {
    config: StudioConfig,
    status: ConfigLoadStatus,
}

impl ConfigLoad {
    pub(crate) fn new(config: StudioConfig, status: ConfigLoadStatus) -> Self {
        Self { config, status }
    }

    /// Consume the value and return both payload and status.
    pub(crate) fn into_parts(self) -> (StudioConfig, ConfigLoadStatus) {
        (self.config, self.status)
    }
}

/// Load the config from `path`, or from the default location when `None`.
pub(crate) fn load_config(
    path: Option<&Path>,
) -> Result<ConfigLoad, StudioError> {
    match path {
        Some(path) => load_config_from_path(path),
        None => load_config_from_path(&config_path()),
    }
}

fn load_config_from_path(path: &Path) -> Result<ConfigLoad, StudioError> {
    let data = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            return Ok(ConfigLoad::new(
                StudioConfig::default(),
                ConfigLoadStatus::Missing,
            ));
        },
        Err(err) => return Err(err.into()),
    };

    let parsed = match serde_json::from_str::<serde_json::Value>(&data) {
        Ok(value) => value,
        Err(err) => {
            return Ok(ConfigLoad::new(
                StudioConfig::default(),
                ConfigLoadStatus::Invalid(format!("{err}")),
            ));
        },
    };

    Ok(ConfigLoad::new(
        StudioConfig::from_json(&parsed),
        ConfigLoadStatus::Loaded,
    ))
}

fn config_path() -> PathBuf {
    if let Ok(home) = std::env::var("HOME") {
        return Path::new(&home)
            .join(".config")
            .join("gradia")
            .join("config.json");
    }

    std::env::temp_dir().join("gradia").join("config.json")
}

fn read_string_field(value: &serde_json::Value, key: &str) -> Option<String> {
    value
        .get(key)
        .and_then(serde_json::Value::as_str)
        .map(ToString::to_string)
}

fn read_bool_field(value: &serde_json::Value, key: &str) -> Option<bool> {
    value.get(key).and_then(serde_json::Value::as_bool)
}

/// Return `true` for names usable as a CSS class and SCSS mixin name.
pub(crate) fn is_css_identifier(value: &str) -> bool {
    let mut chars = value.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    (first.is_ascii_alphabetic() || first == '_' || first == '-')
        && chars.all(|ch| ch.is_ascii_alphanumeric() || ch == '_' || ch == '-')
}
