//! Engine configuration.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::{Error, Result};

/// Environment variable selecting the device-id casing policy.
pub const DEVICE_ID_CASING_ENV: &str = "MATCHKEY_DEVICE_ID_CASING";

/// How advertising identifiers are cased before being forwarded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeviceIdCasing {
    /// Forward the identifier exactly as supplied (conversions API).
    #[default]
    Preserve,
    /// Uppercase IDFAs on iOS devices, lowercase AAIDs on Android (pixel).
    ByDeviceOs,
}

impl std::str::FromStr for DeviceIdCasing {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "preserve" => Ok(Self::Preserve),
            "by_device_os" | "by-device-os" => Ok(Self::ByDeviceOs),
            other => Err(Error::Config(format!("unknown device id casing: {}", other))),
        }
    }
}

impl std::fmt::Display for DeviceIdCasing {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Preserve => write!(f, "preserve"),
            Self::ByDeviceOs => write!(f, "by_device_os"),
        }
    }
}

/// Top-level engine configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    #[serde(default)]
    pub device_id_casing: DeviceIdCasing,
}

impl EngineConfig {
    /// Load configuration from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)?;
        let config: EngineConfig = serde_json::from_str(&raw)?;
        debug!("Loaded engine config from {}", path.display());
        Ok(config)
    }

    /// Create configuration from environment and defaults.
    pub fn from_env() -> Self {
        let device_id_casing = match std::env::var(DEVICE_ID_CASING_ENV) {
            Ok(value) => value.parse().unwrap_or_else(|e| {
                warn!("{}; using default", e);
                DeviceIdCasing::default()
            }),
            Err(_) => DeviceIdCasing::default(),
        };

        Self { device_id_casing }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_is_preserve() {
        assert_eq!(EngineConfig::default().device_id_casing, DeviceIdCasing::Preserve);
    }

    #[test]
    fn test_parse_casing() {
        assert_eq!("preserve".parse::<DeviceIdCasing>().unwrap(), DeviceIdCasing::Preserve);
        assert_eq!(" By_Device_OS ".parse::<DeviceIdCasing>().unwrap(), DeviceIdCasing::ByDeviceOs);
        assert!(matches!("upper".parse::<DeviceIdCasing>(), Err(Error::Config(_))));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"device_id_casing": "by_device_os"}}"#).unwrap();
        let config = EngineConfig::load(file.path()).unwrap();
        assert_eq!(config.device_id_casing, DeviceIdCasing::ByDeviceOs);
    }

    #[test]
    fn test_load_empty_object_uses_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{{}}").unwrap();
        let config = EngineConfig::load(file.path()).unwrap();
        assert_eq!(config, EngineConfig::default());
    }

    #[test]
    fn test_load_errors() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(
            EngineConfig::load(dir.path().join("missing.json")),
            Err(Error::Io(_))
        ));

        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();
        assert!(matches!(EngineConfig::load(file.path()), Err(Error::Json(_))));
    }
}
