// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Bridge configuration.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{CapQueryError, Result};
use crate::gates::VersionGates;
use crate::types::PackageId;

/// Settings the embedding application may override.
///
/// Missing keys take their default, so a partial JSON file is valid.
/// Unknown keys are rejected; in particular the OS version thresholds are
/// platform facts and cannot be configured.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BridgeConfig {
    /// Package identity used off-device. On Android the identity is read
    /// from the hosting activity instead.
    pub package_id: Option<String>,
    /// JNI local reference frame size for one bridge call.
    pub local_frame_capacity: i32,
}

impl Default for BridgeConfig {
    fn default() -> Self {
        Self {
            package_id: None,
            local_frame_capacity: 16,
        }
    }
}

impl BridgeConfig {
    /// Load a JSON config file and validate it.
    pub fn load(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load `path` if it exists, defaults otherwise. A present but invalid
    /// file is still an error.
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.local_frame_capacity <= 0 {
            return Err(CapQueryError::Config(format!(
                "local_frame_capacity must be positive, got {}",
                self.local_frame_capacity
            )));
        }
        if let Some(id) = &self.package_id {
            PackageId::new(id.clone())?;
        }
        Ok(())
    }

    /// Configured package identity, if any.
    pub fn package(&self) -> Result<Option<PackageId>> {
        self.package_id.clone().map(PackageId::new).transpose()
    }

    /// Gate table for the service. Always the platform defaults.
    pub fn gates(&self) -> VersionGates {
        VersionGates::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gates::Feature;
    use crate::types::PlatformVersion;
    use std::io::Write;

    #[test]
    fn defaults_match_default_gates() {
        let config = BridgeConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.gates(), VersionGates::default());
    }

    #[test]
    fn partial_file_keeps_defaults() {
        let mut file = tempfile::NamedTempFile::new().expect("tempfile");
        write!(file, r#"{{ "package_id": "org.example.game" }}"#).expect("write config");

        let config = BridgeConfig::load(file.path()).expect("load config");
        assert_eq!(config.local_frame_capacity, 16);
        assert_eq!(
            config.package().expect("valid package"),
            Some(PackageId::new("org.example.game").expect("valid id"))
        );
    }

    #[test]
    fn version_thresholds_cannot_be_configured() {
        for json in [
            r#"{ "runtime_permissions_since": 30 }"#,
            r#"{ "runtime_permissions_since": 0, "multi_window_since": 0 }"#,
            r#"{ "settings_action": "android.settings.SETTINGS" }"#,
        ] {
            let mut file = tempfile::NamedTempFile::new().expect("tempfile");
            write!(file, "{json}").expect("write config");
            let err = BridgeConfig::load(file.path()).unwrap_err();
            assert!(matches!(err, CapQueryError::Serialization(_)), "{json} was accepted");
        }
    }

    #[test]
    fn gates_are_always_platform_defaults() {
        let config = BridgeConfig {
            package_id: Some("org.example.game".into()),
            local_frame_capacity: 64,
        };
        let gates = config.gates();
        assert_eq!(
            gates.since(Feature::RuntimePermissions),
            Some(PlatformVersion::MARSHMALLOW)
        );
        assert_eq!(
            gates.since(Feature::MultiWindow),
            Some(PlatformVersion::NOUGAT)
        );
    }

    #[test]
    fn missing_file_uses_defaults() {
        let dir = tempfile::tempdir().expect("tempdir");
        let config = BridgeConfig::load_or_default(&dir.path().join("capquery.json"))
            .expect("defaults");
        assert_eq!(config, BridgeConfig::default());
    }

    #[test]
    fn malformed_file_is_an_error() {
        let mut file = tempfile::NamedTempFile::new().expect("tempfile");
        write!(file, "not json").expect("write config");
        let err = BridgeConfig::load(file.path()).unwrap_err();
        assert!(matches!(err, CapQueryError::Serialization(_)));
    }

    #[test]
    fn invalid_values_are_rejected() {
        let config = BridgeConfig {
            local_frame_capacity: 0,
            ..BridgeConfig::default()
        };
        assert!(matches!(config.validate(), Err(CapQueryError::Config(_))));

        let config = BridgeConfig {
            package_id: Some(String::new()),
            ..BridgeConfig::default()
        };
        assert!(config.validate().is_err());
    }
}
