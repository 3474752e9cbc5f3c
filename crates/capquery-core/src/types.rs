// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Core domain types for capquery.

use std::borrow::Cow;

use serde::{Deserialize, Serialize};

use crate::error::{CapQueryError, Result};

/// Settings action that opens the per-application details screen.
pub const ACTION_APPLICATION_DETAILS_SETTINGS: &str =
    "android.settings.APPLICATION_DETAILS_SETTINGS";

/// URI scheme used to scope a settings intent to one package.
const PACKAGE_URI_SCHEME: &str = "package";

/// Name of a single OS-defined permission, passed to the OS verbatim.
///
/// No validation happens here; an unknown name is the OS's problem and comes
/// back as "not granted".
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PermissionName(Cow<'static, str>);

impl PermissionName {
    pub const READ_EXTERNAL_STORAGE: Self =
        Self::from_static("android.permission.READ_EXTERNAL_STORAGE");
    pub const WRITE_EXTERNAL_STORAGE: Self =
        Self::from_static("android.permission.WRITE_EXTERNAL_STORAGE");
    pub const RECORD_AUDIO: Self = Self::from_static("android.permission.RECORD_AUDIO");
    pub const ACCESS_FINE_LOCATION: Self =
        Self::from_static("android.permission.ACCESS_FINE_LOCATION");

    pub fn new(name: impl Into<String>) -> Self {
        Self(Cow::Owned(name.into()))
    }

    pub const fn from_static(name: &'static str) -> Self {
        Self(Cow::Borrowed(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for PermissionName {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for PermissionName {
    fn from(name: String) -> Self {
        Self::new(name)
    }
}

impl std::fmt::Display for PermissionName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Host OS version (the Android API level).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PlatformVersion(pub u32);

impl PlatformVersion {
    /// Android 6.0, first release with runtime-revocable permissions.
    pub const MARSHMALLOW: Self = Self(23);
    /// Android 7.0, first release with multi-window support.
    pub const NOUGAT: Self = Self(24);

    pub const fn new(level: u32) -> Self {
        Self(level)
    }

    pub const fn get(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for PlatformVersion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "API {}", self.0)
    }
}

/// What the OS permission authority reported for one permission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PermissionStatus {
    Granted,
    Denied,
}

impl PermissionStatus {
    /// Map a `PackageManager.PERMISSION_*` code. Only `0` means granted.
    pub fn from_android_code(code: i32) -> Self {
        if code == 0 {
            Self::Granted
        } else {
            Self::Denied
        }
    }

    pub fn is_granted(self) -> bool {
        matches!(self, Self::Granted)
    }
}

/// The application's own package identity, e.g. `org.example.game`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PackageId(String);

impl PackageId {
    /// Build a package id. Empty names and names containing whitespace are
    /// rejected since they can never address an installed package.
    pub fn new(name: impl Into<String>) -> Result<Self> {
        let name = name.into();
        if name.is_empty() || name.chars().any(char::is_whitespace) {
            return Err(CapQueryError::Config(format!(
                "invalid package id {name:?}"
            )));
        }
        Ok(Self(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// `package:<id>` URI used as intent data.
    pub fn settings_uri(&self) -> String {
        format!("{PACKAGE_URI_SCHEME}:{}", self.0)
    }
}

impl TryFrom<String> for PackageId {
    type Error = CapQueryError;

    fn try_from(name: String) -> Result<Self> {
        Self::new(name)
    }
}

impl From<PackageId> for String {
    fn from(id: PackageId) -> Self {
        id.0
    }
}

impl std::fmt::Display for PackageId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A one-way request to open a settings surface for a package.
///
/// Only constructible through [`NavigationRequest::application_details`], so
/// every request opens the application-details screen of exactly one
/// package.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationRequest {
    action: String,
    package: PackageId,
}

impl NavigationRequest {
    /// Request for the application-details settings screen of `package`.
    pub fn application_details(package: &PackageId) -> Self {
        Self {
            action: ACTION_APPLICATION_DETAILS_SETTINGS.to_string(),
            package: package.clone(),
        }
    }

    pub fn action(&self) -> &str {
        &self.action
    }

    pub fn package(&self) -> &PackageId {
        &self.package
    }

    pub fn data_uri(&self) -> String {
        self.package.settings_uri()
    }
}
