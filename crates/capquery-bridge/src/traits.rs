// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Platform-agnostic trait definitions for the OS facilities the capability
// service calls into.
//
// These traits carry no version logic. They describe what the host can be
// asked; `CapabilityQueryService` decides when asking is allowed.

use std::path::PathBuf;

use capquery_core::error::Result;
use capquery_core::types::{NavigationRequest, PermissionName, PermissionStatus, PlatformVersion};

/// Unified host handle that groups every OS facility the service needs.
pub trait HostPlatform:
    PlatformInfo + PermissionAuthority + WindowState + SettingsNavigator + ExternalStorage
{
    /// Human-readable platform name (e.g. "Android", "Desktop (stub)").
    fn platform_name(&self) -> &str;
}

/// Host OS version.
pub trait PlatformInfo {
    /// Current OS version. Constant for the life of the process.
    fn platform_version(&self) -> Result<PlatformVersion>;
}

/// The OS runtime permission authority for the current execution context.
pub trait PermissionAuthority {
    /// Ask whether `name` is granted to this process right now.
    ///
    /// Only valid on versions with runtime permissions. Unrecognised names
    /// report `Denied`.
    fn check_self_permission(&self, name: &PermissionName) -> Result<PermissionStatus>;
}

/// Window-state query for the current top-level window.
pub trait WindowState {
    /// Only valid on versions with multi-window support.
    fn is_in_multi_window_mode(&self) -> Result<bool>;
}

/// Dispatcher for one-way settings navigation.
pub trait SettingsNavigator {
    /// Hand `request` to the OS and return without waiting for the screen.
    ///
    /// Returns `CapQueryError::NoSettingsHandler` when nothing on the device
    /// accepts the request.
    fn dispatch(&self, request: &NavigationRequest) -> Result<()>;
}

/// App-specific external storage directories.
pub trait ExternalStorage {
    /// Every external files directory the OS reports, primary volume first.
    /// A volume that is currently unavailable keeps its slot as `None`.
    fn external_files_dirs(&self) -> Result<Vec<Option<PathBuf>>>;
}

impl<T: HostPlatform + ?Sized> HostPlatform for Box<T> {
    fn platform_name(&self) -> &str {
        (**self).platform_name()
    }
}

impl<T: PlatformInfo + ?Sized> PlatformInfo for Box<T> {
    fn platform_version(&self) -> Result<PlatformVersion> {
        (**self).platform_version()
    }
}

impl<T: PermissionAuthority + ?Sized> PermissionAuthority for Box<T> {
    fn check_self_permission(&self, name: &PermissionName) -> Result<PermissionStatus> {
        (**self).check_self_permission(name)
    }
}

impl<T: WindowState + ?Sized> WindowState for Box<T> {
    fn is_in_multi_window_mode(&self) -> Result<bool> {
        (**self).is_in_multi_window_mode()
    }
}

impl<T: SettingsNavigator + ?Sized> SettingsNavigator for Box<T> {
    fn dispatch(&self, request: &NavigationRequest) -> Result<()> {
        (**self).dispatch(request)
    }
}

impl<T: ExternalStorage + ?Sized> ExternalStorage for Box<T> {
    fn external_files_dirs(&self) -> Result<Vec<Option<PathBuf>>> {
        (**self).external_files_dirs()
    }
}
