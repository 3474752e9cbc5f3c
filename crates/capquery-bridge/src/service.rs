// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Capability query service: version-gated permission and window-mode queries
// plus the application-settings action.
//
// The service holds no state besides its injected host handle, package
// identity and gate table. Nothing is cached; every call goes back to the
// host because the user can revoke a permission or resize a window at any
// moment.

use std::path::PathBuf;

use capquery_core::error::Result;
use capquery_core::gates::{Feature, VersionGates};
use capquery_core::types::{NavigationRequest, PackageId, PermissionName, PlatformVersion};
use tracing::{debug, info};

use crate::traits::HostPlatform;

/// Entry point the embedding application calls into.
pub struct CapabilityQueryService<H> {
    host: H,
    package: PackageId,
    gates: VersionGates,
}

impl<H: HostPlatform> CapabilityQueryService<H> {
    /// Service using the default gate table.
    pub fn new(host: H, package: PackageId) -> Self {
        Self::with_gates(host, package, VersionGates::default())
    }

    pub fn with_gates(host: H, package: PackageId, gates: VersionGates) -> Self {
        Self {
            host,
            package,
            gates,
        }
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn package(&self) -> &PackageId {
        &self.package
    }

    pub fn gates(&self) -> &VersionGates {
        &self.gates
    }

    pub fn platform_version(&self) -> Result<PlatformVersion> {
        self.host.platform_version()
    }

    /// Whether `name` is currently granted.
    ///
    /// Below the runtime-permission gate permissions are granted at install
    /// time, so this is `true` without asking the authority (which does not
    /// exist there).
    pub fn has_capability(&self, name: &PermissionName) -> Result<bool> {
        let version = self.host.platform_version()?;
        if !self.gates.supports(Feature::RuntimePermissions, version) {
            debug!(
                permission = %name,
                %version,
                "install-time permission model, treating as granted"
            );
            return Ok(true);
        }

        let status = self.host.check_self_permission(name)?;
        debug!(permission = %name, %version, ?status, "runtime permission checked");
        Ok(status.is_granted())
    }

    /// Whether the app is currently shown in a multi-window layout.
    ///
    /// The answer is a snapshot; re-query before every decision.
    pub fn is_multi_window(&self) -> Result<bool> {
        let version = self.host.platform_version()?;
        if !self.gates.supports(Feature::MultiWindow, version) {
            debug!(%version, "multi-window unsupported, reporting single window");
            return Ok(false);
        }
        self.host.is_in_multi_window_mode()
    }

    /// Open the OS settings screen for this application and return
    /// immediately. Fails with `NoSettingsHandler` if nothing handles it.
    pub fn open_application_settings(&self) -> Result<()> {
        let request = NavigationRequest::application_details(&self.package);
        info!(
            action = request.action(),
            package = %self.package,
            "opening application settings"
        );
        self.host.dispatch(&request)
    }

    /// App-specific directory on the secondary (removable or shared) storage
    /// volume.
    ///
    /// The host lists the primary, emulated volume first; that one is not
    /// external storage in the user's sense, so slot 1 is returned. `None`
    /// when there is no slot 1 or its volume is unavailable.
    pub fn external_storage_dir(&self) -> Result<Option<PathBuf>> {
        let dirs = self.host.external_files_dirs()?;
        let volumes = dirs.len();
        let dir = dirs.into_iter().nth(1).flatten();
        if dir.is_none() {
            debug!(volumes, "no secondary storage volume");
        }
        Ok(dir)
    }
}
