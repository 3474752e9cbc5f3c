// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Stub host for desktop/CI builds where the mobile OS is unavailable.
//
// Every query returns `PlatformUnavailable`; the real implementation lives in
// the `android` module.

use std::path::PathBuf;

use capquery_core::error::{CapQueryError, Result};
use capquery_core::types::{NavigationRequest, PermissionName, PermissionStatus, PlatformVersion};

use crate::traits::*;

/// No-op host returned on non-mobile platforms.
pub struct StubHost;

impl HostPlatform for StubHost {
    fn platform_name(&self) -> &str {
        "Desktop (stub)"
    }
}

impl PlatformInfo for StubHost {
    fn platform_version(&self) -> Result<PlatformVersion> {
        tracing::warn!("PlatformInfo::platform_version called on stub host");
        Err(CapQueryError::PlatformUnavailable)
    }
}

impl PermissionAuthority for StubHost {
    fn check_self_permission(&self, name: &PermissionName) -> Result<PermissionStatus> {
        tracing::warn!(
            permission = %name,
            "PermissionAuthority::check_self_permission called on stub host"
        );
        Err(CapQueryError::PlatformUnavailable)
    }
}

impl WindowState for StubHost {
    fn is_in_multi_window_mode(&self) -> Result<bool> {
        tracing::warn!("WindowState::is_in_multi_window_mode called on stub host");
        Err(CapQueryError::PlatformUnavailable)
    }
}

impl SettingsNavigator for StubHost {
    fn dispatch(&self, request: &NavigationRequest) -> Result<()> {
        tracing::warn!(
            action = request.action(),
            "SettingsNavigator::dispatch called on stub host"
        );
        Err(CapQueryError::PlatformUnavailable)
    }
}

impl ExternalStorage for StubHost {
    fn external_files_dirs(&self) -> Result<Vec<Option<PathBuf>>> {
        Err(CapQueryError::PlatformUnavailable)
    }
}

#[cfg(test)]
mod tests {
    use capquery_core::types::PackageId;

    use super::*;
    use crate::service::CapabilityQueryService;

    #[test]
    fn every_query_is_unavailable() {
        let pkg = PackageId::new("org.example.game").expect("valid id");
        let svc = CapabilityQueryService::new(StubHost, pkg);

        assert!(matches!(
            svc.has_capability(&PermissionName::RECORD_AUDIO),
            Err(CapQueryError::PlatformUnavailable)
        ));
        assert!(matches!(svc.is_multi_window(), Err(CapQueryError::PlatformUnavailable)));
        assert!(matches!(
            svc.open_application_settings(),
            Err(CapQueryError::PlatformUnavailable)
        ));
        assert!(matches!(
            svc.external_storage_dir(),
            Err(CapQueryError::PlatformUnavailable)
        ));
    }
}
