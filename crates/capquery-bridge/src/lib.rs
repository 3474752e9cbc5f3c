// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// capquery bridge — version-gated permission, multi-window and app-settings
// queries for native code hosted inside a mobile Activity.
//
// The service is generic over a `HostPlatform`; `platform_service` wires in
// the backend for the current target.

pub mod service;
pub mod traits;

#[cfg(target_os = "android")]
pub mod android;

#[cfg(not(target_os = "android"))]
pub mod stub;

use capquery_core::config::BridgeConfig;
use capquery_core::error::Result;

pub use service::CapabilityQueryService;
pub use traits::HostPlatform;

/// Service backed by the host implementation for the target OS.
pub type PlatformService = CapabilityQueryService<Box<dyn HostPlatform>>;

/// Build the service for the target operating system from `config`.
///
/// On Android the package identity is read from the hosting Activity and
/// `config.package_id` is ignored. Elsewhere `config.package_id` is required
/// and the stub host answers every query with `PlatformUnavailable`.
pub fn platform_service(config: &BridgeConfig) -> Result<PlatformService> {
    config.validate()?;

    #[cfg(target_os = "android")]
    let (host, package) = {
        let host = android::AndroidHost::new(config.local_frame_capacity)?;
        let package = host.package_id()?;
        (Box::new(host) as Box<dyn HostPlatform>, package)
    };

    #[cfg(not(target_os = "android"))]
    let (host, package) = {
        let package = config.package()?.ok_or_else(|| {
            capquery_core::CapQueryError::Config("package_id is required off-device".into())
        })?;
        (Box::new(stub::StubHost) as Box<dyn HostPlatform>, package)
    };

    let gates = config.gates();
    for gate in gates.iter() {
        tracing::debug!(feature = ?gate.feature, since = %gate.since, "version gate");
    }
    tracing::info!(
        platform = host.platform_name(),
        package = %package,
        "capability service ready"
    );

    Ok(CapabilityQueryService::with_gates(host, package, gates))
}

#[cfg(test)]
mod tests {
    use capquery_core::CapQueryError;

    use super::*;

    #[cfg(not(target_os = "android"))]
    #[test]
    fn desktop_service_requires_package_id() {
        let err = platform_service(&BridgeConfig::default()).err();
        assert!(matches!(err, Some(CapQueryError::Config(_))));
    }

    #[cfg(not(target_os = "android"))]
    #[test]
    fn desktop_service_uses_stub_and_platform_gates() {
        let config = BridgeConfig {
            package_id: Some("org.example.game".into()),
            ..BridgeConfig::default()
        };
        let svc = platform_service(&config).expect("service");
        assert_eq!(svc.host().platform_name(), "Desktop (stub)");
        assert_eq!(svc.package().as_str(), "org.example.game");
        assert_eq!(svc.gates(), &capquery_core::VersionGates::default());
    }

    #[test]
    fn invalid_config_is_rejected_before_touching_the_host() {
        let config = BridgeConfig {
            local_frame_capacity: -1,
            ..BridgeConfig::default()
        };
        assert!(matches!(platform_service(&config), Err(CapQueryError::Config(_))));
    }
}
