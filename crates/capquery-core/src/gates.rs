// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Version gates: which platform features exist at which OS version.
//
// Every version-dependent branch in the bridge goes through this table.

use serde::{Deserialize, Serialize};

use crate::types::PlatformVersion;

/// Platform features whose availability depends on the OS version.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Feature {
    /// Permissions are granted and revoked at runtime. Below this version
    /// every declared permission is granted at install time.
    RuntimePermissions,
    /// `Activity.isInMultiWindowMode()` exists.
    MultiWindow,
}

/// One row of the gate table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Gate {
    pub feature: Feature,
    pub since: PlatformVersion,
}

/// Ordered table mapping each feature to the first version supporting it.
///
/// Rows are kept sorted by `since`, ties broken by insertion order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionGates {
    gates: Vec<Gate>,
}

impl VersionGates {
    /// Table with no rows. Every feature is unsupported.
    pub fn empty() -> Self {
        Self { gates: Vec::new() }
    }

    /// Insert a row, replacing any existing row for the same feature.
    pub fn with_gate(mut self, feature: Feature, since: PlatformVersion) -> Self {
        self.gates.retain(|g| g.feature != feature);
        let at = self.gates.partition_point(|g| g.since <= since);
        self.gates.insert(at, Gate { feature, since });
        self
    }

    /// First version that supports `feature`, if the table knows it.
    pub fn since(&self, feature: Feature) -> Option<PlatformVersion> {
        self.gates
            .iter()
            .find(|g| g.feature == feature)
            .map(|g| g.since)
    }

    /// Whether `feature` exists on `version`. Unknown features are
    /// unsupported.
    pub fn supports(&self, feature: Feature, version: PlatformVersion) -> bool {
        self.since(feature).is_some_and(|since| version >= since)
    }

    /// Rows in table order.
    pub fn iter(&self) -> impl Iterator<Item = &Gate> {
        self.gates.iter()
    }
}

impl Default for VersionGates {
    fn default() -> Self {
        Self::empty()
            .with_gate(Feature::RuntimePermissions, PlatformVersion::MARSHMALLOW)
            .with_gate(Feature::MultiWindow, PlatformVersion::NOUGAT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_thresholds() {
        let gates = VersionGates::default();
        assert_eq!(
            gates.since(Feature::RuntimePermissions),
            Some(PlatformVersion(23))
        );
        assert_eq!(gates.since(Feature::MultiWindow), Some(PlatformVersion(24)));
    }

    #[test]
    fn boundary_is_inclusive() {
        let gates = VersionGates::default();
        assert!(!gates.supports(Feature::RuntimePermissions, PlatformVersion(22)));
        assert!(gates.supports(Feature::RuntimePermissions, PlatformVersion(23)));
        assert!(!gates.supports(Feature::MultiWindow, PlatformVersion(23)));
        assert!(gates.supports(Feature::MultiWindow, PlatformVersion(24)));
    }

    #[test]
    fn unknown_feature_is_unsupported() {
        let gates = VersionGates::empty();
        assert!(!gates.supports(Feature::MultiWindow, PlatformVersion(99)));
    }

    #[test]
    fn override_replaces_row_and_keeps_order() {
        let gates =
            VersionGates::default().with_gate(Feature::RuntimePermissions, PlatformVersion(30));
        let rows: Vec<_> = gates.iter().map(|g| (g.feature, g.since.get())).collect();
        assert_eq!(
            rows,
            vec![(Feature::MultiWindow, 24), (Feature::RuntimePermissions, 30)]
        );
    }
}
