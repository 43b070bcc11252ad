//! License profiles.
//!
//! PowerFactory exposes its optional simulation modules as boolean fields
//! on the current-user record. The mapping from a stable CLI feature key to
//! the external field name lives in one declarative table ([`FEATURES`]);
//! profiles are validated against it when built, so a typo fails before any
//! session is opened.

pub mod apply;
pub mod ping;

pub use apply::apply_profile;
pub use ping::{Pinger, StaticPing, SystemPing};

use crate::error::{PflaunchError, Result};

/// Field cleared before every profile application.
///
/// The external application refuses engine-mode flag changes while the
/// advanced-check field is set from a previous interactive run.
pub const CHECK_ADVANCE_FIELD: &str = "check_adv";

/// One licensable simulation module.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeatureDef {
    /// Stable CLI key.
    pub key: &'static str,
    /// Human-readable label (the original selection dialog's wording).
    pub label: &'static str,
    /// Boolean field name on the external user record.
    pub field: &'static str,
}

/// The full feature table. Fixed, not configurable.
pub const FEATURES: &[FeatureDef] = &[
    FeatureDef { key: "power-quality", label: "Power Quality", field: "harm" },
    FeatureDef { key: "contingency", label: "Contingency Analysis", field: "contingency" },
    FeatureDef { key: "quasi-dynamic", label: "Quasi-Dynamic Simulation", field: "qdynsim" },
    FeatureDef { key: "scripting", label: "Scripting and Automation", field: "script" },
    FeatureDef { key: "stability", label: "Stability Analysis", field: "stab" },
    FeatureDef { key: "small-signal", label: "Small Signal Stability", field: "smallsig" },
    FeatureDef { key: "network-reduction", label: "Network Reduction", field: "netred" },
    FeatureDef { key: "parameter-identification", label: "System Parameter Identification", field: "paramid" },
    FeatureDef { key: "protection", label: "Overcurrent Protection", field: "prot" },
    FeatureDef { key: "arc-flash", label: "Arc-Flash Analysis", field: "arcflash" },
    FeatureDef { key: "techno-economic", label: "Techno-Economical Analysis", field: "tececo" },
];

/// Look up a feature definition by CLI key.
pub fn feature_by_key(key: &str) -> Option<&'static FeatureDef> {
    FEATURES.iter().find(|f| f.key == key)
}

/// All valid feature keys, for error messages and prompts.
pub fn feature_keys() -> Vec<String> {
    FEATURES.iter().map(|f| f.key.to_string()).collect()
}

/// A validated set of enabled license features.
///
/// Applying a profile assigns `true` to the selected features' fields and
/// `false` to the rest, so a launch always reflects exactly the selection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LicenseProfile {
    enabled: Vec<&'static FeatureDef>,
}

impl LicenseProfile {
    /// Build a profile from CLI feature keys, validating each against the table.
    pub fn from_keys<S: AsRef<str>>(keys: &[S]) -> Result<Self> {
        let mut enabled = Vec::new();
        for key in keys {
            let def = feature_by_key(key.as_ref()).ok_or_else(|| PflaunchError::UnknownFeature {
                key: key.as_ref().to_string(),
                valid: feature_keys(),
            })?;
            if !enabled.contains(&def) {
                enabled.push(def);
            }
        }
        Ok(Self { enabled })
    }

    /// Profile with every feature enabled.
    pub fn all() -> Self {
        Self {
            enabled: FEATURES.iter().collect(),
        }
    }

    /// Whether no feature is enabled.
    pub fn is_empty(&self) -> bool {
        self.enabled.is_empty()
    }

    /// Enabled feature keys, in selection order.
    pub fn keys(&self) -> Vec<&'static str> {
        self.enabled.iter().map(|f| f.key).collect()
    }

    /// The full assignment list: every known field with its target value.
    pub fn assignments(&self) -> Vec<(&'static str, bool)> {
        FEATURES
            .iter()
            .map(|f| (f.field, self.enabled.contains(&f)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_keys_are_unique() {
        for (i, a) in FEATURES.iter().enumerate() {
            for b in &FEATURES[i + 1..] {
                assert_ne!(a.key, b.key);
                assert_ne!(a.field, b.field);
            }
        }
    }

    #[test]
    fn profile_from_valid_keys() {
        let profile = LicenseProfile::from_keys(&["power-quality", "arc-flash"]).unwrap();
        assert_eq!(profile.keys(), vec!["power-quality", "arc-flash"]);
    }

    #[test]
    fn profile_deduplicates_keys() {
        let profile = LicenseProfile::from_keys(&["protection", "protection"]).unwrap();
        assert_eq!(profile.keys(), vec!["protection"]);
    }

    #[test]
    fn unknown_key_is_rejected_with_valid_list() {
        let err = LicenseProfile::from_keys(&["fusion"]).unwrap_err();
        match err {
            PflaunchError::UnknownFeature { key, valid } => {
                assert_eq!(key, "fusion");
                assert_eq!(valid.len(), FEATURES.len());
            }
            other => panic!("expected UnknownFeature, got {other:?}"),
        }
    }

    #[test]
    fn assignments_cover_every_field() {
        let profile = LicenseProfile::from_keys(&["power-quality"]).unwrap();
        let assignments = profile.assignments();

        assert_eq!(assignments.len(), FEATURES.len());
        assert!(assignments.contains(&("harm", true)));
        assert!(assignments.contains(&("prot", false)));
        assert!(assignments.contains(&("tececo", false)));
    }

    #[test]
    fn all_profile_enables_everything() {
        let assignments = LicenseProfile::all().assignments();
        assert!(assignments.iter().all(|(_, enabled)| *enabled));
    }

    #[test]
    fn empty_profile() {
        let profile = LicenseProfile::default();
        assert!(profile.is_empty());
        assert!(profile.assignments().iter().all(|(_, enabled)| !enabled));
    }

    #[test]
    fn feature_lookup_by_key() {
        assert_eq!(feature_by_key("power-quality").unwrap().field, "harm");
        assert!(feature_by_key("nonexistent").is_none());
    }
}
