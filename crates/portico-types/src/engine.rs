//! Known browser engines and engine-ref parsing.
//!
//! The wrapper can run on a small closed set of Chromium-family browsers.
//! The registry maps each known bundle id to its display metadata; it is
//! built once on first use and never mutated. An engine ref arriving in
//! the query has the shape `<kind><sep><bundleId>` where the kind token is
//! exactly 8 bytes (`internal` or `external`) and the bundle id starts at
//! byte 9, one separator byte past the token.

use std::collections::HashMap;
use std::str::FromStr;
use std::sync::OnceLock;

use serde::Serialize;

use crate::error::PorticoError;

/// Width of the kind token at the front of an engine ref.
const KIND_LEN: usize = 8;

/// Byte offset of the bundle id: the kind token plus one separator byte.
const BUNDLE_OFFSET: usize = KIND_LEN + 1;

/// Whether the engine is bundled inside the app or an independently
/// installed browser.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EngineKind {
    Internal,
    External,
}

/// A structurally valid engine ref, not yet resolved against the registry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineRef {
    pub kind: EngineKind,
    pub bundle_id: String,
}

impl FromStr for EngineRef {
    type Err = PorticoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let kind_token = s
            .get(..KIND_LEN)
            .ok_or_else(|| PorticoError::EngineRef(format!("ref too short: {s:?}")))?;
        let bundle_id = s
            .get(BUNDLE_OFFSET..)
            .filter(|id| !id.is_empty())
            .ok_or_else(|| PorticoError::EngineRef(format!("missing bundle id: {s:?}")))?;
        // Anything other than the internal token hosts the engine externally.
        let kind = if kind_token == "internal" {
            EngineKind::Internal
        } else {
            EngineKind::External
        };
        Ok(Self {
            kind,
            bundle_id: bundle_id.to_string(),
        })
    }
}

/// Display metadata for a resolved engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EngineInfo {
    /// Bundle id, e.g. `com.google.Chrome`.
    pub id: String,
    pub kind: EngineKind,
    /// Short name used in running text, e.g. `Chrome`.
    pub bundle_name: &'static str,
    /// Full product name used in titles, e.g. `Google Chrome`.
    pub display_name: &'static str,
}

impl EngineInfo {
    /// Resolve a raw engine ref against the registry.
    ///
    /// Malformed refs and unknown bundle ids log a diagnostic and yield
    /// `None`; callers treat the engine as not present.
    pub fn lookup(raw: &str) -> Option<Self> {
        let engine_ref = match raw.parse::<EngineRef>() {
            Ok(r) => r,
            Err(err) => {
                log::warn!("{err}");
                return None;
            }
        };
        match registry().get(engine_ref.bundle_id.as_str()) {
            Some(&(bundle_name, display_name)) => Some(Self {
                id: engine_ref.bundle_id,
                kind: engine_ref.kind,
                bundle_name,
                display_name,
            }),
            None => {
                log::warn!("unknown engine bundle id: {}", engine_ref.bundle_id);
                None
            }
        }
    }
}

/// (bundle id, short name, product name) for every compatible browser.
const KNOWN_ENGINES: &[(&str, &str, &str)] = &[
    ("com.microsoft.edgemac", "Edge", "Microsoft Edge"),
    ("com.vivaldi.Vivaldi", "Vivaldi", "Vivaldi"),
    ("com.operasoftware.Opera", "Opera", "Opera"),
    ("com.brave.Browser", "Brave", "Brave Browser"),
    ("org.chromium.Chromium", "Chromium", "Chromium"),
    ("com.google.Chrome", "Chrome", "Google Chrome"),
];

fn registry() -> &'static HashMap<&'static str, (&'static str, &'static str)> {
    static REGISTRY: OnceLock<HashMap<&'static str, (&'static str, &'static str)>> =
        OnceLock::new();
    REGISTRY.get_or_init(|| {
        KNOWN_ENGINES
            .iter()
            .map(|&(id, bundle, display)| (id, (bundle, display)))
            .collect()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn internal_ref_resolves() {
        let info = EngineInfo::lookup("internal:com.google.Chrome").unwrap();
        assert_eq!(info.kind, EngineKind::Internal);
        assert_eq!(info.id, "com.google.Chrome");
        assert_eq!(info.bundle_name, "Chrome");
        assert_eq!(info.display_name, "Google Chrome");
    }

    #[test]
    fn external_ref_resolves() {
        let info = EngineInfo::lookup("external:com.brave.Browser").unwrap();
        assert_eq!(info.kind, EngineKind::External);
        assert_eq!(info.bundle_name, "Brave");
        assert_eq!(info.display_name, "Brave Browser");
    }

    #[test]
    fn every_registry_entry_resolves() {
        for &(id, bundle, _) in KNOWN_ENGINES {
            let raw = format!("internal:{id}");
            let info = EngineInfo::lookup(&raw).unwrap();
            assert_eq!(info.id, id);
            assert_eq!(info.bundle_name, bundle);
        }
    }

    #[test]
    fn unknown_bundle_id_is_absent() {
        assert!(EngineInfo::lookup("internal:com.example.Unknown").is_none());
    }

    #[test]
    fn unknown_kind_token_is_external() {
        // Only the literal internal token means bundled; everything else
        // is treated as an externally hosted engine.
        let r: EngineRef = "whatever:com.google.Chrome".parse().unwrap();
        assert_eq!(r.kind, EngineKind::External);
    }

    #[test]
    fn separator_byte_is_skipped_not_inspected() {
        // Byte 8 is dropped regardless of what it is.
        let r: EngineRef = "internal/com.google.Chrome".parse().unwrap();
        assert_eq!(r.bundle_id, "com.google.Chrome");
    }

    #[test]
    fn short_refs_fail() {
        assert!("".parse::<EngineRef>().is_err());
        assert!("internal".parse::<EngineRef>().is_err());
        assert!("internal:".parse::<EngineRef>().is_err());
    }

    #[test]
    fn non_boundary_offsets_fail_gracefully() {
        // Multibyte char straddling the slice offsets must not panic.
        assert!(EngineInfo::lookup("intern\u{e9}\u{e9}com.google.Chrome").is_none());
    }

    #[test]
    fn lookup_is_case_sensitive() {
        assert!(EngineInfo::lookup("internal:com.google.chrome").is_none());
    }

    mod prop {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn lookup_never_panics(raw in ".*") {
                let _ = EngineInfo::lookup(&raw);
            }

            #[test]
            fn resolved_refs_echo_their_bundle_id(
                sep in proptest::char::range(' ', '~'),
            ) {
                let raw = format!("internal{sep}com.google.Chrome");
                let info = EngineInfo::lookup(&raw).unwrap();
                prop_assert_eq!(info.id.as_str(), "com.google.Chrome");
            }
        }
    }
}
