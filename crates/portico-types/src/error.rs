//! Error types for Portico.

/// Errors produced at the Portico parsing seams.
///
/// None of these are fatal to page resolution: callers catch them, log,
/// and treat the offending feature as absent.
#[derive(Debug, thiserror::Error)]
pub enum PorticoError {
    #[error("engine ref error: {0}")]
    EngineRef(String),

    #[error("descriptor error: {0}")]
    Descriptor(String),
}

/// Convenience alias.
pub type Result<T> = std::result::Result<T, PorticoError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn engine_ref_error_display() {
        let e = PorticoError::EngineRef("ref too short".into());
        assert_eq!(format!("{e}"), "engine ref error: ref too short");
    }

    #[test]
    fn descriptor_error_display() {
        let e = PorticoError::Descriptor("missing comma".into());
        assert_eq!(format!("{e}"), "descriptor error: missing comma");
    }

    #[test]
    fn error_is_debug() {
        let e = PorticoError::EngineRef("test".into());
        let dbg = format!("{e:?}");
        assert!(dbg.contains("EngineRef"));
    }

    #[test]
    fn result_alias_ok() {
        let r: Result<i32> = Ok(7);
        assert_eq!(r.unwrap(), 7);
    }
}
