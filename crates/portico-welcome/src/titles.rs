//! Page title templates and token substitution.

use serde::{Deserialize, Serialize};

/// Token replaced with the current version in the new-app title.
pub const TOKEN_APP_VERSION: &str = "APPVERSION";
/// Token replaced with the previous version in the update title.
pub const TOKEN_OLD_VERSION: &str = "OLDVERSION";
/// Token replaced with the current version in the update title.
pub const TOKEN_NEW_VERSION: &str = "NEWVERSION";
/// Token replaced with the previous engine name in the engine-change title.
pub const TOKEN_OLD_ENGINE: &str = "OLDENGINE";
/// Token replaced with the current engine name in the engine-change title.
pub const TOKEN_NEW_ENGINE: &str = "NEWENGINE";

/// Title templates for the four page variants.
///
/// The defaults mirror the copy embedded in the static page; embedders
/// shipping their own page text supply their own strings. Each template
/// has its tokens substituted once, first occurrence only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TitleTemplates {
    pub new: String,
    pub update: String,
    pub change_engine: String,
    pub reset: String,
}

impl Default for TitleTemplates {
    fn default() -> Self {
        Self {
            new: "Welcome to your new app! (version APPVERSION)".to_string(),
            update: "App updated from version OLDVERSION to NEWVERSION".to_string(),
            change_engine: "App engine changed from OLDENGINE to NEWENGINE".to_string(),
            reset: "App settings have been reset".to_string(),
        }
    }
}

/// Substitute one token with its value, first occurrence only.
pub(crate) fn fill(template: &str, token: &str, value: &str) -> String {
    template.replacen(token, value, 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fill_replaces_first_occurrence_only() {
        assert_eq!(fill("X to X", "X", "1.0"), "1.0 to X");
    }

    #[test]
    fn fill_without_token_is_identity() {
        assert_eq!(fill("static title", TOKEN_APP_VERSION, "1.0"), "static title");
    }

    #[test]
    fn default_templates_carry_their_tokens() {
        let t = TitleTemplates::default();
        assert!(t.new.contains(TOKEN_APP_VERSION));
        assert!(t.update.contains(TOKEN_OLD_VERSION));
        assert!(t.update.contains(TOKEN_NEW_VERSION));
        assert!(t.change_engine.contains(TOKEN_OLD_ENGINE));
        assert!(t.change_engine.contains(TOKEN_NEW_ENGINE));
    }
}
