//! Typed page input decoded from the launch query parameters.
//!
//! Recognized keys:
//!
//! | key  | meaning                                        |
//! |------|------------------------------------------------|
//! | `v`  | current app version                            |
//! | `ov` | old version (presence means an update happened) |
//! | `e`  | current engine ref                             |
//! | `oe` | old engine ref (presence means engine changed)  |
//! | `r`  | `1` = settings were reset                      |
//! | `rt` | runtime-extension action code, 1-3             |
//! | `b`  | bookmark operation result code, 1-5            |
//! | `x`  | extension descriptor, repeatable               |
//! | `a`  | companion-app descriptor, repeatable           |
//! | `xi` | non-empty = extensions are newly installed     |
//! | `m`  | `1` = show the attention alert                 |
//!
//! Decoding is total: anything malformed or unrecognized degrades to an
//! absent feature or a default, never an error.

use portico_types::descriptor::{self, ExtensionEntry};
use portico_types::engine::EngineInfo;
use portico_types::query::QueryParams;

/// Runtime-extension action requested explicitly via the `rt` code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuntimeCode {
    Update,
    ChangeEngine,
    UpdateFailed,
}

impl RuntimeCode {
    fn from_code(raw: &str) -> Option<Self> {
        match raw.parse::<u8>().ok()? {
            1 => Some(Self::Update),
            2 => Some(Self::ChangeEngine),
            3 => Some(Self::UpdateFailed),
            _ => None,
        }
    }
}

/// Bookmark operation result carried in the `b` code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookmarkCode {
    /// Bookmark added silently; only a change badge is shown.
    Added,
    /// New bookmark folder created silently; only a change badge is shown.
    New,
    /// The add failed; shown as a status line.
    Failed,
    /// The bookmark was deleted; shown as a status line.
    Deleted,
    /// Unexpected error; shown as a status line.
    Error,
}

impl BookmarkCode {
    // Exact string match: non-canonical spellings like `01` are not codes.
    fn from_code(raw: &str) -> Option<Self> {
        match raw {
            "1" => Some(Self::Added),
            "2" => Some(Self::New),
            "3" => Some(Self::Failed),
            "4" => Some(Self::Deleted),
            "5" => Some(Self::Error),
            _ => None,
        }
    }
}

/// Immutable input record for one page resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageInput {
    /// Current version, already resolved against the caller's fallback.
    pub version: String,
    /// Old version; presence alone signals an update, even when empty.
    pub old_version: Option<String>,
    /// Current engine, if the ref resolved.
    pub engine: Option<EngineInfo>,
    /// Engine in use before this launch, if the ref resolved.
    pub old_engine: Option<EngineInfo>,
    /// Settings were reset.
    pub reset: bool,
    /// Explicit runtime-extension action, if a valid code was given.
    pub runtime_code: Option<RuntimeCode>,
    /// Bookmark operation result, if a valid code was given.
    pub bookmark_code: Option<BookmarkCode>,
    /// Listed extensions are newly installed rather than pending reinstall.
    pub newly_installed: bool,
    /// Show the attention alert.
    pub show_alert: bool,
    /// Extensions to list, sorted by name.
    pub extensions: Vec<ExtensionEntry>,
    /// Companion apps to list, sorted by name.
    pub apps: Vec<ExtensionEntry>,
}

impl PageInput {
    /// Build the page input from decoded query parameters.
    ///
    /// Never fails. `fallback_version` is the version string already
    /// present in the static page, used when the query omits `v`.
    pub fn from_query(query: &QueryParams, fallback_version: &str) -> Self {
        let version = query
            .get("v")
            .filter(|v| !v.is_empty())
            .unwrap_or(fallback_version)
            .to_string();

        Self {
            version,
            old_version: query.get("ov").map(str::to_string),
            engine: query
                .get("e")
                .filter(|r| !r.is_empty())
                .and_then(EngineInfo::lookup),
            old_engine: query
                .get("oe")
                .filter(|r| !r.is_empty())
                .and_then(EngineInfo::lookup),
            reset: query.get("r") == Some("1"),
            runtime_code: query.get("rt").and_then(RuntimeCode::from_code),
            bookmark_code: query.get("b").and_then(BookmarkCode::from_code),
            newly_installed: query.get("xi").is_some_and(|v| !v.is_empty()),
            show_alert: query.get("m") == Some("1"),
            extensions: descriptor::parse_and_sort(&query.get_all("x")),
            apps: descriptor::parse_and_sort(&query.get_all("a")),
        }
    }
}
