//! Resolved view state handed to the renderer.
//!
//! Each enum here corresponds to one exclusive group on the page: the
//! renderer shows the element matching the active variant and hides the
//! rest of the group. Numbering of the visible action items is left to
//! the renderer, since it depends on final visibility.

use portico_types::descriptor::ExtensionEntry;
use portico_types::engine::EngineInfo;
use serde::Serialize;

/// Primary page variant. Exactly one is ever active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PageVariant {
    New,
    Update,
    ChangeEngine,
    Reset,
}

/// "What changed" badges listed under the heading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ChangeBadge {
    Update,
    ChangeEngine,
    Reset,
    BookmarkAdd,
    BookmarkNew,
}

/// Extra lines appended to the attention alert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AlertExtra {
    Update,
    UpdateRuntime,
    ExtReinstall,
}

/// Which runtime-extension action item to show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RuntimeAction {
    Install,
    Update,
    ChangeEngine,
    UpdateFailed,
    Reset,
}

/// Which password-prompt action item to show, if any.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PasswordPrompt {
    ChangeEngine,
    Reset,
}

/// Which heading the extension list gets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ExtListVariant {
    /// Extensions were just installed for the first time.
    New,
    /// Reinstall required because the engine changed.
    ReinstallChangeEngine,
    /// Reinstall required after an update.
    ReinstallUpdate,
    /// Reinstall required, no more specific cause known.
    ReinstallFallback,
}

/// Renderable bookmark status line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BookmarkStatus {
    Failed,
    Deleted,
    Error,
}

/// Fully resolved, renderer-agnostic description of the page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ViewState {
    pub variant: PageVariant,
    pub title: String,
    /// Resolved current version, for the `version_cur` slots.
    pub version: String,
    /// Old version, for the `version_old` slots.
    pub old_version: Option<String>,
    /// Current engine, for the engine name/type slots.
    pub engine: Option<EngineInfo>,
    /// Previous engine, for the old-engine name/type slots.
    pub old_engine: Option<EngineInfo>,
    /// Change badges, in accumulation order.
    pub changes: Vec<ChangeBadge>,
    /// Alert extras, in accumulation order. Always computed; rendered
    /// only when `show_alert` is set.
    pub alert_extras: Vec<AlertExtra>,
    pub runtime_action: RuntimeAction,
    pub password_prompt: Option<PasswordPrompt>,
    pub ext_list: Option<ExtListVariant>,
    pub bookmark_status: Option<BookmarkStatus>,
    /// Extensions to render, sorted by name.
    pub extensions: Vec<ExtensionEntry>,
    /// Companion apps to render, sorted by name.
    pub apps: Vec<ExtensionEntry>,
    pub has_extensions: bool,
    pub has_apps: bool,
    pub has_both: bool,
    pub show_alert: bool,
}
