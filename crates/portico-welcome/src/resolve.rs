//! The view-state resolver: every decision the page makes.
//!
//! Pure and total: any [`PageInput`] produces a renderable [`ViewState`].
//! The primary variant is chosen by fixed precedence (update > engine
//! change > reset > new); rules that lose the variant race still
//! contribute their badges.

use portico_types::engine::EngineInfo;

use crate::params::{BookmarkCode, PageInput, RuntimeCode};
use crate::titles::{self, TitleTemplates, fill};
use crate::view::{
    AlertExtra, BookmarkStatus, ChangeBadge, ExtListVariant, PageVariant, PasswordPrompt,
    RuntimeAction, ViewState,
};

/// Name substituted into the engine-change title when the current engine
/// ref did not resolve.
const UNKNOWN_ENGINE: &str = "unknown engine";

/// Resolve the view state using the built-in title templates.
pub fn resolve(input: &PageInput) -> ViewState {
    resolve_with(input, &TitleTemplates::default())
}

/// Resolve the view state with caller-supplied title templates.
pub fn resolve_with(input: &PageInput, templates: &TitleTemplates) -> ViewState {
    let mut variant = None;
    let mut title = None;
    let mut changes = Vec::new();
    let mut alert_extras = Vec::new();
    let mut password_prompt = None;

    // 1. Update: old version present, even when empty.
    if let Some(old_version) = &input.old_version {
        variant = Some(PageVariant::Update);
        title = Some(fill(
            &fill(&templates.update, titles::TOKEN_OLD_VERSION, old_version),
            titles::TOKEN_NEW_VERSION,
            &input.version,
        ));
        changes.push(ChangeBadge::Update);
        alert_extras.push(AlertExtra::Update);
    }

    // 2. Engine change: the badge and password prompt apply even when the
    // update rule already took the variant.
    let engine_changed = input.old_engine.is_some();
    if let Some(old_engine) = &input.old_engine {
        if variant.is_none() {
            variant = Some(PageVariant::ChangeEngine);
            title = Some(fill(
                &fill(
                    &templates.change_engine,
                    titles::TOKEN_OLD_ENGINE,
                    old_engine.display_name,
                ),
                titles::TOKEN_NEW_ENGINE,
                display_name(input.engine.as_ref()),
            ));
        }
        changes.push(ChangeBadge::ChangeEngine);
        password_prompt = Some(PasswordPrompt::ChangeEngine);
    }

    // 3. Reset: password prompt only if the engine change didn't claim it.
    if input.reset {
        if variant.is_none() {
            variant = Some(PageVariant::Reset);
            title = Some(templates.reset.clone());
        }
        changes.push(ChangeBadge::Reset);
        if password_prompt.is_none() {
            password_prompt = Some(PasswordPrompt::Reset);
        }
    }

    // 4. Nothing matched: a new app.
    let variant = variant.unwrap_or(PageVariant::New);
    let title = title
        .unwrap_or_else(|| fill(&templates.new, titles::TOKEN_APP_VERSION, &input.version));

    // Bookmark codes 1/2 only badge the change list; 3/4/5 get their own
    // status line.
    let bookmark_status = match input.bookmark_code {
        Some(BookmarkCode::Added) => {
            changes.push(ChangeBadge::BookmarkAdd);
            None
        }
        Some(BookmarkCode::New) => {
            changes.push(ChangeBadge::BookmarkNew);
            None
        }
        Some(BookmarkCode::Failed) => Some(BookmarkStatus::Failed),
        Some(BookmarkCode::Deleted) => Some(BookmarkStatus::Deleted),
        Some(BookmarkCode::Error) => Some(BookmarkStatus::Error),
        None => None,
    };

    // Runtime action: explicit code wins; otherwise a reset implies a
    // runtime reset, and the default is a fresh install.
    let runtime_action = match input.runtime_code {
        Some(RuntimeCode::Update) => {
            alert_extras.push(AlertExtra::UpdateRuntime);
            RuntimeAction::Update
        }
        Some(RuntimeCode::ChangeEngine) => RuntimeAction::ChangeEngine,
        Some(RuntimeCode::UpdateFailed) => {
            alert_extras.push(AlertExtra::UpdateRuntime);
            RuntimeAction::UpdateFailed
        }
        None if input.reset => RuntimeAction::Reset,
        None => RuntimeAction::Install,
    };

    // Extension list: only when something survived parsing.
    let has_extensions = !input.extensions.is_empty();
    let has_apps = !input.apps.is_empty();
    let ext_list = if has_extensions || has_apps {
        if input.newly_installed {
            Some(ExtListVariant::New)
        } else {
            alert_extras.push(AlertExtra::ExtReinstall);
            Some(if engine_changed {
                ExtListVariant::ReinstallChangeEngine
            } else if input.old_version.is_some() {
                ExtListVariant::ReinstallUpdate
            } else {
                ExtListVariant::ReinstallFallback
            })
        }
    } else {
        None
    };

    ViewState {
        variant,
        title,
        version: input.version.clone(),
        old_version: input.old_version.clone(),
        engine: input.engine.clone(),
        old_engine: input.old_engine.clone(),
        changes,
        alert_extras,
        runtime_action,
        password_prompt,
        ext_list,
        bookmark_status,
        extensions: input.extensions.clone(),
        apps: input.apps.clone(),
        has_extensions,
        has_apps,
        has_both: has_extensions && has_apps,
        show_alert: input.show_alert,
    }
}

fn display_name(engine: Option<&EngineInfo>) -> &str {
    engine.map_or(UNKNOWN_ENGINE, |e| e.display_name)
}
