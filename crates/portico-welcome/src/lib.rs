//! First-run page state engine for Portico apps.
//!
//! Everything the first-run / status page shows is derived here, from the
//! query parameters the launcher passes in: which page variant is active,
//! the window title, which change and alert badges appear, and the sorted
//! extension/app lists. The whole computation is synchronous and pure;
//! the resulting [`ViewState`] is renderer-agnostic, and applying it to
//! actual markup is the embedder's job.

pub mod params;
pub mod resolve;
pub mod titles;
pub mod view;

pub use params::PageInput;
pub use resolve::{resolve, resolve_with};
pub use titles::TitleTemplates;
pub use view::ViewState;
