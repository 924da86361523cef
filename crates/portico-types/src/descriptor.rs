//! Extension/app descriptor parsing and sorting.
//!
//! The launcher passes each extension or companion app as one composite
//! string `"<icon>.<ext>,<name>"`. The icon token doubles as the id
//! carrier: stripping its trailing `.<ext>` yields the web-store id.
//! Descriptors that do not fit the shape are dropped with a diagnostic;
//! one bad entry never takes down the rest of the list.

use std::str::FromStr;

use serde::Serialize;

use crate::error::PorticoError;

/// One extension or companion app to list on the page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExtensionEntry {
    /// Web-store identifier (the icon token minus its file extension).
    pub id: String,
    /// Display name; falls back to the id when the descriptor omits it.
    pub name: String,
    /// Icon file token the renderer substitutes into its icon URL template.
    pub icon: String,
}

impl FromStr for ExtensionEntry {
    type Err = PorticoError;

    /// Split at the rightmost comma whose prefix carries an interior dot:
    /// the prefix is the icon token, the part before its last dot is the
    /// id, and the suffix after the comma is the name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        for (pos, _) in s.rmatch_indices(',') {
            let icon = &s[..pos];
            let name = &s[pos + 1..];
            let Some(dot) = icon.rfind('.') else {
                continue;
            };
            // The dot must have an id before it and a file extension after.
            if dot == 0 || dot + 1 == icon.len() {
                continue;
            }
            let id = &icon[..dot];
            return Ok(Self {
                id: id.to_string(),
                name: if name.is_empty() { id } else { name }.to_string(),
                icon: icon.to_string(),
            });
        }
        Err(PorticoError::Descriptor(format!(
            "unparsable descriptor: {s:?}"
        )))
    }
}

/// Parse a batch of raw descriptors into display order.
///
/// Bad entries are logged and skipped. Survivors are sorted ascending by
/// name (code-point order); the sort is stable, so equal names keep their
/// original relative order.
pub fn parse_and_sort<S: AsRef<str>>(raw: &[S]) -> Vec<ExtensionEntry> {
    let mut entries: Vec<ExtensionEntry> = Vec::with_capacity(raw.len());
    for item in raw {
        match item.as_ref().parse() {
            Ok(entry) => entries.push(entry),
            Err(err) => log::warn!("{err}"),
        }
    }
    entries.sort_by(|a, b| a.name.cmp(&b.name));
    entries
}
