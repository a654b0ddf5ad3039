//! Core, format-agnostic types for xdst.
//! Codecs decode into these; writers consume them.

use std::fmt::Display;

/// A single localized string resource: a name (key) and its content.
///
/// Two entries describe the same resource when their names are equal;
/// the content plays no part in identity.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Entry {
    pub name: String,
    pub content: String,
}

impl Entry {
    pub fn new(name: impl Into<String>, content: impl Into<String>) -> Self {
        Entry {
            name: name.into(),
            content: content.into(),
        }
    }
}

impl Display for Entry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "\"{}\" = \"{}\"", self.name, self.content)
    }
}

/// Entries in first-seen order, as read from one file or produced by a merge.
pub type Mapping = Vec<Entry>;

/// What a destination write did to the names it saw.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct WriteOutcome {
    /// Names whose content was overwritten, or that were appended as new entries.
    pub moved: Vec<String>,
    /// Names present in the destination that no mapping entry matched.
    pub unmoved: Vec<String>,
}

impl WriteOutcome {
    pub(crate) fn record_moved(&mut self, name: &str) {
        self.moved.push(name.to_string());
    }

    pub(crate) fn record_unmoved(&mut self, name: &str) {
        self.unmoved.push(name.to_string());
    }
}
