//! Diagnostic bookkeeping of a single translation job.
//!
//! A [`MoveTracker`] is created fresh for every job and handed back by the
//! translator once the job is done. It records, per configured file, which
//! entry names were read from sources and which names in destinations were
//! overwritten ("moved") or left alone ("unmoved"). File contents never
//! depend on it.

use std::{
    collections::{BTreeMap, BTreeSet},
    fmt::{Display, Formatter},
};

use crate::types::WriteOutcome;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct FileActivity {
    read: BTreeSet<String>,
    moved: BTreeSet<String>,
    unmoved: BTreeSet<String>,
}

/// Moved / unmoved names per file for one translation job.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MoveTracker {
    files: BTreeMap<String, FileActivity>,
}

impl MoveTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the names read from a source file.
    pub fn record_read<'n>(&mut self, file: &str, names: impl IntoIterator<Item = &'n str>) {
        let activity = self.files.entry(file.to_string()).or_default();
        activity.read.extend(names.into_iter().map(str::to_string));
    }

    /// Records what a destination write did.
    ///
    /// A name that was moved anywhere in the file is never reported as
    /// unmoved for that file.
    pub fn record_write(&mut self, file: &str, outcome: &WriteOutcome) {
        let activity = self.files.entry(file.to_string()).or_default();
        activity.moved.extend(outcome.moved.iter().cloned());
        activity.unmoved.extend(outcome.unmoved.iter().cloned());
        let FileActivity { moved, unmoved, .. } = activity;
        unmoved.retain(|name| !moved.contains(name));
    }

    pub fn read(&self, file: &str) -> Option<&BTreeSet<String>> {
        self.files.get(file).map(|a| &a.read)
    }

    pub fn moved(&self, file: &str) -> Option<&BTreeSet<String>> {
        self.files.get(file).map(|a| &a.moved)
    }

    pub fn unmoved(&self, file: &str) -> Option<&BTreeSet<String>> {
        self.files.get(file).map(|a| &a.unmoved)
    }

    fn write_group(
        &self,
        f: &mut Formatter<'_>,
        title: &str,
        select: impl Fn(&FileActivity) -> &BTreeSet<String>,
    ) -> std::fmt::Result {
        writeln!(f, "{}", title)?;
        for (file, activity) in &self.files {
            let names = select(activity);
            if names.is_empty() {
                continue;
            }
            writeln!(f, "\t{}", file)?;
            for name in names {
                writeln!(f, "\t\t{}", name)?;
            }
        }
        Ok(())
    }
}

/// Renders a human readable report grouped by file.
impl Display for MoveTracker {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        self.write_group(f, "Read Data:", |a| &a.read)?;
        self.write_group(f, "Unmoved Data:", |a| &a.unmoved)?;
        self.write_group(f, "Moved Data:", |a| &a.moved)
    }
}
