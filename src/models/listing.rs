use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::ffi::OsStr;

use super::FsEntry;

/// Which children a directory listing keeps.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ListingFilter {
    pub show_hidden: bool,
    /// Children kept per directory; the rest are counted, not stored.
    pub max_entries: usize,
}

impl ListingFilter {
    /// Self/parent pseudo-entries never pass; dotfiles only with `show_hidden`.
    pub fn admits(&self, name: &OsStr) -> bool {
        if name == "." || name == ".." {
            return false;
        }

        self.show_hidden || name.as_encoded_bytes().first() != Some(&b'.')
    }
}

/// The admitted children of one directory, sorted by name.
#[derive(Debug)]
pub struct Listing {
    pub entries: Vec<FsEntry>,
    /// Admitted children dropped by the cap.
    pub skipped: usize,
    /// Failures while enumerating individual children.
    pub errors: Vec<anyhow::Error>,
}

/// Accumulates a listing one child at a time, holding at most
/// `max_entries` of them: the smallest names seen so far.
pub struct ListingBuilder {
    filter: ListingFilter,
    kept: BinaryHeap<ByName>,
    skipped: usize,
    errors: Vec<anyhow::Error>,
}

impl ListingBuilder {
    pub fn new(filter: ListingFilter) -> Self {
        Self {
            filter,
            kept: BinaryHeap::new(),
            skipped: 0,
            errors: Vec::new(),
        }
    }

    pub fn offer(&mut self, entry: FsEntry) {
        if !self.filter.admits(&entry.name) {
            return;
        }

        if self.kept.len() < self.filter.max_entries {
            self.kept.push(ByName(entry));
            return;
        }

        self.skipped += 1;
        if let Some(mut largest) = self.kept.peek_mut()
            && entry.name < largest.0.name
        {
            *largest = ByName(entry);
        }
    }

    pub fn error(&mut self, err: anyhow::Error) {
        self.errors.push(err);
    }

    /// Entries currently held.
    pub fn held(&self) -> usize {
        self.kept.len()
    }

    pub fn finish(self) -> Listing {
        Listing {
            entries: self
                .kept
                .into_sorted_vec()
                .into_iter()
                .map(|kept| kept.0)
                .collect(),
            skipped: self.skipped,
            errors: self.errors,
        }
    }
}

struct ByName(FsEntry);

impl PartialEq for ByName {
    fn eq(&self, other: &Self) -> bool {
        self.0.name == other.0.name
    }
}

impl Eq for ByName {}

impl PartialOrd for ByName {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ByName {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.name.cmp(&other.0.name)
    }
}
