mod real;

#[cfg(test)]
mod mock;

pub use real::RealFileSystem;

#[cfg(test)]
pub use mock::MockFileSystem;

use anyhow::Result;
use async_trait::async_trait;
use std::path::Path;

use crate::models::{EntryStat, Listing, ListingFilter};

#[async_trait]
pub trait FileSystem: Send + Sync {
    /// Immediate children of `dir` that pass `filter`, sorted by name and
    /// capped at `filter.max_entries` while enumerating. `Err` means the
    /// directory itself could not be opened; failures on single children
    /// are carried in `Listing::errors`.
    async fn read_dir(&self, dir: &Path, filter: ListingFilter) -> Result<Listing>;

    /// Status of `path` without following a trailing symlink.
    async fn symlink_metadata(&self, path: &Path) -> Result<EntryStat>;
}
