use anyhow::{Result, anyhow};
use async_trait::async_trait;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use crate::models::{EntryKind, EntryStat, FsEntry, Listing, ListingBuilder, ListingFilter};

use super::FileSystem;

#[derive(Clone, Debug)]
enum Response<T> {
    Ok(T),
    Err(String),
}

#[derive(Clone, Default)]
pub struct MockFileSystem {
    inner: Arc<Mutex<Inner>>,
}

#[derive(Default)]
struct Inner {
    listings: HashMap<PathBuf, Response<Vec<String>>>,
    stats: HashMap<PathBuf, Response<EntryStat>>,
    entry_errors: HashMap<PathBuf, Vec<String>>,
    calls: Vec<PathBuf>,
}

impl MockFileSystem {
    /// Script the names `read_dir(dir)` yields, in order.
    pub fn set_dir_entries(&self, dir: impl Into<PathBuf>, names: &[&str]) {
        let mut inner = self.inner.lock().expect("mock fs lock");
        let names = names.iter().map(|name| (*name).to_owned()).collect();
        inner.listings.insert(dir.into(), Response::Ok(names));
    }

    pub fn set_error(&self, dir: impl Into<PathBuf>, message: impl Into<String>) {
        let mut inner = self.inner.lock().expect("mock fs lock");
        inner
            .listings
            .insert(dir.into(), Response::Err(message.into()));
    }

    /// Make `read_dir(dir)` also report a failure on one of its children.
    pub fn add_entry_error(&self, dir: impl Into<PathBuf>, message: impl Into<String>) {
        let mut inner = self.inner.lock().expect("mock fs lock");
        inner
            .entry_errors
            .entry(dir.into())
            .or_default()
            .push(message.into());
    }

    pub fn set_stat(&self, path: impl Into<PathBuf>, kind: EntryKind, size: u64) {
        let mut inner = self.inner.lock().expect("mock fs lock");
        inner
            .stats
            .insert(path.into(), Response::Ok(EntryStat { kind, size }));
    }

    pub fn set_stat_error(&self, path: impl Into<PathBuf>, message: impl Into<String>) {
        let mut inner = self.inner.lock().expect("mock fs lock");
        inner.stats.insert(path.into(), Response::Err(message.into()));
    }

    /// A directory with the given children; its own stat is registered too.
    pub fn add_dir(&self, dir: impl Into<PathBuf>, names: &[&str]) {
        let dir = dir.into();
        self.set_stat(dir.clone(), EntryKind::Directory, 4096);
        self.set_dir_entries(dir, names);
    }

    pub fn add_file(&self, path: impl Into<PathBuf>, size: u64) {
        self.set_stat(path, EntryKind::File, size);
    }

    /// Directories passed to `read_dir`, in call order.
    pub fn calls(&self) -> Vec<PathBuf> {
        let inner = self.inner.lock().expect("mock fs lock");
        inner.calls.clone()
    }
}

#[async_trait]
impl FileSystem for MockFileSystem {
    async fn read_dir(&self, dir: &Path, filter: ListingFilter) -> Result<Listing> {
        let mut inner = self.inner.lock().expect("mock fs lock");
        inner.calls.push(dir.to_path_buf());

        let names = match inner.listings.get(dir) {
            Some(Response::Ok(names)) => names,
            Some(Response::Err(message)) => return Err(anyhow!("{message}")),
            None => return Err(anyhow!("no mock response for {}", dir.display())),
        };

        let mut listing = ListingBuilder::new(filter);
        for name in names {
            listing.offer(FsEntry {
                path: dir.join(name),
                name: name.into(),
            });
        }
        for message in inner.entry_errors.get(dir).into_iter().flatten() {
            listing.error(anyhow!("{message}"));
        }
        Ok(listing.finish())
    }

    async fn symlink_metadata(&self, path: &Path) -> Result<EntryStat> {
        let inner = self.inner.lock().expect("mock fs lock");

        match inner.stats.get(path) {
            Some(Response::Ok(stat)) => Ok(*stat),
            Some(Response::Err(message)) => Err(anyhow!("{message}")),
            None => Err(anyhow!("no mock stat for {}", path.display())),
        }
    }
}
