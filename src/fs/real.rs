use anyhow::Result;
use async_trait::async_trait;
use std::fs::FileType;
use std::path::Path;
use tokio::task;

use crate::models::{EntryKind, EntryStat, FsEntry, Listing, ListingBuilder, ListingFilter};

use super::FileSystem;

pub struct RealFileSystem;

#[async_trait]
impl FileSystem for RealFileSystem {
    async fn read_dir(&self, dir: &Path, filter: ListingFilter) -> Result<Listing> {
        let dir = dir.to_path_buf();
        task::spawn_blocking(move || {
            let mut listing = ListingBuilder::new(filter);
            for entry in std::fs::read_dir(&dir)? {
                match entry {
                    Ok(entry) => listing.offer(FsEntry {
                        path: entry.path(),
                        name: entry.file_name(),
                    }),
                    Err(err) => listing.error(err.into()),
                }
            }
            Ok(listing.finish())
        })
        .await?
    }

    async fn symlink_metadata(&self, path: &Path) -> Result<EntryStat> {
        let metadata = tokio::fs::symlink_metadata(path).await?;
        Ok(EntryStat {
            kind: entry_kind(metadata.file_type()),
            size: metadata.len(),
        })
    }
}

fn entry_kind(file_type: FileType) -> EntryKind {
    if file_type.is_symlink() {
        EntryKind::Symlink
    } else if file_type.is_dir() {
        EntryKind::Directory
    } else if file_type.is_file() {
        EntryKind::File
    } else {
        EntryKind::Other
    }
}
