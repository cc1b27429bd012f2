use std::ffi::OsString;
use std::path::PathBuf;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum EntryKind {
    Directory,
    File,
    Symlink,
    Other,
}

/// A child as yielded by a directory listing, before any status query.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FsEntry {
    pub path: PathBuf,
    pub name: OsString,
}

/// Link-status of a path: symlinks are reported as such, never followed.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct EntryStat {
    pub kind: EntryKind,
    pub size: u64,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DirEntry {
    /// Raw file name; not necessarily UTF-8.
    pub name: OsString,
    pub kind: EntryKind,
    pub size: u64,
}

impl DirEntry {
    pub fn new(name: impl Into<OsString>, stat: EntryStat) -> Self {
        Self {
            name: name.into(),
            kind: stat.kind,
            size: stat.size,
        }
    }

    pub fn is_dir(&self) -> bool {
        self.kind == EntryKind::Directory
    }
}
