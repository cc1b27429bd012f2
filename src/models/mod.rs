mod ancestors;
mod entry;
mod listing;

pub use ancestors::AncestorFlags;
pub use entry::{DirEntry, EntryKind, EntryStat, FsEntry};
pub use listing::{Listing, ListingBuilder, ListingFilter};
