use std::io::Write;
use std::path::Path;

use log::{debug, warn};

use crate::core::render;
use crate::fs::FileSystem;
use crate::models::{AncestorFlags, DirEntry, Listing, ListingFilter};

/// Entries listed per directory before the rest are skipped.
pub const DEFAULT_MAX_ENTRIES: usize = 1024;

/// Directory nesting below which the walker refuses to descend.
pub const DEFAULT_MAX_NESTING: usize = 4096;

/// Configuration options for directory traversal.
#[derive(Debug, Clone)]
pub struct WalkOptions {
    /// Deepest level whose directories are still listed (None means unlimited).
    /// The root's children are level 0.
    pub max_depth: Option<usize>,
    /// Whether to show hidden files (starting with '.')
    pub show_hidden: bool,
    /// Whether to prefix files with their human-readable size
    pub show_size: bool,
    /// Per-directory cap; entries past it are skipped with a warning
    pub max_entries: usize,
    /// Hard ceiling on recursion, independent of `max_depth`
    pub max_nesting: usize,
}

impl Default for WalkOptions {
    fn default() -> Self {
        Self {
            max_depth: None,
            show_hidden: false,
            show_size: false,
            max_entries: DEFAULT_MAX_ENTRIES,
            max_nesting: DEFAULT_MAX_NESTING,
        }
    }
}

impl WalkOptions {
    pub fn listing_filter(&self) -> ListingFilter {
        ListingFilter {
            show_hidden: self.show_hidden,
            max_entries: self.max_entries,
        }
    }
}

/// Counts gathered over one traversal.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct WalkSummary {
    pub directories: usize,
    pub files: usize,
    pub diagnostics: usize,
    /// Entries left out because their directory exceeded `max_entries`.
    pub truncated: usize,
}

/// Walk `dir` depth-first, writing one line per entry to `out` and one
/// diagnostic per unreadable directory or entry to `diag`.
///
/// Filesystem failures never abort the walk; only a failed write to `out` or
/// `diag` is returned as an error.
pub async fn walk_dir<F, W, E>(
    fs: &F,
    dir: &Path,
    options: &WalkOptions,
    out: &mut W,
    diag: &mut E,
) -> anyhow::Result<WalkSummary>
where
    F: FileSystem,
    W: Write,
    E: Write,
{
    let mut walker = Walker::new(fs, options, out, diag);
    walker.visit(dir).await?;
    Ok(walker.summary)
}

/// Like [`walk_dir`], starting from a listing of `dir` the caller already
/// read with `options.listing_filter()`.
pub async fn walk_listing<F, W, E>(
    fs: &F,
    dir: &Path,
    listing: Listing,
    options: &WalkOptions,
    out: &mut W,
    diag: &mut E,
) -> anyhow::Result<WalkSummary>
where
    F: FileSystem,
    W: Write,
    E: Write,
{
    let mut walker = Walker::new(fs, options, out, diag);
    walker.render_listing(dir, listing).await?;
    Ok(walker.summary)
}

struct Walker<'a, F, W, E> {
    fs: &'a F,
    options: &'a WalkOptions,
    out: &'a mut W,
    diag: &'a mut E,
    ancestors: AncestorFlags,
    summary: WalkSummary,
}

impl<'a, F, W, E> Walker<'a, F, W, E>
where
    F: FileSystem,
    W: Write,
    E: Write,
{
    fn new(fs: &'a F, options: &'a WalkOptions, out: &'a mut W, diag: &'a mut E) -> Self {
        Self {
            fs,
            options,
            out,
            diag,
            ancestors: AncestorFlags::default(),
            summary: WalkSummary::default(),
        }
    }

    /// List `dir`, whose children sit at the current ancestor depth.
    async fn visit(&mut self, dir: &Path) -> anyhow::Result<()> {
        let depth = self.ancestors.depth();

        if let Some(max) = self.options.max_depth
            && depth > max
        {
            debug!("pruned {} at depth {depth}", dir.display());
            return Ok(());
        }

        if depth >= self.options.max_nesting {
            let message = format!(
                "nesting limit of {} reached at '{}'",
                self.options.max_nesting,
                dir.display()
            );
            return self.diagnostic(message);
        }

        let listing = match self.fs.read_dir(dir, self.options.listing_filter()).await {
            Ok(listing) => listing,
            Err(err) => {
                let message = format!("cannot open directory '{}': {err:#}", dir.display());
                return self.diagnostic(message);
            }
        };

        self.render_listing(dir, listing).await
    }

    async fn render_listing(&mut self, dir: &Path, listing: Listing) -> anyhow::Result<()> {
        debug!("visiting {} ({} entries)", dir.display(), listing.entries.len());

        for err in listing.errors {
            self.diagnostic(format!("cannot read entry in '{}': {err:#}", dir.display()))?;
        }

        if listing.skipped > 0 {
            warn!(
                "{} has more than {} entries; skipped {}",
                dir.display(),
                self.options.max_entries,
                listing.skipped
            );
            self.summary.truncated += listing.skipped;
        }

        let count = listing.entries.len();
        for (index, entry) in listing.entries.into_iter().enumerate() {
            let is_last = index + 1 == count;

            let stat = match self.fs.symlink_metadata(&entry.path).await {
                Ok(stat) => stat,
                Err(err) => {
                    let message = format!(
                        "cannot read metadata for '{}': {err:#}",
                        entry.path.display()
                    );
                    self.diagnostic(message)?;
                    continue;
                }
            };

            let node = DirEntry::new(entry.name, stat);
            render::write_entry(
                &mut *self.out,
                self.ancestors.as_slice(),
                is_last,
                &node,
                self.options,
            )?;

            if node.is_dir() {
                self.summary.directories += 1;
                self.ancestors.push(is_last);
                let result = Box::pin(self.visit(&entry.path)).await;
                self.ancestors.pop();
                result?;
            } else {
                self.summary.files += 1;
            }
        }

        Ok(())
    }

    fn diagnostic(&mut self, message: String) -> anyhow::Result<()> {
        self.summary.diagnostics += 1;
        debug!("diagnostic: {message}");
        writeln!(self.diag, "dtree: {message}")?;
        Ok(())
    }
}
