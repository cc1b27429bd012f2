pub mod cli;
pub mod core;
pub mod fs;
pub mod models;

use std::io::Write;
use std::path::Path;

use anyhow::Context;

use crate::core::render::write_root;
use crate::core::walk::{WalkOptions, WalkSummary, walk_listing};
use crate::fs::FileSystem;

/// Print `root` followed by its tree.
///
/// The root must open as a directory; otherwise nothing is written and the
/// error is returned. Problems below the root become diagnostics on `diag`.
pub async fn print_tree<F, W, E>(
    fs: &F,
    root: &Path,
    options: &WalkOptions,
    out: &mut W,
    diag: &mut E,
) -> anyhow::Result<WalkSummary>
where
    F: FileSystem,
    W: Write,
    E: Write,
{
    let listing = fs
        .read_dir(root, options.listing_filter())
        .await
        .with_context(|| format!("cannot open directory '{}'", root.display()))?;

    write_root(out, root)?;
    let summary = walk_listing(fs, root, listing, options, out, diag).await?;
    out.flush()?;

    log::info!(
        "{} directories, {} files, {} diagnostics, {} entries over the cap",
        summary.directories,
        summary.files,
        summary.diagnostics,
        summary.truncated
    );
    Ok(summary)
}
