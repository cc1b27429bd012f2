use std::ffi::OsStr;
use std::io::{self, Write};
use std::path::Path;

use crate::core::walk::WalkOptions;
use crate::models::DirEntry;

const FILL_BLANK: &[u8] = "    ".as_bytes();
const FILL_VERTICAL: &[u8] = "│   ".as_bytes();
const TEE: &[u8] = "├── ".as_bytes();
const CORNER: &[u8] = "└── ".as_bytes();

const UNITS: [&str; 5] = ["B", "KB", "MB", "GB", "TB"];

/// Write the unadorned root line.
pub fn write_root<W: Write>(writer: &mut W, root: &Path) -> io::Result<()> {
    writeln!(writer, "{}", root.display())
}

/// Write one tree line for `entry`.
///
/// `ancestors[i]` is true when the enclosing directory at depth `i` was the
/// last of its siblings; those levels get blank filler instead of a vertical
/// bar. `is_last` picks the corner connector over the tee.
pub fn write_entry<W: Write>(
    writer: &mut W,
    ancestors: &[bool],
    is_last: bool,
    entry: &DirEntry,
    options: &WalkOptions,
) -> io::Result<()> {
    for &ancestor_is_last in ancestors {
        if ancestor_is_last {
            writer.write_all(FILL_BLANK)?;
        } else {
            writer.write_all(FILL_VERTICAL)?;
        }
    }

    if is_last {
        writer.write_all(CORNER)?;
    } else {
        writer.write_all(TEE)?;
    }

    if options.show_size && !entry.is_dir() {
        write!(writer, "[{}] ", format_size(entry.size))?;
    }

    write_name(writer, &entry.name)?;

    if entry.is_dir() {
        writer.write_all(b"/")?;
    }

    writer.write_all(b"\n")
}

/// File names go out byte for byte, even when they are not UTF-8.
#[cfg(unix)]
fn write_name<W: Write>(writer: &mut W, name: &OsStr) -> io::Result<()> {
    use std::os::unix::ffi::OsStrExt;

    writer.write_all(name.as_bytes())
}

#[cfg(not(unix))]
fn write_name<W: Write>(writer: &mut W, name: &OsStr) -> io::Result<()> {
    writer.write_all(name.to_string_lossy().as_bytes())
}

/// Human-readable byte count: whole bytes below 1 KB, otherwise one decimal
/// in the largest unit up to TB.
pub fn format_size(size: u64) -> String {
    let mut value = size as f64;
    let mut unit = 0;

    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }

    if unit == 0 {
        format!("{size} B")
    } else {
        format!("{value:.1} {}", UNITS[unit])
    }
}
