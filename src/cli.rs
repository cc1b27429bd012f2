use clap::Parser;
use std::path::PathBuf;

use crate::core::walk::WalkOptions;

#[derive(Parser, Debug)]
#[command(name = "dtree", version)]
#[command(about = "Print a directory tree with box-drawing connectors", long_about = None)]
pub struct Cli {
    /// Directory to print (defaults to current directory)
    #[arg(value_name = "DIRECTORY", default_value = ".")]
    pub path: PathBuf,

    /// Show hidden files (names starting with '.')
    #[arg(short = 'a', long = "all")]
    pub all: bool,

    /// Maximum depth; 0 lists only the directory's immediate children
    #[arg(
        short = 'd',
        long = "depth",
        value_name = "N",
        allow_hyphen_values = true,
        value_parser = parse_depth
    )]
    pub depth: Option<usize>,

    /// Show file sizes
    #[arg(short = 's', long = "size")]
    pub size: bool,
}

impl Cli {
    pub fn walk_options(&self) -> WalkOptions {
        WalkOptions {
            max_depth: self.depth,
            show_hidden: self.all,
            show_size: self.size,
            ..WalkOptions::default()
        }
    }
}

fn parse_depth(raw: &str) -> Result<usize, String> {
    let depth: i64 = raw
        .parse()
        .map_err(|_| format!("'{raw}' is not a number"))?;

    usize::try_from(depth).map_err(|_| "depth must be non-negative".to_owned())
}
