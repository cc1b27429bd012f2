use std::io::{self, BufWriter};
use std::process::ExitCode;

use clap::Parser;
use env_logger::Env;

use dtree::cli::Cli;
use dtree::fs::RealFileSystem;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let options = cli.walk_options();

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    let mut diag = io::stderr();

    match dtree::print_tree(&RealFileSystem, &cli.path, &options, &mut out, &mut diag).await {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("dtree: {err:#}");
            ExitCode::from(1)
        }
    }
}
