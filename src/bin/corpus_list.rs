use clap::Parser;
use std::path::PathBuf;
use zstd_devtools::config::{ListerConfig, CORPUS_DIR_ENV, DEFAULT_CORPUS_DIR};
use zstd_devtools::io_utils::devtools_cli_error;
use zstd_devtools::{corpus_csv, logging};

/// Print the regular files of a fuzz corpus directory as one comma separated line.
#[derive(Parser)]
struct Args {
    /// Corpus directory to list
    #[arg(env = CORPUS_DIR_ENV, default_value = DEFAULT_CORPUS_DIR)]
    dir: PathBuf,
    /// Sort the paths instead of keeping directory order
    #[arg(long)]
    sorted: bool,
}

fn main() {
    logging::init();
    if let Err(e) = run() {
        eprintln!("{e}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    let config = ListerConfig {
        directory: args.dir,
        sorted: args.sorted,
    };
    let line = corpus_csv(&config).map_err(|e| devtools_cli_error("listing corpus", e))?;
    println!("{line}");
    Ok(())
}
