use clap::Parser;
use std::path::PathBuf;
use zstd_devtools::io_utils::{devtools_cli_error, read_input};
use zstd_devtools::raw::SAMPLE_BYTES;
use zstd_devtools::{describe, logging, parse_byte_list, parse_hex_string};

/// Print a byte dump as text followed by its length.
#[derive(Parser)]
struct Args {
    /// File holding a byte list like `[0x54, 0x68]` ("-" for stdin)
    #[arg(long, conflicts_with = "hex")]
    input: Option<PathBuf>,
    /// Contiguous hex digits, e.g. 5468697320
    #[arg(long)]
    hex: Option<String>,
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
    let bytes = match (&args.input, &args.hex) {
        (Some(path), _) => {
            let text = read_input(path)?;
            parse_byte_list(&text).map_err(|e| devtools_cli_error("parsing byte list", e))?
        }
        (None, Some(hex)) => {
            parse_hex_string(hex).map_err(|e| devtools_cli_error("parsing hex", e))?
        }
        (None, None) => SAMPLE_BYTES.to_vec(),
    };
    println!("{}", describe(&bytes));
    Ok(())
}
