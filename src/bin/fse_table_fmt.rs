use clap::Parser;
use std::path::PathBuf;
use zstd_devtools::io_utils::{devtools_cli_error, read_input};
use zstd_devtools::table::{check_width, OFFSET_CODE_TABLE};
use zstd_devtools::{format_table, logging, parse_table, rows_to_json};
use zstd_devtools::{FormatterConfig, HexWidth};

/// Rewrite `state symbol bits baseline` rows as `0xSS,sN,0xBB,N` lines.
#[derive(Parser)]
struct Args {
    /// Table file to read ("-" for stdin). Defaults to the predefined
    /// offset-code table
    #[arg(long)]
    input: Option<PathBuf>,
    /// Print a `State,Sym,BL,NB` header line first
    #[arg(long)]
    header: bool,
    /// Fail on states or baselines above 0xff instead of widening them
    #[arg(long)]
    strict: bool,
    /// Print rows as a JSON array
    #[arg(long, conflicts_with = "header")]
    json: bool,
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
    let text = match &args.input {
        Some(path) => read_input(path)?,
        None => OFFSET_CODE_TABLE.to_string(),
    };

    let rows = parse_table(&text).map_err(|e| devtools_cli_error("parsing table", e))?;
    let config = FormatterConfig {
        header: args.header,
        hex_width: if args.strict {
            HexWidth::Strict
        } else {
            HexWidth::Widen
        },
    };

    // Render everything first so a bad row leaves stdout empty.
    let out = if args.json {
        check_width(&rows, config.hex_width)
            .map_err(|e| devtools_cli_error("formatting table", e))?;
        let mut json = rows_to_json(&rows).map_err(|e| devtools_cli_error("rendering JSON", e))?;
        json.push('\n');
        json
    } else {
        format_table(&rows, &config).map_err(|e| devtools_cli_error("formatting table", e))?
    };
    print!("{out}");
    Ok(())
}
