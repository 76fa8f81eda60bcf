//! Helpers used while developing the zstd decoder: fuzz corpus listing, FSE
//! table reformatting and byte dump decoding.

pub mod config;
pub mod corpus;
mod error;
pub mod io_utils;
pub mod logging;
pub mod raw;
pub mod table;

pub use config::{FormatterConfig, HexWidth, ListerConfig};
pub use corpus::{corpus_csv, join_paths, list_files};
pub use error::{DevtoolsError, Result};
pub use raw::{decode_text, describe, parse_byte_list, parse_hex_string};
pub use table::{format_row, format_table, parse_row, parse_table, rows_to_json, TableRow};
