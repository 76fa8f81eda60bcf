use std::path::PathBuf;

/// Corpus directory used when none is given on the command line.
pub const DEFAULT_CORPUS_DIR: &str = "./tests/corpus";

/// Environment variable overriding [`DEFAULT_CORPUS_DIR`].
pub const CORPUS_DIR_ENV: &str = "CORPUS_DIR";

/// Runtime configuration for the corpus lister.
#[derive(Debug, Clone)]
pub struct ListerConfig {
    /// Directory whose direct regular-file children are listed.
    pub directory: PathBuf,
    /// Sort paths before joining instead of keeping enumeration order.
    pub sorted: bool,
}

impl Default for ListerConfig {
    fn default() -> Self {
        Self {
            directory: PathBuf::from(DEFAULT_CORPUS_DIR),
            sorted: false,
        }
    }
}

/// How the formatter treats states and baselines that need more than two hex
/// digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HexWidth {
    /// Grow the field (`0x100`).
    #[default]
    Widen,
    /// Reject the row as malformed.
    Strict,
}

/// Runtime configuration for the table formatter.
#[derive(Debug, Clone, Default)]
pub struct FormatterConfig {
    /// Emit a `State,Sym,BL,NB` line before the rows.
    pub header: bool,
    pub hex_width: HexWidth,
}
