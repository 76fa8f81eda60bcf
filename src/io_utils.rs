use std::fmt;
use std::io::{self, Read};
use std::path::Path;

#[derive(Debug)]
pub struct CliError {
    pub msg: String,
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.msg.fmt(f)
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_deref()
            .map(|e| e as &(dyn std::error::Error + 'static))
    }
}

/// Format a user friendly I/O error message with suggestions.
pub fn format_io_error(operation: &str, path: &Path, err: &io::Error) -> String {
    use io::ErrorKind::*;
    let suggestion = match err.kind() {
        NotFound => "Check that the file exists and the path is correct.",
        PermissionDenied => "Check permissions or run as a different user.",
        InvalidData => "Input must be UTF-8 text.",
        _ => "Check the path and try again.",
    };
    format!(
        "Error {} '{}': {}. {}",
        operation,
        path.display(),
        err,
        suggestion
    )
}

/// Convert an I/O error into a CLI error with context.
pub fn io_cli_error(operation: &str, path: &Path, err: io::Error) -> CliError {
    CliError {
        msg: format_io_error(operation, path, &err),
        source: Some(Box::new(err)),
    }
}

/// Convert a library error into a CLI error with a hint.
pub fn devtools_cli_error(context: &str, err: crate::DevtoolsError) -> CliError {
    CliError {
        msg: format!("{}: {}", context, cli_hint(&err)),
        source: Some(Box::new(err)),
    }
}

/// Return an actionable hint for a library error variant.
pub fn cli_hint(err: &crate::DevtoolsError) -> String {
    use crate::DevtoolsError::*;
    match err {
        NotFound(path) => format!(
            "directory '{}' not found. Pass a directory or set {}.",
            path.display(),
            crate::config::CORPUS_DIR_ENV
        ),
        AccessDenied(path) => format!(
            "cannot read '{}'. Check permissions or run as a different user.",
            path.display()
        ),
        MalformedRow { line, reason } => {
            format!("line {line}: {reason}. Each row needs four non-negative integers.")
        }
        MalformedByte { index, token } => {
            format!("byte #{index} ({token:?}) is not a value in 0..=255.")
        }
        Json(e) => format!("{e}"),
        Csv(e) => format!("{e}"),
        Io(e) => format!("{e}"),
    }
}

/// Read a text input: `-` means stdin, anything else is a file path.
pub fn read_input(path: &Path) -> Result<String, CliError> {
    if path == Path::new("-") {
        let mut text = String::new();
        io::stdin()
            .read_to_string(&mut text)
            .map_err(|e| io_cli_error("reading", path, e))?;
        return Ok(text);
    }
    std::fs::read_to_string(path).map_err(|e| io_cli_error("reading input file", path, e))
}
