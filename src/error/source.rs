//! Source parsing errors

use super::HostwireError;

/// Creates a parse failed error; `line` and `column` are one-based
pub fn parse_failed(path: impl Into<String>, line: usize, column: usize) -> HostwireError {
    HostwireError::SourceParseFailed {
        path: path.into(),
        line,
        column,
    }
}

/// Creates a parser unavailable error
pub fn parser_unavailable(reason: impl Into<String>) -> HostwireError {
    HostwireError::ParserUnavailable {
        reason: reason.into(),
    }
}
