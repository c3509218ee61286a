//! Grammar error reported by the gradient parser.

use std::fmt;

/// Why a gradient string was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GrammarReason {
    /// No gradient matched, or text remained after the last definition.
    InvalidInput,
    /// A function name was not followed by `(`.
    MissingOpenParen,
    /// A function call was never closed.
    MissingCloseParen,
    /// An explicit orientation was not followed by a comma.
    MissingComma,
    /// `at` was not followed by a position.
    MissingPosition,
    /// A color stop did not start with a color.
    ExpectedColor,
    /// A channel inside `rgb()`/`rgba()` is not a number.
    ExpectedNumber,
    /// A list ends with a comma.
    ExtraComma,
}

impl fmt::Display for GrammarReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            GrammarReason::InvalidInput => "Invalid input",
            GrammarReason::MissingOpenParen => "Missing (",
            GrammarReason::MissingCloseParen => "Missing )",
            GrammarReason::MissingComma => "Missing comma before color stops",
            GrammarReason::MissingPosition => "Missing positioning value",
            GrammarReason::ExpectedColor => "Expected color definition",
            GrammarReason::ExpectedNumber => "Expected number",
            GrammarReason::ExtraComma => "One extra comma",
        };
        f.write_str(msg)
    }
}

/// Gradient parsing error.
///
/// Displays as `"<input>: <reason>"`, where `<input>` is the full string given to the parser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GrammarError {
    /// The string that failed to parse.
    pub input: String,
    /// What went wrong.
    pub reason: GrammarReason,
    /// Byte offset into `input` where the failure was detected.
    pub position: usize,
}

impl GrammarError {
    pub(crate) fn new(input: &str, reason: GrammarReason, position: usize) -> Self {
        GrammarError {
            input: input.to_string(),
            reason,
            position,
        }
    }
}

impl fmt::Display for GrammarError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.input, self.reason)
    }
}

impl std::error::Error for GrammarError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_is_input_then_reason() {
        let err = GrammarError::new("#feb47b", GrammarReason::InvalidInput, 0);
        assert_eq!(err.to_string(), "#feb47b: Invalid input");

        let err = GrammarError::new("rgb(1, x)", GrammarReason::ExpectedNumber, 7);
        assert_eq!(err.to_string(), "rgb(1, x): Expected number");
    }
}
