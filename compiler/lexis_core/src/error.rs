//! Errors reported by the lexer driver.

use std::fmt;

/// No rule matched at `position`, before the end of the input.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[error("no rule matches the input at {position:?} after {recognized} tokens")]
pub struct UnrecognizedInput<P: fmt::Debug> {
    /// Where scanning stopped.
    pub position: P,
    /// Number of tokens produced before stopping.
    pub recognized: usize,
}
