//! The single error type returned by every fallible operation in the engine.
//!
//! Every error is recoverable (`spec.md` §7): callers never need to match on
//! a variant to decide whether to keep the session alive, only to decide
//! what to report. The REPL (`crate::repl`) is the only place these are
//! ever printed.

use crate::runtime::cell::Cell;

pub type Result<T> = std::result::Result<T, InterpError>;

/// Everything that can go wrong while tokenizing, compiling, or executing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InterpError {
    #[error("stack underflow")]
    StackUnderflow,

    #[error("stack overflow")]
    StackOverflow,

    #[error("return stack underflow")]
    ReturnStackUnderflow,

    #[error("return stack overflow")]
    ReturnStackOverflow,

    #[error("branch stack underflow")]
    BranchStackUnderflow,

    #[error("branch stack overflow")]
    BranchStackOverflow,

    #[error("dictionary is full")]
    DictionaryFull,

    #[error("definition is too long")]
    CodeBufferOverflow,

    #[error("word '{0}' is already defined")]
    DuplicateWord(String),

    #[error("unknown word '{0}'")]
    UnknownWord(String),

    #[error("token truncated to '{0}'")]
    TokenTooLong(String),

    #[error("unterminated string")]
    UnterminatedString,

    #[error("division by zero")]
    DivisionByZero,

    #[error("invalid address {0}")]
    InvalidAddress(Cell),

    #[error("'{0}' can only be used while compiling")]
    ImmediateOnly(&'static str),

    #[error("'{0}' used outside of a definition")]
    CompileOnly(&'static str),

    #[error("unclosed control structure in definition")]
    UnclosedControlStructure,

    #[error("'{0}' has no matching opening word")]
    UnmatchedControlWord(&'static str),

    #[error("allocation failure")]
    AllocationFailure,
}
