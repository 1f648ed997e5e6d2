use alloc::string::String;
use core::fmt::{self, Display};

/// Errors caused by bad input to the reasoning core.
///
/// Violated internal invariants are not represented here;
/// they indicate programming faults and panic instead.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Error {
    /// unknown connective, wrong arity, or unparsable formula text
    MalformedFormula(String),
    /// knowledge base member at `index` is not a definite clause
    MalformedKnowledgeBase { index: usize, clause: String },
    /// inference method outside of {tt, fc, bc, dpll}
    InvalidAlgorithmSelection(String),
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MalformedFormula(msg) => write!(f, "malformed formula: {}", msg),
            Self::MalformedKnowledgeBase { index, clause } => write!(
                f,
                "malformed knowledge base: clause {} {} is not a definite clause",
                index, clause
            ),
            Self::InvalidAlgorithmSelection(m) => {
                write!(f, "invalid method {:?}, expected one of tt, fc, bc, dpll", m)
            }
        }
    }
}

impl core::error::Error for Error {}

pub type Result<T> = core::result::Result<T, Error>;
