//! Two-step construction of binary formulas.
//!
//! Applying a connective to a left operand yields a pending value,
//! which becomes a formula only once a right operand is supplied:
//!
//! ~~~
//! use entail::{Connective, Expr};
//! let (a, b) = (Expr::symbol("a"), Expr::symbol("b"));
//! let ab = (a.clone() | Connective::Implies | b.clone()).unwrap();
//! assert_eq!(ab, Expr::imp(a, b));
//! ~~~

use crate::{Connective, Error, Expr, Result};
use alloc::{format, vec::Vec};
use core::ops::BitOr;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Infix {
    Complete(Expr),
    /// connective waiting for its right operand
    Pending(Connective, Expr),
}

impl Infix {
    /// Apply a connective to a complete left operand.
    pub fn apply(self, op: Connective) -> Result<Self> {
        match self {
            Self::Complete(l) => Ok(Self::Pending(op, l)),
            Self::Pending(pending, l) => Err(Error::MalformedFormula(format!(
                "{} applied to {} still waiting for an operand of {}",
                op, l, pending
            ))),
        }
    }

    /// Supply the right operand of a pending connective.
    pub fn complete(self, r: Expr) -> Result<Self> {
        match self {
            Self::Pending(Connective::Not, l) => Err(Error::MalformedFormula(format!(
                "negation is unary, but {} was given right operand {}",
                l, r
            ))),
            Self::Pending(op, l) => Expr::compound(op, Vec::from([l, r])).map(Self::Complete),
            Self::Complete(l) => Err(Error::MalformedFormula(format!(
                "operand {} follows {} without connective",
                r, l
            ))),
        }
    }

    pub fn finish(self) -> Result<Expr> {
        match self {
            Self::Complete(fm) => Ok(fm),
            Self::Pending(op, l) => Err(Error::MalformedFormula(format!(
                "{} {} lacks its right operand",
                l, op
            ))),
        }
    }
}

impl From<Expr> for Infix {
    fn from(fm: Expr) -> Self {
        Self::Complete(fm)
    }
}

impl BitOr<Connective> for Expr {
    type Output = Infix;
    fn bitor(self, op: Connective) -> Infix {
        Infix::Pending(op, self)
    }
}

impl BitOr<Expr> for Infix {
    type Output = Result<Expr>;
    fn bitor(self, r: Expr) -> Result<Expr> {
        self.complete(r)?.finish()
    }
}
