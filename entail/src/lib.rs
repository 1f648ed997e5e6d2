//! Propositional entailment.
//!
//! This crate decides whether a knowledge base of propositional formulas
//! entails a query, using one of four methods:
//! truth table enumeration, forward chaining, backward chaining, and DPLL.
//! Forward and backward chaining only accept knowledge bases of definite clauses.
//!
//! ~~~
//! use entail::{parse::parse_all, Evidence, Method};
//! let kb = parse_all(["p2 => p3", "p3 => p1", "p2 & p1 & p3 => d", "p2"]).unwrap();
//! let query = "d".parse().unwrap();
//! let verdict = Method::Bc.entails(&kb, &query).unwrap();
//! assert!(verdict.entailed);
//! let Evidence::Derived(derived) = verdict.evidence else { panic!() };
//! assert_eq!(derived.last().unwrap().name(), "d");
//! ~~~
#![no_std]
#![forbid(unsafe_code)]

extern crate alloc;

pub mod bc;
pub mod change;
pub mod cnf;
pub mod dpll;
mod error;
mod eval;
pub mod expr;
pub mod fc;
mod infix;
mod kb;
mod method;
mod model;
#[cfg(feature = "parse")]
pub mod parse;
mod symbol;
pub mod tt;

pub use error::{Error, Result};
pub use eval::pl_true;
pub use expr::{Connective, Expr, Op, OpA};
pub use infix::Infix;
pub use kb::{is_definite_clause, DefiniteClause, KnowledgeBase};
pub use method::{Evidence, Method, Verdict};
pub use model::Model;
pub use symbol::{is_symbol, Symbol};

use alloc::vec::Vec;

/// Remove duplicates, keeping the first occurrence of each element.
fn keep_first<T: Eq>(v: impl Iterator<Item = T>) -> Vec<T> {
    let mut result = Vec::new();
    for x in v {
        if result.iter().all(|y| x != *y) {
            result.push(x)
        }
    }
    result
}
