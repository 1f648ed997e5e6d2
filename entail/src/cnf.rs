//! Conversion to conjunctive normal form.
//!
//! The conversion is a pipeline of three stages, each of which
//! is a pure function from formulas to equivalent formulas:
//! implications are eliminated, negations are pushed to the symbols, and
//! finally conjunctions are distributed over disjunctions.

use crate::change::{self, Step};
use crate::expr::{Expr, OpA};
use alloc::vec::Vec;
use log::debug;

const UNFOLDS: [Step<Expr>; 2] = [Expr::unfold_impl, Expr::unfold_iff];

/// Convert a formula to an equivalent conjunction of disjunctions of literals.
pub fn to_cnf(fm: Expr) -> Expr {
    let fm = eliminate_implications(fm);
    debug!("without implications: {}", fm);
    let fm = move_not_inwards(fm);
    debug!("nnf: {}", fm);
    let fm = distribute_and_over_or(fm);
    debug!("cnf: {}", fm);
    fm
}

/// Replace `a ⇒ b` by `¬a ∨ b` and `a ⇔ b` by `(¬a ∨ b) ∧ (¬b ∨ a)`.
pub fn eliminate_implications(fm: Expr) -> Expr {
    fm.fix(&|fm| change::fold(fm, &UNFOLDS))
}

/// Push negations down to the symbols.
///
/// Requires a formula without implications.
pub fn move_not_inwards(fm: Expr) -> Expr {
    match fm {
        Expr::Neg(a) => match *a {
            Expr::Neg(b) => move_not_inwards(*b),
            Expr::BinA(op, fms) => {
                let fms = fms.into_iter().map(|fm| move_not_inwards(-fm));
                rebuild(-op, fms.collect())
            }
            a => -a.map_form(move_not_inwards),
        },
        fm => fm.map_form(move_not_inwards),
    }
}

/// Rewrite `(a ∧ b) ∨ c` to `(a ∨ c) ∧ (b ∨ c)` until
/// no disjunction has a conjunction as operand.
///
/// Requires a formula in negation normal form.
pub fn distribute_and_over_or(fm: Expr) -> Expr {
    match fm {
        Expr::BinA(OpA::Disj, fms) => {
            let mut fms = dissociate(OpA::Disj, fms);
            if fms.len() == 1 {
                return distribute_and_over_or(fms.remove(0));
            }

            let mut conj = None;
            let mut others = Vec::with_capacity(fms.len());
            for fm in fms {
                match fm {
                    Expr::BinA(OpA::Conj, cs) if conj.is_none() && !cs.is_empty() => {
                        conj = Some(cs)
                    }
                    fm => others.push(fm),
                }
            }
            match conj {
                None => Expr::BinA(OpA::Disj, others),
                Some(cs) => {
                    let rest = associate(OpA::Disj, others);
                    let cs = cs.into_iter().map(|c| {
                        let disj = Expr::BinA(OpA::Disj, Vec::from([c, rest.clone()]));
                        distribute_and_over_or(disj)
                    });
                    associate(OpA::Conj, cs.collect())
                }
            }
        }
        Expr::BinA(OpA::Conj, fms) => {
            let fms = fms.into_iter().map(distribute_and_over_or);
            rebuild(OpA::Conj, fms.collect())
        }
        fm => fm,
    }
}

/// Return the operands connected with `op`, promoting nested occurrences of `op`.
///
/// ~~~
/// use entail::cnf::dissociate;
/// use entail::{Expr, OpA};
/// let (a, b, c) = (Expr::symbol("a"), Expr::symbol("b"), Expr::symbol("c"));
/// let ab = Expr::BinA(OpA::Conj, vec![a.clone(), b.clone()]);
/// let flat = dissociate(OpA::Conj, vec![ab, c.clone() | a.clone()]);
/// assert_eq!(flat, vec![a.clone(), b, c | a]);
/// ~~~
pub fn dissociate(op: OpA, fms: impl IntoIterator<Item = Expr>) -> Vec<Expr> {
    fn collect(op: OpA, fms: impl IntoIterator<Item = Expr>, acc: &mut Vec<Expr>) {
        for fm in fms {
            match fm {
                Expr::BinA(o, sub) if o == op => collect(op, sub, acc),
                fm => acc.push(fm),
            }
        }
    }
    let mut acc = Vec::new();
    collect(op, fms, &mut acc);
    acc
}

/// Connect formulas with `op`, flattening nested occurrences of `op`.
///
/// A single operand is returned as is.
/// Passing no operands is a programming error.
pub fn associate(op: OpA, fms: Vec<Expr>) -> Expr {
    let mut fms = dissociate(op, fms);
    match fms.len() {
        0 => panic!("{} of no operands", op),
        1 => fms.remove(0),
        _ => Expr::BinA(op, fms),
    }
}

/// Like `associate`, but yield ⊤ or ⊥ for no operands.
fn rebuild(op: OpA, fms: Vec<Expr>) -> Expr {
    let fms = dissociate(op, fms);
    if fms.is_empty() {
        Expr::BinA(op, fms)
    } else {
        associate(op, fms)
    }
}

fn flatten(op: OpA, fm: &Expr) -> Vec<&Expr> {
    fn collect<'a>(op: OpA, fm: &'a Expr, acc: &mut Vec<&'a Expr>) {
        match fm {
            Expr::BinA(o, fms) if *o == op => fms.iter().for_each(|fm| collect(op, fm, acc)),
            fm => acc.push(fm),
        }
    }
    let mut acc = Vec::new();
    collect(op, fm, &mut acc);
    acc
}

/// Return the conjuncts of a formula, or the formula itself if it is no conjunction.
pub fn conjuncts(fm: &Expr) -> Vec<&Expr> {
    flatten(OpA::Conj, fm)
}

/// Return the disjuncts of a formula, or the formula itself if it is no disjunction.
pub fn disjuncts(fm: &Expr) -> Vec<&Expr> {
    flatten(OpA::Disj, fm)
}

/// Clauses of the CNF of a formula.
pub fn clauses(fm: &Expr) -> Vec<Expr> {
    let cnf = to_cnf(fm.clone());
    conjuncts(&cnf).into_iter().cloned().collect()
}

/// Return true iff the formula is a conjunction of disjunctions of literals.
pub fn is_cnf(fm: &Expr) -> bool {
    let lits = |cl: &Expr| disjuncts(cl).into_iter().all(|l| l.is_literal());
    conjuncts(fm).into_iter().all(lits)
}
