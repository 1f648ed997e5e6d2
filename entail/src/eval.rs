//! Three-valued evaluation of formulas in partial models.

use crate::expr::{Expr, Op, OpA};
use crate::Model;

/// Evaluate a formula in a partial model.
///
/// Return `None` if the truth value depends on unassigned symbols.
/// Disjunctions and conjunctions are decided as soon as one operand decides them,
/// so `a ∨ b` is true in a model where only `a` is assigned true.
///
/// ~~~
/// use entail::{pl_true, Expr, Model, Symbol};
/// let (a, b) = (Expr::symbol("a"), Expr::symbol("b"));
/// let m = Model::new().extend(Symbol::new("a"), true);
/// assert_eq!(pl_true(&(a.clone() | b.clone()), &m), Some(true));
/// assert_eq!(pl_true(&(a & b), &m), None);
/// ~~~
pub fn pl_true(fm: &Expr, model: &Model) -> Option<bool> {
    use Expr::*;
    match fm {
        Sym(s) => model.get(s),
        Neg(fm) => pl_true(fm, model).map(|v| !v),
        BinA(op, fms) => {
            // a conjunction is decided by a false operand, a disjunction by a true one
            let decisive = *op == OpA::Disj;
            let mut result = Some(!decisive);
            for fm in fms {
                match pl_true(fm, model) {
                    Some(v) if v == decisive => return Some(decisive),
                    Some(_) => (),
                    None => result = None,
                }
            }
            result
        }
        Bin(l, Op::Impl, r) => match (pl_true(l, model), pl_true(r, model)) {
            (Some(false), _) | (_, Some(true)) => Some(true),
            (Some(true), Some(false)) => Some(false),
            _ => None,
        },
        Bin(l, Op::Iff, r) => {
            let l = pl_true(l, model)?;
            let r = pl_true(r, model)?;
            Some(l == r)
        }
    }
}
