//! Entailment by truth table enumeration.

use crate::{pl_true, Expr, Model, Symbol};
use alloc::vec::Vec;
use log::{debug, info};

/// Decide whether `kb` entails `query` by checking all total assignments.
///
/// Return the decision together with
/// the number of enumerated models in which both `kb` and `query` hold.
/// Enumeration stops at the first model of `kb` that falsifies `query`.
///
/// ~~~
/// use entail::{tt::tt_entails, Expr};
/// let (p, q) = (Expr::symbol("P"), Expr::symbol("Q"));
/// assert_eq!(tt_entails(&(p.clone() | q.clone()), &q), (false, 1));
/// assert_eq!(tt_entails(&(p.clone() & q.clone()), &q), (true, 1));
/// ~~~
pub fn tt_entails(kb: &Expr, query: &Expr) -> (bool, usize) {
    let mut symbols = kb.get_symbols();
    symbols.extend(query.get_symbols());
    let symbols: Vec<_> = symbols.into_iter().collect();
    info!("enumerating models over {} symbols", symbols.len());

    let mut count = 0;
    let entailed = check_all(kb, query, &symbols, &Model::new(), &mut count);
    info!("{} models of knowledge base and query", count);
    (entailed, count)
}

fn check_all(
    kb: &Expr,
    query: &Expr,
    symbols: &[Symbol],
    model: &Model,
    count: &mut usize,
) -> bool {
    match symbols.split_first() {
        None => {
            if pl_true(kb, model) == Some(true) {
                let holds = pl_true(query, model) == Some(true);
                if holds {
                    *count += 1
                } else {
                    debug!("counter-model: {}", model)
                }
                holds
            } else {
                true
            }
        }
        Some((p, rest)) => {
            check_all(kb, query, rest, &model.extend(p.clone(), true), count)
                && check_all(kb, query, rest, &model.extend(p.clone(), false), count)
        }
    }
}
