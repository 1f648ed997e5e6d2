//! Entailment by refutation with the DPLL satisfiability search.

use crate::cnf::{self, disjuncts};
use crate::{pl_true, Expr, Model, Symbol};
use alloc::vec::Vec;
use hashbrown::HashMap;
use log::{debug, info};

/// Decide whether `kb` entails `query` by showing that `kb ∧ ¬query` is unsatisfiable.
///
/// If the query is not entailed, also return a model of `kb ∧ ¬query`.
///
/// ~~~
/// use entail::{dpll::dpll_entails, Expr, Model, Symbol};
/// let a = Expr::symbol("A");
/// let witness = Model::new().extend(Symbol::new("A"), true);
/// assert_eq!(dpll_entails(&a, &-a.clone()), (false, Some(witness)));
/// assert_eq!(dpll_entails(&a, &a), (true, None));
/// ~~~
pub fn dpll_entails(kb: &Expr, query: &Expr) -> (bool, Option<Model>) {
    let refutation = kb.clone() & -query.clone();
    let model = dpll_satisfiable(&refutation);
    (model.is_none(), model)
}

/// Return a model of the formula if there is one.
pub fn dpll_satisfiable(fm: &Expr) -> Option<Model> {
    let symbols: Vec<_> = fm.get_symbols().into_iter().collect();
    let clauses = cnf::clauses(fm);
    let (n_clauses, n_symbols) = (clauses.len(), symbols.len());
    info!("searching model of {} clauses over {} symbols", n_clauses, n_symbols);
    let model = dpll(&clauses, &symbols, &Model::new());
    match &model {
        Some(m) => info!("satisfiable: {}", m),
        None => info!("unsatisfiable"),
    }
    model
}

/// Extend a partial model to a model of all clauses.
///
/// Every symbol that is unassigned in `model` and
/// occurs in `clauses` must be contained in `symbols`.
pub fn dpll(clauses: &[Expr], symbols: &[Symbol], model: &Model) -> Option<Model> {
    let mut unknown = Vec::new();
    for clause in clauses {
        match pl_true(clause, model) {
            Some(false) => return None,
            Some(true) => (),
            None => unknown.push(clause),
        }
    }
    if unknown.is_empty() {
        return Some(model.clone());
    }

    let forced = find_pure_symbol(symbols, &unknown)
        .map(|(p, value)| ("pure symbol", p, value))
        .or_else(|| find_unit_clause(&unknown, model).map(|(p, value)| ("unit clause", p, value)));
    if let Some((reason, p, value)) = forced {
        debug!("{}: {} = {}", reason, p, value);
        let rest: Vec<_> = symbols.iter().filter(|s| *s != p).cloned().collect();
        return dpll(clauses, &rest, &model.extend(p.clone(), value));
    }

    let (p, rest) = match symbols.split_first() {
        Some(split) => split,
        None => panic!("undetermined clauses, but no symbols left in {}", model),
    };
    debug!("branch on {}", p);
    dpll(clauses, rest, &model.extend(p.clone(), true))
        .or_else(|| dpll(clauses, rest, &model.extend(p.clone(), false)))
}

/// Find the first symbol that occurs with only one polarity in the clauses.
///
/// Return the symbol and its polarity.
pub fn find_pure_symbol<'s>(
    symbols: &'s [Symbol],
    clauses: &[&Expr],
) -> Option<(&'s Symbol, bool)> {
    // polarities in which every symbol occurs
    let mut polarities: HashMap<&Symbol, (bool, bool)> = HashMap::new();
    let lits = clauses.iter().flat_map(|cl| disjuncts(cl)).filter_map(|l| l.literal());
    for (s, positive) in lits {
        let (pos, neg) = polarities.entry(s).or_default();
        *pos |= positive;
        *neg |= !positive;
    }
    symbols.iter().find_map(|s| match polarities.get(s) {
        Some((pos, neg)) if pos != neg => Some((s, *pos)),
        _ => None,
    })
}

/// Find a clause in which all literals but one are false in the model.
///
/// Return the symbol of the remaining literal and
/// the value that makes the literal true.
pub fn find_unit_clause<'c>(clauses: &[&'c Expr], model: &Model) -> Option<(&'c Symbol, bool)> {
    clauses.iter().copied().find_map(|cl| unit_clause_assign(cl, model))
}

fn unit_clause_assign<'c>(clause: &'c Expr, model: &Model) -> Option<(&'c Symbol, bool)> {
    let mut unit = None;
    for lit in disjuncts(clause) {
        let (s, positive) = lit.literal()?;
        match (model.get(s), unit) {
            // the clause is already true
            (Some(value), _) if value == positive => return None,
            (Some(_), _) => (),
            (None, None) => unit = Some((s, positive)),
            (None, Some((u, u_positive))) if u == s && u_positive == positive => (),
            (None, Some(_)) => return None,
        }
    }
    unit
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(name: &str) -> Expr {
        Expr::symbol(name)
    }

    fn sym(name: &str) -> Symbol {
        Symbol::new(name)
    }

    #[test]
    fn pure_symbol() {
        let (c1, c2) = (at("A") | -at("B"), -at("B") | -at("C"));
        let (c3, c4) = (at("C") | at("A"), at("B") | -at("C"));
        let symbols = [sym("A"), sym("B"), sym("C")];
        assert_eq!(find_pure_symbol(&symbols, &[&c1, &c2, &c3]), Some((&symbols[0], true)));
        assert_eq!(find_pure_symbol(&symbols, &[&c2, &c4]), Some((&symbols[2], false)));
        assert_eq!(find_pure_symbol(&symbols[..2], &[&c2, &c4]), None);
        let c5 = -at("A") | at("B");
        assert_eq!(find_pure_symbol(&symbols, &[&c1, &c5, &c3]), Some((&symbols[2], true)));
    }

    #[test]
    fn unit_clause() {
        let m = Model::new().extend(sym("A"), true).extend(sym("B"), true);
        let (c1, c2) = (at("A") | -at("B"), -at("B") | -at("C"));
        assert_eq!(find_unit_clause(&[&c1, &c2], &m), Some((&sym("C"), false)));
        let c3 = at("C") | at("D");
        assert_eq!(find_unit_clause(&[&c1, &c3], &m), None);
        // a tautology is no unit clause
        let taut = at("C") | -at("C");
        assert_eq!(find_unit_clause(&[&taut], &m), None);
        let twice = at("C") | at("C");
        assert_eq!(find_unit_clause(&[&twice], &m), Some((&sym("C"), true)));
    }

    #[test]
    fn satisfiable() {
        assert!(dpll_satisfiable(&(at("A") & -at("A"))).is_none());
        let fm = (at("A") | at("B")) & (-at("A") | at("B")) & -at("B");
        assert!(dpll_satisfiable(&fm).is_none());

        let fm = Expr::iff(at("A"), at("B")) & -at("A");
        let m = dpll_satisfiable(&fm).unwrap();
        assert_eq!(pl_true(&fm, &m), Some(true));
        assert_eq!(m.get(&sym("B")), Some(false));
    }

    #[test]
    fn tautology_clauses() {
        // (A <=> A) & ~A is satisfiable
        let fm = Expr::iff(at("A"), at("A")) & -at("A");
        let m = dpll_satisfiable(&fm).unwrap();
        assert_eq!(m.get(&sym("A")), Some(false));
    }

    #[test]
    fn entails() {
        let kb = Expr::imp(at("P"), at("Q")) & at("P");
        assert_eq!(dpll_entails(&kb, &at("Q")), (true, None));
        let (entailed, witness) = dpll_entails(&kb, &at("R"));
        assert!(!entailed);
        let witness = witness.unwrap();
        assert_eq!(witness.get(&sym("R")), Some(false));
        assert_eq!(pl_true(&(kb & -at("R")), &witness), Some(true));
    }
}
