//! Entailment by backward chaining.

use crate::kb::goals;
use crate::{Expr, KnowledgeBase, Result, Symbol};
use alloc::vec::Vec;
use hashbrown::HashSet;
use log::{debug, info};

/// Goal-directed proof search state.
///
/// Proven rules are remembered, so that
/// shared subproofs are not searched repeatedly.
/// Goals that are currently being proven are remembered as well;
/// a goal depending on itself fails instead of recursing forever.
struct Search<'a> {
    kb: &'a KnowledgeBase,
    proven: HashSet<usize>,
    active: HashSet<Symbol>,
    derived: Vec<Symbol>,
}

impl<'a> Search<'a> {
    fn new(kb: &'a KnowledgeBase) -> Self {
        Self {
            kb,
            proven: HashSet::new(),
            active: HashSet::new(),
            derived: Vec::new(),
        }
    }

    fn record(&mut self, s: &Symbol) {
        if !self.derived.contains(s) {
            self.derived.push(s.clone())
        }
    }

    fn truth_value(&mut self, q: &Symbol) -> bool {
        debug!("goal: {}", q);
        if self.kb.is_fact(q) {
            self.record(q);
            return true;
        }
        if !self.active.insert(q.clone()) {
            debug!("goal {} depends on itself", q);
            return false;
        }

        let kb = self.kb;
        let proven = kb.clauses_with_conclusion(q).any(|(i, rule)| {
            if self.proven.contains(&i) {
                return true;
            }
            let holds = rule.premises.iter().all(|p| self.truth_value(p));
            if holds {
                debug!("proved {}", rule);
                self.proven.insert(i);
                self.record(q);
            }
            holds
        });

        self.active.remove(q);
        proven
    }
}

/// Decide whether a knowledge base entails a conjunction of symbols
/// by reducing the query to known facts.
///
/// Return the decision together with the facts and derived symbols
/// used by the search, in the order in which they were established.
pub fn bc_entails(kb: &KnowledgeBase, query: &Expr) -> Result<(bool, Vec<Symbol>)> {
    let goals = goals(query)?;
    let mut search = Search::new(kb);
    let entailed = goals.into_iter().all(|g| search.truth_value(g));
    info!("backward chaining established {} symbols", search.derived.len());
    Ok((entailed, search.derived))
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::{String, ToString};

    fn at(name: &str) -> Expr {
        Expr::symbol(name)
    }

    fn names(syms: &[Symbol]) -> Vec<String> {
        syms.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn proves_from_facts() {
        // p2 => p3, p3 => p1, p2 & p1 & p3 => d, p2
        let kb = KnowledgeBase::new(Vec::from([
            Expr::imp(at("p2"), at("p3")),
            Expr::imp(at("p3"), at("p1")),
            Expr::imp(at("p2") & at("p1") & at("p3"), at("d")),
            at("p2"),
        ]))
        .unwrap();
        let (entailed, derived) = bc_entails(&kb, &at("d")).unwrap();
        assert!(entailed);
        assert_eq!(names(&derived), ["p2", "p3", "p1", "d"]);
    }

    #[test]
    fn unknown_goal() {
        let kb = KnowledgeBase::new(Vec::from([Expr::imp(at("a"), at("b"))])).unwrap();
        assert_eq!(bc_entails(&kb, &at("b")).unwrap(), (false, Vec::new()));
        assert_eq!(bc_entails(&kb, &at("c")).unwrap(), (false, Vec::new()));
    }

    #[test]
    fn cycles() {
        // a => b, b => a, c => a, c
        let kb = KnowledgeBase::new(Vec::from([
            Expr::imp(at("a"), at("b")),
            Expr::imp(at("b"), at("a")),
            Expr::imp(at("c"), at("a")),
            at("c"),
        ]))
        .unwrap();
        let (entailed, derived) = bc_entails(&kb, &at("b")).unwrap();
        assert!(entailed);
        assert_eq!(names(&derived), ["c", "a", "b"]);

        // a => b, b => a
        let kb = KnowledgeBase::new(Vec::from([
            Expr::imp(at("a"), at("b")),
            Expr::imp(at("b"), at("a")),
        ]))
        .unwrap();
        assert!(!bc_entails(&kb, &at("a")).unwrap().0);
    }

    #[test]
    fn conjunctive_query() {
        let kb = KnowledgeBase::new(Vec::from([at("a"), Expr::imp(at("a"), at("b"))])).unwrap();
        let (entailed, derived) = bc_entails(&kb, &(at("b") & at("a"))).unwrap();
        assert!(entailed);
        assert_eq!(names(&derived), ["a", "b"]);
        assert!(bc_entails(&kb, &Expr::imp(at("a"), at("b"))).is_err());
    }
}
