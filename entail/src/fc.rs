//! Entailment by forward chaining.

use crate::kb::goals;
use crate::{Expr, KnowledgeBase, Result, Symbol};
use alloc::collections::VecDeque;
use alloc::vec::Vec;
use hashbrown::HashSet;
use log::{debug, info};

/// Decide whether a knowledge base entails a conjunction of symbols
/// by deriving new facts from known ones.
///
/// Return the decision together with the derived symbols, in order of derivation.
/// On success, the last derived symbol is the query symbol that was derived last.
pub fn fc_entails(kb: &KnowledgeBase, query: &Expr) -> Result<(bool, Vec<Symbol>)> {
    let goals = goals(query)?;
    if goals.is_empty() {
        return Ok((true, Vec::new()));
    }

    // number of premises of each rule not yet inferred
    let mut count: Vec<usize> = kb.rules().iter().map(|r| r.premises.len()).collect();
    let mut inferred: HashSet<Symbol> = HashSet::new();
    let mut agenda: VecDeque<Symbol> = kb.facts().iter().cloned().collect();
    let mut derived = Vec::new();

    while let Some(p) = agenda.pop_front() {
        debug!("agenda: {}, inferred: {}", p, derived.len());
        let reached = |g: &&Symbol| **g == p || inferred.contains(*g);
        if goals.contains(&&p) && goals.iter().all(reached) {
            info!("derived query after {} symbols", derived.len());
            derived.push(p);
            return Ok((true, derived));
        }
        if inferred.insert(p.clone()) {
            for (i, rule) in kb.clauses_with_premise(&p) {
                count[i] -= 1;
                if count[i] == 0 {
                    debug!("fire {}", rule);
                    agenda.push_back(rule.conclusion.clone())
                }
            }
            derived.push(p);
        }
    }
    info!("agenda exhausted after {} symbols", derived.len());
    Ok((false, derived))
}
