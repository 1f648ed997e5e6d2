//! Knowledge bases of definite clauses.

use crate::cnf::conjuncts;
use crate::expr::{Expr, Op};
use crate::{Error, Result, Symbol};
use alloc::format;
use alloc::string::ToString;
use alloc::vec::Vec;
use core::fmt::{self, Display};
use core::hash::Hash;
use hashbrown::{HashMap, HashSet};
use log::info;

/// An index maps keys `K` to the positions of the clauses they occur in.
#[derive(Debug)]
struct Index<K>(HashMap<K, Vec<usize>>);

impl<K: Eq + Hash> FromIterator<(K, usize)> for Index<K> {
    fn from_iter<I: IntoIterator<Item = (K, usize)>>(iter: I) -> Self {
        let mut index = HashMap::new();
        for (k, i) in iter {
            index.entry(k).or_insert_with(Vec::new).push(i)
        }
        Self(index)
    }
}

impl<K: Eq + Hash> Index<K> {
    fn get(&self, k: &K) -> &[usize] {
        self.0.get(k).map(Vec::as_slice).unwrap_or(&[])
    }
}

/// Implication from a conjunction of symbols to a symbol.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DefiniteClause {
    /// distinct premises, in order of first occurrence
    pub premises: Vec<Symbol>,
    pub conclusion: Symbol,
}

impl Display for DefiniteClause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut iter = self.premises.iter();
        if let Some(p) = iter.next() {
            write!(f, "{}", p)?;
            iter.try_for_each(|p| write!(f, " ∧ {}", p))?;
        }
        write!(f, " ⇒ {}", self.conclusion)
    }
}

enum Horn {
    Fact(Symbol),
    Rule(DefiniteClause),
}

fn horn(fm: &Expr) -> Option<Horn> {
    match fm {
        Expr::Sym(s) => Some(Horn::Fact(s.clone())),
        Expr::Bin(l, Op::Impl, r) => {
            let conclusion = r.as_symbol()?.clone();
            let premises = conjuncts(l).into_iter().map(|p| p.as_symbol().cloned());
            let premises: Option<Vec<_>> = premises.collect();
            let premises = crate::keep_first(premises?.into_iter());
            (!premises.is_empty()).then(|| {
                Horn::Rule(DefiniteClause {
                    premises,
                    conclusion,
                })
            })
        }
        _ => None,
    }
}

/// Return true iff the formula is a symbol or
/// an implication from a conjunction of symbols to a symbol.
///
/// ~~~
/// use entail::{is_definite_clause, Expr};
/// let (a, b, c) = (Expr::symbol("a"), Expr::symbol("b"), Expr::symbol("c"));
/// assert!(is_definite_clause(&a));
/// assert!(is_definite_clause(&Expr::imp(a.clone() & b.clone(), c.clone())));
/// assert!(!is_definite_clause(&Expr::imp(a.clone(), b.clone() | c.clone())));
/// assert!(!is_definite_clause(&Expr::imp(-a, c)));
/// ~~~
pub fn is_definite_clause(fm: &Expr) -> bool {
    horn(fm).is_some()
}

/// Return the symbols of a query that is a symbol or a conjunction of symbols.
pub(crate) fn goals(query: &Expr) -> Result<Vec<&Symbol>> {
    let msg = || format!("query {} is no conjunction of symbols", query);
    let goals = conjuncts(query).into_iter().map(|g| g.as_symbol());
    goals.map(|g| g.ok_or_else(|| Error::MalformedFormula(msg()))).collect()
}

/// Definite clauses, indexed by the symbols in their premises and conclusions.
///
/// The knowledge base is immutable once constructed.
#[derive(Debug)]
pub struct KnowledgeBase {
    sentences: Vec<Expr>,
    facts: Vec<Symbol>,
    fact_set: HashSet<Symbol>,
    rules: Vec<DefiniteClause>,
    premise: Index<Symbol>,
    conclusion: Index<Symbol>,
}

impl KnowledgeBase {
    /// Validate and index a list of definite clauses.
    ///
    /// Fail on the first sentence that is not a definite clause.
    pub fn new(sentences: Vec<Expr>) -> Result<Self> {
        let mut facts = Vec::new();
        let mut rules = Vec::new();
        for (index, fm) in sentences.iter().enumerate() {
            match horn(fm) {
                Some(Horn::Fact(s)) => facts.push(s),
                Some(Horn::Rule(r)) => rules.push(r),
                None => {
                    let clause = fm.to_string();
                    return Err(Error::MalformedKnowledgeBase { index, clause });
                }
            }
        }

        let enumerated = || rules.iter().enumerate();
        let premise = enumerated()
            .flat_map(|(i, r)| r.premises.iter().map(move |p| (p.clone(), i)))
            .collect();
        let conclusion = enumerated().map(|(i, r)| (r.conclusion.clone(), i)).collect();
        let fact_set = facts.iter().cloned().collect();
        info!("knowledge base: {} facts, {} rules", facts.len(), rules.len());

        Ok(Self {
            sentences,
            facts,
            fact_set,
            rules,
            premise,
            conclusion,
        })
    }

    /// All members, in insertion order.
    pub fn clauses(&self) -> &[Expr] {
        &self.sentences
    }

    /// The conjunction of all sentences.
    pub fn sentence(&self) -> Expr {
        Expr::conjoin(self.sentences.iter().cloned()).unwrap_or_else(Expr::top)
    }

    /// Sentences that are bare symbols, in insertion order.
    pub fn facts(&self) -> &[Symbol] {
        &self.facts
    }

    pub fn is_fact(&self, s: &Symbol) -> bool {
        self.fact_set.contains(s)
    }

    /// Implications, in insertion order.
    pub fn rules(&self) -> &[DefiniteClause] {
        &self.rules
    }

    pub fn rule(&self, i: usize) -> &DefiniteClause {
        &self.rules[i]
    }

    /// Implications that have `p` among their premises.
    pub fn clauses_with_premise(
        &self,
        p: &Symbol,
    ) -> impl Iterator<Item = (usize, &DefiniteClause)> {
        self.premise.get(p).iter().map(move |i| (*i, &self.rules[*i]))
    }

    /// Implications that conclude `p`.
    pub fn clauses_with_conclusion(
        &self,
        p: &Symbol,
    ) -> impl Iterator<Item = (usize, &DefiniteClause)> {
        self.conclusion.get(p).iter().map(move |i| (*i, &self.rules[*i]))
    }

    pub fn len(&self) -> usize {
        self.sentences.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sentences.is_empty()
    }
}

impl Display for KnowledgeBase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        let mut iter = self.sentences.iter();
        if let Some(fm) = iter.next() {
            write!(f, "{}", fm)?;
            iter.try_for_each(|fm| write!(f, ", {}", fm))?;
        }
        write!(f, "]")
    }
}
