use crate::{bc, dpll, fc, tt};
use crate::{Error, Expr, KnowledgeBase, Model, Result, Symbol};
use alloc::string::ToString;
use alloc::vec::Vec;
use core::fmt::{self, Display};
use core::str::FromStr;
use log::info;

/// Inference method.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Method {
    /// truth table enumeration
    Tt,
    /// forward chaining
    Fc,
    /// backward chaining
    Bc,
    /// DPLL satisfiability search
    Dpll,
}

/// What supports a verdict, depending on the method that produced it.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Evidence {
    /// number of models of both knowledge base and query
    Models(usize),
    /// symbols established by chaining, in order
    Derived(Vec<Symbol>),
    /// model of the knowledge base falsifying the query, if there is one
    Witness(Option<Model>),
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Verdict {
    pub entailed: bool,
    pub evidence: Evidence,
}

impl FromStr for Method {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "tt" => Ok(Self::Tt),
            "fc" => Ok(Self::Fc),
            "bc" => Ok(Self::Bc),
            "dpll" => Ok(Self::Dpll),
            _ => Err(Error::InvalidAlgorithmSelection(s.to_string())),
        }
    }
}

impl Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Tt => "TT",
            Self::Fc => "FC",
            Self::Bc => "BC",
            Self::Dpll => "DPLL",
        };
        f.write_str(s)
    }
}

impl Method {
    pub const ALL: [Self; 4] = [Self::Tt, Self::Fc, Self::Bc, Self::Dpll];

    /// Decide whether the conjunction of `kb` entails `query`.
    ///
    /// Forward and backward chaining fail unless
    /// every sentence of `kb` is a definite clause and
    /// `query` is a conjunction of symbols.
    pub fn entails(self, kb: &[Expr], query: &Expr) -> Result<Verdict> {
        info!("{} on {} sentences, query {}", self, kb.len(), query);
        let conjoined = || Expr::conjoin(kb.iter().cloned()).unwrap_or_else(Expr::top);
        let horn = || KnowledgeBase::new(kb.to_vec());
        let (entailed, evidence) = match self {
            Self::Tt => {
                let (entailed, models) = tt::tt_entails(&conjoined(), query);
                (entailed, Evidence::Models(models))
            }
            Self::Fc => {
                let (entailed, derived) = fc::fc_entails(&horn()?, query)?;
                (entailed, Evidence::Derived(derived))
            }
            Self::Bc => {
                let (entailed, derived) = bc::bc_entails(&horn()?, query)?;
                (entailed, Evidence::Derived(derived))
            }
            Self::Dpll => {
                let (entailed, witness) = dpll::dpll_entails(&conjoined(), query);
                (entailed, Evidence::Witness(witness))
            }
        };
        info!("{}: {}", self, if entailed { "entailed" } else { "not entailed" });
        Ok(Verdict { entailed, evidence })
    }
}
