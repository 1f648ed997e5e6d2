//! Propositional formulas.

use crate::change::{self, Change};
use crate::{is_symbol, Error, Result, Symbol};
use alloc::collections::BTreeSet;
use alloc::string::ToString;
use alloc::{boxed::Box, format, vec::Vec};
use core::cmp::Ordering;
use core::fmt::{self, Display};
use core::ops::Neg;
use core::str::FromStr;

/// Immutable formula tree over symbols and the connectives ¬, ∧, ∨, ⇒, ⇔.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Expr {
    Sym(Symbol),
    Neg(Box<Expr>),
    /// binary operation
    Bin(Box<Expr>, Op, Box<Expr>),
    /// associative binary operation
    BinA(OpA, Vec<Expr>),
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Op {
    Impl,
    Iff,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum OpA {
    Conj,
    Disj,
}

/// Connective token, as it occurs in the infix syntax.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Connective {
    Not,
    And,
    Or,
    Implies,
    Iff,
}

impl Neg for OpA {
    type Output = Self;

    fn neg(self) -> Self {
        match self {
            Self::Conj => Self::Disj,
            Self::Disj => Self::Conj,
        }
    }
}

impl FromStr for Connective {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "~" | "¬" | "!" => Ok(Self::Not),
            "&" | "∧" => Ok(Self::And),
            "|" | "||" | "∨" => Ok(Self::Or),
            "=>" | "==>" | "⇒" => Ok(Self::Implies),
            "<=>" | "⇔" => Ok(Self::Iff),
            _ => Err(Error::MalformedFormula(format!("unknown connective {:?}", s))),
        }
    }
}

impl Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use Expr::*;
        match self {
            Sym(s) => write!(f, "{}", s),
            Neg(fm) => write!(f, "¬{}", fm),
            Bin(l, o, r) => write!(f, "({} {} {})", l, o, r),
            BinA(o, fms) => {
                let mut fms = fms.iter();
                match (o, fms.next()) {
                    (OpA::Conj, None) => write!(f, "⊤"),
                    (OpA::Disj, None) => write!(f, "⊥"),
                    (o, Some(fm1)) => {
                        write!(f, "({}", fm1)?;
                        fms.try_for_each(|fm| write!(f, " {} {}", o, fm))?;
                        write!(f, ")")
                    }
                }
            }
        }
    }
}

impl Display for Op {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Op::Impl => write!(f, "⇒"),
            Op::Iff => write!(f, "⇔"),
        }
    }
}

impl Display for OpA {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OpA::Conj => write!(f, "∧"),
            OpA::Disj => write!(f, "∨"),
        }
    }
}

impl Display for Connective {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Not => "¬",
            Self::And => "∧",
            Self::Or => "∨",
            Self::Implies => "⇒",
            Self::Iff => "⇔",
        };
        f.write_str(s)
    }
}

impl Neg for Expr {
    type Output = Self;
    fn neg(self) -> Self {
        Self::Neg(Box::new(self))
    }
}

impl core::ops::BitAnd for Expr {
    type Output = Self;
    fn bitand(self, rhs: Self) -> Self {
        Self::bina(self, OpA::Conj, rhs)
    }
}

impl core::ops::BitOr for Expr {
    type Output = Self;
    fn bitor(self, rhs: Self) -> Self {
        Self::bina(self, OpA::Disj, rhs)
    }
}

/// Order by rendered string, falling back to the structure on ties.
impl Ord for Expr {
    fn cmp(&self, other: &Self) -> Ordering {
        let by_string = self.to_string().cmp(&other.to_string());
        by_string.then_with(|| self.cmp_structure(other))
    }
}

impl PartialOrd for Expr {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Expr {
    pub fn symbol(name: &str) -> Self {
        Self::Sym(Symbol::new(name))
    }

    /// Build an expression from an operator token and its operands.
    ///
    /// An identifier without operands yields a symbol;
    /// anything else must be a connective with fitting arity.
    ///
    /// ~~~
    /// use entail::Expr;
    /// let a = Expr::new("a", Vec::new()).unwrap();
    /// let b = Expr::symbol("b");
    /// let ab = Expr::new("=>", vec![a.clone(), b.clone()]).unwrap();
    /// assert_eq!(ab, Expr::imp(a.clone(), b));
    /// assert!(Expr::new("%", vec![a]).is_err());
    /// ~~~
    pub fn new(op: &str, args: Vec<Self>) -> Result<Self> {
        if is_symbol(op) {
            if args.is_empty() {
                Ok(Self::symbol(op))
            } else {
                let msg = format!("symbol {} applied to {} operands", op, args.len());
                Err(Error::MalformedFormula(msg))
            }
        } else {
            Self::compound(op.parse()?, args)
        }
    }

    pub fn compound(c: Connective, args: Vec<Self>) -> Result<Self> {
        let arity = |n: usize| format!("{} applied to {} operands", c, n);
        match c {
            Connective::Not => match <[Self; 1]>::try_from(args) {
                Ok([fm]) => Ok(-fm),
                Err(args) => Err(Error::MalformedFormula(arity(args.len()))),
            },
            Connective::Implies | Connective::Iff => match <[Self; 2]>::try_from(args) {
                Ok([l, r]) if c == Connective::Implies => Ok(Self::imp(l, r)),
                Ok([l, r]) => Ok(Self::iff(l, r)),
                Err(args) => Err(Error::MalformedFormula(arity(args.len()))),
            },
            Connective::And | Connective::Or if args.len() < 2 => {
                Err(Error::MalformedFormula(arity(args.len())))
            }
            Connective::And => Ok(Self::BinA(OpA::Conj, args)),
            Connective::Or => Ok(Self::BinA(OpA::Disj, args)),
        }
    }

    pub fn bin(l: Self, o: Op, r: Self) -> Self {
        Self::Bin(Box::new(l), o, Box::new(r))
    }

    /// Combine two formulas, merging operands that already carry the same operation.
    pub fn bina(l: Self, o: OpA, r: Self) -> Self {
        let mut fms = match l {
            Self::BinA(op, fms) if o == op => fms,
            l => Vec::from([l]),
        };
        match r {
            Self::BinA(op, rs) if o == op => fms.extend(rs),
            r => fms.push(r),
        }
        Self::BinA(o, fms)
    }

    pub fn imp(l: Self, r: Self) -> Self {
        Self::bin(l, Op::Impl, r)
    }

    pub fn iff(l: Self, r: Self) -> Self {
        Self::bin(l, Op::Iff, r)
    }

    /// The empty conjunction, which holds in every model.
    pub fn top() -> Self {
        Self::BinA(OpA::Conj, Vec::new())
    }

    /// Return the conjunction of all formulas, or `None` if there are none.
    pub fn conjoin(fms: impl IntoIterator<Item = Self>) -> Option<Self> {
        let mut fms = fms.into_iter();
        let fm1 = fms.next()?;
        Some(fms.fold(fm1, |acc, fm| acc & fm))
    }

    pub fn as_symbol(&self) -> Option<&Symbol> {
        match self {
            Self::Sym(s) => Some(s),
            _ => None,
        }
    }

    /// Return the symbol and polarity of a literal.
    pub fn literal(&self) -> Option<(&Symbol, bool)> {
        match self {
            Self::Sym(s) => Some((s, true)),
            Self::Neg(fm) => fm.as_symbol().map(|s| (s, false)),
            _ => None,
        }
    }

    pub fn is_literal(&self) -> bool {
        self.literal().is_some()
    }

    pub fn map_form(self, f: impl Fn(Self) -> Self) -> Self {
        use Expr::*;
        match self {
            Sym(_) => self,
            Neg(fm) => -f(*fm),
            Bin(l, o, r) => Self::bin(f(*l), o, f(*r)),
            BinA(o, fms) => BinA(o, fms.into_iter().map(f).collect()),
        }
    }

    pub fn subforms(&self) -> Box<dyn Iterator<Item = &Expr> + '_> {
        use core::iter::once;
        use Expr::*;
        match self {
            Sym(_) => Box::new(once(self)),
            Neg(fm) => Box::new(once(self).chain(fm.subforms())),
            Bin(l, _, r) => Box::new(once(self).chain(l.subforms()).chain(r.subforms())),
            BinA(_, fms) => Box::new(once(self).chain(fms.iter().flat_map(|fm| fm.subforms()))),
        }
    }

    /// Symbol occurrences, from left to right.
    pub fn symbols(&self) -> impl Iterator<Item = &Symbol> {
        self.subforms().filter_map(|fm| fm.as_symbol())
    }

    /// Return the set of symbols occurring in the formula.
    pub fn get_symbols(&self) -> BTreeSet<Symbol> {
        self.symbols().cloned().collect()
    }

    /// Apply a change function top-down, at every node until it reports no change.
    pub fn fix(self, f: &impl Fn(Self) -> (Change, Self)) -> Self {
        change::fix(self, f).map_form(|fm| fm.fix(f))
    }

    pub fn unfold_impl(self) -> (Change, Self) {
        match self {
            Self::Bin(l, Op::Impl, r) => (true, Self::BinA(OpA::Disj, Vec::from([-*l, *r]))),
            x => (false, x),
        }
    }

    /// Unfold logical equivalence with a conjunction of disjunctions.
    pub fn unfold_iff(self) -> (Change, Self) {
        match self {
            Self::Bin(l, Op::Iff, r) => {
                let lr = Self::BinA(OpA::Disj, Vec::from([-*l.clone(), *r.clone()]));
                let rl = Self::BinA(OpA::Disj, Vec::from([-*r, *l]));
                (true, Self::BinA(OpA::Conj, Vec::from([lr, rl])))
            }
            x => (false, x),
        }
    }

    fn rank(&self) -> u8 {
        match self {
            Self::Sym(_) => 0,
            Self::Neg(_) => 1,
            Self::Bin(..) => 2,
            Self::BinA(..) => 3,
        }
    }

    fn cmp_structure(&self, other: &Self) -> Ordering {
        use Expr::*;
        match (self, other) {
            (Sym(a), Sym(b)) => a.cmp(b),
            (Neg(a), Neg(b)) => a.cmp_structure(b),
            (Bin(l1, o1, r1), Bin(l2, o2, r2)) => o1
                .cmp(o2)
                .then_with(|| l1.cmp_structure(l2))
                .then_with(|| r1.cmp_structure(r2)),
            (BinA(o1, fms1), BinA(o2, fms2)) => {
                let pairs = fms1.iter().zip(fms2.iter());
                let first = pairs.map(|(x, y)| x.cmp_structure(y)).find(|o| o.is_ne());
                o1.cmp(o2)
                    .then(first.unwrap_or(Ordering::Equal))
                    .then(fms1.len().cmp(&fms2.len()))
            }
            _ => self.rank().cmp(&other.rank()),
        }
    }
}
