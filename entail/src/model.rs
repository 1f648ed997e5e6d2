use crate::Symbol;
use alloc::collections::BTreeMap;
use core::fmt::{self, Display};

/// Partial assignment of truth values to symbols.
///
/// A model is never changed in place; `extend` returns a new model.
/// Independent branches of a search can therefore share their parent model.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Model(BTreeMap<Symbol, bool>);

impl Model {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return a copy of the model that additionally maps `symbol` to `value`.
    ///
    /// ~~~
    /// use entail::{Model, Symbol};
    /// let a = Symbol::new("a");
    /// let empty = Model::new();
    /// let m = empty.extend(a.clone(), true);
    /// assert_eq!(m.get(&a), Some(true));
    /// assert_eq!(empty.get(&a), None);
    /// ~~~
    #[must_use]
    pub fn extend(&self, symbol: Symbol, value: bool) -> Self {
        let mut map = self.0.clone();
        map.insert(symbol, value);
        Self(map)
    }

    pub fn get(&self, symbol: &Symbol) -> Option<bool> {
        self.0.get(symbol).copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Symbol, bool)> {
        self.0.iter().map(|(s, v)| (s, *v))
    }
}

impl FromIterator<(Symbol, bool)> for Model {
    fn from_iter<I: IntoIterator<Item = (Symbol, bool)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl Display for Model {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        let mut iter = self.iter();
        if let Some((s, v)) = iter.next() {
            write!(f, "{}: {}", s, v)?;
            iter.try_for_each(|(s, v)| write!(f, ", {}: {}", s, v))?;
        }
        write!(f, "}}")
    }
}
