use alloc::string::String;
use alloc::sync::Arc;
use core::borrow::Borrow;
use core::fmt::{self, Display};

/// Name of an atomic proposition.
///
/// Cloning a symbol only bumps a reference count,
/// so symbols can be freely copied into models and indices.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Symbol(Arc<str>);

impl Symbol {
    pub fn new(name: &str) -> Self {
        Self(Arc::from(name))
    }

    pub fn name(&self) -> &str {
        &self.0
    }
}

impl Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for Symbol {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Symbol {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for Symbol {
    fn from(name: String) -> Self {
        Self(Arc::from(name))
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Symbol {
    fn serialize<S: serde::Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(&self.0)
    }
}

/// Return true iff `op` names an atomic proposition rather than a connective.
///
/// ~~~
/// use entail::is_symbol;
/// assert!(is_symbol("It_is_raining"));
/// assert!(is_symbol("_p"));
/// assert!(!is_symbol("=>"));
/// assert!(!is_symbol(""));
/// ~~~
pub fn is_symbol(op: &str) -> bool {
    op.chars()
        .next()
        .map_or(false, |c| c.is_alphabetic() || c == '_')
}
