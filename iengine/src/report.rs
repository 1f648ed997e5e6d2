use entail::{Evidence, Verdict};
use std::fmt::{self, Display};

/// Answer to a query, as printed for the user.
///
/// Truth table enumeration reports the number of models,
/// chaining reports the established symbols, and
/// DPLL reports a counter-model when the query is not entailed.
pub struct Answer<'a>(pub &'a Verdict);

impl Display for Answer<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Verdict { entailed, evidence } = self.0;
        match (entailed, evidence) {
            (true, Evidence::Models(n)) => write!(f, "YES: {}", n),
            (true, Evidence::Derived(syms)) => {
                write!(f, "YES:")?;
                let mut iter = syms.iter();
                if let Some(s) = iter.next() {
                    write!(f, " {}", s)?;
                    iter.try_for_each(|s| write!(f, ", {}", s))?;
                }
                Ok(())
            }
            (true, Evidence::Witness(_)) => write!(f, "YES"),
            (false, Evidence::Witness(Some(m))) => write!(f, "NO\n{}", m),
            (false, _) => write!(f, "NO"),
        }
    }
}

/// Failure to answer a query.
pub struct Failure<E>(pub E);

impl<E: Display> Display for Failure<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ERROR: {}", self.0)
    }
}
