use core::fmt::{self, Display};

/// Reason why no verdict could be reached.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Kind {
    OsError,
    InputError,
    SyntaxError,
    SemanticError,
}

impl Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::OsError => "OS error",
            Self::InputError => "input error",
            Self::SyntaxError => "syntax error",
            Self::SemanticError => "semantic error",
        };
        f.write_str(s)
    }
}

pub struct Error(Kind, Option<Box<dyn std::error::Error>>);

impl Error {
    pub fn new(k: Kind, e: Box<dyn std::error::Error>) -> Self {
        Self(k, Some(e))
    }

    pub fn get_kind(&self) -> Kind {
        self.0
    }

    pub fn get_error(&self) -> &Option<Box<dyn std::error::Error>> {
        &self.1
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.1 {
            Some(e) => write!(f, "{}: {}", self.0, e),
            None => write!(f, "{}", self.0),
        }
    }
}

impl fmt::Debug for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Error({:?}, {:?})", self.0, self.1)
    }
}

impl From<Kind> for Error {
    fn from(k: Kind) -> Self {
        Self(k, None)
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Self::new(Kind::OsError, e.into())
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Self::new(Kind::OsError, e.into())
    }
}

impl From<entail::Error> for Error {
    fn from(e: entail::Error) -> Self {
        let kind = match e {
            entail::Error::MalformedFormula(_) => Kind::SyntaxError,
            entail::Error::MalformedKnowledgeBase { .. } => Kind::SemanticError,
            entail::Error::InvalidAlgorithmSelection(_) => Kind::InputError,
        };
        Self::new(kind, e.into())
    }
}
