//! Parsing of formulas in infix syntax.
//!
//! Connectives, from loosest to tightest binding:
//!
//! | connective  | tokens              | associativity |
//! | ----------- | ------------------- | ------------- |
//! | equivalence | `<=>`, `⇔`          | left          |
//! | implication | `=>`, `==>`, `⇒`    | right         |
//! | disjunction | `\|\|`, `\|`, `∨`   | left          |
//! | conjunction | `&`, `∧`            | left          |
//! | negation    | `~`, `!`, `¬`       | prefix        |
//!
//! Symbols are identifiers starting with a letter or underscore.
//!
//! ~~~
//! use entail::{parse::parse, Expr};
//! let (a, b, c) = (Expr::symbol("a"), Expr::symbol("b"), Expr::symbol("c"));
//! assert_eq!(parse("a & b => c").unwrap(), Expr::imp(a.clone() & b.clone(), c.clone()));
//! assert_eq!(parse("~a || b").unwrap(), -a | b);
//! assert!(parse("a & => c").is_err());
//! ~~~

use crate::{Connective, Error, Expr, OpA, Result};
use alloc::string::String;
use alloc::vec::Vec;
use alloc::{format, string::ToString};
use core::fmt::{self, Display};
use core::str::FromStr;
use log::trace;

#[derive(Clone, Debug, PartialEq, Eq)]
enum Token {
    Ident(String),
    Conn(Connective),
    LParen,
    RParen,
}

impl Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ident(s) => write!(f, "symbol {}", s),
            Self::Conn(c) => write!(f, "connective {}", c),
            Self::LParen => write!(f, "\"(\""),
            Self::RParen => write!(f, "\")\""),
        }
    }
}

fn is_ident_start(c: char) -> bool {
    c.is_alphabetic() || c == '_'
}

fn is_ident_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Connective tokens, where every token comes before its prefixes.
const CONNECTIVES: [&str; 13] = [
    "<=>", "⇔", "==>", "=>", "⇒", "||", "|", "∨", "&", "∧", "~", "!", "¬",
];

/// Split text into tokens, each paired with its byte position.
fn lex(s: &str) -> Result<Vec<(usize, Token)>> {
    let mut tokens = Vec::new();
    let mut chars = s.char_indices().peekable();
    while let Some(&(pos, c)) = chars.peek() {
        if c.is_whitespace() {
            chars.next();
            continue;
        }
        let (token, len) = if c == '(' {
            (Token::LParen, 1)
        } else if c == ')' {
            (Token::RParen, 1)
        } else if is_ident_start(c) {
            let len = s[pos..].find(|c| !is_ident_char(c)).unwrap_or(s.len() - pos);
            (Token::Ident(s[pos..pos + len].to_string()), len)
        } else if let Some(op) = CONNECTIVES.iter().find(|op| s[pos..].starts_with(**op)) {
            (Token::Conn(op.parse()?), op.len())
        } else {
            return Err(Error::MalformedFormula(format!(
                "unexpected character {:?} at position {}",
                c, pos
            )));
        };
        while chars.next_if(|(i, _)| *i < pos + len).is_some() {}
        tokens.push((pos, token));
    }
    Ok(tokens)
}

/// Recursive descent parser over a token list.
struct Parser {
    tokens: Vec<(usize, Token)>,
    pos: usize,
    /// length of the input, reported as position of its end
    len: usize,
}

impl Parser {
    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.pos).map(|(_, t)| t)
    }

    fn accept(&mut self, c: Connective) -> bool {
        let found = self.peek() == Some(&Token::Conn(c));
        if found {
            self.pos += 1
        }
        found
    }

    fn unexpected(&self, expected: &str) -> Error {
        let msg = match self.tokens.get(self.pos) {
            Some((i, t)) => format!("expected {}, found {} at position {}", expected, t, i),
            None => format!("expected {}, found end of input at position {}", expected, self.len),
        };
        Error::MalformedFormula(msg)
    }

    fn iff(&mut self) -> Result<Expr> {
        let mut l = self.imp()?;
        while self.accept(Connective::Iff) {
            l = (l | Connective::Iff | self.imp()?)?;
        }
        Ok(l)
    }

    fn imp(&mut self) -> Result<Expr> {
        let l = self.disj()?;
        if self.accept(Connective::Implies) {
            l | Connective::Implies | self.imp()?
        } else {
            Ok(l)
        }
    }

    fn disj(&mut self) -> Result<Expr> {
        let mut l = self.conj()?;
        while self.accept(Connective::Or) {
            l = Expr::bina(l, OpA::Disj, self.conj()?);
        }
        Ok(l)
    }

    fn conj(&mut self) -> Result<Expr> {
        let mut l = self.unary()?;
        while self.accept(Connective::And) {
            l = Expr::bina(l, OpA::Conj, self.unary()?);
        }
        Ok(l)
    }

    fn unary(&mut self) -> Result<Expr> {
        if self.accept(Connective::Not) {
            return Ok(-self.unary()?);
        }
        match self.peek() {
            Some(Token::Ident(s)) => {
                let fm = Expr::symbol(s);
                self.pos += 1;
                Ok(fm)
            }
            Some(Token::LParen) => {
                self.pos += 1;
                let fm = self.iff()?;
                if self.peek() == Some(&Token::RParen) {
                    self.pos += 1;
                    Ok(fm)
                } else {
                    Err(self.unexpected("\")\""))
                }
            }
            _ => Err(self.unexpected("symbol, negation or \"(\"")),
        }
    }
}

/// Parse a single formula.
pub fn parse(s: &str) -> Result<Expr> {
    let tokens = lex(s)?;
    let mut parser = Parser {
        tokens,
        pos: 0,
        len: s.len(),
    };
    let fm = parser.iff()?;
    if parser.peek().is_some() {
        return Err(parser.unexpected("end of input"));
    }
    trace!("parsed {:?} as {}", s, fm);
    Ok(fm)
}

/// Parse a sequence of formulas, failing on the first malformed one.
pub fn parse_all<'a>(sentences: impl IntoIterator<Item = &'a str>) -> Result<Vec<Expr>> {
    sentences.into_iter().map(parse).collect()
}

impl FromStr for Expr {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        parse(s)
    }
}
