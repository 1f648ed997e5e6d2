//! Loading of problem files.
//!
//! A problem file consists of a knowledge base and a query:
//!
//! ~~~ text
//! TELL
//! p2 => p3; p3 => p1; p2 & p1 & p3 => d;
//! p2;
//! ASK
//! d
//! ~~~

use crate::{Error, Kind};
use entail::Expr;
use log::info;
use std::path::Path;

/// Knowledge base and query of a problem.
#[derive(Debug, PartialEq, Eq)]
pub struct Problem {
    pub kb: Vec<Expr>,
    pub query: Expr,
}

fn input_error(msg: &str) -> Error {
    Error::new(Kind::InputError, msg.into())
}

/// Split text at the first line consisting only of the keyword `kw`.
fn split_at_keyword<'a>(s: &'a str, kw: &str) -> Option<(&'a str, &'a str)> {
    let mut start = 0;
    for line in s.split_inclusive('\n') {
        if line.trim().eq_ignore_ascii_case(kw) {
            return Some((&s[..start], &s[start + line.len()..]));
        }
        start += line.len();
    }
    None
}

pub fn parse_str(s: &str) -> Result<Problem, Error> {
    let (before, after) = split_at_keyword(s, "TELL").ok_or_else(|| input_error("no TELL"))?;
    if !before.trim().is_empty() {
        return Err(input_error("text before TELL"));
    }
    let (tell, ask) = split_at_keyword(after, "ASK").ok_or_else(|| input_error("no ASK"))?;

    let sentences = tell.split(';').map(str::trim).filter(|s| !s.is_empty());
    let kb = entail::parse::parse_all(sentences)?;
    let query = entail::parse::parse(ask.trim())?;
    info!("loaded {} sentences, query {}", kb.len(), query);
    Ok(Problem { kb, query })
}

pub fn parse_file(filename: &Path) -> Result<Problem, Error> {
    info!("loading {:?}", filename);
    let s = std::fs::read_to_string(filename)?;
    parse_str(&s)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(name: &str) -> Expr {
        Expr::symbol(name)
    }

    #[test]
    fn problem() {
        let s = "TELL\np2 => p3; p3 => p1;\np2;\n\nASK\nd\n";
        let problem = parse_str(s).unwrap();
        let kb = [
            Expr::imp(at("p2"), at("p3")),
            Expr::imp(at("p3"), at("p1")),
            at("p2"),
        ];
        assert_eq!(problem.kb, kb);
        assert_eq!(problem.query, at("d"));
    }

    #[test]
    fn keywords() {
        let problem = parse_str("  tell \r\na || b\nAsk\n~a => b").unwrap();
        assert_eq!(problem.kb, [at("a") | at("b")]);
        assert_eq!(problem.query, Expr::imp(-at("a"), at("b")));
        // a keyword must be on its own line
        assert!(parse_str("TELL a; ASK b").is_err());
    }

    #[test]
    fn errors() {
        let kind = |s| parse_str(s).unwrap_err().get_kind();
        assert_eq!(kind("a; b\nASK\nc"), Kind::InputError);
        assert_eq!(kind("a\nTELL\nb\nASK\nc"), Kind::InputError);
        assert_eq!(kind("TELL\na; b"), Kind::InputError);
        assert_eq!(kind("TELL\na & ; b\nASK\nc"), Kind::SyntaxError);
        assert_eq!(kind("TELL\na\nASK\n"), Kind::SyntaxError);
    }
}
