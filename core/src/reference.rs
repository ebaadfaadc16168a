use std::fmt;

use itertools::Itertools;

/// A `{dotted.path}` pointer from one token's value to another token.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TokenReference {
    pub path: Vec<String>,
}
impl TokenReference {
    pub fn new<S: Into<String>>(path: impl IntoIterator<Item = S>) -> Self {
        Self {
            path: path.into_iter().map(Into::into).collect(),
        }
    }
    /// Parses a value that is exactly one reference; anything else is `None`.
    pub fn parse(value: &str) -> Option<Self> {
        reference_parser::reference(value).ok()
    }
    /// The dotted form without braces, as used for dictionary lookups.
    pub fn key(&self) -> String {
        self.path.join(".")
    }
    /// The rest of the path after `prefix`, dotted. `{primitive.color.blue.40}`
    /// with prefix `["primitive", "color"]` gives `blue.40`.
    pub fn strip_prefix(&self, prefix: &[&str]) -> Option<String> {
        if self.path.len() <= prefix.len() {
            return None;
        }
        let matches = self.path.iter().zip(prefix).all(|(a, b)| a == b);
        matches.then(|| self.path[prefix.len()..].join("."))
    }
}
impl fmt::Display for TokenReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{{}}}", self.path.iter().join("."))
    }
}

/// A token value split into plain text and embedded references.
#[derive(Debug, Clone, PartialEq)]
pub enum Segment {
    Literal(String),
    Reference(TokenReference),
}

pub fn parse_template(value: &str) -> Vec<Segment> {
    reference_parser::template(value).unwrap_or_else(|_| vec![Segment::Literal(value.to_string())])
}

peg::parser! {
  grammar reference_parser() for str {
    rule name() -> String = s:$((!['{' | '}' | '.'] [_])+) { s.to_string() }

    pub(crate) rule reference() -> TokenReference = "{" path:(name() ++ ".") "}" { TokenReference { path } }

    rule literal() -> Segment = s:$((!reference() [_])+) { Segment::Literal(s.to_string()) }

    rule segment() -> Segment = r:reference() { Segment::Reference(r) } / literal()

    pub(crate) rule template() -> Vec<Segment> = segment()*
  }
}
