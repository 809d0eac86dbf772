//! RDF terms and triples for mapping documents

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// RDF IRI wrapper for type safety
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Iri(pub String);

impl Iri {
    pub fn new<S: Into<String>>(s: S) -> Self {
        Self(s.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Split the IRI into (namespace, local name) at the fragment separator
    /// or the last path segment, falling back to the last `:`.
    pub fn split_local(&self) -> (&str, &str) {
        match self.0.rfind(['#', '/']) {
            Some(pos) => self.0.split_at(pos + 1),
            None => match self.0.rfind(':') {
                Some(pos) => self.0.split_at(pos + 1),
                None => ("", self.0.as_str()),
            },
        }
    }

    /// Fragment or last path segment of the IRI.
    pub fn local_name(&self) -> &str {
        self.split_local().1
    }

    /// Namespace part of the IRI (everything up to and including the
    /// fragment separator or last path separator).
    pub fn namespace(&self) -> &str {
        self.split_local().0
    }
}

impl std::fmt::Display for Iri {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for Iri {
    fn from(s: &str) -> Self {
        Iri::new(s)
    }
}

impl From<String> for Iri {
    fn from(s: String) -> Self {
        Iri::new(s)
    }
}

/// Anonymous graph node with a process-generated identity and no inherent
/// label. Owned by whichever triple map created it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct BlankNode(pub String);

impl BlankNode {
    /// Mint a fresh anonymous node.
    pub fn new() -> Self {
        Self(Uuid::new_v4().simple().to_string())
    }

    pub fn with_id<S: Into<String>>(id: S) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for BlankNode {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for BlankNode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "_:{}", self.0)
    }
}

/// Literal value with an optional datatype IRI
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Literal {
    pub value: String,
    pub datatype: Option<Iri>,
}

impl Literal {
    pub fn new<S: Into<String>>(value: S) -> Self {
        Self {
            value: value.into(),
            datatype: None,
        }
    }

    pub fn typed<S: Into<String>>(value: S, datatype: Iri) -> Self {
        Self {
            value: value.into(),
            datatype: Some(datatype),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.value
    }
}

impl std::fmt::Display for Literal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value)
    }
}

/// Tagged RDF term. Subjects are named or anonymous nodes; objects may also
/// be literals. Exhaustive matching replaces per-call-site type sniffing.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Term {
    Iri(Iri),
    Blank(BlankNode),
    Literal(Literal),
}

impl Term {
    /// True for named and anonymous nodes, false for literals. Traversal
    /// follows only node endpoints.
    pub fn is_node(&self) -> bool {
        !matches!(self, Term::Literal(_))
    }

    pub fn as_iri(&self) -> Option<&Iri> {
        match self {
            Term::Iri(iri) => Some(iri),
            _ => None,
        }
    }

    pub fn as_literal(&self) -> Option<&Literal> {
        match self {
            Term::Literal(lit) => Some(lit),
            _ => None,
        }
    }

    /// Lexical form of the term: the IRI string, the blank node id, or the
    /// literal value.
    pub fn lexical(&self) -> &str {
        match self {
            Term::Iri(iri) => iri.as_str(),
            Term::Blank(b) => b.as_str(),
            Term::Literal(lit) => lit.as_str(),
        }
    }
}

impl std::fmt::Display for Term {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Term::Iri(iri) => write!(f, "{}", iri),
            Term::Blank(b) => write!(f, "{}", b),
            Term::Literal(lit) => write!(f, "\"{}\"", lit),
        }
    }
}

impl From<Iri> for Term {
    fn from(iri: Iri) -> Self {
        Term::Iri(iri)
    }
}

impl From<BlankNode> for Term {
    fn from(node: BlankNode) -> Self {
        Term::Blank(node)
    }
}

impl From<Literal> for Term {
    fn from(lit: Literal) -> Self {
        Term::Literal(lit)
    }
}

/// RDF triple: (subject, predicate, object)
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Triple {
    pub subject: Term,
    pub predicate: Iri,
    pub object: Term,
}

impl Triple {
    pub fn new(subject: impl Into<Term>, predicate: Iri, object: impl Into<Term>) -> Self {
        Self {
            subject: subject.into(),
            predicate,
            object: object.into(),
        }
    }
}

impl std::fmt::Display for Triple {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} {}", self.subject, self.predicate, self.object)
    }
}
