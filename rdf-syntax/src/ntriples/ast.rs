//! The N-Triples data model (spec §3), shared verbatim by N-Quads.
//!
//! Every sum type here is a closed Rust `enum`: no marker traits, no
//! dynamic dispatch, exhaustive `match` at every use site (spec §9,
//! "Recursive AST with shared interfaces").

use std::fmt;

/// An absolute IRI (spec §3 `IRIReference`).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct IriRef(pub String);

impl IriRef {
    /// Wraps an already-resolved absolute IRI string.
    pub fn new(iri: impl Into<String>) -> Self {
        IriRef(iri.into())
    }
}

impl fmt::Display for IriRef {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "<{}>", self.0)
    }
}

/// A blank node, scoped to one document (spec §3 `BlankNode`).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BlankNode(pub String);

impl BlankNode {
    /// Wraps a label (without the leading `_:`).
    pub fn new(label: impl Into<String>) -> Self {
        BlankNode(label.into())
    }
}

impl fmt::Display for BlankNode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "_:{}", self.0)
    }
}

/// A lexical value with an optional datatype IRI or language tag
/// (spec §3 `Literal`). Language tag presence implies `rdf:langString`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Literal {
    /// The lexical form, already unescaped per spec §4.5.1 where this
    /// literal is the result of Turtle evaluation, or exactly as written
    /// for a literal parsed directly as N-Triples.
    pub lexical: String,
    /// The datatype IRI, if any. `None` together with `language: None`
    /// means the consumer assumes `xsd:string`.
    pub datatype: Option<IriRef>,
    /// The language tag, if any.
    pub language: Option<String>,
}

impl Literal {
    /// A plain (`xsd:string`) literal.
    pub fn plain(lexical: impl Into<String>) -> Self {
        Literal {
            lexical: lexical.into(),
            datatype: None,
            language: None,
        }
    }
    /// A language-tagged literal.
    pub fn with_language(lexical: impl Into<String>, language: impl Into<String>) -> Self {
        Literal {
            lexical: lexical.into(),
            datatype: None,
            language: Some(language.into()),
        }
    }
    /// A datatyped literal.
    pub fn with_datatype(lexical: impl Into<String>, datatype: IriRef) -> Self {
        Literal {
            lexical: lexical.into(),
            datatype: Some(datatype),
            language: None,
        }
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "\"{}\"", self.lexical)?;
        if let Some(lang) = &self.language {
            write!(f, "@{}", lang)
        } else if let Some(dt) = &self.datatype {
            write!(f, "^^{}", dt)
        } else {
            Ok(())
        }
    }
}

/// A term in subject position: `IRIReference | BlankNode | (RDF-star)
/// QuotedTriple` (spec §3, §4.8).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Subject {
    /// An absolute IRI.
    Iri(IriRef),
    /// A blank node.
    BlankNode(BlankNode),
    /// An RDF-star quoted triple used as a subject.
    QuotedTriple(Box<Triple>),
}

/// A term in object position: `IRIReference | BlankNode | Literal |
/// (RDF-star) QuotedTriple` (spec §3, §4.8).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Object {
    /// An absolute IRI.
    Iri(IriRef),
    /// A blank node.
    BlankNode(BlankNode),
    /// A literal.
    Literal(Literal),
    /// An RDF-star quoted triple used as an object.
    QuotedTriple(Box<Triple>),
}

impl fmt::Display for Subject {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Subject::Iri(iri) => write!(f, "{}", iri),
            Subject::BlankNode(bn) => write!(f, "{}", bn),
            Subject::QuotedTriple(t) => write!(f, "<< {} >>", t),
        }
    }
}

impl fmt::Display for Object {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Object::Iri(iri) => write!(f, "{}", iri),
            Object::BlankNode(bn) => write!(f, "{}", bn),
            Object::Literal(lit) => write!(f, "{}", lit),
            Object::QuotedTriple(t) => write!(f, "<< {} >>", t),
        }
    }
}

/// One N-Triples statement: `{ subject, predicate: IRIReference, object }`
/// (spec §3 `Triple`). The predicate is always an IRI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Triple {
    /// The triple's subject.
    pub subject: Subject,
    /// The triple's predicate; always an absolute IRI.
    pub predicate: IriRef,
    /// The triple's object.
    pub object: Object,
}

impl fmt::Display for Triple {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} {} {}", self.subject, self.predicate, self.object)
    }
}

/// An ordered sequence of [`Triple`]s (spec §3 `Document (N-Triples)`).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document(pub Vec<Triple>);

impl Document {
    /// An empty document.
    pub fn new() -> Self {
        Document(Vec::new())
    }
    /// Iterates over the document's triples in source order.
    pub fn triples(&self) -> impl Iterator<Item = &Triple> {
        self.0.iter()
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for t in &self.0 {
            writeln!(f, "{} .", t)?;
        }
        Ok(())
    }
}
