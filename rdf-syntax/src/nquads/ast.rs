//! The N-Quads data model (spec §3): N-Triples extended with an optional
//! graph label.

use crate::ntriples::{BlankNode, IriRef, Object, Subject};
use std::fmt;

/// The fourth component of a quad. Absent means the default graph
/// (spec GLOSSARY "Graph label").
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum GraphLabel {
    /// A named graph identified by an IRI.
    Iri(IriRef),
    /// A named graph identified by a blank node.
    BlankNode(BlankNode),
}

impl fmt::Display for GraphLabel {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            GraphLabel::Iri(iri) => write!(f, "{}", iri),
            GraphLabel::BlankNode(bn) => write!(f, "{}", bn),
        }
    }
}

/// `Triple ⊕ graphLabel?` (spec §3 `Quad`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Quad {
    /// The quad's subject.
    pub subject: Subject,
    /// The quad's predicate; always an absolute IRI.
    pub predicate: IriRef,
    /// The quad's object.
    pub object: Object,
    /// The named graph this quad belongs to, or `None` for the default
    /// graph.
    pub graph: Option<GraphLabel>,
}

impl fmt::Display for Quad {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} {} {}", self.subject, self.predicate, self.object)?;
        if let Some(g) = &self.graph {
            write!(f, " {}", g)?;
        }
        Ok(())
    }
}

/// An ordered sequence of [`Quad`]s (spec §3 `Document (N-Quads)`).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document(pub Vec<Quad>);

impl Document {
    /// An empty document.
    pub fn new() -> Self {
        Document(Vec::new())
    }
    /// Iterates over the document's quads in source order.
    pub fn quads(&self) -> impl Iterator<Item = &Quad> {
        self.0.iter()
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for q in &self.0 {
            writeln!(f, "{} .", q)?;
        }
        Ok(())
    }
}
