//! TriG data model (spec §4.6): Turtle extended with named graph
//! blocks. Reuses [`crate::turtle::ast`] wholesale for everything below
//! the graph level.

use crate::turtle::ast::{BlankNode, Directive, Iri, PredicateObject, Triples};

/// `LabelOrSubject ::= IRI | BlankNode`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LabelOrSubject {
    /// An IRI graph label or subject.
    Iri(Iri),
    /// A blank-node graph label or subject.
    BlankNode(BlankNode),
}

/// `WrappedGraph ::= '{' TriplesBlock? '}'` — an ordinary list of
/// Turtle `Triples` productions, all sharing one graph label.
pub type WrappedGraph = Vec<Triples>;

/// The two shapes `LabelOrSubject` can introduce (spec §4.6): a named
/// graph block, or — when no `{ ... }` follows — an ordinary
/// default-graph triple with `label` as its subject.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TriplesOrGraphBody {
    /// A `{ ... }` block, tagged with `label` as its graph.
    WrappedGraph(WrappedGraph),
    /// An ordinary predicate-object list, `label` being a default-graph subject.
    PredicateObjectList(Vec<PredicateObject>),
}

/// `TriplesOrGraph ::= LabelOrSubject (WrappedGraph | PredicateObjectList '.')`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TriplesOrGraph {
    /// The leading IRI or blank node.
    pub label: LabelOrSubject,
    /// What follows the label.
    pub body: TriplesOrGraphBody,
}

/// `Block ::= TriplesOrGraph | WrappedGraph | Triples2 | 'GRAPH' LabelOrSubject WrappedGraph`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    /// A labelled graph block, or a labelled default-graph triple.
    TriplesOrGraph(TriplesOrGraph),
    /// A bare `{ ... }` block with no label: default graph.
    WrappedGraph(WrappedGraph),
    /// An ordinary Turtle triples statement: default graph.
    Triples(Triples),
    /// `'GRAPH' LabelOrSubject WrappedGraph` — the SPARQL-style explicit
    /// named-graph form.
    Graph {
        /// The graph's label.
        label: LabelOrSubject,
        /// The graph's triples.
        graph: WrappedGraph,
    },
}

/// One top-level production of a TriG document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Statement {
    /// `@prefix`/`@base`/SPARQL-style equivalents.
    Directive(Directive),
    /// A triples or named-graph block.
    Block(Block),
}

/// `Document ::= statement*` (spec §3 `Document (TriG)`).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document(pub Vec<Statement>);

impl Document {
    /// An empty document.
    pub fn new() -> Self {
        Document(Vec::new())
    }
    /// Iterates over the document's statements in source order.
    pub fn statements(&self) -> impl Iterator<Item = &Statement> {
        self.0.iter()
    }
}
