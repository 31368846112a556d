//! The Notation3 (N3) data model (spec §4.9): grammar/AST only, no
//! evaluator. N3 reuses Turtle's terminals and most of its productions
//! (`IRI`, `BlankNode`, `Literal`, `Collection`), extended with
//! `Path`/`QuickVar`/`Formula` as first-class terms and a wider set of
//! `Verb` keywords (`has`, `is … of`, `=`, `=>`, `<=`).
//!
//! The grammar supported here does not fully match the W3C Team
//! Submission: `@forAll`/`@forSome` quantifiers and magic predicates
//! (e.g. `math:sum`) are not given special treatment — they round-trip
//! as ordinary triples, same restriction the crate this is grounded on
//! already carries.

use crate::turtle::ast::{BlankNode, Iri, Literal};

/// `PathItem ::= IRI | BlankNode | QuickVar | Collection |
/// BlankNodePropertyList | IRIPropertyList | Literal | Formula`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathItem {
    /// An IRI term.
    Iri(Iri),
    /// A blank-node term.
    BlankNode(BlankNode),
    /// `'?' PN_LOCAL`.
    QuickVar(String),
    /// `'(' Path* ')'`.
    Collection(Vec<Path>),
    /// `'[' PredicateObjectList ']'`.
    BlankNodePropertyList(Vec<PredicateObject>),
    /// `'[' 'id' IRI PredicateObjectList ']'` — a blank-node property
    /// list additionally naming the node it describes.
    IriPropertyList {
        /// The node's own IRI.
        iri: Iri,
        /// The property list describing it.
        list: Vec<PredicateObject>,
    },
    /// A literal term.
    Literal(Literal),
    /// `'{' statement* '}'`, usable as a term (spec §4.9).
    Formula(Vec<Statement>),
}

/// The chaining operator of a `Path` (spec §4.9: "left-associative `!`
/// forward or `^` reverse chaining").
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathOp {
    /// `!`.
    Forward,
    /// `^`.
    Reverse,
}

/// `Path ::= PathItem (('!' | '^') Path)?`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Path {
    /// The term at the head of the chain.
    pub item: PathItem,
    /// The next link in the chain, if any.
    pub next: Option<(PathOp, Box<Path>)>,
}

/// `Predicate ::= Path | '<-' Path`; the `<-` form marks the predicate
/// as applying with subject and object swapped (not resolved here —
/// that is an evaluator's job, and none is specified for N3).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Predicate {
    /// An ordinary, subject-to-object predicate.
    Forward(Path),
    /// `<- Path`, applying with subject and object swapped.
    Inverse(Path),
}

/// `Verb ::= Predicate | 'a' | 'has' Path | 'is' Path 'of' | '<=' | '=>' | '='`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verb {
    /// An ordinary or inverse predicate path.
    Predicate(Predicate),
    /// The `a` keyword, shorthand for `rdf:type`.
    A,
    /// `has P` — sugar for the predicate `P`, object on the right.
    Has(Path),
    /// `is P of` — sugar for the predicate `P`, subject and object swapped.
    IsOf(Path),
    /// `<=`, `log:isImpliedBy`.
    ReverseImplies,
    /// `=>`, `log:implies`.
    Implies,
    /// `=`, `owl:sameAs`.
    SameAs,
}

/// `PredicateObject ::= Verb ObjectList`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PredicateObject {
    /// The predicate.
    pub verb: Verb,
    /// The objects sharing this predicate.
    pub objects: Vec<Path>,
}

/// `Triples ::= Subject PredicateObjectList?` — unlike Turtle, the
/// predicate-object list is optional, so a bare path statement merely
/// asserts the path's existence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Triples {
    /// The statement's subject path.
    pub subject: Path,
    /// The statement's predicate-object pairs, if any.
    pub predicate_objects: Vec<PredicateObject>,
}

/// `PrefixID | Base | SparqlPrefix | SparqlBase`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Directive {
    /// `@prefix prefix: <iri> .` or `PREFIX prefix: <iri>`.
    Prefix {
        /// The declared prefix, without the trailing `:`.
        prefix: String,
        /// The namespace IRI it expands to.
        iri: String,
    },
    /// `@base <iri> .` or `BASE <iri>`.
    Base(String),
}

/// `Statement ::= Directive | Triples`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Statement {
    /// `@prefix`/`@base`/SPARQL-style equivalents.
    Directive(Directive),
    /// A triples statement.
    Triples(Triples),
}

/// `Document ::= statement*` (spec §3 `Document (N3)`).
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
