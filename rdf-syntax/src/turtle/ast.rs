//! The Turtle data model (spec §3, §4.4): a syntax tree only, with no
//! prefix/base resolution or blank-node minting performed yet — that is
//! [`super::evaluate`]'s job.

/// An IRI as written in the source: either already absolute/relative
/// (`IRIREF`), or a `prefix:local` pair awaiting resolution against a
/// declared namespace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Iri {
    /// `<...>`, already unescaped.
    Ref(String),
    /// `prefix:local`, both already unescaped.
    Prefixed { prefix: String, local: String },
}

/// `BlankNode ::= BLANK_NODE_LABEL | ANON`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BlankNode {
    /// `_:label`.
    Labeled(String),
    /// `[]`, minting a fresh blank node at evaluation time.
    Anonymous,
}

/// The three `NumericLiteral` shapes, kept distinct so the evaluator can
/// assign a datatype from the AST tag rather than by re-lexing the value
/// (spec §4.5).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumericKind {
    /// `INTEGER`.
    Integer,
    /// `DECIMAL`.
    Decimal,
    /// `DOUBLE`.
    Double,
}

/// `RDFLiteral | NumericLiteral | BooleanLiteral`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Literal {
    /// A quoted string literal, with an optional language tag or datatype.
    String {
        /// The literal's lexical content, already escape-resolved to
        /// final Unicode text (spec §4.5.1 step 1/3 still applies at
        /// evaluation time for re-escaping into the output form).
        value: String,
        /// Whether the triple-quoted (`"""`/`'''`) form was used.
        multiline: bool,
        /// Whether the source used `'`/`'''` rather than `"`/`"""`.
        single_quote: bool,
        /// The `@lang` tag, if any.
        language: Option<String>,
        /// The `^^datatype` IRI, if any.
        datatype: Option<Iri>,
    },
    /// `INTEGER | DECIMAL | DOUBLE`, lexical form kept verbatim.
    Numeric {
        /// The literal exactly as written.
        lexical: String,
        /// Which of the three numeric productions matched.
        kind: NumericKind,
    },
    /// `'true' | 'false'`.
    Boolean(bool),
}

/// `Verb ::= IRI | 'a'`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verb {
    /// An ordinary IRI predicate.
    Iri(Iri),
    /// The `a` keyword, shorthand for `rdf:type`.
    A,
}

/// `Subject ::= IRI | BlankNode | Collection`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Subject {
    /// An IRI subject.
    Iri(Iri),
    /// A blank-node subject.
    BlankNode(BlankNode),
    /// `'(' Object* ')'`.
    Collection(Vec<Object>),
}

/// `Object ::= Literal | IRI | BlankNode | Collection | BlankNodePropertyList`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Object {
    /// An IRI object.
    Iri(Iri),
    /// A blank-node object.
    BlankNode(BlankNode),
    /// A literal object.
    Literal(Literal),
    /// `'(' Object* ')'`.
    Collection(Vec<Object>),
    /// `'[' PredicateObjectList ']'`; the list must not be empty (spec
    /// §4.5 `evaluateObject`).
    BlankNodePropertyList(Vec<PredicateObject>),
}

/// `PredicateObject ::= Verb ObjectList`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PredicateObject {
    /// The predicate.
    pub verb: Verb,
    /// The objects sharing this predicate.
    pub objects: Vec<Object>,
}

/// `Triples ::= Subject PredicateObjectList | BlankNodePropertyList PredicateObjectList?`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Triples {
    /// An ordinary subject-led statement.
    Subject {
        /// The statement's subject.
        subject: Subject,
        /// The statement's predicate-object pairs.
        predicate_objects: Vec<PredicateObject>,
    },
    /// A statement whose subject position is itself a property list; the
    /// property list is evaluated rooted at a freshly minted blank node,
    /// which also becomes the subject of the optional trailing
    /// `PredicateObjectList` (spec §4.5 `evaluateTriple`).
    BlankNodePropertyList {
        /// The subject-position property list.
        property_list: Vec<PredicateObject>,
        /// The optional trailing predicate-object pairs, rooted at the
        /// same freshly minted blank node.
        predicate_objects: Vec<PredicateObject>,
    },
}

/// `PrefixID | Base | SparqlPrefix | SparqlBase`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Directive {
    /// `@prefix prefix: <iri> .` or `PREFIX prefix: <iri>`.
    Prefix { prefix: String, iri: String },
    /// `@base <iri> .` or `BASE <iri>`.
    Base(String),
}

/// One top-level production of a Turtle document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Statement {
    /// `@prefix`/`@base`/SPARQL-style equivalents.
    Directive(Directive),
    /// An ordinary triples statement.
    Triples(Triples),
}

/// `Document ::= statement*` (spec §3 `Document (Turtle)`).
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
