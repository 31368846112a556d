//! Turtle evaluation (spec §4.5): resolves prefixes and the base IRI,
//! mints blank nodes for anonymous nodes, collections and blank-node
//! property lists, and lowers the syntax tree to a plain N-Triples
//! document.
//!
//! Blank nodes minted here are labelled `b{n}`/`el{n}` with `n` counting
//! up from 1 — a different, unrelated numbering from the 0-indexed
//! renaming [`crate::ntriples::canon`] performs for equality checks.

use super::ast::{
    BlankNode as AstBlankNode, Directive, Document, Iri, Literal as AstLiteral, NumericKind,
    Object as AstObject, PredicateObject, Statement, Subject as AstSubject, Triples, Verb,
};
use crate::config::ParserConfig;
use crate::error::{Error, Result};
use crate::lex::ABSOLUTE_IRI;
use crate::ntriples as nt;
use crate::ntriples::{rdf, xsd};
use std::collections::HashMap;

/// Mutable evaluation state threaded through one document: the resolved
/// base IRI, declared prefixes, and the two blank-node counters (spec
/// §4.5 `Context`).
///
/// `pub(crate)` so [`crate::trig::evaluate`] can embed one: TriG shares
/// this exact counter sequence with Turtle rather than keeping its own
/// (grounded on `trig/context.go`'s `Context{*ttl.Context}` embedding).
pub(crate) struct Context {
    pub(crate) base: String,
    pub(crate) prefixes: HashMap<String, String>,
    bn_index: u64,
    el_index: u64,
}

impl Context {
    pub(crate) fn new(base: impl Into<String>) -> Self {
        Context {
            base: base.into(),
            prefixes: HashMap::new(),
            bn_index: 0,
            el_index: 0,
        }
    }

    /// Mints the next `_:b{n}` blank node, for `[]` and
    /// `BlankNodePropertyList` subjects/objects.
    pub(crate) fn bn(&mut self) -> nt::BlankNode {
        self.bn_index += 1;
        nt::BlankNode::new(format!("b{}", self.bn_index))
    }

    /// Mints the next `_:el{n}` blank node, one per collection element.
    pub(crate) fn el(&mut self) -> nt::BlankNode {
        self.el_index += 1;
        nt::BlankNode::new(format!("el{}", self.el_index))
    }
}

/// One evaluated RDF term, not yet committed to subject or object
/// position. Collections and blank-node property lists only ever
/// produce an IRI (`rdf:nil`) or a blank node as their head term, never
/// a literal, so [`Term::into_subject`] cannot fail in practice.
pub(crate) enum Term {
    Iri(nt::IriRef),
    BlankNode(nt::BlankNode),
    Literal(nt::Literal),
}

impl Term {
    pub(crate) fn into_object(self) -> nt::Object {
        match self {
            Term::Iri(iri) => nt::Object::Iri(iri),
            Term::BlankNode(bn) => nt::Object::BlankNode(bn),
            Term::Literal(lit) => nt::Object::Literal(lit),
        }
    }

    pub(crate) fn into_subject(self) -> nt::Subject {
        match self {
            Term::Iri(iri) => nt::Subject::Iri(iri),
            Term::BlankNode(bn) => nt::Subject::BlankNode(bn),
            Term::Literal(_) => unreachable!("collection/property-list heads are never literals"),
        }
    }
}

/// Lowers a Turtle document to a sorted N-Triples document (spec §4.5,
/// §5 ordering guarantee), resolving every directive in source order
/// before the triples that follow it.
pub fn evaluate_document(doc: &Document, config: &ParserConfig) -> Result<nt::Document> {
    let mut ctx = Context::new(config.base.clone().unwrap_or_default());
    let mut triples = Vec::new();
    for stmt in doc.statements() {
        match stmt {
            Statement::Directive(Directive::Base(iri)) => {
                ctx.base = resolve_iri_text(iri, &ctx.base, config)?;
            }
            Statement::Directive(Directive::Prefix { prefix, iri }) => {
                let resolved = resolve_iri_text(iri, &ctx.base, config)?;
                ctx.prefixes.insert(prefix.clone(), resolved);
            }
            Statement::Triples(t) => triples.extend(evaluate_triple(&mut ctx, t, config)?),
        }
    }
    triples.sort_by(|a, b| serialized(a).cmp(&serialized(b)));
    Ok(nt::Document(triples))
}

fn serialized(t: &nt::Triple) -> String {
    let mut out = String::new();
    nt::serialize::write_triple(&mut out, t);
    out
}

/// Resolves an already-unescaped IRI body against the current base
/// (spec §4.5 `evaluateIRI`: "if the value has no `:`, prepend `base`
/// truncated at the last `/`, unless `base` already ends in `/` or
/// `#`"), then validates the result as absolute when `config.validate_iri`.
pub(crate) fn resolve_iri_text(raw: &str, base: &str, config: &ParserConfig) -> Result<String> {
    let resolved = resolve_against_base(raw, base);
    if config.validate_iri && !ABSOLUTE_IRI.is_match(&resolved) {
        return Err(Error::InvalidIri(resolved));
    }
    Ok(resolved)
}

fn resolve_against_base(value: &str, base: &str) -> String {
    if value.contains(':') || base.is_empty() {
        return value.to_owned();
    }
    if base.ends_with('/') || base.ends_with('#') {
        format!("{}{}", base, value)
    } else if let Some(idx) = base.rfind('/') {
        format!("{}{}", &base[..=idx], value)
    } else {
        value.to_owned()
    }
}

pub(crate) fn evaluate_iri(ctx: &Context, iri: &Iri, config: &ParserConfig) -> Result<nt::IriRef> {
    match iri {
        Iri::Ref(raw) => resolve_iri_text(raw, &ctx.base, config).map(nt::IriRef::new),
        Iri::Prefixed { prefix, local } => {
            let ns = ctx
                .prefixes
                .get(prefix)
                .ok_or_else(|| Error::UnknownPrefix(prefix.clone()))?;
            let resolved = format!("{}{}", ns, local);
            if config.validate_iri && !ABSOLUTE_IRI.is_match(&resolved) {
                return Err(Error::InvalidIri(resolved));
            }
            Ok(nt::IriRef::new(resolved))
        }
    }
}

pub(crate) fn evaluate_verb(ctx: &Context, verb: &Verb, config: &ParserConfig) -> Result<nt::IriRef> {
    match verb {
        Verb::A => Ok(nt::IriRef::new(rdf::TYPE)),
        Verb::Iri(iri) => evaluate_iri(ctx, iri, config),
    }
}

pub(crate) fn evaluate_blank_node(ctx: &mut Context, bn: &AstBlankNode) -> nt::BlankNode {
    match bn {
        AstBlankNode::Labeled(label) => nt::BlankNode::new(label.clone()),
        AstBlankNode::Anonymous => ctx.bn(),
    }
}

/// Spec §4.5.1 string literal evaluation. `value` already holds the
/// resolved Unicode text (`lex::unescape` ran while parsing the AST), so
/// steps 1-3's re-escaping into canonical lexical form is deferred to
/// `lex::escape`, run by each dialect's serializer against `lexical`
/// rather than duplicated here.
pub(crate) fn evaluate_literal(ctx: &Context, lit: &AstLiteral, config: &ParserConfig) -> Result<nt::Literal> {
    match lit {
        AstLiteral::String {
            value,
            language,
            datatype,
            ..
        } => {
            if let Some(lang) = language {
                Ok(nt::Literal::with_language(value.clone(), lang.clone()))
            } else if let Some(dt) = datatype {
                let iri = evaluate_iri(ctx, dt, config)?;
                Ok(nt::Literal::with_datatype(value.clone(), iri))
            } else {
                Ok(nt::Literal::plain(value.clone()))
            }
        }
        AstLiteral::Numeric { lexical, kind } => {
            let dt = match kind {
                NumericKind::Integer => xsd::INTEGER,
                NumericKind::Decimal => xsd::DECIMAL,
                NumericKind::Double => xsd::DOUBLE,
            };
            Ok(nt::Literal::with_datatype(lexical.clone(), nt::IriRef::new(dt)))
        }
        AstLiteral::Boolean(b) => Ok(nt::Literal::with_datatype(
            if *b { "true" } else { "false" },
            nt::IriRef::new(xsd::BOOLEAN),
        )),
    }
}

/// Evaluates one `Object` production to its head term plus any
/// auxiliary triples a collection or blank-node property list needed
/// to mint (spec §4.5 `evaluateObject`).
pub(crate) fn evaluate_object(
    ctx: &mut Context,
    obj: &AstObject,
    config: &ParserConfig,
) -> Result<(Term, Vec<nt::Triple>)> {
    match obj {
        AstObject::Iri(iri) => Ok((Term::Iri(evaluate_iri(ctx, iri, config)?), Vec::new())),
        AstObject::BlankNode(bn) => Ok((Term::BlankNode(evaluate_blank_node(ctx, bn)), Vec::new())),
        AstObject::Literal(lit) => Ok((Term::Literal(evaluate_literal(ctx, lit, config)?), Vec::new())),
        AstObject::Collection(items) => evaluate_collection(ctx, items, config),
        AstObject::BlankNodePropertyList(list) => evaluate_blank_node_property_list(ctx, list, config),
    }
}

/// `rdf:nil` for an empty collection; otherwise a chain of fresh
/// `el{n}` nodes linked by `rdf:first`/`rdf:rest`, terminated by
/// `rdf:nil` (spec §4.5 `evaluateCollection`).
pub(crate) fn evaluate_collection(
    ctx: &mut Context,
    items: &[AstObject],
    config: &ParserConfig,
) -> Result<(Term, Vec<nt::Triple>)> {
    if items.is_empty() {
        return Ok((Term::Iri(nt::IriRef::new(rdf::NIL)), Vec::new()));
    }
    let mut triples = Vec::new();
    let mut head = None;
    let mut prev: Option<nt::BlankNode> = None;
    for item in items {
        let node = ctx.el();
        if head.is_none() {
            head = Some(node.clone());
        }
        if let Some(p) = prev.take() {
            triples.push(nt::Triple {
                subject: nt::Subject::BlankNode(p),
                predicate: nt::IriRef::new(rdf::REST),
                object: nt::Object::BlankNode(node.clone()),
            });
        }
        let (term, aux) = evaluate_object(ctx, item, config)?;
        triples.extend(aux);
        triples.push(nt::Triple {
            subject: nt::Subject::BlankNode(node.clone()),
            predicate: nt::IriRef::new(rdf::FIRST),
            object: term.into_object(),
        });
        prev = Some(node);
    }
    triples.push(nt::Triple {
        subject: nt::Subject::BlankNode(prev.unwrap()),
        predicate: nt::IriRef::new(rdf::REST),
        object: nt::Object::Iri(nt::IriRef::new(rdf::NIL)),
    });
    Ok((Term::BlankNode(head.unwrap()), triples))
}

/// A fresh blank node rooting the `PredicateObjectList` (spec §4.5
/// `evaluateBlankNodePropertyList`).
pub(crate) fn evaluate_blank_node_property_list(
    ctx: &mut Context,
    list: &[PredicateObject],
    config: &ParserConfig,
) -> Result<(Term, Vec<nt::Triple>)> {
    let node = ctx.bn();
    let triples = evaluate_predicate_object_list(ctx, &nt::Subject::BlankNode(node.clone()), list, config)?;
    Ok((Term::BlankNode(node), triples))
}

pub(crate) fn evaluate_predicate_object_list(
    ctx: &mut Context,
    subject: &nt::Subject,
    list: &[PredicateObject],
    config: &ParserConfig,
) -> Result<Vec<nt::Triple>> {
    let mut triples = Vec::new();
    for po in list {
        let predicate = evaluate_verb(ctx, &po.verb, config)?;
        for obj in &po.objects {
            let (term, aux) = evaluate_object(ctx, obj, config)?;
            triples.extend(aux);
            triples.push(nt::Triple {
                subject: subject.clone(),
                predicate: predicate.clone(),
                object: term.into_object(),
            });
        }
    }
    Ok(triples)
}

/// Evaluates one top-level `Triples` production (spec §4.5
/// `evaluateTriple`). An empty `Collection` subject produces no triples
/// at all and silently discards any trailing `PredicateObjectList`.
pub(crate) fn evaluate_triple(ctx: &mut Context, t: &Triples, config: &ParserConfig) -> Result<Vec<nt::Triple>> {
    match t {
        Triples::Subject {
            subject: AstSubject::Collection(items),
            ..
        } if items.is_empty() => Ok(Vec::new()),
        Triples::Subject {
            subject: AstSubject::Collection(items),
            predicate_objects,
        } => {
            let (term, mut triples) = evaluate_collection(ctx, items, config)?;
            let subject = term.into_subject();
            triples.extend(evaluate_predicate_object_list(ctx, &subject, predicate_objects, config)?);
            Ok(triples)
        }
        Triples::Subject {
            subject: AstSubject::Iri(iri),
            predicate_objects,
        } => {
            let subject = nt::Subject::Iri(evaluate_iri(ctx, iri, config)?);
            evaluate_predicate_object_list(ctx, &subject, predicate_objects, config)
        }
        Triples::Subject {
            subject: AstSubject::BlankNode(bn),
            predicate_objects,
        } => {
            let subject = nt::Subject::BlankNode(evaluate_blank_node(ctx, bn));
            evaluate_predicate_object_list(ctx, &subject, predicate_objects, config)
        }
        Triples::BlankNodePropertyList {
            property_list,
            predicate_objects,
        } => {
            let subject = nt::Subject::BlankNode(ctx.bn());
            let mut triples = evaluate_predicate_object_list(ctx, &subject, property_list, config)?;
            triples.extend(evaluate_predicate_object_list(ctx, &subject, predicate_objects, config)?);
            Ok(triples)
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::turtle::parse::parse_document;

    fn eval(text: &str) -> nt::Document {
        let doc = parse_document(text).unwrap();
        evaluate_document(&doc, &ParserConfig::new()).unwrap()
    }

    #[test]
    fn prefix_resolution() {
        let doc = eval("@prefix ex: <http://example/> .\nex:s ex:p ex:o .\n");
        assert_eq!(doc.0.len(), 1);
        assert_eq!(doc.0[0].to_string(), "<http://example/s> <http://example/p> <http://example/o>");
    }

    #[test]
    fn a_is_rdf_type() {
        let doc = eval("@prefix ex: <http://example/> .\nex:s a ex:Thing .\n");
        assert_eq!(doc.0[0].predicate.0, rdf::TYPE);
    }

    #[test]
    fn base_relative_iri_resolution() {
        let doc = eval("@base <http://example/base/> .\n<s> <http://example/p> <o> .\n");
        assert!(doc.0[0].subject.to_string().contains("http://example/base/s"));
    }

    #[test]
    fn unknown_prefix_is_an_error() {
        let doc = parse_document("ex:s ex:p ex:o .\n").unwrap();
        assert!(evaluate_document(&doc, &ParserConfig::new()).is_err());
    }

    #[test]
    fn anonymous_blank_nodes_are_minted_in_order() {
        let doc = eval("<http://e/p> <http://e/q> [ <http://e/a> [ <http://e/b> <http://e/c> ] ] .\n");
        let labels: Vec<_> = doc
            .0
            .iter()
            .filter_map(|t| match &t.subject {
                nt::Subject::BlankNode(bn) => Some(bn.0.clone()),
                _ => None,
            })
            .collect();
        assert!(labels.contains(&"b1".to_string()));
        assert!(labels.contains(&"b2".to_string()));
    }

    #[test]
    fn collection_expands_to_first_rest_nil() {
        let doc = eval("<http://e/s> <http://e/p> ( <http://e/a> <http://e/b> ) .\n");
        let has_nil = doc.0.iter().any(|t| match &t.object {
            nt::Object::Iri(i) => i.0 == rdf::NIL,
            _ => false,
        });
        assert!(has_nil);
        assert!(doc.0.iter().any(|t| t.predicate.0 == rdf::FIRST));
        assert!(doc.0.iter().any(|t| t.predicate.0 == rdf::REST));
    }

    #[test]
    fn empty_collection_as_object_is_rdf_nil() {
        let doc = eval("<http://e/s> <http://e/p> () .\n");
        assert_eq!(doc.0.len(), 1);
        match &doc.0[0].object {
            nt::Object::Iri(i) => assert_eq!(i.0, rdf::NIL),
            _ => panic!("expected rdf:nil"),
        }
    }

    #[test]
    fn empty_collection_as_subject_produces_no_triples() {
        let doc = eval("() <http://e/p> <http://e/o> .\n");
        assert!(doc.0.is_empty());
    }

    #[test]
    fn language_tagged_literal() {
        let doc = eval("<http://e/s> <http://e/p> \"bonjour\"@fr .\n");
        match &doc.0[0].object {
            nt::Object::Literal(lit) => assert_eq!(lit.language.as_deref(), Some("fr")),
            _ => panic!("expected literal"),
        }
    }

    #[test]
    fn numeric_literal_gets_xsd_datatype() {
        let doc = eval("<http://e/s> <http://e/p> 42 .\n");
        match &doc.0[0].object {
            nt::Object::Literal(lit) => assert_eq!(lit.datatype.as_ref().unwrap().0, xsd::INTEGER),
            _ => panic!("expected literal"),
        }
    }

    #[test]
    fn evaluated_literal_carries_resolved_unicode_text_not_source_escapes() {
        let doc = eval(r#"<http://e/s> <http://e/p> "a\tbé" ."#);
        match &doc.0[0].object {
            nt::Object::Literal(lit) => assert_eq!(lit.lexical, "a\tb\u{00E9}"),
            _ => panic!("expected literal"),
        }
    }

    #[test]
    fn evaluated_literal_reescapes_to_canonical_form_on_serialization() {
        let doc = eval(r#"<http://e/s> <http://e/p> "a\tbé" ."#);
        assert_eq!(doc.to_text(), "<http://e/s> <http://e/p> \"a\\tb\\u00E9\" .\n");
    }

    #[test]
    fn bare_backspace_and_form_feed_roundtrip_to_their_uchar_form() {
        let doc = eval("<http://e/s> <http://e/p> \"a\u{0008}b\u{000C}\" .\n");
        assert_eq!(doc.to_text(), "<http://e/s> <http://e/p> \"a\\u0008b\\u000C\" .\n");
    }
}
