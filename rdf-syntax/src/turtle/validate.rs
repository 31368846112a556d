//! Structural Turtle validation (spec §4.7): checks that every prefixed
//! name used anywhere in the document refers to a prefix declared
//! somewhere in it, without expanding collections or blank-node
//! property lists into triples. `validateDocument` visits every
//! statement, not only the first — the original grammar's evaluator
//! this is grounded on returns from inside its statement loop after the
//! first `Triples` production, which would silently stop validating the
//! rest of the document; that looks like an oversight rather than
//! intended behavior, so it is not reproduced here.

use super::ast::{BlankNode, Directive, Document, Iri, Literal, Object, PredicateObject, Statement, Subject, Triples, Verb};
use std::collections::HashSet;

/// `true` iff every prefixed name in `doc` resolves to a prefix declared
/// earlier in the same document (spec §4.7, §6.1 `validateDocument`).
pub fn validate_document(doc: &Document) -> bool {
    let mut prefixes = HashSet::new();
    for stmt in doc.statements() {
        match stmt {
            Statement::Directive(Directive::Prefix { prefix, .. }) => {
                prefixes.insert(prefix.clone());
            }
            Statement::Directive(Directive::Base(_)) => {}
            Statement::Triples(t) => {
                if !validate_triples(&prefixes, t) {
                    return false;
                }
            }
        }
    }
    true
}

pub(crate) fn validate_triples(prefixes: &HashSet<String>, t: &Triples) -> bool {
    match t {
        Triples::Subject {
            subject,
            predicate_objects,
        } => validate_subject(prefixes, subject) && validate_predicate_object_list(prefixes, predicate_objects),
        Triples::BlankNodePropertyList {
            property_list,
            predicate_objects,
        } => {
            validate_predicate_object_list(prefixes, property_list)
                && validate_predicate_object_list(prefixes, predicate_objects)
        }
    }
}

pub(crate) fn validate_subject(prefixes: &HashSet<String>, s: &Subject) -> bool {
    match s {
        Subject::Iri(iri) => validate_iri(prefixes, iri),
        Subject::BlankNode(bn) => validate_blank_node(bn),
        Subject::Collection(items) => items.iter().all(|o| validate_object(prefixes, o)),
    }
}

pub(crate) fn validate_object(prefixes: &HashSet<String>, o: &Object) -> bool {
    match o {
        Object::Iri(iri) => validate_iri(prefixes, iri),
        Object::BlankNode(bn) => validate_blank_node(bn),
        Object::Literal(lit) => validate_literal(prefixes, lit),
        Object::Collection(items) => items.iter().all(|o| validate_object(prefixes, o)),
        Object::BlankNodePropertyList(list) => validate_predicate_object_list(prefixes, list),
    }
}

pub(crate) fn validate_blank_node(_bn: &BlankNode) -> bool {
    true
}

pub(crate) fn validate_literal(prefixes: &HashSet<String>, lit: &Literal) -> bool {
    match lit {
        Literal::String { datatype: Some(dt), .. } => validate_iri(prefixes, dt),
        _ => true,
    }
}

pub(crate) fn validate_predicate_object_list(prefixes: &HashSet<String>, list: &[PredicateObject]) -> bool {
    list.iter().all(|po| validate_verb(prefixes, &po.verb) && po.objects.iter().all(|o| validate_object(prefixes, o)))
}

pub(crate) fn validate_verb(prefixes: &HashSet<String>, verb: &Verb) -> bool {
    match verb {
        Verb::A => true,
        Verb::Iri(iri) => validate_iri(prefixes, iri),
    }
}

pub(crate) fn validate_iri(prefixes: &HashSet<String>, iri: &Iri) -> bool {
    match iri {
        Iri::Ref(_) => true,
        Iri::Prefixed { prefix, .. } => prefixes.contains(prefix),
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::turtle::parse::parse_document;

    #[test]
    fn declared_prefix_is_valid() {
        let doc = parse_document("@prefix ex: <http://example/> .\nex:s ex:p ex:o .\n").unwrap();
        assert!(validate_document(&doc));
    }

    #[test]
    fn undeclared_prefix_is_invalid() {
        let doc = parse_document("ex:s ex:p ex:o .\n").unwrap();
        assert!(!validate_document(&doc));
    }

    #[test]
    fn checks_every_statement_not_only_the_first() {
        let doc = parse_document(
            "@prefix ex: <http://example/> .\nex:s ex:p ex:o .\nex:s2 bad:p ex:o2 .\n",
        )
        .unwrap();
        assert!(!validate_document(&doc));
    }

    #[test]
    fn collection_and_property_list_members_are_checked() {
        let doc = parse_document("@prefix ex: <http://example/> .\nex:s ex:p ( ex:a bad:b ) .\n").unwrap();
        assert!(!validate_document(&doc));
    }
}
