//! Structural TriG validation (spec §4.7): the same prefix-declaration
//! check Turtle does, extended to graph blocks. Unlike
//! [`crate::turtle::validate`]'s grounding source, `trig/validate.go`
//! already visits every statement, so no fixup is needed here.

use super::ast::{Block, Document, LabelOrSubject, Statement, TriplesOrGraphBody};
use crate::turtle::ast::Directive;
use crate::turtle::ast::Triples;
use crate::turtle::validate::{validate_iri, validate_predicate_object_list, validate_triples};
use std::collections::HashSet;

/// `true` iff every prefixed name anywhere in `doc`, including inside
/// graph blocks, resolves to a prefix declared earlier in the document.
pub fn validate_document(doc: &Document) -> bool {
    let mut prefixes = HashSet::new();
    for stmt in doc.statements() {
        match stmt {
            Statement::Directive(Directive::Prefix { prefix, .. }) => {
                prefixes.insert(prefix.clone());
            }
            Statement::Directive(Directive::Base(_)) => {}
            Statement::Block(block) => {
                if !validate_block(&prefixes, block) {
                    return false;
                }
            }
        }
    }
    true
}

fn validate_block(prefixes: &HashSet<String>, block: &Block) -> bool {
    match block {
        Block::WrappedGraph(triples) => validate_wrapped_graph(prefixes, triples),
        Block::Triples(t) => validate_triples(prefixes, t),
        Block::Graph { label, graph } => {
            let label_ok = match label {
                LabelOrSubject::Iri(iri) => validate_iri(prefixes, iri),
                LabelOrSubject::BlankNode(_) => true,
            };
            label_ok && validate_wrapped_graph(prefixes, graph)
        }
        Block::TriplesOrGraph(tog) => {
            let label_ok = match &tog.label {
                LabelOrSubject::Iri(iri) => validate_iri(prefixes, iri),
                LabelOrSubject::BlankNode(_) => true,
            };
            label_ok
                && match &tog.body {
                    TriplesOrGraphBody::WrappedGraph(triples) => validate_wrapped_graph(prefixes, triples),
                    TriplesOrGraphBody::PredicateObjectList(list) => {
                        validate_predicate_object_list(prefixes, list)
                    }
                }
        }
    }
}

fn validate_wrapped_graph(prefixes: &HashSet<String>, triples: &[Triples]) -> bool {
    triples.iter().all(|t| validate_triples(prefixes, t))
}
