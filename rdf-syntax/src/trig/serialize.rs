//! TriG serialization (spec §6.2): re-emits the syntax tree itself, with
//! named graph blocks written as `label { ... }` (spec §4.6).

use super::ast::{Block, Document, LabelOrSubject, Statement, TriplesOrGraphBody, WrappedGraph};
use crate::turtle::ast::Directive;
use crate::turtle::serialize::{write_blank_node, write_iri, write_predicate_object_list, write_triples};
use std::fmt::Write;

impl Document {
    /// Round-trippable textual form (spec §6.1 `Document.toString()`).
    pub fn to_text(&self) -> String {
        let mut out = String::new();
        for stmt in &self.0 {
            write_statement(&mut out, stmt);
        }
        out
    }
}

fn write_statement(out: &mut String, stmt: &Statement) {
    match stmt {
        Statement::Directive(Directive::Prefix { prefix, iri }) => {
            writeln!(out, "@prefix {}: <{}> .", prefix, iri).unwrap();
        }
        Statement::Directive(Directive::Base(iri)) => {
            writeln!(out, "@base <{}> .", iri).unwrap();
        }
        Statement::Block(block) => {
            write_block(out, block);
            out.push('\n');
        }
    }
}

fn write_block(out: &mut String, block: &Block) {
    match block {
        Block::WrappedGraph(triples) => write_wrapped_graph(out, triples),
        Block::Triples(t) => {
            write_triples(out, t);
            out.push_str(" .");
        }
        Block::Graph { label, graph } => {
            out.push_str("GRAPH ");
            write_label_or_subject(out, label);
            out.push(' ');
            write_wrapped_graph(out, graph);
        }
        Block::TriplesOrGraph(tog) => {
            write_label_or_subject(out, &tog.label);
            out.push(' ');
            match &tog.body {
                TriplesOrGraphBody::WrappedGraph(triples) => write_wrapped_graph(out, triples),
                TriplesOrGraphBody::PredicateObjectList(list) => {
                    write_predicate_object_list(out, list);
                    out.push_str(" .");
                }
            }
        }
    }
}

fn write_label_or_subject(out: &mut String, label: &LabelOrSubject) {
    match label {
        LabelOrSubject::Iri(iri) => write_iri(out, iri),
        LabelOrSubject::BlankNode(bn) => write_blank_node(out, bn),
    }
}

fn write_wrapped_graph(out: &mut String, triples: &WrappedGraph) {
    out.push_str("{ ");
    for t in triples {
        write_triples(out, t);
        out.push_str(" . ");
    }
    out.push('}');
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::trig::parse::parse_document;

    #[test]
    fn roundtrips_a_default_graph_triple() {
        let text = "<http://a/s> <http://a/p> <http://a/o> .\n";
        let doc = parse_document(text).unwrap();
        assert_eq!(doc.to_text(), text);
    }

    #[test]
    fn named_graph_block_roundtrips() {
        let text = "<http://a/g> { <http://a/s> <http://a/p> <http://a/o> . }\n";
        let doc = parse_document(text).unwrap();
        assert_eq!(doc.to_text(), text);
    }

    #[test]
    fn standalone_wrapped_graph_roundtrips() {
        let text = "{ <http://a/s> <http://a/p> <http://a/o> . }\n";
        let doc = parse_document(text).unwrap();
        assert_eq!(doc.to_text(), text);
    }

    #[test]
    fn graph_keyword_block_roundtrips() {
        let text = "GRAPH <http://a/g> { <http://a/s> <http://a/p> <http://a/o> . }\n";
        let doc = parse_document(text).unwrap();
        assert_eq!(doc.to_text(), text);
    }

    #[test]
    fn blank_node_labelled_triples_roundtrip() {
        let text = "_:g <http://a/p> <http://a/o> .\n";
        let doc = parse_document(text).unwrap();
        assert_eq!(doc.to_text(), text);
    }
}
