//! Turtle serialization (spec §6.2): re-emits the syntax tree itself
//! (not an evaluated document), compacting predicate-object lists with
//! `;`/`,` and `rdf:type` as `a`.

use super::ast::{BlankNode, Directive, Document, Iri, Literal, Object, PredicateObject, Statement, Subject, Triples, Verb};
use crate::lex;
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
            writeln!(out, "@prefix {}: <{}> .", prefix, escape_iriref(iri)).unwrap();
        }
        Statement::Directive(Directive::Base(iri)) => {
            writeln!(out, "@base <{}> .", escape_iriref(iri)).unwrap();
        }
        Statement::Triples(t) => {
            write_triples(out, t);
            out.push_str(" .\n");
        }
    }
}

pub(crate) fn write_triples(out: &mut String, t: &Triples) {
    match t {
        Triples::Subject {
            subject,
            predicate_objects,
        } => {
            write_subject(out, subject);
            out.push(' ');
            write_predicate_object_list(out, predicate_objects);
        }
        Triples::BlankNodePropertyList {
            property_list,
            predicate_objects,
        } => {
            write_blank_node_property_list(out, property_list);
            if !predicate_objects.is_empty() {
                out.push(' ');
                write_predicate_object_list(out, predicate_objects);
            }
        }
    }
}

pub(crate) fn write_predicate_object_list(out: &mut String, list: &[PredicateObject]) {
    for (i, po) in list.iter().enumerate() {
        if i > 0 {
            out.push_str(" ; ");
        }
        write_verb(out, &po.verb);
        out.push(' ');
        write_object_list(out, &po.objects);
    }
}

fn write_object_list(out: &mut String, objects: &[Object]) {
    for (i, o) in objects.iter().enumerate() {
        if i > 0 {
            out.push_str(", ");
        }
        write_object(out, o);
    }
}

fn write_verb(out: &mut String, verb: &Verb) {
    match verb {
        Verb::A => out.push('a'),
        Verb::Iri(iri) => write_iri(out, iri),
    }
}

pub(crate) fn write_iri(out: &mut String, iri: &Iri) {
    match iri {
        Iri::Ref(s) => {
            out.push('<');
            out.push_str(&escape_iriref(s));
            out.push('>');
        }
        Iri::Prefixed { prefix, local } => {
            out.push_str(prefix);
            out.push(':');
            out.push_str(local);
        }
    }
}

fn write_subject(out: &mut String, s: &Subject) {
    match s {
        Subject::Iri(iri) => write_iri(out, iri),
        Subject::BlankNode(bn) => write_blank_node(out, bn),
        Subject::Collection(items) => write_collection(out, items),
    }
}

fn write_object(out: &mut String, o: &Object) {
    match o {
        Object::Iri(iri) => write_iri(out, iri),
        Object::BlankNode(bn) => write_blank_node(out, bn),
        Object::Literal(lit) => write_literal(out, lit),
        Object::Collection(items) => write_collection(out, items),
        Object::BlankNodePropertyList(list) => write_blank_node_property_list(out, list),
    }
}

pub(crate) fn write_blank_node(out: &mut String, bn: &BlankNode) {
    match bn {
        BlankNode::Labeled(l) => {
            out.push_str("_:");
            out.push_str(l);
        }
        BlankNode::Anonymous => out.push_str("[]"),
    }
}

fn write_collection(out: &mut String, items: &[Object]) {
    out.push('(');
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        write_object(out, item);
    }
    out.push(')');
}

fn write_blank_node_property_list(out: &mut String, list: &[PredicateObject]) {
    out.push_str("[ ");
    write_predicate_object_list(out, list);
    out.push_str(" ]");
}

fn write_literal(out: &mut String, lit: &Literal) {
    match lit {
        Literal::String {
            value,
            language,
            datatype,
            ..
        } => {
            write!(out, "\"{}\"", lex::escape(value)).unwrap();
            if let Some(lang) = language {
                write!(out, "@{}", lang).unwrap();
            } else if let Some(dt) = datatype {
                out.push_str("^^");
                write_iri(out, dt);
            }
        }
        Literal::Numeric { lexical, .. } => out.push_str(lexical),
        Literal::Boolean(b) => out.push_str(if *b { "true" } else { "false" }),
    }
}

/// Re-escapes control characters and `IRIREF`-forbidden punctuation as
/// `\uXXXX`/`\UXXXXXXXX`; `Iri::Ref` bodies are stored already-unescaped
/// (spec §4.4), so round-tripping them back through `<...>` needs the
/// inverse of [`lex::unescape`].
fn escape_iriref(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        let cp = c as u32;
        if cp <= 0x20 || matches!(c, '<' | '>' | '"' | '{' | '}' | '|' | '^' | '`' | '\\') {
            if cp > 0xFFFF {
                write!(out, "\\U{:08X}", cp).unwrap();
            } else {
                write!(out, "\\u{:04X}", cp).unwrap();
            }
        } else {
            out.push(c);
        }
    }
    out
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::turtle::parse::parse_document;

    #[test]
    fn roundtrips_a_simple_triple() {
        let text = "<http://a/s> <http://a/p> <http://a/o> .\n";
        let doc = parse_document(text).unwrap();
        assert_eq!(doc.to_text(), text);
    }

    #[test]
    fn compacts_predicate_object_list() {
        let doc = parse_document("<http://a/s> <http://a/p> <http://a/o> ; a <http://a/t> .\n").unwrap();
        let text = doc.to_text();
        assert!(text.contains(" ; a "));
    }

    #[test]
    fn prefix_directive_roundtrips() {
        let text = "@prefix ex: <http://example/> .\n";
        let doc = parse_document(text).unwrap();
        assert_eq!(doc.to_text(), text);
    }
}
