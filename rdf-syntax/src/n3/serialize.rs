//! N3 serialization (spec §6.2): re-emits the syntax tree, one
//! `.`-terminated statement per line, recursing into nested formulas.

use super::ast::{
    Directive, Document, Path, PathItem, PathOp, Predicate, PredicateObject, Statement, Triples, Verb,
};
use crate::turtle::ast::Literal;
use crate::turtle::serialize::{write_blank_node, write_iri};
use std::fmt::Write;

impl Document {
    /// Round-trippable textual form (spec §6.1 `Document.toString()`).
    pub fn to_text(&self) -> String {
        let mut out = String::new();
        write_statements(&mut out, &self.0);
        out
    }
}

fn write_statements(out: &mut String, statements: &[Statement]) {
    for stmt in statements {
        write_statement(out, stmt);
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
        Statement::Triples(t) => {
            write_triples(out, t);
            out.push_str(" .\n");
        }
    }
}

fn write_triples(out: &mut String, t: &Triples) {
    write_path(out, &t.subject);
    if !t.predicate_objects.is_empty() {
        out.push(' ');
        write_predicate_object_list(out, &t.predicate_objects);
    }
}

fn write_predicate_object_list(out: &mut String, list: &[PredicateObject]) {
    for (i, po) in list.iter().enumerate() {
        if i > 0 {
            out.push_str(" ; ");
        }
        write_verb(out, &po.verb);
        out.push(' ');
        for (j, o) in po.objects.iter().enumerate() {
            if j > 0 {
                out.push_str(", ");
            }
            write_path(out, o);
        }
    }
}

fn write_verb(out: &mut String, verb: &Verb) {
    match verb {
        Verb::A => out.push('a'),
        Verb::ReverseImplies => out.push_str("<="),
        Verb::Implies => out.push_str("=>"),
        Verb::SameAs => out.push('='),
        Verb::Has(p) => {
            out.push_str("has ");
            write_path(out, p);
        }
        Verb::IsOf(p) => {
            out.push_str("is ");
            write_path(out, p);
            out.push_str(" of");
        }
        Verb::Predicate(Predicate::Forward(p)) => write_path(out, p),
        Verb::Predicate(Predicate::Inverse(p)) => {
            out.push_str("<- ");
            write_path(out, p);
        }
    }
}

fn write_path(out: &mut String, path: &Path) {
    write_path_item(out, &path.item);
    if let Some((op, next)) = &path.next {
        out.push(match op {
            PathOp::Forward => '!',
            PathOp::Reverse => '^',
        });
        write_path(out, next);
    }
}

fn write_path_item(out: &mut String, item: &PathItem) {
    match item {
        PathItem::Iri(iri) => write_iri(out, iri),
        PathItem::BlankNode(bn) => write_blank_node(out, bn),
        PathItem::QuickVar(name) => {
            out.push('?');
            out.push_str(name);
        }
        PathItem::Collection(items) => {
            out.push('(');
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    out.push(' ');
                }
                write_path(out, item);
            }
            out.push(')');
        }
        PathItem::BlankNodePropertyList(list) => {
            out.push_str("[ ");
            write_predicate_object_list(out, list);
            out.push_str(" ]");
        }
        PathItem::IriPropertyList { iri, list } => {
            out.push_str("[ id ");
            write_iri(out, iri);
            out.push(' ');
            write_predicate_object_list(out, list);
            out.push_str(" ]");
        }
        PathItem::Literal(lit) => write_literal(out, lit),
        PathItem::Formula(statements) => {
            out.push_str("{ ");
            write_statements(out, statements);
            out.push('}');
        }
    }
}

fn write_literal(out: &mut String, lit: &Literal) {
    match lit {
        Literal::String {
            value,
            language,
            datatype,
            ..
        } => {
            write!(out, "\"{}\"", crate::lex::escape(value)).unwrap();
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

#[cfg(test)]
mod test {
    use super::*;
    use crate::n3::parse::parse_document;

    #[test]
    fn roundtrips_a_simple_triple() {
        let text = "<http://a/s> <http://a/p> <http://a/o> .\n";
        let doc = parse_document(text).unwrap();
        assert_eq!(doc.to_text(), text);
    }

    #[test]
    fn quick_var_roundtrips() {
        let text = "?x <http://a/p> ?y .\n";
        let doc = parse_document(text).unwrap();
        assert_eq!(doc.to_text(), text);
    }

    #[test]
    fn formula_roundtrips() {
        let text = "{ ?x <http://a/p> ?y . } => { ?y <http://a/q> ?x . } .\n";
        let doc = parse_document(text).unwrap();
        assert_eq!(doc.to_text(), text);
    }

    #[test]
    fn bare_path_statement_roundtrips() {
        let text = "?x .\n";
        let doc = parse_document(text).unwrap();
        assert_eq!(doc.to_text(), text);
    }
}
