//! N-Triples serialization (spec §6.2): `S␣P␣O␣.\n` per line.

use super::ast::{Document, Literal, Object, Subject, Triple};
use crate::lex::escape;
use std::fmt::Write;

impl Document {
    /// Round-trippable textual form: one line per triple, `"S P O ."`,
    /// each line terminated by `\n`.
    pub fn to_text(&self) -> String {
        let mut out = String::new();
        for t in &self.0 {
            write_triple(&mut out, t);
            out.push_str(" .\n");
        }
        out
    }
}

pub(crate) fn write_triple(out: &mut String, t: &Triple) {
    write_subject(out, &t.subject);
    out.push(' ');
    write!(out, "{}", t.predicate).unwrap();
    out.push(' ');
    write_object(out, &t.object);
}

pub(crate) fn write_subject(out: &mut String, s: &Subject) {
    match s {
        Subject::Iri(iri) => write!(out, "{}", iri).unwrap(),
        Subject::BlankNode(bn) => write!(out, "{}", bn).unwrap(),
        Subject::QuotedTriple(t) => {
            out.push_str("<< ");
            write_triple(out, t);
            out.push_str(" >>");
        }
    }
}

pub(crate) fn write_object(out: &mut String, o: &Object) {
    match o {
        Object::Iri(iri) => write!(out, "{}", iri).unwrap(),
        Object::BlankNode(bn) => write!(out, "{}", bn).unwrap(),
        Object::Literal(lit) => write_literal(out, lit),
        Object::QuotedTriple(t) => {
            out.push_str("<< ");
            write_triple(out, t);
            out.push_str(" >>");
        }
    }
}

fn write_literal(out: &mut String, lit: &Literal) {
    write!(out, "\"{}\"", escape(&lit.lexical)).unwrap();
    if let Some(lang) = &lit.language {
        write!(out, "@{}", lang).unwrap();
    } else if let Some(dt) = &lit.datatype {
        write!(out, "^^{}", dt).unwrap();
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::config::ParserConfig;
    use crate::ntriples::parse::parse_document;

    #[test]
    fn minimal_roundtrip() {
        let cfg = ParserConfig::new();
        let text = "<http://a/s> <http://a/p> <http://a/o> .\n";
        let doc = parse_document(text, &cfg).unwrap();
        assert_eq!(doc.to_text(), text);
    }

    #[test]
    fn escapes_quote_and_backslash() {
        let cfg = ParserConfig::new();
        let text = "<http://a/s> <http://a/p> \"a\\\"b\\\\c\" .\n";
        let doc = parse_document(text, &cfg).unwrap();
        assert_eq!(doc.to_text(), text);
    }
}
