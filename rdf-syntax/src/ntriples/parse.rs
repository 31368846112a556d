//! N-Triples grammar and AST construction (spec §4.2).
//!
//! ```text
//! ntriplesDoc ::= triple? (EOL triple?)*
//! triple      ::= subject predicate object '.'
//! subject     ::= IRIREF | BLANK_NODE_LABEL | quotedTriple
//! predicate   ::= IRIREF
//! object      ::= IRIREF | BLANK_NODE_LABEL | literal | quotedTriple
//! literal     ::= STRING_LITERAL_QUOTE (LANGTAG | '^^' IRIREF)?
//! quotedTriple ::= '<<' ws subject ws predicate ws object ws '>>'
//! ```
//!
//! RDF-star (spec §4.8) is folded directly into `subject`/`object` rather
//! than kept as a separate extension module, since the grammar change is
//! unconditional here (both productions always admit `quotedTriple`).

use super::ast::{BlankNode, Document, IriRef, Literal, Object, Subject, Triple};
use crate::config::ParserConfig;
use crate::error::{Error, PResult, Result};
use crate::lex::{self, blank_node_label, IRIREF, LANGTAG, NT_EOL, NT_WS, STRING_LITERAL_QUOTE};
use crate::util::parse_regex;
use nom::branch::alt;
use nom::bytes::complete::tag;
use nom::combinator::{map, map_res, opt};
use nom::sequence::{preceded, tuple};
use nom::Err as NomErr;

/// Parses a complete N-Triples document.
pub fn parse_document(text: &str, config: &ParserConfig) -> Result<Document> {
    let mut rest = text;
    let mut triples = Vec::new();

    let (r, _) = leading_ws(rest).map_err(to_owned_err)?;
    rest = r;
    while !rest.is_empty() {
        match triple(rest, config) {
            Ok((r, t)) => {
                triples.push(t);
                rest = r;
            }
            Err(e) => return Err(to_owned_err(e)),
        }
        let (r, _) = eol_or_end(rest).map_err(to_owned_err)?;
        rest = r;
    }
    Ok(Document(triples))
}

fn to_owned_err(e: NomErr<Error>) -> Error {
    match e {
        NomErr::Error(err) | NomErr::Failure(err) => err,
        NomErr::Incomplete(_) => Error::syntax("", "more input"),
    }
}

fn leading_ws(i: &str) -> PResult<&str> {
    map(opt(parse_regex(&NT_EOL, "end of line")), |_| ())(i).map(|(r, _)| (r, ""))
}

fn eol_or_end(i: &str) -> PResult<&str> {
    if i.is_empty() {
        return Ok((i, ""));
    }
    parse_regex(&NT_EOL, "end of line")(i)
}

fn ws1(i: &str) -> PResult<&str> {
    parse_regex(&NT_WS, "whitespace")(i)
}

fn ws0(i: &str) -> PResult<&str> {
    Ok(match parse_regex(&NT_WS, "whitespace")(i) {
        Ok(ok) => ok,
        Err(_) => (i, ""),
    })
}

/// Parses one `triple ::= subject predicate object '.'`.
pub fn triple<'a>(i: &'a str, config: &ParserConfig) -> PResult<'a, Triple> {
    let (i, s) = subject(i, config)?;
    let (i, _) = ws1(i)?;
    let (i, p) = predicate(i, config)?;
    let (i, _) = ws1(i)?;
    let (i, o) = object(i, config)?;
    let (i, _) = ws0(i)?;
    let (i, _) = tag(".")(i)?;
    Ok((
        i,
        Triple {
            subject: s,
            predicate: p,
            object: o,
        },
    ))
}

/// Parses `subject ::= IRIREF | BLANK_NODE_LABEL | quotedTriple`.
pub fn subject<'a>(i: &'a str, config: &ParserConfig) -> PResult<'a, Subject> {
    alt((
        map(|i| iri_ref(i, config), Subject::Iri),
        map(blank_node, Subject::BlankNode),
        map(|i| quoted_triple(i, config), |t| Subject::QuotedTriple(Box::new(t))),
    ))(i)
}

/// Parses `predicate ::= IRIREF`.
pub fn predicate<'a>(i: &'a str, config: &ParserConfig) -> PResult<'a, IriRef> {
    iri_ref(i, config)
}

/// Parses `object ::= IRIREF | BLANK_NODE_LABEL | literal | quotedTriple`.
pub fn object<'a>(i: &'a str, config: &ParserConfig) -> PResult<'a, Object> {
    alt((
        map(|i| iri_ref(i, config), Object::Iri),
        map(blank_node, Object::BlankNode),
        map(|i| literal(i, config), Object::Literal),
        map(|i| quoted_triple(i, config), |t| Object::QuotedTriple(Box::new(t))),
    ))(i)
}

/// Parses `quotedTriple ::= '<<' ws subject ws predicate ws object ws '>>'`
/// (spec §4.8).
pub fn quoted_triple<'a>(i: &'a str, config: &ParserConfig) -> PResult<'a, Triple> {
    let (i, _) = tag("<<")(i)?;
    let (i, _) = ws0(i)?;
    let (i, s) = subject(i, config)?;
    let (i, _) = ws1(i)?;
    let (i, p) = predicate(i, config)?;
    let (i, _) = ws1(i)?;
    let (i, o) = object(i, config)?;
    let (i, _) = ws0(i)?;
    let (i, _) = tag(">>")(i)?;
    Ok((
        i,
        Triple {
            subject: s,
            predicate: p,
            object: o,
        },
    ))
}

/// Parses an `IRIREF`, unescaping `UCHAR`s and, when `config.validate_iri`
/// is set, rejecting anything that is not an absolute IRI.
pub fn iri_ref<'a>(i: &'a str, config: &ParserConfig) -> PResult<'a, IriRef> {
    map_res(parse_regex(&IRIREF, "IRIREF"), |raw| {
        let body = lex::unescape(&raw[1..raw.len() - 1]);
        if config.validate_iri && !crate::lex::ABSOLUTE_IRI.is_match(&body) {
            return Err(Error::InvalidIri(body));
        }
        Ok(IriRef(body))
    })(i)
}

/// Parses `BLANK_NODE_LABEL`.
pub fn blank_node(i: &str) -> PResult<BlankNode> {
    map(blank_node_label, |s| BlankNode(s[2..].to_owned()))(i)
}

/// Parses `literal ::= STRING_LITERAL_QUOTE (LANGTAG | '^^' IRIREF)?`.
pub fn literal<'a>(i: &'a str, config: &ParserConfig) -> PResult<'a, Literal> {
    let (i, raw) = parse_regex(&STRING_LITERAL_QUOTE, "string literal")(i)?;
    let value = lex::unescape(&raw[1..raw.len() - 1]);

    if let Ok((i, lang)) = parse_regex(&LANGTAG, "language tag")(i) {
        return Ok((i, Literal::with_language(value, &lang[1..])));
    }
    if let Ok((i, (_, dt))) = tuple((tag("^^"), |i| iri_ref(i, config)))(i) {
        return Ok((i, Literal::with_datatype(value, dt)));
    }
    Ok((i, Literal::plain(value)))
}

#[cfg(test)]
mod test {
    use super::*;
    use test_case::test_case;

    #[test]
    fn minimal_triple() {
        let cfg = ParserConfig::new();
        let doc = parse_document("<http://a/s> <http://a/p> <http://a/o> .\n", &cfg).unwrap();
        assert_eq!(doc.0.len(), 1);
        assert_eq!(doc.0[0].subject, Subject::Iri(IriRef::new("http://a/s")));
        assert_eq!(doc.0[0].predicate, IriRef::new("http://a/p"));
        assert_eq!(doc.0[0].object, Object::Iri(IriRef::new("http://a/o")));
    }

    #[test]
    fn blank_node_roundtrip() {
        let cfg = ParserConfig::new();
        let doc = parse_document("_:a <http://a/p> _:b .\n", &cfg).unwrap();
        assert_eq!(doc.0[0].subject, Subject::BlankNode(BlankNode::new("a")));
        assert_eq!(doc.0[0].object, Object::BlankNode(BlankNode::new("b")));
    }

    #[test]
    fn language_tagged_literal() {
        let cfg = ParserConfig::new();
        let doc = parse_document("<http://a/s> <http://a/p> \"hi\"@en .\n", &cfg).unwrap();
        match &doc.0[0].object {
            Object::Literal(lit) => {
                assert_eq!(lit.lexical, "hi");
                assert_eq!(lit.language.as_deref(), Some("en"));
            }
            _ => panic!("expected literal"),
        }
    }

    #[test]
    fn datatyped_literal() {
        let cfg = ParserConfig::new();
        let doc = parse_document(
            "<http://a/s> <http://a/p> \"1\"^^<http://www.w3.org/2001/XMLSchema#integer> .\n",
            &cfg,
        )
        .unwrap();
        match &doc.0[0].object {
            Object::Literal(lit) => {
                assert_eq!(lit.lexical, "1");
                assert_eq!(
                    lit.datatype.as_ref().unwrap().0,
                    "http://www.w3.org/2001/XMLSchema#integer"
                );
            }
            _ => panic!("expected literal"),
        }
    }

    #[test]
    fn quoted_triple_as_object() {
        let cfg = ParserConfig::new();
        let doc = parse_document(
            "<http://a/s> <http://a/p> << <http://a/a> <http://a/b> <http://a/c> >> .\n",
            &cfg,
        )
        .unwrap();
        match &doc.0[0].object {
            Object::QuotedTriple(t) => {
                assert_eq!(t.predicate, IriRef::new("http://a/b"));
            }
            _ => panic!("expected quoted triple"),
        }
    }

    #[test_case("<relative/iri>" => true ; "relative rejected by default")]
    fn relative_iri_rejected_when_validating(text: &str) -> bool {
        let cfg = ParserConfig::new();
        iri_ref(text, &cfg).is_err()
    }

    #[test]
    fn relative_iri_accepted_when_validation_off() {
        let cfg = ParserConfig::without_validation();
        let (_, iri) = iri_ref("<relative/iri>", &cfg).unwrap();
        assert_eq!(iri.0, "relative/iri");
    }
}
