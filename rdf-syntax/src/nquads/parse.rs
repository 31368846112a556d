//! N-Quads grammar and AST construction (spec §4.2): N-Triples extended
//! with an optional graph label.
//!
//! ```text
//! nquadsDoc  ::= statement? (EOL statement?)*
//! statement  ::= subject predicate object graphLabel? '.'
//! graphLabel ::= IRIREF | BLANK_NODE_LABEL
//! ```

use super::ast::{Document, GraphLabel, Quad};
use crate::config::ParserConfig;
use crate::error::{Error, PResult, Result};
use crate::lex::{NT_EOL, NT_WS};
use crate::ntriples::parse::{blank_node, iri_ref, object, predicate, subject};
use crate::util::parse_regex;
use nom::branch::alt;
use nom::bytes::complete::tag;
use nom::combinator::{map, opt};
use nom::Err as NomErr;

/// Parses a complete N-Quads document.
pub fn parse_document(text: &str, config: &ParserConfig) -> Result<Document> {
    let mut rest = text;
    let mut quads = Vec::new();

    let (r, _) = leading_ws(rest).map_err(to_owned_err)?;
    rest = r;
    while !rest.is_empty() {
        match statement(rest, config) {
            Ok((r, q)) => {
                quads.push(q);
                rest = r;
            }
            Err(e) => return Err(to_owned_err(e)),
        }
        let (r, _) = eol_or_end(rest).map_err(to_owned_err)?;
        rest = r;
    }
    Ok(Document(quads))
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

/// Parses one `statement ::= subject predicate object graphLabel? '.'`.
fn statement<'a>(i: &'a str, config: &ParserConfig) -> PResult<'a, Quad> {
    let (i, s) = subject(i, config)?;
    let (i, _) = ws1(i)?;
    let (i, p) = predicate(i, config)?;
    let (i, _) = ws1(i)?;
    let (i, o) = object(i, config)?;
    let (i, _) = ws0(i)?;
    let (i, g) = opt(|i| graph_label(i, config))(i)?;
    let (i, _) = ws0(i)?;
    let (i, _) = tag(".")(i)?;
    Ok((
        i,
        Quad {
            subject: s,
            predicate: p,
            object: o,
            graph: g,
        },
    ))
}

fn graph_label<'a>(i: &'a str, config: &ParserConfig) -> PResult<'a, GraphLabel> {
    alt((
        map(|i| iri_ref(i, config), GraphLabel::Iri),
        map(blank_node, GraphLabel::BlankNode),
    ))(i)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::ntriples::IriRef;

    #[test]
    fn quad_with_graph_label() {
        let cfg = ParserConfig::new();
        let doc = parse_document(
            "<http://a/s> <http://a/p> <http://a/o> <http://a/g> .\n",
            &cfg,
        )
        .unwrap();
        assert_eq!(doc.0.len(), 1);
        assert_eq!(doc.0[0].graph, Some(GraphLabel::Iri(IriRef::new("http://a/g"))));
    }

    #[test]
    fn quad_without_graph_label_is_default_graph() {
        let cfg = ParserConfig::new();
        let doc = parse_document("<http://a/s> <http://a/p> <http://a/o> .\n", &cfg).unwrap();
        assert_eq!(doc.0[0].graph, None);
    }

    #[test]
    fn multiple_quads_mixed_graphs() {
        let cfg = ParserConfig::new();
        let doc = parse_document(
            "<http://a/s> <http://a/p> <http://a/o> .\n<http://a/s> <http://a/p> <http://a/o> <http://a/g> .\n",
            &cfg,
        )
        .unwrap();
        assert_eq!(doc.0.len(), 2);
        assert_eq!(doc.0[0].graph, None);
        assert!(doc.0[1].graph.is_some());
    }
}
