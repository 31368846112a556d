//! TriG grammar (spec §4.6): extends [`crate::turtle::parse`] with
//! graph-labelled blocks. No evaluation happens here.

use super::ast::{Block, Document, LabelOrSubject, Statement, TriplesOrGraph, TriplesOrGraphBody, WrappedGraph};
use crate::error::{Error, PResult, Result};
use crate::lex::{multispace0, multispace1};
use crate::turtle::parse::{blank_node, directive, iri, predicate_object_list, triples};
use nom::branch::alt;
use nom::bytes::complete::tag;
use nom::combinator::map;
use nom::multi::many0;
use nom::Err as NomErr;

/// Parses a complete TriG document into its syntax tree.
pub fn parse_document(text: &str) -> Result<Document> {
    let (rest, doc) = document(text).map_err(to_owned_err)?;
    if !rest.is_empty() {
        return Err(Error::syntax(rest, "end of document"));
    }
    Ok(doc)
}

fn to_owned_err(e: NomErr<Error>) -> Error {
    match e {
        NomErr::Error(err) | NomErr::Failure(err) => err,
        NomErr::Incomplete(_) => Error::syntax("", "more input"),
    }
}

/// `trigDoc ::= statement*`.
fn document<'a>(i: &'a str) -> PResult<'a, Document> {
    let (i, _) = multispace0(i)?;
    let (i, statements) = many0(|i| {
        let (i, s) = statement(i)?;
        let (i, _) = multispace0(i)?;
        Ok((i, s))
    })(i)?;
    Ok((i, Document(statements)))
}

/// `statement ::= directive | block`.
fn statement<'a>(i: &'a str) -> PResult<'a, Statement> {
    alt((map(directive, Statement::Directive), map(block, Statement::Block)))(i)
}

/// `block ::= triplesOrGraph | wrappedGraph | triples2 '.' | 'GRAPH' labelOrSubject wrappedGraph`.
fn block<'a>(i: &'a str) -> PResult<'a, Block> {
    alt((
        map(graph_keyword_block, |(label, graph)| Block::Graph { label, graph }),
        map(triples_or_graph, Block::TriplesOrGraph),
        map(wrapped_graph, Block::WrappedGraph),
        map(
            |i| {
                let (i, t) = triples(i)?;
                let (i, _) = multispace0(i)?;
                let (i, _) = tag(".")(i)?;
                Ok((i, t))
            },
            Block::Triples,
        ),
    ))(i)
}

/// `'GRAPH' labelOrSubject wrappedGraph`.
fn graph_keyword_block<'a>(i: &'a str) -> PResult<'a, (LabelOrSubject, WrappedGraph)> {
    let (i, _) = tag("GRAPH")(i)?;
    let (i, _) = multispace1(i)?;
    let (i, label) = label_or_subject(i)?;
    let (i, _) = multispace0(i)?;
    let (i, graph) = wrapped_graph(i)?;
    Ok((i, (label, graph)))
}

/// `triplesOrGraph ::= labelOrSubject (wrappedGraph | predicateObjectList '.')`.
fn triples_or_graph<'a>(i: &'a str) -> PResult<'a, TriplesOrGraph> {
    let (i, label) = label_or_subject(i)?;
    let (i, _) = multispace0(i)?;
    if let Ok((i, graph)) = wrapped_graph(i) {
        return Ok((
            i,
            TriplesOrGraph {
                label,
                body: TriplesOrGraphBody::WrappedGraph(graph),
            },
        ));
    }
    let (i, list) = predicate_object_list(i)?;
    let (i, _) = multispace0(i)?;
    let (i, _) = tag(".")(i)?;
    Ok((
        i,
        TriplesOrGraph {
            label,
            body: TriplesOrGraphBody::PredicateObjectList(list),
        },
    ))
}

/// `labelOrSubject ::= IRI | BlankNode`.
fn label_or_subject<'a>(i: &'a str) -> PResult<'a, LabelOrSubject> {
    alt((
        map(iri, LabelOrSubject::Iri),
        map(blank_node, LabelOrSubject::BlankNode),
    ))(i)
}

/// `wrappedGraph ::= '{' triplesBlock? '}'`, a `;`-free list of ordinary
/// Turtle `triples` statements, each still `.`-terminated.
fn wrapped_graph<'a>(i: &'a str) -> PResult<'a, WrappedGraph> {
    let (i, _) = tag("{")(i)?;
    let (i, _) = multispace0(i)?;
    let (i, items) = many0(|i| {
        let (i, t) = triples(i)?;
        let (i, _) = multispace0(i)?;
        let (i, _) = tag(".")(i)?;
        let (i, _) = multispace0(i)?;
        Ok((i, t))
    })(i)?;
    let (i, _) = tag("}")(i)?;
    Ok((i, items))
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::turtle::ast::{BlankNode, Iri};

    #[test]
    fn default_graph_triple() {
        let doc = parse_document("<http://e/s> <http://e/p> <http://e/o> .\n").unwrap();
        assert_eq!(doc.0.len(), 1);
        match &doc.0[0] {
            Statement::Block(Block::TriplesOrGraph(TriplesOrGraph {
                label: LabelOrSubject::Iri(_),
                body: TriplesOrGraphBody::PredicateObjectList(list),
            })) => assert_eq!(list.len(), 1),
            other => panic!("expected an IRI-subject triples-or-graph block, got {:?}", other),
        }
    }

    #[test]
    fn blank_node_property_list_subject_is_a_bare_triples_block() {
        let doc = parse_document("[ <http://e/p> <http://e/o> ] <http://e/q> <http://e/r> .\n").unwrap();
        match &doc.0[0] {
            Statement::Block(Block::Triples(_)) => {}
            other => panic!("expected a bare triples block, got {:?}", other),
        }
    }

    #[test]
    fn named_graph_block() {
        let doc = parse_document(
            "<http://e/g> { <http://e/s> <http://e/p> <http://e/o> . }\n",
        )
        .unwrap();
        match &doc.0[0] {
            Statement::Block(Block::TriplesOrGraph(TriplesOrGraph {
                label: LabelOrSubject::Iri(Iri::Ref(g)),
                body: TriplesOrGraphBody::WrappedGraph(triples),
            })) => {
                assert_eq!(g, "http://e/g");
                assert_eq!(triples.len(), 1);
            }
            other => panic!("expected a named graph block, got {:?}", other),
        }
    }

    #[test]
    fn empty_named_graph_block() {
        let doc = parse_document("<http://e/g> { }\n").unwrap();
        match &doc.0[0] {
            Statement::Block(Block::TriplesOrGraph(TriplesOrGraph {
                body: TriplesOrGraphBody::WrappedGraph(triples),
                ..
            })) => assert!(triples.is_empty()),
            other => panic!("expected a named graph block, got {:?}", other),
        }
    }

    #[test]
    fn iri_label_without_graph_is_default_graph_triple() {
        let doc = parse_document("<http://e/s> <http://e/p> <http://e/o> .\n").unwrap();
        match &doc.0[0] {
            Statement::Block(Block::TriplesOrGraph(TriplesOrGraph {
                label: LabelOrSubject::Iri(Iri::Ref(s)),
                body: TriplesOrGraphBody::PredicateObjectList(_),
            })) => assert_eq!(s, "http://e/s"),
            other => panic!("expected an IRI-subject triples-or-graph block, got {:?}", other),
        }
    }

    #[test]
    fn blank_node_label_with_predicate_object_list() {
        let doc = parse_document("_:g <http://e/p> <http://e/o> .\n").unwrap();
        match &doc.0[0] {
            Statement::Block(Block::TriplesOrGraph(TriplesOrGraph {
                label: LabelOrSubject::BlankNode(BlankNode::Labeled(label)),
                body: TriplesOrGraphBody::PredicateObjectList(list),
            })) => {
                assert_eq!(label, "g");
                assert_eq!(list.len(), 1);
            }
            other => panic!("expected a blank-node-labelled triples-or-graph, got {:?}", other),
        }
    }

    #[test]
    fn standalone_wrapped_graph_has_no_label() {
        let doc = parse_document("{ <http://e/s> <http://e/p> <http://e/o> . }\n").unwrap();
        match &doc.0[0] {
            Statement::Block(Block::WrappedGraph(triples)) => assert_eq!(triples.len(), 1),
            other => panic!("expected a standalone wrapped graph, got {:?}", other),
        }
    }

    #[test]
    fn graph_keyword_block() {
        let doc = parse_document(
            "GRAPH <http://e/g> { <http://e/s> <http://e/p> <http://e/o> . }\n",
        )
        .unwrap();
        match &doc.0[0] {
            Statement::Block(Block::Graph { label: LabelOrSubject::Iri(Iri::Ref(g)), graph }) => {
                assert_eq!(g, "http://e/g");
                assert_eq!(graph.len(), 1);
            }
            other => panic!("expected a GRAPH-keyword block, got {:?}", other),
        }
    }

    #[test]
    fn prefix_directive_then_named_graph() {
        let doc = parse_document(
            "@prefix ex: <http://example/> .\nex:g { ex:s ex:p ex:o . }\n",
        )
        .unwrap();
        assert_eq!(doc.0.len(), 2);
    }
}
