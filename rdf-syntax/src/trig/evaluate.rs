//! TriG evaluation (spec §4.6): lowers the syntax tree to N-Quads,
//! sharing one blank-node counter sequence with Turtle rather than
//! keeping its own (grounded on `trig/context.go`'s
//! `Context{*ttl.Context}` embedding).

use super::ast::{Block, Document, LabelOrSubject, Statement, TriplesOrGraphBody};
use crate::config::ParserConfig;
use crate::error::Result;
use crate::nquads as nq;
use crate::ntriples as nt;
use crate::turtle::evaluate::{
    evaluate_blank_node, evaluate_iri, evaluate_predicate_object_list, evaluate_triple,
    resolve_iri_text, Context,
};

/// Lowers a TriG document to a sorted N-Quads document (spec §4.6, §5
/// ordering guarantee).
pub fn evaluate_document(doc: &Document, config: &ParserConfig) -> Result<nq::Document> {
    let mut ctx = Context::new(config.base.clone().unwrap_or_default());
    let mut quads = Vec::new();
    for stmt in doc.statements() {
        match stmt {
            Statement::Directive(crate::turtle::ast::Directive::Base(iri)) => {
                ctx.base = resolve_iri_text(iri, &ctx.base, config)?;
            }
            Statement::Directive(crate::turtle::ast::Directive::Prefix { prefix, iri }) => {
                let resolved = resolve_iri_text(iri, &ctx.base, config)?;
                ctx.prefixes.insert(prefix.clone(), resolved);
            }
            Statement::Block(block) => quads.extend(evaluate_block(&mut ctx, block, config)?),
        }
    }
    quads.sort_by(|a, b| serialized(a).cmp(&serialized(b)));
    Ok(nq::Document(quads))
}

fn serialized(q: &nq::Quad) -> String {
    q.to_string()
}

fn tag_quads(triples: Vec<nt::Triple>, graph: Option<&nq::GraphLabel>) -> Vec<nq::Quad> {
    triples
        .into_iter()
        .map(|t| nq::Quad {
            subject: t.subject,
            predicate: t.predicate,
            object: t.object,
            graph: graph.cloned(),
        })
        .collect()
}

fn evaluate_block(ctx: &mut Context, block: &Block, config: &ParserConfig) -> Result<Vec<nq::Quad>> {
    match block {
        Block::WrappedGraph(triples) => {
            let mut quads = Vec::new();
            for t in triples {
                quads.extend(tag_quads(evaluate_triple(ctx, t, config)?, None));
            }
            Ok(quads)
        }
        Block::Triples(t) => Ok(tag_quads(evaluate_triple(ctx, t, config)?, None)),
        Block::Graph { label, graph } => {
            let label_subject = match label {
                LabelOrSubject::Iri(iri) => nt::Subject::Iri(evaluate_iri(ctx, iri, config)?),
                LabelOrSubject::BlankNode(bn) => nt::Subject::BlankNode(evaluate_blank_node(ctx, bn)),
            };
            let graph_label = subject_to_graph_label(label_subject);
            let mut quads = Vec::new();
            for t in graph {
                quads.extend(tag_quads(evaluate_triple(ctx, t, config)?, graph_label.as_ref()));
            }
            Ok(quads)
        }
        Block::TriplesOrGraph(tog) => match &tog.label {
            LabelOrSubject::Iri(label_iri) => {
                let label = evaluate_iri(ctx, label_iri, config)?;
                evaluate_labelled(ctx, nt::Subject::Iri(label), &tog.body, config)
            }
            LabelOrSubject::BlankNode(bn) => {
                let label = evaluate_blank_node(ctx, bn);
                evaluate_labelled(ctx, nt::Subject::BlankNode(label), &tog.body, config)
            }
        },
    }
}

/// Evaluates a [`TriplesOrGraphBody`] rooted at an already-evaluated
/// `label` (spec §4.6 `evaluateDocument`, `TriplesOrGraph` case): a
/// non-empty `WrappedGraph` tags every contained triple with `label` as
/// its graph; a `PredicateObjectList` instead treats `label` as an
/// ordinary default-graph subject.
fn evaluate_labelled(
    ctx: &mut Context,
    label: nt::Subject,
    body: &TriplesOrGraphBody,
    config: &ParserConfig,
) -> Result<Vec<nq::Quad>> {
    match body {
        TriplesOrGraphBody::WrappedGraph(triples) => {
            let graph = subject_to_graph_label(label);
            let mut quads = Vec::new();
            for t in triples {
                quads.extend(tag_quads(evaluate_triple(ctx, t, config)?, graph.as_ref()));
            }
            Ok(quads)
        }
        TriplesOrGraphBody::PredicateObjectList(list) => {
            let triples = evaluate_predicate_object_list(ctx, &label, list, config)?;
            Ok(tag_quads(triples, None))
        }
    }
}

fn subject_to_graph_label(subject: nt::Subject) -> Option<nq::GraphLabel> {
    match subject {
        nt::Subject::Iri(iri) => Some(nq::GraphLabel::Iri(iri)),
        nt::Subject::BlankNode(bn) => Some(nq::GraphLabel::BlankNode(bn)),
        nt::Subject::QuotedTriple(_) => {
            unreachable!("a graph label is always an IRI or blank node, never a quoted triple")
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::trig::parse::parse_document;

    fn eval(text: &str) -> nq::Document {
        let doc = parse_document(text).unwrap();
        evaluate_document(&doc, &ParserConfig::new()).unwrap()
    }

    #[test]
    fn default_graph_triple_has_no_graph_label() {
        let doc = eval("<http://e/s> <http://e/p> <http://e/o> .\n");
        assert_eq!(doc.0.len(), 1);
        assert!(doc.0[0].graph.is_none());
    }

    #[test]
    fn named_graph_block_tags_every_triple() {
        let doc = eval("<http://e/g> { <http://e/s> <http://e/p> <http://e/o> . }\n");
        assert_eq!(doc.0.len(), 1);
        match &doc.0[0].graph {
            Some(nq::GraphLabel::Iri(iri)) => assert_eq!(iri.0, "http://e/g"),
            other => panic!("expected a named graph label, got {:?}", other),
        }
    }

    #[test]
    fn empty_named_graph_block_produces_no_quads() {
        let doc = eval("<http://e/g> { }\n");
        assert!(doc.0.is_empty());
    }

    #[test]
    fn iri_label_with_predicate_object_list_is_default_graph() {
        let doc = eval("<http://e/s> <http://e/p> <http://e/o> .\n");
        assert!(doc.0[0].graph.is_none());
        assert_eq!(doc.0[0].subject, nt::Subject::Iri(nt::IriRef::new("http://e/s")));
    }

    #[test]
    fn anonymous_blank_node_label_mints_a_fresh_graph() {
        let doc = eval("[] { <http://e/s> <http://e/p> <http://e/o> . }\n");
        assert_eq!(doc.0.len(), 1);
        match &doc.0[0].graph {
            Some(nq::GraphLabel::BlankNode(bn)) => assert_eq!(bn.0, "b1"),
            other => panic!("expected a minted blank-node graph label, got {:?}", other),
        }
    }

    #[test]
    fn labelled_blank_node_graph_is_reused_verbatim() {
        let doc = eval("_:g { <http://e/s> <http://e/p> <http://e/o> . }\n");
        match &doc.0[0].graph {
            Some(nq::GraphLabel::BlankNode(bn)) => assert_eq!(bn.0, "g"),
            other => panic!("expected graph label _:g, got {:?}", other),
        }
    }

    #[test]
    fn standalone_wrapped_graph_is_default_graph() {
        let doc = eval("{ <http://e/s> <http://e/p> <http://e/o> . }\n");
        assert_eq!(doc.0.len(), 1);
        assert!(doc.0[0].graph.is_none());
    }

    #[test]
    fn bare_triples_block_shares_blank_node_counter_with_named_graphs() {
        let doc = eval(
            "_:x <http://e/p> [ <http://e/q> <http://e/r> ] .\n<http://e/g> { _:y <http://e/p> [] . }\n",
        );
        let labels: Vec<_> = doc
            .0
            .iter()
            .filter_map(|q| match &q.subject {
                nt::Subject::BlankNode(bn) if bn.0.starts_with('b') => Some(bn.0.clone()),
                _ => None,
            })
            .collect();
        assert!(labels.contains(&"b1".to_string()));
        assert!(labels.contains(&"b2".to_string()));
    }

    #[test]
    fn graph_keyword_block_tags_every_triple() {
        let doc = eval("GRAPH <http://e/g> { <http://e/s> <http://e/p> <http://e/o> . }\n");
        assert_eq!(doc.0.len(), 1);
        match &doc.0[0].graph {
            Some(nq::GraphLabel::Iri(iri)) => assert_eq!(iri.0, "http://e/g"),
            other => panic!("expected a named graph label, got {:?}", other),
        }
    }

    #[test]
    fn prefix_resolution_across_graphs() {
        let doc = eval(
            "@prefix ex: <http://example/> .\nex:g { ex:s ex:p ex:o . }\n",
        );
        assert_eq!(doc.0.len(), 1);
        match &doc.0[0].graph {
            Some(nq::GraphLabel::Iri(iri)) => assert_eq!(iri.0, "http://example/g"),
            other => panic!("expected graph label http://example/g, got {:?}", other),
        }
    }
}
