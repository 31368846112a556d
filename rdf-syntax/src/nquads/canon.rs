//! Blank-node canonicalization and document equality for N-Quads (spec
//! §4.3): the same algorithm as N-Triples, except quads are grouped by
//! graph label first before the per-graph lexicographic sort.

use super::ast::{Document, GraphLabel, Quad};
use crate::ntriples::ast::{BlankNode, Object, Subject};
use std::collections::HashMap;
use std::fmt::Write as _;

impl Document {
    /// Returns a canonicalized copy: quads grouped by graph label (the
    /// default graph sorting first), then sorted within each group by
    /// their pre-canonicalization serialized form, with blank nodes
    /// renamed to `b0`, `b1`, ... in the order first encountered during
    /// that walk.
    pub fn canonicalize(&self) -> Document {
        let mut sorted: Vec<&Quad> = self.0.iter().collect();
        sorted.sort_by(|a, b| sort_key(a).cmp(&sort_key(b)));

        let mut mapping: HashMap<&str, BlankNode> = HashMap::new();
        let mut next = 0usize;
        let renamed = sorted
            .into_iter()
            .map(|q| rename_quad(q, &mut mapping, &mut next))
            .collect();
        Document(renamed)
    }

    /// Two documents are equal iff they have the same number of quads and
    /// their canonical forms match element-wise (spec §4.3, §8 scenario
    /// 6).
    pub fn equal(&self, other: &Document) -> bool {
        if self.0.len() != other.0.len() {
            return false;
        }
        self.canonicalize().0 == other.canonicalize().0
    }

    /// Groups this document's quads by graph label (spec §6.1
    /// `NQuadsDocument.graphs()`), returning the default graph (key
    /// `None`) and every named graph as a standalone N-Triples document.
    pub fn graphs(&self) -> HashMap<Option<GraphLabel>, crate::ntriples::Document> {
        let mut out: HashMap<Option<GraphLabel>, crate::ntriples::Document> = HashMap::new();
        for q in &self.0 {
            out.entry(q.graph.clone())
                .or_insert_with(crate::ntriples::Document::new)
                .0
                .push(crate::ntriples::Triple {
                    subject: q.subject.clone(),
                    predicate: q.predicate.clone(),
                    object: q.object.clone(),
                });
        }
        out
    }
}

fn sort_key(q: &Quad) -> (String, String) {
    let graph_key = q
        .graph
        .as_ref()
        .map(|g| g.to_string())
        .unwrap_or_default();
    let mut triple = String::new();
    crate::ntriples::serialize::write_subject(&mut triple, &q.subject);
    triple.push(' ');
    write!(triple, "{}", q.predicate).unwrap();
    triple.push(' ');
    crate::ntriples::serialize::write_object(&mut triple, &q.object);
    (graph_key, triple)
}

fn rename_quad(q: &Quad, mapping: &mut HashMap<&str, BlankNode>, next: &mut usize) -> Quad {
    let subject = match &q.subject {
        Subject::BlankNode(bn) => Subject::BlankNode(canon_label(bn, mapping, next)),
        other => other.clone(),
    };
    let object = match &q.object {
        Object::BlankNode(bn) => Object::BlankNode(canon_label(bn, mapping, next)),
        other => other.clone(),
    };
    let graph = match &q.graph {
        Some(GraphLabel::BlankNode(bn)) => Some(GraphLabel::BlankNode(canon_label(bn, mapping, next))),
        other => other.clone(),
    };
    Quad {
        subject,
        predicate: q.predicate.clone(),
        object,
        graph,
    }
}

fn canon_label<'a>(
    bn: &'a BlankNode,
    mapping: &mut HashMap<&'a str, BlankNode>,
    next: &mut usize,
) -> BlankNode {
    if let Some(existing) = mapping.get(bn.0.as_str()) {
        return existing.clone();
    }
    let canon = BlankNode(format!("b{}", *next));
    *next += 1;
    mapping.insert(&bn.0, canon.clone());
    canon
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::config::ParserConfig;
    use crate::nquads::parse::parse_document;

    fn doc(text: &str) -> Document {
        parse_document(text, &ParserConfig::new()).unwrap()
    }

    #[test]
    fn renaming_is_equal_across_graphs() {
        let a = doc("_:a <http://e/p> _:b <http://e/g> .\n");
        let b = doc("_:x <http://e/p> _:y <http://e/g> .\n");
        assert!(a.equal(&b));
    }

    #[test]
    fn default_graph_and_named_graph_are_distinct() {
        let a = doc("<http://e/s> <http://e/p> <http://e/o> .\n");
        let b = doc("<http://e/s> <http://e/p> <http://e/o> <http://e/g> .\n");
        assert!(!a.equal(&b));
    }

    #[test]
    fn graphs_splits_by_label() {
        let d = doc(
            "<http://e/s1> <http://e/p> <http://e/o> .\n\
             <http://e/s2> <http://e/p> <http://e/o> <http://e/g> .\n",
        );
        let groups = d.graphs();
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[&None].0.len(), 1);
        assert_eq!(
            groups[&Some(GraphLabel::Iri(crate::ntriples::IriRef::new("http://e/g")))]
                .0
                .len(),
            1
        );
    }
}
