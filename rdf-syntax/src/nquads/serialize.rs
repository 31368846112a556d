//! N-Quads serialization (spec §6.2): `S␣P␣O␣[G]␣.\n` per line, the graph
//! label omitted entirely for quads in the default graph.

use super::ast::{Document, Quad};
use crate::ntriples::serialize::{write_object, write_subject};
use std::fmt::Write;

impl Document {
    /// Round-trippable textual form: one line per quad, `"S P O [G] ."`,
    /// each line terminated by `\n`.
    pub fn to_text(&self) -> String {
        let mut out = String::new();
        for q in &self.0 {
            write_quad(&mut out, q);
            out.push_str(" .\n");
        }
        out
    }
}

fn write_quad(out: &mut String, q: &Quad) {
    write_subject(out, &q.subject);
    out.push(' ');
    write!(out, "{}", q.predicate).unwrap();
    out.push(' ');
    write_object(out, &q.object);
    if let Some(g) = &q.graph {
        out.push(' ');
        write!(out, "{}", g).unwrap();
    }
}
