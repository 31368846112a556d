#![deny(missing_docs)]

//! # rdf-syntax
//!
//! Parsers, serializers and evaluators for the RDF concrete-syntax
//! family: N-Triples, N-Quads, Turtle, TriG and Notation3, including
//! the RDF-star `<< ... >>` quoted-triple extension.
//!
//! Each dialect module exposes a `parse_document` entry point building
//! a pure syntax tree, and a `Document` with a round-trippable
//! `to_string`/`to_text` form. Turtle and TriG additionally expose
//! `evaluate_document`, lowering the tree to canonical N-Triples/
//! N-Quads against an explicit [`config::ParserConfig`] rather than any
//! global state.

pub mod config;
pub mod error;
mod lex;
pub mod n3;
pub mod nquads;
pub mod ntriples;
pub mod test_driver;
pub mod trig;
pub mod turtle;
mod util;

pub use self::config::ParserConfig;
pub use self::error::Error;
