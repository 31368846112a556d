//! Notation3 (spec §4.9): parser and serializer for the N3 extension of
//! Turtle's grammar (quick variables, paths, formulas). No evaluator or
//! validator is specified — see Open Question (c) in DESIGN.md.

pub mod ast;
pub mod parse;
mod serialize;

pub use self::ast::Document;
pub use self::parse::parse_document;
