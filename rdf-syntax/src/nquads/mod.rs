//! N-Quads: grammar, AST, serialization and canonical equality (spec
//! §4.2, §4.3, §6.1), extending N-Triples with an optional graph label.

pub mod ast;
mod canon;
pub mod parse;
mod serialize;

pub use self::ast::{Document, GraphLabel, Quad};
pub use self::parse::parse_document;
