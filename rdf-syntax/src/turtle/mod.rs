//! Turtle: grammar, AST, evaluation to N-Triples, structural validation
//! and serialization (spec §4.4, §4.5, §4.7).

pub mod ast;
pub(crate) mod evaluate;
pub mod parse;
pub(crate) mod serialize;
pub(crate) mod validate;

pub use self::ast::Document;
pub use self::evaluate::evaluate_document;
pub use self::parse::parse_document;
pub use self::validate::validate_document;
