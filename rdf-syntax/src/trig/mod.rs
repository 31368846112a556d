//! TriG: Turtle extended with named graph blocks, evaluating to
//! N-Quads rather than N-Triples (spec §4.6, §4.7).

pub mod ast;
mod evaluate;
pub mod parse;
mod serialize;
mod validate;

pub use self::ast::Document;
pub use self::evaluate::evaluate_document;
pub use self::parse::parse_document;
pub use self::validate::validate_document;
