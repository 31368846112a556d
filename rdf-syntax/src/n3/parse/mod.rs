//! N3 parsing: grammar productions building a pure AST (spec §4.9). No
//! evaluator is specified for N3.

mod production;
pub mod terminals;

use crate::error::{Error, Result};
use crate::n3::ast::Document;
use nom::Err as NomErr;

/// Parses a complete N3 document into its syntax tree.
pub fn parse_document(text: &str) -> Result<Document> {
    let (rest, doc) = production::document(text).map_err(to_owned_err)?;
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

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn document_with_prefix_and_triple() {
        let doc = parse_document("@prefix ex: <http://example/> .\nex:s ex:p ex:o .\n").unwrap();
        assert_eq!(doc.0.len(), 2);
    }

    #[test]
    fn empty_document() {
        let doc = parse_document("").unwrap();
        assert_eq!(doc.0.len(), 0);
    }

    #[test]
    fn quick_vars_and_formula() {
        let doc = parse_document(
            "{ ?x <http://e/p> ?y } => { ?y <http://e/q> ?x } .\n",
        )
        .unwrap();
        assert_eq!(doc.0.len(), 1);
    }
}
