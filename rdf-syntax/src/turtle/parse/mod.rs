//! Turtle parsing: grammar productions building a pure AST (spec §4.4),
//! no prefix/base resolution or blank-node minting performed here.

mod production;
pub mod terminals;

pub(crate) use self::production::{blank_node, directive, iri, literal, predicate_object_list, triples};
pub(crate) use self::terminals::{pn_local, pname_ln};
use crate::error::{Error, Result};
use crate::turtle::ast::Document;
use nom::Err as NomErr;

/// Parses a complete Turtle document into its syntax tree.
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
    fn document_with_comment_only() {
        let doc = parse_document("# just a comment\n").unwrap();
        assert_eq!(doc.0.len(), 0);
    }
}
