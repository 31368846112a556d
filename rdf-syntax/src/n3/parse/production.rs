//! N3 grammar productions (spec §4.9). Builds a [`super::super::ast`]
//! tree only — N3 is grammar/AST only, no evaluator (Open Question (c)
//! in DESIGN.md).

use super::terminals::VARIABLE;
use crate::error::PResult;
use crate::lex::{multispace0, multispace1};
use crate::n3::ast::{
    Directive, Document, Path, PathItem, PathOp, Predicate, PredicateObject, Statement, Triples, Verb,
};
use crate::turtle::parse::{blank_node, directive, iri, literal};
use crate::util::parse_regex;
use nom::branch::alt;
use nom::bytes::complete::tag;
use nom::combinator::{map, opt};
use nom::multi::{many0, separated_list};
use nom::sequence::tuple;

/// `n3Doc ::= statement*`.
pub fn document<'a>(i: &'a str) -> PResult<'a, Document> {
    let (i, _) = multispace0(i)?;
    let (i, statements) = statement_list(i)?;
    Ok((i, Document(statements)))
}

/// `statement ('.' statement)*`, the body shared by `Document` and
/// `Formula`.
fn statement_list<'a>(i: &'a str) -> PResult<'a, Vec<Statement>> {
    let (i, statements) = many0(|i| {
        let (i, s) = statement(i)?;
        let (i, _) = multispace0(i)?;
        let (i, _) = tag(".")(i)?;
        let (i, _) = multispace0(i)?;
        Ok((i, s))
    })(i)?;
    Ok((i, statements))
}

/// `statement ::= directive | triples`.
fn statement<'a>(i: &'a str) -> PResult<'a, Statement> {
    alt((
        map(directive, |d| Statement::Directive(n3_directive(d))),
        map(triples, Statement::Triples),
    ))(i)
}

fn n3_directive(d: crate::turtle::ast::Directive) -> Directive {
    match d {
        crate::turtle::ast::Directive::Prefix { prefix, iri } => Directive::Prefix { prefix, iri },
        crate::turtle::ast::Directive::Base(iri) => Directive::Base(iri),
    }
}

/// `triples ::= Subject PredicateObjectList?`.
fn triples<'a>(i: &'a str) -> PResult<'a, Triples> {
    let (i, subject) = path(i)?;
    let (i, _) = multispace0(i)?;
    let (i, predicate_objects) = opt(predicate_object_list)(i)?;
    Ok((
        i,
        Triples {
            subject,
            predicate_objects: predicate_objects.unwrap_or_default(),
        },
    ))
}

/// `PredicateObjectList ::= PredicateObject (';' PredicateObject?)*`.
fn predicate_object_list<'a>(i: &'a str) -> PResult<'a, Vec<PredicateObject>> {
    let (i, first) = predicate_object(i)?;
    let (i, rest) = many0(|i| {
        let (i, _) = multispace0(i)?;
        let (i, _) = tag(";")(i)?;
        let (i, _) = multispace0(i)?;
        opt(predicate_object)(i)
    })(i)?;
    let mut list = vec![first];
    list.extend(rest.into_iter().flatten());
    Ok((i, list))
}

fn predicate_object<'a>(i: &'a str) -> PResult<'a, PredicateObject> {
    let (i, verb) = verb(i)?;
    let (i, _) = multispace0(i)?;
    let (i, objects) = object_list(i)?;
    Ok((i, PredicateObject { verb, objects }))
}

fn object_list<'a>(i: &'a str) -> PResult<'a, Vec<Path>> {
    separated_list(tuple((multispace0, tag(","), multispace0)), path)(i)
}

/// `Verb ::= 'a' | 'has' Path | 'is' Path 'of' | "<=" | "=>" | '=' | Predicate`.
fn verb<'a>(i: &'a str) -> PResult<'a, Verb> {
    alt((
        map(tag("a"), |_| Verb::A),
        map(tag("<="), |_| Verb::ReverseImplies),
        map(tag("=>"), |_| Verb::Implies),
        map(tag("="), |_| Verb::SameAs),
        map(
            tuple((tag("has"), multispace0, path)),
            |(_, _, p)| Verb::Has(p),
        ),
        map(
            tuple((tag("is"), multispace0, path, multispace0, tag("of"))),
            |(_, _, p, _, _)| Verb::IsOf(p),
        ),
        map(predicate, Verb::Predicate),
    ))(i)
}

/// `Predicate ::= Path | '<-' Path`.
fn predicate<'a>(i: &'a str) -> PResult<'a, Predicate> {
    alt((
        map(tuple((tag("<-"), multispace0, path)), |(_, _, p)| Predicate::Inverse(p)),
        map(path, Predicate::Forward),
    ))(i)
}

/// `Path ::= PathItem (('!' | '^') Path)?`.
fn path<'a>(i: &'a str) -> PResult<'a, Path> {
    let (i, item) = path_item(i)?;
    let chain = alt((
        map(tuple((tag("!"), path)), |(_, p)| (PathOp::Forward, p)),
        map(tuple((tag("^"), path)), |(_, p)| (PathOp::Reverse, p)),
    ))(i);
    match chain {
        Ok((i, (op, next))) => Ok((i, Path { item, next: Some((op, Box::new(next))) })),
        Err(_) => Ok((i, Path { item, next: None })),
    }
}

/// `PathItem ::= IRI | BlankNode | QuickVar | Collection |
/// BlankNodePropertyList | IRIPropertyList | Literal | Formula`.
fn path_item<'a>(i: &'a str) -> PResult<'a, PathItem> {
    alt((
        map(literal, PathItem::Literal),
        map(iri, PathItem::Iri),
        map(quick_var, PathItem::QuickVar),
        map(blank_node, PathItem::BlankNode),
        map(collection, PathItem::Collection),
        map(iri_property_list, |(iri, list)| PathItem::IriPropertyList { iri, list }),
        map(blank_node_property_list, PathItem::BlankNodePropertyList),
        map(formula, PathItem::Formula),
    ))(i)
}

/// `QuickVar ::= '?' PN_LOCAL` (spec's short-form variable; the crate
/// this is grounded on instead validates against SPARQL's `VARNAME`).
fn quick_var<'a>(i: &'a str) -> PResult<'a, String> {
    map(parse_regex(&VARIABLE, "?variable"), |raw| raw[1..].to_owned())(i)
}

/// `Collection ::= '(' (Object)* ')'`.
fn collection<'a>(i: &'a str) -> PResult<'a, Vec<Path>> {
    let (i, _) = tag("(")(i)?;
    let (i, _) = multispace0(i)?;
    let (i, items) = many0(|i| {
        let (i, o) = path(i)?;
        let (i, _) = multispace0(i)?;
        Ok((i, o))
    })(i)?;
    let (i, _) = tag(")")(i)?;
    Ok((i, items))
}

/// `BlankNodePropertyList ::= '[' PredicateObjectList ']'`.
fn blank_node_property_list<'a>(i: &'a str) -> PResult<'a, Vec<PredicateObject>> {
    let (i, _) = tag("[")(i)?;
    let (i, _) = multispace0(i)?;
    let (i, list) = predicate_object_list(i)?;
    let (i, _) = multispace0(i)?;
    let (i, _) = tag("]")(i)?;
    Ok((i, list))
}

/// `IRIPropertyList ::= '[' 'id' IRI PredicateObjectList ']'`.
fn iri_property_list<'a>(i: &'a str) -> PResult<'a, (crate::turtle::ast::Iri, Vec<PredicateObject>)> {
    let (i, _) = tag("[")(i)?;
    let (i, _) = multispace0(i)?;
    let (i, _) = tag("id")(i)?;
    let (i, _) = multispace1(i)?;
    let (i, iri) = iri(i)?;
    let (i, _) = multispace0(i)?;
    let (i, list) = predicate_object_list(i)?;
    let (i, _) = multispace0(i)?;
    let (i, _) = tag("]")(i)?;
    Ok((i, (iri, list)))
}

/// `Formula ::= '{' statement* '}'`.
fn formula<'a>(i: &'a str) -> PResult<'a, Vec<Statement>> {
    let (i, _) = tag("{")(i)?;
    let (i, _) = multispace0(i)?;
    let (i, statements) = statement_list(i)?;
    let (i, _) = tag("}")(i)?;
    Ok((i, statements))
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::n3::ast::PathItem as PI;
    use crate::turtle::ast::Iri;

    #[test]
    fn simple_triple() {
        let (rest, t) = triples("<http://e/s> <http://e/p> <http://e/o>").unwrap();
        assert_eq!(rest, "");
        assert_eq!(t.subject.item, PI::Iri(Iri::Ref("http://e/s".to_owned())));
        assert_eq!(t.predicate_objects.len(), 1);
    }

    #[test]
    fn bare_path_without_predicate_object_list() {
        let (rest, t) = triples("?x").unwrap();
        assert_eq!(rest, "");
        assert!(t.predicate_objects.is_empty());
    }

    #[test]
    fn quick_var_subject() {
        let (_, t) = triples("?x <http://e/p> <http://e/o>").unwrap();
        assert_eq!(t.subject.item, PI::QuickVar("x".to_owned()));
    }

    #[test]
    fn has_and_is_of_verbs() {
        let (_, po) = predicate_object("has <http://e/p> <http://e/o>").unwrap();
        assert!(matches!(po.verb, Verb::Has(_)));
        let (_, po) = predicate_object("is <http://e/p> of <http://e/o>").unwrap();
        assert!(matches!(po.verb, Verb::IsOf(_)));
    }

    #[test]
    fn implication_verbs() {
        let (_, po) = predicate_object("=> { ?x <http://e/p> ?y }").unwrap();
        assert_eq!(po.verb, Verb::Implies);
        let (_, po) = predicate_object("<= { ?x <http://e/p> ?y }").unwrap();
        assert_eq!(po.verb, Verb::ReverseImplies);
    }

    #[test]
    fn formula_as_object() {
        let (_, t) = triples("{ ?x <http://e/p> ?y } => { ?x <http://e/q> ?y }").unwrap();
        match &t.subject.item {
            PI::Formula(statements) => assert_eq!(statements.len(), 1),
            other => panic!("expected a formula subject, got {:?}", other),
        }
    }

    #[test]
    fn forward_path_chain() {
        let (_, t) = triples("?x!<http://e/p> <http://e/q> <http://e/o>").unwrap();
        assert!(t.subject.next.is_some());
        assert_eq!(t.subject.next.as_ref().unwrap().0, PathOp::Forward);
    }

    #[test]
    fn reverse_path_chain() {
        let (_, t) = triples("?x^<http://e/p> <http://e/q> <http://e/o>").unwrap();
        assert_eq!(t.subject.next.as_ref().unwrap().0, PathOp::Reverse);
    }

    #[test]
    fn collection_as_path_item() {
        let (_, t) = triples("(?x ?y) <http://e/p> <http://e/o>").unwrap();
        match &t.subject.item {
            PI::Collection(items) => assert_eq!(items.len(), 2),
            other => panic!("expected a collection, got {:?}", other),
        }
    }
}
