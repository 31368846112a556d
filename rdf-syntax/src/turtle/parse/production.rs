//! Turtle grammar productions (spec §4.4): builds a [`super::super::ast`]
//! tree only. No prefix/base resolution and no blank-node minting happen
//! here; both are [`super::super::evaluate`]'s job.

use super::terminals::{ANON, DECIMAL, DOUBLE, INTEGER, PNAME_NS};
use super::{pn_local, pname_ln};
use crate::error::{Error, PResult};
use crate::lex::{
    self, blank_node_label, multispace0, multispace1, IRIREF, LANGTAG, STRING_LITERAL_LONG_QUOTE,
    STRING_LITERAL_LONG_SINGLE_QUOTE, STRING_LITERAL_QUOTE, STRING_LITERAL_SINGLE_QUOTE,
};
use crate::turtle::ast::{
    BlankNode, Directive, Document, Iri, Literal, NumericKind, Object, PredicateObject, Statement,
    Subject, Triples, Verb,
};
use crate::util::parse_regex;
use nom::branch::alt;
use nom::bytes::complete::{tag, tag_no_case};
use nom::combinator::{map, opt};
use nom::multi::{many0, separated_list};
use nom::sequence::tuple;

#[inline]
fn unwrap_str(i: &str, margin: usize) -> &str {
    &i[margin..i.len() - margin]
}

/// `turtleDoc ::= statement*`.
pub fn document<'a>(i: &'a str) -> PResult<'a, Document> {
    let (i, _) = multispace0(i)?;
    let (i, statements) = many0(|i| {
        let (i, s) = statement(i)?;
        let (i, _) = multispace0(i)?;
        Ok((i, s))
    })(i)?;
    Ok((i, Document(statements)))
}

/// `statement ::= directive | triples '.'`.
pub fn statement<'a>(i: &'a str) -> PResult<'a, Statement> {
    alt((
        map(directive, Statement::Directive),
        map(
            tuple((triples, multispace0, tag("."))),
            |(t, _, _)| Statement::Triples(t),
        ),
    ))(i)
}

/// `directive ::= prefixID | base | sparqlPrefix | sparqlBase`.
pub fn directive<'a>(i: &'a str) -> PResult<'a, Directive> {
    alt((prefix_id, base, sparql_prefix, sparql_base))(i)
}

/// `prefixID ::= '@prefix' PNAME_NS IRIREF '.'`.
fn prefix_id<'a>(i: &'a str) -> PResult<'a, Directive> {
    map(
        tuple((
            tag("@prefix"),
            multispace1,
            parse_regex(&PNAME_NS, "PNAME_NS"),
            multispace0,
            parse_regex(&IRIREF, "IRIREF"),
            multispace0,
            tag("."),
        )),
        |(_, _, ns, _, iri, _, _)| Directive::Prefix {
            prefix: ns[..ns.len() - 1].to_owned(),
            iri: lex::unescape(unwrap_str(iri, 1)),
        },
    )(i)
}

/// `base ::= '@base' IRIREF '.'`.
fn base<'a>(i: &'a str) -> PResult<'a, Directive> {
    map(
        tuple((
            tag("@base"),
            multispace1,
            parse_regex(&IRIREF, "IRIREF"),
            multispace0,
            tag("."),
        )),
        |(_, _, iri, _, _)| Directive::Base(lex::unescape(unwrap_str(iri, 1))),
    )(i)
}

/// `sparqlPrefix ::= "PREFIX"(case-insensitive) PNAME_NS IRIREF`.
fn sparql_prefix<'a>(i: &'a str) -> PResult<'a, Directive> {
    map(
        tuple((
            tag_no_case("PREFIX"),
            multispace1,
            parse_regex(&PNAME_NS, "PNAME_NS"),
            multispace0,
            parse_regex(&IRIREF, "IRIREF"),
        )),
        |(_, _, ns, _, iri)| Directive::Prefix {
            prefix: ns[..ns.len() - 1].to_owned(),
            iri: lex::unescape(unwrap_str(iri, 1)),
        },
    )(i)
}

/// `sparqlBase ::= "BASE"(case-insensitive) IRIREF`.
fn sparql_base<'a>(i: &'a str) -> PResult<'a, Directive> {
    map(
        tuple((tag_no_case("BASE"), multispace1, parse_regex(&IRIREF, "IRIREF"))),
        |(_, _, iri)| Directive::Base(lex::unescape(unwrap_str(iri, 1))),
    )(i)
}

/// `triples ::= Subject PredicateObjectList | BlankNodePropertyList PredicateObjectList?`.
pub(crate) fn triples<'a>(i: &'a str) -> PResult<'a, Triples> {
    alt((
        map(
            tuple((subject, multispace1, predicate_object_list)),
            |(subject, _, predicate_objects)| Triples::Subject {
                subject,
                predicate_objects,
            },
        ),
        map(
            tuple((
                blank_node_property_list,
                opt(|i| {
                    let (i, _) = multispace1(i)?;
                    predicate_object_list(i)
                }),
            )),
            |(property_list, predicate_objects)| Triples::BlankNodePropertyList {
                property_list,
                predicate_objects: predicate_objects.unwrap_or_default(),
            },
        ),
    ))(i)
}

/// `Subject ::= IRI | BlankNode | Collection`.
fn subject<'a>(i: &'a str) -> PResult<'a, Subject> {
    alt((
        map(iri, Subject::Iri),
        map(blank_node, Subject::BlankNode),
        map(collection, Subject::Collection),
    ))(i)
}

/// `PredicateObjectList ::= PredicateObject (';' PredicateObject?)*`.
pub(crate) fn predicate_object_list<'a>(i: &'a str) -> PResult<'a, Vec<PredicateObject>> {
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

/// `PredicateObject ::= Verb ObjectList`.
fn predicate_object<'a>(i: &'a str) -> PResult<'a, PredicateObject> {
    map(
        tuple((verb, multispace1, object_list)),
        |(verb, _, objects)| PredicateObject { verb, objects },
    )(i)
}

/// `ObjectList ::= Object (',' Object)*`.
fn object_list<'a>(i: &'a str) -> PResult<'a, Vec<Object>> {
    separated_list(
        tuple((multispace0, tag(","), multispace0)),
        object,
    )(i)
}

/// `Verb ::= IRI | 'a'`.
fn verb<'a>(i: &'a str) -> PResult<'a, Verb> {
    alt((
        map(tag("a"), |_| Verb::A),
        map(iri, Verb::Iri),
    ))(i)
}

/// `Object ::= Literal | IRI | BlankNode | Collection | BlankNodePropertyList`.
fn object<'a>(i: &'a str) -> PResult<'a, Object> {
    alt((
        map(literal, Object::Literal),
        map(iri, Object::Iri),
        map(blank_node, Object::BlankNode),
        map(collection, Object::Collection),
        map(blank_node_property_list, Object::BlankNodePropertyList),
    ))(i)
}

/// `Collection ::= '(' (Object)* ')'`.
fn collection<'a>(i: &'a str) -> PResult<'a, Vec<Object>> {
    let (i, _) = tag("(")(i)?;
    let (i, _) = multispace0(i)?;
    let (i, items) = many0(|i| {
        let (i, o) = object(i)?;
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

/// `BlankNode ::= BLANK_NODE_LABEL | ANON`.
pub(crate) fn blank_node<'a>(i: &'a str) -> PResult<'a, BlankNode> {
    alt((
        map(blank_node_label, |s| BlankNode::Labeled(s[2..].to_owned())),
        map(parse_regex(&ANON, "ANON"), |_| BlankNode::Anonymous),
    ))(i)
}

/// `IRI ::= IRIREF | PrefixedName`.
pub(crate) fn iri<'a>(i: &'a str) -> PResult<'a, Iri> {
    alt((
        map(parse_regex(&IRIREF, "IRIREF"), |raw| {
            Iri::Ref(lex::unescape(unwrap_str(raw, 1)))
        }),
        prefixed_name,
    ))(i)
}

/// `PrefixedName ::= PNAME_LN | PNAME_NS` (never matching `_:`, which is
/// a `BlankNode`).
fn prefixed_name<'a>(i: &'a str) -> PResult<'a, Iri> {
    if i.starts_with("_:") {
        return Err(nom::Err::Error(Error::syntax(i, "IRI (not a blank node)")));
    }
    alt((
        map(pname_ln, split_prefixed_name),
        map(parse_regex(&PNAME_NS, "PNAME_NS"), |raw| Iri::Prefixed {
            prefix: raw[..raw.len() - 1].to_owned(),
            local: String::new(),
        }),
    ))(i)
}

fn split_prefixed_name(raw: &str) -> Iri {
    let colon = raw.find(':').expect("PNAME_LN always contains ':'");
    Iri::Prefixed {
        prefix: raw[..colon].to_owned(),
        local: lex::unescape(&decode_pn_local(&raw[colon + 1..])),
    }
}

/// Turns `PLX` percent-escapes and backslash-escapes in a parsed
/// `PN_LOCAL` back into their literal characters, leaving `%HH` byte
/// escapes untouched (spec §4.5 `evaluateIRI`: "preserve `%HH` byte
/// escapes").
fn decode_pn_local(local: &str) -> String {
    let mut out = String::with_capacity(local.len());
    let mut chars = local.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '\\' {
            if let Some(&next) = chars.peek() {
                out.push(next);
                chars.next();
                continue;
            }
        }
        out.push(c);
    }
    out
}

/// `Literal ::= RDFLiteral | NumericLiteral | BooleanLiteral`.
pub(crate) fn literal<'a>(i: &'a str) -> PResult<'a, Literal> {
    alt((rdf_literal, numeric_literal, boolean_literal))(i)
}

fn rdf_literal<'a>(i: &'a str) -> PResult<'a, Literal> {
    let (i, (value, multiline, single_quote)) = string(i)?;
    if let Ok((i, lang)) = parse_regex(&LANGTAG, "language tag")(i) {
        return Ok((
            i,
            Literal::String {
                value,
                multiline,
                single_quote,
                language: Some(lang[1..].to_owned()),
                datatype: None,
            },
        ));
    }
    if let Ok((i, (_, dt))) = tuple((tag("^^"), iri))(i) {
        return Ok((
            i,
            Literal::String {
                value,
                multiline,
                single_quote,
                language: None,
                datatype: Some(dt),
            },
        ));
    }
    Ok((
        i,
        Literal::String {
            value,
            multiline,
            single_quote,
            language: None,
            datatype: None,
        },
    ))
}

/// `String ::= STRING_LITERAL_QUOTE | STRING_LITERAL_SINGLE_QUOTE |
/// STRING_LITERAL_LONG_QUOTE | STRING_LITERAL_LONG_SINGLE_QUOTE`.
fn string<'a>(i: &'a str) -> PResult<'a, (String, bool, bool)> {
    alt((
        map(parse_regex(&STRING_LITERAL_LONG_QUOTE, "'\"\"\"...\"\"\"'"), |raw| {
            (lex::unescape(unwrap_str(raw, 3)), true, false)
        }),
        map(
            parse_regex(&STRING_LITERAL_LONG_SINGLE_QUOTE, "\"'''...'''\""),
            |raw| (lex::unescape(unwrap_str(raw, 3)), true, true),
        ),
        map(parse_regex(&STRING_LITERAL_QUOTE, "'\"...\"'"), |raw| {
            (lex::unescape(unwrap_str(raw, 1)), false, false)
        }),
        map(parse_regex(&STRING_LITERAL_SINGLE_QUOTE, "\"'...'\""), |raw| {
            (lex::unescape(unwrap_str(raw, 1)), false, true)
        }),
    ))(i)
}

fn numeric_literal<'a>(i: &'a str) -> PResult<'a, Literal> {
    alt((
        map(parse_regex(&DOUBLE, "DOUBLE"), |lexical| Literal::Numeric {
            lexical: lexical.to_owned(),
            kind: NumericKind::Double,
        }),
        map(parse_regex(&DECIMAL, "DECIMAL"), |lexical| Literal::Numeric {
            lexical: lexical.to_owned(),
            kind: NumericKind::Decimal,
        }),
        map(parse_regex(&INTEGER, "INTEGER"), |lexical| Literal::Numeric {
            lexical: lexical.to_owned(),
            kind: NumericKind::Integer,
        }),
    ))(i)
}

fn boolean_literal<'a>(i: &'a str) -> PResult<'a, Literal> {
    alt((
        map(tag("true"), |_| Literal::Boolean(true)),
        map(tag("false"), |_| Literal::Boolean(false)),
    ))(i)
}
