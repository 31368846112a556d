//! Turtle-specific terminals not already shared by [`crate::lex`] (spec
//! §4.4).

use crate::error::PResult;
use crate::util::parse_regex;
use lazy_static::lazy_static;
use nom::combinator::recognize;
use nom::sequence::tuple;
use regex::Regex;

lazy_static! {
    /// `PN_PREFIX` — a namespace prefix name, no leading/trailing `.`.
    pub static ref PN_PREFIX: Regex = Regex::new(r#"^([A-Za-z\u{00C0}-\u{00D6}\u{00D8}-\u{00F6}\u{00F8}-\u{02FF}\u{0370}-\u{037D}\u{037F}-\u{1FFF}\u{200C}-\u{200D}\u{2070}-\u{218F}\u{2C00}-\u{2FEF}\u{3001}-\u{D7FF}\u{F900}-\u{FDCF}\u{FDF0}-\u{FFFD}\U{00010000}-\U{000EFFFF}]([-\.0-9_A-Za-z\u{00B7}\u{00C0}-\u{00D6}\u{00D8}-\u{00F6}\u{00F8}-\u{02FF}\u{0300}-\u{037D}\u{037F}-\u{1FFF}\u{200C}-\u{200D}\u{203F}-\u{2040}\u{2070}-\u{218F}\u{2C00}-\u{2FEF}\u{3001}-\u{D7FF}\u{F900}-\u{FDCF}\u{FDF0}-\u{FFFD}\U{00010000}-\U{000EFFFF}]*[-0-9_A-Za-z\u{00B7}\u{00C0}-\u{00D6}\u{00D8}-\u{00F6}\u{00F8}-\u{02FF}\u{0300}-\u{037D}\u{037F}-\u{1FFF}\u{200C}-\u{200D}\u{203F}-\u{2040}\u{2070}-\u{218F}\u{2C00}-\u{2FEF}\u{3001}-\u{D7FF}\u{F900}-\u{FDCF}\u{FDF0}-\u{FFFD}\U{00010000}-\U{000EFFFF}])?)"#).unwrap();

    /// `PNAME_NS` — `PN_PREFIX? ':'`.
    pub static ref PNAME_NS: Regex = Regex::new(r#"^([A-Za-z\u{00C0}-\u{00D6}\u{00D8}-\u{00F6}\u{00F8}-\u{02FF}\u{0370}-\u{037D}\u{037F}-\u{1FFF}\u{200C}-\u{200D}\u{2070}-\u{218F}\u{2C00}-\u{2FEF}\u{3001}-\u{D7FF}\u{F900}-\u{FDCF}\u{FDF0}-\u{FFFD}\U{00010000}-\U{000EFFFF}]([-\.0-9_A-Za-z\u{00B7}\u{00C0}-\u{00D6}\u{00D8}-\u{00F6}\u{00F8}-\u{02FF}\u{0300}-\u{037D}\u{037F}-\u{1FFF}\u{200C}-\u{200D}\u{203F}-\u{2040}\u{2070}-\u{218F}\u{2C00}-\u{2FEF}\u{3001}-\u{D7FF}\u{F900}-\u{FDCF}\u{FDF0}-\u{FFFD}\U{00010000}-\U{000EFFFF}]*[-0-9_A-Za-z\u{00B7}\u{00C0}-\u{00D6}\u{00D8}-\u{00F6}\u{00F8}-\u{02FF}\u{0300}-\u{037D}\u{037F}-\u{1FFF}\u{200C}-\u{200D}\u{203F}-\u{2040}\u{2070}-\u{218F}\u{2C00}-\u{2FEF}\u{3001}-\u{D7FF}\u{F900}-\u{FDCF}\u{FDF0}-\u{FFFD}\U{00010000}-\U{000EFFFF}])?)?:"#).unwrap();

    /// `INTEGER` — `[+-]? [0-9]+`.
    pub static ref INTEGER: Regex = Regex::new(r#"^[+-]?[[:digit:]]+"#).unwrap();
    /// `DECIMAL` — requires the dot, no exponent.
    pub static ref DECIMAL: Regex = Regex::new(r#"^[+-]?[[:digit:]]*\.[[:digit:]]+"#).unwrap();
    /// `DOUBLE` — requires an exponent.
    pub static ref DOUBLE: Regex = Regex::new(r#"^[+-]?(([[:digit:]]+\.[[:digit:]]*[eE][+-]?[[:digit:]]+)|(\.[[:digit:]]+[eE][+-]?[[:digit:]]+)|([[:digit:]]+[eE][+-]?[[:digit:]]+))"#).unwrap();

    /// `ANON` — `'[' WS* ']'`.
    pub static ref ANON: Regex = Regex::new(r#"^\[[ \t\n\r]*(#[^\n\r]*\n[ \t\n\r]*)*\]"#).unwrap();
    /// `PLX` — `PERCENT | '\' [punctuation]`. Anchored on both
    /// alternatives so a standalone match never starts past position 0.
    pub static ref PLX: Regex = Regex::new(r#"^((%[[:xdigit:]]{2})|(\\[-_~\.!\$&'\(\)\*\+,;=/\?#@%]))"#).unwrap();
    /// `PERCENT` — `'%' HEX HEX`.
    pub static ref PERCENT: Regex = Regex::new(r#"^%[[:xdigit:]]{2}"#).unwrap();

    /// `PN_LOCAL ::= (PN_CHARS_U | ':' | [0-9] | PLX) ((PN_CHARS | '.' | ':' | PLX)* (PN_CHARS | ':' | PLX))?`,
    /// as a single anchored regex rather than `many0` followed by `opt`:
    /// `many0` commits to the longest match and never un-consumes it, so a
    /// PEG-style `many0(PN_CHARS | '.' | ...)` followed by an `opt` for the
    /// mandatory trailing atom greedily swallows a trailing bare `.` into
    /// the `many0` with nothing left for `opt` to refuse. A single regex's
    /// quantifier backtracks the star by one repetition at a time until the
    /// trailing mandatory atom matches, so `"o."` correctly yields `"o"`
    /// with the `.` left unconsumed.
    pub static ref PN_LOCAL: Regex = Regex::new(r#"^(?:[_0-9A-Za-z\u{00C0}-\u{00D6}\u{00D8}-\u{00F6}\u{00F8}-\u{02FF}\u{0370}-\u{037D}\u{037F}-\u{1FFF}\u{200C}-\u{200D}\u{2070}-\u{218F}\u{2C00}-\u{2FEF}\u{3001}-\u{D7FF}\u{F900}-\u{FDCF}\u{FDF0}-\u{FFFD}\U{00010000}-\U{000EFFFF}]|:|%[[:xdigit:]]{2}|\\[-_~\.!\$&'\(\)\*\+,;=/\?#@%])(?:(?:[-0-9_A-Za-z\u{00B7}\u{00C0}-\u{00D6}\u{00D8}-\u{00F6}\u{00F8}-\u{02FF}\u{0300}-\u{037D}\u{037F}-\u{1FFF}\u{200C}-\u{200D}\u{203F}-\u{2040}\u{2070}-\u{218F}\u{2C00}-\u{2FEF}\u{3001}-\u{D7FF}\u{F900}-\u{FDCF}\u{FDF0}-\u{FFFD}\U{00010000}-\U{000EFFFF}]|\.|:|%[[:xdigit:]]{2}|\\[-_~\.!\$&'\(\)\*\+,;=/\?#@%])*(?:[-0-9_A-Za-z\u{00B7}\u{00C0}-\u{00D6}\u{00D8}-\u{00F6}\u{00F8}-\u{02FF}\u{0300}-\u{037D}\u{037F}-\u{1FFF}\u{200C}-\u{200D}\u{203F}-\u{2040}\u{2070}-\u{218F}\u{2C00}-\u{2FEF}\u{3001}-\u{D7FF}\u{F900}-\u{FDCF}\u{FDF0}-\u{FFFD}\U{00010000}-\U{000EFFFF}]|:|%[[:xdigit:]]{2}|\\[-_~\.!\$&'\(\)\*\+,;=/\?#@%]))?"#).unwrap();
}

/// `PNAME_LN ::= PNAME_NS PN_LOCAL`.
pub fn pname_ln(i: &str) -> PResult<&str> {
    recognize(tuple((parse_regex(&PNAME_NS, "PNAME_NS"), pn_local)))(i)
}

/// `PN_LOCAL ::= (PN_CHARS_U | ':' | [0-9] | PLX) ((PN_CHARS | '.' | ':' | PLX)* (PN_CHARS | ':' | PLX))?`.
/// See [`PN_LOCAL`]'s doc comment for why this is one regex rather than a
/// `many0`/`opt` combinator pair.
pub fn pn_local(i: &str) -> PResult<&str> {
    parse_regex(&PN_LOCAL, "PN_LOCAL")(i)
}

#[cfg(test)]
mod test {
    use super::*;
    use test_case::test_case;

    #[test_case("123" => true ; "integer")]
    #[test_case("-123" => true ; "negative integer")]
    #[test_case("123.45" => false ; "decimal")]
    fn check_integer(to_check: &str) -> bool {
        INTEGER.is_match(to_check)
    }

    #[test_case("123.45" => true ; "decimal")]
    #[test_case(".45" => true ; "leading dot with no integer part")]
    #[test_case("123" => false ; "plain integer is not decimal")]
    fn check_decimal(to_check: &str) -> bool {
        DECIMAL.is_match(to_check)
    }

    #[test_case("1.0e10" => true ; "double with dot")]
    #[test_case("1e10" => true ; "double without dot")]
    #[test_case("1.0" => false ; "decimal is not double")]
    fn check_double(to_check: &str) -> bool {
        DOUBLE.is_match(to_check)
    }

    #[test_case("[]" => true ; "empty")]
    #[test_case("[ \t\n]" => true ; "whitespace only")]
    #[test_case("[a]" => false ; "not empty")]
    fn check_anon(to_check: &str) -> bool {
        ANON.is_match(to_check)
    }

    #[test_case("ex:name" => Ok(("", "ex:name")) ; "simple prefixed name")]
    #[test_case("ex:a.b" => Ok(("", "ex:a.b")) ; "embedded dot")]
    #[test_case("ex:o." => Ok((".", "ex:o")) ; "trailing dot with no separating whitespace is not part of the name")]
    fn check_pname_ln(i: &str) -> PResult<&str> {
        pname_ln(i)
    }

    #[test_case("o" => Ok(("", "o")) ; "no trailing dot")]
    #[test_case("o." => Ok((".", "o")) ; "trailing dot immediately after the name is left unconsumed")]
    #[test_case("a.b" => Ok(("", "a.b")) ; "embedded dot followed by more PN_CHARS is kept")]
    #[test_case("a.b." => Ok((".", "a.b")) ; "only a dot with nothing after it is excluded")]
    fn check_pn_local(i: &str) -> PResult<&str> {
        pn_local(i)
    }
}
