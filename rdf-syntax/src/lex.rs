//! Shared PEG lexical layer (spec §4.1): the character-class and terminal
//! productions cited, unmodified, by every dialect's grammar.
//!
//! Every regex below is anchored with `^` so [`crate::util::parse_regex`]
//! never silently skips leading content.

use crate::error::PResult;
use crate::util::parse_regex;
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// `PN_CHARS_BASE` (spec §4.1).
    pub static ref PN_CHARS_BASE: Regex = Regex::new(r#"^[A-Za-z\u{00C0}-\u{00D6}\u{00D8}-\u{00F6}\u{00F8}-\u{02FF}\u{0370}-\u{037D}\u{037F}-\u{1FFF}\u{200C}-\u{200D}\u{2070}-\u{218F}\u{2C00}-\u{2FEF}\u{3001}-\u{D7FF}\u{F900}-\u{FDCF}\u{FDF0}-\u{FFFD}\U{00010000}-\U{000EFFFF}]"#).unwrap();

    /// `HEX` — a single hexadecimal digit.
    pub static ref HEX: Regex = Regex::new(r#"^[[:xdigit:]]"#).unwrap();

    /// `UCHAR` = `\uXXXX | \UXXXXXXXX`.
    pub static ref UCHAR: Regex = Regex::new(r#"^(\\u[[:xdigit:]]{4})|(\\U[[:xdigit:]]{8})"#).unwrap();

    /// `ECHAR` = `\` followed by one of `tbnrf"'\`.
    pub static ref ECHAR: Regex = Regex::new(r#"^\\[tbnrf"'\\]"#).unwrap();

    /// `LANGTAG` = `'@' [a-zA-Z]+ ('-' [a-zA-Z0-9]+)*`.
    pub static ref LANGTAG: Regex = Regex::new(r#"^@[[:alpha:]]+(-[[:alnum:]]+)*"#).unwrap();

    /// Body of an `IRIREF` without the surrounding angle brackets. Used both
    /// to parse `<...>` and to validate a resolved absolute IRI.
    pub static ref IRIREF_BODY: Regex = Regex::new(r#"^([^\u{00}-\u{20}<>"\{\}\|\^`\\]|(\\u[[:xdigit:]]{4})|(\\U[[:xdigit:]]{8}))*"#).unwrap();

    /// `IRIREF` including the surrounding angle brackets.
    pub static ref IRIREF: Regex = Regex::new(r#"^<([^\u{00}-\u{20}<>"\{\}\|\^`\\]|(\\u[[:xdigit:]]{4})|(\\U[[:xdigit:]]{8}))*>"#).unwrap();

    /// An `IRIREF` body, anchored at both ends, for standalone validation of
    /// an already-resolved absolute IRI (no angle brackets).
    pub static ref ABSOLUTE_IRI: Regex = Regex::new(r#"(?x)
        ^[A-Za-z][A-Za-z0-9+.-]*:
        ([^\u{00}-\u{20}<>"\{\}\|\^`\\])*
        $"#).unwrap();

    /// `STRING_LITERAL_QUOTE` — `"..."`, no embedded newline.
    pub static ref STRING_LITERAL_QUOTE: Regex = Regex::new(r#"^"([^\u{22}\u{5C}\u{A}\u{D}]|(\\[tbnrf"'\\])|(\\u[[:xdigit:]]{4})|(\\U[[:xdigit:]]{8}))*""#).unwrap();

    /// `STRING_LITERAL_SINGLE_QUOTE` — `'...'`, no embedded newline.
    pub static ref STRING_LITERAL_SINGLE_QUOTE: Regex = Regex::new(r#"^'([^\u{27}\u{5C}\u{A}\u{D}]|(\\[tbnrf"'\\])|(\\u[[:xdigit:]]{4})|(\\U[[:xdigit:]]{8}))*'"#).unwrap();

    /// `STRING_LITERAL_LONG_QUOTE` — `"""..."""`, newlines permitted.
    pub static ref STRING_LITERAL_LONG_QUOTE: Regex = Regex::new(r#"^"""((("|"")?([^"\\]|(\\[tbnrf"'\\])|(\\u[[:xdigit:]]{4})|(\\U[[:xdigit:]]{8}))))*""""#).unwrap();

    /// `STRING_LITERAL_LONG_SINGLE_QUOTE` — `'''...'''`, newlines permitted.
    pub static ref STRING_LITERAL_LONG_SINGLE_QUOTE: Regex = Regex::new(r#"^'''((('|'')?([^'\\]|(\\[tbnrf"'\\])|(\\u[[:xdigit:]]{4})|(\\U[[:xdigit:]]{8}))))*'''"#).unwrap();

    /// Comment: `'#'` up to but excluding the next LF/CR.
    pub static ref COMMENT: Regex = Regex::new(r#"^#[^\n\r]*"#).unwrap();

    /// One unit of Turtle/TriG/N3 whitespace: a single space/tab/LF/CR, or a
    /// full comment.
    pub static ref WS: Regex = Regex::new(r#"^([ \t\n\r]|(#[^\n\r]*))"#).unwrap();

    /// One or more units of [`WS`].
    pub static ref WS_MANY1: Regex = Regex::new(r#"^([ \t\n\r]|(#[^\n\r]*))+"#).unwrap();

    /// Zero or more units of [`WS`].
    pub static ref WS_MANY0: Regex = Regex::new(r#"^([ \t\n\r]|(#[^\n\r]*))*"#).unwrap();

    /// N-Triples/N-Quads inline whitespace: one or more spaces/tabs (no
    /// comments, no newlines — those terminate the statement).
    pub static ref NT_WS: Regex = Regex::new(r#"^[ \t]+"#).unwrap();

    /// N-Triples/N-Quads end-of-line: one or more LF/CR, optionally preceded
    /// by inline whitespace and/or a comment.
    pub static ref NT_EOL: Regex = Regex::new(r#"^[ \t]*(#[^\n\r]*)?[\n\r]+"#).unwrap();

    /// `BLANK_NODE_LABEL ::= '_:' (PN_CHARS_U | [0-9]) ((PN_CHARS | '.')* PN_CHARS)?`,
    /// as a single anchored regex rather than `many0` followed by `opt`:
    /// `many0` commits to its longest match and never un-consumes it, so a
    /// PEG-style `many0(PN_CHARS | '.')` followed by an `opt` for the
    /// mandatory trailing `PN_CHARS` greedily swallows a trailing bare `.`
    /// into the `many0` with nothing left for `opt` to refuse (e.g. `_:a.`
    /// immediately followed by the statement terminator, no intervening
    /// whitespace). A single regex's quantifier backtracks the star by one
    /// repetition at a time until the trailing mandatory atom matches, so
    /// the `.` is correctly left unconsumed.
    pub static ref BLANK_NODE_LABEL: Regex = Regex::new(r#"^_:(?:[_0-9A-Za-z\u{00C0}-\u{00D6}\u{00D8}-\u{00F6}\u{00F8}-\u{02FF}\u{0370}-\u{037D}\u{037F}-\u{1FFF}\u{200C}-\u{200D}\u{2070}-\u{218F}\u{2C00}-\u{2FEF}\u{3001}-\u{D7FF}\u{F900}-\u{FDCF}\u{FDF0}-\u{FFFD}\U{00010000}-\U{000EFFFF}])(?:(?:[-0-9_A-Za-z\u{00B7}\u{00C0}-\u{00D6}\u{00D8}-\u{00F6}\u{00F8}-\u{02FF}\u{0300}-\u{037D}\u{037F}-\u{1FFF}\u{200C}-\u{200D}\u{203F}-\u{2040}\u{2070}-\u{218F}\u{2C00}-\u{2FEF}\u{3001}-\u{D7FF}\u{F900}-\u{FDCF}\u{FDF0}-\u{FFFD}\U{00010000}-\U{000EFFFF}]|\.)*[-0-9_A-Za-z\u{00B7}\u{00C0}-\u{00D6}\u{00D8}-\u{00F6}\u{00F8}-\u{02FF}\u{0300}-\u{037D}\u{037F}-\u{1FFF}\u{200C}-\u{200D}\u{203F}-\u{2040}\u{2070}-\u{218F}\u{2C00}-\u{2FEF}\u{3001}-\u{D7FF}\u{F900}-\u{FDCF}\u{FDF0}-\u{FFFD}\U{00010000}-\U{000EFFFF}])?"#).unwrap();
}

/// Parses a `BLANK_NODE_LABEL`, shared verbatim by N-Triples, N-Quads,
/// Turtle and TriG.
pub fn blank_node_label(i: &str) -> PResult<&str> {
    parse_regex(&BLANK_NODE_LABEL, "BLANK_NODE_LABEL")(i)
}

/// Parses at least one unit of Turtle-family whitespace (including comments).
pub fn multispace1(i: &str) -> PResult<&str> {
    parse_regex(&WS_MANY1, "whitespace")(i)
}

/// Parses zero or more units of Turtle-family whitespace (including comments).
pub fn multispace0(i: &str) -> PResult<&str> {
    parse_regex(&WS_MANY0, "whitespace")(i)
}

/// Resolves `ECHAR` and `UCHAR` escapes in an already-delimited lexical
/// body (a string literal's contents, or an `IRIREF`'s body) into their
/// final Unicode text. Unrecognized escape sequences pass through
/// unchanged, matching spec §4.5.1's "unrecognized escape sequences pass
/// through as `\c`".
pub fn unescape(body: &str) -> String {
    let mut out = String::with_capacity(body.len());
    let mut chars = body.chars().peekable();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.peek().copied() {
            Some('t') => { out.push('\t'); chars.next(); }
            Some('b') => { out.push('\u{0008}'); chars.next(); }
            Some('n') => { out.push('\n'); chars.next(); }
            Some('r') => { out.push('\r'); chars.next(); }
            Some('f') => { out.push('\u{000C}'); chars.next(); }
            Some('"') => { out.push('"'); chars.next(); }
            Some('\'') => { out.push('\''); chars.next(); }
            Some('\\') => { out.push('\\'); chars.next(); }
            Some('u') => {
                chars.next();
                if let Some(ch) = take_hex_escape(&mut chars, 4) {
                    out.push(ch);
                } else {
                    out.push_str("\\u");
                }
            }
            Some('U') => {
                chars.next();
                if let Some(ch) = take_hex_escape(&mut chars, 8) {
                    out.push(ch);
                } else {
                    out.push_str("\\U");
                }
            }
            _ => out.push('\\'),
        }
    }
    out
}

fn take_hex_escape(chars: &mut std::iter::Peekable<std::str::Chars>, len: usize) -> Option<char> {
    let mut digits = String::with_capacity(len);
    for _ in 0..len {
        match chars.peek() {
            Some(c) if c.is_ascii_hexdigit() => {
                digits.push(*c);
                chars.next();
            }
            _ => return None,
        }
    }
    u32::from_str_radix(&digits, 16)
        .ok()
        .and_then(std::char::from_u32)
}

/// Escapes a lexical value for re-serialization inside a double-quoted
/// `STRING_LITERAL_QUOTE`. The inverse of [`unescape`] (spec §4.5.1 steps
/// 2-3): the named control characters get their short `ECHAR` form, and
/// every other bare character below `0x20` or in `[0x7F, 0xFFFF]` is
/// re-emitted as `\uXXXX` (uppercase, zero-padded), with anything above
/// the BMP as `\UXXXXXXXX`, so the result is pure ASCII.
pub fn escape(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\t' => out.push_str("\\t"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\u{0008}' => out.push_str("\\u0008"),
            '\u{000C}' => out.push_str("\\u000C"),
            c if (c as u32) < 0x20 || (0x7F..=0xFFFF).contains(&(c as u32)) => {
                out.push_str(&format!("\\u{:04X}", c as u32));
            }
            c if (c as u32) > 0xFFFF => {
                out.push_str(&format!("\\U{:08X}", c as u32));
            }
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod test {
    use super::*;
    use test_case::test_case;

    #[test_case("<>" => true ; "empty string")]
    #[test_case("<http://www.w3.org/1999/02/>" => true ; "iri")]
    #[test_case("<\\u0ace>" => true ; "numeric escape small")]
    #[test_case("<\0>" => false ; "null character")]
    #[test_case("<  >" => false ; "space")]
    #[test_case("<\">" => false ; "quote")]
    fn check_iriref(to_check: &str) -> bool {
        IRIREF.is_match(to_check)
    }

    #[test_case("_:example  rest" => Ok(("  rest", "_:example")) ; "start alpha")]
    #[test_case("_:0  rest" => Ok(("  rest", "_:0")) ; "start num")]
    #[test_case("_:a.b  rest" => Ok(("  rest", "_:a.b")) ; "embedded dot")]
    #[test_case("_:a." => Ok((".", "_:a")) ; "trailing dot with no separating whitespace is not part of the label")]
    #[test_case("_:a.b." => Ok((".", "_:a.b")) ; "only a dot with nothing after it is excluded")]
    fn check_blank_node_label(i: &str) -> PResult<&str> {
        blank_node_label(i)
    }

    #[test_case("http://a/b" => true ; "absolute")]
    #[test_case("a/b" => false ; "relative")]
    #[test_case("" => false ; "empty")]
    fn check_absolute_iri(to_check: &str) -> bool {
        ABSOLUTE_IRI.is_match(to_check)
    }

    #[test_case("a\tb" => r"a\tb" ; "tab")]
    #[test_case("a\u{0008}b" => r"a\u0008b" ; "backspace")]
    #[test_case("a\u{000C}b" => r"a\u000Cb" ; "form feed")]
    #[test_case("a\nb" => r"a\nb" ; "newline")]
    #[test_case("a\rb" => r"a\rb" ; "carriage return")]
    #[test_case("a\"b" => r#"a\"b"# ; "quote")]
    #[test_case(r"a\b" => r"a\\b" ; "backslash")]
    #[test_case("a\u{7F}b" => r"a\u007Fb" ; "delete is escaped despite not being a named control")]
    #[test_case("caf\u{00E9}" => r"caf\u00E9" ; "latin-1 supplement is escaped, keeping output ascii")]
    #[test_case("\u{65E5}\u{672C}\u{8A9E}" => r"\u65E5\u672C\u8A9E" ; "cjk bmp characters are escaped")]
    #[test_case("\u{1F600}" => r"\U0001F600" ; "astral plane character uses the 8-digit form")]
    #[test_case("plain ascii" => "plain ascii" ; "ordinary ascii passes through untouched")]
    fn check_escape(value: &str) -> String {
        escape(value)
    }

    #[test]
    fn escape_is_a_left_inverse_of_unescape_for_named_escapes() {
        let source = r#"line1\nline2\ttabbed\u00E9"#;
        let unescaped = unescape(source);
        assert_eq!(escape(&unescaped), r"line1\nline2\ttabbed\u00E9");
    }
}
