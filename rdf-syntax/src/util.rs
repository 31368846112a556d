//! Utility to make parsing easier.

use crate::error::{Error, PResult};
use nom::Err as NomError;
use regex::Regex;

/// Tries to capture the given regex.
///
/// The leftmost match is returned. The input is consumed to the end of the
/// match.
///
/// # Skipped content
///
/// The way regular expressions work it is possible that this parser skips
/// significant content. All regexes passed to this helper are anchored with
/// `^` to prevent this.
pub fn parse_regex<'a>(re: &'static Regex, expected: &'static str) -> impl Fn(&'a str) -> PResult<'a, &'a str> {
    move |i: &'a str| {
        if let Some(found) = re.find(i) {
            let captured = found.as_str();
            let end = found.end();
            Ok((&i[end..], captured))
        } else {
            Err(NomError::Error(Error::syntax(i, expected)))
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use lazy_static::lazy_static;

    lazy_static! {
        pub static ref AB: Regex = Regex::new(r#"^a+b"#).unwrap();
    }

    #[test]
    fn check_regex() {
        let parser = parse_regex(&AB, "a+b");
        let (r, f) = parser("aabt").unwrap();
        assert_eq!(f, "aab");
        assert_eq!(r, "t");

        assert!(parser("tt").is_err());
    }
}
