//! Manifest-driven test driver (spec §4.10): interface only. A real
//! test suite implements [`TestCase`] per manifest entry and drives it
//! through [`run`]; no manifest format or file I/O is specified here.

use crate::config::ParserConfig;
use crate::error::Error;
use crate::nquads;

/// The four test kinds a manifest-driven suite must support.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TestKind {
    /// The action document must parse successfully.
    PositiveSyntax,
    /// The action document must fail to parse.
    NegativeSyntax,
    /// The action document must parse and evaluate to the given result.
    Eval,
    /// The action document must fail to parse or evaluate.
    NegativeEval,
}

/// One manifest entry: what to run and, for `Eval`, what to compare
/// the evaluated result against.
pub trait TestCase {
    /// Which of the four kinds this entry is.
    fn kind(&self) -> TestKind;
    /// The dialect text to parse (and, for `Eval`/`NegativeEval`, evaluate).
    fn action(&self) -> &str;
    /// The expected N-Quads result, present only for `Eval` entries.
    fn expected_result(&self) -> Option<&nquads::Document> {
        None
    }
    /// Configuration to parse/evaluate the action with.
    fn config(&self) -> ParserConfig {
        ParserConfig::default()
    }
}

/// Outcome of driving a single [`TestCase`].
#[derive(Debug)]
pub enum Outcome {
    /// The test behaved as its [`TestKind`] requires.
    Pass,
    /// The test did not behave as its [`TestKind`] requires.
    Fail {
        /// Human-readable description of the mismatch.
        reason: String,
    },
    /// Parsing or evaluation raised an error where `Pass` required none.
    Error(Error),
}

/// Dispatches a single manifest entry per spec §4.10, entirely within
/// the Turtle/TriG surface (the only dialects with an evaluator).
///
/// Implementations that drive N-Triples/N-Quads/N3 entries parse
/// directly with the relevant dialect's `parse_document` instead of
/// this function, since those have no `evaluate_document`.
pub fn run(case: &dyn TestCase, parse: impl Fn(&str) -> Result<crate::turtle::Document, Error>) -> Outcome {
    let config = case.config();
    match case.kind() {
        TestKind::PositiveSyntax => match parse(case.action()) {
            Ok(_) => Outcome::Pass,
            Err(e) => Outcome::Fail {
                reason: format!("expected successful parse, got {}", e),
            },
        },
        TestKind::NegativeSyntax => match parse(case.action()) {
            Ok(_) => Outcome::Fail {
                reason: "expected a parse failure, but parsing succeeded".to_owned(),
            },
            Err(_) => Outcome::Pass,
        },
        TestKind::Eval => {
            let doc = match parse(case.action()) {
                Ok(doc) => doc,
                Err(e) => return Outcome::Error(e),
            };
            let evaluated = match crate::turtle::evaluate_document(&doc, &config) {
                Ok(quads) => quads,
                Err(e) => return Outcome::Error(e),
            };
            match case.expected_result() {
                Some(expected) if evaluated.equal(expected) => Outcome::Pass,
                Some(_) => Outcome::Fail {
                    reason: "evaluated result does not equal the expected document".to_owned(),
                },
                None => Outcome::Fail {
                    reason: "Eval test case is missing an expected result".to_owned(),
                },
            }
        }
        TestKind::NegativeEval => match parse(case.action()).and_then(|doc| crate::turtle::evaluate_document(&doc, &config)) {
            Ok(_) => Outcome::Fail {
                reason: "expected parsing or evaluation to fail, but both succeeded".to_owned(),
            },
            Err(_) => Outcome::Pass,
        },
    }
}

#[cfg(test)]
mod test {
    use super::*;

    struct Case {
        kind: TestKind,
        action: &'static str,
    }

    impl TestCase for Case {
        fn kind(&self) -> TestKind {
            self.kind
        }
        fn action(&self) -> &str {
            self.action
        }
    }

    #[test]
    fn positive_syntax_passes_on_valid_turtle() {
        let case = Case {
            kind: TestKind::PositiveSyntax,
            action: "<http://e/s> <http://e/p> <http://e/o> .",
        };
        assert!(matches!(run(&case, crate::turtle::parse_document), Outcome::Pass));
    }

    #[test]
    fn negative_syntax_passes_on_invalid_turtle() {
        let case = Case {
            kind: TestKind::NegativeSyntax,
            action: "<http://e/s> <http://e/p>",
        };
        assert!(matches!(run(&case, crate::turtle::parse_document), Outcome::Pass));
    }
}
