//! Delimiter balance checking
//!
//! Scans every line for `()`, `[]` and `{}` and reports the first
//! imbalance. Open delimiters are kept on a [`RingDeque`] used as a stack.
//! Text after `//` is ignored. Quotes get no special treatment.

use crate::collections::{Deque, RingDeque};
use crate::interpreter::errors::SyntaxError;

fn closer_for(open: char) -> char {
    match open {
        '(' => ')',
        '[' => ']',
        _ => '}',
    }
}

/// Check that all delimiters in `lines` are balanced and properly nested
pub fn check_delimiters<S: AsRef<str>>(lines: &[S]) -> Result<(), SyntaxError> {
    let mut open: RingDeque<(char, usize)> = RingDeque::new();

    for (idx, line) in lines.iter().enumerate() {
        let line_number = idx + 1;
        let code = super::patterns::strip_comment(line.as_ref());

        for c in code.chars() {
            match c {
                '(' | '[' | '{' => {
                    open.push_front((c, line_number));
                }
                ')' | ']' | '}' => {
                    let Ok((opener, _)) = open.remove_front() else {
                        return Err(SyntaxError::UnmatchedClose {
                            delimiter: c,
                            line: line_number,
                        });
                    };
                    if closer_for(opener) != c {
                        return Err(SyntaxError::Mismatched {
                            open: opener,
                            close: c,
                            line: line_number,
                        });
                    }
                }
                _ => {}
            }
        }
    }

    match open.peek_front() {
        Ok(&(delimiter, line)) => Err(SyntaxError::Unclosed { delimiter, line }),
        Err(_) => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_balanced() {
        let lines = ["def a() {", "  b([1], {2})", "}"];
        assert_eq!(check_delimiters(&lines), Ok(()));
    }

    #[test]
    fn test_empty_source() {
        let lines: [&str; 0] = [];
        assert_eq!(check_delimiters(&lines), Ok(()));
    }

    #[test]
    fn test_unmatched_close() {
        let lines = ["def a() {", "}", ")"];
        let err = check_delimiters(&lines).unwrap_err();
        assert_eq!(
            err,
            SyntaxError::UnmatchedClose {
                delimiter: ')',
                line: 3
            }
        );
        assert_eq!(err.to_string(), "unmatched closed delimiter: ) at line 3");
    }

    #[test]
    fn test_mismatched_pair() {
        let lines = ["def a() {", "  b(]", "}"];
        let err = check_delimiters(&lines).unwrap_err();
        assert_eq!(err.to_string(), "delimiters not paired: ( and ] at line 2");
    }

    #[test]
    fn test_unclosed_reports_opening_line() {
        let lines = ["def a() {", "  print \"x\""];
        let err = check_delimiters(&lines).unwrap_err();
        assert_eq!(
            err,
            SyntaxError::Unclosed {
                delimiter: '{',
                line: 1
            }
        );
    }

    #[test]
    fn test_comments_are_skipped() {
        let lines = ["def a() { // (((", "} // ]"];
        assert_eq!(check_delimiters(&lines), Ok(()));
    }

    #[test]
    fn test_deep_nesting_grows_stack() {
        let open = "(".repeat(40);
        let close = ")".repeat(40);
        assert_eq!(check_delimiters(&[open, close]), Ok(()));
    }
}
