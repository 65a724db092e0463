//! Line-level recognizers
//!
//! Three line shapes matter to the interpreter:
//!
//! ```text
//! def name(args) {      method header, optional trailing `{`
//! print "text" ...      output line
//! name(args) ...        call
//! ```
//!
//! Everything after `//` on a line is a comment for brace counting purposes.

use regex::Regex;
use std::sync::OnceLock;

fn header_regex() -> &'static Regex {
    static HEADER: OnceLock<Regex> = OnceLock::new();
    HEADER.get_or_init(|| {
        Regex::new(r"^\s*def\s+(?:[^(]*\s)?([A-Za-z_]\w*)\s*\((.*)$")
            .expect("header pattern is valid")
    })
}

fn print_regex() -> &'static Regex {
    static PRINT: OnceLock<Regex> = OnceLock::new();
    PRINT.get_or_init(|| Regex::new(r#"^\s*print\s*"(.*)".*$"#).expect("print pattern is valid"))
}

fn call_regex() -> &'static Regex {
    static CALL: OnceLock<Regex> = OnceLock::new();
    CALL.get_or_init(|| {
        Regex::new(r"^\s*([A-Za-z_]\w*)\s*\(.*?\).*$").expect("call pattern is valid")
    })
}

/// A recognized `def` line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Header<'a> {
    pub name: &'a str,
    /// Whether the header ends in (or continues past) an opening `{`
    pub opens_body: bool,
    /// Text following the opening `{`, empty when there is none
    pub rest: &'a str,
}

/// Match a method header line.
///
/// The argument list may itself contain parentheses: it ends at the first `)`
/// followed by nothing, a comment, or the opening `{`.
pub fn match_header(line: &str) -> Option<Header<'_>> {
    let caps = header_regex().captures(line)?;
    let name = caps.get(1)?.as_str();
    let after_open = caps.get(2)?.as_str();

    after_open
        .match_indices(')')
        .find_map(|(idx, _)| header_tail(name, &after_open[idx + 1..]))
}

fn header_tail<'a>(name: &'a str, tail: &'a str) -> Option<Header<'a>> {
    let code = strip_comment(tail).trim_start();

    if code.trim_end().is_empty() {
        return Some(Header {
            name,
            opens_body: false,
            rest: "",
        });
    }
    let rest = code.strip_prefix('{')?;
    Some(Header {
        name,
        opens_body: true,
        rest,
    })
}

/// Text between the quotes of a `print "..."` line
pub fn print_text(line: &str) -> Option<&str> {
    print_regex()
        .captures(line)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Name of the method invoked by a call line
pub fn call_target(line: &str) -> Option<&str> {
    call_regex()
        .captures(line)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// The part of a line before any `//` comment
pub fn strip_comment(line: &str) -> &str {
    match line.find("//") {
        Some(idx) => &line[..idx],
        None => line,
    }
}

/// Net change in `{}` nesting across a line, ignoring comments
pub fn brace_delta(line: &str) -> i32 {
    strip_comment(line).chars().fold(0, |depth, c| match c {
        '{' => depth + 1,
        '}' => depth - 1,
        _ => depth,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_forms() {
        let header = match_header("def main() {").unwrap();
        assert_eq!(header.name, "main");
        assert!(header.opens_body);
        assert_eq!(header.rest, "");

        let header = match_header("def int  add(a, b)").unwrap();
        assert_eq!(header.name, "add");
        assert!(!header.opens_body);

        let header = match_header(r#"def a() { print "hi" }"#).unwrap();
        assert_eq!(header.rest, r#" print "hi" }"#);

        let header = match_header("def a() // entry point").unwrap();
        assert!(!header.opens_body);

        let header = match_header("def a(f(x), g()) {").unwrap();
        assert_eq!(header.name, "a");
        assert!(header.opens_body);
        assert_eq!(header.rest, "");

        let header = match_header(r#"def a() { print("x") }"#).unwrap();
        assert_eq!(header.rest, r#" print("x") }"#);

        assert!(match_header("define a() {").is_none());
        assert!(match_header("def a() junk").is_none());
        assert!(match_header("a()").is_none());
    }

    #[test]
    fn test_print_text() {
        assert_eq!(print_text(r#"    print "hello world""#), Some("hello world"));
        assert_eq!(print_text(r#"print"x" // trailing"#), Some("x"));
        assert_eq!(print_text(r#"print hi"#), None);
        assert_eq!(print_text(r#"x = print "y""#), None);
    }

    #[test]
    fn test_call_target() {
        assert_eq!(call_target("  helper()"), Some("helper"));
        assert_eq!(call_target("helper (1, 2); // go"), Some("helper"));
        assert_eq!(call_target(r#"print("x")"#), Some("print"));
        assert_eq!(call_target("x = helper()"), None);
        assert_eq!(call_target("helper"), None);
    }

    #[test]
    fn test_brace_delta_ignores_comments() {
        assert_eq!(brace_delta("if x { y { }"), 1);
        assert_eq!(brace_delta("} // {{{"), -1);
        assert_eq!(brace_delta("plain"), 0);
    }
}
