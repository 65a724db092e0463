//! Source text to method definitions
//!
//! [`Parser::new`] validates delimiter balance up front, so a `Parser` only
//! ever exists for well-formed source. [`Parser::parse_program`] then walks the
//! lines and collects one [`MethodDef`] per `def` header:
//!
//! - `def a() { body }` on one line: the text between the braces is the single
//!   body line (nothing when it is blank)
//! - `def a() {` followed by lines: every line up to and including the one
//!   that brings brace depth back to zero
//! - `def a()` with no brace: an empty method
//!
//! Lines outside any method body are ignored.

use super::ast::MethodDef;
use super::delimiters::check_delimiters;
use super::patterns::{brace_delta, match_header, strip_comment};
use crate::interpreter::errors::SyntaxError;

/// Line-oriented method parser
pub struct Parser<'a> {
    lines: Vec<&'a str>,
    position: usize,
}

impl<'a> Parser<'a> {
    pub fn new(source: &'a str) -> Result<Self, SyntaxError> {
        let lines: Vec<&str> = source.lines().collect();
        check_delimiters(&lines)?;
        Ok(Parser { lines, position: 0 })
    }

    fn next_line(&mut self) -> Option<&'a str> {
        let line = self.lines.get(self.position).copied();
        if line.is_some() {
            self.position += 1;
        }
        line
    }

    /// Parse every method definition, in source order
    pub fn parse_program(&mut self) -> Vec<MethodDef> {
        let mut methods = Vec::new();

        while let Some(line) = self.next_line() {
            let Some(header) = match_header(line) else {
                continue;
            };
            let mut def = MethodDef::new(header.name, self.position);
            if header.opens_body {
                self.parse_body(&mut def, header.rest);
            }
            methods.push(def);
        }

        methods
    }

    /// Collect body lines after the opening `{`, `rest` being the header text following it
    fn parse_body(&mut self, def: &mut MethodDef, rest: &str) {
        let mut depth: i32 = 1;

        for (idx, c) in strip_comment(rest).char_indices() {
            match c {
                '{' => depth += 1,
                '}' => depth -= 1,
                _ => {}
            }
            if depth == 0 {
                let inner = rest[..idx].trim();
                if !inner.is_empty() {
                    def.origin = def.header_line;
                    def.lines.push(inner.to_string());
                }
                return;
            }
        }

        if !strip_comment(rest).trim().is_empty() {
            def.origin = def.header_line;
            def.lines.push(rest.trim().to_string());
        }

        while depth > 0 {
            let Some(line) = self.next_line() else {
                break;
            };
            def.lines.push(line.to_string());
            depth += brace_delta(line);
        }
    }
}
