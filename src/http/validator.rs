use serde::Deserialize;

use crate::http::error::HttpParserError;

/// Classification of a non-blank line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    Field,
    StartLine,
}

/// How a start-line with more than three space-separated tokens is split.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StartLineSplit {
    /// Split on every space and keep the first three tokens:
    /// `HTTP/1.1 404 Not Found` yields the message `Not`.
    #[default]
    Truncate,
    /// Split on the first two spaces only, the rest of the line becomes the
    /// third token: `HTTP/1.1 404 Not Found` yields the message `Not Found`.
    Rejoin,
}

pub struct Validator;

impl Validator {
    /// Field shape is tried first: the first space-delimited token holds a
    /// colon (`Name: value`, `Name:value`, `Name:`).
    ///
    /// A line without any space can never form three tokens, so it is routed
    /// to field handling as well, where a missing colon makes it a no-op.
    pub fn classify(line: &str) -> LineKind {
        match line.split_once(' ') {
            None => LineKind::Field,
            Some((first, _)) if first.contains(':') => LineKind::Field,
            Some(_) => LineKind::StartLine,
        }
    }

    /// Splits a field line into `(name, value)` at the first `": "`, falling
    /// back to the first `':'`. Later colons stay in the value.
    ///
    /// Returns `None` when the line has no colon or the name is empty; the
    /// caller skips such lines.
    pub fn split_field_line(line: &str) -> Option<(&str, &str)> {
        let (name, value) = line.split_once(": ").or_else(|| line.split_once(':'))?;
        if name.is_empty() {
            return None;
        }
        Some((name, value))
    }

    /// Checks that a start-line candidate has three non-empty tokens.
    ///
    /// Missing trailing tokens count as empty. The validator does not know
    /// whether it looks at a request or a status line.
    pub fn check_start_line(
        line: &str,
        split: StartLineSplit,
    ) -> Result<[&str; 3], HttpParserError> {
        let tokens = match split {
            StartLineSplit::Truncate => first_three(line.split(' ')),
            StartLineSplit::Rejoin => first_three(line.splitn(3, ' ')),
        };

        if tokens.iter().any(|t| t.is_empty()) {
            return Err(HttpParserError::bad_format(line));
        }
        Ok(tokens)
    }
}

fn first_three<'a>(mut parts: impl Iterator<Item = &'a str>) -> [&'a str; 3] {
    [
        parts.next().unwrap_or(""),
        parts.next().unwrap_or(""),
        parts.next().unwrap_or(""),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_field_shapes() {
        assert_eq!(Validator::classify("Host: example.com"), LineKind::Field);
        assert_eq!(Validator::classify("Host:example.com"), LineKind::Field);
        assert_eq!(Validator::classify("X-Empty:"), LineKind::Field);
        assert_eq!(Validator::classify("garbage-no-colon"), LineKind::Field);
    }

    #[test]
    fn classifies_start_lines() {
        assert_eq!(Validator::classify("GET / HTTP/1.1"), LineKind::StartLine);
        assert_eq!(Validator::classify("HTTP/1.1 200 OK"), LineKind::StartLine);
        // colon inside the request target, not in the first token
        assert_eq!(
            Validator::classify("GET http://example.com/ HTTP/1.1"),
            LineKind::StartLine
        );
        assert_eq!(Validator::classify("GET /"), LineKind::StartLine);
    }

    #[test]
    fn splits_on_first_separator_only() {
        assert_eq!(
            Validator::split_field_line("Referer: http://a/b"),
            Some(("Referer", "http://a/b"))
        );
        assert_eq!(Validator::split_field_line("X:1"), Some(("X", "1")));
        assert_eq!(Validator::split_field_line("X: a: b"), Some(("X", "a: b")));
        assert_eq!(Validator::split_field_line("X:  padded "), Some(("X", " padded ")));
        assert_eq!(Validator::split_field_line("X:"), Some(("X", "")));
    }

    #[test]
    fn unsplittable_field_lines_yield_nothing() {
        assert_eq!(Validator::split_field_line("garbage-no-colon"), None);
        assert_eq!(Validator::split_field_line(": value"), None);
    }

    #[test]
    fn start_line_needs_three_tokens() {
        assert_eq!(
            Validator::check_start_line("GET / HTTP/1.1", StartLineSplit::Truncate).unwrap(),
            ["GET", "/", "HTTP/1.1"]
        );
        assert!(Validator::check_start_line("GET /", StartLineSplit::Truncate).is_err());
        assert!(Validator::check_start_line("GET  HTTP/1.1", StartLineSplit::Truncate).is_err());
        assert!(Validator::check_start_line("GET /", StartLineSplit::Rejoin).is_err());
    }

    #[test]
    fn extra_tokens_are_truncated_or_rejoined() {
        let line = "HTTP/1.1 404 Not Found";
        assert_eq!(
            Validator::check_start_line(line, StartLineSplit::Truncate).unwrap(),
            ["HTTP/1.1", "404", "Not"]
        );
        assert_eq!(
            Validator::check_start_line(line, StartLineSplit::Rejoin).unwrap(),
            ["HTTP/1.1", "404", "Not Found"]
        );
    }
}
