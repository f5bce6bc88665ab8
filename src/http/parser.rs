use std::borrow::Cow;

use crate::config::{LineEndings, ParserConfig};
use crate::http::error::HttpParserError;
use crate::http::fields::{FieldEntry, HttpField, HttpFieldCollection};
use crate::http::request::HttpRequestHeader;
use crate::http::response::HttpResponseHeader;
use crate::http::validator::{LineKind, Validator};
use crate::http::{HttpHeader, MessageKind};

/// Characters stripped from each value of a repeated field before joining.
const JOIN_TRIMMED: &[char] = &[' ', '\t', '\n', '\r', '\0', '\x0B'];

/// Builds the header variant matching `kind` from validated start-line tokens.
pub fn parse_start_line(tokens: [&str; 3], kind: MessageKind) -> HttpHeader {
    let [first, second, third] = tokens;
    match kind {
        MessageKind::Request => HttpHeader::Request(HttpRequestHeader::new(first, second, third)),
        MessageKind::Response => {
            HttpHeader::Response(HttpResponseHeader::new(first, second, third))
        }
    }
}

/// Parses a complete raw HTTP message held in memory.
///
/// The parser is single pass: every non-blank line is either the start-line,
/// which replaces the current header, or a field line added to the field
/// collection. Calling [`parse`](Self::parse) again drops the previous header
/// but keeps the fields gathered so far; use
/// [`clear_fields`](Self::clear_fields) to start over.
#[derive(Debug, Clone, Default)]
pub struct HttpParser {
    raw: String,
    header: Option<HttpHeader>,
    fields: HttpFieldCollection,
    config: ParserConfig,
}

impl HttpParser {
    pub fn new(kind: MessageKind) -> Self {
        Self::with_config(ParserConfig::new(kind))
    }

    pub fn with_config(config: ParserConfig) -> Self {
        Self::with_fields(config, HttpFieldCollection::new())
    }

    /// Starts from a pre-built field collection; parsed fields are added to it.
    pub fn with_fields(config: ParserConfig, fields: HttpFieldCollection) -> Self {
        Self {
            raw: String::new(),
            header: None,
            fields,
            config,
        }
    }

    /// Parses `raw`, line by line.
    ///
    /// Fails with [`HttpParserError::BadFormat`] on the first start-line
    /// candidate without three non-empty tokens, or when the text holds no
    /// start-line at all. Fields read before the failure stay in the collection.
    pub fn parse(&mut self, raw: &str) -> Result<(), HttpParserError> {
        self.raw = raw.to_string();
        self.header = None;

        for line in raw.split('\n') {
            let line = match self.config.line_endings {
                LineEndings::Crlf => line.strip_suffix('\r').unwrap_or(line),
                LineEndings::Lf => line,
            };
            if line.trim().is_empty() {
                continue;
            }

            let kind = Validator::classify(line);
            tracing::trace!(?kind, line, "classified line");

            match kind {
                LineKind::Field => self.add_field(line)?,
                LineKind::StartLine => self.add_header(line)?,
            }
        }

        if self.header.is_none() {
            return Err(HttpParserError::missing_start_line());
        }
        Ok(())
    }

    fn add_header(&mut self, line: &str) -> Result<(), HttpParserError> {
        let tokens = Validator::check_start_line(line, self.config.start_line)?;
        let header = parse_start_line(tokens, self.config.message);
        tracing::debug!(%header, "parsed start-line");
        self.header = Some(header);
        Ok(())
    }

    /// Lines without a name/value pair are skipped once a start-line is known.
    /// Before that they are start-line candidates and must pass validation.
    fn add_field(&mut self, line: &str) -> Result<(), HttpParserError> {
        match Validator::split_field_line(line) {
            Some((name, value)) => self.fields.add(HttpField::new(name, value)),
            None if self.header.is_none() => return self.add_header(line),
            None => tracing::debug!(line, "skipping field line without name/value"),
        }
        Ok(())
    }

    /// Returns the value of field `name`.
    ///
    /// A repeated field yields its values trimmed of ASCII spaces, tabs, line
    /// breaks, NUL and vertical tab, then joined with `\n`; a field seen once
    /// yields its value untouched.
    pub fn get(&self, name: &str) -> Result<Cow<'_, str>, HttpParserError> {
        let entry = self.fields.get(name)?;
        match entry {
            FieldEntry::Single(field) => Ok(Cow::Borrowed(field.value())),
            FieldEntry::Many { .. } => Ok(Cow::Owned(
                entry
                    .fields()
                    .map(|f| f.value().trim_matches(JOIN_TRIMMED))
                    .collect::<Vec<_>>()
                    .join("\n"),
            )),
        }
    }

    /// The parsed start-line, `None` until a start-line has been parsed.
    pub fn header(&self) -> Option<&HttpHeader> {
        self.header.as_ref()
    }

    pub fn header_mut(&mut self) -> Option<&mut HttpHeader> {
        self.header.as_mut()
    }

    /// Raw text of the last [`parse`](Self::parse) call.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    pub fn fields(&self) -> &HttpFieldCollection {
        &self.fields
    }

    pub fn fields_mut(&mut self) -> &mut HttpFieldCollection {
        &mut self.fields
    }

    pub fn delete(&mut self, name: &str) -> Result<FieldEntry, HttpParserError> {
        self.fields.delete(name)
    }

    pub fn clear_fields(&mut self) {
        self.fields.clear();
    }

    pub fn into_parts(self) -> (Option<HttpHeader>, HttpFieldCollection) {
        (self.header, self.fields)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::StartLine;
    use crate::http::validator::StartLineSplit;

    #[test]
    fn parse_request_with_fields() {
        let mut parser = HttpParser::new(MessageKind::Request);
        parser
            .parse("GET /index.html HTTP/1.1\nHost: example.com\nAccept: */*\n")
            .unwrap();

        let req = parser.header().and_then(HttpHeader::as_request).unwrap();
        assert_eq!(req.method(), "GET");
        assert_eq!(req.path(), "/index.html");
        assert_eq!(req.protocol(), "HTTP/1.1");
        assert_eq!(parser.get("Host").unwrap(), "example.com");
        assert_eq!(parser.get("Accept").unwrap(), "*/*");
    }

    #[test]
    fn header_absent_before_parse() {
        let parser = HttpParser::new(MessageKind::Response);
        assert!(parser.header().is_none());
        assert!(parser.raw().is_empty());
    }

    #[test]
    fn repeated_field_is_trimmed_and_joined() {
        let mut parser = HttpParser::default();
        parser.parse("GET / HTTP/1.1\nX: 1 \nX:  2\nX:3\n").unwrap();
        assert_eq!(parser.get("X").unwrap(), "1\n2\n3");
    }

    #[test]
    fn single_field_is_returned_raw() {
        let mut parser = HttpParser::default();
        parser.parse("GET / HTTP/1.1\nX:  1 \n").unwrap();
        assert_eq!(parser.get("X").unwrap(), " 1 ");
    }

    #[test]
    fn bad_start_line_keeps_earlier_fields() {
        let mut parser = HttpParser::default();
        let err = parser.parse("Host: a\nGET /\nAccept: b\n").unwrap_err();

        assert_eq!(err, HttpParserError::BadFormat { line: "GET /".into() });
        assert!(parser.header().is_none());
        assert!(parser.fields().contains("Host"));
        assert!(!parser.fields().contains("Accept"));
    }

    #[test]
    fn tab_separated_start_line_is_bad_format() {
        let mut parser = HttpParser::default();
        let err = parser.parse("GET\t/\tHTTP/1.1\nHost: a\n").unwrap_err();

        assert_eq!(err, HttpParserError::BadFormat { line: "GET\t/\tHTTP/1.1".into() });
        assert!(parser.header().is_none());
    }

    #[test]
    fn message_without_start_line_is_bad_format() {
        let mut parser = HttpParser::default();
        parser.parse("GET / HTTP/1.1\n").unwrap();
        assert!(matches!(
            parser.parse("Host: a\nAccept: b\n"),
            Err(HttpParserError::BadFormat { .. })
        ));
        assert!(parser.fields().contains("Accept"));
        assert!(parser.header().is_none());

        assert!(parser.parse("HTTP/1.1\n").is_err());
        assert!(parser.parse("").is_err());
    }

    #[test]
    fn repeated_field_trims_ascii_whitespace_only() {
        let mut parser = HttpParser::default();
        parser.parse("GET / HTTP/1.1\nX: \u{a0}1\nX: 2\0\x0B\n").unwrap();
        assert_eq!(parser.get("X").unwrap(), "\u{a0}1\n2");
    }

    #[test]
    fn crlf_is_stripped_by_default() {
        let mut parser = HttpParser::new(MessageKind::Response);
        parser.parse("HTTP/1.1 200 OK\r\nServer: test\r\n\r\n").unwrap();

        assert_eq!(parser.header().unwrap().protocol(), "HTTP/1.1");
        assert_eq!(parser.header().unwrap().companions(), ("200", "OK"));
        assert_eq!(parser.get("Server").unwrap(), "test");
    }

    #[test]
    fn lf_mode_keeps_carriage_returns() {
        let config = ParserConfig {
            line_endings: LineEndings::Lf,
            ..ParserConfig::new(MessageKind::Response)
        };
        let mut parser = HttpParser::with_config(config);
        parser.parse("HTTP/1.1 200 OK\r\nServer: test\r\n\r\n").unwrap();

        assert_eq!(parser.header().unwrap().companions(), ("200", "OK\r"));
        assert_eq!(parser.get("Server").unwrap(), "test\r");
    }

    #[test]
    fn rejoin_mode_keeps_full_reason_phrase() {
        let config = ParserConfig {
            start_line: StartLineSplit::Rejoin,
            ..ParserConfig::new(MessageKind::Response)
        };
        let mut parser = HttpParser::with_config(config);
        parser.parse("HTTP/1.1 404 Not Found\n").unwrap();

        let res = parser.header().and_then(HttpHeader::as_response).unwrap();
        assert_eq!(res.message(), "Not Found");
    }

    #[test]
    fn reparse_replaces_header_and_accumulates_fields() {
        let mut parser = HttpParser::default();
        parser.parse("GET /a HTTP/1.1\nX: 1\n").unwrap();
        parser.parse("POST /b HTTP/1.1\nX: 2\n").unwrap();

        let req = parser.header().and_then(HttpHeader::as_request).unwrap();
        assert_eq!(req.path(), "/b");
        assert_eq!(parser.raw(), "POST /b HTTP/1.1\nX: 2\n");
        assert_eq!(parser.get("X").unwrap(), "1\n2");

        parser.clear_fields();
        assert!(parser.fields().is_empty());
    }

    #[test]
    fn prebuilt_fields_are_extended() {
        let fields = HttpFieldCollection::from_fields([HttpField::new("X", "0")]);
        let mut parser = HttpParser::with_fields(ParserConfig::default(), fields);
        parser.parse("GET / HTTP/1.1\nX: 1\n").unwrap();

        assert_eq!(parser.get("X").unwrap(), "0\n1");
        parser.delete("X").unwrap();
        assert!(parser.get("X").is_err());
    }
}
