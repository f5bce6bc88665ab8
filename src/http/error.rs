/// Errors surfaced by [`HttpParser`](crate::http::parser::HttpParser) and
/// [`HttpFieldCollection`](crate::http::fields::HttpFieldCollection).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HttpParserError {
    /// A start-line candidate did not have three non-empty tokens, or the
    /// message had no start-line (`line` is empty then).
    #[error("bad start-line format: {line:?}")]
    BadFormat { line: String },

    #[error("field {name} not found")]
    FieldNotFound { name: String },
}

impl HttpParserError {
    pub(crate) fn bad_format(line: &str) -> Self {
        HttpParserError::BadFormat {
            line: line.to_string(),
        }
    }

    pub(crate) fn missing_start_line() -> Self {
        HttpParserError::BadFormat {
            line: String::new(),
        }
    }

    pub(crate) fn field_not_found(name: &str) -> Self {
        HttpParserError::FieldNotFound {
            name: name.to_string(),
        }
    }
}
