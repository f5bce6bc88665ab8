use std::fmt;

use crate::http::StartLine;

/// Response start-line: `PROTOCOL CODE MESSAGE`.
///
/// `code` stays textual; only its presence is validated, never its range.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponseHeader {
    protocol: String,
    code: String,
    message: String,
}

impl HttpResponseHeader {
    pub fn new(
        protocol: impl Into<String>,
        code: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            protocol: protocol.into(),
            code: code.into(),
            message: message.into(),
        }
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn set_code(&mut self, code: impl Into<String>) -> &mut Self {
        self.code = code.into();
        self
    }

    pub fn set_message(&mut self, message: impl Into<String>) -> &mut Self {
        self.message = message.into();
        self
    }
}

impl StartLine for HttpResponseHeader {
    fn protocol(&self) -> &str {
        &self.protocol
    }

    fn set_protocol(&mut self, protocol: String) {
        self.protocol = protocol;
    }

    fn companions(&self) -> (&str, &str) {
        (&self.code, &self.message)
    }

    fn set_companions(&mut self, first: String, second: String) {
        self.code = first;
        self.message = second;
    }
}

impl fmt::Display for HttpResponseHeader {
    // <protocol> <code> <message>
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.protocol, self.code, self.message)
    }
}
