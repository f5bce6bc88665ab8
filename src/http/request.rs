use std::fmt;

use crate::http::{HttpMethod, StartLine, http_method_from_str};

/// Request start-line: `METHOD PATH PROTOCOL`.
///
/// Tokens are kept exactly as they appeared on the line. The method is not
/// restricted to known verbs; use [`HttpRequestHeader::method_kind`] to
/// classify it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequestHeader {
    method: String,
    path: String,
    protocol: String,
}

impl HttpRequestHeader {
    pub fn new(
        method: impl Into<String>,
        path: impl Into<String>,
        protocol: impl Into<String>,
    ) -> Self {
        Self {
            method: method.into(),
            path: path.into(),
            protocol: protocol.into(),
        }
    }

    pub fn method(&self) -> &str {
        &self.method
    }

    pub fn method_kind(&self) -> HttpMethod {
        http_method_from_str(&self.method)
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn set_method(&mut self, method: impl Into<String>) -> &mut Self {
        self.method = method.into();
        self
    }

    pub fn set_path(&mut self, path: impl Into<String>) -> &mut Self {
        self.path = path.into();
        self
    }
}

impl StartLine for HttpRequestHeader {
    fn protocol(&self) -> &str {
        &self.protocol
    }

    fn set_protocol(&mut self, protocol: String) {
        self.protocol = protocol;
    }

    fn companions(&self) -> (&str, &str) {
        (&self.method, &self.path)
    }

    fn set_companions(&mut self, first: String, second: String) {
        self.method = first;
        self.path = second;
    }
}

impl fmt::Display for HttpRequestHeader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.method, self.path, self.protocol)
    }
}
