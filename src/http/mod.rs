use std::fmt;

use serde::Deserialize;

pub mod error;
pub mod fields;
pub mod parser;
pub mod request;
pub mod response;
pub mod validator;

use request::HttpRequestHeader;
use response::HttpResponseHeader;

/// Which start-line variant a parser builds.
/// Selected through [`ParserConfig::message`](crate::config::ParserConfig::message).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageKind {
    #[default]
    Request,
    Response,
}

/// Known HTTP versions, recognized from the protocol token of a start-line.
/// Recognition is informational: the parser never rejects an unknown protocol.
#[derive(PartialEq, PartialOrd, Debug, Clone, Copy)]
pub enum HttpVersion {
    V0_9,
    V1_0,
    V1_1,
    V2_0,
    V3_0,
}

impl HttpVersion {
    /// Check if a tuple (major, minor) corresponds to a valid HTTP version
    pub fn from_pair(v: (u8, u8)) -> Option<HttpVersion> {
        match v {
            (0, 9) => Some(HttpVersion::V0_9),
            (1, 0) => Some(HttpVersion::V1_0),
            (1, 1) => Some(HttpVersion::V1_1),
            (2, 0) => Some(HttpVersion::V2_0),
            (3, 0) => Some(HttpVersion::V3_0),
            _ => None,
        }
    }

    /// Parses a protocol token such as `HTTP/1.1` or `HTTP/2`.
    pub fn from_protocol(protocol: &str) -> Option<HttpVersion> {
        let version = protocol.strip_prefix("HTTP/")?;
        let (maj, min) = version.split_once('.').unwrap_or((version, "0"));
        Self::from_pair((maj.parse::<u8>().ok()?, min.parse::<u8>().ok()?))
    }
}

#[derive(PartialEq, Debug, Clone, Copy)]
pub enum HttpMethod {
    Get,
    Head,
    Post,
    Put,
    Patch,
    Delete,
    Connect,
    Options,
    Trace,
    Unknown,
}

pub fn http_method_from_str(method: &str) -> HttpMethod {
    match method {
        "GET" => HttpMethod::Get,
        "HEAD" => HttpMethod::Head,
        "POST" => HttpMethod::Post,
        "PUT" => HttpMethod::Put,
        "PATCH" => HttpMethod::Patch,
        "DELETE" => HttpMethod::Delete,
        "TRACE" => HttpMethod::Trace,
        "OPTIONS" => HttpMethod::Options,
        "CONNECT" => HttpMethod::Connect,
        _ => HttpMethod::Unknown,
    }
}

/// Capability shared by every start-line variant.
///
/// Both variants carry a protocol token plus two companion tokens: `method`
/// and `path` for a request, `code` and `message` for a response.
pub trait StartLine {
    fn protocol(&self) -> &str;

    fn set_protocol(&mut self, protocol: String);

    /// The two tokens that accompany the protocol, in start-line order.
    fn companions(&self) -> (&str, &str);

    fn set_companions(&mut self, first: String, second: String);

    fn version(&self) -> Option<HttpVersion> {
        HttpVersion::from_protocol(self.protocol())
    }
}

/// A parsed start-line, either request or response form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HttpHeader {
    Request(HttpRequestHeader),
    Response(HttpResponseHeader),
}

impl HttpHeader {
    pub fn kind(&self) -> MessageKind {
        match self {
            HttpHeader::Request(_) => MessageKind::Request,
            HttpHeader::Response(_) => MessageKind::Response,
        }
    }

    pub fn as_request(&self) -> Option<&HttpRequestHeader> {
        match self {
            HttpHeader::Request(req) => Some(req),
            HttpHeader::Response(_) => None,
        }
    }

    pub fn as_response(&self) -> Option<&HttpResponseHeader> {
        match self {
            HttpHeader::Response(res) => Some(res),
            HttpHeader::Request(_) => None,
        }
    }

    fn inner(&self) -> &dyn StartLine {
        match self {
            HttpHeader::Request(req) => req,
            HttpHeader::Response(res) => res,
        }
    }

    fn inner_mut(&mut self) -> &mut dyn StartLine {
        match self {
            HttpHeader::Request(req) => req,
            HttpHeader::Response(res) => res,
        }
    }
}

impl StartLine for HttpHeader {
    fn protocol(&self) -> &str {
        self.inner().protocol()
    }

    fn set_protocol(&mut self, protocol: String) {
        self.inner_mut().set_protocol(protocol)
    }

    fn companions(&self) -> (&str, &str) {
        self.inner().companions()
    }

    fn set_companions(&mut self, first: String, second: String) {
        self.inner_mut().set_companions(first, second)
    }
}

impl fmt::Display for HttpHeader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HttpHeader::Request(req) => fmt::Display::fmt(req, f),
            HttpHeader::Response(res) => fmt::Display::fmt(res, f),
        }
    }
}
