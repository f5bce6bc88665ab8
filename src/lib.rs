//! Parsing of raw textual HTTP messages into a start-line and field lines.
//!
//! ```
//! use httpfields::{HttpParser, MessageKind};
//!
//! let mut parser = HttpParser::new(MessageKind::Request);
//! parser.parse("GET / HTTP/1.1\nHost: example.com\n").unwrap();
//! assert_eq!(parser.get("Host").unwrap(), "example.com");
//! ```

pub mod config;
pub mod http;

pub use config::{ConfigError, LineEndings, ParserConfig};
pub use http::error::HttpParserError;
pub use http::fields::{FieldEntry, HttpField, HttpFieldCollection};
pub use http::parser::{HttpParser, parse_start_line};
pub use http::request::HttpRequestHeader;
pub use http::response::HttpResponseHeader;
pub use http::validator::{LineKind, StartLineSplit, Validator};
pub use http::{HttpHeader, HttpMethod, HttpVersion, MessageKind, StartLine};
