//! Parsing primitives for raw HTTP messages.
//!
//! This crate turns the header section of an HTTP message, supplied as one
//! in-memory string, into a structured representation: a header line (request
//! line or status line) plus an ordered collection of `Key: Value` fields.
//!
//! It is a building block for higher-level HTTP handling code, not an HTTP
//! stack. Networking, message bodies, transfer encodings and connection
//! lifecycle are intentionally out of scope; callers feed complete text in
//! and read structured results back.
//!
//! ## Parsing flow
//!
//! 1. The raw text is split on `\n` into lines.
//! 2. Each line is classified by [`validator::Validator`]: a line containing
//!    a colon is a field line, anything else is a header line.
//! 3. Field lines accumulate into an [`HttpFieldCollection`]; a header line
//!    is tokenized, validated and assigned to the variant-specific header
//!    type ([`HttpRequestLine`] or [`HttpStatusLine`]).
//!
//! ## Known sharp edges
//!
//! The scheme is deliberately simple and inherits a few quirks from its
//! line-oriented design; they are documented on [`parser::HttpParser::parse`]
//! rather than silently corrected:
//!
//! - lines are split on `\n` only, so a trailing `\r` stays in the value,
//! - a header line whose token contains a colon is classified as a field,
//! - blank lines are consumed silently, including the one that separates
//!   headers from a body.

pub mod config;
pub mod error;
pub mod field;
pub mod header;
pub mod parser;
pub mod validator;

pub use config::ParserLimits;
pub use error::{BadFormatError, FieldNotFoundError};
pub use field::{HttpField, HttpFieldCollection};
pub use header::{HttpHeader, HttpMethod, HttpRequestLine, HttpStatusLine, HttpVersion};
pub use parser::{HttpParser, HttpRequestParser, HttpResponseParser};
pub use validator::Validator;
