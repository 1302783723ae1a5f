//! The parsing orchestrator.
//!
//! [`HttpParser`] owns the raw input, the optional header line and the
//! accumulated field collection. It is generic over the header variant so
//! the same extraction loop serves requests and responses; the two aliases
//! [`HttpRequestParser`] and [`HttpResponseParser`] are what callers
//! normally name.

use crate::config::ParserLimits;
use crate::error::{BadFormatError, FieldNotFoundError};
use crate::field::{HttpField, HttpFieldCollection};
use crate::header::{HttpHeader, HttpRequestLine, HttpStatusLine};
use crate::validator::Validator;

pub type HttpRequestParser = HttpParser<HttpRequestLine>;
pub type HttpResponseParser = HttpParser<HttpStatusLine>;

pub struct HttpParser<H: HttpHeader> {
    raw: String,
    header: Option<H>,
    fields: HttpFieldCollection,
    limits: ParserLimits,
}

impl<H: HttpHeader> HttpParser<H> {
    pub fn new() -> Self {
        Self::with_fields(HttpFieldCollection::new())
    }

    /// Starts from an existing collection; parsed fields are appended to it.
    pub fn with_fields(fields: HttpFieldCollection) -> Self {
        Self {
            raw: String::new(),
            header: None,
            fields,
            limits: ParserLimits::default(),
        }
    }

    pub fn with_limits(mut self, limits: ParserLimits) -> Self {
        self.limits = limits;
        self
    }

    /// Parses the header section of a raw HTTP message.
    ///
    /// The input is split on `\n`; each non-blank line is either a field
    /// line (it contains a colon) accumulated into the collection, or a
    /// header line tokenized on single spaces, validated and assigned to
    /// the variant header. Success is `Ok(())`; on error the loop aborts
    /// and fields recorded before the bad line stay in place.
    ///
    /// Sharp edges, kept deliberately:
    /// - `\r` is not stripped, so CRLF input leaves a trailing `\r` in
    ///   values and in the last header token; callers wanting real-HTTP
    ///   compatibility must normalize the input themselves,
    /// - blank lines are consumed silently, including the conventional
    ///   headers/body separator,
    /// - calling `parse` again APPENDS the new message's fields to the
    ///   collection; the header is simply overwritten, as is the raw text.
    pub fn parse(&mut self, raw: &str) -> Result<(), BadFormatError> {
        if raw.len() > self.limits.max_header_size {
            return Err(BadFormatError::HeaderSectionTooLarge(
                self.limits.max_header_size,
            ));
        }

        self.raw = raw.to_owned();
        for line in raw.split('\n') {
            if line.trim().is_empty() {
                continue;
            }
            if line.len() > self.limits.max_line_size {
                return Err(BadFormatError::LineTooLong(self.limits.max_line_size));
            }
            if Validator::is_field_line(line) {
                self.add_field(line)?;
            } else {
                self.add_header(line)?;
            }
        }
        Ok(())
    }

    /// Value-only lookup on the accumulated fields.
    pub fn get(&self, key: &str) -> Result<&str, FieldNotFoundError> {
        self.fields.get(key).map(|field| field.value())
    }

    /// The parsed header line, `None` until a header line was committed.
    pub fn header(&self) -> Option<&H> {
        self.header.as_ref()
    }

    pub fn fields(&self) -> &HttpFieldCollection {
        &self.fields
    }

    fn add_field(&mut self, line: &str) -> Result<(), BadFormatError> {
        // No separator means no field; silent no-op by design.
        let Some((key, value)) = split_field_line(line) else {
            return Ok(());
        };
        self.fields.add(HttpField::new(key, value));
        if self.fields.len() > self.limits.max_fields {
            return Err(BadFormatError::TooManyFields(self.limits.max_fields));
        }
        Ok(())
    }

    fn add_header(&mut self, line: &str) -> Result<(), BadFormatError> {
        // Split on single spaces; consecutive spaces produce empty tokens.
        // Pad so indices 0..=2 always exist.
        let mut tokens = line.split(' ');
        let tok0 = tokens.next().unwrap_or("");
        let tok1 = tokens.next().unwrap_or("");
        let tok2 = tokens.next().unwrap_or("");
        Validator::check_header_tokens(tok0, tok1, tok2)?;
        self.header = Some(H::from_tokens(tok0, tok1, tok2));
        Ok(())
    }
}

impl<H: HttpHeader> Default for HttpParser<H> {
    fn default() -> Self {
        Self::new()
    }
}

/// Splits a field line into key and value on the first `": "`, falling back
/// to the first `":"` when no colon-space pair exists.
fn split_field_line(line: &str) -> Option<(&str, &str)> {
    line.split_once(": ").or_else(|| line.split_once(':'))
}
