use thiserror::Error;

/// Errors raised while parsing the header section of a message.
///
/// Any of these aborts [`parse`](crate::parser::HttpParser::parse) mid-loop;
/// fields recorded before the offending line are kept, so a parser that
/// returned one of these should be discarded rather than reused.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BadFormatError {
    #[error("header line is missing a token (got {0} of 3)")]
    MissingToken(usize),
    #[error("header section too large (> {0} bytes)")]
    HeaderSectionTooLarge(usize),
    #[error("too long line (> {0} bytes)")]
    LineTooLong(usize),
    #[error("too many fields (> {0})")]
    TooManyFields(usize),
}

/// Lookup error: the requested key was never added to the collection.
///
/// Purely a query-time error; the stored state stays valid.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("http field '{0}' not found on collection")]
pub struct FieldNotFoundError(pub String);
