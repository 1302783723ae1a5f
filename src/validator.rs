//! Line classification and header-line validation.

use crate::error::BadFormatError;

pub struct Validator;

impl Validator {
    /// A line is a field line iff it contains a colon.
    ///
    /// This is the sole discriminant between `Key: Value` lines and
    /// space-separated header lines. A header line whose token carries a
    /// colon (say a protocol written `FOO:1`) is therefore classified as a
    /// field line; that ambiguity is inherent to the scheme and accepted.
    pub fn is_field_line(line: &str) -> bool {
        memchr::memchr(b':', line.as_bytes()).is_some()
    }

    /// Checks the three padded header tokens before they are committed.
    ///
    /// Tokens come from a fixed-width pad, so an empty string here means the
    /// token was absent from the split, not blank after trimming.
    pub fn check_header_tokens(
        tok0: &str,
        tok1: &str,
        tok2: &str,
    ) -> Result<(), BadFormatError> {
        if tok0.is_empty() || tok1.is_empty() || tok2.is_empty() {
            let present = [tok0, tok1, tok2]
                .iter()
                .filter(|tok| !tok.is_empty())
                .count();
            return Err(BadFormatError::MissingToken(present));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_line_has_colon() {
        assert!(Validator::is_field_line("Host: example.com"));
        assert!(Validator::is_field_line("Host:example.com"));
    }

    #[test]
    fn header_line_has_no_colon() {
        assert!(!Validator::is_field_line("GET / HTTP/1.1"));
        assert!(!Validator::is_field_line(""));
    }

    #[test]
    fn ambiguous_colon_in_header_token() {
        // inherent misclassification, kept as-is
        assert!(Validator::is_field_line("GET / HTTP/1.1:x"));
    }

    #[test]
    fn complete_header_tokens_pass() {
        assert_eq!(
            Validator::check_header_tokens("GET", "/", "HTTP/1.1"),
            Ok(())
        );
    }

    #[test]
    fn missing_tokens_fail() {
        assert_eq!(
            Validator::check_header_tokens("GET", "/", ""),
            Err(BadFormatError::MissingToken(2))
        );
        assert_eq!(
            Validator::check_header_tokens("", "", ""),
            Err(BadFormatError::MissingToken(0))
        );
    }
}
