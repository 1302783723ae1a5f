//! Header-line variants: request line and status line.
//!
//! The parser itself does not care what the three tokens of a header line
//! mean; [`HttpHeader`] is the single extension point through which a
//! concrete variant gives them names. [`HttpRequestLine`] reads them as
//! `METHOD PATH PROTOCOL`, [`HttpStatusLine`] as `PROTOCOL CODE REASON`.

/// Assigns the three validated header tokens to variant-specific fields.
pub trait HttpHeader {
    fn from_tokens(tok0: &str, tok1: &str, tok2: &str) -> Self;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Head,
    Post,
    Put,
    Delete,
    Connect,
    Options,
    Trace,
    Unknown,
}

impl HttpMethod {
    pub fn from_name(name: &str) -> HttpMethod {
        match name {
            "GET" => HttpMethod::Get,
            "HEAD" => HttpMethod::Head,
            "POST" => HttpMethod::Post,
            "PUT" => HttpMethod::Put,
            "DELETE" => HttpMethod::Delete,
            "TRACE" => HttpMethod::Trace,
            "OPTIONS" => HttpMethod::Options,
            "CONNECT" => HttpMethod::Connect,
            _ => HttpMethod::Unknown,
        }
    }
}

/// All existing HTTP versions
#[derive(PartialEq, PartialOrd, Debug, Clone)]
pub enum HttpVersion {
    V0_9,
    V1_0,
    V1_1,
    V2_0,
    V3_0,
}

impl HttpVersion {
    /// Maps a (major, minor) pair to a known HTTP version.
    pub fn from_parts(major: u8, minor: u8) -> Option<HttpVersion> {
        match (major, minor) {
            (0, 9) => Some(HttpVersion::V0_9),
            (1, 0) => Some(HttpVersion::V1_0),
            (1, 1) => Some(HttpVersion::V1_1),
            (2, 0) => Some(HttpVersion::V2_0),
            (3, 0) => Some(HttpVersion::V3_0),
            _ => None,
        }
    }
}

/// Request-line variant: `METHOD PATH PROTOCOL`.
///
/// Tokens are kept as the raw strings the parser produced; the typed
/// accessors reinterpret them on demand and never fail the parse.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequestLine {
    pub method: String,
    pub path: String,
    pub protocol: String,
}

impl HttpHeader for HttpRequestLine {
    fn from_tokens(tok0: &str, tok1: &str, tok2: &str) -> Self {
        Self {
            method: tok0.to_string(),
            path: tok1.to_string(),
            protocol: tok2.to_string(),
        }
    }
}

impl HttpRequestLine {
    pub fn method_kind(&self) -> HttpMethod {
        HttpMethod::from_name(&self.method)
    }

    /// Parses the protocol token (`HTTP/<major>.<minor>`) into a known
    /// version. `None` for anything else, including unknown version pairs.
    pub fn version(&self) -> Option<HttpVersion> {
        self.protocol
            .strip_prefix("HTTP/")
            .and_then(|v| v.split_once('.'))
            .and_then(|(maj, min)| Some((maj.parse::<u8>().ok()?, min.parse::<u8>().ok()?)))
            .and_then(|(maj, min)| HttpVersion::from_parts(maj, min))
    }
}

/// Status-line variant: `PROTOCOL CODE REASON`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpStatusLine {
    pub protocol: String,
    pub code: String,
    pub reason: String,
}

impl HttpHeader for HttpStatusLine {
    fn from_tokens(tok0: &str, tok1: &str, tok2: &str) -> Self {
        Self {
            protocol: tok0.to_string(),
            code: tok1.to_string(),
            reason: tok2.to_string(),
        }
    }
}

impl HttpStatusLine {
    pub fn status_code(&self) -> Option<u16> {
        self.code.parse::<u16>().ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_line_from_tokens() {
        let line = HttpRequestLine::from_tokens("GET", "/index.html", "HTTP/1.1");
        assert_eq!(line.method, "GET");
        assert_eq!(line.path, "/index.html");
        assert_eq!(line.protocol, "HTTP/1.1");
        assert_eq!(line.method_kind(), HttpMethod::Get);
        assert_eq!(line.version(), Some(HttpVersion::V1_1));
    }

    #[test]
    fn unknown_method_and_version() {
        let line = HttpRequestLine::from_tokens("BREW", "/pot", "HTCPCP/1.0");
        assert_eq!(line.method_kind(), HttpMethod::Unknown);
        assert_eq!(line.version(), None);
    }

    #[test]
    fn version_requires_known_pair() {
        let line = HttpRequestLine::from_tokens("GET", "/", "HTTP/4.2");
        assert_eq!(line.version(), None);
    }

    #[test]
    fn status_line_from_tokens() {
        let line = HttpStatusLine::from_tokens("HTTP/1.1", "404", "Not");
        assert_eq!(line.protocol, "HTTP/1.1");
        assert_eq!(line.status_code(), Some(404));
        assert_eq!(line.reason, "Not");
    }

    #[test]
    fn non_numeric_status_code() {
        let line = HttpStatusLine::from_tokens("HTTP/1.1", "abc", "x");
        assert_eq!(line.status_code(), None);
    }
}
