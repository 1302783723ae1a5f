use serde::Deserialize;

/// Size limits applied while parsing.
///
/// Defaults are generous enough for any ordinary header section; hosts
/// embedding the parser can tighten them, or load them from a TOML file.
#[derive(Debug, Clone, Deserialize)]
pub struct ParserLimits {
    /// Upper bound on the whole header section, in bytes.
    pub max_header_size: usize,
    /// Upper bound on a single line, in bytes.
    pub max_line_size: usize,
    /// Upper bound on the number of accumulated fields.
    pub max_fields: usize,
}

impl Default for ParserLimits {
    fn default() -> Self {
        Self {
            max_header_size: 8192,
            max_line_size: 1024,
            max_fields: 128,
        }
    }
}

impl ParserLimits {
    pub fn from_file(path: &str) -> Self {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(err) => {
                eprintln!("Fail to read {}: {err}", path);
                eprintln!("Fall back to default limits");
                return ParserLimits::default();
            }
        };

        match toml::from_str::<ParserLimits>(content.as_str()) {
            Ok(limits) => limits,
            Err(err) => {
                eprintln!("Fail to deserialize limits file {}: {err}", path);
                eprintln!("Fall back to default limits");
                ParserLimits::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_limits() {
        let limits = ParserLimits::default();
        assert_eq!(limits.max_header_size, 8192);
        assert_eq!(limits.max_line_size, 1024);
        assert_eq!(limits.max_fields, 128);
    }

    #[test]
    fn missing_file_falls_back_to_default() {
        let limits = ParserLimits::from_file("/nonexistent/limits.toml");
        assert_eq!(limits.max_header_size, 8192);
    }

    #[test]
    fn deserialize_from_toml() {
        let limits: ParserLimits =
            toml::from_str("max_header_size = 16\nmax_line_size = 8\nmax_fields = 2").unwrap();
        assert_eq!(limits.max_header_size, 16);
        assert_eq!(limits.max_line_size, 8);
        assert_eq!(limits.max_fields, 2);
    }
}
