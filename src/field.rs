//! Parsed `Key: Value` fields and their ordered collection.
//!
//! [`HttpField`] is one parsed field line; [`HttpFieldCollection`] keeps
//! every field of a message in insertion order while indexing keys for O(1)
//! lookup.
//!
//! Keys and values are stored as raw strings, exactly as the delimiter split
//! produced them, without validation or restrictions on which fields are
//! allowed. Duplicate keys are accepted: each duplicate is appended to the
//! sequence, and lookup returns the first field added under that key.
//! Lookup is an exact string match, with no case folding.

use indexmap::IndexMap;

use crate::error::FieldNotFoundError;

/// One parsed field line. Immutable after construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpField {
    key: String,
    value: String,
}

impl HttpField {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn value(&self) -> &str {
        &self.value
    }
}

pub struct HttpFieldCollection {
    fields: Vec<HttpField>,
    // key -> position of the FIRST field added under that key
    index: IndexMap<String, usize>,
}

impl HttpFieldCollection {
    pub fn new() -> Self {
        Self {
            fields: Vec::new(),
            index: IndexMap::new(),
        }
    }

    /// Batch constructor; fields keep the order they were given in.
    pub fn from_fields(fields: Vec<HttpField>) -> Self {
        fields.into_iter().collect()
    }

    /// Appends a field. No uniqueness enforcement: a key already present is
    /// appended again, but the lookup index keeps pointing at the first one.
    pub fn add(&mut self, field: HttpField) {
        let pos = self.fields.len();
        self.index.entry(field.key.clone()).or_insert(pos);
        self.fields.push(field);
    }

    /// Exact-key lookup, first match wins.
    pub fn get(&self, key: &str) -> Result<&HttpField, FieldNotFoundError> {
        self.index
            .get(key)
            .map(|&pos| &self.fields[pos])
            .ok_or_else(|| FieldNotFoundError(key.to_string()))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Iterates fields in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &HttpField> {
        self.fields.iter()
    }

    /// Serializes the fields back to `Key: Value\r\n` lines, in order.
    pub fn stringify(&self) -> String {
        let mut result = String::new();
        for field in &self.fields {
            result.push_str(&format!("{}: {}\r\n", field.key, field.value));
        }
        result
    }
}

impl Default for HttpFieldCollection {
    fn default() -> Self {
        Self::new()
    }
}

impl FromIterator<HttpField> for HttpFieldCollection {
    fn from_iter<I: IntoIterator<Item = HttpField>>(iter: I) -> Self {
        let mut collection = Self::new();
        for field in iter {
            collection.add(field);
        }
        collection
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_and_get() {
        let mut fields = HttpFieldCollection::new();
        fields.add(HttpField::new("Host", "example.com"));
        assert_eq!(fields.get("Host").unwrap().value(), "example.com");
    }

    #[test]
    fn get_is_exact_match() {
        let mut fields = HttpFieldCollection::new();
        fields.add(HttpField::new("Host", "example.com"));
        assert_eq!(
            fields.get("host"),
            Err(FieldNotFoundError("host".to_string()))
        );
    }

    #[test]
    fn missing_key() {
        let fields = HttpFieldCollection::new();
        let err = fields.get("Accept").unwrap_err();
        assert_eq!(err, FieldNotFoundError("Accept".to_string()));
    }

    #[test]
    fn duplicate_keys_append_but_first_wins() {
        let mut fields = HttpFieldCollection::new();
        fields.add(HttpField::new("Accept", "text/html"));
        fields.add(HttpField::new("Accept", "*/*"));
        assert_eq!(fields.len(), 2);
        assert_eq!(fields.get("Accept").unwrap().value(), "text/html");
    }

    #[test]
    fn iteration_preserves_insertion_order() {
        let fields = HttpFieldCollection::from_fields(vec![
            HttpField::new("Host", "example.com"),
            HttpField::new("Accept", "*/*"),
            HttpField::new("Connection", "close"),
        ]);
        let keys: Vec<&str> = fields.iter().map(|f| f.key()).collect();
        assert_eq!(keys, ["Host", "Accept", "Connection"]);
    }

    #[test]
    fn stringify_round_trip_format() {
        let fields = HttpFieldCollection::from_fields(vec![
            HttpField::new("Host", "example.com"),
            HttpField::new("Accept", "*/*"),
        ]);
        assert_eq!(fields.stringify(), "Host: example.com\r\nAccept: */*\r\n");
    }
}
