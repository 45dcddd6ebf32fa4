//! Narrow read-only views over untyped payload blocks.
//!
//! A [`TextBlock`] is an object whose values are read as text; a
//! [`RowsBlock`] is an object whose values are all objects. Constructing a
//! view only checks the container shape. Leaves are checked when read, so a
//! non-text leaf surfaces as [`ParseError::NonTextField`] rather than as an
//! upstream error.

use serde_json::{Map, Value};

use crate::ParseError;

/// An object read as `key -> text`.
#[derive(Debug, Clone, Copy)]
pub(crate) struct TextBlock<'a> {
    entries: &'a Map<String, Value>,
}

impl<'a> TextBlock<'a> {
    /// Views `value` as a text block, or `None` if it is not an object.
    pub(crate) const fn view(value: &'a Value) -> Option<Self> {
        match value {
            Value::Object(entries) => Some(Self { entries }),
            _ => None,
        }
    }

    /// Returns the text under `key`, or `None` if the key is absent or null.
    pub(crate) fn text(&self, key: &'static str) -> Result<Option<&'a str>, ParseError> {
        match self.entries.get(key) {
            None | Some(Value::Null) => Ok(None),
            Some(Value::String(text)) => Ok(Some(text.as_str())),
            Some(_) => Err(ParseError::NonTextField { field: key }),
        }
    }

    /// Returns the text under `key` as an owned string.
    pub(crate) fn owned(&self, key: &'static str) -> Result<Option<String>, ParseError> {
        Ok(self.text(key)?.map(str::to_string))
    }
}

/// An object read as `timestamp -> row`.
#[derive(Debug, Clone, Copy)]
pub(crate) struct RowsBlock<'a> {
    entries: &'a Map<String, Value>,
}

impl<'a> RowsBlock<'a> {
    /// Views `value` as a rows block, or `None` if it is not an object or
    /// any of its values is not an object.
    pub(crate) fn view(value: &'a Value) -> Option<Self> {
        let entries = value.as_object()?;
        entries
            .values()
            .all(Value::is_object)
            .then_some(Self { entries })
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }

    /// Iterates rows in payload order.
    pub(crate) fn rows(self) -> impl Iterator<Item = (&'a str, TextBlock<'a>)> + 'a {
        self.entries.iter().filter_map(|(key, value)| {
            TextBlock::view(value).map(|row| (key.as_str(), row))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_text_block_reads_strings() {
        let value = json!({ "2. Symbol": "IBM" });
        let block = TextBlock::view(&value).unwrap();
        assert_eq!(block.text("2. Symbol").unwrap(), Some("IBM"));
        assert_eq!(block.text("6. Time Zone").unwrap(), None);
    }

    #[test]
    fn test_text_block_rejects_non_text_leaf() {
        let value = json!({ "5. volume": 100 });
        let block = TextBlock::view(&value).unwrap();
        assert!(matches!(
            block.text("5. volume"),
            Err(ParseError::NonTextField { field: "5. volume" })
        ));
    }

    #[test]
    fn test_text_block_null_reads_as_absent() {
        let value = json!({ "8. split coefficient": null });
        let block = TextBlock::view(&value).unwrap();
        assert_eq!(block.text("8. split coefficient").unwrap(), None);
    }

    #[test]
    fn test_text_block_requires_object() {
        assert!(TextBlock::view(&json!("Invalid API call")).is_none());
        assert!(TextBlock::view(&json!(["a"])).is_none());
    }

    #[test]
    fn test_rows_block_requires_object_rows() {
        assert!(RowsBlock::view(&json!({ "2024-01-02": {} })).is_some());
        assert!(RowsBlock::view(&json!({ "2024-01-02": "x" })).is_none());
        assert!(RowsBlock::view(&json!("x")).is_none());
    }

    #[test]
    fn test_rows_block_preserves_order() {
        let value: Value =
            serde_json::from_str(r#"{"b": {}, "a": {}, "c": {}}"#).unwrap();
        let rows = RowsBlock::view(&value).unwrap();
        let keys: Vec<_> = rows.rows().map(|(key, _)| key).collect();
        assert_eq!(keys, vec!["b", "a", "c"]);
        assert_eq!(rows.len(), 3);
    }
}
