//! JSON (de)serialization for Record.
//!
//! Records read from JSON objects. Primitive values map onto [`Value`]
//! directly; arrays and nested objects are kept as their compact JSON text
//! so they stay searchable without widening the value model.

use std::fmt;

use serde::Deserialize;
use serde::Deserializer;
use serde::Serialize;
use serde::Serializer;
use serde::de::MapAccess;
use serde::de::Visitor;
use serde::ser::SerializeMap;

use super::Record;
use super::Value;

impl Serialize for Record {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.fields.len()))?;
        for (key, value) in &self.fields {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for Record {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_map(RecordVisitor)
    }
}

struct RecordVisitor;

impl<'de> Visitor<'de> for RecordVisitor {
    type Value = Record;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("a JSON object")
    }

    fn visit_map<M>(self, mut access: M) -> Result<Self::Value, M::Error>
    where
        M: MapAccess<'de>,
    {
        let mut record = Record::new();
        while let Some((key, raw)) = access.next_entry::<String, serde_json::Value>()? {
            if raw.is_array() || raw.is_object() {
                log::debug!("Record field '{}' is not primitive, keeping JSON text", key);
            }
            record.fields.insert(key, Value::from_json(raw));
        }
        Ok(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_primitives() {
        let json = r#"{"id": 3, "name": "Robert Johnson", "age": 58, "active": true, "notes": null}"#;
        let record: Record = serde_json::from_str(json).unwrap();

        assert_eq!(record.get("id"), Some(&Value::Int(3)));
        assert_eq!(record.get_str("name"), Some("Robert Johnson"));
        assert_eq!(record.get_bool("active"), Some(true));
        assert_eq!(record.get("notes"), Some(&Value::Null));
    }

    #[test]
    fn test_deserialize_nested_as_text() {
        let json = r#"{"tags": ["a", "b"]}"#;
        let record: Record = serde_json::from_str(json).unwrap();
        assert_eq!(record.get_str("tags"), Some(r#"["a","b"]"#));
    }

    #[test]
    fn test_serialize_fields() {
        let record = Record::new().set("age", 41).set("notes", Value::Null);
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json, serde_json::json!({"age": 41, "notes": null}));
    }

    #[test]
    fn test_list_from_json() {
        let records = Record::list_from_json(r#"[{"id": 1}, {"id": 2}]"#).unwrap();
        assert_eq!(records.len(), 2);

        let err = Record::list_from_json(r#"{"id": 1}"#).unwrap_err();
        assert!(err.to_string().starts_with("Record parse error"));
    }
}
