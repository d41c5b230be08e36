//! Resource objects, identifiers, and lenient attribute access.

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// A `{type, id}` reference to a resource.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ResourceIdentifier {
    #[serde(rename = "type")]
    pub resource_type: String,

    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
}

impl ResourceIdentifier {
    pub fn new(resource_type: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            resource_type: resource_type.into(),
            id: id.into(),
        }
    }
}

impl std::fmt::Display for ResourceIdentifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.resource_type, self.id)
    }
}

/// Linkage of a relationship: one identifier or many.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RelationshipData {
    One(ResourceIdentifier),
    Many(Vec<ResourceIdentifier>),
}

/// A relationship object.
///
/// `data` is `None` when the server sent `null` or only links.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Relationship {
    #[serde(default)]
    pub data: Option<RelationshipData>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub links: Option<Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta: Option<Value>,
}

/// A resource object from `data` or `included`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Resource {
    #[serde(default, deserialize_with = "string_or_number")]
    pub id: String,

    #[serde(rename = "type")]
    pub resource_type: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub attributes: Map<String, Value>,

    /// Sorted by name, whatever order the server used.
    #[serde(default, deserialize_with = "null_as_default")]
    pub relationships: BTreeMap<String, Relationship>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub links: Option<Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta: Option<Value>,
}

impl Resource {
    /// The `{type, id}` identifier of this resource.
    pub fn identifier(&self) -> ResourceIdentifier {
        ResourceIdentifier::new(&self.resource_type, &self.id)
    }

    /// Raw attribute value; `null` is reported as absent.
    pub fn attr(&self, key: &str) -> Option<&Value> {
        self.attributes.get(key).filter(|value| !value.is_null())
    }

    /// Attribute rendered as trimmed text. Blank strings are absent.
    pub fn attr_text(&self, key: &str) -> Option<String> {
        let text = display_value(self.attr(key)?);
        if text.is_empty() {
            None
        } else {
            Some(text)
        }
    }

    /// Attribute as a bool, accepting `true`/`false` strings and 0/1 numbers.
    pub fn attr_bool(&self, key: &str) -> Option<bool> {
        match self.attr(key)? {
            Value::Bool(value) => Some(*value),
            Value::String(text) => match text.trim().to_ascii_lowercase().as_str() {
                "true" => Some(true),
                "false" => Some(false),
                _ => None,
            },
            Value::Number(number) => number.as_i64().map(|value| value != 0),
            _ => None,
        }
    }

    /// Attribute as a float, accepting numeric strings.
    pub fn attr_f64(&self, key: &str) -> Option<f64> {
        match self.attr(key)? {
            Value::Number(number) => number.as_f64(),
            Value::String(text) => text.trim().parse().ok(),
            _ => None,
        }
    }

    /// Attribute as an integer, accepting numeric strings and whole floats.
    pub fn attr_i64(&self, key: &str) -> Option<i64> {
        match self.attr(key)? {
            Value::Number(number) => number.as_i64().or_else(|| {
                number
                    .as_f64()
                    .filter(|value| value.fract() == 0.0)
                    .map(|value| value as i64)
            }),
            Value::String(text) => {
                let text = text.trim();
                text.parse::<i64>().ok().or_else(|| {
                    text.parse::<f64>()
                        .ok()
                        .filter(|value| value.fract() == 0.0)
                        .map(|value| value as i64)
                })
            }
            _ => None,
        }
    }

    /// First identifier linked through a relationship.
    pub fn related(&self, name: &str) -> Option<&ResourceIdentifier> {
        match self.relationships.get(name)?.data.as_ref()? {
            RelationshipData::One(identifier) => Some(identifier),
            RelationshipData::Many(identifiers) => identifiers.first(),
        }
    }

    /// All identifiers linked through a relationship.
    pub fn related_many(&self, name: &str) -> Vec<&ResourceIdentifier> {
        match self.relationships.get(name).and_then(|rel| rel.data.as_ref()) {
            Some(RelationshipData::One(identifier)) => vec![identifier],
            Some(RelationshipData::Many(identifiers)) => identifiers.iter().collect(),
            None => Vec::new(),
        }
    }
}

/// Render an attribute value as table text.
///
/// Null is empty, strings are trimmed, arrays are joined with `, `, and
/// objects are compact JSON.
pub fn display_value(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(text) => text.trim().to_string(),
        Value::Bool(flag) => flag.to_string(),
        Value::Number(number) => number.to_string(),
        Value::Array(items) => items
            .iter()
            .map(display_value)
            .filter(|text| !text.is_empty())
            .collect::<Vec<_>>()
            .join(", "),
        Value::Object(_) => value.to_string(),
    }
}

fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(text) => Ok(text),
        Value::Number(number) => Ok(number.to_string()),
        other => Err(serde::de::Error::custom(format!(
            "expected string or number id, got {other}"
        ))),
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use serde_json::json;

    fn tractor() -> Resource {
        serde_json::from_value(json!({
            "id": 42,
            "type": "tractors",
            "attributes": {
                "number": "  T100 ",
                "in-service": "true",
                "curb-weight-lbs": "18000",
                "height-inches": 150.0,
                "notes": null,
                "tags": ["a", "", "b"],
                "blank": "   "
            },
            "relationships": {
                "trucker": { "data": { "type": "truckers", "id": "7" } },
                "drivers": { "data": [
                    { "type": "users", "id": "1" },
                    { "type": "users", "id": "2" }
                ] },
                "brokered-tractor": { "data": null },
                "links-only": { "links": { "related": "/v1/x" } }
            }
        }))
        .unwrap()
    }

    #[test]
    fn numeric_ids_are_accepted_as_strings() {
        let resource = tractor();
        assert_eq!(resource.id, "42");
        assert_eq!(resource.identifier().to_string(), "tractors/42");
    }

    #[test]
    fn text_attributes_are_trimmed_and_blank_is_absent() {
        let resource = tractor();
        assert_eq!(resource.attr_text("number").as_deref(), Some("T100"));
        assert_eq!(resource.attr_text("blank"), None);
        assert_eq!(resource.attr_text("notes"), None);
        assert_eq!(resource.attr_text("tags").as_deref(), Some("a, b"));
    }

    #[test]
    fn scalar_attributes_are_lenient() {
        let resource = tractor();
        assert_eq!(resource.attr_bool("in-service"), Some(true));
        assert_eq!(resource.attr_i64("curb-weight-lbs"), Some(18000));
        assert_eq!(resource.attr_i64("height-inches"), Some(150));
        assert_eq!(resource.attr_f64("curb-weight-lbs"), Some(18000.0));
        assert_eq!(resource.attr_bool("missing"), None);
    }

    #[test]
    fn relationships_resolve_one_and_many() {
        let resource = tractor();
        assert_eq!(resource.related("trucker").map(|r| r.id.as_str()), Some("7"));
        assert_eq!(resource.related_many("drivers").len(), 2);
        assert_eq!(resource.related("drivers").map(|r| r.id.as_str()), Some("1"));
        assert!(resource.related("brokered-tractor").is_none());
        assert!(resource.related("links-only").is_none());
        assert!(resource.related_many("unknown").is_empty());
    }

    #[test]
    fn attributes_keep_server_order_and_relationships_sort() {
        let resource: Resource = serde_json::from_str(
            r#"{"id": "1", "type": "jobs",
                "attributes": {"zulu": 1, "alpha": 2},
                "relationships": {
                    "zeta": {"data": {"type": "users", "id": "1"}},
                    "alpha": {"data": null}
                }}"#,
        )
        .unwrap();
        let attributes: Vec<&str> = resource.attributes.keys().map(String::as_str).collect();
        assert_eq!(attributes, vec!["zulu", "alpha"]);
        let relationships: Vec<&str> = resource.relationships.keys().map(String::as_str).collect();
        assert_eq!(relationships, vec!["alpha", "zeta"]);
    }

    #[test]
    fn null_attributes_member_decodes_as_empty() {
        let resource: Resource = serde_json::from_value(json!({
            "id": "1", "type": "users", "attributes": null, "relationships": null
        }))
        .unwrap();
        assert!(resource.attributes.is_empty());
        assert!(resource.relationships.is_empty());
    }

    #[test]
    fn display_value_renders_objects_compactly() {
        assert_eq!(display_value(&json!({"a": 1})), r#"{"a":1}"#);
        assert_eq!(display_value(&json!(null)), "");
        assert_eq!(display_value(&json!(false)), "false");
    }

    proptest! {
        #[test]
        fn integer_strings_parse_back(value in any::<i64>()) {
            let resource: Resource = serde_json::from_value(json!({
                "id": "1", "type": "readings", "attributes": { "value": value.to_string() }
            }))
            .unwrap();
            prop_assert_eq!(resource.attr_i64("value"), Some(value));
        }
    }
}
