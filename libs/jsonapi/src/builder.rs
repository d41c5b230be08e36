//! Request documents for create and update calls.

use serde_json::{json, Map, Value};

/// A resource object being sent to the server.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NewResource {
    resource_type: String,
    id: Option<String>,
    attributes: Map<String, Value>,
    relationships: Map<String, Value>,
}

impl NewResource {
    pub fn new(resource_type: impl Into<String>) -> Self {
        Self {
            resource_type: resource_type.into(),
            ..Self::default()
        }
    }

    /// Set the resource id (required for PATCH).
    #[must_use]
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn set_attribute(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        self.attributes.insert(name.into(), value.into());
    }

    #[must_use]
    pub fn attribute(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.set_attribute(name, value);
        self
    }

    pub fn set_to_one(&mut self, name: impl Into<String>, resource_type: &str, id: &str) {
        self.relationships.insert(
            name.into(),
            json!({ "data": { "type": resource_type, "id": id } }),
        );
    }

    #[must_use]
    pub fn to_one(mut self, name: impl Into<String>, resource_type: &str, id: &str) -> Self {
        self.set_to_one(name, resource_type, id);
        self
    }

    pub fn set_to_many<I, S>(&mut self, name: impl Into<String>, resource_type: &str, ids: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let data: Vec<Value> = ids
            .into_iter()
            .map(|id| json!({ "type": resource_type, "id": id.as_ref() }))
            .collect();
        self.relationships.insert(name.into(), json!({ "data": data }));
    }

    /// Unlink a to-one relationship (`"data": null`).
    pub fn clear_to_one(&mut self, name: impl Into<String>) {
        self.relationships
            .insert(name.into(), json!({ "data": Value::Null }));
    }

    pub fn resource_type(&self) -> &str {
        &self.resource_type
    }

    /// True when neither attributes nor relationships are set.
    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty() && self.relationships.is_empty()
    }

    /// Wrap into a `{"data": ...}` document. Empty relationships are omitted.
    pub fn into_document(self) -> Value {
        let mut data = Map::new();
        data.insert("type".to_string(), Value::String(self.resource_type));
        if let Some(id) = self.id {
            data.insert("id".to_string(), Value::String(id));
        }
        data.insert("attributes".to_string(), Value::Object(self.attributes));
        if !self.relationships.is_empty() {
            data.insert(
                "relationships".to_string(),
                Value::Object(self.relationships),
            );
        }
        json!({ "data": data })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_document_has_type_attributes_and_relationships() {
        let mut resource = NewResource::new("tractors")
            .attribute("number", "T100")
            .attribute("truck-model-year", 2023)
            .to_one("trucker", "truckers", "123");
        resource.set_to_many("drivers", "users", ["1", "2"]);

        assert_eq!(
            resource.into_document(),
            json!({
                "data": {
                    "type": "tractors",
                    "attributes": { "number": "T100", "truck-model-year": 2023 },
                    "relationships": {
                        "trucker": { "data": { "type": "truckers", "id": "123" } },
                        "drivers": { "data": [
                            { "type": "users", "id": "1" },
                            { "type": "users", "id": "2" }
                        ] }
                    }
                }
            })
        );
    }

    #[test]
    fn update_document_carries_id_and_omits_empty_relationships() {
        let resource = NewResource::new("time-cards")
            .id("55")
            .attribute("ticket-number", "A-1");
        assert_eq!(
            resource.into_document(),
            json!({
                "data": {
                    "type": "time-cards",
                    "id": "55",
                    "attributes": { "ticket-number": "A-1" }
                }
            })
        );
    }

    #[test]
    fn cleared_relationship_is_null_linkage() {
        let mut resource = NewResource::new("tractors").id("1");
        assert!(resource.is_empty());
        resource.clear_to_one("brokered-tractor");
        assert!(!resource.is_empty());
        assert_eq!(
            resource.into_document()["data"]["relationships"]["brokered-tractor"],
            json!({ "data": null })
        );
    }
}
