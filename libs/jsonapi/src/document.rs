//! Top-level documents, error objects, and included-resource lookup.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::JsonApiError;
use crate::resource::{Resource, ResourceIdentifier};

/// Primary data of a document: one resource or a collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PrimaryData {
    Many(Vec<Resource>),
    One(Box<Resource>),
}

/// A JSON:API top-level document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Document {
    /// Primary data. `None` when absent or `null`.
    #[serde(default)]
    pub data: Option<PrimaryData>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub included: Vec<Resource>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta: Option<Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub links: Option<Value>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<ErrorObject>,
}

impl Document {
    /// Decode a document from a response body.
    pub fn from_slice(body: &[u8]) -> Result<Self, JsonApiError> {
        if body.iter().all(u8::is_ascii_whitespace) {
            return Err(JsonApiError::EmptyBody);
        }
        Ok(serde_json::from_slice(body)?)
    }

    /// Primary resources as a slice, whatever the shape of `data`.
    pub fn resources(&self) -> &[Resource] {
        match &self.data {
            Some(PrimaryData::Many(resources)) => resources,
            Some(PrimaryData::One(resource)) => std::slice::from_ref(resource.as_ref()),
            None => &[],
        }
    }

    /// The single primary resource.
    pub fn single(&self) -> Result<&Resource, JsonApiError> {
        match &self.data {
            Some(PrimaryData::One(resource)) => Ok(resource),
            _ => Err(JsonApiError::ExpectedSingle),
        }
    }

    /// Index of `included` resources keyed by `(type, id)`.
    pub fn included_index(&self) -> IncludedIndex<'_> {
        IncludedIndex::new(&self.included)
    }
}

/// Lookup table over sideloaded resources.
#[derive(Debug, Default)]
pub struct IncludedIndex<'a> {
    by_key: HashMap<(&'a str, &'a str), &'a Resource>,
}

impl<'a> IncludedIndex<'a> {
    pub fn new(included: &'a [Resource]) -> Self {
        let by_key = included
            .iter()
            .map(|resource| {
                (
                    (resource.resource_type.as_str(), resource.id.as_str()),
                    resource,
                )
            })
            .collect();
        Self { by_key }
    }

    pub fn get(&self, identifier: &ResourceIdentifier) -> Option<&'a Resource> {
        self.by_key
            .get(&(identifier.resource_type.as_str(), identifier.id.as_str()))
            .copied()
    }

    /// Follow a dotted relationship path (`trip.origin`) from `resource`.
    ///
    /// Each hop takes the first linked identifier and must be present in
    /// `included`.
    pub fn resolve(&self, resource: &'a Resource, path: &str) -> Option<&'a Resource> {
        let mut current = resource;
        for hop in path.split('.').filter(|hop| !hop.is_empty()) {
            let identifier = current.related(hop)?;
            current = self.get(identifier)?;
        }
        if std::ptr::eq(current, resource) {
            None
        } else {
            Some(current)
        }
    }

    /// Resolve every resource linked through the last hop of `path`.
    pub fn resolve_many(&self, resource: &'a Resource, path: &str) -> Vec<&'a Resource> {
        let (prefix, last) = match path.rsplit_once('.') {
            Some((prefix, last)) => (Some(prefix), last),
            None => (None, path),
        };
        let owner = match prefix {
            Some(prefix) => match self.resolve(resource, prefix) {
                Some(owner) => owner,
                None => return Vec::new(),
            },
            None => resource,
        };
        owner
            .related_many(last)
            .into_iter()
            .filter_map(|identifier| self.get(identifier))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.by_key.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_key.is_empty()
    }
}

/// Pointer to the part of the request an error refers to.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorSource {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pointer: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parameter: Option<String>,
}

/// A JSON:API error object.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorObject {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<ErrorSource>,
}

impl ErrorObject {
    /// One-line summary: `<status> <title>: <detail> (<pointer>)`.
    pub fn summary(&self) -> String {
        let mut head = Vec::new();
        if let Some(status) = non_blank(&self.status) {
            head.push(status);
        }
        if let Some(title) = non_blank(&self.title).or_else(|| non_blank(&self.code)) {
            head.push(title);
        }
        let mut out = head.join(" ");

        if let Some(detail) = non_blank(&self.detail) {
            if out.is_empty() {
                out.push_str(detail);
            } else if Some(detail) != non_blank(&self.title) {
                out.push_str(": ");
                out.push_str(detail);
            }
        }

        let location = self.source.as_ref().and_then(|source| {
            non_blank(&source.pointer).or_else(|| non_blank(&source.parameter))
        });
        if let Some(location) = location {
            out.push_str(&format!(" ({location})"));
        }
        out
    }
}

/// Summarize a list of error objects, one per line.
pub fn error_summary(errors: &[ErrorObject]) -> String {
    errors
        .iter()
        .map(ErrorObject::summary)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

fn non_blank(value: &Option<String>) -> Option<&str> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|value| !value.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn truckers_page() -> Document {
        let body = json!({
            "data": [
                {
                    "id": "1",
                    "type": "truckers",
                    "attributes": { "company-name": "Acme Hauling", "is-active": true },
                    "relationships": { "broker": { "data": { "type": "brokers", "id": "7" } } }
                },
                {
                    "id": "2",
                    "type": "truckers",
                    "attributes": { "company-name": "Solo", "is-active": false },
                    "relationships": { "broker": { "data": null } }
                }
            ],
            "included": [
                { "id": "7", "type": "brokers", "attributes": { "company-name": "Big Broker" } }
            ],
            "meta": { "record-count": 2 }
        });
        Document::from_slice(body.to_string().as_bytes()).unwrap()
    }

    #[test]
    fn decodes_collection_with_included() {
        let doc = truckers_page();
        assert_eq!(doc.resources().len(), 2);
        assert!(doc.single().is_err());

        let index = doc.included_index();
        assert_eq!(index.len(), 1);

        let broker = index.resolve(&doc.resources()[0], "broker").unwrap();
        assert_eq!(broker.attr_text("company-name").as_deref(), Some("Big Broker"));
        assert!(index.resolve(&doc.resources()[1], "broker").is_none());
    }

    #[test]
    fn decodes_single_and_null_data() {
        let doc = Document::from_slice(br#"{"data":{"id":"5","type":"users","attributes":{"name":"Ann"}}}"#)
            .unwrap();
        assert_eq!(doc.single().unwrap().id, "5");
        assert_eq!(doc.resources().len(), 1);

        let doc = Document::from_slice(br#"{"data":null}"#).unwrap();
        assert!(doc.resources().is_empty());
        assert_eq!(doc.single(), Err(JsonApiError::ExpectedSingle));
    }

    #[test]
    fn empty_body_is_an_error() {
        assert_eq!(Document::from_slice(b"  \n"), Err(JsonApiError::EmptyBody));
        assert!(matches!(
            Document::from_slice(b"<html>"),
            Err(JsonApiError::Decode(_))
        ));
    }

    #[test]
    fn resolves_dotted_paths_through_included() {
        let doc: Document = serde_json::from_value(json!({
            "data": {
                "id": "m1",
                "type": "material-transactions",
                "relationships": { "trip": { "data": { "type": "trips", "id": "t1" } } }
            },
            "included": [
                {
                    "id": "t1",
                    "type": "trips",
                    "relationships": {
                        "origin": { "data": { "type": "material-sites", "id": "s1" } },
                        "stops": { "data": [
                            { "type": "job-sites", "id": "j1" },
                            { "type": "job-sites", "id": "j2" },
                            { "type": "job-sites", "id": "missing" }
                        ] }
                    }
                },
                { "id": "s1", "type": "material-sites", "attributes": { "name": "North Pit" } },
                { "id": "j1", "type": "job-sites", "attributes": { "name": "Main St" } },
                { "id": "j2", "type": "job-sites", "attributes": { "name": "Elm St" } }
            ]
        }))
        .unwrap();

        let index = doc.included_index();
        let primary = doc.single().unwrap();
        let origin = index.resolve(primary, "trip.origin").unwrap();
        assert_eq!(origin.attr_text("name").as_deref(), Some("North Pit"));
        assert!(index.resolve(primary, "trip.destination").is_none());
        assert!(index.resolve(primary, "").is_none());

        let stops = index.resolve_many(primary, "trip.stops");
        let names: Vec<_> = stops.iter().filter_map(|s| s.attr_text("name")).collect();
        assert_eq!(names, vec!["Main St", "Elm St"]);
    }

    #[test]
    fn error_objects_summarize() {
        let doc: Document = serde_json::from_value(json!({
            "errors": [
                {
                    "status": "422",
                    "title": "Invalid attribute",
                    "detail": "number can't be blank",
                    "source": { "pointer": "/data/attributes/number" }
                },
                { "detail": "trucker must exist" },
                { "status": "422", "title": "Same", "detail": "Same" }
            ]
        }))
        .unwrap();

        assert_eq!(
            error_summary(&doc.errors),
            "422 Invalid attribute: number can't be blank (/data/attributes/number)\n\
             trucker must exist\n\
             422 Same"
        );
    }
}
