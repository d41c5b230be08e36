//! Turning JSON:API resources into table rows and JSON records.

use serde_json::{json, Map, Value};
use xbe_jsonapi::{display_value, Document, IncludedIndex, RelationshipData, Resource};

use crate::catalog::{Column, ResourceSpec, Source, LABEL_ATTRIBUTES};
use crate::output::truncate;

/// Text for one column of one resource.
pub fn column_text(resource: &Resource, index: &IncludedIndex<'_>, column: &Column) -> String {
    match column.source {
        Source::Id => resource.id.clone(),
        Source::Attr(attr) => resource.attr_text(attr).unwrap_or_default(),
        Source::Related { path, attrs } => related_label(resource, index, path, attrs),
        Source::RelatedId(rel) => resource
            .related(rel)
            .map(|identifier| identifier.id.clone())
            .unwrap_or_default(),
    }
}

/// Label of the resource reached through `path`. Falls back to the linked id
/// when a single-hop relationship was not included.
fn related_label(
    resource: &Resource,
    index: &IncludedIndex<'_>,
    path: &str,
    attrs: &[&str],
) -> String {
    if let Some(target) = index.resolve(resource, path) {
        return label_of(target, attrs).unwrap_or_else(|| target.id.clone());
    }
    if path.contains('.') {
        return String::new();
    }
    resource
        .related(path)
        .map(|identifier| identifier.id.clone())
        .unwrap_or_default()
}

/// First non-blank attribute from `preferred`, then the generic label list.
pub fn label_of(resource: &Resource, preferred: &[&str]) -> Option<String> {
    preferred
        .iter()
        .chain(LABEL_ATTRIBUTES.iter())
        .find_map(|attr| resource.attr_text(attr))
}

/// Table rows for a list response, truncated per column width.
pub fn table_rows(spec: &ResourceSpec, doc: &Document) -> Vec<Vec<String>> {
    let index = doc.included_index();
    doc.resources()
        .iter()
        .map(|resource| {
            spec.columns
                .iter()
                .map(|column| {
                    let text = column_text(resource, &index, column);
                    match column.width {
                        Some(width) => truncate(&text, width),
                        None => text,
                    }
                })
                .collect()
        })
        .collect()
}

pub fn table_headers(spec: &ResourceSpec) -> Vec<&'static str> {
    spec.columns.iter().map(|column| column.header).collect()
}

/// JSON records for a list response, keyed by column key.
///
/// Attribute columns keep the server's JSON value; other columns are strings,
/// or `null` when empty.
pub fn json_rows(spec: &ResourceSpec, doc: &Document) -> Vec<Value> {
    let index = doc.included_index();
    doc.resources()
        .iter()
        .map(|resource| {
            let mut row = Map::new();
            for column in spec.columns {
                let value = match column.source {
                    Source::Attr(attr) => resource.attr(attr).cloned().unwrap_or(Value::Null),
                    _ => {
                        let text = column_text(resource, &index, column);
                        if text.is_empty() {
                            Value::Null
                        } else {
                            Value::String(text)
                        }
                    }
                };
                row.insert(column.key.to_string(), value);
            }
            Value::Object(row)
        })
        .collect()
}

/// Flattened JSON view of a single resource.
pub fn resource_json(resource: &Resource, omit_null: bool) -> Value {
    let attributes: Map<String, Value> = resource
        .attributes
        .iter()
        .filter(|(_, value)| !(omit_null && value.is_null()))
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect();

    let relationships: Map<String, Value> = resource
        .relationships
        .iter()
        .filter_map(|(name, relationship)| {
            let value = match &relationship.data {
                Some(RelationshipData::One(identifier)) => {
                    json!({ "type": identifier.resource_type, "id": identifier.id })
                }
                Some(RelationshipData::Many(identifiers)) => Value::Array(
                    identifiers
                        .iter()
                        .map(|identifier| json!({ "type": identifier.resource_type, "id": identifier.id }))
                        .collect(),
                ),
                None if omit_null => return None,
                None => Value::Null,
            };
            Some((name.clone(), value))
        })
        .collect();

    json!({
        "id": resource.id,
        "type": resource.resource_type,
        "attributes": attributes,
        "relationships": relationships,
    })
}

/// `key: value` lines for `show` in table mode.
pub fn detail_pairs(resource: &Resource, index: &IncludedIndex<'_>) -> Vec<(String, String)> {
    let mut pairs = vec![
        ("id".to_string(), resource.id.clone()),
        ("type".to_string(), resource.resource_type.clone()),
    ];

    for (key, value) in &resource.attributes {
        pairs.push((key.clone(), display_value(value)));
    }

    for (name, relationship) in &resource.relationships {
        let text = match &relationship.data {
            Some(RelationshipData::One(identifier)) => {
                describe_link(index, identifier.resource_type.as_str(), identifier.id.as_str())
            }
            Some(RelationshipData::Many(identifiers)) => identifiers
                .iter()
                .map(|identifier| {
                    describe_link(index, identifier.resource_type.as_str(), identifier.id.as_str())
                })
                .collect::<Vec<_>>()
                .join(", "),
            None => continue,
        };
        pairs.push((name.clone(), text));
    }

    pairs
}

fn describe_link(index: &IncludedIndex<'_>, resource_type: &str, id: &str) -> String {
    let identifier = xbe_jsonapi::ResourceIdentifier::new(resource_type, id);
    match index.get(&identifier).and_then(|target| label_of(target, &[])) {
        Some(label) => format!("{identifier} ({label})"),
        None => identifier.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog;

    fn material_transactions() -> Document {
        serde_json::from_value(json!({
            "data": [{
                "id": "m1",
                "type": "material-transactions",
                "attributes": {
                    "transaction-at": "2025-01-02T10:00:00Z",
                    "ticket-number": "T-77",
                    "net-weight-lbs": 45000,
                    "status": "accepted"
                },
                "relationships": {
                    "material-type": { "data": { "type": "material-types", "id": "mt1" } },
                    "trip": { "data": { "type": "trips", "id": "t1" } }
                }
            }],
            "included": [
                { "id": "mt1", "type": "material-types", "attributes": { "name": "57 Stone", "display-name": "#57 Washed Stone" } },
                {
                    "id": "t1",
                    "type": "trips",
                    "relationships": {
                        "origin": { "data": { "type": "material-sites", "id": "s1" } },
                        "destination": { "data": null }
                    }
                },
                { "id": "s1", "type": "material-sites", "attributes": { "name": "North Quarry Main Entrance Scale House" } }
            ]
        }))
        .unwrap()
    }

    #[test]
    fn list_rows_follow_catalog_columns() {
        let spec = catalog::resource("material-transactions").unwrap();
        let rows = table_rows(spec, &material_transactions());
        let headers = table_headers(spec);
        let cell = |name: &str| {
            let at = headers.iter().position(|h| *h == name).unwrap();
            rows[0][at].clone()
        };

        assert_eq!(cell("ID"), "m1");
        assert_eq!(cell("TICKET"), "T-77");
        assert_eq!(cell("MATERIAL"), "#57 Washed Stone");
        assert_eq!(cell("NET LBS"), "45000");
        assert_eq!(cell("ORIGIN"), "North Quarry Main...");
        assert_eq!(cell("DESTINATION"), "");
        assert_eq!(cell("TRUCKER"), "");
    }

    #[test]
    fn json_rows_keep_attribute_values() {
        let spec = catalog::resource("material-transactions").unwrap();
        let rows = json_rows(spec, &material_transactions());
        assert_eq!(rows[0]["id"], json!("m1"));
        assert_eq!(rows[0]["net_weight_lbs"], json!(45000));
        assert_eq!(rows[0]["origin"], json!("North Quarry Main Entrance Scale House"));
        assert_eq!(rows[0]["destination"], Value::Null);
    }

    #[test]
    fn unincluded_single_hop_falls_back_to_id() {
        let doc: Document = serde_json::from_value(json!({
            "data": [{
                "id": "1",
                "type": "truckers",
                "attributes": { "company-name": "Acme" },
                "relationships": { "broker": { "data": { "type": "brokers", "id": "7" } } }
            }]
        }))
        .unwrap();
        let spec = catalog::resource("truckers").unwrap();
        let rows = table_rows(spec, &doc);
        assert_eq!(rows[0], vec!["1", "Acme", "7", ""]);
    }

    #[test]
    fn show_details_describe_relationships() {
        let doc = material_transactions();
        let index = doc.included_index();
        let pairs = detail_pairs(&doc.resources()[0], &index);

        assert_eq!(pairs[0], ("id".to_string(), "m1".to_string()));
        assert!(pairs.contains(&(
            "material-type".to_string(),
            "material-types/mt1 (57 Stone)".to_string()
        )));
        assert!(pairs.contains(&("trip".to_string(), "trips/t1".to_string())));
    }

    #[test]
    fn resource_json_flattens_and_omits_nulls() {
        let resource: Resource = serde_json::from_value(json!({
            "id": "5",
            "type": "tractors",
            "attributes": { "number": "T5", "vin": null },
            "relationships": {
                "trucker": { "data": { "type": "truckers", "id": "2" } },
                "drivers": { "data": [{ "type": "users", "id": "8" }] },
                "brokered-tractor": { "data": null }
            }
        }))
        .unwrap();

        let full = resource_json(&resource, false);
        assert_eq!(full["attributes"]["vin"], Value::Null);
        assert_eq!(full["relationships"]["brokered-tractor"], Value::Null);
        assert_eq!(full["relationships"]["drivers"], json!([{ "type": "users", "id": "8" }]));

        let trimmed = resource_json(&resource, true);
        assert!(trimmed["attributes"].get("vin").is_none());
        assert!(trimmed["relationships"].get("brokered-tractor").is_none());
        assert_eq!(trimmed["relationships"]["trucker"], json!({ "type": "truckers", "id": "2" }));
    }

    #[test]
    fn labels_prefer_given_attributes() {
        let resource: Resource = serde_json::from_value(json!({
            "id": "1", "type": "users",
            "attributes": { "name": " ", "email-address": "ann@example.com", "title": "Ops" }
        }))
        .unwrap();
        assert_eq!(label_of(&resource, &["title"]).as_deref(), Some("Ops"));
        assert_eq!(label_of(&resource, &[]).as_deref(), Some("Ops"));
        assert_eq!(label_of(&resource, &["email-address"]).as_deref(), Some("ann@example.com"));
    }
}
