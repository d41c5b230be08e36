//! Query-string construction for JSON:API list and show requests.

use crate::catalog::ResourceSpec;

/// Ordered query parameters. Setting a key again replaces its value in place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query {
    pairs: Vec<(String, String)>,
}

impl Query {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sparse fieldset for the list columns plus includes.
    pub fn for_list(spec: &ResourceSpec) -> Self {
        let mut query = Self::new();
        if !spec.fields.is_empty() {
            query.set(
                format!("fields[{}]", spec.resource_type()),
                spec.fields.join(","),
            );
        }
        query.includes(spec);
        query
    }

    /// Includes only; `show` asks for every attribute of the primary record.
    pub fn for_show(spec: &ResourceSpec) -> Self {
        let mut query = Self::new();
        query.includes(spec);
        query
    }

    fn includes(&mut self, spec: &ResourceSpec) {
        if !spec.include.is_empty() {
            self.set("include", spec.include.join(","));
        }
        for (included_type, fields) in spec.included_fields {
            self.set(format!("fields[{included_type}]"), *fields);
        }
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.pairs.iter_mut().find(|(existing, _)| *existing == key) {
            Some(pair) => pair.1 = value,
            None => self.pairs.push((key, value)),
        }
    }

    /// Set `key` only when `value` is non-blank after trimming.
    pub fn set_if_present(&mut self, key: impl Into<String>, value: Option<&str>) {
        if let Some(value) = value.map(str::trim).filter(|value| !value.is_empty()) {
            self.set(key, value);
        }
    }

    /// `filter[<name>]`, sent only when non-blank.
    pub fn filter(&mut self, name: &str, value: Option<&str>) {
        self.set_if_present(format!("filter[{name}]"), value);
    }

    /// `page[limit]` and `page[offset]`; zero means "not set".
    pub fn page(&mut self, limit: u32, offset: u32) {
        if limit > 0 {
            self.set("page[limit]", limit.to_string());
        }
        if offset > 0 {
            self.set("page[offset]", offset.to_string());
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(existing, _)| existing == key)
            .map(|(_, value)| value.as_str())
    }

    pub fn pairs(&self) -> &[(String, String)] {
        &self.pairs
    }
}

/// Split a raw `key=value` filter argument.
pub fn parse_key_value(raw: &str) -> Option<(String, String)> {
    let (key, value) = raw.split_once('=')?;
    let key = key.trim();
    if key.is_empty() {
        return None;
    }
    Some((key.to_string(), value.trim().to_string()))
}

/// Split a comma-separated list, dropping blanks.
pub fn split_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}
