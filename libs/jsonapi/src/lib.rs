//! # xbe-jsonapi
//!
//! JSON:API document handling for the xbe platform CLI.
//!
//! ## Design Principles
//!
//! - Documents are a pass-through view of what the server sent; the CLI does
//!   not own or enforce domain invariants
//! - Unknown members are ignored so server additions never break decoding
//! - Attribute access is lenient (numeric strings are numbers, `"true"` is a
//!   bool)
//! - Attribute order is preserved; relationships are kept sorted by name
//!
//! ## Document Shape
//!
//! ```json
//! {
//!   "data": { "id": "1", "type": "truckers",
//!             "attributes": { "company-name": "Acme" },
//!             "relationships": { "broker": { "data": { "type": "brokers", "id": "7" } } } },
//!   "included": [ { "id": "7", "type": "brokers", "attributes": { "company-name": "Big Broker" } } ]
//! }
//! ```
//!
//! `data` may also be an array or `null`. Related resources requested with
//! `include=` are resolved through [`IncludedIndex`], including dotted
//! relationship paths such as `trip.origin`.

mod builder;
mod document;
mod error;
mod resource;

pub use builder::NewResource;
pub use document::{error_summary, Document, ErrorObject, ErrorSource, IncludedIndex, PrimaryData};
pub use error::JsonApiError;
pub use resource::{display_value, Relationship, RelationshipData, Resource, ResourceIdentifier};

/// Media type for JSON:API requests and responses.
pub const MEDIA_TYPE: &str = "application/vnd.api+json";
