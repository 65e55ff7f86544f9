use crate::utils;
use serde_derive::Deserialize;
use serde_json::{Map, Value};

/// A forwarding server tunnels can be bound to.
///
/// Node records are treated as opaque beyond the id; whatever the service
/// reports (capacity, location, load) is kept in `attributes`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[non_exhaustive]
pub struct Node {
    #[serde(deserialize_with = "utils::string_or_number")]
    pub id: String,
    #[serde(flatten)]
    pub attributes: Map<String, Value>,
}
