// Store domain model
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Store {
    pub id: String,
    pub name: String,
    pub city: String,
}

/// Display name for a store id, falling back to the id itself.
pub fn store_name<'a>(stores: &'a [Store], id: &'a str) -> &'a str {
    stores
        .iter()
        .find(|s| s.id == id)
        .map(|s| s.name.as_str())
        .unwrap_or(id)
}
