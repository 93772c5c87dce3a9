//! Entity reference normalisation.
//!
//! The API sends a reference to another entity either as its bare id or as the
//! embedded entity itself. Both shapes collapse to the id while deserializing,
//! so nothing past this boundary branches on the shape.

use serde::{Deserialize, Deserializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum RawReference {
    Id(String),
    Embedded {
        #[serde(rename = "_id")]
        id: String,
    },
}

impl RawReference {
    fn into_id(self) -> Option<String> {
        let id = match self {
            Self::Id(id) | Self::Embedded { id } => id,
        };
        if id.is_empty() {
            None
        } else {
            Some(id)
        }
    }
}

/// Deserialize an optional reference (`null`, `"id"` or `{ "_id": "id", .. }`).
pub fn optional<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<RawReference>::deserialize(deserializer)?;
    Ok(raw.and_then(RawReference::into_id))
}

/// Deserialize a list of references, dropping empty ids.
pub fn list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<Vec<RawReference>>::deserialize(deserializer)?;
    Ok(raw
        .unwrap_or_default()
        .into_iter()
        .filter_map(RawReference::into_id)
        .collect())
}
