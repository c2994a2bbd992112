//! Catalog records behind the selector inputs: brands, models, services, cities.

use std::fmt::Display;

use serde::{Deserialize, Serialize};

/// Identifier of a catalog record. The backend uses numeric ids for most
/// tables and slugs for a few, so both are accepted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialOrd, Ord, PartialEq, Eq, Hash)]
#[serde(untagged)]
pub enum CatalogId {
    Int(u64),
    String(String),
}

impl Display for CatalogId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CatalogId::Int(id) => write!(f, "{id}"),
            CatalogId::String(id) => write!(f, "{id}"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogItem {
    pub id: CatalogId,
    #[serde(alias = "title", alias = "brandName", alias = "modelName", alias = "serviceName", alias = "cityName")]
    pub name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_name_like_fields_and_mixed_ids() {
        let items: Vec<CatalogItem> = serde_json::from_str(
            r#"[{"id": 7, "brandName": "BMW"}, {"id": "oil-change", "title": "Oil change"}, {"id": 3, "name": "Sofia"}]"#,
        )
        .unwrap();
        assert_eq!(items[0].id.to_string(), "7");
        assert_eq!(items[0].name, "BMW");
        assert_eq!(items[1].id, CatalogId::String("oil-change".into()));
        assert_eq!(items[1].name, "Oil change");
        assert_eq!(items[2].name, "Sofia");
    }
}
