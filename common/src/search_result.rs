use serde::{Deserialize, Deserializer, Serialize};

use crate::catalog::CatalogId;

/// A branch returned by the search endpoint. Read-only on the client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultItem {
    /// Numeric or slug id, as the backend sends it.
    pub id: CatalogId,
    pub name: String,
    #[serde(default, alias = "location")]
    pub address: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub rating: Option<f32>,
    /// Kilometres from the user, when the backend knows the user's position.
    #[serde(default)]
    pub distance: Option<f64>,
    #[serde(default)]
    pub logo: Option<String>,
    #[serde(default, alias = "timeSlots", deserialize_with = "null_as_empty")]
    pub available_slots: Vec<String>,
    #[serde(default)]
    pub price: Option<f64>,
}

fn null_as_empty<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<String>, D::Error> {
    Ok(Option::<Vec<String>>::deserialize(deserializer)?.unwrap_or_default())
}

impl ResultItem {
    pub fn location_line(&self) -> String {
        match (&self.address, &self.city) {
            (Some(address), Some(city)) => format!("{address}, {city}"),
            (Some(address), None) => address.clone(),
            (None, Some(city)) => city.clone(),
            (None, None) => String::new(),
        }
    }

    pub fn distance_label(&self) -> Option<String> {
        self.distance.map(|km| {
            if km < 1.0 {
                format!("{} m", (km * 1000.0).round() as u64)
            } else {
                format!("{km:.1} km")
            }
        })
    }
}
