//! Server-side ordering of search results.

use std::{fmt::Display, str::FromStr};

use serde::{Deserialize, Serialize};

/// Ordering requested from the search endpoint. The client never sorts locally.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SortBy {
    DistanceClosest,
    DistanceFarthest,
    RatingHighToLow,
    RatingLowToHigh,
}

impl SortBy {
    pub const ALL: [SortBy; 4] = [
        SortBy::DistanceClosest,
        SortBy::DistanceFarthest,
        SortBy::RatingHighToLow,
        SortBy::RatingLowToHigh,
    ];

    /// Wire name, identical to the serde representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            SortBy::DistanceClosest => "DISTANCE_CLOSEST",
            SortBy::DistanceFarthest => "DISTANCE_FARTHEST",
            SortBy::RatingHighToLow => "RATING_HIGH_TO_LOW",
            SortBy::RatingLowToHigh => "RATING_LOW_TO_HIGH",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SortBy::DistanceClosest => "Closest first",
            SortBy::DistanceFarthest => "Farthest first",
            SortBy::RatingHighToLow => "Rating: high to low",
            SortBy::RatingLowToHigh => "Rating: low to high",
        }
    }
}

impl Display for SortBy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownSortBy(pub String);

impl Display for UnknownSortBy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown sort order: {:?}", self.0)
    }
}

impl std::error::Error for UnknownSortBy {}

impl FromStr for SortBy {
    type Err = UnknownSortBy;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SortBy::ALL
            .into_iter()
            .find(|sort| sort.as_str() == s.trim())
            .ok_or_else(|| UnknownSortBy(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_names_match_serde() {
        for sort in SortBy::ALL {
            let json = serde_json::to_string(&sort).unwrap();
            assert_eq!(json, format!("\"{}\"", sort.as_str()));
            assert_eq!(sort.as_str().parse::<SortBy>().unwrap(), sort);
        }
    }

    #[test]
    fn rejects_unknown_names() {
        let err = "PRICE_LOW_TO_HIGH".parse::<SortBy>().unwrap_err();
        assert_eq!(err, UnknownSortBy("PRICE_LOW_TO_HIGH".to_string()));
    }
}
