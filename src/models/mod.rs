use serde::{Deserialize, Serialize};

/// Distance ceiling applied when the client omits `maxDistance`
pub const DEFAULT_MAX_DISTANCE: u32 = 10;

/// Structured search criteria collected by the front-end form
///
/// `city`, `kids_ages` and `availability` are validated non-empty before a
/// criteria value is constructed; the prompt builder does not re-check them.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchCriteria {
    pub city: String,
    /// Free-form age description, e.g. "7" or "5-9"
    pub kids_ages: String,
    /// Free-form time window, e.g. "sunday (tomorrow)"
    pub availability: String,
    /// Miles from the city center
    pub max_distance: u32,
    /// Optional; empty means no preferences
    pub preferences: String,
}

/// One ranked activity suggestion returned to the client
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Recommendation {
    pub rank: u32,
    /// Conventionally "<Event Name> - <Exact Day/Time>"
    pub title: String,
    pub emoji: String,
    pub description: String,
    pub location: String,
    /// Free-form, e.g. "3 miles"
    pub distance: String,
}

/// The fixed-shape response body: a ranked list of recommendations
///
/// `recommendations` defaults to empty on deserialization so a reply missing
/// the field is classified as an empty result rather than a parse failure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendationSet {
    #[serde(default)]
    pub recommendations: Vec<Recommendation>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recommendation_deserializes_from_model_output_shape() {
        let json = r#"{
            "rank": 1,
            "title": "Fall Festival - Saturday 2-5pm",
            "emoji": "🎪",
            "description": "An afternoon of rides and games.",
            "location": "Zilker Park",
            "distance": "3 miles"
        }"#;

        let rec: Recommendation = serde_json::from_str(json).unwrap();
        assert_eq!(rec.rank, 1);
        assert_eq!(rec.title, "Fall Festival - Saturday 2-5pm");
        assert_eq!(rec.distance, "3 miles");
    }

    #[test]
    fn test_recommendation_rejects_missing_fields() {
        // Entries must carry every display field.
        let json = r#"{"rank": 1, "title": "Fall Festival"}"#;
        assert!(serde_json::from_str::<Recommendation>(json).is_err());
    }

    #[test]
    fn test_recommendation_set_defaults_to_empty() {
        let set: RecommendationSet = serde_json::from_str("{}").unwrap();
        assert!(set.recommendations.is_empty());
    }

    #[test]
    fn test_recommendation_set_serializes_under_recommendations_key() {
        let set = RecommendationSet {
            recommendations: vec![],
        };
        let json = serde_json::to_value(&set).unwrap();
        assert!(json.get("recommendations").unwrap().is_array());
    }
}
