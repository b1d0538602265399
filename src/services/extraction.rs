use crate::{
    error::{AppError, AppResult},
    models::RecommendationSet,
};

/// One way of locating a JSON payload inside free-form reply text.
///
/// Strategies are tried in order; the first one that locates a payload wins
/// and its payload is parsed exactly once. A located-but-malformed payload
/// fails the parse rather than falling through to the next strategy, matching
/// how the model is instructed: a fenced block is authoritative when present.
pub trait ExtractionStrategy: Sync {
    /// Attempt to locate a JSON payload in the reply text
    fn extract<'a>(&self, text: &'a str) -> Option<&'a str>;
}

/// Locates the interior of a ```json fenced code block
pub struct FencedBlock;

impl ExtractionStrategy for FencedBlock {
    fn extract<'a>(&self, text: &'a str) -> Option<&'a str> {
        let fence = "```json";
        let start = text.find(fence)?;
        let body = &text[start + fence.len()..];
        let end = body.find("```")?;
        Some(body[..end].trim())
    }
}

/// Slices from the first `{` through the last `}`, inclusive
pub struct BraceSlice;

impl ExtractionStrategy for BraceSlice {
    fn extract<'a>(&self, text: &'a str) -> Option<&'a str> {
        let start = text.find('{')?;
        let end = text.rfind('}')?;
        if end < start {
            return None;
        }
        Some(&text[start..=end])
    }
}

static STRATEGIES: [&dyn ExtractionStrategy; 2] = [&FencedBlock, &BraceSlice];

/// Extracts and validates the recommendation list from raw reply text.
///
/// The reply may mix prose and JSON, with or without a fenced code block.
/// Entries must carry every display field; rank uniqueness and ordering are
/// passed through as the model produced them.
pub fn parse_recommendations(reply: &str) -> AppResult<RecommendationSet> {
    let payload = STRATEGIES
        .iter()
        .find_map(|strategy| strategy.extract(reply))
        .ok_or_else(|| AppError::ResponseParse("no JSON object found in reply text".to_string()))?;

    let parsed: RecommendationSet = serde_json::from_str(payload)
        .map_err(|e| AppError::ResponseParse(format!("reply JSON is malformed: {}", e)))?;

    if parsed.recommendations.is_empty() {
        return Err(AppError::EmptyResult);
    }

    Ok(parsed)
}
