use crate::core::score::{classify, ScoreRating};
use crate::domain::ports::ListingBackend;
use crate::utils::error::{CarscopeError, Result};
use regex::Regex;
use std::sync::OnceLock;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PredictionOutcome {
    pub score: f64,
    pub rating: ScoreRating,
}

fn price_pattern() -> &'static Regex {
    static PRICE_RE: OnceLock<Regex> = OnceLock::new();
    PRICE_RE.get_or_init(|| Regex::new(r"\$([0-9][0-9,]*)").unwrap())
}

/// The dollar price mentioned in a description, if any.
pub fn listed_price(description: &str) -> Option<u64> {
    let captures = price_pattern().captures(description)?;
    captures[1].replace(',', "").parse().ok()
}

/// Validates a description locally before any request goes out: it must be
/// non-empty after trimming and mention a dollar price, mirroring what the
/// scoring model was trained on.
pub fn validate_description(description: &str) -> Result<&str> {
    let text = description.trim();
    if text.is_empty() {
        return Err(CarscopeError::ValidationError {
            message: "Please enter a car description".to_string(),
        });
    }
    if listed_price(text).is_none() {
        return Err(CarscopeError::ValidationError {
            message: "Please enter more information".to_string(),
        });
    }
    Ok(text)
}

/// Scores a free-text description via the backend and classifies the result.
pub async fn predict_score<B: ListingBackend>(
    backend: &B,
    description: &str,
) -> Result<PredictionOutcome> {
    let text = validate_description(description)?;
    let score = backend.predict(text).await?;
    tracing::debug!(score, "prediction received");
    Ok(PredictionOutcome {
        score,
        rating: classify(score),
    })
}
