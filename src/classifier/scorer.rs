//! Pegasos scoring: sign(theta · x + theta_0)
//!
//! Confidence and influence constants are fixed, not configurable.

use super::features::{tokenize, FeatureVector};
use super::model::Model;
use serde::Serialize;

/// Divisor mapping |score| onto the confidence scale
pub const CONFIDENCE_SCALE: f64 = 5.0;
/// Upper bound on reported confidence
pub const CONFIDENCE_CAP: f64 = 0.99;
/// Minimum |weight| for a token to be reported as influential
pub const INFLUENCE_THRESHOLD: f64 = 0.5;
pub const MAX_INFLUENTIAL_TOKENS: usize = 5;

/// Shown in place of a result when the model failed to load
pub const UNAVAILABLE_MESSAGE: &str = "Model not loaded properly";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Label {
    Positive,
    Negative,
}

impl Label {
    /// Strictly positive scores are POSITIVE; zero is NEGATIVE
    pub fn from_score(score: f64) -> Self {
        if score > 0.0 {
            Label::Positive
        } else {
            Label::Negative
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct InfluentialToken {
    pub word: String,
    pub weight: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PredictionResult {
    pub label: Label,
    pub confidence: f64,
    pub raw_score: f64,
    pub influential_tokens: Vec<InfluentialToken>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Prediction {
    Scored(PredictionResult),
    /// The model has no vocabulary; nothing was scored
    Unavailable,
}

impl Prediction {
    pub fn result(&self) -> Option<&PredictionResult> {
        match self {
            Prediction::Scored(result) => Some(result),
            Prediction::Unavailable => None,
        }
    }

    pub fn is_unavailable(&self) -> bool {
        matches!(self, Prediction::Unavailable)
    }
}

pub fn confidence(raw_score: f64) -> f64 {
    (raw_score.abs() / CONFIDENCE_SCALE).min(CONFIDENCE_CAP)
}

/// Classify `text` with `model`
pub fn predict(text: &str, model: &Model) -> Prediction {
    if model.is_degraded() {
        return Prediction::Unavailable;
    }

    let tokens = tokenize(text);
    let features = FeatureVector::from_tokens(&tokens, model);
    let raw_score = features.dot(model.weights()) + model.bias();

    let influential_tokens = tokens
        .iter()
        .filter_map(|token| {
            model
                .weight_of(token)
                .filter(|weight| weight.abs() > INFLUENCE_THRESHOLD)
                .map(|weight| InfluentialToken {
                    word: token.clone(),
                    weight,
                })
        })
        .take(MAX_INFLUENTIAL_TOKENS)
        .collect();

    tracing::debug!(
        tokens = tokens.len(),
        hits = features.active_indices().len(),
        raw_score,
        "Scored review"
    );

    Prediction::Scored(PredictionResult {
        label: Label::from_score(raw_score),
        confidence: confidence(raw_score),
        raw_score,
        influential_tokens,
    })
}
