//! Classifier Module: Pegasos model loading, scoring, and the keyword baseline
//!
//! # Components
//! - `model.rs`: Model bundle loading and validation
//! - `features.rs`: Whitespace tokenizer and binary bag-of-words vector
//! - `scorer.rs`: Linear score, label, confidence, influential words
//! - `baseline.rs`: Keyword-counting comparator
//! - `error.rs`: Load errors

pub mod baseline;
pub mod error;
pub mod features;
pub mod model;
pub mod scorer;

pub use baseline::{KeywordBaseline, KeywordLabel, KeywordVerdict};
pub use error::LoadError;
pub use model::Model;
pub use scorer::{predict, Label, Prediction};
