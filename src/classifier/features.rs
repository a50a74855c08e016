//! Bag-of-words featurization
//!
//! Text is lowercased and split on whitespace. Nothing else: punctuation stays
//! attached to its word, so "delicious!" and "delicious" are different tokens.

use super::model::Model;

/// Lowercase and split on whitespace
pub fn tokenize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split_whitespace()
        .map(str::to_owned)
        .collect()
}

/// Binary presence vector over the model vocabulary.
///
/// Only the active positions are stored, sorted and unique.
#[derive(Clone, Debug, PartialEq)]
pub struct FeatureVector {
    dimension: usize,
    active: Vec<usize>,
}

impl FeatureVector {
    pub fn from_tokens<S: AsRef<str>>(tokens: &[S], model: &Model) -> Self {
        let mut active: Vec<usize> = tokens
            .iter()
            .filter_map(|token| model.index_of(token.as_ref()))
            .collect();
        active.sort_unstable();
        active.dedup();

        FeatureVector {
            dimension: model.weights().len(),
            active,
        }
    }

    pub fn from_text(text: &str, model: &Model) -> Self {
        Self::from_tokens(&tokenize(text), model)
    }

    pub fn dimension(&self) -> usize {
        self.dimension
    }

    pub fn active_indices(&self) -> &[usize] {
        &self.active
    }

    /// No vocabulary word was present
    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }

    pub fn get(&self, index: usize) -> f64 {
        if self.active.binary_search(&index).is_ok() {
            1.0
        } else {
            0.0
        }
    }

    pub fn to_dense(&self) -> Vec<f64> {
        let mut dense = vec![0.0; self.dimension];
        for &idx in &self.active {
            dense[idx] = 1.0;
        }
        dense
    }

    /// Dot product with a weight vector of the same dimension.
    ///
    /// Zero features contribute nothing, so summing the active weights in
    /// index order gives the dense result.
    pub fn dot(&self, weights: &[f64]) -> f64 {
        self.active.iter().map(|&idx| weights[idx]).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rustc_hash::FxHashMap;

    fn model() -> Model {
        let vocabulary: FxHashMap<String, usize> = [("delicious", 0), ("terrible", 1), ("!", 2)]
            .iter()
            .map(|&(w, i)| (w.to_string(), i))
            .collect();
        Model::new(vec![2.0, -3.0, 0.25], 0.0, vocabulary).unwrap()
    }

    #[test]
    fn test_tokenize() {
        assert_eq!(
            tokenize("  This IS\tdelicious!\nReally "),
            vec!["this", "is", "delicious!", "really"]
        );
        assert!(tokenize("").is_empty());
        assert!(tokenize(" \t\n ").is_empty());
    }

    #[test]
    fn test_binary_presence() {
        let features = FeatureVector::from_text("Delicious delicious DELICIOUS", &model());
        assert_eq!(features.active_indices(), &[0]);
        assert_eq!(features.to_dense(), vec![1.0, 0.0, 0.0]);
        assert_eq!(features.dot(model().weights()), 2.0);
    }

    #[test]
    fn test_punctuation_is_not_stripped() {
        let features = FeatureVector::from_text("delicious! terrible.", &model());
        assert!(features.is_empty());

        let features = FeatureVector::from_text("wow ! terrible", &model());
        assert_eq!(features.active_indices(), &[1, 2]);
        assert_eq!(features.get(2), 1.0);
        assert_eq!(features.get(0), 0.0);
    }

    #[test]
    fn test_dimension_follows_model() {
        let features = FeatureVector::from_text("nothing known here", &model());
        assert_eq!(features.dimension(), 3);
        assert_eq!(features.to_dense(), vec![0.0; 3]);
        assert_eq!(features.dot(model().weights()), 0.0);
    }
}
