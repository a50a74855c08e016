//! Model store: the trained Pegasos weights and vocabulary
//!
//! Handles:
//! - Reading a model bundle exported by the training process (JSON or bincode)
//! - Validating the bundle into an immutable `Model`
//! - The degraded empty model used when loading fails

use super::error::{LoadError, Result};
use rustc_hash::FxHashMap;
use std::fs;
use std::path::Path;

/// Descriptive fields shipped with the bundle. Display only.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ModelMetadata {
    /// Test accuracy reported by the training run (0.0-1.0)
    pub accuracy: Option<f64>,
    /// Strongest positive words, strongest first
    pub top_positive: Vec<String>,
    /// Strongest negative words, strongest last
    pub top_negative: Vec<String>,
}

impl ModelMetadata {
    /// First `n` entries of the positive word list
    pub fn most_positive(&self, n: usize) -> Vec<&str> {
        self.top_positive.iter().take(n).map(String::as_str).collect()
    }

    /// Last `n` entries of the negative word list, most negative first
    pub fn most_negative(&self, n: usize) -> Vec<&str> {
        self.top_negative
            .iter()
            .rev()
            .take(n)
            .map(String::as_str)
            .collect()
    }
}

/// On-disk layout written by the training process.
///
/// Required fields are optional here so that a missing one surfaces as
/// `LoadError::MissingField` instead of a generic decode error.
#[derive(Clone, Debug, Default, serde::Serialize, serde::Deserialize)]
pub struct ModelBundle {
    #[serde(rename = "theta", alias = "weights", default)]
    pub theta: Option<Vec<f64>>,
    #[serde(rename = "theta_0", alias = "bias", default)]
    pub theta_0: Option<f64>,
    #[serde(rename = "dictionary", alias = "vocabulary", default)]
    pub dictionary: Option<FxHashMap<String, usize>>,
    #[serde(default)]
    pub accuracy: Option<f64>,
    #[serde(default)]
    pub top_positive: Vec<String>,
    #[serde(default)]
    pub top_negative: Vec<String>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Encoding {
    Json,
    Bincode,
}

impl Encoding {
    fn detect(path: &Path, bytes: &[u8]) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some("json") => Encoding::Json,
            Some("bin") | Some("bincode") => Encoding::Bincode,
            _ => {
                let first = bytes.iter().find(|b| !b.is_ascii_whitespace());
                if first == Some(&b'{') {
                    Encoding::Json
                } else {
                    Encoding::Bincode
                }
            }
        }
    }
}

/// Immutable linear classifier: `score = weights · x + bias`
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Model {
    weights: Vec<f64>,
    bias: f64,
    vocabulary: FxHashMap<String, usize>,
    metadata: ModelMetadata,
}

impl Model {
    /// Build a model from its parts, checking every invariant
    pub fn new(
        weights: Vec<f64>,
        bias: f64,
        vocabulary: FxHashMap<String, usize>,
    ) -> Result<Self> {
        Self::with_metadata(weights, bias, vocabulary, ModelMetadata::default())
    }

    pub fn with_metadata(
        weights: Vec<f64>,
        bias: f64,
        vocabulary: FxHashMap<String, usize>,
        metadata: ModelMetadata,
    ) -> Result<Self> {
        validate(&weights, bias, &vocabulary)?;
        Ok(Model {
            weights,
            bias,
            vocabulary,
            metadata,
        })
    }

    /// Empty model used when the bundle cannot be loaded
    pub fn degraded() -> Self {
        Model::default()
    }

    /// Validate a decoded bundle
    pub fn from_bundle(bundle: ModelBundle) -> Result<Self> {
        let weights = bundle.theta.ok_or(LoadError::MissingField("theta"))?;
        let bias = bundle.theta_0.ok_or(LoadError::MissingField("theta_0"))?;
        let vocabulary = bundle
            .dictionary
            .ok_or(LoadError::MissingField("dictionary"))?;
        let metadata = ModelMetadata {
            accuracy: bundle.accuracy,
            top_positive: bundle.top_positive,
            top_negative: bundle.top_negative,
        };
        Self::with_metadata(weights, bias, vocabulary, metadata)
    }

    /// Load and validate a bundle from disk
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(LoadError::NotFound(path.to_path_buf()));
        }

        let bytes = fs::read(path)?;
        tracing::debug!("Read {} bytes from {:?}", bytes.len(), path);

        let bundle: ModelBundle = match Encoding::detect(path, &bytes) {
            Encoding::Json => serde_json::from_slice(&bytes)?,
            Encoding::Bincode => bincode::deserialize(&bytes)?,
        };
        let model = Self::from_bundle(bundle)?;

        tracing::info!(
            vocabulary = model.vocab_size(),
            accuracy = ?model.metadata.accuracy,
            top_positive = ?model.metadata.top_positive.first(),
            "Loaded Pegasos model from {:?}",
            path
        );
        Ok(model)
    }

    /// Load the bundle, substituting the degraded model on any failure
    pub fn load_or_degraded(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match Self::load(path) {
            Ok(model) => model,
            Err(e) => {
                tracing::warn!(error = %e, "Could not load model from {:?}, running degraded", path);
                Self::degraded()
            }
        }
    }

    pub fn weights(&self) -> &[f64] {
        &self.weights
    }

    pub fn bias(&self) -> f64 {
        self.bias
    }

    pub fn metadata(&self) -> &ModelMetadata {
        &self.metadata
    }

    /// Feature index of a lowercase token
    pub fn index_of(&self, word: &str) -> Option<usize> {
        self.vocabulary.get(word).copied()
    }

    /// Learned weight of a lowercase token
    pub fn weight_of(&self, word: &str) -> Option<f64> {
        self.index_of(word).map(|idx| self.weights[idx])
    }

    pub fn vocab_size(&self) -> usize {
        self.vocabulary.len()
    }

    /// True when there is no vocabulary to score against
    pub fn is_degraded(&self) -> bool {
        self.vocabulary.is_empty()
    }
}

fn validate(weights: &[f64], bias: f64, vocabulary: &FxHashMap<String, usize>) -> Result<()> {
    if weights.len() != vocabulary.len() {
        return Err(LoadError::DimensionMismatch {
            weights: weights.len(),
            vocabulary: vocabulary.len(),
        });
    }
    if !bias.is_finite() {
        return Err(LoadError::NonFinite("theta_0"));
    }
    if weights.iter().any(|w| !w.is_finite()) {
        return Err(LoadError::NonFinite("theta"));
    }

    let mut owners: Vec<Option<&str>> = vec![None; weights.len()];
    for (word, &index) in vocabulary {
        let slot = owners.get_mut(index).ok_or_else(|| LoadError::IndexOutOfRange {
            word: word.clone(),
            index,
            len: weights.len(),
        })?;
        if let Some(first) = slot {
            return Err(LoadError::DuplicateIndex {
                first: first.to_string(),
                second: word.clone(),
                index,
            });
        }
        *slot = Some(word.as_str());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn vocab(words: &[(&str, usize)]) -> FxHashMap<String, usize> {
        words.iter().map(|&(w, i)| (w.to_string(), i)).collect()
    }

    fn bundle() -> ModelBundle {
        ModelBundle {
            theta: Some(vec![2.0, -3.0]),
            theta_0: Some(0.25),
            dictionary: Some(vocab(&[("delicious", 0), ("terrible", 1)])),
            accuracy: Some(0.808),
            top_positive: vec!["delicious".into(), "great".into(), "!".into()],
            top_negative: vec!["stale".into(), "awful".into(), "terrible".into()],
        }
    }

    #[test]
    fn test_new_model() {
        let model = Model::new(vec![1.0, -1.0], 0.5, vocab(&[("a", 0), ("b", 1)])).unwrap();
        assert_eq!(model.vocab_size(), 2);
        assert_eq!(model.weight_of("b"), Some(-1.0));
        assert_eq!(model.index_of("c"), None);
        assert!(!model.is_degraded());
    }

    #[test]
    fn test_degraded_model() {
        let model = Model::degraded();
        assert!(model.is_degraded());
        assert_eq!(model.vocab_size(), 0);
        assert!(model.weights().is_empty());
    }

    #[test]
    fn test_dimension_mismatch() {
        let err = Model::new(vec![1.0], 0.0, vocab(&[("a", 0), ("b", 1)])).unwrap_err();
        assert!(matches!(
            err,
            LoadError::DimensionMismatch {
                weights: 1,
                vocabulary: 2
            }
        ));
    }

    #[test]
    fn test_index_out_of_range() {
        let err = Model::new(vec![1.0, 2.0], 0.0, vocab(&[("a", 0), ("b", 2)])).unwrap_err();
        assert!(matches!(err, LoadError::IndexOutOfRange { index: 2, len: 2, .. }));
    }

    #[test]
    fn test_duplicate_index() {
        let err = Model::new(vec![1.0, 2.0], 0.0, vocab(&[("a", 1), ("b", 1)])).unwrap_err();
        assert!(matches!(err, LoadError::DuplicateIndex { index: 1, .. }));
    }

    #[test]
    fn test_non_finite_values() {
        let err = Model::new(vec![f64::NAN], 0.0, vocab(&[("a", 0)])).unwrap_err();
        assert!(matches!(err, LoadError::NonFinite("theta")));
        let err = Model::new(vec![1.0], f64::INFINITY, vocab(&[("a", 0)])).unwrap_err();
        assert!(matches!(err, LoadError::NonFinite("theta_0")));
    }

    #[test]
    fn test_missing_fields() {
        let mut b = bundle();
        b.theta = None;
        assert!(matches!(
            Model::from_bundle(b).unwrap_err(),
            LoadError::MissingField("theta")
        ));

        let mut b = bundle();
        b.theta_0 = None;
        assert!(matches!(
            Model::from_bundle(b).unwrap_err(),
            LoadError::MissingField("theta_0")
        ));

        let mut b = bundle();
        b.dictionary = None;
        assert!(matches!(
            Model::from_bundle(b).unwrap_err(),
            LoadError::MissingField("dictionary")
        ));
    }

    #[test]
    fn test_load_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("model.json");
        fs::write(&path, serde_json::to_vec(&bundle()).unwrap()).unwrap();

        let model = Model::load(&path).unwrap();
        assert_eq!(model.vocab_size(), 2);
        assert_eq!(model.bias(), 0.25);
        assert_eq!(model.metadata().accuracy, Some(0.808));
    }

    #[test]
    fn test_load_json_aliases() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("model.json");
        fs::write(
            &path,
            r#"{"weights": [1.5], "bias": -0.5, "vocabulary": {"great": 0}}"#,
        )
        .unwrap();

        let model = Model::load(&path).unwrap();
        assert_eq!(model.weight_of("great"), Some(1.5));
        assert_eq!(model.bias(), -0.5);
        assert_eq!(model.metadata(), &ModelMetadata::default());
    }

    #[test]
    fn test_load_bincode() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("model.bin");
        fs::write(&path, bincode::serialize(&bundle()).unwrap()).unwrap();

        let model = Model::load(&path).unwrap();
        assert_eq!(model.weight_of("terrible"), Some(-3.0));
    }

    #[test]
    fn test_load_sniffs_unknown_extension() {
        let dir = tempfile::tempdir().unwrap();

        let json_path = dir.path().join("model.pegasos");
        let mut f = fs::File::create(&json_path).unwrap();
        writeln!(f, "  {}", serde_json::to_string(&bundle()).unwrap()).unwrap();
        assert_eq!(Model::load(&json_path).unwrap().vocab_size(), 2);

        let bin_path = dir.path().join("model.dat");
        fs::write(&bin_path, bincode::serialize(&bundle()).unwrap()).unwrap();
        assert_eq!(Model::load(&bin_path).unwrap().vocab_size(), 2);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = Model::load(dir.path().join("nope.json")).unwrap_err();
        assert!(matches!(err, LoadError::NotFound(_)));
    }

    #[test]
    fn test_load_malformed() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("model.json");
        fs::write(&path, "{ not json").unwrap();
        assert!(matches!(Model::load(&path).unwrap_err(), LoadError::Json(_)));

        let path = dir.path().join("model.bin");
        fs::write(&path, [1u8, 2, 3]).unwrap();
        assert!(matches!(Model::load(&path).unwrap_err(), LoadError::Bincode(_)));
    }

    #[test]
    fn test_load_or_degraded_falls_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("model.json");
        fs::write(&path, r#"{"theta": [1.0], "theta_0": 0.0}"#).unwrap();

        let model = Model::load_or_degraded(&path);
        assert!(model.is_degraded());
    }

    #[test]
    fn test_metadata_helpers() {
        let model = Model::from_bundle(bundle()).unwrap();
        let meta = model.metadata();
        assert_eq!(meta.most_positive(3), vec!["delicious", "great", "!"]);
        assert_eq!(meta.most_negative(2), vec!["terrible", "awful"]);
        assert!(ModelMetadata::default().most_positive(3).is_empty());
    }
}
