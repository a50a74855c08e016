//! Keyword baseline for comparison with the trained model
//!
//! Pure substring matching on the lowercased text. "badge" counts as "bad".

use serde::Serialize;

pub const POSITIVE_KEYWORDS: [&str; 6] = ["delicious", "great", "best", "perfect", "love", "amazing"];
pub const NEGATIVE_KEYWORDS: [&str; 5] = ["terrible", "awful", "bad", "horrible", "disappointed"];

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum KeywordLabel {
    Positive,
    Negative,
    Neutral,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct KeywordVerdict {
    pub label: KeywordLabel,
    /// positive_hits - negative_hits
    pub score: i64,
    pub positive_hits: usize,
    pub negative_hits: usize,
}

/// Counts which trigger words occur in the text
#[derive(Clone, Debug)]
pub struct KeywordBaseline {
    positive: Vec<String>,
    negative: Vec<String>,
}

impl KeywordBaseline {
    pub fn new<S: Into<String>>(
        positive: impl IntoIterator<Item = S>,
        negative: impl IntoIterator<Item = S>,
    ) -> Self {
        KeywordBaseline {
            positive: positive.into_iter().map(Into::into).collect(),
            negative: negative.into_iter().map(Into::into).collect(),
        }
    }

    /// Total number of trigger words
    pub fn keyword_count(&self) -> usize {
        self.positive.len() + self.negative.len()
    }

    /// Each trigger word found anywhere in the text counts once
    pub fn classify(&self, text: &str) -> KeywordVerdict {
        let lowered = text.to_lowercase();
        let positive_hits = count_hits(&self.positive, &lowered);
        let negative_hits = count_hits(&self.negative, &lowered);
        let score = positive_hits as i64 - negative_hits as i64;

        let label = match score {
            s if s > 0 => KeywordLabel::Positive,
            s if s < 0 => KeywordLabel::Negative,
            _ => KeywordLabel::Neutral,
        };

        KeywordVerdict {
            label,
            score,
            positive_hits,
            negative_hits,
        }
    }
}

fn count_hits(words: &[String], text: &str) -> usize {
    words.iter().filter(|w| text.contains(w.as_str())).count()
}

impl Default for KeywordBaseline {
    fn default() -> Self {
        Self::new(POSITIVE_KEYWORDS, NEGATIVE_KEYWORDS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_more_positive_wins() {
        let verdict =
            KeywordBaseline::default().classify("Great taste, best cookies, but a bad box");
        assert_eq!(verdict.positive_hits, 2);
        assert_eq!(verdict.negative_hits, 1);
        assert_eq!(verdict.score, 1);
        assert_eq!(verdict.label, KeywordLabel::Positive);
    }

    #[test]
    fn test_tie_is_neutral() {
        let baseline = KeywordBaseline::default();
        assert_eq!(
            baseline.classify("great flavor, awful texture").label,
            KeywordLabel::Neutral
        );
        let verdict = baseline.classify("nothing to say");
        assert_eq!(verdict.label, KeywordLabel::Neutral);
        assert_eq!(verdict.score, 0);
    }

    #[test]
    fn test_more_negative_wins() {
        let verdict = KeywordBaseline::default().classify("Terrible. Horrible. I love nothing.");
        assert_eq!(verdict.score, -1);
        assert_eq!(verdict.label, KeywordLabel::Negative);
    }

    #[test]
    fn test_substring_containment() {
        let baseline = KeywordBaseline::default();
        // "badge" contains "bad", "lovely" contains "love"
        let verdict = baseline.classify("LOVELY badge");
        assert_eq!(verdict.positive_hits, 1);
        assert_eq!(verdict.negative_hits, 1);
        // repeats do not add up
        let verdict = baseline.classify("great great great");
        assert_eq!(verdict.positive_hits, 1);
    }

    #[test]
    fn test_custom_lists() {
        let baseline = KeywordBaseline::new(["yum"], ["yuck", "meh"]);
        assert_eq!(baseline.keyword_count(), 3);
        assert_eq!(baseline.classify("YUM").label, KeywordLabel::Positive);
        assert_eq!(KeywordBaseline::default().keyword_count(), 11);
    }
}
