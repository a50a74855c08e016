//! Text rendering of predictions and the keyword comparison

use crate::classifier::{
    predict, KeywordBaseline, KeywordLabel, KeywordVerdict, Label, Model, Prediction,
};
use crate::classifier::scorer::{PredictionResult, UNAVAILABLE_MESSAGE};
use serde::Serialize;

pub fn label_text(label: Label) -> &'static str {
    match label {
        Label::Positive => "😊 POSITIVE",
        Label::Negative => "😠 NEGATIVE",
    }
}

pub fn keyword_label_text(label: KeywordLabel) -> &'static str {
    match label {
        KeywordLabel::Positive => "😊 POSITIVE",
        KeywordLabel::Negative => "😠 NEGATIVE",
        KeywordLabel::Neutral => "🤔 NEUTRAL",
    }
}

/// "delicious(+2.00)"
fn format_token(word: &str, weight: f64) -> String {
    format!("{}({:+.2})", word, weight)
}

fn result_lines(result: &PredictionResult) -> Vec<String> {
    let mut lines = vec![
        label_text(result.label).to_string(),
        format!("Confidence: {:.0}%", result.confidence * 100.0),
        format!("Pegasos Score: {:.3}", result.raw_score),
    ];
    if !result.influential_tokens.is_empty() {
        let words: Vec<String> = result
            .influential_tokens
            .iter()
            .map(|t| format_token(&t.word, t.weight))
            .collect();
        lines.push(format!("Influential words: {}", words.join(", ")));
    }
    lines
}

pub fn render_prediction(prediction: &Prediction) -> String {
    match prediction {
        Prediction::Scored(result) => result_lines(result).join("\n"),
        Prediction::Unavailable => UNAVAILABLE_MESSAGE.to_string(),
    }
}

/// Both verdicts for one review
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Comparison {
    pub pegasos: Prediction,
    pub keywords: KeywordVerdict,
    pub vocab_size: usize,
    pub keyword_count: usize,
}

impl Comparison {
    pub fn run(text: &str, model: &Model, baseline: &KeywordBaseline) -> Self {
        Comparison {
            pegasos: predict(text, model),
            keywords: baseline.classify(text),
            vocab_size: model.vocab_size(),
            keyword_count: baseline.keyword_count(),
        }
    }

    pub fn lines(&self) -> Vec<String> {
        let mut pegasos = match &self.pegasos {
            Prediction::Scored(result) => result_lines(result),
            Prediction::Unavailable => vec![UNAVAILABLE_MESSAGE.to_string()],
        };
        pegasos[0] = format!("Pegasos: {}", pegasos[0]);

        let mut lines = pegasos;
        lines.push(String::new());
        lines.push(format!(
            "Keywords: {} (score: {})",
            keyword_label_text(self.keywords.label),
            self.keywords.score
        ));
        lines.push(String::new());
        lines.push(format!(
            "Pegasos considers {} words, not just {}",
            self.vocab_size, self.keyword_count
        ));
        lines
    }

    pub fn render(&self) -> String {
        self.lines().join("\n")
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
