//! Relevance classification and the caller-facing gate policy.

use crate::keywords::{
    contains_any, matching_terms, CONTEXTUAL_KEYWORDS, DOMAIN_KEYWORDS, QUESTION_PATTERNS,
    STRONG_INDICATORS,
};
use crate::types::RelevanceVerdict;
use serde::Serialize;

/// Minimum confidence for an indirect match to be accepted.
///
/// Product decision, not a derived threshold.
pub const ACCEPT_THRESHOLD: f32 = 0.7;

/// Confidence at or below which a query is hard-rejected.
pub const SOFT_REJECT_FLOOR: f32 = 0.3;

const CONFIDENCE_DIRECT: f32 = 1.0;
const CONFIDENCE_MULTIPLE: f32 = 0.85;
const CONFIDENCE_STRONG: f32 = 0.75;
const CONFIDENCE_WEAK: f32 = 0.3;
const CONFIDENCE_QUESTION: f32 = 0.2;

/// Message shown for hard rejections.
pub const HARD_REJECT_MESSAGE: &str = "Please enter honey or honey-bee related query only. \
     Your query doesn't appear to be related to honey or beekeeping.";

/// Keyword-driven relevance classifier.
#[derive(Debug, Clone)]
pub struct RelevanceClassifier {
    domain: &'static [&'static str],
    contextual: &'static [&'static str],
    strong: &'static [&'static str],
    questions: &'static [&'static str],
}

impl Default for RelevanceClassifier {
    fn default() -> Self {
        Self::new(
            DOMAIN_KEYWORDS,
            CONTEXTUAL_KEYWORDS,
            STRONG_INDICATORS,
            QUESTION_PATTERNS,
        )
    }
}

impl RelevanceClassifier {
    pub fn new(
        domain: &'static [&'static str],
        contextual: &'static [&'static str],
        strong: &'static [&'static str],
        questions: &'static [&'static str],
    ) -> Self {
        Self {
            domain,
            contextual,
            strong,
            questions,
        }
    }

    /// Classify a query.
    pub fn classify(&self, query: &str) -> RelevanceVerdict {
        let normalized = query.to_lowercase();

        if contains_any(&normalized, self.domain) {
            return verdict(
                true,
                CONFIDENCE_DIRECT,
                "Contains explicit honey-related keyword".to_string(),
            );
        }

        let matches = matching_terms(&normalized, self.contextual);
        match matches.as_slice() {
            [] => {}
            [single] if self.strong.contains(single) => {
                return verdict(
                    true,
                    CONFIDENCE_STRONG,
                    format!("Contains strong honey-related indicator: {}", single),
                );
            }
            [single] => {
                return verdict(
                    false,
                    CONFIDENCE_WEAK,
                    format!("Weak honey relation: {}", single),
                );
            }
            several => {
                let shown: Vec<&str> = several.iter().take(3).copied().collect();
                return verdict(
                    true,
                    CONFIDENCE_MULTIPLE,
                    format!("Contains multiple honey-related terms: {}", shown.join(", ")),
                );
            }
        }

        if contains_any(&normalized, self.questions) {
            return verdict(
                false,
                CONFIDENCE_QUESTION,
                "General question without honey context".to_string(),
            );
        }

        verdict(false, 0.0, "No honey-related keywords found".to_string())
    }

    /// Whether the query should be answered at all.
    pub fn is_in_scope(&self, query: &str) -> bool {
        if contains_any(&query.to_lowercase(), self.domain) {
            return true;
        }
        let verdict = self.classify(query);
        verdict.is_related && verdict.confidence >= ACCEPT_THRESHOLD
    }

    /// Classify and apply the gate policy in one step.
    pub fn gate(&self, query: &str) -> GateDecision {
        let in_scope = self.is_in_scope(query);
        GateDecision::from_verdict(self.classify(query), in_scope)
    }
}

fn verdict(is_related: bool, confidence: f32, reason: String) -> RelevanceVerdict {
    RelevanceVerdict {
        is_related,
        confidence,
        reason,
    }
}

/// What the caller should do with a query.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "decision", rename_all = "camelCase")]
pub enum GateDecision {
    Accept {
        verdict: RelevanceVerdict,
    },
    /// Partial match: tell the user why and ask them to rephrase
    SoftReject {
        verdict: RelevanceVerdict,
        message: String,
    },
    HardReject {
        verdict: RelevanceVerdict,
        message: String,
    },
}

impl GateDecision {
    /// Apply the gate policy to a verdict.
    pub fn from_verdict(verdict: RelevanceVerdict, in_scope: bool) -> Self {
        if in_scope {
            return GateDecision::Accept { verdict };
        }

        if verdict.confidence > SOFT_REJECT_FLOOR {
            let message = format!(
                "Your query might be related to honey ({}% confidence: {}), but it's not clear enough. \
                 Please include honey-related keywords or rephrase your question about honey/beekeeping.",
                (verdict.confidence * 100.0).round() as u32,
                verdict.reason
            );
            GateDecision::SoftReject { verdict, message }
        } else {
            GateDecision::HardReject {
                verdict,
                message: HARD_REJECT_MESSAGE.to_string(),
            }
        }
    }

    pub fn is_accepted(&self) -> bool {
        matches!(self, GateDecision::Accept { .. })
    }

    pub fn verdict(&self) -> &RelevanceVerdict {
        match self {
            GateDecision::Accept { verdict }
            | GateDecision::SoftReject { verdict, .. }
            | GateDecision::HardReject { verdict, .. } => verdict,
        }
    }

    /// Rejection message, if any.
    pub fn message(&self) -> Option<&str> {
        match self {
            GateDecision::Accept { .. } => None,
            GateDecision::SoftReject { message, .. } | GateDecision::HardReject { message, .. } => {
                Some(message)
            }
        }
    }
}
