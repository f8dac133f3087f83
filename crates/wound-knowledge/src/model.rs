use serde::{Deserialize, Serialize};

/// Ordinal severity attached to a canned answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Urgency {
    Low,
    Medium,
    High,
    Emergency,
}

impl Urgency {
    pub fn as_str(&self) -> &'static str {
        match self {
            Urgency::Low => "low",
            Urgency::Medium => "medium",
            Urgency::High => "high",
            Urgency::Emergency => "emergency",
        }
    }
}

/// A single curated wound-care topic: trigger keywords plus a pre-authored
/// answer and its metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KnowledgeEntry {
    /// Lowercase trigger phrases in authoring order. Never empty.
    pub keywords: Vec<String>,
    /// Pre-authored answer body. Contains emphasis markers interpreted by
    /// the rendering layer; opaque to the matcher.
    pub response: String,
    /// Authored reliability estimate, 0-100.
    pub confidence: u8,
    /// Severity a reader should attach to this topic.
    pub urgency: Urgency,
    /// Short labels pointing at adjacent topics. May be empty.
    pub related_topics: Vec<String>,
    /// Grouping label for browsing. The matcher ignores it.
    pub category: String,
}

/// The reply produced for every question, matched or not. A fallback reply
/// is the same shape as a confident match; only the content differs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssistantReply {
    pub message: String,
    pub confidence: u8,
    pub urgency: Urgency,
    pub related_topics: Vec<String>,
    pub disclaimer: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn urgency_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&Urgency::Emergency).unwrap(),
            "\"emergency\""
        );
        assert_eq!(
            serde_json::from_str::<Urgency>("\"high\"").unwrap(),
            Urgency::High
        );
    }

    #[test]
    fn urgency_orders_by_severity() {
        assert!(Urgency::Low < Urgency::Medium);
        assert!(Urgency::Medium < Urgency::High);
        assert!(Urgency::High < Urgency::Emergency);
    }

    #[test]
    fn urgency_as_str_matches_serde_form() {
        for u in [
            Urgency::Low,
            Urgency::Medium,
            Urgency::High,
            Urgency::Emergency,
        ] {
            let json = serde_json::to_string(&u).unwrap();
            assert_eq!(json, format!("\"{}\"", u.as_str()));
        }
    }
}
