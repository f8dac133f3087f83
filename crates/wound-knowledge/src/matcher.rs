/// Keyword match engine over the wound-care corpus.
///
/// Scores every entry by summing the lengths of its keywords that occur as
/// substrings of the lowercased question, then answers with the first
/// entry holding the maximum score, provided the score clears a fixed
/// threshold. Substring containment is deliberate ("pain" inside
/// "painting" counts): recall over precision.
use tracing::debug;

use crate::corpus::Corpus;
use crate::model::{AssistantReply, KnowledgeEntry, Urgency};

/// The best score must be strictly greater than this to count as a
/// confident match. A lone 3-character keyword hit falls through.
const MATCH_THRESHOLD: usize = 3;

const MATCHED_DISCLAIMER: &str = "This information is for educational purposes only. \
     Always consult your healthcare provider for medical advice.";

const FALLBACK_DISCLAIMER: &str = "This is general information only. \
     For specific medical advice, please consult your healthcare provider.";

const FALLBACK_CONFIDENCE: u8 = 65;

const FALLBACK_RELATED_TOPICS: [&str; 3] =
    ["General wound care", "Healing stages", "When to call doctor"];

const FALLBACK_MESSAGE: &str = r#"While I don't have a specific answer for that question, here are some general guidelines:

**For wound care questions:**
• Keep the wound clean and dry
• Follow your doctor's instructions
• Watch for signs of infection
• Take medications as prescribed

**I can help you with:**
• Normal healing signs
• Infection warning signs
• Bathing and activity guidelines
• Pain management
• Dressing changes
• When to contact your doctor

**Try asking about:**
• "Is my wound healing normally?"
• "Signs of infection"
• "How to clean my wound"
• "When can I shower?"

For specific medical concerns, please contact your healthcare provider."#;

/// Stateless matcher. Holds the injected corpus; safe to share across
/// threads since nothing is mutated after construction.
pub struct MatchEngine {
    corpus: Corpus,
}

impl MatchEngine {
    pub fn new(corpus: Corpus) -> Self {
        Self { corpus }
    }

    pub fn corpus(&self) -> &Corpus {
        &self.corpus
    }

    /// Answer a free-text question.
    ///
    /// Total over its input: empty or nonsense text yields the fallback
    /// reply, never an error. The fallback has the same shape as a match
    /// and differs only in content.
    pub fn respond(&self, question: &str) -> AssistantReply {
        let lowered = question.to_lowercase();

        let mut best: Option<&KnowledgeEntry> = None;
        let mut best_score = 0usize;

        for entry in self.corpus.entries() {
            let score: usize = entry
                .keywords
                .iter()
                .filter(|keyword| lowered.contains(keyword.as_str()))
                .map(|keyword| keyword.len())
                .sum();

            // Strictly greater: a tie keeps the earliest entry.
            if score > best_score {
                best_score = score;
                best = Some(entry);
            }
        }

        match best {
            Some(entry) if best_score > MATCH_THRESHOLD => {
                debug!(score = best_score, category = %entry.category, "confident match");
                AssistantReply {
                    message: entry.response.clone(),
                    confidence: entry.confidence,
                    urgency: entry.urgency,
                    related_topics: entry.related_topics.clone(),
                    disclaimer: MATCHED_DISCLAIMER.to_string(),
                }
            }
            _ => {
                debug!(score = best_score, "no confident match, using fallback");
                AssistantReply {
                    message: FALLBACK_MESSAGE.to_string(),
                    confidence: FALLBACK_CONFIDENCE,
                    urgency: Urgency::Low,
                    related_topics: FALLBACK_RELATED_TOPICS
                        .iter()
                        .map(|topic| topic.to_string())
                        .collect(),
                    disclaimer: FALLBACK_DISCLAIMER.to_string(),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::categories::CategoryIndex;

    fn engine() -> MatchEngine {
        MatchEngine::new(Corpus::builtin())
    }

    fn test_entry(keywords: &[&str], response: &str) -> KnowledgeEntry {
        KnowledgeEntry {
            keywords: keywords.iter().map(|s| s.to_string()).collect(),
            response: response.to_string(),
            confidence: 80,
            urgency: Urgency::Low,
            related_topics: vec![],
            category: "test".to_string(),
        }
    }

    fn builtin_response(category: &str) -> String {
        Corpus::builtin()
            .entries()
            .iter()
            .find(|e| e.category == category)
            .unwrap_or_else(|| panic!("no builtin entry for category '{category}'"))
            .response
            .clone()
    }

    #[test]
    fn repeated_calls_are_identical() {
        let engine = engine();
        let first = engine.respond("can I shower with stitches?");
        let second = engine.respond("can I shower with stitches?");
        assert_eq!(first, second);
    }

    #[test]
    fn matching_is_case_insensitive() {
        let engine = engine();
        let lower = engine.respond("signs of infection");
        let upper = engine.respond("SIGNS OF INFECTION");
        let mixed = engine.respond("Signs Of Infection");
        assert_eq!(lower, upper);
        assert_eq!(lower, mixed);
    }

    #[test]
    fn three_char_keyword_alone_falls_back() {
        // "hot" is a fever keyword of length 3: score 3 is not > 3.
        let reply = engine().respond("hot");
        assert_eq!(reply.confidence, FALLBACK_CONFIDENCE);
        assert_eq!(reply.urgency, Urgency::Low);
        assert_eq!(reply.disclaimer, FALLBACK_DISCLAIMER);
    }

    #[test]
    fn four_char_keyword_alone_matches() {
        // "sore" is a pain keyword of length 4: score 4 clears the threshold.
        let reply = engine().respond("sore");
        assert_eq!(reply.message, builtin_response("pain"));
        assert_eq!(reply.urgency, Urgency::Medium);
    }

    #[test]
    fn keyword_scores_accumulate_per_entry() {
        // "itchy" contains both "itch" and "itchy": the second entry's
        // summed score (9) beats the first entry's single hit (5).
        let corpus = Corpus::new(vec![
            test_entry(&["itchy"], "single"),
            test_entry(&["itch", "itchy"], "summed"),
        ]);
        let reply = MatchEngine::new(corpus).respond("itchy");
        assert_eq!(reply.message, "summed");
    }

    #[test]
    fn tie_goes_to_earliest_entry() {
        let corpus = Corpus::new(vec![
            test_entry(&["wound"], "first"),
            test_entry(&["wound"], "second"),
        ]);
        let reply = MatchEngine::new(corpus).respond("my wound");
        assert_eq!(reply.message, "first");
    }

    #[test]
    fn builtin_tie_goes_to_earliest_entry() {
        // "gauze" is a keyword of both the dressing and the supplies
        // entries; dressing is authored earlier and must win.
        let reply = engine().respond("gauze");
        assert_eq!(reply.message, builtin_response("dressing"));
    }

    #[test]
    fn keywords_match_inside_larger_words() {
        let corpus = Corpus::new(vec![test_entry(&["fast"], "fast answer")]);
        let reply = MatchEngine::new(corpus).respond("fasting");
        assert_eq!(reply.message, "fast answer");
    }

    #[test]
    fn builtin_substring_match_is_preserved() {
        // "painting" contains "pain"; substring matching means the pain
        // entry answers even though the word is unrelated.
        let reply = engine().respond("painting");
        assert_eq!(reply.message, builtin_response("pain"));
    }

    #[test]
    fn infected_wound_selects_infection_entry() {
        let reply = engine().respond("Is my wound infected?");
        assert_eq!(reply.message, builtin_response("infection"));
        assert_eq!(reply.confidence, 95);
        assert_eq!(reply.urgency, Urgency::High);
        assert!(reply.related_topics.contains(&"Antibiotics".to_string()));
        assert_eq!(reply.disclaimer, MATCHED_DISCLAIMER);
    }

    #[test]
    fn nonsense_falls_back() {
        let reply = engine().respond("asdkjhasdkjh");
        assert_eq!(reply.message, FALLBACK_MESSAGE);
        assert_eq!(reply.confidence, 65);
        assert_eq!(reply.urgency, Urgency::Low);
        assert_eq!(
            reply.related_topics,
            vec!["General wound care", "Healing stages", "When to call doctor"]
        );
        assert_eq!(reply.disclaimer, FALLBACK_DISCLAIMER);
    }

    #[test]
    fn empty_question_falls_back() {
        let reply = engine().respond("");
        assert_eq!(reply.message, FALLBACK_MESSAGE);
        assert_eq!(reply.confidence, FALLBACK_CONFIDENCE);
    }

    #[test]
    fn empty_corpus_always_falls_back() {
        let reply = MatchEngine::new(Corpus::new(vec![])).respond("infection");
        assert_eq!(reply.confidence, FALLBACK_CONFIDENCE);
    }

    #[test]
    fn every_curated_question_gets_a_reply() {
        let engine = engine();
        for question in CategoryIndex::builtin().all_questions() {
            let reply = engine.respond(question);
            assert!(!reply.message.is_empty(), "empty reply for: {question}");
            assert!(!reply.disclaimer.is_empty(), "no disclaimer for: {question}");
        }
    }
}
