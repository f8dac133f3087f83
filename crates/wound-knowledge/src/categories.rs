/// Hand-curated browsing index: display categories mapped to representative
/// questions. Authored independently of the corpus entries — these are
/// navigation aids, and each question is re-matched by the engine when a
/// user selects it.
use std::collections::HashSet;

use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};

/// One display category and its question list, in curated order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuestionCategory {
    pub name: String,
    pub questions: Vec<String>,
}

/// Ordered, immutable category-to-questions mapping.
#[derive(Debug, Clone)]
pub struct CategoryIndex {
    categories: Vec<QuestionCategory>,
}

impl CategoryIndex {
    /// Wrap an explicit category list, preserving its order.
    pub fn new(categories: Vec<QuestionCategory>) -> Self {
        Self { categories }
    }

    /// The compiled-in curated index.
    pub fn builtin() -> Self {
        Self::new(builtin_categories())
    }

    /// All categories in curated order.
    pub fn categories(&self) -> &[QuestionCategory] {
        &self.categories
    }

    /// Deduplicated union of every category's questions, in category order.
    /// This is the pool `sample_questions` draws from.
    pub fn all_questions(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        let mut questions = Vec::new();
        for category in &self.categories {
            for question in &category.questions {
                if seen.insert(question.as_str()) {
                    questions.push(question.as_str());
                }
            }
        }
        questions
    }

    pub fn total_questions(&self) -> usize {
        self.all_questions().len()
    }

    /// A uniformly random subset of `min(n, total)` distinct questions,
    /// drawn without replacement. Never panics; order is unspecified.
    pub fn sample_questions(&self, n: usize) -> Vec<String> {
        let pool = self.all_questions();
        let mut rng = rand::thread_rng();
        pool.choose_multiple(&mut rng, n)
            .map(|question| question.to_string())
            .collect()
    }
}

fn category(name: &str, questions: &[&str]) -> QuestionCategory {
    QuestionCategory {
        name: name.to_string(),
        questions: questions.iter().map(|q| q.to_string()).collect(),
    }
}

fn builtin_categories() -> Vec<QuestionCategory> {
    vec![
        category(
            "Basic Care",
            &[
                "How do I clean my wound?",
                "How often should I change my dressing?",
                "What supplies do I need?",
                "Can I shower with my wound?",
                "When can I take a bath?",
                "When can I swim?",
            ],
        ),
        category(
            "Symptoms & Signs",
            &[
                "Is my wound healing normally?",
                "Is this redness normal?",
                "Why is my wound itching?",
                "Is bleeding normal?",
                "Why is there discharge?",
                "Is swelling normal?",
                "Why is it numb around the wound?",
                "Is this bruising normal?",
            ],
        ),
        category(
            "Infection Concerns",
            &[
                "Signs of infection?",
                "Does my wound look infected?",
                "Do I need antibiotics?",
                "There's a bad smell",
                "I see pus coming out",
                "Red streaks near wound",
                "I have a fever",
            ],
        ),
        category(
            "Stitches & Sutures",
            &[
                "When will my stitches be removed?",
                "Can I get my stitches wet?",
                "My stitches are pulling - is that OK?",
                "What if a stitch comes out?",
                "My wound is opening up",
            ],
        ),
        category(
            "Pain Management",
            &[
                "How to manage wound pain?",
                "Can I take ibuprofen?",
                "Pain is getting worse - what do I do?",
                "Why does it hurt more at night?",
            ],
        ),
        category(
            "Activity & Lifestyle",
            &[
                "When can I exercise?",
                "When can I return to work?",
                "When can I drive?",
                "Can I lift heavy objects?",
                "How should I sleep?",
                "Can I wear tight clothes?",
            ],
        ),
        category(
            "Healing & Timeline",
            &[
                "How long until fully healed?",
                "Is my healing delayed?",
                "What are the healing stages?",
                "When will the scar fade?",
            ],
        ),
        category(
            "Nutrition & Factors",
            &[
                "What foods help healing?",
                "Should I take vitamins?",
                "Does smoking affect healing?",
                "Does diabetes affect healing?",
            ],
        ),
        category(
            "Scar Care",
            &[
                "How to minimize scarring?",
                "When to start scar treatment?",
                "Is keloid forming?",
                "Can I put cream on my scar?",
            ],
        ),
        category(
            "Emergency & Medical",
            &[
                "When should I call my doctor?",
                "Should I go to the ER?",
                "What's an emergency sign?",
                "Do I need a second opinion?",
            ],
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_index_has_ten_categories() {
        let index = CategoryIndex::builtin();
        assert_eq!(index.categories().len(), 10);
        for category in index.categories() {
            assert!(!category.name.is_empty());
            assert!(
                !category.questions.is_empty(),
                "category '{}' has no questions",
                category.name
            );
        }
    }

    #[test]
    fn question_pool_has_no_duplicates() {
        let index = CategoryIndex::builtin();
        let pool = index.all_questions();
        let unique: HashSet<&str> = pool.iter().copied().collect();
        assert_eq!(pool.len(), unique.len());
        assert!(pool.len() >= 20, "pool too small for sampling tests");
    }

    #[test]
    fn sample_returns_requested_unique_questions() {
        let index = CategoryIndex::builtin();
        let pool: HashSet<String> = index
            .all_questions()
            .iter()
            .map(|q| q.to_string())
            .collect();

        let sampled = index.sample_questions(20);
        assert_eq!(sampled.len(), 20);

        let unique: HashSet<&String> = sampled.iter().collect();
        assert_eq!(unique.len(), 20, "sample contains duplicates");

        for question in &sampled {
            assert!(pool.contains(question), "sampled unknown question: {question}");
        }
    }

    #[test]
    fn oversized_sample_returns_whole_pool() {
        let index = CategoryIndex::builtin();
        let total = index.total_questions();
        let sampled = index.sample_questions(total + 100);
        assert_eq!(sampled.len(), total);
    }

    #[test]
    fn zero_sample_is_empty() {
        assert!(CategoryIndex::builtin().sample_questions(0).is_empty());
    }

    #[test]
    fn dedup_spans_categories() {
        let index = CategoryIndex::new(vec![
            category("A", &["shared question", "only in a"]),
            category("B", &["shared question", "only in b"]),
        ]);
        assert_eq!(index.all_questions().len(), 3);
        assert_eq!(index.total_questions(), 3);
    }
}
