use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct AskAssistantParams {
    /// The wound-care question, free text.
    pub question: String,
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct SuggestQuestionsParams {
    /// How many questions to return (default: server-configured, max: 50).
    pub count: Option<u32>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct AskAssistantResponse {
    pub message: String,
    pub confidence: u8,
    pub urgency: String,
    pub related_topics: Vec<String>,
    pub disclaimer: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct QuestionCategoryInfo {
    pub name: String,
    pub questions: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct CategoryListResponse {
    pub categories: Vec<QuestionCategoryInfo>,
    pub total_questions: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct SuggestQuestionsResponse {
    pub questions: Vec<String>,
}
