use std::sync::Arc;

use rmcp::{
    Json, ServerHandler,
    handler::server::router::tool::ToolRouter,
    handler::server::wrapper::Parameters,
    model::*,
    tool, tool_handler, tool_router,
};
use tracing::debug;

use crate::api::{
    AskAssistantParams, AskAssistantResponse, CategoryListResponse, QuestionCategoryInfo,
    SuggestQuestionsParams, SuggestQuestionsResponse,
};
use crate::config::{Config, MAX_SUGGESTED_QUESTIONS};
use wound_knowledge::categories::CategoryIndex;
use wound_knowledge::matcher::MatchEngine;
use wound_knowledge::model::AssistantReply;

#[derive(Clone)]
pub struct WoundCareServer {
    engine: Arc<MatchEngine>,
    categories: Arc<CategoryIndex>,
    config: Config,
    tool_router: ToolRouter<WoundCareServer>,
}

impl WoundCareServer {
    pub fn new(engine: MatchEngine, categories: CategoryIndex, config: Config) -> Self {
        Self {
            engine: Arc::new(engine),
            categories: Arc::new(categories),
            config,
            tool_router: Self::tool_router(),
        }
    }
}

#[tool_router]
impl WoundCareServer {
    #[tool(
        description = "Ask a free-text question about post-surgical wound care. Returns a \
                       pre-authored answer with a confidence score and an urgency level."
    )]
    async fn ask_assistant(
        &self,
        Parameters(params): Parameters<AskAssistantParams>,
    ) -> Result<Json<AskAssistantResponse>, String> {
        let question = params.question.trim().to_string();
        if question.is_empty() {
            return Err("question must not be empty".to_string());
        }

        let reply = self.engine.respond(&question);
        debug!(confidence = reply.confidence, urgency = %reply.urgency.as_str(), "reply ready");

        Ok(Json(to_api_reply(reply)))
    }

    #[tool(description = "List the curated wound-care question categories for browsing.")]
    async fn list_question_categories(&self) -> Result<Json<CategoryListResponse>, String> {
        let categories: Vec<QuestionCategoryInfo> = self
            .categories
            .categories()
            .iter()
            .map(|c| QuestionCategoryInfo {
                name: c.name.clone(),
                questions: c.questions.clone(),
            })
            .collect();

        Ok(Json(CategoryListResponse {
            categories,
            total_questions: self.categories.total_questions(),
        }))
    }

    #[tool(
        description = "Suggest a random selection of common wound-care questions to ask next."
    )]
    async fn suggest_questions(
        &self,
        Parameters(params): Parameters<SuggestQuestionsParams>,
    ) -> Result<Json<SuggestQuestionsResponse>, String> {
        let count = params
            .count
            .map(|c| c as usize)
            .unwrap_or(self.config.suggested_question_count)
            .min(MAX_SUGGESTED_QUESTIONS);

        Ok(Json(SuggestQuestionsResponse {
            questions: self.categories.sample_questions(count),
        }))
    }
}

fn to_api_reply(reply: AssistantReply) -> AskAssistantResponse {
    AskAssistantResponse {
        message: reply.message,
        confidence: reply.confidence,
        urgency: reply.urgency.as_str().to_string(),
        related_topics: reply.related_topics,
        disclaimer: reply.disclaimer,
    }
}

#[tool_handler]
impl ServerHandler for WoundCareServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2025_06_18,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "wound-care-assistant".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                title: None,
                icons: None,
                website_url: None,
            },
            instructions: Some(
                "Post-surgical wound care assistant. Use ask_assistant for free-text wound \
                 care questions, list_question_categories to browse curated questions by \
                 topic, and suggest_questions for a random starter selection. Answers are \
                 educational, carry a confidence score and an urgency level, and are not a \
                 substitute for professional medical care."
                    .to_string(),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{to_api_reply, WoundCareServer};
    use wound_knowledge::model::{AssistantReply, Urgency};

    #[test]
    fn tools_publish_output_schemas() {
        let tools = WoundCareServer::tool_router().list_all();
        for name in [
            "ask_assistant",
            "list_question_categories",
            "suggest_questions",
        ] {
            let tool = tools
                .iter()
                .find(|t| t.name == name)
                .unwrap_or_else(|| panic!("missing tool: {name}"));
            assert!(
                tool.output_schema.is_some(),
                "tool {name} should publish output_schema"
            );
        }
    }

    #[test]
    fn api_reply_carries_lowercase_urgency() {
        let reply = AssistantReply {
            message: "m".to_string(),
            confidence: 95,
            urgency: Urgency::High,
            related_topics: vec!["Antibiotics".to_string()],
            disclaimer: "d".to_string(),
        };
        let api = to_api_reply(reply);
        assert_eq!(api.urgency, "high");
        assert_eq!(api.confidence, 95);

        let json = serde_json::to_value(&api).unwrap();
        assert_eq!(json["urgency"], "high");
        assert_eq!(json["related_topics"][0], "Antibiotics");
    }
}
