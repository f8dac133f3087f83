mod api;
mod config;
mod error;
mod server;

use rmcp::{ServiceExt, transport::stdio};
use tracing::info;
use tracing_subscriber::EnvFilter;

use config::Config;
use server::WoundCareServer;
use wound_knowledge::categories::CategoryIndex;
use wound_knowledge::corpus::Corpus;
use wound_knowledge::matcher::MatchEngine;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing to stderr (stdout is reserved for MCP JSON-RPC)
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();

    info!("starting wound-care-assistant MCP server");

    let config = Config::from_env()?;
    info!(
        suggested_questions = config.suggested_question_count,
        "configuration loaded"
    );

    let corpus = Corpus::builtin();
    let categories = CategoryIndex::builtin();
    info!(
        entries = corpus.len(),
        categories = categories.categories().len(),
        questions = categories.total_questions(),
        "knowledge base loaded"
    );

    let server = WoundCareServer::new(MatchEngine::new(corpus), categories, config);

    info!("MCP server ready, serving on stdio");
    let service = server.serve(stdio()).await.inspect_err(|e| {
        tracing::error!(error = %e, "MCP server error");
    })?;

    service.waiting().await?;
    info!("MCP server shut down");
    Ok(())
}
