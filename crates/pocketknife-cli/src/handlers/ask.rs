//! `ask` handler: natural-language arithmetic through the LLM.

use tracing::debug;

use pocketknife_core::{LlmClientPort, LlmError, PercentageCalculatorTool, ToolSet};
use pocketknife_llm::{DefaultGeminiClient, LlmClientConfig};

use crate::error::{CliError, LlmVerb};

/// Answer a free-form question using the percentage tool.
///
/// The API key is checked before the query.
pub async fn execute(words: &[String]) -> Result<(), CliError> {
    let (config, query) = prepare(LlmVerb::Ask, LlmClientConfig::from_env(), words)?;
    let client =
        DefaultGeminiClient::new(&config).map_err(|e| CliError::from_llm(e, LlmVerb::Ask))?;

    let answer = answer(LlmVerb::Ask, &client, &query, &PercentageCalculatorTool::new()).await?;
    println!("{answer}");
    Ok(())
}

/// Words joined by single spaces, trimmed.
pub(crate) fn query_text(words: &[String]) -> String {
    words.join(" ").trim().to_string()
}

/// Check the configuration, then the query.
pub(crate) fn prepare(
    verb: LlmVerb,
    config: Result<LlmClientConfig, LlmError>,
    words: &[String],
) -> Result<(LlmClientConfig, String), CliError> {
    let config = config.map_err(|e| CliError::from_llm(e, verb))?;

    let query = query_text(words);
    if query.is_empty() {
        return Err(missing_query(verb));
    }
    Ok((config, query))
}

fn missing_query(verb: LlmVerb) -> CliError {
    match verb {
        LlmVerb::Ask => CliError::usage(
            "Missing query. Usage: pocket-knife ask \"What is 20% of 100?\"",
            [verb.fallback()],
        ),
        LlmVerb::AskProduct => CliError::usage(
            "Missing query. Usage: pocket-knife ask-product \"your question about products\"",
            [
                "Examples:",
                "  pocket-knife ask-product \"Is there a product called banana?\"",
                "  pocket-knife ask-product \"Show me products under $10\"",
                verb.fallback(),
            ],
        ),
    }
}

/// Run one question through the client with the given tools.
pub(crate) async fn answer(
    verb: LlmVerb,
    client: &dyn LlmClientPort,
    query: &str,
    tools: &dyn ToolSet,
) -> Result<String, CliError> {
    debug!(?verb, query, "Sending query to LLM");
    client
        .ask(query, tools)
        .await
        .map_err(|e| CliError::from_llm(e, verb))
}
