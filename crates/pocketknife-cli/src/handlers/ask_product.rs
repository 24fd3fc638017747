//! `ask-product` handler: natural-language product questions.

use pocketknife_core::ProductQueryTool;
use pocketknife_llm::{DefaultGeminiClient, LlmClientConfig};

use super::ask::{answer, prepare};
use crate::bootstrap::CliContext;
use crate::error::{CliError, LlmVerb};

/// Answer a question about stored products using the product query tool.
///
/// Storage is opened by the router before this runs, so an unavailable
/// database is reported ahead of a missing API key.
pub async fn execute(ctx: &CliContext, words: &[String]) -> Result<(), CliError> {
    let verb = LlmVerb::AskProduct;
    let (config, query) = prepare(verb, LlmClientConfig::from_env(), words)?;
    let client = DefaultGeminiClient::new(&config).map_err(|e| CliError::from_llm(e, verb))?;
    let tool = ProductQueryTool::new(ctx.products().clone());

    let answer = answer(verb, &client, &query, &tool).await?;
    println!("{answer}");
    Ok(())
}
