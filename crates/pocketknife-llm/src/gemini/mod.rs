//! Gemini tool-calling client.

pub(crate) mod types;

use async_trait::async_trait;
use tracing::{debug, info};

use pocketknife_core::{LlmClientPort, LlmError, ToolSet};

use crate::config::LlmClientConfig;
use crate::http::{HttpBackend, ReqwestBackend};
use types::{
    Content, FunctionDeclaration, GenerateContentRequest, GenerateContentResponse, Part,
    ROLE_MODEL, ROLE_USER, Tool,
};

/// Default Gemini client using the reqwest HTTP backend.
pub type DefaultGeminiClient = GeminiClient<ReqwestBackend>;

/// Client for the Gemini `generateContent` API.
///
/// Generic over the HTTP backend; use [`DefaultGeminiClient`] in
/// production code.
pub struct GeminiClient<B: HttpBackend> {
    backend: B,
    max_tool_rounds: u8,
}

impl DefaultGeminiClient {
    /// Create a client with the given configuration.
    ///
    /// # Errors
    ///
    /// Fails only if the underlying HTTP client cannot be built.
    pub fn new(config: &LlmClientConfig) -> Result<Self, LlmError> {
        info!(model = %config.model, "Creating Gemini client");
        Ok(Self {
            backend: ReqwestBackend::new(config)?,
            max_tool_rounds: config.max_tool_rounds,
        })
    }
}

impl<B: HttpBackend> GeminiClient<B> {
    /// Create a client with a custom backend.
    #[cfg(test)]
    pub(crate) const fn with_backend(backend: B, max_tool_rounds: u8) -> Self {
        Self {
            backend,
            max_tool_rounds,
        }
    }

    async fn run_conversation(&self, query: &str, tools: &dyn ToolSet) -> Result<String, LlmError> {
        let declarations: Vec<FunctionDeclaration> =
            tools.definitions().iter().map(FunctionDeclaration::from).collect();
        let tools_payload = if declarations.is_empty() {
            Vec::new()
        } else {
            vec![Tool {
                function_declarations: declarations,
            }]
        };

        let mut contents = vec![Content::user_text(query)];

        for round in 0..=self.max_tool_rounds {
            let request = GenerateContentRequest {
                contents: contents.clone(),
                tools: tools_payload.clone(),
            };
            let reply = first_candidate(self.backend.generate(&request).await?)?;

            let calls: Vec<_> = reply.function_calls().cloned().collect();
            if calls.is_empty() {
                let answer = reply.text().trim().to_string();
                if answer.is_empty() {
                    return Err(LlmError::InvalidResponse(
                        "model returned an empty answer".to_string(),
                    ));
                }
                return Ok(answer);
            }

            if round == self.max_tool_rounds {
                break;
            }

            let mut responses = Vec::with_capacity(calls.len());
            for call in &calls {
                debug!(round, function = %call.name, args = %call.args, "Executing tool call");
                let output = tools.call(&call.name, &call.args).await;
                debug!(function = %call.name, %output, "Tool call finished");
                responses.push(Part::function_response(&call.name, output));
            }

            contents.push(Content {
                role: Some(ROLE_MODEL.to_string()),
                parts: reply.parts,
            });
            contents.push(Content {
                role: Some(ROLE_USER.to_string()),
                parts: responses,
            });
        }

        Err(LlmError::InvalidResponse(format!(
            "model kept requesting tools after {} rounds",
            self.max_tool_rounds
        )))
    }
}

#[async_trait]
impl<B: HttpBackend> LlmClientPort for GeminiClient<B> {
    async fn ask(&self, query: &str, tools: &dyn ToolSet) -> Result<String, LlmError> {
        self.run_conversation(query, tools).await
    }
}

/// Extract the first candidate's content, surfacing blocked prompts.
fn first_candidate(response: GenerateContentResponse) -> Result<Content, LlmError> {
    if let Some(reason) = response
        .prompt_feedback
        .and_then(|feedback| feedback.block_reason)
    {
        return Err(LlmError::InvalidResponse(format!(
            "prompt was blocked ({reason})"
        )));
    }

    let candidate = response
        .candidates
        .into_iter()
        .next()
        .ok_or_else(|| LlmError::InvalidResponse("response has no candidates".to_string()))?;

    candidate.content.ok_or_else(|| {
        LlmError::InvalidResponse(format!(
            "candidate has no content (finish reason: {})",
            candidate.finish_reason.as_deref().unwrap_or("unknown")
        ))
    })
}
