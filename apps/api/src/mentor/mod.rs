//! The career mentor — prompt construction, LLM calls, and response parsing
//! for the two AI operations: profile analysis and chat replies.

pub mod gate;
pub mod prompts;

use async_trait::async_trait;
use tracing::debug;

use crate::errors::AppError;
use crate::llm_client::LlmClient;
use crate::models::analysis::AnalysisResult;
use crate::models::profile::StudentProfile;

/// Reply used when the model returns empty content on a chat turn.
pub const CHAT_FALLBACK: &str =
    "I'm sorry, I couldn't process your request. Please try again.";

/// The two AI operations, behind a trait so the orchestrator can be tested
/// without a live LLM.
#[async_trait]
pub trait CareerAdvisor: Send + Sync {
    /// Generates a structured career analysis for one profile.
    /// Fails with `AppError::Llm` on API failure or unparseable output;
    /// callers retry by re-invoking.
    async fn analyze_profile(&self, profile: &StudentProfile) -> Result<AnalysisResult, AppError>;

    /// Answers a single chat message, personalized by the profile when one is
    /// supplied. Each call is stateless at the API: conversation history is
    /// persisted locally but never replayed to the model.
    async fn chat_reply(
        &self,
        message: &str,
        profile: Option<&StudentProfile>,
    ) -> Result<String, AppError>;
}

/// Production advisor backed by the LLM client.
pub struct LlmAdvisor {
    llm: LlmClient,
}

impl LlmAdvisor {
    pub fn new(llm: LlmClient) -> Self {
        Self { llm }
    }
}

#[async_trait]
impl CareerAdvisor for LlmAdvisor {
    async fn analyze_profile(&self, profile: &StudentProfile) -> Result<AnalysisResult, AppError> {
        let prompt = prompts::build_analysis_prompt(profile);
        debug!("Requesting career analysis for profile {}", profile.id);
        self.llm
            .call_json::<AnalysisResult>(prompts::ANALYSIS_SYSTEM, &prompt)
            .await
            .map_err(|e| AppError::Llm(format!("Profile analysis failed: {e}")))
    }

    async fn chat_reply(
        &self,
        message: &str,
        profile: Option<&StudentProfile>,
    ) -> Result<String, AppError> {
        let system = prompts::build_chat_system(profile);
        let reply = self
            .llm
            .call(&system, message)
            .await
            .map_err(|e| AppError::Llm(format!("Chat completion failed: {e}")))?;
        Ok(fallback_on_empty(reply))
    }
}

/// Substitutes the fixed fallback reply when the model returned no content.
fn fallback_on_empty(reply: Option<String>) -> String {
    reply.unwrap_or_else(|| CHAT_FALLBACK.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_model_content_yields_fixed_fallback() {
        assert_eq!(
            fallback_on_empty(None),
            "I'm sorry, I couldn't process your request. Please try again."
        );
    }

    #[test]
    fn test_nonempty_reply_is_passed_through() {
        let reply = fallback_on_empty(Some("Here are your strengths".to_string()));
        assert_eq!(reply, "Here are your strengths");
    }
}
