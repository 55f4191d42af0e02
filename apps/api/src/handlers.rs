//! Request orchestrator — sequences store reads/writes and mentor calls per
//! endpoint. Input validation always runs before any AI call.

use axum::{
    extract::{Path, State},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::errors::AppError;
use crate::mentor::gate::AnalysisGate;
use crate::mentor::CareerAdvisor;
use crate::models::analysis::CareerAnalysis;
use crate::models::conversation::{ChatMessage, Conversation, ConversationInput};
use crate::models::profile::{ProfileInput, StudentProfile};
use crate::state::AppState;
use crate::storage::Storage;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisRequest {
    pub profile_id: Option<Uuid>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatRequest {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub profile_id: Option<Uuid>,
    #[serde(default)]
    pub conversation_id: Option<Uuid>,
}

#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub response: String,
}

/// A validated chat turn, ready for orchestration.
#[derive(Debug)]
pub struct ChatTurn {
    pub message: String,
    pub profile_id: Option<Uuid>,
    pub conversation_id: Option<Uuid>,
}

// ────────────────────────────────────────────────────────────────────────────
// Route handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/profiles
pub async fn handle_create_profile(
    State(state): State<AppState>,
    Json(input): Json<ProfileInput>,
) -> Result<Json<StudentProfile>, AppError> {
    input.validate().map_err(AppError::Validation)?;
    let profile = state.store.create_profile(input).await;
    info!("Created profile {}", profile.id);
    Ok(Json(profile))
}

/// GET /api/profiles/:id
pub async fn handle_get_profile(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<StudentProfile>, AppError> {
    let profile = state
        .store
        .get_profile(id)
        .await
        .ok_or_else(|| AppError::NotFound("Profile not found".to_string()))?;
    Ok(Json(profile))
}

/// POST /api/career-analysis
/// Idempotent ensure-analysis-exists: returns the stored analysis when one
/// exists, otherwise generates and persists one.
pub async fn handle_ensure_analysis(
    State(state): State<AppState>,
    Json(req): Json<AnalysisRequest>,
) -> Result<Json<CareerAnalysis>, AppError> {
    let profile_id = req
        .profile_id
        .ok_or_else(|| AppError::Validation("Profile ID is required".to_string()))?;
    let analysis = get_or_generate_analysis(
        state.store.as_ref(),
        state.advisor.as_ref(),
        &state.gate,
        profile_id,
    )
    .await?;
    Ok(Json(analysis))
}

/// GET /api/career-analysis/:profile_id
pub async fn handle_get_analysis(
    State(state): State<AppState>,
    Path(profile_id): Path<Uuid>,
) -> Result<Json<CareerAnalysis>, AppError> {
    let analysis = state
        .store
        .analysis_by_profile(profile_id)
        .await
        .ok_or_else(|| AppError::NotFound("Career analysis not found".to_string()))?;
    Ok(Json(analysis))
}

/// POST /api/conversations
pub async fn handle_create_conversation(
    State(state): State<AppState>,
    Json(input): Json<ConversationInput>,
) -> Result<Json<Conversation>, AppError> {
    let conversation = state.store.create_conversation(input).await;
    Ok(Json(conversation))
}

/// GET /api/conversations/profile/:profile_id
pub async fn handle_get_conversation(
    State(state): State<AppState>,
    Path(profile_id): Path<Uuid>,
) -> Result<Json<Conversation>, AppError> {
    let conversation = state
        .store
        .conversation_by_profile(profile_id)
        .await
        .ok_or_else(|| AppError::NotFound("Conversation not found".to_string()))?;
    Ok(Json(conversation))
}

/// POST /api/chat
pub async fn handle_chat(
    State(state): State<AppState>,
    Json(req): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, AppError> {
    let message = req
        .message
        .filter(|m| !m.trim().is_empty())
        .ok_or_else(|| AppError::Validation("Message is required".to_string()))?;

    let turn = ChatTurn {
        message,
        profile_id: req.profile_id,
        conversation_id: req.conversation_id,
    };
    let response = process_chat_turn(state.store.as_ref(), state.advisor.as_ref(), turn).await?;
    Ok(Json(ChatResponse { response }))
}

// ────────────────────────────────────────────────────────────────────────────
// Orchestration
// ────────────────────────────────────────────────────────────────────────────

/// Returns the stored analysis for a profile, generating and persisting one
/// if none exists. The whole check-then-generate-then-store sequence runs
/// under the profile's gate, so concurrent requests produce exactly one
/// stored analysis and one LLM call.
pub async fn get_or_generate_analysis(
    store: &dyn Storage,
    advisor: &dyn CareerAdvisor,
    gate: &AnalysisGate,
    profile_id: Uuid,
) -> Result<CareerAnalysis, AppError> {
    let profile = store
        .get_profile(profile_id)
        .await
        .ok_or_else(|| AppError::NotFound("Profile not found".to_string()))?;

    let _guard = gate.acquire(profile_id).await;

    if let Some(existing) = store.analysis_by_profile(profile_id).await {
        debug!("Returning existing analysis for profile {profile_id}");
        return Ok(existing);
    }

    info!("Generating career analysis for profile {profile_id}");
    let result = advisor.analyze_profile(&profile).await?;
    Ok(store.create_analysis(profile_id, result).await)
}

/// Processes one chat turn: resolve optional profile context, get the mentor
/// reply, and append the {user, assistant} pair to the conversation when a
/// known conversation id was supplied. A missing conversation is tolerated:
/// the reply is still returned, nothing is persisted.
pub async fn process_chat_turn(
    store: &dyn Storage,
    advisor: &dyn CareerAdvisor,
    turn: ChatTurn,
) -> Result<String, AppError> {
    let profile = match turn.profile_id {
        Some(id) => store.get_profile(id).await,
        None => None,
    };

    let reply = advisor.chat_reply(&turn.message, profile.as_ref()).await?;

    if let Some(conversation_id) = turn.conversation_id {
        let appended = store
            .append_messages(
                conversation_id,
                vec![
                    ChatMessage::user(&turn.message),
                    ChatMessage::assistant(&reply),
                ],
            )
            .await;
        if appended.is_none() {
            warn!("Conversation {conversation_id} not found; chat turn not persisted");
        }
    }

    Ok(reply)
}
