//! In-memory entity store. All state lives in process memory and is lost on
//! restart; records are never deleted.
//!
//! Conversation and analysis lookups by profile go through a secondary index
//! keyed by profile id. The index records the first record created for a
//! profile and is never overwritten, so duplicate records (still possible to
//! create) are never returned by profile lookups.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::models::analysis::{AnalysisResult, CareerAnalysis};
use crate::models::conversation::{ChatMessage, Conversation, ConversationInput};
use crate::models::profile::{ProfileInput, ProfilePatch, StudentProfile};
use crate::models::user::{User, UserInput};

/// Storage contract for the four entity kinds. Injected into the orchestrator
/// as a trait object so tests can run against isolated instances.
#[async_trait]
pub trait Storage: Send + Sync {
    async fn create_user(&self, input: UserInput) -> User;
    async fn get_user(&self, id: Uuid) -> Option<User>;
    async fn get_user_by_username(&self, username: &str) -> Option<User>;

    async fn create_profile(&self, input: ProfileInput) -> StudentProfile;
    async fn get_profile(&self, id: Uuid) -> Option<StudentProfile>;
    /// Shallow merge: patch fields present overwrite, absent fields are kept.
    async fn update_profile(&self, id: Uuid, patch: ProfilePatch) -> Option<StudentProfile>;

    async fn create_conversation(&self, input: ConversationInput) -> Conversation;
    async fn get_conversation(&self, id: Uuid) -> Option<Conversation>;
    async fn conversation_by_profile(&self, profile_id: Uuid) -> Option<Conversation>;
    /// Appends messages in order to an existing conversation.
    async fn append_messages(&self, id: Uuid, messages: Vec<ChatMessage>) -> Option<Conversation>;

    async fn create_analysis(&self, profile_id: Uuid, result: AnalysisResult) -> CareerAnalysis;
    async fn analysis_by_profile(&self, profile_id: Uuid) -> Option<CareerAnalysis>;
}

/// The in-memory `Storage` implementation.
pub struct MemStorage {
    users: RwLock<HashMap<Uuid, User>>,
    profiles: RwLock<HashMap<Uuid, StudentProfile>>,
    conversations: RwLock<HashMap<Uuid, Conversation>>,
    analyses: RwLock<HashMap<Uuid, CareerAnalysis>>,
    // profile id -> first conversation/analysis created for that profile
    conversation_index: RwLock<HashMap<Uuid, Uuid>>,
    analysis_index: RwLock<HashMap<Uuid, Uuid>>,
}

impl MemStorage {
    pub fn new() -> Self {
        Self {
            users: RwLock::new(HashMap::new()),
            profiles: RwLock::new(HashMap::new()),
            conversations: RwLock::new(HashMap::new()),
            analyses: RwLock::new(HashMap::new()),
            conversation_index: RwLock::new(HashMap::new()),
            analysis_index: RwLock::new(HashMap::new()),
        }
    }
}

impl Default for MemStorage {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Storage for MemStorage {
    async fn create_user(&self, input: UserInput) -> User {
        let user = User {
            id: Uuid::new_v4(),
            username: input.username,
            password: input.password,
        };
        self.users.write().await.insert(user.id, user.clone());
        user
    }

    async fn get_user(&self, id: Uuid) -> Option<User> {
        self.users.read().await.get(&id).cloned()
    }

    async fn get_user_by_username(&self, username: &str) -> Option<User> {
        self.users
            .read()
            .await
            .values()
            .find(|u| u.username == username)
            .cloned()
    }

    async fn create_profile(&self, input: ProfileInput) -> StudentProfile {
        let profile = StudentProfile {
            id: Uuid::new_v4(),
            full_name: input.full_name,
            age: input.age,
            education_level: input.education_level,
            field_of_study: input.field_of_study,
            interests: input.interests,
            skills: input.skills,
            hobbies: input.hobbies,
            career_goals: input.career_goals,
            work_style: input.work_style,
            improvement_areas: input.improvement_areas,
            created_at: Utc::now(),
        };
        self.profiles
            .write()
            .await
            .insert(profile.id, profile.clone());
        profile
    }

    async fn get_profile(&self, id: Uuid) -> Option<StudentProfile> {
        self.profiles.read().await.get(&id).cloned()
    }

    async fn update_profile(&self, id: Uuid, patch: ProfilePatch) -> Option<StudentProfile> {
        let mut profiles = self.profiles.write().await;
        let existing = profiles.get(&id)?.clone();
        let updated = existing.merged(patch);
        profiles.insert(id, updated.clone());
        Some(updated)
    }

    async fn create_conversation(&self, input: ConversationInput) -> Conversation {
        let conversation = Conversation {
            id: Uuid::new_v4(),
            profile_id: input.profile_id,
            messages: input.messages,
            created_at: Utc::now(),
        };
        self.conversations
            .write()
            .await
            .insert(conversation.id, conversation.clone());
        if let Some(profile_id) = conversation.profile_id {
            // First conversation created for a profile wins the index slot.
            self.conversation_index
                .write()
                .await
                .entry(profile_id)
                .or_insert(conversation.id);
        }
        conversation
    }

    async fn get_conversation(&self, id: Uuid) -> Option<Conversation> {
        self.conversations.read().await.get(&id).cloned()
    }

    async fn conversation_by_profile(&self, profile_id: Uuid) -> Option<Conversation> {
        let id = *self.conversation_index.read().await.get(&profile_id)?;
        self.conversations.read().await.get(&id).cloned()
    }

    async fn append_messages(&self, id: Uuid, messages: Vec<ChatMessage>) -> Option<Conversation> {
        let mut conversations = self.conversations.write().await;
        let conversation = conversations.get_mut(&id)?;
        conversation.messages.extend(messages);
        Some(conversation.clone())
    }

    async fn create_analysis(&self, profile_id: Uuid, result: AnalysisResult) -> CareerAnalysis {
        let analysis = CareerAnalysis {
            id: Uuid::new_v4(),
            profile_id,
            strengths: result.strengths,
            career_opportunities: result.career_opportunities,
            skills_to_learn: result.skills_to_learn,
            learning_roadmap: result.learning_roadmap,
            created_at: Utc::now(),
        };
        self.analyses
            .write()
            .await
            .insert(analysis.id, analysis.clone());
        self.analysis_index
            .write()
            .await
            .entry(profile_id)
            .or_insert(analysis.id);
        analysis
    }

    async fn analysis_by_profile(&self, profile_id: Uuid) -> Option<CareerAnalysis> {
        let id = *self.analysis_index.read().await.get(&profile_id)?;
        self.analyses.read().await.get(&id).cloned()
    }
}
