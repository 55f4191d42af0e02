#![allow(dead_code)]

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Account record. Not wired into the career flow — kept at the store level
/// only, with no routes exposed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub username: String,
    pub password: String,
}

/// Insert shape for a new user. `username` must be unique; callers check via
/// `get_user_by_username` before creating.
#[derive(Debug, Clone, Deserialize)]
pub struct UserInput {
    pub username: String,
    pub password: String,
}
