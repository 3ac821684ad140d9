use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::User;

/// Post entity - a short text post in the feed.
///
/// The author's display name and avatar are captured at creation time so
/// posts stay renderable after the author changes them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    pub id: Uuid,
    pub author_id: Uuid,
    pub text: String,
    pub author_name: String,
    pub author_avatar: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Post {
    /// Create a new post authored by `user`.
    pub fn new(user: &User, text: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            author_id: user.id,
            text,
            author_name: user.name.clone(),
            author_avatar: user.avatar.clone(),
            created_at: Utc::now(),
        }
    }
}
