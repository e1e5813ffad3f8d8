//! User entity - account identity and profile

use chrono::{DateTime, NaiveDate, Utc};

use crate::value_objects::Snowflake;

/// A registered user with profile fields
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: Snowflake,
    pub username: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub avatar: Option<String>,
    pub self_description: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Create a new User with required fields
    pub fn new(id: Snowflake, username: String, email: String) -> Self {
        let now = Utc::now();
        Self {
            id,
            username,
            email,
            first_name: String::new(),
            last_name: String::new(),
            avatar: None,
            self_description: None,
            date_of_birth: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Full display name, falling back to the username when names are unset
    pub fn display_name(&self) -> String {
        let full = format!("{} {}", self.first_name, self.last_name);
        let full = full.trim();
        if full.is_empty() {
            self.username.clone()
        } else {
            full.to_string()
        }
    }

    /// Avatar URL or default avatar URL
    pub fn avatar_url(&self) -> String {
        match &self.avatar {
            Some(reference) => format!("/avatars/{}/{}.png", self.id, reference),
            None => "/avatars/default.png".to_string(),
        }
    }
}
