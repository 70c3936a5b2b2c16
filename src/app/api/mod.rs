use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use uuid::Uuid;

pub mod client;

pub use client::ProfileApi;

/// User record as the backend returns it. Every field is tolerated missing;
/// the page substitutes defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct User {
    pub user_name: Option<String>,
    pub email: Option<String>,
    pub avatar: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Group {
    pub id: Option<Uuid>,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub id: Uuid,
    pub name: String,
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub start_time: Option<OffsetDateTime>,
}

#[derive(Debug, Deserialize)]
pub struct ProfileResponse {
    pub success: bool,
    pub user: Option<User>,
    #[serde(default)]
    pub groups: Vec<Group>,
    #[serde(default)]
    pub events: Vec<Event>,
}

/// Payload for the update call: the only fields the page may change.
#[derive(Debug, Serialize)]
pub struct UpdateProfileInput {
    pub user_name: String,
    pub avatar: String,
}

#[derive(Debug, Deserialize)]
pub struct UpdateProfileResponse {
    pub success: bool,
    pub data: Option<User>,
}
