//! Wire shapes for the story API.
//!
//! These mirror the server's JSON exactly and stay separate from the domain
//! types in `models`; a bad response fails here, at the boundary, instead of
//! leaking missing fields into the rest of the program.

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// One story as the server sends it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoryRecord {
    pub story_id: String,
    pub title: String,
    pub author: String,
    pub url: String,
    pub username: String,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

/// The signed-in user's profile as the server sends it. The server calls the
/// user's own submissions `stories`; the domain type calls them `own_stories`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRecord {
    pub username: String,
    pub name: String,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(default)]
    pub favorites: Vec<StoryRecord>,
    #[serde(default, rename = "stories")]
    pub own_stories: Vec<StoryRecord>,
}

/// The fields a user fills in before the server assigns a story id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoryDraft {
    pub title: String,
    pub author: String,
    pub url: String,
}

// Response envelopes.

#[derive(Debug, Deserialize)]
pub struct StoriesResponse {
    pub stories: Vec<StoryRecord>,
}

#[derive(Debug, Deserialize)]
pub struct StoryResponse {
    pub story: StoryRecord,
}

#[derive(Debug, Deserialize)]
pub struct UserResponse {
    pub user: UserRecord,
}

#[derive(Debug, Deserialize)]
pub struct AuthResponse {
    pub user: UserRecord,
    pub token: String,
}

/// Error envelope the server uses for non-2xx responses.
#[derive(Debug, Deserialize)]
pub struct ErrorResponse {
    pub error: ErrorBody,
}

#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    pub message: String,
}

// Request bodies.

#[derive(Debug, Serialize)]
pub struct SubmitStoryBody<'a> {
    pub token: &'a str,
    pub story: &'a StoryDraft,
}

#[derive(Debug, Serialize)]
pub struct SignupBody<'a> {
    pub user: SignupFields<'a>,
}

#[derive(Debug, Serialize)]
pub struct SignupFields<'a> {
    pub username: &'a str,
    pub password: &'a str,
    pub name: &'a str,
}

#[derive(Debug, Serialize)]
pub struct LoginBody<'a> {
    pub user: LoginFields<'a>,
}

#[derive(Debug, Serialize)]
pub struct LoginFields<'a> {
    pub username: &'a str,
    pub password: &'a str,
}
