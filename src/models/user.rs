use super::story::Story;
use crate::api::dto::UserRecord;
use crate::api::{ApiClient, ApiError};
use time::OffsetDateTime;

/// The signed-in account. One of these exists per session and is the
/// authorization context for every mutating call.
///
/// Favorites and own stories are snapshots taken when the user was built;
/// they are independent copies and are not kept in sync with any
/// [`StoryList`](super::StoryList). Favorites hold full `Story` values with
/// id-based membership throughout.
#[derive(Debug, Clone)]
pub struct User {
    pub username: String,
    pub name: String,
    pub created_at: OffsetDateTime,
    pub favorites: Vec<Story>,
    pub own_stories: Vec<Story>,
    /// Opaque session credential, sent in place of the password.
    pub token: String,
}

impl User {
    fn from_record(rec: UserRecord, token: String) -> User {
        User {
            username: rec.username,
            name: rec.name,
            created_at: rec.created_at,
            favorites: rec.favorites.into_iter().map(Story::from).collect(),
            own_stories: rec.own_stories.into_iter().map(Story::from).collect(),
            token,
        }
    }

    /// Register a new account and sign in.
    pub async fn signup(
        api: &ApiClient,
        username: &str,
        password: &str,
        name: &str,
    ) -> Result<User, ApiError> {
        let auth = api.signup(username, password, name).await?;
        Ok(User::from_record(auth.user, auth.token))
    }

    /// Sign in with a password; the returned user carries a fresh token.
    pub async fn login(api: &ApiClient, username: &str, password: &str) -> Result<User, ApiError> {
        let auth = api.login(username, password).await?;
        Ok(User::from_record(auth.user, auth.token))
    }

    /// Re-establish a session from a previously issued token. Any failure
    /// (expired token, network trouble, unknown user) means "no session" so
    /// the caller falls back to the login prompt; this is deliberately the
    /// only operation that swallows its errors.
    pub async fn restore_session(api: &ApiClient, token: &str, username: &str) -> Option<User> {
        match api.fetch_user(token, username).await {
            Ok(rec) => Some(User::from_record(rec, token.to_string())),
            Err(err) => {
                eprintln!("session restore failed: {}", err);
                None
            }
        }
    }

    /// Mark a story as a favorite. The local collection is updated first
    /// (optimistically); if the server call then fails, the error is
    /// returned but the local insert stays, to be reconciled by the next
    /// full login. Already-favorited stories are left alone locally.
    pub async fn add_favorite(&mut self, api: &ApiClient, story: &Story) -> Result<(), ApiError> {
        if !self.is_favorite(&story.story_id) {
            self.favorites.push(story.clone());
        }
        api.set_favorite(&self.token, &self.username, &story.story_id, true)
            .await
    }

    /// Unmark a favorite. Same optimistic-update contract as
    /// [`add_favorite`](User::add_favorite).
    pub async fn remove_favorite(&mut self, api: &ApiClient, story_id: &str) -> Result<(), ApiError> {
        self.favorites.retain(|s| s.story_id != story_id);
        api.set_favorite(&self.token, &self.username, story_id, false)
            .await
    }

    pub fn is_favorite(&self, story_id: &str) -> bool {
        self.favorites.iter().any(|s| s.story_id == story_id)
    }

    /// Whether this user submitted the story (and so may delete it).
    pub fn owns(&self, story_id: &str) -> bool {
        self.own_stories.iter().any(|s| s.story_id == story_id)
    }
}
