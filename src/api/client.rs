use super::dto::{
    AuthResponse, ErrorResponse, LoginBody, LoginFields, SignupBody, SignupFields,
    StoriesResponse, StoryDraft, StoryRecord, StoryResponse, SubmitStoryBody, UserRecord,
    UserResponse,
};
use super::error::ApiError;
use anyhow::{Context, Result};
use reqwest::{Client, Method, Response};
use serde::de::DeserializeOwned;
use std::time::Duration;
use url::Url;

/// Thin wrapper over the remote story API. One method per endpoint; all
/// status-to-error mapping happens here so callers only ever see [`ApiError`].
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Client,
    base: Url,
}

impl ApiClient {
    pub fn new(base_url: &str) -> Result<Self> {
        let base = Url::parse(base_url)
            .with_context(|| format!("invalid API base url: {}", base_url))?;
        let http = Client::builder()
            .user_agent("snooze-cli/0.1")
            .gzip(true)
            .connect_timeout(Duration::from_secs(5))
            .timeout(Duration::from_secs(20))
            .build()
            .context("failed to build http client")?;
        Ok(ApiClient { http, base })
    }

    fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base.clone();
        // Base urls without a path still join cleanly this way.
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    /// `GET /stories`, unauthenticated.
    pub async fn fetch_stories(&self) -> Result<Vec<StoryRecord>, ApiError> {
        let resp = self.http.get(self.endpoint(&["stories"])).send().await?;
        let body = read_ok(resp).await?;
        let parsed: StoriesResponse = decode(&body)?;
        Ok(parsed.stories)
    }

    /// `POST /stories` with the session token in the body.
    pub async fn submit_story(
        &self,
        token: &str,
        draft: &StoryDraft,
    ) -> Result<StoryRecord, ApiError> {
        let resp = self
            .http
            .post(self.endpoint(&["stories"]))
            .json(&SubmitStoryBody { token, story: draft })
            .send()
            .await?;
        let body = read_ok(resp).await?;
        let parsed: StoryResponse = decode(&body)?;
        Ok(parsed.story)
    }

    /// `DELETE /stories/{storyId}` with the token as a query parameter.
    pub async fn delete_story(&self, token: &str, story_id: &str) -> Result<(), ApiError> {
        let resp = self
            .http
            .delete(self.endpoint(&["stories", story_id]))
            .query(&[("token", token)])
            .send()
            .await?;
        read_ok(resp).await?;
        Ok(())
    }

    /// `POST /signup`.
    pub async fn signup(
        &self,
        username: &str,
        password: &str,
        name: &str,
    ) -> Result<AuthResponse, ApiError> {
        let resp = self
            .http
            .post(self.endpoint(&["signup"]))
            .json(&SignupBody {
                user: SignupFields {
                    username,
                    password,
                    name,
                },
            })
            .send()
            .await?;
        let body = read_ok(resp).await?;
        decode(&body)
    }

    /// `POST /login`.
    pub async fn login(&self, username: &str, password: &str) -> Result<AuthResponse, ApiError> {
        let resp = self
            .http
            .post(self.endpoint(&["login"]))
            .json(&LoginBody {
                user: LoginFields { username, password },
            })
            .send()
            .await?;
        let body = read_ok(resp).await?;
        decode(&body)
    }

    /// `GET /users/{username}`, token-authenticated.
    pub async fn fetch_user(&self, token: &str, username: &str) -> Result<UserRecord, ApiError> {
        let resp = self
            .http
            .get(self.endpoint(&["users", username]))
            .query(&[("token", token)])
            .send()
            .await?;
        let body = read_ok(resp).await?;
        let parsed: UserResponse = decode(&body)?;
        Ok(parsed.user)
    }

    /// `POST|DELETE /users/{username}/favorites/{storyId}`.
    pub async fn set_favorite(
        &self,
        token: &str,
        username: &str,
        story_id: &str,
        favorite: bool,
    ) -> Result<(), ApiError> {
        let method = if favorite { Method::POST } else { Method::DELETE };
        let url = self.endpoint(&["users", username, "favorites", story_id]);
        let resp = self
            .http
            .request(method, url)
            .query(&[("token", token)])
            .send()
            .await?;
        read_ok(resp).await?;
        Ok(())
    }
}

/// Read the body of a response, turning any non-2xx status into the matching
/// [`ApiError`] using the server's error envelope when it provides one.
async fn read_ok(resp: Response) -> Result<String, ApiError> {
    let status = resp.status();
    let body = resp.text().await?;
    if status.is_success() {
        return Ok(body);
    }
    let message = match serde_json::from_str::<ErrorResponse>(&body) {
        Ok(envelope) => envelope.error.message,
        Err(_) if !body.trim().is_empty() => body.trim().to_string(),
        Err(_) => status
            .canonical_reason()
            .unwrap_or("request failed")
            .to_string(),
    };
    Err(ApiError::from_status(status, message))
}

fn decode<T: DeserializeOwned>(body: &str) -> Result<T, ApiError> {
    serde_json::from_str(body).map_err(ApiError::Decode)
}
