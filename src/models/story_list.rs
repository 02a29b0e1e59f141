use super::story::Story;
use super::user::User;
use crate::api::{ApiClient, ApiError, StoryDraft};

/// Every story the server knows about, in the order the server returned
/// them. Mutating operations change the local sequence only after the
/// corresponding request has succeeded, so a failed call leaves it as-is.
#[derive(Debug, Default)]
pub struct StoryList {
    pub stories: Vec<Story>,
}

impl StoryList {
    /// Fetch the full list. Unauthenticated; failures propagate.
    pub async fn fetch_all(api: &ApiClient) -> Result<StoryList, ApiError> {
        let records = api.fetch_stories().await?;
        Ok(StoryList {
            stories: records.into_iter().map(Story::from).collect(),
        })
    }

    /// Submit a draft as `user`, append the server's resulting story to the
    /// end of the list, and return it.
    pub async fn add_story(
        &mut self,
        api: &ApiClient,
        user: &User,
        draft: &StoryDraft,
    ) -> Result<Story, ApiError> {
        let record = api.submit_story(&user.token, draft).await?;
        let story = Story::from(record);
        self.stories.push(story.clone());
        Ok(story)
    }

    /// Delete `story_id` as `user`, then drop it from the local list. A
    /// server-accepted delete of an id we never held is fine locally.
    pub async fn delete_story(
        &mut self,
        api: &ApiClient,
        user: &User,
        story_id: &str,
    ) -> Result<(), ApiError> {
        api.delete_story(&user.token, story_id).await?;
        self.stories.retain(|s| s.story_id != story_id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::MockServer;
    use time::macros::datetime;

    fn test_user() -> User {
        User {
            username: "alice".into(),
            name: "Alice".into(),
            created_at: datetime!(2020-01-01 00:00:00 UTC),
            favorites: Vec::new(),
            own_stories: Vec::new(),
            token: "tok-alice".into(),
        }
    }

    fn story_json(id: &str, title: &str) -> String {
        format!(
            r#"{{"storyId":"{}","title":"{}","author":"a","url":"https://example.com/{}","username":"alice","createdAt":"2020-01-01T00:00:00Z"}}"#,
            id, title, id
        )
    }

    #[tokio::test]
    async fn fetch_all_preserves_count_and_order() {
        let body = format!(
            r#"{{"stories":[{},{},{}]}}"#,
            story_json("s1", "first"),
            story_json("s2", "second"),
            story_json("s3", "third")
        );
        let server = MockServer::start(vec![(200, body)]).await;
        let api = ApiClient::new(&server.base_url).unwrap();

        let list = StoryList::fetch_all(&api).await.unwrap();
        assert_eq!(list.stories.len(), 3);
        let ids: Vec<&str> = list.stories.iter().map(|s| s.story_id.as_str()).collect();
        assert_eq!(ids, ["s1", "s2", "s3"]);
    }

    #[tokio::test]
    async fn add_story_appends_the_server_assigned_story() {
        let body = format!(r#"{{"story":{}}}"#, story_json("srv-9", "fresh"));
        let server = MockServer::start(vec![(201, body)]).await;
        let api = ApiClient::new(&server.base_url).unwrap();
        let user = test_user();

        let mut list = StoryList::default();
        let draft = StoryDraft {
            title: "fresh".into(),
            author: "a".into(),
            url: "https://example.com/fresh".into(),
        };
        let story = list.add_story(&api, &user, &draft).await.unwrap();

        assert_eq!(story.story_id, "srv-9");
        assert_eq!(list.stories.len(), 1);
        assert_eq!(list.stories.last().unwrap().story_id, "srv-9");

        // The request carried the token and the draft, nested per the API.
        let reqs = server.requests();
        let sent: serde_json::Value = serde_json::from_str(&reqs[0].body).unwrap();
        assert_eq!(sent["token"], "tok-alice");
        assert_eq!(sent["story"]["title"], "fresh");
    }

    #[tokio::test]
    async fn add_story_failure_leaves_the_list_unchanged() {
        let server =
            MockServer::start(vec![(401, r#"{"error":{"message":"bad token"}}"#.into())]).await;
        let api = ApiClient::new(&server.base_url).unwrap();
        let user = test_user();

        let mut list = StoryList::default();
        let draft = StoryDraft {
            title: "t".into(),
            author: "a".into(),
            url: "https://example.com".into(),
        };
        let err = list.add_story(&api, &user, &draft).await.unwrap_err();
        assert!(matches!(err, ApiError::Auth(_)));
        assert!(list.stories.is_empty());
    }

    #[tokio::test]
    async fn delete_story_removes_exactly_the_target() {
        let server = MockServer::start(vec![(200, "{}".into())]).await;
        let api = ApiClient::new(&server.base_url).unwrap();
        let user = test_user();

        let mut list = StoryList::fetch_from(vec!["s1", "s2", "s3"]);
        list.delete_story(&api, &user, "s2").await.unwrap();

        assert_eq!(list.stories.len(), 2);
        assert!(list.stories.iter().all(|s| s.story_id != "s2"));
    }

    #[tokio::test]
    async fn deleting_an_unknown_id_is_locally_idempotent() {
        let server = MockServer::start(vec![(200, "{}".into())]).await;
        let api = ApiClient::new(&server.base_url).unwrap();
        let user = test_user();

        let mut list = StoryList::fetch_from(vec!["s1"]);
        list.delete_story(&api, &user, "nope").await.unwrap();
        assert_eq!(list.stories.len(), 1);
    }

    #[tokio::test]
    async fn delete_rejected_by_server_keeps_local_state() {
        let server =
            MockServer::start(vec![(403, r#"{"error":{"message":"not yours"}}"#.into())]).await;
        let api = ApiClient::new(&server.base_url).unwrap();
        let user = test_user();

        let mut list = StoryList::fetch_from(vec!["s1"]);
        let err = list.delete_story(&api, &user, "s1").await.unwrap_err();
        assert!(matches!(err, ApiError::Auth(_)));
        assert_eq!(list.stories.len(), 1);
    }

    impl StoryList {
        fn fetch_from(ids: Vec<&str>) -> StoryList {
            StoryList {
                stories: ids
                    .into_iter()
                    .map(|id| Story {
                        story_id: id.into(),
                        title: format!("title {}", id),
                        author: "a".into(),
                        url: format!("https://example.com/{}", id),
                        username: "alice".into(),
                        created_at: datetime!(2020-01-01 00:00:00 UTC),
                    })
                    .collect(),
            }
        }
    }
}
