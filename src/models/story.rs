use crate::api::dto::StoryRecord;
use time::OffsetDateTime;
use url::Url;

/// Shown in place of a hostname when a story's url doesn't parse. Stories are
/// user-submitted, so bad urls are expected data, not errors.
pub const UNKNOWN_HOST: &str = "unknown-host";

/// One story as the rest of the program sees it. Ids come from the server;
/// nothing here is generated or mutated locally after construction.
#[derive(Debug, Clone, PartialEq)]
pub struct Story {
    pub story_id: String,
    pub title: String,
    pub author: String,
    pub url: String,
    pub username: String,
    pub created_at: OffsetDateTime,
}

impl From<StoryRecord> for Story {
    fn from(rec: StoryRecord) -> Self {
        Story {
            story_id: rec.story_id,
            title: rec.title,
            author: rec.author,
            url: rec.url,
            username: rec.username,
            created_at: rec.created_at,
        }
    }
}

impl Story {
    /// Host component of the story's url, for display next to the title.
    pub fn host_name(&self) -> String {
        Url::parse(&self.url)
            .ok()
            .and_then(|u| u.host_str().map(str::to_string))
            .unwrap_or_else(|| UNKNOWN_HOST.to_string())
    }
}
