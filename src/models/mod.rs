mod story;
mod story_list;
mod user;

pub use story::Story;
pub use story_list::StoryList;
pub use user::User;
