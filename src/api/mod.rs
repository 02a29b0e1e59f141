mod client;
pub mod dto;
mod error;

pub use client::ApiClient;
pub use dto::StoryDraft;
pub use error::ApiError;
