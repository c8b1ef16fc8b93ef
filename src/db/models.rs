use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, FromRow)]
pub struct Post {
    pub id: i64,
    pub title: String,
    pub content: String,
}

/// Fields submitted by the create and edit forms.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct PostForm {
    pub title: String,
    pub content: String,
}

impl PostForm {
    /// First required field that was submitted empty, if any.
    pub fn empty_field(&self) -> Option<&'static str> {
        if self.title.is_empty() {
            Some("title")
        } else if self.content.is_empty() {
            Some("content")
        } else {
            None
        }
    }
}
