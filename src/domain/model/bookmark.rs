use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bookmark {
    pub id: i64,
    pub created_at: DateTime<Utc>,
    pub bookmarked_by_id: i32,
    pub bookmarked_title_group_id: i32,
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserCreatedBookmark {
    pub title_group_id: i32,
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EditedBookmark {
    pub id: i64,
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TitleGroupBookmark {
    pub id: i64,
    pub created_at: DateTime<Utc>,
    pub user_id: i32,
    pub title_group_id: i32,
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserCreatedTitleGroupBookmark {
    pub title_group_id: i32,
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EditedTitleGroupBookmark {
    pub id: i64,
    pub description: Option<String>,
}
