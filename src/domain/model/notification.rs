use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NotificationForumThreadPost {
    pub id: i64,
    pub forum_post_id: i64,
    pub forum_thread_id: i64,
    pub forum_thread_name: String,
    pub created_at: DateTime<Utc>,
    pub read_status: bool,
}
