use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::common::{UserLite, UserLiteAvatar};
use super::request::{Query, QueryParams};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForumThread {
    pub id: i64,
    pub forum_sub_category_id: i32,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub created_by_id: i32,
    pub posts_amount: i64,
    pub sticky: bool,
    pub locked: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserCreatedForumThread {
    pub forum_sub_category_id: i32,
    pub name: String,
    pub first_post: UserCreatedForumPost,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForumPost {
    pub id: i64,
    pub forum_thread_id: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub created_by_id: i32,
    pub content: String,
    pub sticky: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserCreatedForumPost {
    pub content: String,
    pub forum_thread_id: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForumOverview {
    pub forum_categories: Vec<ForumCategoryHierarchy>,
    pub latest_posts_in_threads: Vec<ForumSearchResult>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForumCategoryHierarchy {
    pub id: i32,
    pub name: String,
    pub sub_categories: Vec<ForumSubCategoryHierarchy>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForumCategoryLite {
    pub id: i32,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForumSubCategoryHierarchy {
    pub id: i32,
    pub name: String,
    pub threads_amount: i64,
    pub posts_amount: i64,
    pub forbidden_classes: Vec<String>,
    pub latest_post_in_thread: Option<ForumThreadPostLite>,
    pub threads: Option<Vec<ForumThreadHierarchy>>,
    pub category: ForumCategoryLite,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForumThreadHierarchy {
    pub id: i64,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub created_by: UserLite,
    pub latest_post: ForumThreadPostLite,
    pub posts_amount: i64,
    pub sticky: bool,
    pub locked: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForumThreadPostLite {
    pub id: i64,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub created_by: UserLite,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForumThreadEnriched {
    pub id: i64,
    pub name: String,
    pub is_subscribed: bool,
    pub created_at: DateTime<Utc>,
    pub created_by_id: i32,
    pub posts_amount: i64,
    pub sticky: bool,
    pub locked: bool,
    pub forum_sub_category_name: String,
    pub forum_sub_category_id: i32,
    pub forum_category_name: String,
    pub forum_category_id: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForumPostHierarchy {
    pub id: i64,
    pub forum_thread_id: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub created_by: UserLiteAvatar,
    pub content: String,
    pub sticky: bool,
}

/// Posts of one thread, one page at a time. When `post_id` is set the
/// server picks the page containing that post and ignores `page`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GetForumThreadPostsQuery {
    pub thread_id: i64,
    pub page: Option<u32>,
    pub page_size: u32,
    pub post_id: Option<i64>,
}

impl QueryParams for GetForumThreadPostsQuery {
    fn to_query(&self) -> Query {
        Query::new()
            .push("thread_id", self.thread_id)
            .push("page_size", self.page_size)
            .push_opt("page", self.page)
            .push_opt("post_id", self.post_id)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForumSearchResult {
    pub thread_name: String,
    pub thread_id: i64,
    pub post: String,
    pub post_id: i64,
    pub post_created_at: DateTime<Utc>,
    pub post_created_by_id: i32,
    pub post_created_by_username: String,
    pub sub_category_name: String,
    pub sub_category_id: i32,
    pub category_name: String,
    pub category_id: i32,
}

/// Thread name matching is case insensitive on the server.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForumSearchQuery {
    pub thread_name: Option<String>,
    pub page: u32,
    pub page_size: u32,
}

impl QueryParams for ForumSearchQuery {
    fn to_query(&self) -> Query {
        Query::new()
            .push_opt("thread_name", self.thread_name.as_deref())
            .push("page", self.page)
            .push("page_size", self.page_size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_thread_posts_query_order() {
        let query = GetForumThreadPostsQuery {
            thread_id: 5,
            page: Some(2),
            page_size: 20,
            post_id: None,
        };
        assert_eq!(query.to_query().encode(), "thread_id=5&page_size=20&page=2");
    }

    #[test]
    fn test_overview_decodes_server_payload() {
        let payload = serde_json::json!({
            "forum_categories": [{
                "id": 1,
                "name": "Site",
                "sub_categories": [{
                    "id": 3,
                    "name": "Announcements",
                    "threads_amount": 1,
                    "posts_amount": 4,
                    "forbidden_classes": [],
                    "latest_post_in_thread": {
                        "id": 9,
                        "name": "Welcome",
                        "created_at": "2025-03-01T12:00:00+02:00",
                        "created_by": {"id": 1, "username": "staff", "warned": false, "banned": false}
                    },
                    "threads": null,
                    "category": {"id": 1, "name": "Site"}
                }]
            }],
            "latest_posts_in_threads": []
        });

        let overview: ForumOverview = serde_json::from_value(payload).unwrap();
        let sub = &overview.forum_categories[0].sub_categories[0];
        assert_eq!(sub.name, "Announcements");
        let latest = sub.latest_post_in_thread.as_ref().unwrap();
        assert_eq!(latest.created_at.to_rfc3339(), "2025-03-01T10:00:00+00:00");
        assert!(sub.threads.is_none());
    }
}
