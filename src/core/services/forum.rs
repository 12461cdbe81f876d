use crate::core::{ApiClient, ApiRequest, Query, QueryParams, Transport};
use crate::domain::model::forum::{
    ForumOverview, ForumPost, ForumPostHierarchy, ForumSearchQuery, ForumSearchResult,
    ForumSubCategoryHierarchy, ForumThread, ForumThreadEnriched, ForumThreadHierarchy,
    GetForumThreadPostsQuery, UserCreatedForumPost, UserCreatedForumThread,
};
use crate::domain::model::PaginatedResults;
use crate::utils::error::Result;

pub fn get_forum_request() -> ApiRequest {
    ApiRequest::get("/forum")
}

pub fn get_forum_sub_category_request(sub_category_id: i32) -> ApiRequest {
    ApiRequest::get("/forum/sub-category").with_query(Query::new().push("id", sub_category_id))
}

// Threads listing and single thread share one route; the server decides
// the shape from the id it is given.
pub fn get_forum_thread_request(id: i64) -> ApiRequest {
    ApiRequest::get("/forum/thread").with_query(Query::new().push("id", id))
}

pub fn get_forum_thread_posts_request(query: &GetForumThreadPostsQuery) -> ApiRequest {
    ApiRequest::get("/forum/thread/posts").with_query(query.to_query())
}

pub fn post_forum_post_request(post: &UserCreatedForumPost) -> Result<ApiRequest> {
    ApiRequest::post("/forum/post").with_json(post)
}

pub fn post_forum_thread_request(thread: &UserCreatedForumThread) -> Result<ApiRequest> {
    ApiRequest::post("/forum/thread").with_json(thread)
}

pub fn search_forum_request(query: &ForumSearchQuery) -> ApiRequest {
    ApiRequest::get("/search/forum").with_query(query.to_query())
}

impl<T: Transport> ApiClient<T> {
    pub async fn get_forum(&self) -> Result<ForumOverview> {
        self.send(get_forum_request()).await
    }

    pub async fn get_forum_sub_category(
        &self,
        sub_category_id: i32,
    ) -> Result<ForumSubCategoryHierarchy> {
        self.send(get_forum_sub_category_request(sub_category_id))
            .await
    }

    pub async fn get_forum_threads(&self, id: i64) -> Result<Vec<ForumThreadHierarchy>> {
        self.send(get_forum_thread_request(id)).await
    }

    pub async fn get_forum_thread(&self, thread_id: i64) -> Result<ForumThreadEnriched> {
        self.send(get_forum_thread_request(thread_id)).await
    }

    pub async fn get_forum_thread_posts(
        &self,
        query: &GetForumThreadPostsQuery,
    ) -> Result<PaginatedResults<ForumPostHierarchy>> {
        self.send(get_forum_thread_posts_request(query)).await
    }

    pub async fn post_forum_post(&self, post: &UserCreatedForumPost) -> Result<ForumPost> {
        self.send(post_forum_post_request(post)?).await
    }

    pub async fn post_forum_thread(&self, thread: &UserCreatedForumThread) -> Result<ForumThread> {
        self.send(post_forum_thread_request(thread)?).await
    }

    pub async fn search_forum(
        &self,
        query: &ForumSearchQuery,
    ) -> Result<PaginatedResults<ForumSearchResult>> {
        self.send(search_forum_request(query)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::testing::RecordingTransport;
    use crate::domain::model::HttpMethod;
    use serde_json::json;

    fn user() -> serde_json::Value {
        json!({"id": 3, "username": "mod", "warned": false, "banned": false})
    }

    #[test]
    fn test_thread_posts_request_omits_missing_page() {
        let query = GetForumThreadPostsQuery {
            thread_id: 5,
            page: None,
            page_size: 20,
            post_id: Some(3),
        };

        let request = get_forum_thread_posts_request(&query);

        assert_eq!(request.method, HttpMethod::Get);
        assert_eq!(
            request.path_and_query(),
            "/forum/thread/posts?thread_id=5&page_size=20&post_id=3"
        );
    }

    #[test]
    fn test_thread_posts_request_with_page_only() {
        let query = GetForumThreadPostsQuery {
            thread_id: 5,
            page: Some(4),
            page_size: 20,
            post_id: None,
        };

        assert_eq!(
            get_forum_thread_posts_request(&query).path_and_query(),
            "/forum/thread/posts?thread_id=5&page_size=20&page=4"
        );
    }

    #[tokio::test]
    async fn test_get_forum_has_no_parameters() {
        let body = json!({"forum_categories": [], "latest_posts_in_threads": []});
        let client = ApiClient::new(RecordingTransport::responding(body));

        let overview = client.get_forum().await.unwrap();

        let request = client.transport().only_request().await;
        assert_eq!(request.path_and_query(), "/forum");
        assert!(overview.forum_categories.is_empty());
    }

    #[tokio::test]
    async fn test_get_forum_sub_category() {
        let body = json!({
            "id": 2,
            "name": "Bugs",
            "threads_amount": 0,
            "posts_amount": 0,
            "forbidden_classes": ["newbie"],
            "latest_post_in_thread": null,
            "threads": [],
            "category": {"id": 1, "name": "Site"}
        });
        let client = ApiClient::new(RecordingTransport::responding(body));

        let sub = client.get_forum_sub_category(2).await.unwrap();

        let request = client.transport().only_request().await;
        assert_eq!(request.path_and_query(), "/forum/sub-category?id=2");
        assert_eq!(sub.forbidden_classes, vec!["newbie".to_string()]);
        assert_eq!(sub.threads, Some(vec![]));
    }

    #[tokio::test]
    async fn test_get_forum_threads_decodes_list() {
        let body = json!([{
            "id": 11,
            "name": "Rules",
            "created_at": "2025-01-01T00:00:00Z",
            "created_by": user(),
            "latest_post": {
                "id": 90,
                "name": "Rules",
                "created_at": "2025-01-02T00:00:00Z",
                "created_by": user()
            },
            "posts_amount": 3,
            "sticky": true,
            "locked": true
        }]);
        let client = ApiClient::new(RecordingTransport::responding(body));

        let threads = client.get_forum_threads(2).await.unwrap();

        let request = client.transport().only_request().await;
        assert_eq!(request.path_and_query(), "/forum/thread?id=2");
        assert_eq!(threads.len(), 1);
        assert!(threads[0].sticky);
    }

    #[tokio::test]
    async fn test_get_forum_thread_decodes_enriched() {
        let body = json!({
            "id": 11,
            "name": "Rules",
            "is_subscribed": true,
            "created_at": "2025-01-01T00:00:00Z",
            "created_by_id": 3,
            "posts_amount": 3,
            "sticky": true,
            "locked": false,
            "forum_sub_category_name": "Announcements",
            "forum_sub_category_id": 2,
            "forum_category_name": "Site",
            "forum_category_id": 1
        });
        let client = ApiClient::new(RecordingTransport::responding(body));

        let thread = client.get_forum_thread(11).await.unwrap();

        let request = client.transport().only_request().await;
        assert_eq!(request.path_and_query(), "/forum/thread?id=11");
        assert!(thread.is_subscribed);
        assert_eq!(thread.forum_category_name, "Site");
    }

    #[tokio::test]
    async fn test_post_forum_thread_nests_first_post() {
        let body = json!({
            "id": 12,
            "forum_sub_category_id": 2,
            "name": "Hello",
            "created_at": "2025-01-01T00:00:00Z",
            "created_by_id": 3,
            "posts_amount": 1,
            "sticky": false,
            "locked": false
        });
        let client = ApiClient::new(RecordingTransport::responding(body));
        let form = UserCreatedForumThread {
            forum_sub_category_id: 2,
            name: "Hello".to_string(),
            first_post: UserCreatedForumPost {
                content: "First!".to_string(),
                forum_thread_id: 0,
            },
        };

        let thread = client.post_forum_thread(&form).await.unwrap();

        let request = client.transport().only_request().await;
        assert_eq!(request.method, HttpMethod::Post);
        assert_eq!(request.path_and_query(), "/forum/thread");
        assert_eq!(request.body.unwrap()["first_post"]["content"], "First!");
        assert_eq!(thread.id, 12);
    }

    #[tokio::test]
    async fn test_post_forum_post() {
        let body = json!({
            "id": 91,
            "forum_thread_id": 11,
            "created_at": "2025-01-03T00:00:00Z",
            "updated_at": "2025-01-03T00:00:00Z",
            "created_by_id": 3,
            "content": "Noted",
            "sticky": false
        });
        let client = ApiClient::new(RecordingTransport::responding(body));
        let form = UserCreatedForumPost {
            content: "Noted".to_string(),
            forum_thread_id: 11,
        };

        let post = client.post_forum_post(&form).await.unwrap();

        let request = client.transport().only_request().await;
        assert_eq!(request.path_and_query(), "/forum/post");
        assert_eq!(
            request.body,
            Some(json!({"content": "Noted", "forum_thread_id": 11}))
        );
        assert_eq!(post.forum_thread_id, 11);
    }

    #[tokio::test]
    async fn test_search_forum_without_thread_name() {
        let body = json!({"results": [], "page": 1, "page_size": 5, "total_items": 0});
        let client = ApiClient::new(RecordingTransport::responding(body));
        let query = ForumSearchQuery {
            thread_name: None,
            page: 1,
            page_size: 5,
        };

        let results = client.search_forum(&query).await.unwrap();

        let request = client.transport().only_request().await;
        assert_eq!(request.path_and_query(), "/search/forum?page=1&page_size=5");
        assert_eq!(results.total_items, 0);
    }
}
