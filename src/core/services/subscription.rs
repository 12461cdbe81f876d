use crate::core::{ApiClient, ApiRequest, Query, Transport};
use crate::utils::error::Result;

const TITLE_GROUP_TORRENTS: &str = "/subscriptions/title-group-torrents";
const FORUM_THREAD_POSTS: &str = "/subscriptions/forum-thread-posts";

// Both verbs carry the id in the query string and send no body.
pub fn subscribe_to_title_group_torrents_request(title_group_id: i32) -> ApiRequest {
    ApiRequest::post(TITLE_GROUP_TORRENTS)
        .with_query(Query::new().push("title_group_id", title_group_id))
}

pub fn unsubscribe_to_title_group_torrents_request(title_group_id: i32) -> ApiRequest {
    ApiRequest::delete(TITLE_GROUP_TORRENTS)
        .with_query(Query::new().push("title_group_id", title_group_id))
}

pub fn subscribe_to_forum_thread_posts_request(thread_id: i64) -> ApiRequest {
    ApiRequest::post(FORUM_THREAD_POSTS).with_query(Query::new().push("thread_id", thread_id))
}

pub fn unsubscribe_to_forum_thread_posts_request(thread_id: i64) -> ApiRequest {
    ApiRequest::delete(FORUM_THREAD_POSTS).with_query(Query::new().push("thread_id", thread_id))
}

impl<T: Transport> ApiClient<T> {
    pub async fn subscribe_to_title_group_torrents(
        &self,
        title_group_id: i32,
    ) -> Result<serde_json::Value> {
        self.send(subscribe_to_title_group_torrents_request(title_group_id))
            .await
    }

    pub async fn unsubscribe_to_title_group_torrents(
        &self,
        title_group_id: i32,
    ) -> Result<serde_json::Value> {
        self.send(unsubscribe_to_title_group_torrents_request(title_group_id))
            .await
    }

    pub async fn subscribe_to_forum_thread_posts(&self, thread_id: i64) -> Result<serde_json::Value> {
        self.send(subscribe_to_forum_thread_posts_request(thread_id))
            .await
    }

    pub async fn unsubscribe_to_forum_thread_posts(
        &self,
        thread_id: i64,
    ) -> Result<serde_json::Value> {
        self.send(unsubscribe_to_forum_thread_posts_request(thread_id))
            .await
    }
}
