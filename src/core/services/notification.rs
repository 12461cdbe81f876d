use crate::core::{ApiClient, ApiRequest, Query, Transport};
use crate::domain::model::notification::NotificationForumThreadPost;
use crate::utils::error::Result;

pub fn get_notifications_forum_thread_posts_request(include_read: bool) -> ApiRequest {
    ApiRequest::get("/notifications/forum-thread-posts")
        .with_query(Query::new().push("include_read", include_read))
}

impl<T: Transport> ApiClient<T> {
    /// Notifications for new posts in subscribed threads. Read ones are
    /// skipped unless `include_read` is set.
    pub async fn get_notifications_forum_thread_posts(
        &self,
        include_read: bool,
    ) -> Result<Vec<NotificationForumThreadPost>> {
        self.send(get_notifications_forum_thread_posts_request(include_read))
            .await
    }
}
