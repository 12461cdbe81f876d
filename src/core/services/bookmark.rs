use crate::core::{ApiClient, ApiRequest, Query, Transport};
use crate::domain::model::bookmark::{
    Bookmark, EditedBookmark, EditedTitleGroupBookmark, TitleGroupBookmark, UserCreatedBookmark,
    UserCreatedTitleGroupBookmark,
};
use crate::utils::error::Result;

const BOOKMARKS: &str = "/bookmarks";
const TITLE_GROUP_BOOKMARKS: &str = "/title-group-bookmarks";

pub fn get_bookmark_request(id: i64) -> ApiRequest {
    ApiRequest::get(BOOKMARKS).with_query(Query::new().push("id", id))
}

pub fn create_bookmark_request(bookmark: &UserCreatedBookmark) -> Result<ApiRequest> {
    ApiRequest::post(BOOKMARKS).with_json(bookmark)
}

pub fn edit_bookmark_request(bookmark: &EditedBookmark) -> Result<ApiRequest> {
    ApiRequest::put(BOOKMARKS).with_json(bookmark)
}

pub fn remove_bookmark_request(id: i64) -> ApiRequest {
    ApiRequest::delete(BOOKMARKS).with_query(Query::new().push("id", id))
}

pub fn get_title_group_bookmark_request(id: i64) -> ApiRequest {
    ApiRequest::get(TITLE_GROUP_BOOKMARKS).with_query(Query::new().push("id", id))
}

pub fn create_title_group_bookmark_request(
    bookmark: &UserCreatedTitleGroupBookmark,
) -> Result<ApiRequest> {
    ApiRequest::post(TITLE_GROUP_BOOKMARKS).with_json(bookmark)
}

pub fn edit_title_group_bookmark_request(
    bookmark: &EditedTitleGroupBookmark,
) -> Result<ApiRequest> {
    ApiRequest::put(TITLE_GROUP_BOOKMARKS).with_json(bookmark)
}

pub fn remove_title_group_bookmark_request(id: i64) -> ApiRequest {
    ApiRequest::delete(TITLE_GROUP_BOOKMARKS).with_query(Query::new().push("id", id))
}

impl<T: Transport> ApiClient<T> {
    pub async fn get_bookmark(&self, id: i64) -> Result<Bookmark> {
        self.send(get_bookmark_request(id)).await
    }

    pub async fn create_bookmark(&self, bookmark: &UserCreatedBookmark) -> Result<Bookmark> {
        self.send(create_bookmark_request(bookmark)?).await
    }

    pub async fn edit_bookmark(&self, bookmark: &EditedBookmark) -> Result<Bookmark> {
        self.send(edit_bookmark_request(bookmark)?).await
    }

    pub async fn remove_bookmark(&self, id: i64) -> Result<serde_json::Value> {
        self.send(remove_bookmark_request(id)).await
    }

    pub async fn get_title_group_bookmark(&self, id: i64) -> Result<TitleGroupBookmark> {
        self.send(get_title_group_bookmark_request(id)).await
    }

    pub async fn create_title_group_bookmark(
        &self,
        bookmark: &UserCreatedTitleGroupBookmark,
    ) -> Result<TitleGroupBookmark> {
        self.send(create_title_group_bookmark_request(bookmark)?)
            .await
    }

    pub async fn edit_title_group_bookmark(
        &self,
        bookmark: &EditedTitleGroupBookmark,
    ) -> Result<TitleGroupBookmark> {
        self.send(edit_title_group_bookmark_request(bookmark)?)
            .await
    }

    pub async fn remove_title_group_bookmark(&self, id: i64) -> Result<serde_json::Value> {
        self.send(remove_title_group_bookmark_request(id)).await
    }
}
