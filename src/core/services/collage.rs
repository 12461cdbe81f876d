use crate::core::{ApiClient, ApiRequest, Query, QueryParams, Transport};
use crate::domain::model::collage::{
    Collage, CollageAndAssociatedData, CollageEntry, CollageSearchResult, SearchCollagesQuery,
    UserCreatedCollage, UserCreatedCollageEntry,
};
use crate::domain::model::PaginatedResults;
use crate::utils::error::Result;

pub fn get_collage_request(id: i64) -> ApiRequest {
    ApiRequest::get("/collages").with_query(Query::new().push("id", id))
}

pub fn search_collages_request(query: &SearchCollagesQuery) -> ApiRequest {
    ApiRequest::get("/search/collages").with_query(query.to_query())
}

pub fn create_collage_request(collage: &UserCreatedCollage) -> Result<ApiRequest> {
    ApiRequest::post("/collages").with_json(collage)
}

pub fn create_collage_entries_request(entries: &[UserCreatedCollageEntry]) -> Result<ApiRequest> {
    ApiRequest::post("/collages/entries").with_json(entries)
}

impl<T: Transport> ApiClient<T> {
    pub async fn get_collage(&self, id: i64) -> Result<CollageAndAssociatedData> {
        self.send(get_collage_request(id)).await
    }

    pub async fn search_collages(
        &self,
        query: &SearchCollagesQuery,
    ) -> Result<PaginatedResults<CollageSearchResult>> {
        self.send(search_collages_request(query)).await
    }

    pub async fn create_collage(&self, collage: &UserCreatedCollage) -> Result<Collage> {
        self.send(create_collage_request(collage)?).await
    }

    pub async fn create_collage_entries(
        &self,
        entries: &[UserCreatedCollageEntry],
    ) -> Result<Vec<CollageEntry>> {
        self.send(create_collage_entries_request(entries)?).await
    }
}
