use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::common::UserLite;
use super::request::{Query, QueryParams};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CollageCategory {
    Personal,
    #[serde(rename = "Staff Picks")]
    StaffPicks,
    External,
    Theme,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CollageType {
    Artist,
    Entity,
    #[serde(rename = "Title Group")]
    TitleGroup,
    #[serde(rename = "Master Group")]
    MasterGroup,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Collage {
    pub id: i64,
    pub created_at: DateTime<Utc>,
    pub created_by_id: i32,
    pub name: String,
    pub cover: Option<String>,
    pub description: String,
    pub tags: Vec<String>,
    pub category: CollageCategory,
    pub collage_type: CollageType,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserCreatedCollage {
    pub name: String,
    pub cover: Option<String>,
    pub description: String,
    pub tags: Vec<String>,
    pub category: CollageCategory,
    pub collage_type: CollageType,
}

/// Exactly one of the target ids is expected to be set, matching the
/// collage's `collage_type`. The server enforces this.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CollageEntry {
    pub id: i64,
    pub created_at: DateTime<Utc>,
    pub created_by_id: i32,
    pub collage_id: i64,
    pub artist_id: Option<i64>,
    pub entity_id: Option<i64>,
    pub title_group_id: Option<i32>,
    pub master_group_id: Option<i32>,
    pub note: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserCreatedCollageEntry {
    pub collage_id: i64,
    pub artist_id: Option<i64>,
    pub entity_id: Option<i64>,
    pub title_group_id: Option<i32>,
    pub master_group_id: Option<i32>,
    pub note: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CollageAndAssociatedData {
    pub collage: Collage,
    pub entries: Vec<CollageEntry>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CollageSearchResult {
    pub id: i64,
    pub created_at: DateTime<Utc>,
    pub created_by: UserLite,
    pub name: String,
    pub cover: Option<String>,
    pub tags: Vec<String>,
    pub category: CollageCategory,
    pub collage_type: CollageType,
    pub entries_amount: i64,
    pub last_entry_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchCollagesQuery {
    pub name: Option<String>,
    pub tags: Option<Vec<String>>,
    pub page: u32,
    pub page_size: u32,
}

impl QueryParams for SearchCollagesQuery {
    fn to_query(&self) -> Query {
        Query::new()
            .push_opt("name", self.name.as_deref())
            .push_all("tags", self.tags.as_deref())
            .push("page", self.page)
            .push("page_size", self.page_size)
    }
}
