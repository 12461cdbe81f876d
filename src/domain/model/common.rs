use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaginatedResults<T> {
    pub results: Vec<T>,
    pub page: u32,
    pub page_size: u32,
    pub total_items: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserLite {
    pub id: i32,
    pub username: String,
    pub warned: bool,
    pub banned: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserLiteAvatar {
    pub id: i32,
    pub username: String,
    pub avatar: Option<String>,
    pub warned: bool,
    pub banned: bool,
}
