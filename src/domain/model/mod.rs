pub mod bookmark;
pub mod collage;
pub mod common;
pub mod forum;
pub mod notification;
pub mod request;

pub use common::{PaginatedResults, UserLite, UserLiteAvatar};
pub use request::{ApiRequest, HttpMethod, Query, QueryParams};
