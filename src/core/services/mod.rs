//! Endpoint methods of [`ApiClient`](crate::core::ApiClient), grouped by API
//! area. Each module also exposes the pure request builders it uses.

pub mod bookmark;
pub mod collage;
pub mod forum;
pub mod notification;
pub mod subscription;
