use serde::Serialize;
use std::fmt;
use url::form_urlencoded;

use crate::utils::error::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Delete => "DELETE",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Ordered query pairs. `None` values are never recorded.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query {
    pairs: Vec<(String, String)>,
}

impl Query {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(mut self, key: &str, value: impl ToString) -> Self {
        self.pairs.push((key.to_string(), value.to_string()));
        self
    }

    pub fn push_opt<V: ToString>(self, key: &str, value: Option<V>) -> Self {
        match value {
            Some(value) => self.push(key, value),
            None => self,
        }
    }

    /// Repeats `key` once per element.
    pub fn push_all<V: ToString>(mut self, key: &str, values: Option<&[V]>) -> Self {
        for value in values.unwrap_or_default() {
            self.pairs.push((key.to_string(), value.to_string()));
        }
        self
    }

    pub fn pairs(&self) -> &[(String, String)] {
        &self.pairs
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn encode(&self) -> String {
        form_urlencoded::Serializer::new(String::new())
            .extend_pairs(self.pairs.iter())
            .finish()
    }
}

/// Types that travel as a query string rather than a body.
pub trait QueryParams {
    fn to_query(&self) -> Query;
}

/// A fully described request, ready for a [`Transport`](crate::domain::ports::Transport).
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: HttpMethod,
    pub path: &'static str,
    pub query: Query,
    pub body: Option<serde_json::Value>,
}

impl ApiRequest {
    pub fn new(method: HttpMethod, path: &'static str) -> Self {
        Self {
            method,
            path,
            query: Query::new(),
            body: None,
        }
    }

    pub fn get(path: &'static str) -> Self {
        Self::new(HttpMethod::Get, path)
    }

    pub fn post(path: &'static str) -> Self {
        Self::new(HttpMethod::Post, path)
    }

    pub fn put(path: &'static str) -> Self {
        Self::new(HttpMethod::Put, path)
    }

    pub fn delete(path: &'static str) -> Self {
        Self::new(HttpMethod::Delete, path)
    }

    pub fn with_query(mut self, query: Query) -> Self {
        self.query = query;
        self
    }

    pub fn with_json<B: Serialize + ?Sized>(mut self, body: &B) -> Result<Self> {
        self.body = Some(serde_json::to_value(body)?);
        Ok(self)
    }

    /// Path plus encoded query string, relative to the API base URL.
    pub fn path_and_query(&self) -> String {
        if self.query.is_empty() {
            self.path.to_string()
        } else {
            format!("{}?{}", self.path, self.query.encode())
        }
    }
}

impl fmt::Display for ApiRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.method, self.path_and_query())
    }
}
