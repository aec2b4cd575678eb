pub mod body;
pub mod cache;
pub mod client;
pub mod retry;

pub use crate::domain::ports::JsonSource;
pub use crate::utils::error::Result;
pub use body::{FilePart, MultipartForm, RequestBody};
pub use cache::QueryCache;
pub use client::{ApiClient, Method, RequestOptions};
pub use retry::{Backoff, RetryPolicy};
