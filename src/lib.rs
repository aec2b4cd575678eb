pub mod api;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::{Cli, Command};

pub use app::{Queries, Query, QueryState};
pub use config::ClientConfig;
pub use core::{ApiClient, Backoff, FilePart, Method, MultipartForm, QueryCache, RequestOptions, RetryPolicy};
pub use domain::model::*;
pub use domain::ports::JsonSource;
pub use utils::error::{ApiError, Result};
