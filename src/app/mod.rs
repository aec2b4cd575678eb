#[cfg(feature = "cli")]
pub mod commands;
pub mod queries;

pub use queries::{Queries, Query, QueryState};
