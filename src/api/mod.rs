// Resource methods: thin `ApiClient` wrappers, one per backend endpoint.

pub mod catalog;
pub mod content;
pub mod orders;
pub mod reviews;
