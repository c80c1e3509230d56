// src/github/mod.rs
// =============================================================================
// This module lists directories of GitHub repositories.
//
// Currently implements:
// - Parsing owner/repo from a URL or shorthand (location.rs)
// - One GET against the contents API per listing (fetch.rs)
// - The listing entry type (entry.rs) and the fetch error taxonomy (error.rs)
//
// Not implemented: authentication, pagination, recursive traversal, retries.
// =============================================================================

mod entry;
mod error;
mod fetch;
mod location;

pub use entry::{EntryKind, RepoEntry};
pub use error::FetchError;
pub use fetch::ContentsClient;
pub use location::RepoLocation;
