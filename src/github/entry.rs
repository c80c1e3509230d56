// src/github/entry.rs
// =============================================================================
// The shape of one item in a GitHub directory listing.
//
// The contents API answers `GET /repos/{owner}/{repo}/contents/{path}` with a
// JSON array. Each element carries many fields (sha, size, _links, ...) but we
// only keep the four the rest of the program needs:
//
//   name          -> RepoEntry::name
//   path          -> RepoEntry::path
//   type          -> RepoEntry::kind ("file" or "dir")
//   download_url  -> RepoEntry::download_url (null for directories)
//
// Unknown fields are ignored by serde. An unknown `type` (GitHub also sends
// "symlink" and "submodule") fails deserialization of the whole listing.
// =============================================================================

use serde::{Deserialize, Serialize};

/// Whether a listing item is a file or a directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EntryKind {
    #[serde(rename = "file")]
    File,
    #[serde(rename = "dir")]
    Directory,
}

/// One item returned by the remote directory listing.
///
/// `download_url` is set for files and `None` for directories. That pairing
/// comes from the remote API and is not checked here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepoEntry {
    /// Base name, e.g. "cat.jpg"
    pub name: String,
    /// Path from the repository root, e.g. "media/cat.jpg"
    pub path: String,
    /// File or directory
    #[serde(rename = "type")]
    pub kind: EntryKind,
    /// Raw download link (files only)
    #[serde(default)]
    pub download_url: Option<String>,
}

impl RepoEntry {
    pub fn is_file(&self) -> bool {
        self.kind == EntryKind::File
    }
}
