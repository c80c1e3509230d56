// src/media/mod.rs
// =============================================================================
// Turns directory listings into display-ready media items.
// =============================================================================

mod classify;

pub use classify::{classify, MediaItem, MediaSummary, MediaType};
