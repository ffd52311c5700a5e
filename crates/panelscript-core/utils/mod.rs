//! Utility functions and shared types for panelscript-core
//!
//! Contains common functionality used across the markdown, structure, diff,
//! and analysis modules: unified error types, hashing helpers, text input
//! hygiene, and synthetic script generators for tests and benchmarks.

pub mod errors;
pub mod generators;
pub mod hashers;
pub mod text;

pub use errors::CoreError;
pub use generators::ScriptGenerator;
pub use hashers::{create_hash_map, create_hash_map_with_capacity};
pub use text::{normalize_line_endings, strip_bom};

#[cfg(feature = "analysis")]
pub use generators::generate_page_stats;
