//! Core resolution engine.
//!
//! ## Module Structure
//!
//! - `data`: manifests, language definitions and comment configurations
//! - `parsers`: tolerant JSON and extension manifest parsing
//! - `sources`: where manifests come from (static list or extension directories)
//! - `registry`: language id to configuration file index
//! - `reader`: raw file access
//! - `resolver`: lazy, cached comment configuration lookup

pub mod data;
pub mod parsers;
pub mod reader;
pub mod registry;
pub mod resolver;
pub mod sources;

pub use data::*;
pub use reader::{FileReader, FsReader};
pub use registry::LanguageRegistry;
pub use resolver::{CacheEntry, CommentConfigResolver};
pub use sources::{DirectoryManifestSource, ManifestSource, StaticManifestSource};
