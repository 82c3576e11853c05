//! commentrc - comment delimiters for every installed language
//!
//! Editor extensions contribute languages, each with a language configuration file
//! that declares its line and block comment tokens. commentrc indexes the installed
//! extensions, loads those files lazily, and answers "how do I write a comment in
//! this language (and the languages embedded in it)?".
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (argument parsing, commands, output)
//! - `config`: Configuration file loading and parsing
//! - `core`: Manifest discovery, language registry and comment configuration resolver
//! - `utils`: Shared utility functions
//!
//! ## Example
//!
//! ```no_run
//! use commentrc::core::{CommentConfigResolver, DirectoryManifestSource, FsReader};
//!
//! # async fn example() {
//! let source = DirectoryManifestSource::new(vec!["/usr/share/code/resources/app/extensions".into()]);
//! let resolver = CommentConfigResolver::new(source, FsReader);
//! for config in resolver.get_comment_configuration("html").await {
//!     println!("{:?}", config);
//! }
//! # }
//! ```

pub mod cli;
pub mod config;
pub mod core;
pub mod utils;
