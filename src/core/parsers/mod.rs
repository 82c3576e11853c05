//! File parsers for extension manifests and language configuration files.
//!
//! - `jsonc`: JSON with comments and trailing commas
//! - `manifest`: extension `package.json` manifests

pub mod jsonc;
pub mod manifest;
