mod comment_config;
mod language;
mod manifest;

pub use comment_config::*;
pub use language::*;
pub use manifest::*;
