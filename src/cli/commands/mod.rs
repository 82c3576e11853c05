mod command_result;
pub mod helper;
pub mod init;
pub mod languages;
pub mod show;

pub use command_result::*;
