pub mod clean;
mod command_result;
pub mod helper;
pub mod missing;

pub use command_result::*;
