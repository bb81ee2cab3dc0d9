pub mod constants;
pub mod file_utils;

pub use constants::*;
pub use file_utils::is_css;
