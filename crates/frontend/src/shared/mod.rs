pub mod api_utils;
pub mod config;
pub mod list_utils;
pub mod number_format;
pub mod page_frame;
pub mod page_standard;
