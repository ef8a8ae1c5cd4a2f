pub mod code_format;
pub mod config;
pub mod content;
pub mod logger;
pub mod post;
pub mod post_catalog;
pub mod post_list;
pub mod site_generator;
pub mod text_utils;
pub mod util;
pub mod view;
mod test_data;
