pub mod page_composer;
pub mod page_context;
