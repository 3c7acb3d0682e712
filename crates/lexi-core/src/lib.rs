pub mod entry;
pub mod error;
pub mod preprocess;
pub mod render;
pub mod saved;
pub mod saved_view;
pub mod storage;
pub mod types;
pub mod view;
