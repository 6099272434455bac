pub mod auth;
pub mod observability;
pub mod storage;
pub mod text_processing;
pub mod video;
