pub mod config;
pub mod logging;

pub mod catalog;
pub mod fetch;
pub mod manifest;
pub mod mirror;
pub mod normalize;
pub mod retry;
pub mod source_id;
pub mod store;
