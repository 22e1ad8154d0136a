//! HTTP request handlers

pub mod status;
pub mod stream;

pub use status::{get_status, health_check};
pub use stream::generate_name_stream;
