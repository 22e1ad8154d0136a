//! Service implementations
//!
//! Real implementations of all service traits for production use

pub mod clipboard;
pub mod console_view;
pub mod stream_opener;

pub use clipboard::{RealClipboardWriter, format_copy_summary};
pub use console_view::RealResultView;
pub use stream_opener::RealStreamOpener;
