pub mod format;

pub use format::{format_bytes, format_number};
