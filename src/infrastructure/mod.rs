//! Infrastructure layer - File I/O and configuration

pub mod config;
pub mod text_file;

pub use config::Settings;
pub use text_file::TextFile;
