//! Export helpers: inline artifact decoding and writing image bytes to
//! disk for sharing.

pub mod base64;
pub mod file;

pub use file::FileExporter;
