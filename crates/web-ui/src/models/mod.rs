//! Data models for the Laala web UI

pub mod catalog;
pub mod content;
pub mod error;

pub use catalog::*;
pub use content::*;
pub use error::*;
