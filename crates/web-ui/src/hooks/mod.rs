//! Custom hooks module

pub mod use_catalog;
pub mod use_playback;
pub mod use_toast;

pub use use_catalog::*;
pub use use_playback::*;
pub use use_toast::*;
