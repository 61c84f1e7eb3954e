//! Shared pure logic: classification, dates, filtering, playback state

pub mod dates;
pub mod filter;
pub mod media;
pub mod playback;

pub use dates::{days_since, days_since_at, format_long_date, parse_iso_date};
pub use filter::apply_filters;
pub use media::{classify, thumbnail_for, MediaKind};
pub use playback::{PlaybackCommand, PlaybackController, PlaybackError, PlaybackState};
