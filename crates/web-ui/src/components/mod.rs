//! UI Components module

pub mod feedback;
pub mod forms;
pub mod layout;
pub mod loading;

// Re-export commonly used components
pub use feedback::{EmptyState, ErrorMessage, Toast};
pub use forms::{Button, Input};
pub use layout::{AppLayout, ToastStack};
pub use loading::{LoadingState, Spinner};
