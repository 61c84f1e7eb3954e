//! Pages module

pub mod dashboard;
pub mod gallery;
pub mod media_detail;
pub mod not_found;

#[cfg(test)]
mod dashboard_search_test;


pub use dashboard::DashboardPage;
pub use gallery::GalleryPage;
pub use media_detail::MediaDetailPage;
pub use not_found::NotFoundPage;
