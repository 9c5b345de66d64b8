//! Page components for the client app

mod catalog;
mod course;
mod not_found;

pub use catalog::CatalogPage;
pub use course::CoursePage;
pub use not_found::NotFound;
