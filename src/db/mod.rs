pub use articles::*;
pub use courses::*;
pub use json_store::*;

mod articles;
mod courses;
mod json_store;
