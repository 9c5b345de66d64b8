pub use catalog::*;
#[cfg(feature = "ssr")]
pub use course_cache::*;
pub use creators::*;
pub use reviews::*;
pub use slug::*;

mod catalog;
#[cfg(feature = "ssr")]
mod course_cache;
mod creators;
mod reviews;
mod slug;
