pub use article::*;
pub use course::*;
pub use creator::*;

mod article;
mod course;
mod creator;
