pub mod block;
pub mod course;

pub use block::ContentBlock;
pub use course::{Course, Lesson};
