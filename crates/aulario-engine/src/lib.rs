pub mod catalog;
pub mod io;
pub mod models;
pub mod render;
pub mod text;

// Re-export key types for easier usage
pub use catalog::filter_courses;
pub use models::{block::ContentBlock, course::*};
pub use render::{render_lesson, sections::Section, RenderedLesson};
pub use text::normalize;
