pub mod aggregate;
pub mod draft;
pub mod filter;

pub use aggregate::{Course, CourseId};
pub use draft::{CourseDraft, CourseDraftField};
pub use filter::{filter_courses, CourseFilter, StatusFilter};
