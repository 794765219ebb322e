//! Course Details overlay
//!
//! Read-only card of the selected course, shown over the current screen.

mod view;

pub use view::CourseDetails;
