pub mod badge;

pub use badge::{CourseStatusBadge, JobStatusBadge};
