pub mod course_status;
pub mod job_status;

pub use course_status::{course_status_label, course_status_tone, CourseStatus, StatusTone};
pub use job_status::JobStatus;
