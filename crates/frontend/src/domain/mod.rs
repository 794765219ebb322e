pub mod a001_training_course;
pub mod a002_job_posting;
