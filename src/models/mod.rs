pub mod job;
pub mod job_source;
