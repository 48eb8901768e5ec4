pub mod catalog_service;
pub mod job_source_service;
pub mod search_service;
