pub mod job_source_dto;
pub mod search_dto;
