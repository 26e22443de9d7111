pub mod catalog_dto;
pub mod session_dto;
