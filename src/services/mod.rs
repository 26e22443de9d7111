pub mod grading_service;
pub mod query_service;
pub mod quiz_session;
pub mod session_runner;
