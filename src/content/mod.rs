pub mod loader;
pub mod repository;
