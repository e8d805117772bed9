pub mod keyvalue_repository;
pub mod render_api_repository;
