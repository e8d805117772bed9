pub mod file_storage_repository_impl;
pub mod memory_storage_repository_impl;
pub mod render_api_repository_impl;
