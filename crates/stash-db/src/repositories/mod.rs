pub mod user_storage_repository;
