pub mod profile_repository;
