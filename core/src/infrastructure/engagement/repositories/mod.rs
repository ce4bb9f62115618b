pub mod engagement_repository;
