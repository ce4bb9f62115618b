pub mod repositories;

pub use repositories::health_check_repository::PostgresHealthCheckRepository;
