pub mod repositories;

pub use repositories::engagement_repository::PostgresEngagementRepository;
