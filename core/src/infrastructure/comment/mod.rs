pub mod mappers;
pub mod repositories;

pub use repositories::comment_repository::PostgresCommentRepository;
