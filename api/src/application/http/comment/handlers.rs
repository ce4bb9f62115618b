pub mod create_comment;
pub mod get_comments;
