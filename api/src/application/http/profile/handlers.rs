pub mod ensure_profile;
pub mod get_profile;
