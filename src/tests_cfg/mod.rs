//! Configurations for test cases and examples. Not intended for actual use.

pub mod access_token;
pub mod post;

pub use access_token::Entity as AccessToken;
pub use post::Entity as Post;
