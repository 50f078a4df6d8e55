pub mod error;
pub mod feed;
pub mod image;
pub mod post;
pub mod session;
