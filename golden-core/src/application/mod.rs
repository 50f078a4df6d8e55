pub mod app;
pub mod feed_service;
pub mod session_service;
pub mod thought_service;
pub mod universe;
