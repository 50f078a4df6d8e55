pub mod application;
pub mod data;
pub mod domain;
pub mod infrastructure;

pub use application::app::Golden;
pub use application::session_service::{Confirm, LOGOUT_PROMPT};
pub use application::thought_service::{ThoughtGenerator, ThoughtRequest, generate_thought};
pub use application::universe::{Universe, UserStats};
pub use data::file_store::FileStore;
pub use data::state_repository::{KvStateRepository, StateRepository};
pub use data::storage::{KeyValueStore, MemoryStore, StorageError};
pub use domain::error::FeedError;
pub use domain::feed::Feed;
pub use domain::image::image_data_url;
pub use domain::post::{Comment, Post, format_relative};
pub use domain::session::Session;
pub use infrastructure::gemini::GeminiSettings;
