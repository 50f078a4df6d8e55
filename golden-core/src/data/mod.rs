pub mod file_store;
pub mod state_repository;
pub mod storage;
