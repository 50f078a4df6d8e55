use gloo_storage::{LocalStorage, Storage};
use golden_core::{KeyValueStore, StorageError};
use wasm_bindgen::JsValue;

/// `window.localStorage`, holding values as raw JSON text.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorageStore;

fn backend_error(err: JsValue) -> StorageError {
    StorageError::Backend(format!("{:?}", err))
}

impl KeyValueStore for LocalStorageStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        LocalStorage::raw().get_item(key).map_err(backend_error)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        LocalStorage::raw().set_item(key, value).map_err(backend_error)
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        LocalStorage::raw().remove_item(key).map_err(backend_error)
    }
}
