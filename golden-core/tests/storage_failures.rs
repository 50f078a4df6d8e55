use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use golden_core::data::state_repository::POSTS_KEY;
use golden_core::{
    FeedError, Golden, KeyValueStore, KvStateRepository, MemoryStore, Post, StorageError,
};

/// Memory store whose writes can be switched to fail, like a full quota.
#[derive(Default)]
struct QuotaStore {
    inner: MemoryStore,
    full: AtomicBool,
}

impl QuotaStore {
    fn fill(&self) {
        self.full.store(true, Ordering::SeqCst);
    }
}

impl KeyValueStore for QuotaStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.inner.get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        if self.full.load(Ordering::SeqCst) {
            return Err(StorageError::Backend("quota".into()));
        }
        self.inner.set(key, value)
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.inner.remove(key)
    }
}

type QuotaGolden = Golden<KvStateRepository<Arc<QuotaStore>>>;

fn full_after_login(store: &Arc<QuotaStore>) -> QuotaGolden {
    let mut app = Golden::open(KvStateRepository::new(Arc::clone(store))).unwrap();
    app.login("alice").unwrap();
    store.fill();
    app
}

fn stored_posts(store: &QuotaStore) -> Vec<Post> {
    serde_json::from_str(&store.get(POSTS_KEY).unwrap().unwrap()).unwrap()
}

#[test]
fn failed_post_save_surfaces_and_leaves_feed_untouched() {
    let store = Arc::new(QuotaStore::default());
    let mut app = full_after_login(&store);
    let before = app.posts().to_vec();

    let err = app.create_post("hello", None).unwrap_err();
    assert!(matches!(err, FeedError::Storage(_)));
    assert!(!err.is_declined());

    assert_eq!(app.posts(), before.as_slice());
    assert_eq!(stored_posts(&store), before);
}

#[test]
fn retry_after_failed_save_creates_a_single_post() {
    let store = Arc::new(QuotaStore::default());
    let mut app = full_after_login(&store);
    let before = app.posts().len();

    assert!(app.create_post("hello", None).is_err());
    store.full.store(false, Ordering::SeqCst);
    assert!(app.create_post("hello", None).unwrap().is_some());

    assert_eq!(app.posts().len(), before + 1);
    assert_eq!(stored_posts(&store).len(), before + 1);
}

#[test]
fn failed_like_and_comment_saves_are_rolled_back() {
    let store = Arc::new(QuotaStore::default());
    let mut app = full_after_login(&store);
    let before = app.posts().to_vec();

    assert!(app.toggle_like("1").is_err());
    assert!(app.add_comment("1", "nice!").is_err());

    let post = app.feed().get("1").unwrap();
    assert!(!post.is_liked_by("alice"));
    assert!(post.comments.is_empty());
    assert_eq!(app.posts(), before.as_slice());
}

#[test]
fn declined_actions_do_not_touch_storage() {
    let store = Arc::new(QuotaStore::default());
    let mut app = full_after_login(&store);

    assert_eq!(app.create_post("   ", None).unwrap(), None);
    assert_eq!(app.add_comment("missing", "hi").unwrap(), None);
}
