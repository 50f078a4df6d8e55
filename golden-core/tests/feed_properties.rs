use std::sync::Arc;

use golden_core::data::state_repository::{POSTS_KEY, SESSION_KEY};
use golden_core::{Golden, KeyValueStore, KvStateRepository, MemoryStore, Post};

type MemoryGolden = Golden<KvStateRepository<Arc<MemoryStore>>>;

fn open(store: &Arc<MemoryStore>) -> MemoryGolden {
    Golden::open(KvStateRepository::new(Arc::clone(store))).unwrap()
}

fn logged_in(store: &Arc<MemoryStore>, username: &str) -> MemoryGolden {
    let mut app = open(store);
    app.login(username).unwrap();
    app
}

fn stored_posts(store: &MemoryStore) -> Vec<Post> {
    serde_json::from_str(&store.get(POSTS_KEY).unwrap().unwrap()).unwrap()
}

#[test]
fn startup_seeds_and_persists_demo_posts() {
    let store = Arc::new(MemoryStore::new());
    let app = open(&store);

    assert!(!app.is_authenticated());
    assert_eq!(app.posts().len(), 2);
    assert_eq!(stored_posts(&store), app.posts());
}

#[test]
fn stored_feed_is_not_reseeded() {
    let store = Arc::new(MemoryStore::new());
    store.set(POSTS_KEY, "[]").unwrap();

    let app = open(&store);
    assert!(app.posts().is_empty());
}

#[test]
fn empty_username_is_a_validation_error() {
    let store = Arc::new(MemoryStore::new());
    let mut app = open(&store);

    let err = app.login("  ").unwrap_err();
    assert!(err.is_declined());
    assert!(!app.is_authenticated());
    assert!(store.get(SESSION_KEY).unwrap().is_none());
}

#[test]
fn create_post_prepends_authored_post() {
    let store = Arc::new(MemoryStore::new());
    let mut app = logged_in(&store, "alice");
    let before = app.posts().len();

    let post = app.create_post("hello", None).unwrap().unwrap();

    assert_eq!(app.posts().len(), before + 1);
    let first = &app.posts()[0];
    assert_eq!(first, &post);
    assert_eq!(first.author, "alice");
    assert_eq!(first.text, "hello");
    assert_eq!(first.likes, 0);
    assert!(first.comments.is_empty());
    assert_eq!(stored_posts(&store)[0], post);
}

#[test]
fn empty_post_leaves_feed_untouched() {
    let store = Arc::new(MemoryStore::new());
    let mut app = logged_in(&store, "alice");
    let before = app.posts().to_vec();

    assert_eq!(app.create_post("", None).unwrap(), None);
    assert_eq!(app.posts(), before.as_slice());
    assert_eq!(stored_posts(&store), before);
}

#[test]
fn mutations_are_ignored_while_logged_out() {
    let store = Arc::new(MemoryStore::new());
    let mut app = open(&store);
    let before = app.posts().to_vec();

    assert_eq!(app.create_post("hello", None).unwrap(), None);
    assert_eq!(app.toggle_like("1").unwrap(), None);
    assert_eq!(app.add_comment("1", "nice!").unwrap(), None);
    assert_eq!(app.posts(), before.as_slice());
    assert!(app.universe().is_none());
}

#[test]
fn like_count_tracks_likers_through_any_sequence() {
    let store = Arc::new(MemoryStore::new());
    let users = ["alice", "bob", "alice", "carol", "bob", "alice", "AI_Guide"];

    for (step, user) in users.iter().enumerate() {
        let mut app = logged_in(&store, user);
        let post_id = if step % 2 == 0 { "1" } else { "2" };
        app.toggle_like(post_id).unwrap().unwrap();

        for post in app.posts() {
            assert_eq!(post.likes, post.liked_by.len());
        }
    }

    for post in stored_posts(&store) {
        assert_eq!(post.likes, post.liked_by.len());
    }
}

#[test]
fn double_toggle_restores_likers() {
    let store = Arc::new(MemoryStore::new());
    let mut app = logged_in(&store, "Founder");
    let before = app.feed().get("1").unwrap().liked_by.clone();

    assert_eq!(app.toggle_like("1").unwrap(), Some(true));
    assert_eq!(app.toggle_like("1").unwrap(), Some(false));

    assert_eq!(app.feed().get("1").unwrap().liked_by, before);
    assert_eq!(stored_posts(&store)[0].liked_by, before);
}

#[test]
fn unliking_keeps_other_likers_in_order() {
    let store = Arc::new(MemoryStore::new());
    let mut app = logged_in(&store, "AI_Guide");

    assert_eq!(app.toggle_like("1").unwrap(), Some(false));
    assert_eq!(app.feed().get("1").unwrap().liked_by, vec!["Zara_Universe"]);
    assert_eq!(app.feed().get("1").unwrap().likes, 1);
}

#[test]
fn like_on_missing_post_is_ignored() {
    let store = Arc::new(MemoryStore::new());
    let mut app = logged_in(&store, "alice");
    assert_eq!(app.toggle_like("does-not-exist").unwrap(), None);
}

#[test]
fn comment_is_appended_to_one_post_only() {
    let store = Arc::new(MemoryStore::new());
    let mut app = logged_in(&store, "bob");
    app.add_comment("2", "first").unwrap().unwrap();
    let untouched = app.feed().get("1").unwrap().clone();

    let comment = app.add_comment("2", "nice!").unwrap().unwrap();

    let post = app.feed().get("2").unwrap();
    assert_eq!(post.comments.len(), 2);
    assert_eq!(post.comments.last(), Some(&comment));
    assert_eq!(comment.author, "bob");
    assert_eq!(comment.text, "nice!");
    assert_ne!(post.comments[0].id, comment.id);
    assert_eq!(app.feed().get("1").unwrap(), &untouched);
    assert_eq!(stored_posts(&store)[1].comments.len(), 2);
}

#[test]
fn blank_comment_is_ignored() {
    let store = Arc::new(MemoryStore::new());
    let mut app = logged_in(&store, "bob");
    assert_eq!(app.add_comment("1", " \t").unwrap(), None);
    assert!(app.feed().get("1").unwrap().comments.is_empty());
}

#[test]
fn logout_clears_stored_session() {
    let store = Arc::new(MemoryStore::new());
    let mut app = logged_in(&store, "alice");
    assert!(store.get(SESSION_KEY).unwrap().is_some());

    assert!(app.logout(&|_: &str| true).unwrap());
    assert!(!app.is_authenticated());
    assert!(store.get(SESSION_KEY).unwrap().is_none());

    let reopened = open(&store);
    assert!(!reopened.is_authenticated());
}

#[test]
fn cancelled_logout_keeps_session() {
    let store = Arc::new(MemoryStore::new());
    let mut app = logged_in(&store, "alice");

    let asked = std::cell::Cell::new(None);
    let declined = app
        .logout(&|prompt: &str| {
            asked.set(Some(prompt.to_string()));
            false
        })
        .unwrap();

    assert!(!declined);
    assert_eq!(asked.take().as_deref(), Some(golden_core::LOGOUT_PROMPT));
    assert_eq!(app.session().map(|s| s.username.as_str()), Some("alice"));
    assert!(open(&store).is_authenticated());
}

#[test]
fn session_survives_restart() {
    let store = Arc::new(MemoryStore::new());
    let joined_at = logged_in(&store, "alice").session().unwrap().joined_at;

    let app = open(&store);
    let session = app.session().unwrap();
    assert_eq!(session.username, "alice");
    assert_eq!(session.joined_at.timestamp_millis(), joined_at.timestamp_millis());
}
