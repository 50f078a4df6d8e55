use crate::client::{GeminiClientWeb, settings};
use crate::{WebGolden, initial};
use chrono::Utc;
use dioxus::prelude::*;
use golden_core::{Post, format_relative, generate_thought, image_data_url};
use tracing::error;

#[component]
pub fn Feed() -> Element {
    let app = use_context::<Signal<WebGolden>>();

    let username = app
        .read()
        .session()
        .map(|s| s.username.clone())
        .unwrap_or_default();
    let posts = app.read().posts().to_vec();

    rsx! {
        div { class: "feed",
            div { class: "banner",
                "✨ Welcome @{username} | Share your brilliance with the world | Explore the Golden Universe Search feature! ✨"
            }

            Composer {}

            for post in posts {
                PostCard { key: "{post.id}", post }
            }
        }
    }
}

#[component]
fn Composer() -> Element {
    let mut app = use_context::<Signal<WebGolden>>();

    let mut text = use_signal(String::new);
    let mut image = use_signal(String::new);
    let generating = use_signal(|| false);

    let on_submit = move |_| {
        let body = text.read().clone();
        let attached = Some(image.read().clone()).filter(|i| !i.is_empty());
        let result = app.write().create_post(body, attached);
        match result {
            Ok(Some(_)) => {
                text.set(String::new());
                image.set(String::new());
            }
            Ok(None) => {}
            Err(e) => error!("failed to create post: {}", e),
        }
    };

    let on_image = move |evt: FormEvent| {
        let Some(file) = evt.files().into_iter().next() else {
            return;
        };
        let mut image = image;
        spawn(async move {
            let mime = file.content_type().unwrap_or_else(|| {
                mime_guess::from_path(file.name())
                    .first_or_octet_stream()
                    .to_string()
            });
            match file.read_bytes().await {
                Ok(bytes) => match image_data_url(&mime, &bytes) {
                    Ok(url) => image.set(url),
                    Err(e) => error!("cannot attach {}: {}", file.name(), e),
                },
                Err(e) => error!("failed to read {}: {:?}", file.name(), e),
            }
        });
    };

    let on_generate = move |_| {
        let mut text = text;
        let mut generating = generating;
        generating.set(true);
        spawn(async move {
            let client = GeminiClientWeb {
                settings: settings(),
            };
            let thought = generate_thought(&client).await;
            text.set(thought);
            generating.set(false);
        });
    };

    rsx! {
        div { class: "composer",
            textarea {
                placeholder: "What gold thoughts are you weighing today?",
                value: "{text}",
                oninput: move |evt| text.set(evt.value()),
            }

            if !image.read().is_empty() {
                div { class: "preview",
                    img { src: "{image}", alt: "Preview" }
                    button { class: "remove", onclick: move |_| image.set(String::new()), "✕" }
                }
            }

            div { class: "composer-actions",
                label { class: "attach", title: "Attach Image",
                    "🖼"
                    input {
                        r#type: "file",
                        accept: "image/*",
                        class: "hidden",
                        onchange: on_image,
                    }
                }
                button {
                    title: "Generate AI Thought",
                    disabled: generating(),
                    onclick: on_generate,
                    "🪄"
                }
                button { class: "gold-button", onclick: on_submit, "POST ✨" }
            }
        }
    }
}

#[component]
fn PostCard(post: Post) -> Element {
    let mut app = use_context::<Signal<WebGolden>>();
    let mut show_comments = use_signal(|| false);
    let mut comment_text = use_signal(String::new);

    let viewer = app
        .read()
        .session()
        .map(|s| s.username.clone())
        .unwrap_or_default();
    let liked = post.is_liked_by(&viewer);
    let now = Utc::now();

    let like_id = post.id.clone();
    let on_like = move |_| {
        let result = app.write().toggle_like(&like_id);
        if let Err(e) = result {
            error!("failed to toggle like: {}", e);
        }
    };

    let comment_id = post.id.clone();
    let on_comment = move |evt: FormEvent| {
        evt.prevent_default();
        let body = comment_text.read().clone();
        let result = app.write().add_comment(&comment_id, body);
        match result {
            Ok(Some(_)) => comment_text.set(String::new()),
            Ok(None) => {}
            Err(e) => error!("failed to add comment: {}", e),
        }
    };

    let author_initial = initial(&post.author);
    let posted = format_relative(post.timestamp, now);
    let like_class = if liked { "like liked" } else { "like" };
    let heart = if liked { "♥" } else { "♡" };

    rsx! {
        article { class: "post-card",
            div { class: "post-header",
                div { class: "avatar", "{author_initial}" }
                div {
                    h4 { class: "author", "@{post.author}" }
                    p { class: "timestamp", "{posted}" }
                }
            }

            p { class: "post-text", "{post.text}" }

            if let Some(src) = &post.image {
                img { class: "post-image", src: "{src}", alt: "Post content" }
            }

            if let Some(summary) = post.liked_by_summary() {
                div { class: "liked-by", "{summary}" }
            }

            div { class: "post-actions",
                button { class: like_class, onclick: on_like, "{heart} {post.likes}" }
                button {
                    class: "comments-toggle",
                    onclick: move |_| show_comments.toggle(),
                    "💬 {post.comments.len()}"
                }
            }

            if show_comments() {
                div { class: "comments",
                    form { onsubmit: on_comment, class: "comment-form",
                        input {
                            r#type: "text",
                            placeholder: "Add a comment...",
                            value: "{comment_text}",
                            oninput: move |evt| comment_text.set(evt.value()),
                        }
                        button { r#type: "submit", "Post" }
                    }

                    for comment in post.comments.iter() {
                        div { key: "{comment.id}", class: "comment",
                            div { class: "avatar avatar-small", "{initial(&comment.author)}" }
                            div {
                                span { class: "author", "@{comment.author}" }
                                span { class: "timestamp", " {format_relative(comment.timestamp, now)}" }
                                p { "{comment.text}" }
                            }
                        }
                    }
                }
            }
        }
    }
}
