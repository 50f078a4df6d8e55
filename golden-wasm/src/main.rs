use crate::storage::LocalStorageStore;
use dioxus::prelude::*;
use golden_core::{Golden, KvStateRepository};
use tracing::error;

mod client;
mod error;
mod feed;
mod portal;
mod storage;

pub type WebGolden = Golden<KvStateRepository<LocalStorageStore>>;

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::logger::init(dioxus::logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    let state = use_hook(|| {
        Golden::open(KvStateRepository::new(LocalStorageStore))
            .map(Signal::new)
            .map_err(|e| {
                error!("failed to load saved state: {}", e);
                e.to_string()
            })
    });

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        match state {
            Ok(app) => rsx! { Shell { app } },
            Err(message) => rsx! {
                div { class: "fatal", "Saved state could not be read: {message}" }
            },
        }
    }
}

#[component]
fn Shell(app: Signal<WebGolden>) -> Element {
    use_context_provider(|| app);
    let mut portal_open = use_signal(|| false);

    if !app.read().is_authenticated() {
        return rsx! { Login {} };
    }

    rsx! {
        div { class: "app",
            header { class: "topbar",
                h1 { class: "brand", "GOLDEN" }
                button {
                    class: "globe",
                    title: "Universe Search",
                    onclick: move |_| portal_open.set(true),
                    "🌍"
                }
            }

            main { class: "main", feed::Feed {} }

            Navbar {}

            if portal_open() {
                portal::Portal { on_close: move |_| portal_open.set(false) }
            }
        }
    }
}

#[component]
fn Login() -> Element {
    let mut app = use_context::<Signal<WebGolden>>();

    let mut username = use_signal(String::new);
    // collected for the form only
    let mut password = use_signal(String::new);

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let name = username.read().clone();
        let result = app.write().login(&name).map(|_| ());
        if let Err(e) = result {
            if !e.is_declined() {
                error!("login failed: {}", e);
            }
        }
    };

    rsx! {
        div { class: "login",
            div { class: "login-card",
                h1 { class: "brand brand-large", "GOLDEN SOCIAL" }
                p { class: "tagline", "Universal Connect V4.0" }

                form {
                    onsubmit: on_submit,
                    class: "login-form",

                    input {
                        r#type: "text",
                        placeholder: "Username",
                        value: "{username}",
                        oninput: move |evt| username.set(evt.value()),
                    }
                    input {
                        r#type: "password",
                        placeholder: "Password",
                        value: "{password}",
                        oninput: move |evt| password.set(evt.value()),
                    }
                    button { r#type: "submit", class: "gold-button", "ENTER UNIVERSE" }

                    p { class: "fineprint",
                        "By entering, you agree to the Golden Standard of interactions."
                    }
                }
            }
        }
    }
}

#[component]
fn Navbar() -> Element {
    let mut app = use_context::<Signal<WebGolden>>();

    let on_logout = move |_| {
        let result = app.write().logout(&browser_confirm);
        if let Err(e) = result {
            error!("logout failed: {}", e);
        }
    };

    rsx! {
        nav { class: "navbar",
            button { title: "Home", onclick: move |_| scroll_to_top(), "🏠" }
            button { title: "Logout", onclick: on_logout, "⏻" }
        }
    }
}

fn browser_confirm(prompt: &str) -> bool {
    web_sys::window()
        .and_then(|w| w.confirm_with_message(prompt).ok())
        .unwrap_or(false)
}

fn scroll_to_top() {
    if let Some(window) = web_sys::window() {
        window.scroll_to_with_x_and_y(0.0, 0.0);
    }
}

pub fn initial(name: &str) -> String {
    name.chars()
        .next()
        .map(|c| c.to_uppercase().to_string())
        .unwrap_or_default()
}
