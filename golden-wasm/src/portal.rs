use crate::{WebGolden, initial};
use dioxus::prelude::*;
use golden_core::UserStats;

#[component]
pub fn Portal(on_close: EventHandler<()>) -> Element {
    let app = use_context::<Signal<WebGolden>>();
    let mut query = use_signal(String::new);

    let (detected, results) = {
        let state = app.read();
        let needle = query.read().clone();
        let scanned = match state.universe() {
            Some(universe) => {
                let found: Vec<(String, UserStats)> = universe
                    .search(&needle)
                    .into_iter()
                    .map(|user| (user.to_string(), universe.stats(user)))
                    .collect();
                (universe.users().len(), found)
            }
            None => (0, Vec::new()),
        };
        scanned
    };

    rsx! {
        div { class: "portal",
            div { class: "portal-header",
                h2 { class: "brand brand-large", "UNIVERSE SCAN" }
                p { class: "detected", "Detected Souls: {detected}" }
            }

            div { class: "portal-globe", "🌍" }

            input {
                r#type: "text",
                class: "portal-search",
                placeholder: "Detecting frequency...",
                value: "{query}",
                oninput: move |evt| query.set(evt.value()),
            }

            div { class: "portal-results",
                for (user, stats) in results {
                    div { key: "{user}", class: "soul",
                        div { class: "avatar", "{initial(&user)}" }
                        div {
                            div { class: "author", "@{user}" }
                            div { class: "soul-stats", "{stats.describe()}" }
                        }
                    }
                }
            }

            button { class: "gold-button", onclick: move |_| on_close.call(()), "EXIT SATELLITE VIEW" }
        }
    }
}
