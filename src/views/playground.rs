use dioxus::{logger::tracing, prelude::*};

use crate::components::{NamespacePicker, SearchableInput};
use crate::utils::{config, to_options};

const PLAYGROUND_CSS: Asset = asset!("/assets/styling/playground.css");

/// Page showing the searchable input against static and cluster-backed options
#[component]
pub fn Playground() -> Element {
    let mut is_dark_mode = use_signal(|| false);
    let mut fruit = use_signal(String::new);
    let mut namespace = use_signal(String::new);

    let fruits = use_signal(|| to_options(config::DEMO_FRUITS));

    rsx! {
        document::Link { rel: "stylesheet", href: PLAYGROUND_CSS }

        div { class: if is_dark_mode() { "playground-container dark" } else { "playground-container" },
            div { class: "playground-header",
                h1 { "Searchable Input" }
                button {
                    class: "btn btn-secondary",
                    onclick: move |_| is_dark_mode.set(!is_dark_mode()),
                    if is_dark_mode() { "Light mode" } else { "Dark mode" }
                }
            }

            div { class: "playground-fields",
                SearchableInput {
                    value: fruit(),
                    on_change: move |v: String| {
                        tracing::debug!("Fruit changed to {}", v);
                        fruit.set(v)
                    },
                    options: fruits,
                    placeholder: config::DEFAULT_PLACEHOLDER.to_string(),
                    label: "Fruit".to_string(),
                    is_dark_mode: is_dark_mode(),
                    icon: rsx! { "🍎" },
                }
                NamespacePicker {
                    selected_namespace: namespace(),
                    on_change: move |ns: String| {
                        tracing::debug!("Namespace changed to {}", ns);
                        namespace.set(ns)
                    },
                    is_dark_mode: is_dark_mode(),
                }
            }

            div { class: "playground-summary",
                p { "Fruit: {fruit}" }
                p { "Namespace: {namespace}" }
            }
        }
    }
}
