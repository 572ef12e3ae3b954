use dioxus::{logger::tracing, prelude::*};
use dioxus_desktop::{Config, WindowBuilder};
use kube::Client;
use views::Playground;

mod components;
mod contexts;
mod k8s;
mod search;
mod utils;
mod views;

use contexts::{create_default_client, InteractionHub};
use utils::config;

const MAIN_CSS: Asset = asset!("/assets/styling/main.css");

fn main() {
    LaunchBuilder::desktop()
        .with_cfg(
            Config::new().with_window(
                WindowBuilder::new().with_title(config::WINDOW_TITLE)
            ),
        )
        .launch(App);
}

#[component]
fn App() -> Element {
    // Pointer-down notifications for every mounted searchable input - ALWAYS at top level
    let hub = use_context_provider(InteractionHub::new);

    // Client shared with components, stays None until the cluster answers
    let mut client_signal = use_context_provider(|| Signal::new(None::<Client>));

    let client_resource = use_resource(|| async move { create_default_client().await });

    use_effect(move || {
        match &*client_resource.read() {
            Some(Ok(client)) => client_signal.set(Some(client.clone())),
            Some(Err(err)) => tracing::warn!("Running without cluster access, using fallback namespaces: {}", err),
            None => {}
        }
    });

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        div {
            class: "app-root",
            // Runs after the event has bubbled through any input that claimed it
            onmousedown: move |_| {
                hub.dispatch();
            },
            Playground {}
        }
    }
}
