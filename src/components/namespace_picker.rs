use dioxus::{logger::tracing, prelude::*};
use kube::Client;

use crate::components::SearchableInput;
use crate::k8s::{fetch_namespace_names, namespace_options};
use crate::utils::{config, to_options};

#[derive(Props, PartialEq, Clone)]
pub struct NamespacePickerProps {
    selected_namespace: String,
    on_change: EventHandler<String>,
    is_dark_mode: bool,
}

#[component]
pub fn NamespacePicker(props: NamespacePickerProps) -> Element {
    let client_signal = use_context::<Signal<Option<Client>>>();

    let mut namespaces = use_signal(|| to_options(config::FALLBACK_NAMESPACES));

    // Refetch whenever the client changes, keep the fallback list when there is none
    use_effect(move || {
        if let Some(client) = &*client_signal.read() {
            let client = client.clone();
            tracing::info!("Starting namespace fetch...");
            spawn(async move {
                namespaces.set(namespace_options(fetch_namespace_names(client).await));
            });
        } else {
            namespaces.set(to_options(config::FALLBACK_NAMESPACES));
        }
    });

    rsx! {
        SearchableInput {
            value: props.selected_namespace.clone(),
            on_change: props.on_change,
            options: namespaces,
            placeholder: "Filter namespaces...".to_string(),
            label: "Namespace".to_string(),
            is_dark_mode: props.is_dark_mode,
            icon: rsx! { "☸" },
        }
    }
}
