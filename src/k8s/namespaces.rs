use dioxus::logger::tracing;
use k8s_openapi::api::core::v1::Namespace;
use kube::{
    api::{Api, ListParams},
    Client,
};

use crate::contexts::{AppError, AppResult};
use crate::utils::{config, to_options};

/// Sorted names of the given namespaces, skipping any without a name
pub fn namespace_names(namespaces: Vec<Namespace>) -> Vec<String> {
    let mut names = namespaces
        .into_iter()
        .filter_map(|ns| ns.metadata.name)
        .collect::<Vec<_>>();
    names.sort();
    names
}

/// List the names of every namespace in the cluster
pub async fn fetch_namespace_names(client: Client) -> AppResult<Vec<String>> {
    let api: Api<Namespace> = Api::all(client);
    let params = ListParams::default().timeout(10);

    let list = api
        .list(&params)
        .await
        .map_err(|e| AppError::FetchError(e.to_string()))?;

    let names = namespace_names(list.items);
    tracing::debug!("Fetched {} namespaces", names.len());
    Ok(names)
}

/// Options for the namespace picker, the fallback list when the cluster could not be listed
pub fn namespace_options(fetched: AppResult<Vec<String>>) -> Vec<String> {
    match fetched {
        Ok(names) => names,
        Err(e) => {
            tracing::warn!("Using fallback namespaces: {}", e);
            to_options(config::FALLBACK_NAMESPACES)
        }
    }
}
