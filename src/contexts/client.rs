use dioxus::logger::tracing;
use kube::Client;

use super::error::AppResult;

/// Create a Kubernetes client from the default kubeconfig
pub async fn create_default_client() -> AppResult<Client> {
    tracing::info!("Creating Kubernetes client from default kubeconfig");
    let client = Client::try_default().await?;
    Ok(client)
}
