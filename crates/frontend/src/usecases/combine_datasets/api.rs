use crate::shared::api_utils::api_url;
use contracts::datasets::{DatasetsEnvelope, DatasetsResponse};
use gloo_net::http::Request;

/// Fetch the table/column catalog of every dataset on the service
pub async fn fetch_datasets() -> Result<DatasetsResponse, String> {
    let response = Request::get(&api_url("/api/datasets"))
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Failed to fetch datasets: {}", response.status()));
    }

    let envelope: DatasetsEnvelope = response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))?;

    Ok(envelope.res)
}
