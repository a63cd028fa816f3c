//! # Rate Endpoints

use reqwest::Method;
use shared::{MessageResponse, Rate, UpdateRateRequest};

use super::client::ApiClient;
use super::routes;
use crate::core::error::Result;

/// Fetch the current rate record.
pub async fn get_rate(client: &ApiClient) -> Result<Rate> {
    let builder = client.authorized(Method::GET, routes::GET_RATE).await?;
    client.send("get_rate", builder).await
}

/// Update the rate record identified by `id`.
#[tracing::instrument(skip(client, request), fields(rate = request.rate))]
pub async fn update_rate(client: &ApiClient, id: &str, request: UpdateRateRequest) -> Result<MessageResponse> {
    let path = format!("{}/{}", routes::UPDATE_RATE, id);
    let builder = client.authorized(Method::PUT, &path).await?;
    let response = client.send("update_rate", builder.json(&request)).await?;
    tracing::info!("Rate updated");
    Ok(response)
}
