//! # User Endpoints

use reqwest::Method;
use shared::UsersResponse;

use super::client::ApiClient;
use super::routes;
use crate::core::error::Result;

/// Fetch all sellers and their numeric ids.
pub async fn get_users(client: &ApiClient) -> Result<UsersResponse> {
    let builder = client.authorized(Method::GET, routes::GET_USER).await?;
    let response: UsersResponse = client.send("get_users", builder).await?;
    tracing::debug!(sellers = response.seller_data.len(), "Fetched seller list");
    Ok(response)
}
