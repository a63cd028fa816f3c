//! # Supply Endpoints
//!
//! Dashboard page, new entries, billing ranges, completion and deletion.

use reqwest::Method;
use shared::{MessageResponse, NewSupply, SupplyPage, SupplyRange, SupplyRangeResponse};

use super::client::ApiClient;
use super::routes;
use crate::core::error::Result;

/// Fetch the current page of supply records.
pub async fn get_supply(client: &ApiClient) -> Result<SupplyPage> {
    let builder = client.authorized(Method::GET, routes::GET_SUPPLY_DATA).await?;
    client.send("get_supply", builder).await
}

/// Record a supply entry at the normal rate.
#[tracing::instrument(skip(client, entry), fields(seller = entry.seller_numeric_id))]
pub async fn post_supply(client: &ApiClient, entry: NewSupply) -> Result<MessageResponse> {
    let builder = client.authorized(Method::POST, routes::POST_SUPPLY_DATA).await?;
    client.send("post_supply", builder.json(&entry)).await
}

/// Record a supply entry at the special rate.
#[tracing::instrument(skip(client, entry), fields(seller = entry.seller_numeric_id))]
pub async fn post_special_supply(client: &ApiClient, entry: NewSupply) -> Result<MessageResponse> {
    let builder = client.authorized(Method::POST, routes::POST_SUPPLY_SPECIAL_DATA).await?;
    client.send("post_special_supply", builder.json(&entry)).await
}

/// Fetch one seller's records between two dates (inclusive, server-defined).
#[tracing::instrument(skip(client, range), fields(seller = %range.seller_id, from = %range.from, to = %range.to))]
pub async fn get_supply_range(client: &ApiClient, range: &SupplyRange) -> Result<SupplyRangeResponse> {
    let builder = client.authorized(Method::GET, routes::GET_SUPPLY_BY_RANGE).await?;
    client.send("get_supply_range", builder.query(range)).await
}

/// Delete one supply record.
#[tracing::instrument(skip(client))]
pub async fn delete_supply(client: &ApiClient, id: &str) -> Result<MessageResponse> {
    let path = format!("{}/{}", routes::DELETE_SUPPLY, id);
    let builder = client.authorized(Method::DELETE, &path).await?;
    client.send("delete_supply", builder).await
}

/// Mark every record in the range as completed.
#[tracing::instrument(skip(client, range), fields(seller = %range.seller_id))]
pub async fn mark_completed(client: &ApiClient, range: &SupplyRange) -> Result<MessageResponse> {
    let builder = client.authorized(Method::PUT, routes::UPDATE_SUPPLY_STATUS).await?;
    client.send("mark_completed", builder.json(range)).await
}
