//! # Authentication Endpoints
//!
//! Login and seller registration.

use reqwest::Method;
use shared::{LoginRequest, LoginResponse, MessageResponse, RegisterRequest};

use super::client::ApiClient;
use super::routes;
use crate::core::error::Result;

/// Login with phone number and password.
#[tracing::instrument(skip(client, password), fields(phone_number = %phone_number))]
pub async fn login(client: &ApiClient, phone_number: u64, password: String) -> Result<LoginResponse> {
    tracing::info!("Attempting login");

    let request = LoginRequest {
        phone_number,
        password,
    };

    let response: LoginResponse = client
        .send("login", client.public(Method::POST, routes::LOGIN).json(&request))
        .await?;

    tracing::info!("Login successful");
    Ok(response)
}

/// Register a new seller or admin account.
#[tracing::instrument(skip(client, request), fields(seller_id = %request.seller_id, role = ?request.role))]
pub async fn register_user(client: &ApiClient, request: RegisterRequest) -> Result<MessageResponse> {
    let builder = client.authorized(Method::POST, routes::REGISTER_USER).await?;
    client.send("register", builder.json(&request)).await
}
