//! # Service Traits
//!
//! Traits for dependency injection, enabling better testability and modularity.

use async_trait::async_trait;
use shared::{
    LoginResponse, MessageResponse, NewSupply, Rate, RegisterRequest, SupplyPage, SupplyRange,
    SupplyRangeResponse, UpdateRateRequest, UsersResponse,
};

use crate::core::error::Result;

/// Trait for API gateway operations, one method per endpoint.
///
/// The production implementation is [`crate::services::api::ApiClient`], which
/// attaches the session token itself; callers never pass tokens around. Tests
/// substitute an in-memory mock.
#[async_trait]
pub trait ApiService: Send + Sync {
    /// `POST /api/v0.1/login` (no session required)
    async fn login(&self, phone_number: u64, password: String) -> Result<LoginResponse>;

    /// `POST /api/v0.1/register`
    async fn register_user(&self, request: RegisterRequest) -> Result<MessageResponse>;

    /// `GET /api/v0.1/getRate`
    async fn get_rate(&self) -> Result<Rate>;

    /// `PUT /api/v0.1/updateRate/{id}`
    async fn update_rate(&self, id: &str, request: UpdateRateRequest) -> Result<MessageResponse>;

    /// `GET /api/v0.1/user`
    async fn get_users(&self) -> Result<UsersResponse>;

    /// `GET /api/v0.1/Supply`
    async fn get_supply(&self) -> Result<SupplyPage>;

    /// `POST /api/v0.1/Supply/add`
    async fn post_supply(&self, entry: NewSupply) -> Result<MessageResponse>;

    /// `POST /api/v0.1/Supply/addSpecial`
    async fn post_special_supply(&self, entry: NewSupply) -> Result<MessageResponse>;

    /// `GET /api/v0.1/Supply/Range`
    async fn get_supply_range(&self, range: &SupplyRange) -> Result<SupplyRangeResponse>;

    /// `DELETE /api/v0.1/Supply/{id}`
    async fn delete_supply(&self, id: &str) -> Result<MessageResponse>;

    /// `PUT /api/v0.1/Supply/markCompleted`
    async fn mark_completed(&self, range: &SupplyRange) -> Result<MessageResponse>;
}
