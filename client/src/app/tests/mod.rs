//! # App Tests
//!
//! Drives [`App`] end to end against an in-memory [`ApiService`].

mod screens;

use std::time::Duration;

use async_trait::async_trait;
use parking_lot::Mutex;
use shared::{
    LoginResponse, MessageResponse, NewSupply, Rate, RateSnapshot, RegisterRequest, Role, Seller,
    SupplyPage, SupplyRange, SupplyRangeResponse, SupplyRecord, SupplyStatus, UpdateRateRequest,
    UsersResponse,
};

use super::*;
use crate::core::error::AppError;
use crate::services::session::MemoryTokenStorage;

pub const TOKEN: &str = "abc123";

/// Scriptable stand-in for the supply API
#[derive(Default)]
pub struct MockApi {
    pub calls: Mutex<Vec<&'static str>>,
    /// Returned by every authenticated endpoint while set
    pub failure: Mutex<Option<AppError>>,
    /// Holds `get_users` back this long before answering
    pub users_delay: Mutex<Option<Duration>>,
    /// Replaces the default seller list when set
    pub users_response: Mutex<Option<UsersResponse>>,
    pub last_range: Mutex<Option<SupplyRange>>,
    pub last_rate_update: Mutex<Option<(String, UpdateRateRequest)>>,
    pub last_register: Mutex<Option<RegisterRequest>>,
    pub posted: Mutex<Vec<NewSupply>>,
}

impl MockApi {
    pub fn failing_with(error: AppError) -> Self {
        let api = Self::default();
        api.fail_with(Some(error));
        api
    }

    pub fn fail_with(&self, error: Option<AppError>) {
        *self.failure.lock() = error;
    }

    pub fn count(&self, name: &str) -> usize {
        self.calls.lock().iter().filter(|c| **c == name).count()
    }

    fn record(&self, name: &'static str) -> crate::core::error::Result<()> {
        self.calls.lock().push(name);
        match self.failure.lock().clone() {
            Some(error) => Err(error),
            None => Ok(()),
        }
    }
}

pub fn sellers() -> Vec<Seller> {
    vec![
        Seller {
            id: "a1".to_string(),
            seller_numeric_id: 7,
            name: "Asha".to_string(),
            phone: 9999999999,
            role: Role::Admin,
        },
        Seller {
            id: "b2".to_string(),
            seller_numeric_id: 9,
            name: "Bala".to_string(),
            phone: 8888888888,
            role: Role::Seller,
        },
    ]
}

pub fn record(id: &str, quantity: f64, fat: f64, amount: f64) -> SupplyRecord {
    SupplyRecord {
        id: id.to_string(),
        seller_numeric_id: 7,
        quantity,
        fat_percent: fat,
        rate: 30.0,
        amount,
        status: SupplyStatus::Pending,
        created_at: None,
    }
}

fn ok_message(text: &str) -> MessageResponse {
    MessageResponse {
        message: Some(text.to_string()),
    }
}

#[async_trait]
impl ApiService for MockApi {
    async fn login(&self, phone_number: u64, password: String) -> crate::core::error::Result<LoginResponse> {
        self.calls.lock().push("login");
        if phone_number == 9999999999 && password == "secret" {
            Ok(LoginResponse {
                token: TOKEN.to_string(),
                message: None,
            })
        } else {
            Err(AppError::Api {
                status: 401,
                body: r#"{"message":"Invalid credentials"}"#.to_string(),
            })
        }
    }

    async fn register_user(&self, request: RegisterRequest) -> crate::core::error::Result<MessageResponse> {
        self.record("register_user")?;
        *self.last_register.lock() = Some(request);
        Ok(ok_message("Registered"))
    }

    async fn get_rate(&self) -> crate::core::error::Result<Rate> {
        self.record("get_rate")?;
        Ok(Rate {
            id: "r1".to_string(),
            snapshot: RateSnapshot {
                rate: 30.0,
                special_rate: 35.0,
            },
        })
    }

    async fn update_rate(
        &self,
        id: &str,
        request: UpdateRateRequest,
    ) -> crate::core::error::Result<MessageResponse> {
        self.record("update_rate")?;
        *self.last_rate_update.lock() = Some((id.to_string(), request));
        Ok(MessageResponse::default())
    }

    async fn get_users(&self) -> crate::core::error::Result<UsersResponse> {
        let delay = *self.users_delay.lock();
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }
        self.record("get_users")?;
        let scripted = self.users_response.lock().clone();
        Ok(scripted.unwrap_or_else(|| UsersResponse {
            seller_data: sellers(),
            seller_ids: vec![7, 9],
        }))
    }

    async fn get_supply(&self) -> crate::core::error::Result<SupplyPage> {
        self.record("get_supply")?;
        Ok(SupplyPage {
            current_page: 1,
            total_pages: 1,
            total_supplies: 2,
            supplies: vec![record("s1", 10.0, 4.0, 1200.0), record("s2", 5.0, 5.0, 750.0)],
            distinct_user_ids: vec![7],
        })
    }

    async fn post_supply(&self, entry: NewSupply) -> crate::core::error::Result<MessageResponse> {
        self.record("post_supply")?;
        self.posted.lock().push(entry);
        Ok(ok_message("Supply added"))
    }

    async fn post_special_supply(&self, entry: NewSupply) -> crate::core::error::Result<MessageResponse> {
        self.record("post_special_supply")?;
        self.posted.lock().push(entry);
        Ok(ok_message("Supply added"))
    }

    async fn get_supply_range(&self, range: &SupplyRange) -> crate::core::error::Result<SupplyRangeResponse> {
        self.record("get_supply_range")?;
        *self.last_range.lock() = Some(range.clone());
        Ok(SupplyRangeResponse {
            supplies: vec![record("s1", 10.0, 4.0, 1200.0), record("s2", 5.0, 5.0, 750.0)],
            total_amount: 1950.0,
        })
    }

    async fn delete_supply(&self, _id: &str) -> crate::core::error::Result<MessageResponse> {
        self.record("delete_supply")?;
        Ok(ok_message("Deleted"))
    }

    async fn mark_completed(&self, range: &SupplyRange) -> crate::core::error::Result<MessageResponse> {
        self.record("mark_completed")?;
        *self.last_range.lock() = Some(range.clone());
        Ok(MessageResponse::default())
    }
}

/// App over `api`, with the session optionally pre-populated
pub fn app_with(api: Arc<MockApi>, token: Option<&str>) -> App {
    let storage = match token {
        Some(token) => MemoryTokenStorage::with_token(token),
        None => MemoryTokenStorage::default(),
    };
    App::new(
        api,
        SessionStore::new(Arc::new(storage)),
        SellerDirectory::new(),
        2,
    )
}

/// App that has resolved a stored session and landed on the Dashboard
pub async fn logged_in(api: Arc<MockApi>) -> App {
    let mut app = app_with(api, Some(TOKEN));
    app.start();
    app.settle().await;
    app
}
