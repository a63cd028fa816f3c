use serde::{Deserialize, Serialize};

/// Account role as sent by the server (`ROLE_ADMIN` / `ROLE_SELLER`)
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Role {
    #[serde(rename = "ROLE_ADMIN")]
    Admin,
    #[default]
    #[serde(rename = "ROLE_SELLER")]
    Seller,
}

impl Role {
    /// Display label with the `ROLE_` prefix stripped
    pub fn label(&self) -> &'static str {
        match self {
            Role::Admin => "ADMIN",
            Role::Seller => "SELLER",
        }
    }
}

/// A registered seller
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Seller {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(rename = "sellerId")]
    pub seller_numeric_id: u64,
    pub name: String,
    #[serde(rename = "PhoneNumber")]
    pub phone: u64,
    pub role: Role,
}

/// `GET /api/v0.1/user` response
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct UsersResponse {
    #[serde(rename = "sellerData", default)]
    pub seller_data: Vec<Seller>,
    #[serde(rename = "sellerIds", default)]
    pub seller_ids: Vec<u64>,
}
