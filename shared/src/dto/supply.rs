use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Supply entry status
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum SupplyStatus {
    #[default]
    Pending,
    Completed,
}

/// Which rate a supply entry is billed at
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum SupplyKind {
    #[default]
    Normal,
    Special,
}

impl SupplyKind {
    pub fn title(&self) -> &'static str {
        match self {
            SupplyKind::Normal => "Normal",
            SupplyKind::Special => "Special",
        }
    }
}

/// One delivery entry as stored by the server
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SupplyRecord {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(rename = "sellerId")]
    pub seller_numeric_id: u64,
    pub quantity: f64,
    #[serde(rename = "fat")]
    pub fat_percent: f64,
    #[serde(default)]
    pub rate: f64,
    #[serde(default)]
    pub amount: f64,
    #[serde(default)]
    pub status: SupplyStatus,
    #[serde(rename = "createAt", default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

/// `POST /api/v0.1/Supply/add` and `/Supply/addSpecial` body
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct NewSupply {
    #[serde(rename = "sellerId")]
    pub seller_numeric_id: u64,
    pub quantity: f64,
    #[serde(rename = "fat")]
    pub fat_percent: f64,
    pub status: SupplyStatus,
}

/// `GET /api/v0.1/Supply` response (one page, server-side pagination)
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct SupplyPage {
    #[serde(rename = "currentPage", default)]
    pub current_page: u32,
    #[serde(rename = "totalPages", default)]
    pub total_pages: u32,
    #[serde(rename = "totalSupplies", default)]
    pub total_supplies: u64,
    #[serde(default)]
    pub supplies: Vec<SupplyRecord>,
    #[serde(rename = "distinctUserIds", default)]
    pub distinct_user_ids: Vec<u64>,
}

/// Billing filter used both as `GET /Supply/Range` query and `PUT /Supply/markCompleted` body
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SupplyRange {
    #[serde(rename = "sellerId")]
    pub seller_id: String,
    pub from: NaiveDate,
    pub to: NaiveDate,
}

/// `GET /api/v0.1/Supply/Range` response
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct SupplyRangeResponse {
    #[serde(default)]
    pub supplies: Vec<SupplyRecord>,
    #[serde(rename = "totalAmount", default)]
    pub total_amount: f64,
}
