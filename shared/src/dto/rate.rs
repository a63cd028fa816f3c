use serde::{Deserialize, Serialize};

/// Current rate snapshot from `GET /api/v0.1/getRate`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RateSnapshot {
    #[serde(rename = "rate", default)]
    pub rate: f64,
    #[serde(rename = "specialRate", default)]
    pub special_rate: f64,
}

/// Rate record including its storage id (needed for updates)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rate {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(flatten)]
    pub snapshot: RateSnapshot,
}

/// `PUT /api/v0.1/updateRate/{id}` body
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct UpdateRateRequest {
    pub rate: f64,
    #[serde(rename = "specialRate", skip_serializing_if = "Option::is_none")]
    pub special_rate: Option<f64>,
}
