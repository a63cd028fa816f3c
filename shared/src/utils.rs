//! # Shared Utility Functions
//!
//! Pure calculations used by the client screens.
//!
//! ## Amounts
//!
//! A supply entry is billed as `fat × rate × quantity`, where the rate is either
//! the normal or the special rate of the current snapshot:
//!
//! ```rust
//! use shared::dto::{RateSnapshot, SupplyKind};
//! use shared::utils::supply_amount;
//!
//! let rates = RateSnapshot { rate: 30.0, special_rate: 35.0 };
//! assert_eq!(supply_amount(SupplyKind::Normal, 10.0, 4.0, &rates), 1200.0);
//! assert_eq!(supply_amount(SupplyKind::Special, 10.0, 4.0, &rates), 1400.0);
//! ```

use crate::dto::{RateSnapshot, SupplyKind, SupplyRecord};

/// Rate that applies to a supply kind
pub fn applicable_rate(kind: SupplyKind, rates: &RateSnapshot) -> f64 {
    match kind {
        SupplyKind::Normal => rates.rate,
        SupplyKind::Special => rates.special_rate,
    }
}

/// Amount owed for one supply entry
pub fn supply_amount(kind: SupplyKind, quantity: f64, fat_percent: f64, rates: &RateSnapshot) -> f64 {
    fat_percent * applicable_rate(kind, rates) * quantity
}

/// Dashboard aggregation over one page of supply records
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SupplySummary {
    pub total_milk: f64,
    pub total_amount: f64,
    pub avg_fat: f64,
    pub entries: usize,
    /// Quantity per record, in record order (chart series)
    pub quantities: Vec<f64>,
}

impl SupplySummary {
    pub fn from_records(records: &[SupplyRecord]) -> Self {
        let total_milk = records.iter().map(|s| s.quantity).sum();
        let total_amount = records.iter().map(|s| s.amount).sum();
        let avg_fat = if records.is_empty() {
            0.0
        } else {
            records.iter().map(|s| s.fat_percent).sum::<f64>() / records.len() as f64
        };

        Self {
            total_milk,
            total_amount,
            avg_fat,
            entries: records.len(),
            quantities: records.iter().map(|s| s.quantity).collect(),
        }
    }

    /// Average fat with one decimal, as shown on the dashboard card
    pub fn avg_fat_display(&self) -> String {
        format!("{:.1}", self.avg_fat)
    }
}
