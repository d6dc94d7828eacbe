//! Fixed per-user and rate assumptions behind the revenue model

use serde::{Deserialize, Serialize};

use crate::error::{DeckError, Result};

/// Average deposit balance per user ($)
pub const DEFAULT_AVG_BALANCE: f64 = 5_000.0;

/// Average card spend per user per month ($)
pub const DEFAULT_AVG_MONTHLY_SPEND: f64 = 1_000.0;

/// Share of card spend that is international
pub const DEFAULT_INTERNATIONAL_TXN_RATE: f64 = 0.15;

/// FX markup on international spend (75 bps)
pub const DEFAULT_FX_SPREAD_RATE: f64 = 0.0075;

/// Interchange earned on total card spend (1%)
pub const DEFAULT_INTERCHANGE_RATE: f64 = 0.01;

/// Annual fee taken on yield-bearing balances (15 bps)
pub const DEFAULT_YIELD_FEE_RATE: f64 = 0.0015;

/// Fraction of total revenue attributed to the partner
pub const DEFAULT_PARTNER_SHARE_RATE: f64 = 0.70;

/// Revenue model assumptions
///
/// Every field falls back to its default when missing from a JSON override,
/// so `{"partner_share_rate": 0.6}` is a complete assumption set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RevenueAssumptions {
    pub avg_balance: f64,
    pub avg_monthly_spend: f64,
    pub international_txn_rate: f64,
    pub fx_spread_rate: f64,
    pub interchange_rate: f64,
    pub yield_fee_rate: f64,
    pub partner_share_rate: f64,
}

impl Default for RevenueAssumptions {
    fn default() -> Self {
        Self {
            avg_balance: DEFAULT_AVG_BALANCE,
            avg_monthly_spend: DEFAULT_AVG_MONTHLY_SPEND,
            international_txn_rate: DEFAULT_INTERNATIONAL_TXN_RATE,
            fx_spread_rate: DEFAULT_FX_SPREAD_RATE,
            interchange_rate: DEFAULT_INTERCHANGE_RATE,
            yield_fee_rate: DEFAULT_YIELD_FEE_RATE,
            partner_share_rate: DEFAULT_PARTNER_SHARE_RATE,
        }
    }
}

impl RevenueAssumptions {
    /// Reject negative or non-finite values
    pub fn validate(&self) -> Result<()> {
        let fields = [
            ("avg_balance", self.avg_balance),
            ("avg_monthly_spend", self.avg_monthly_spend),
            ("international_txn_rate", self.international_txn_rate),
            ("fx_spread_rate", self.fx_spread_rate),
            ("interchange_rate", self.interchange_rate),
            ("yield_fee_rate", self.yield_fee_rate),
            ("partner_share_rate", self.partner_share_rate),
        ];

        for (name, value) in fields {
            if !value.is_finite() || value < 0.0 {
                return Err(DeckError::InvalidAssumption { name, value });
            }
        }
        Ok(())
    }
}
