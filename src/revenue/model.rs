//! Annual revenue breakdown for a given user base

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use super::assumptions::RevenueAssumptions;
use super::slider::SliderRange;

/// Annual revenue streams for one user count
///
/// Values are unrounded. Formatting happens at display time only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RevenueBreakdown {
    pub user_count: u64,

    /// Card spend across all users for one year
    pub total_annual_spend: f64,

    // Revenue streams
    pub interchange_revenue: f64,
    pub yield_fees: f64,
    pub fx_revenue: f64,

    pub total_revenue: f64,
    pub partner_share: f64,

    /// Annual revenue per user, 0.0 when there are no users
    pub lifetime_value_per_user: f64,
}

/// Revenue calculator
#[derive(Debug, Clone, Default)]
pub struct RevenueModel {
    assumptions: RevenueAssumptions,
}

impl RevenueModel {
    pub fn new(assumptions: RevenueAssumptions) -> Self {
        Self { assumptions }
    }

    pub fn assumptions(&self) -> &RevenueAssumptions {
        &self.assumptions
    }

    /// Compute the revenue breakdown for `user_count` users
    pub fn compute(&self, user_count: u64) -> RevenueBreakdown {
        let a = &self.assumptions;
        let users = user_count as f64;

        let total_annual_spend = users * a.avg_monthly_spend * 12.0;
        let interchange_revenue = total_annual_spend * a.interchange_rate;
        let yield_fees = users * a.avg_balance * a.yield_fee_rate;
        let fx_revenue = total_annual_spend * a.international_txn_rate * a.fx_spread_rate;

        let total_revenue = interchange_revenue + yield_fees + fx_revenue;
        let partner_share = total_revenue * a.partner_share_rate;

        // Zero users has no per-user value; report 0 rather than NaN
        let lifetime_value_per_user = if user_count == 0 {
            0.0
        } else {
            total_revenue / users
        };

        RevenueBreakdown {
            user_count,
            total_annual_spend,
            interchange_revenue,
            yield_fees,
            fx_revenue,
            total_revenue,
            partner_share,
            lifetime_value_per_user,
        }
    }

    /// Compute a breakdown for every slider stop, in ascending order
    pub fn sweep(&self, range: &SliderRange) -> Vec<RevenueBreakdown> {
        let stops: Vec<u64> = range.stops().collect();
        stops.par_iter().map(|&users| self.compute(users)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_reference_point_10k_users() {
        let r = RevenueModel::default().compute(10_000);

        assert_eq!(r.user_count, 10_000);
        assert_relative_eq!(r.total_annual_spend, 120_000_000.0, max_relative = 1e-12);
        assert_relative_eq!(r.interchange_revenue, 1_200_000.0, max_relative = 1e-12);
        assert_relative_eq!(r.yield_fees, 75_000.0, max_relative = 1e-12);
        assert_relative_eq!(r.fx_revenue, 135_000.0, max_relative = 1e-12);
        assert_relative_eq!(r.total_revenue, 1_410_000.0, max_relative = 1e-12);
        assert_relative_eq!(r.partner_share, 987_000.0, max_relative = 1e-12);
        assert_relative_eq!(r.lifetime_value_per_user, 141.0, max_relative = 1e-12);
    }

    #[test]
    fn test_total_is_sum_of_streams_over_slider() {
        let model = RevenueModel::default();
        for users in SliderRange::default().stops() {
            let r = model.compute(users);
            assert_relative_eq!(
                r.total_revenue,
                r.interchange_revenue + r.yield_fees + r.fx_revenue,
                max_relative = 1e-12
            );
        }
    }

    #[test]
    fn test_zero_users_has_finite_ltv() {
        let r = RevenueModel::default().compute(0);
        assert_eq!(r.total_revenue, 0.0);
        assert_eq!(r.lifetime_value_per_user, 0.0);
        assert!(r.lifetime_value_per_user.is_finite());
    }

    #[test]
    fn test_very_large_user_count() {
        let r = RevenueModel::default().compute(1_000_000_000);
        assert!(r.total_revenue.is_finite());
        assert_relative_eq!(r.lifetime_value_per_user, 141.0, max_relative = 1e-9);
    }

    #[test]
    fn test_revenue_increases_with_users() {
        let results = RevenueModel::default().sweep(&SliderRange::default());
        for pair in results.windows(2) {
            assert!(pair[1].total_revenue > pair[0].total_revenue);
        }
    }

    #[test]
    fn test_compute_is_idempotent() {
        let model = RevenueModel::default();
        assert_eq!(model.compute(75_000), model.compute(75_000));
    }

    #[test]
    fn test_sweep_preserves_order() {
        let range = SliderRange::default();
        let results = RevenueModel::default().sweep(&range);
        let users: Vec<u64> = results.iter().map(|r| r.user_count).collect();
        let expected: Vec<u64> = range.stops().collect();
        assert_eq!(users, expected);
    }

    #[test]
    fn test_custom_partner_share() {
        let model = RevenueModel::new(RevenueAssumptions {
            partner_share_rate: 0.5,
            ..Default::default()
        });
        let r = model.compute(10_000);
        assert_relative_eq!(r.partner_share, 705_000.0, max_relative = 1e-12);
    }
}
