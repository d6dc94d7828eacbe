//! Revenue projection calculator for the partnership model

mod assumptions;
mod model;
mod slider;
pub mod format;

pub use assumptions::RevenueAssumptions;
pub use model::{RevenueModel, RevenueBreakdown};
pub use slider::SliderRange;
