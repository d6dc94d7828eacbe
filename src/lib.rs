//! Deck Model - interactive logic behind the Maple Finance pitch decks
//!
//! This library provides:
//! - Revenue projection for the partnership model (interchange, yield fees, FX)
//! - An auto-advancing phone-screen carousel with cancellable timer
//! - Fire-and-forget interaction analytics
//! - Deck presets and JSON configuration
//! - Count-up animation and currency formatting for display

pub mod error;
pub mod revenue;
pub mod carousel;
pub mod analytics;
pub mod counter;
pub mod deck;
pub mod session;

// Re-export commonly used types
pub use error::{DeckError, AnalyticsError, Result};
pub use revenue::{RevenueModel, RevenueBreakdown, RevenueAssumptions, SliderRange};
pub use carousel::{ScreenCarousel, Screen, Playback, CarouselSnapshot};
pub use analytics::{AnalyticsEvent, AnalyticsSink, Tracker};
pub use deck::{DeckConfig, PhoneMode, ProductTab};
pub use session::PresentationSession;
