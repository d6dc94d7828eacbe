//! Interactive state of one open presentation
//!
//! The session is what a rendering layer talks to. It feeds slider moves to
//! the revenue model, taps to the carousel, and reports each interaction to
//! analytics. Analytics never influences the calculator or carousel.

use log::debug;

use crate::analytics::{AnalyticsEvent, Tracker};
use crate::carousel::{Screen, ScreenCarousel};
use crate::deck::{DeckConfig, PhoneMode, ProductTab};
use crate::error::Result;
use crate::revenue::{RevenueBreakdown, RevenueModel, SliderRange};

pub struct PresentationSession {
    config: DeckConfig,
    model: RevenueModel,
    carousel: ScreenCarousel,
    tracker: Tracker,
    user_count: u64,
    revenue: RevenueBreakdown,
    mode: PhoneMode,
    product_tab: ProductTab,
}

impl PresentationSession {
    /// Open a deck: validate its config and start the carousel.
    ///
    /// Must be called inside a tokio runtime.
    pub fn open(config: DeckConfig, tracker: Tracker) -> Result<Self> {
        config.validate()?;

        let model = RevenueModel::new(config.assumptions.clone());
        let carousel = ScreenCarousel::mount(config.screens.clone(), config.tick_period())?;
        let user_count = config.initial_users;
        let revenue = model.compute(user_count);

        debug!(
            "session opened for deck {} (analytics {})",
            config.name,
            if tracker.is_enabled() { "on" } else { "off" }
        );
        Ok(Self {
            config,
            model,
            carousel,
            tracker,
            user_count,
            revenue,
            mode: PhoneMode::default(),
            product_tab: ProductTab::default(),
        })
    }

    pub fn config(&self) -> &DeckConfig {
        &self.config
    }

    pub fn slider(&self) -> &SliderRange {
        &self.config.slider
    }

    pub fn carousel(&self) -> &ScreenCarousel {
        &self.carousel
    }

    pub fn tracker(&self) -> &Tracker {
        &self.tracker
    }

    pub fn user_count(&self) -> u64 {
        self.user_count
    }

    pub fn revenue(&self) -> &RevenueBreakdown {
        &self.revenue
    }

    pub fn mode(&self) -> PhoneMode {
        self.mode
    }

    pub fn product_tab(&self) -> ProductTab {
        self.product_tab
    }

    /// Move the slider. The raw value is snapped to a slider stop.
    pub fn set_user_count(&mut self, raw: u64) -> &RevenueBreakdown {
        let user_count = self.config.slider.snap(raw);
        self.user_count = user_count;
        self.revenue = self.model.compute(user_count);
        self.tracker.track(AnalyticsEvent::calculator_change(user_count));
        &self.revenue
    }

    /// User tapped a screen tab
    pub fn select_screen(&self, index: usize) -> Result<Screen> {
        let screen = self.carousel.select(index)?;
        self.tracker.track(AnalyticsEvent::phone_screen_change(&screen.title));
        Ok(screen)
    }

    pub fn set_mode(&mut self, mode: PhoneMode) {
        self.mode = mode;
        self.tracker.track(AnalyticsEvent::mode_toggle(mode.label()));
    }

    pub fn set_product_tab(&mut self, tab: ProductTab) {
        self.product_tab = tab;
        self.tracker.track(AnalyticsEvent::product_tab(tab.label()));
    }

    pub fn navigate(&self, label: &str) {
        self.tracker.track(AnalyticsEvent::navigation_click(label));
    }

    pub fn navigate_mobile(&self, label: &str) {
        self.tracker.track(AnalyticsEvent::mobile_navigation_click(label));
    }

    pub fn cta(&self, label: &str) {
        self.tracker.track(AnalyticsEvent::cta_click(label));
    }

    pub fn product_cta(&self, label: &str) {
        self.tracker.track(AnalyticsEvent::product_cta_click(label));
    }

    pub fn external_link(&self, label: &str) {
        self.tracker.track(AnalyticsEvent::external_link_click(label));
    }
}
