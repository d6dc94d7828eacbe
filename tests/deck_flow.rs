//! End-to-end flows through a presentation session

use std::sync::{Arc, Mutex};
use std::time::Duration;

use approx::assert_relative_eq;
use deck_model::analytics::{AnalyticsEvent, AnalyticsSink};
use deck_model::revenue::format::format_currency;
use deck_model::{
    AnalyticsError, DeckConfig, PhoneMode, Playback, PresentationSession, ProductTab, Tracker,
};

#[derive(Default)]
struct RecordingSink {
    events: Mutex<Vec<AnalyticsEvent>>,
}

impl RecordingSink {
    fn names(&self) -> Vec<String> {
        self.events.lock().unwrap().iter().map(|e| e.name.clone()).collect()
    }
}

impl AnalyticsSink for RecordingSink {
    fn send(&self, event: &AnalyticsEvent) -> Result<(), AnalyticsError> {
        self.events.lock().unwrap().push(event.clone());
        Ok(())
    }
}

struct OfflineSink;

impl AnalyticsSink for OfflineSink {
    fn send(&self, _event: &AnalyticsEvent) -> Result<(), AnalyticsError> {
        Err(AnalyticsError::Unavailable("gtag not loaded".to_string()))
    }
}

#[tokio::test(start_paused = true)]
async fn maple_session_walkthrough() {
    let sink = Arc::new(RecordingSink::default());
    let mut session = PresentationSession::open(DeckConfig::maple(), Tracker::new(sink.clone())).unwrap();

    // Headline numbers at the default slider position
    let r = session.revenue().clone();
    assert_relative_eq!(r.total_revenue, 1_410_000.0, max_relative = 1e-12);
    assert_eq!(format_currency(r.total_revenue), "$1.4M");
    assert_eq!(format_currency(r.partner_share), "$987,000");

    // Carousel runs on its own at 5s
    tokio::time::sleep(Duration::from_millis(10_010)).await;
    assert_eq!(session.carousel().active_index(), 2);

    // Tapping a screen pins it
    let screen = session.select_screen(1).unwrap();
    assert_eq!(screen.title, "Home");
    tokio::time::sleep(Duration::from_secs(30)).await;
    assert_eq!(session.carousel().active_index(), 1);
    assert_eq!(session.carousel().playback(), Playback::Paused);

    // Slider drag
    let r = session.set_user_count(100_000).clone();
    assert_relative_eq!(r.total_revenue, 14_100_000.0, max_relative = 1e-12);
    assert_eq!(format_currency(r.total_revenue), "$14.1M");

    session.set_mode(PhoneMode::Corporate);
    session.navigate("Vision");
    session.cta("Schedule Call - Header");
    session.external_link("Calendly - Schedule Partnership Discussion");

    assert_eq!(
        sink.names(),
        vec![
            "phone_screen_change",
            "calculator_change",
            "mode_toggle",
            "navigation_click",
            "cta_click",
            "external_link_click",
        ]
    );
    let events = sink.events.lock().unwrap();
    assert_eq!(events[0].label, "Home");
    assert_eq!(events[1].value, Some(100_000.0));
    assert_eq!(events[2].label, "Corporate");
}

#[tokio::test(start_paused = true)]
async fn product_section_and_mobile_menu_events() {
    let sink = Arc::new(RecordingSink::default());
    let mut session = PresentationSession::open(DeckConfig::maple(), Tracker::new(sink.clone())).unwrap();
    assert_eq!(session.product_tab(), ProductTab::Retail);

    session.navigate_mobile("Products");
    session.set_product_tab(ProductTab::Institutional);
    session.product_cta("Corporate Demo");
    session.set_product_tab(ProductTab::Retail);
    session.product_cta("Contact Sales");

    assert_eq!(session.product_tab(), ProductTab::Retail);

    let events = sink.events.lock().unwrap();
    let seen: Vec<(&str, &str, &str)> = events
        .iter()
        .map(|e| (e.name.as_str(), e.category.as_str(), e.label.as_str()))
        .collect();
    assert_eq!(
        seen,
        vec![
            ("navigation_click", "Mobile Navigation", "Products"),
            ("product_tab", "Products", "For Institutions"),
            ("cta_click", "Products", "Corporate Demo"),
            ("product_tab", "Products", "For Individuals"),
            ("cta_click", "Products", "Contact Sales"),
        ]
    );
}

#[tokio::test(start_paused = true)]
async fn offline_analytics_does_not_disturb_state() {
    let tracker = Tracker::new(Arc::new(OfflineSink));
    let mut session = PresentationSession::open(DeckConfig::gauntlet(), tracker).unwrap();

    session.select_screen(4).unwrap();
    session.set_user_count(50_000);
    session.cta("Explore Solution - Hero");

    assert_eq!(session.carousel().active_index(), 4);
    assert_eq!(session.user_count(), 50_000);
    assert_eq!(session.tracker().dropped(), 3);
    assert_eq!(session.tracker().sent(), 0);
}

#[tokio::test(start_paused = true)]
async fn gauntlet_ticks_faster_and_wraps() {
    let session = PresentationSession::open(DeckConfig::gauntlet(), Tracker::disabled()).unwrap();

    // 5 screens at 2.5s: one full cycle in 12.5s
    tokio::time::sleep(Duration::from_millis(12_510)).await;
    assert_eq!(session.carousel().active_index(), 0);

    tokio::time::sleep(Duration::from_millis(2_500)).await;
    assert_eq!(session.carousel().active_index(), 1);
}

#[test]
fn sweep_covers_slider_and_sums() {
    let config = DeckConfig::maple();
    let model = deck_model::RevenueModel::new(config.assumptions.clone());
    let rows = model.sweep(&config.slider);

    assert_eq!(rows.len(), 39);
    for r in &rows {
        assert_relative_eq!(
            r.total_revenue,
            r.interchange_revenue + r.yield_fees + r.fx_revenue,
            max_relative = 1e-12
        );
        assert_relative_eq!(r.lifetime_value_per_user, 141.0, max_relative = 1e-9);
    }
}
