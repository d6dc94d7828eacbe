//! Fire-and-forget interaction analytics
//!
//! Events go to an optional sink. A missing or failing collector never
//! surfaces to the caller: `Tracker::track` has no error path.

use std::io::Write;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, PoisonError};

use chrono::{DateTime, Utc};
use log::{debug, info};
use serde::Serialize;

use crate::error::AnalyticsError;

/// A single user-interaction event
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalyticsEvent {
    pub name: String,
    pub category: String,
    pub label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<f64>,
    pub timestamp: DateTime<Utc>,
}

impl AnalyticsEvent {
    pub fn new(name: &str, category: &str, label: &str, value: Option<f64>) -> Self {
        Self {
            name: name.to_string(),
            category: category.to_string(),
            label: label.to_string(),
            value,
            timestamp: Utc::now(),
        }
    }

    pub fn navigation_click(label: &str) -> Self {
        Self::new("navigation_click", "Navigation", label, None)
    }

    /// Same event as `navigation_click`, from the collapsed mobile menu
    pub fn mobile_navigation_click(label: &str) -> Self {
        Self::new("navigation_click", "Mobile Navigation", label, None)
    }

    pub fn cta_click(label: &str) -> Self {
        Self::new("cta_click", "CTA", label, None)
    }

    /// Call to action inside a product column
    pub fn product_cta_click(label: &str) -> Self {
        Self::new("cta_click", "Products", label, None)
    }

    pub fn product_tab(tab_label: &str) -> Self {
        Self::new("product_tab", "Products", tab_label, None)
    }

    pub fn calculator_change(user_count: u64) -> Self {
        Self::new(
            "calculator_change",
            "Calculator",
            "User Count Slider",
            Some(user_count as f64),
        )
    }

    pub fn phone_screen_change(screen_title: &str) -> Self {
        Self::new("phone_screen_change", "Phone Mockup", screen_title, None)
    }

    pub fn mode_toggle(mode_label: &str) -> Self {
        Self::new("mode_toggle", "Phone Mode", mode_label, None)
    }

    pub fn external_link_click(label: &str) -> Self {
        Self::new("external_link_click", "Contact", label, None)
    }
}

/// Destination for analytics events. Implementations must not block.
pub trait AnalyticsSink: Send + Sync {
    fn send(&self, event: &AnalyticsEvent) -> Result<(), AnalyticsError>;
}

/// Writes each event as a log line
#[derive(Debug, Default)]
pub struct LogSink;

impl AnalyticsSink for LogSink {
    fn send(&self, event: &AnalyticsEvent) -> Result<(), AnalyticsError> {
        info!(
            "analytics {} [{}] {}{}",
            event.name,
            event.category,
            event.label,
            event.value.map(|v| format!(" = {}", v)).unwrap_or_default()
        );
        Ok(())
    }
}

/// Newline-delimited JSON to any writer
pub struct JsonLinesSink {
    writer: Mutex<Box<dyn Write + Send>>,
}

impl JsonLinesSink {
    pub fn new(writer: impl Write + Send + 'static) -> Self {
        Self {
            writer: Mutex::new(Box::new(writer)),
        }
    }
}

impl AnalyticsSink for JsonLinesSink {
    fn send(&self, event: &AnalyticsEvent) -> Result<(), AnalyticsError> {
        let line = serde_json::to_string(event)?;
        let mut writer = self.writer.lock().unwrap_or_else(PoisonError::into_inner);
        writeln!(writer, "{}", line)?;
        writer.flush()?;
        Ok(())
    }
}

/// Front door for analytics: forwards to the sink if there is one
#[derive(Clone, Default)]
pub struct Tracker {
    sink: Option<Arc<dyn AnalyticsSink>>,
    sent: Arc<AtomicU64>,
    dropped: Arc<AtomicU64>,
}

impl Tracker {
    pub fn new(sink: Arc<dyn AnalyticsSink>) -> Self {
        Self {
            sink: Some(sink),
            ..Default::default()
        }
    }

    /// Tracker with no collector; every event is discarded
    pub fn disabled() -> Self {
        Self::default()
    }

    pub fn is_enabled(&self) -> bool {
        self.sink.is_some()
    }

    pub fn track(&self, event: AnalyticsEvent) {
        let Some(sink) = &self.sink else {
            return;
        };
        match sink.send(&event) {
            Ok(()) => {
                self.sent.fetch_add(1, Ordering::Relaxed);
            }
            Err(e) => {
                self.dropped.fetch_add(1, Ordering::Relaxed);
                debug!("analytics event {} dropped: {}", event.name, e);
            }
        }
    }

    /// Events accepted by the sink
    pub fn sent(&self) -> u64 {
        self.sent.load(Ordering::Relaxed)
    }

    /// Events the sink failed to accept
    pub fn dropped(&self) -> u64 {
        self.dropped.load(Ordering::Relaxed)
    }
}
