//! Count-up animation for headline statistics
//!
//! A counter eases from zero to its target over a fixed duration using a
//! cubic ease-out, so most of the movement happens early.

use std::time::Duration;

use crate::error::{DeckError, Result};
use crate::revenue::format::format_compact;

/// Default animation length
pub const DEFAULT_COUNTER_DURATION: Duration = Duration::from_secs(2);

/// Cubic ease-out over progress in [0, 1]
pub fn ease_out_cubic(progress: f64) -> f64 {
    let p = progress.clamp(0.0, 1.0);
    1.0 - (1.0 - p).powi(3)
}

/// Pull the numeric part out of display text such as `"$2.5M"` or `"99.9%"`
///
/// Non-numeric characters are dropped first, then the longest leading
/// decimal is read, so `"1.2.3"` gives 1.2.
pub fn parse_numeric(text: &str) -> Result<f64> {
    let mut number = String::new();
    let mut seen_dot = false;
    for c in text.chars().filter(|c| c.is_ascii_digit() || *c == '.') {
        if c == '.' {
            if seen_dot {
                break;
            }
            seen_dot = true;
        }
        number.push(c);
    }
    number
        .parse::<f64>()
        .map_err(|_| DeckError::Parse(text.to_string()))
}

#[derive(Debug, Clone, PartialEq)]
pub struct CounterAnimation {
    pub target: f64,
    pub duration: Duration,
}

impl CounterAnimation {
    pub fn new(target: f64, duration: Duration) -> Self {
        Self { target, duration }
    }

    /// Build from display text, keeping only its numeric part
    pub fn from_text(text: &str, duration: Duration) -> Result<Self> {
        Ok(Self::new(parse_numeric(text)?, duration))
    }

    /// Fraction of the animation elapsed, capped at 1
    pub fn progress(&self, elapsed: Duration) -> f64 {
        if self.duration.is_zero() {
            return 1.0;
        }
        (elapsed.as_secs_f64() / self.duration.as_secs_f64()).min(1.0)
    }

    /// Displayed value after `elapsed`
    pub fn value_at(&self, elapsed: Duration) -> f64 {
        self.target * ease_out_cubic(self.progress(elapsed))
    }

    pub fn is_finished(&self, elapsed: Duration) -> bool {
        self.progress(elapsed) >= 1.0
    }

    /// Formatted frame, e.g. `$1.2M+`
    pub fn render_at(&self, elapsed: Duration, prefix: &str, suffix: &str) -> String {
        format!("{}{}{}", prefix, format_compact(self.value_at(elapsed)), suffix)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_ease_endpoints() {
        assert_eq!(ease_out_cubic(0.0), 0.0);
        assert_eq!(ease_out_cubic(1.0), 1.0);
        assert_relative_eq!(ease_out_cubic(0.5), 0.875);
        // Out-of-range progress is clamped
        assert_eq!(ease_out_cubic(-1.0), 0.0);
        assert_eq!(ease_out_cubic(2.0), 1.0);
    }

    #[test]
    fn test_parse_numeric() {
        assert_relative_eq!(parse_numeric("$2.5M").unwrap(), 2.5);
        assert_relative_eq!(parse_numeric("99.9%").unwrap(), 99.9);
        assert_relative_eq!(parse_numeric("150,000").unwrap(), 150_000.0);
        assert!(matches!(parse_numeric("n/a"), Err(DeckError::Parse(_))));
        assert!(matches!(parse_numeric("."), Err(DeckError::Parse(_))));
    }

    #[test]
    fn test_parse_numeric_reads_leading_number() {
        assert_relative_eq!(parse_numeric("1.2.3").unwrap(), 1.2);
        assert_relative_eq!(parse_numeric("v2.0.1 release").unwrap(), 2.0);
        assert_relative_eq!(parse_numeric(".5x").unwrap(), 0.5);
    }

    #[test]
    fn test_value_over_time() {
        let counter = CounterAnimation::new(1000.0, Duration::from_secs(2));
        assert_eq!(counter.value_at(Duration::ZERO), 0.0);
        assert_relative_eq!(counter.value_at(Duration::from_secs(1)), 875.0);
        assert_relative_eq!(counter.value_at(Duration::from_secs(2)), 1000.0);
        assert_relative_eq!(counter.value_at(Duration::from_secs(10)), 1000.0);
        assert!(!counter.is_finished(Duration::from_millis(1999)));
        assert!(counter.is_finished(Duration::from_secs(2)));
    }

    #[test]
    fn test_zero_duration_jumps_to_target() {
        let counter = CounterAnimation::new(42.0, Duration::ZERO);
        assert_eq!(counter.value_at(Duration::ZERO), 42.0);
    }

    #[test]
    fn test_render() {
        let counter = CounterAnimation::from_text("$2.5", Duration::from_secs(2)).unwrap();
        assert_eq!(counter.render_at(Duration::from_secs(2), "$", "B"), "$2.5B");
        assert_eq!(counter.render_at(Duration::ZERO, "", "%"), "0%");
    }
}
