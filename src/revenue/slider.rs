//! User-count slider bounds

use serde::{Deserialize, Serialize};

use crate::error::{DeckError, Result};

/// Bounds and step of the user-count slider
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SliderRange {
    pub min: u64,
    pub max: u64,
    pub step: u64,
}

impl Default for SliderRange {
    fn default() -> Self {
        Self {
            min: 10_000,
            max: 200_000,
            step: 5_000,
        }
    }
}

impl SliderRange {
    pub fn new(min: u64, max: u64, step: u64) -> Result<Self> {
        let range = Self { min, max, step };
        range.validate()?;
        Ok(range)
    }

    pub fn validate(&self) -> Result<()> {
        if self.step == 0 {
            return Err(DeckError::InvalidSlider("step must be positive".to_string()));
        }
        if self.min > self.max {
            return Err(DeckError::InvalidSlider(format!(
                "min {} exceeds max {}",
                self.min, self.max
            )));
        }
        Ok(())
    }

    /// Every value the slider can take, ascending
    pub fn stops(&self) -> impl Iterator<Item = u64> {
        let step = self.step.max(1);
        (self.min..=self.max).step_by(step as usize)
    }

    /// Number of stops
    pub fn len(&self) -> usize {
        if self.step == 0 || self.min > self.max {
            return 0;
        }
        let stops = ((self.max - self.min) / self.step).saturating_add(1);
        usize::try_from(stops).unwrap_or(usize::MAX)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// True when `value` is a reachable slider position
    pub fn contains(&self, value: u64) -> bool {
        self.step != 0
            && value >= self.min
            && value <= self.max
            && (value - self.min) % self.step == 0
    }

    /// Clamp into range and round to the nearest step, ties rounding up.
    ///
    /// Mirrors how a range input sanitizes an out-of-step value. The result
    /// never exceeds the last reachable stop.
    pub fn snap(&self, value: u64) -> u64 {
        if self.step == 0 || self.min > self.max {
            return self.min;
        }
        let clamped = value.clamp(self.min, self.max);
        let offset = clamped - self.min;
        let mut steps = offset / self.step;
        // Half-way or more rounds up; compared without doubling to stay in range
        let remainder = offset % self.step;
        if remainder > 0 && remainder >= self.step - remainder {
            steps += 1;
        }
        let last = (self.max - self.min) / self.step;
        self.min + steps.min(last) * self.step
    }
}
