//! Deck configuration: screens, timing, slider and revenue assumptions
//!
//! Two decks ship as presets. Any other deck can be described in JSON;
//! missing fields take the Maple defaults.

use std::fmt;
use std::path::Path;
use std::str::FromStr;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::carousel::Screen;
use crate::error::{DeckError, Result};
use crate::revenue::{RevenueAssumptions, SliderRange};

/// Starting position of the user-count slider
pub const DEFAULT_INITIAL_USERS: u64 = 10_000;

/// Maple deck screen interval
pub const MAPLE_TICK_MS: u64 = 5_000;

/// Gauntlet deck screen interval
pub const GAUNTLET_TICK_MS: u64 = 2_500;

/// Which phone the mockup shows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PhoneMode {
    #[default]
    Retail,
    Corporate,
}

impl PhoneMode {
    pub fn label(&self) -> &'static str {
        match self {
            PhoneMode::Retail => "Retail",
            PhoneMode::Corporate => "Corporate",
        }
    }
}

impl fmt::Display for PhoneMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for PhoneMode {
    type Err = DeckError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "retail" => Ok(PhoneMode::Retail),
            "corporate" => Ok(PhoneMode::Corporate),
            other => Err(DeckError::InvalidConfig(format!("unknown phone mode: {}", other))),
        }
    }
}

/// Which product column the products section shows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProductTab {
    #[default]
    Retail,
    Institutional,
}

impl ProductTab {
    /// Tab caption, also used as the analytics label
    pub fn label(&self) -> &'static str {
        match self {
            ProductTab::Retail => "For Individuals",
            ProductTab::Institutional => "For Institutions",
        }
    }
}

impl fmt::Display for ProductTab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ProductTab {
    type Err = DeckError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "retail" => Ok(ProductTab::Retail),
            "institutional" => Ok(ProductTab::Institutional),
            other => Err(DeckError::InvalidConfig(format!("unknown product tab: {}", other))),
        }
    }
}

/// Full description of one presentation deck
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeckConfig {
    pub name: String,

    #[serde(default = "default_screens")]
    pub screens: Vec<Screen>,

    /// Carousel auto-advance interval in milliseconds
    #[serde(default = "default_tick_ms")]
    pub tick_ms: u64,

    #[serde(default)]
    pub slider: SliderRange,

    #[serde(default = "default_initial_users")]
    pub initial_users: u64,

    #[serde(default)]
    pub assumptions: RevenueAssumptions,
}

fn default_screens() -> Vec<Screen> {
    DeckConfig::maple().screens
}
fn default_tick_ms() -> u64 { MAPLE_TICK_MS }
fn default_initial_users() -> u64 { DEFAULT_INITIAL_USERS }

impl DeckConfig {
    /// Maple Finance retail banking deck
    pub fn maple() -> Self {
        Self {
            name: "maple".to_string(),
            screens: vec![
                Screen::new("card", "Card"),
                Screen::new("home", "Home"),
                Screen::new("activity", "Activity"),
                Screen::new("profile", "Profile"),
            ],
            tick_ms: MAPLE_TICK_MS,
            slider: SliderRange::default(),
            initial_users: DEFAULT_INITIAL_USERS,
            assumptions: RevenueAssumptions::default(),
        }
    }

    /// Gauntlet vaults deck
    pub fn gauntlet() -> Self {
        Self {
            name: "gauntlet".to_string(),
            screens: vec![
                Screen::new("vaults", "Vaults"),
                Screen::new("dashboard", "Dashboard"),
                Screen::new("card", "Card"),
                Screen::new("transactions", "Transactions"),
                Screen::new("profile", "Profile"),
            ],
            tick_ms: GAUNTLET_TICK_MS,
            slider: SliderRange::default(),
            initial_users: DEFAULT_INITIAL_USERS,
            assumptions: RevenueAssumptions::default(),
        }
    }

    /// Look up a built-in deck by name
    pub fn preset(name: &str) -> Result<Self> {
        match name.to_ascii_lowercase().as_str() {
            "maple" => Ok(Self::maple()),
            "gauntlet" => Ok(Self::gauntlet()),
            other => Err(DeckError::InvalidConfig(format!("unknown deck preset: {}", other))),
        }
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_json_path(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    pub fn tick_period(&self) -> Duration {
        Duration::from_millis(self.tick_ms)
    }

    pub fn validate(&self) -> Result<()> {
        if self.screens.is_empty() {
            return Err(DeckError::EmptyScreens);
        }
        if self.tick_ms == 0 {
            return Err(DeckError::InvalidConfig("tick_ms must be positive".to_string()));
        }
        self.slider.validate()?;
        if !self.slider.contains(self.initial_users) {
            return Err(DeckError::InvalidConfig(format!(
                "initial_users {} is not a slider stop",
                self.initial_users
            )));
        }
        self.assumptions.validate()
    }
}
