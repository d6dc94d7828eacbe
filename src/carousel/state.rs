//! Carousel state machine without any timing

use serde::{Deserialize, Serialize};

use crate::error::{DeckError, Result};

/// One phone screen in the mockup
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Screen {
    pub id: String,
    pub title: String,
}

impl Screen {
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
        }
    }
}

/// Whether the carousel advances on its own
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Playback {
    Running,
    Paused,
}

/// Published view of the carousel, sent to subscribers on every change
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CarouselSnapshot {
    pub active_index: usize,
    pub screen_id: String,
    pub playback: Playback,
}

#[derive(Debug, Clone)]
pub struct CarouselState {
    screens: Vec<Screen>,
    active_index: usize,
    playback: Playback,
}

impl CarouselState {
    /// Start on the first screen with auto-advance enabled
    pub fn new(screens: Vec<Screen>) -> Result<Self> {
        if screens.is_empty() {
            return Err(DeckError::EmptyScreens);
        }
        Ok(Self {
            screens,
            active_index: 0,
            playback: Playback::Running,
        })
    }

    pub fn screens(&self) -> &[Screen] {
        &self.screens
    }

    pub fn len(&self) -> usize {
        self.screens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.screens.is_empty()
    }

    pub fn active_index(&self) -> usize {
        self.active_index
    }

    pub fn active_screen(&self) -> &Screen {
        &self.screens[self.active_index]
    }

    pub fn playback(&self) -> Playback {
        self.playback
    }

    pub fn is_running(&self) -> bool {
        self.playback == Playback::Running
    }

    /// Move to the next screen, wrapping after the last
    pub fn advance(&mut self) -> usize {
        self.active_index = (self.active_index + 1) % self.screens.len();
        self.active_index
    }

    /// Jump to `index` and stop auto-advance
    pub fn select(&mut self, index: usize) -> Result<&Screen> {
        if index >= self.screens.len() {
            return Err(DeckError::ScreenOutOfRange {
                index,
                len: self.screens.len(),
            });
        }
        self.active_index = index;
        self.playback = Playback::Paused;
        Ok(&self.screens[index])
    }

    pub fn pause(&mut self) {
        self.playback = Playback::Paused;
    }

    pub fn resume(&mut self) {
        self.playback = Playback::Running;
    }

    pub fn snapshot(&self) -> CarouselSnapshot {
        CarouselSnapshot {
            active_index: self.active_index,
            screen_id: self.active_screen().id.clone(),
            playback: self.playback,
        }
    }
}
