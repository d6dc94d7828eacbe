//! Auto-advancing screen carousel driven by a tokio interval
//!
//! All mutations go through one lock. Each timer carries the generation it
//! was started under, and a tick only applies while that generation is still
//! current and playback is running. `select` and `stop` bump the generation
//! under the lock, so a tick that already fired but has not yet taken the
//! lock can never overwrite a user's choice.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError, Weak};
use std::time::Duration;

use log::{debug, info};
use tokio::runtime::Handle;
use tokio::sync::watch;
use tokio::time::{interval_at, Instant, MissedTickBehavior};

use super::state::{CarouselSnapshot, CarouselState, Playback, Screen};
use super::timer::TickHandle;
use crate::error::{DeckError, Result};

struct Core {
    state: CarouselState,
    generation: u64,
    timer: Option<TickHandle>,
}

impl Core {
    /// Invalidate any pending tick and abort the running timer
    fn cancel_timer(&mut self) {
        self.generation = self.generation.wrapping_add(1);
        if let Some(mut timer) = self.timer.take() {
            timer.cancel();
        }
    }
}

struct Inner {
    core: Mutex<Core>,
    updates: watch::Sender<CarouselSnapshot>,
}

impl Inner {
    fn lock(&self) -> MutexGuard<'_, Core> {
        self.core.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn publish(&self, core: &Core) {
        // No receivers is fine
        self.updates.send_replace(core.state.snapshot());
    }

    /// Apply one timer tick. Returns false when the timer is stale.
    fn apply_tick(&self, generation: u64) -> bool {
        let mut core = self.lock();
        if core.generation != generation || !core.state.is_running() {
            return false;
        }
        let index = core.state.advance();
        debug!("carousel auto-advanced to screen {}", index);
        self.publish(&core);
        true
    }
}

/// Phone-screen carousel with timer-driven auto-advance
pub struct ScreenCarousel {
    inner: Arc<Inner>,
    tick_period: Duration,
}

impl ScreenCarousel {
    /// Build a carousel on the first screen without starting its timer
    pub fn new(screens: Vec<Screen>, tick_period: Duration) -> Result<Self> {
        if tick_period.is_zero() {
            return Err(DeckError::InvalidConfig(
                "carousel tick period must be positive".to_string(),
            ));
        }
        let mut state = CarouselState::new(screens)?;
        state.pause();

        let (updates, _) = watch::channel(state.snapshot());
        let inner = Arc::new(Inner {
            core: Mutex::new(Core {
                state,
                generation: 0,
                timer: None,
            }),
            updates,
        });

        Ok(Self { inner, tick_period })
    }

    /// Build a carousel and start auto-advance, as on first render
    pub fn mount(screens: Vec<Screen>, tick_period: Duration) -> Result<Self> {
        let carousel = Self::new(screens, tick_period)?;
        carousel.start()?;
        info!(
            "carousel mounted with {} screens, advancing every {:?}",
            carousel.len(),
            tick_period
        );
        Ok(carousel)
    }

    pub fn tick_period(&self) -> Duration {
        self.tick_period
    }

    pub fn len(&self) -> usize {
        self.inner.lock().state.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.lock().state.is_empty()
    }

    pub fn screens(&self) -> Vec<Screen> {
        self.inner.lock().state.screens().to_vec()
    }

    pub fn active_index(&self) -> usize {
        self.inner.lock().state.active_index()
    }

    pub fn playback(&self) -> Playback {
        self.inner.lock().state.playback()
    }

    pub fn snapshot(&self) -> CarouselSnapshot {
        self.inner.lock().state.snapshot()
    }

    /// Receive a snapshot after every state change
    pub fn subscribe(&self) -> watch::Receiver<CarouselSnapshot> {
        self.inner.updates.subscribe()
    }

    /// Step to the next screen without touching playback
    pub fn advance(&self) -> usize {
        let mut core = self.inner.lock();
        let index = core.state.advance();
        self.inner.publish(&core);
        index
    }

    /// Show screen `index` and stop auto-advance until `start` is called.
    ///
    /// An out-of-range index is rejected and leaves the carousel untouched.
    pub fn select(&self, index: usize) -> Result<Screen> {
        let mut core = self.inner.lock();
        let len = core.state.len();
        if index >= len {
            return Err(DeckError::ScreenOutOfRange { index, len });
        }

        core.cancel_timer();
        let screen = core.state.select(index)?.clone();
        debug!("carousel screen {} ({}) selected, auto-advance off", index, screen.id);
        self.inner.publish(&core);
        Ok(screen)
    }

    /// Cancel auto-advance, keeping the current screen
    pub fn stop(&self) {
        let mut core = self.inner.lock();
        core.cancel_timer();
        core.state.pause();
        debug!("carousel stopped on screen {}", core.state.active_index());
        self.inner.publish(&core);
    }

    /// Resume auto-advance with a fresh interval window
    pub fn start(&self) -> Result<()> {
        let runtime = Handle::try_current().map_err(|_| DeckError::NoRuntime)?;

        let mut core = self.inner.lock();
        core.cancel_timer();
        core.state.resume();

        let generation = core.generation;
        let period = self.tick_period;
        let first_tick = Instant::now() + period;
        let weak: Weak<Inner> = Arc::downgrade(&self.inner);

        let task = runtime.spawn(async move {
            let mut ticks = interval_at(first_tick, period);
            ticks.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                ticks.tick().await;
                let Some(inner) = weak.upgrade() else {
                    break;
                };
                if !inner.apply_tick(generation) {
                    break;
                }
            }
        });

        core.timer = Some(TickHandle::new(task));
        debug!("carousel auto-advance started (generation {})", generation);
        self.inner.publish(&core);
        Ok(())
    }
}

impl Drop for ScreenCarousel {
    fn drop(&mut self) {
        let mut core = self.inner.lock();
        if let Some(timer) = &core.timer {
            debug!("carousel dropped, timer already finished: {}", timer.is_finished());
        }
        core.cancel_timer();
    }
}
