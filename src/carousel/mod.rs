//! Phone-mockup screen carousel

mod state;
mod timer;
mod controller;

pub use state::{CarouselSnapshot, CarouselState, Playback, Screen};
pub use timer::TickHandle;
pub use controller::ScreenCarousel;
