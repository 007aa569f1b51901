//! Storefront engine: collaborators and the controller that runs core effects.
mod clock;
mod controller;
mod provider;
mod slot;
mod tracker;

pub use clock::{ClockSource, FixedClock, FixedDateClock, SystemClock};
pub use controller::ViewStateController;
pub use provider::{AsyncDataProvider, DataProvider, StaticMenuProvider, DEFAULT_MENU};
pub use slot::StateSlot;
pub use tracker::{EventTracker, LogTracker, NullTracker, TrackError};
