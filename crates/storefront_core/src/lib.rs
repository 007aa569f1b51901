//! Storefront core: pure screen state machine, tracking events and opening hours.
mod effect;
mod msg;
mod schedule;
mod state;
mod tracking;
mod update;
mod view_model;

pub use effect::Effect;
pub use msg::{FetchFailed, FetchResult, Msg};
pub use schedule::{opening_info, Locale, Weekday};
pub use state::{ScreenState, UiState};
pub use tracking::{TrackingEvent, TRACKING_USER};
pub use update::update;
pub use view_model::ScreenView;
