use std::sync::{mpsc, Mutex, PoisonError};

use storefront_core::{
    opening_info, update, Effect, FetchResult, Locale, Msg, ScreenState, ScreenView, UiState,
};
use storefront_logging::{store_debug, store_info, store_warn};

use crate::{AsyncDataProvider, ClockSource, DataProvider, EventTracker, StateSlot};

/// Drives the screen state machine against injected collaborators and
/// publishes every transition through a [`StateSlot`].
pub struct ViewStateController<P, C, T> {
    provider: P,
    clock: C,
    tracker: T,
    screen: Mutex<ScreenState>,
    slot: StateSlot,
}

impl<P, C, T> ViewStateController<P, C, T>
where
    C: ClockSource,
    T: EventTracker,
{
    pub fn new(provider: P, clock: C, tracker: T) -> Self {
        Self {
            provider,
            clock,
            tracker,
            screen: Mutex::new(ScreenState::new()),
            slot: StateSlot::new(),
        }
    }

    /// Switches the text language; the current state is kept.
    pub fn with_locale(mut self, locale: Locale) -> Self {
        self.screen
            .get_mut()
            .unwrap_or_else(PoisonError::into_inner)
            .set_locale(locale);
        self
    }

    pub fn subscribe(&self) -> mpsc::Receiver<UiState> {
        self.slot.subscribe()
    }

    pub fn current_state(&self) -> Option<UiState> {
        self.slot.current()
    }

    pub fn view(&self) -> ScreenView {
        self.screen().view()
    }

    /// Opening hours for today. Reads the clock only; no state change, no tracking.
    pub fn opening_info(&self) -> &'static str {
        let locale = self.screen().locale();
        opening_info(self.clock.now(), locale)
    }

    fn screen(&self) -> std::sync::MutexGuard<'_, ScreenState> {
        self.screen.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Publishes `Closed` or `Loading`; returns whether the provider must be queried.
    fn begin(&self) -> bool {
        let weekday = self.clock.now();
        store_debug!("fetch requested weekday={:?}", weekday);
        let query = self.dispatch(Msg::FetchRequested { weekday });
        if !query {
            store_info!("store closed on {:?}; skipping fetch", weekday);
        }
        query
    }

    fn resolve(&self, result: FetchResult) {
        match &result {
            Ok(items) => store_info!("menu fetched items={}", items.len()),
            Err(err) => store_info!("menu fetch resolved with error: {}", err),
        }
        self.dispatch(Msg::FetchCompleted(result));
    }

    fn dispatch(&self, msg: Msg) -> bool {
        let effects = {
            let mut guard = self.screen();
            let (mut next, effects) = update(std::mem::take(&mut *guard), msg);
            if next.consume_dirty() {
                if let Some(state) = next.current() {
                    self.slot.publish(state.clone());
                }
            }
            *guard = next;
            effects
        };
        self.run_effects(effects)
    }

    fn run_effects(&self, effects: Vec<Effect>) -> bool {
        let mut query = false;
        for effect in effects {
            match effect {
                Effect::QueryProvider => query = true,
                Effect::Track(event) => {
                    if let Err(err) = self.tracker.track(event) {
                        store_warn!("tracking failed: {}", err);
                    }
                }
            }
        }
        query
    }
}

impl<P, C, T> ViewStateController<P, C, T>
where
    P: DataProvider,
    C: ClockSource,
    T: EventTracker,
{
    pub fn fetch(&self) {
        if self.begin() {
            let result = self.provider.fetch_data();
            self.resolve(result);
        }
    }
}

impl<P, C, T> ViewStateController<P, C, T>
where
    P: AsyncDataProvider,
    C: ClockSource,
    T: EventTracker,
{
    /// Same sequence as [`fetch`](Self::fetch); `Loading` is published before the provider is awaited.
    pub async fn fetch_async(&self) {
        if self.begin() {
            let result = self.provider.fetch_data().await;
            self.resolve(result);
        }
    }
}
