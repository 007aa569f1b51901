use std::sync::Once;

use storefront_core::{
    update, Effect, FetchFailed, Msg, ScreenState, TrackingEvent, UiState, Weekday, TRACKING_USER,
};

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(storefront_logging::initialize_for_tests);
}

fn request(state: ScreenState, weekday: Weekday) -> (ScreenState, Vec<Effect>) {
    update(state, Msg::FetchRequested { weekday })
}

fn items(names: &[&str]) -> Vec<String> {
    names.iter().map(|name| name.to_string()).collect()
}

#[test]
fn sunday_request_closes_without_effects() {
    init_logging();
    let (mut state, effects) = request(ScreenState::new(), Weekday::Sunday);

    assert_eq!(state.current(), Some(&UiState::Closed));
    assert!(effects.is_empty());
    assert!(state.consume_dirty());
    assert!(!state.consume_dirty());
}

#[test]
fn weekday_request_goes_loading_and_queries_provider() {
    init_logging();
    for weekday in Weekday::ALL.into_iter().filter(|d| *d != Weekday::Sunday) {
        let (state, effects) = request(ScreenState::new(), weekday);
        assert_eq!(state.current(), Some(&UiState::Loading), "{weekday:?}");
        assert_eq!(effects, vec![Effect::QueryProvider]);
    }
}

#[test]
fn items_map_to_success_and_track_quantity() {
    init_logging();
    let (state, _) = request(ScreenState::new(), Weekday::Wednesday);
    let (state, effects) = update(
        state,
        Msg::FetchCompleted(Ok(items(&["X-Salada", "Coca-Cola"]))),
    );

    assert_eq!(
        state.current(),
        Some(&UiState::Success(items(&["X-Salada", "Coca-Cola"])))
    );
    assert_eq!(effects, vec![Effect::Track(TrackingEvent::success(2))]);

    let Effect::Track(event) = &effects[0] else {
        panic!("expected a tracking effect");
    };
    assert_eq!(event.get("status"), Some("success"));
    assert_eq!(event.get("user"), Some(TRACKING_USER));
    assert_eq!(event.get("quantity"), Some("2"));
    assert_eq!(event.len(), 3);
}

#[test]
fn empty_items_map_to_empty_never_success() {
    init_logging();
    let (state, _) = request(ScreenState::new(), Weekday::Monday);
    let (state, effects) = update(state, Msg::FetchCompleted(Ok(Vec::new())));

    assert_eq!(state.current(), Some(&UiState::Empty));
    let Effect::Track(event) = &effects[0] else {
        panic!("expected a tracking effect");
    };
    assert_eq!(event.get("status"), Some("success"));
    assert_eq!(event.get("quantity"), Some("0"));
}

#[test]
fn failure_maps_to_error_with_status_only() {
    init_logging();
    let (state, _) = request(ScreenState::new(), Weekday::Friday);
    let (state, effects) = update(state, Msg::FetchCompleted(Err(FetchFailed)));

    assert_eq!(state.current(), Some(&UiState::Error));
    assert_eq!(effects.len(), 1);
    let Effect::Track(event) = &effects[0] else {
        panic!("expected a tracking effect");
    };
    assert_eq!(event.get("status"), Some("error"));
    assert_eq!(event.len(), 1);
}

#[test]
fn repeated_loading_is_still_a_transition() {
    init_logging();
    let (mut state, _) = request(ScreenState::new(), Weekday::Tuesday);
    assert!(state.consume_dirty());

    let (mut state, _) = request(state, Weekday::Tuesday);
    assert_eq!(state.current(), Some(&UiState::Loading));
    assert!(state.consume_dirty());
}

#[test]
fn closed_replaces_previous_terminal_state() {
    init_logging();
    let (state, _) = request(ScreenState::new(), Weekday::Thursday);
    let (state, _) = update(state, Msg::FetchCompleted(Ok(items(&["Suco"]))));
    let (state, effects) = request(state, Weekday::Sunday);

    assert_eq!(state.current(), Some(&UiState::Closed));
    assert!(effects.is_empty());
}
