use crate::{Effect, Msg, ScreenState, TrackingEvent, UiState};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: ScreenState, msg: Msg) -> (ScreenState, Vec<Effect>) {
    let effects = match msg {
        Msg::FetchRequested { weekday } => {
            if weekday.is_closed() {
                state.set(UiState::Closed);
                Vec::new()
            } else {
                state.set(UiState::Loading);
                vec![Effect::QueryProvider]
            }
        }
        Msg::FetchCompleted(Ok(items)) => {
            let quantity = items.len();
            state.set(if items.is_empty() {
                UiState::Empty
            } else {
                UiState::Success(items)
            });
            vec![Effect::Track(TrackingEvent::success(quantity))]
        }
        Msg::FetchCompleted(Err(_)) => {
            state.set(UiState::Error);
            vec![Effect::Track(TrackingEvent::error())]
        }
    };

    (state, effects)
}
