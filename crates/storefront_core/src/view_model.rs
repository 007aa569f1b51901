use crate::{Locale, UiState};

/// Everything the presentation layer needs to draw the screen.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ScreenView {
    pub state: Option<UiState>,
    pub items: Vec<String>,
    pub notice: Option<&'static str>,
}

impl ScreenView {
    /// View of a single published state, as a subscriber receives it.
    pub fn of(state: UiState, locale: Locale) -> Self {
        let notice = notice_for(&state, locale);
        let items = match &state {
            UiState::Success(items) => items.clone(),
            _ => Vec::new(),
        };
        Self {
            state: Some(state),
            items,
            notice,
        }
    }
}

fn notice_for(state: &UiState, locale: Locale) -> Option<&'static str> {
    let text = match (locale, state) {
        (_, UiState::Success(_)) => return None,
        (Locale::English, UiState::Loading) => "Loading menu...",
        (Locale::English, UiState::Empty) => "No items available",
        (Locale::English, UiState::Error) => "Could not load the menu",
        (Locale::English, UiState::Closed) => "We are closed today",
        (Locale::Portuguese, UiState::Loading) => "Carregando cardápio...",
        (Locale::Portuguese, UiState::Empty) => "Nenhum item disponível",
        (Locale::Portuguese, UiState::Error) => "Não foi possível carregar o cardápio",
        (Locale::Portuguese, UiState::Closed) => "Estamos fechados hoje",
    };
    Some(text)
}
