use crate::schedule::Locale;
use crate::view_model::ScreenView;

/// What the screen is currently showing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiState {
    Loading,
    /// Always holds at least one item; an empty list maps to `Empty`.
    Success(Vec<String>),
    Empty,
    Error,
    Closed,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ScreenState {
    current: Option<UiState>,
    locale: Locale,
    dirty: bool,
}

impl ScreenState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_locale(locale: Locale) -> Self {
        Self {
            locale,
            ..Self::default()
        }
    }

    pub fn current(&self) -> Option<&UiState> {
        self.current.as_ref()
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    /// Changes only the text language; not a transition.
    pub fn set_locale(&mut self, locale: Locale) {
        self.locale = locale;
    }

    pub fn view(&self) -> ScreenView {
        match &self.current {
            Some(state) => ScreenView::of(state.clone(), self.locale),
            None => ScreenView::default(),
        }
    }

    /// Returns whether a transition happened since the last call, and clears the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn set(&mut self, next: UiState) {
        self.current = Some(next);
        self.dirty = true;
    }
}
