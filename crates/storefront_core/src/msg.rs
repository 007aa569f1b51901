use thiserror::Error;

/// The only way a menu fetch can fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("menu fetch failed")]
pub struct FetchFailed;

pub type FetchResult = Result<Vec<String>, FetchFailed>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// Caller asked for a fresh fetch; carries the weekday observed at that moment.
    FetchRequested { weekday: crate::Weekday },
    /// Data provider answered.
    FetchCompleted(FetchResult),
}
