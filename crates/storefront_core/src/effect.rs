use crate::TrackingEvent;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Ask the data provider for the menu items.
    QueryProvider,
    /// Hand an analytics record to the event tracker.
    Track(TrackingEvent),
}
