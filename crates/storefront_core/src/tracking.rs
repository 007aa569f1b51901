use std::collections::BTreeMap;

use serde::Serialize;

/// User recorded on every successful fetch.
pub const TRACKING_USER: &str = "luke skywalker";

const STATUS: &str = "status";
const USER: &str = "user";
const QUANTITY: &str = "quantity";

/// Flat key/value record sent to the analytics sink.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(transparent)]
pub struct TrackingEvent {
    fields: BTreeMap<String, String>,
}

impl TrackingEvent {
    pub fn success(quantity: usize) -> Self {
        let mut event = Self::default();
        event.insert(STATUS, "success");
        event.insert(USER, TRACKING_USER);
        event.insert(QUANTITY, quantity.to_string());
        event
    }

    pub fn error() -> Self {
        let mut event = Self::default();
        event.insert(STATUS, "error");
        event
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    fn insert(&mut self, key: &str, value: impl Into<String>) {
        self.fields.insert(key.to_owned(), value.into());
    }
}
