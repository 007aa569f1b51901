use storefront_core::TrackingEvent;
use storefront_logging::store_info;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TrackError {
    #[error("failed to encode tracking event: {0}")]
    Encode(#[from] serde_json::Error),
    #[error("tracking sink unavailable: {0}")]
    Unavailable(String),
}

/// Analytics sink. Errors are reported but never affect screen state.
pub trait EventTracker: Send + Sync {
    fn track(&self, event: TrackingEvent) -> Result<(), TrackError>;
}

/// Writes each event as a single JSON line to the log.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogTracker;

impl EventTracker for LogTracker {
    fn track(&self, event: TrackingEvent) -> Result<(), TrackError> {
        let line = serde_json::to_string(&event)?;
        store_info!("track {}", line);
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct NullTracker;

impl EventTracker for NullTracker {
    fn track(&self, _event: TrackingEvent) -> Result<(), TrackError> {
        Ok(())
    }
}
