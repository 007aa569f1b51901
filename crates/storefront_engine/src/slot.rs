use std::sync::{mpsc, Mutex, PoisonError};

use storefront_core::UiState;

/// Latest `UiState`, broadcast to every live subscriber.
#[derive(Default)]
pub struct StateSlot {
    current: Mutex<Option<UiState>>,
    subscribers: Mutex<Vec<mpsc::Sender<UiState>>>,
}

impl StateSlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Receives every state published after this call.
    pub fn subscribe(&self) -> mpsc::Receiver<UiState> {
        let (tx, rx) = mpsc::channel();
        self.subscribers
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(tx);
        rx
    }

    pub fn current(&self) -> Option<UiState> {
        self.current
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// Stores `state` and fans it out; dropped receivers are pruned.
    pub fn publish(&self, state: UiState) {
        *self.current.lock().unwrap_or_else(PoisonError::into_inner) = Some(state.clone());
        self.subscribers
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .retain(|tx| tx.send(state.clone()).is_ok());
    }
}
