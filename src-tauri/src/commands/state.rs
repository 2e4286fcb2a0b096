//! Managed state and event emission for the command layer.

use std::sync::{Mutex, MutexGuard};

use serde::Serialize;
use tauri::{AppHandle, Emitter};

use crate::core::{FontViewer, StateChange, StateObserver, ViewerError, ViewerResult, ViewerSnapshot};

/// Event emitted after every state mutation.
pub const STATE_CHANGED_EVENT: &str = "font-viewer-state-changed";

/// The single application state, shared by all command handlers.
///
/// Every command takes the lock for the duration of its state access, so
/// mutations are serialized as if they ran on one event thread.
pub struct ViewerState(Mutex<FontViewer>);

impl ViewerState {
    pub fn new(viewer: FontViewer) -> Self {
        Self(Mutex::new(viewer))
    }

    pub fn lock(&self) -> ViewerResult<MutexGuard<'_, FontViewer>> {
        self.0
            .lock()
            .map_err(|e| ViewerError::StateUnavailable(e.to_string()))
    }
}

/// Payload of [`STATE_CHANGED_EVENT`].
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
struct StateChangedPayload<'a> {
    change: StateChange,
    snapshot: &'a ViewerSnapshot,
}

/// Forwards viewer notifications to the webview.
pub struct EventEmitter {
    app: AppHandle,
}

impl EventEmitter {
    pub fn new(app: AppHandle) -> Self {
        Self { app }
    }
}

impl StateObserver for EventEmitter {
    fn state_changed(&self, change: StateChange, snapshot: &ViewerSnapshot) {
        let payload = StateChangedPayload { change, snapshot };
        if let Err(e) = self.app.emit(STATE_CHANGED_EVENT, &payload) {
            log::warn!("Failed to emit {} event: {}", STATE_CHANGED_EVENT, e);
        }
    }
}
