//! Global Application State
//!
//! Reactive state shared by every page: the demo data, display labels and
//! the toast message.

use leptos::*;

use ebook::config::DisplayConfig;
use ebook::fixtures::DemoStore;

/// How long a success toast stays up
pub const SUCCESS_TOAST_MS: u32 = 3000;

/// The toast currently on screen.
///
/// Every new message bumps the generation, so a timer started for an older
/// message cannot clear a newer one.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ToastSlot {
    generation: u64,
    message: Option<String>,
}

impl ToastSlot {
    /// Replace the message and return the generation to expire later
    pub fn show(&mut self, message: impl Into<String>) -> u64 {
        self.generation += 1;
        self.message = Some(message.into());
        self.generation
    }

    /// Clear the message if it still belongs to `generation`
    pub fn expire(&mut self, generation: u64) {
        if self.generation == generation {
            self.message = None;
        }
    }

    pub fn dismiss(&mut self) {
        self.message = None;
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
}

/// Global application state provided to all components
#[derive(Clone)]
pub struct GlobalState {
    /// Read-only demo data
    pub store: DemoStore,
    /// Labels used when rendering
    pub display: DisplayConfig,
    /// Success message (for toasts)
    pub success: RwSignal<ToastSlot>,
}

/// Provide global state to the component tree
pub fn provide_global_state() {
    let state = GlobalState {
        store: DemoStore::builtin(),
        display: DisplayConfig::default(),
        success: create_rw_signal(ToastSlot::default()),
    };

    provide_context(state);
}

impl GlobalState {
    /// Show a success message (auto-clears after timeout)
    pub fn show_success(&self, message: &str) {
        let mut generation = 0;
        self.success.update(|slot| generation = slot.show(message));

        let success_signal = self.success;
        gloo_timers::callback::Timeout::new(SUCCESS_TOAST_MS, move || {
            success_signal.update(|slot| slot.expire(generation));
        })
        .forget();
    }

    /// Dismiss the success message
    pub fn clear_success(&self) {
        self.success.update(ToastSlot::dismiss);
    }
}
