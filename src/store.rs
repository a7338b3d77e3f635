//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. The store is
//! the single state container; the view reads snapshots from it and all
//! writes go through the helpers below.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::Componente;
use crate::notify::StatusMessage;
use crate::session::Session;

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Canonical item list, replaced wholesale after each fetch
    pub items: Vec<Componente>,
    /// Active modal/editing context and its form draft
    pub session: Session,
    /// Transient status message, at most one
    pub message: Option<StatusMessage>,
    /// True while a CSV import request is in flight
    pub importing: bool,
    /// Bumped on every session open/close; completions captured under an
    /// older epoch must not touch session or message state
    pub session_epoch: u32,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

fn bump_epoch(store: &AppStore) {
    store.session_epoch().update(|v| *v = v.wrapping_add(1));
}

/// Epoch of the session active right now, captured at dispatch time
pub fn store_current_epoch(store: &AppStore) -> u32 {
    store.session_epoch().get_untracked()
}

pub fn store_open_adding(store: &AppStore) {
    store.session().write().open_adding();
    bump_epoch(store);
}

pub fn store_open_editing(store: &AppStore, item: Componente) {
    store.session().write().open_editing(item);
    bump_epoch(store);
}

pub fn store_open_actions(store: &AppStore, item: Componente) {
    store.session().write().open_actions(item);
    bump_epoch(store);
}

pub fn store_open_importing(store: &AppStore) {
    store.session().write().open_importing();
    bump_epoch(store);
}

pub fn store_close_session(store: &AppStore) {
    store.session().write().close();
    bump_epoch(store);
}

pub fn store_set_message(store: &AppStore, message: StatusMessage) {
    store.message().set(Some(message));
}

pub fn store_clear_message(store: &AppStore) {
    store.message().set(None);
}
