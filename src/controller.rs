//! Data Synchronization Controller
//!
//! Owns the flow between user actions and the remote service. Every
//! successful mutation funnels through `complete_mutation`, which closes
//! the session, posts the outcome and issues the trailing refresh, so the
//! canonical list is never assumed consistent without a re-fetch.

use leptos::prelude::*;
use leptos::task::spawn_local;
use web_sys::console;

use crate::api::{self, ApiError};
use crate::notify::{
    import_failure_message, import_success_message, StatusMessage, MSG_ADDED, MSG_ADD_FAILED,
    MSG_DELETED, MSG_DELETE_FAILED, MSG_LOAD_FAILED, MSG_MISSING_FIELDS, MSG_NO_FILE, MSG_UPDATED,
    MSG_UPDATE_FAILED,
};
use crate::store::{
    store_close_session, store_current_epoch, store_set_message, AppStateStoreFields, AppStore,
};

const CONFIRM_DELETE: &str = "Tem certeza que deseja excluir este componente?";

/// Re-fetch the full collection, replacing the canonical list wholesale.
/// On failure the previous list is left untouched.
pub fn refresh(store: AppStore) {
    spawn_local(async move {
        match api::list_componentes().await {
            Ok(items) => store.items().set(items),
            Err(err) => {
                log_error("carregar componentes", &err);
                store_set_message(&store, StatusMessage::new(MSG_LOAD_FAILED));
            }
        }
    });
}

/// Submit the add form. Invalid drafts never reach the network.
pub fn create(store: AppStore) {
    let Some(payload) = store.session().read_untracked().buffer.validate() else {
        store_set_message(&store, StatusMessage::new(MSG_MISSING_FIELDS));
        return;
    };
    let epoch = store_current_epoch(&store);
    spawn_local(async move {
        match api::create_componente(&payload).await {
            Ok(_) => complete_mutation(&store, epoch, StatusMessage::new(MSG_ADDED)),
            Err(err) => fail_mutation(&store, epoch, "adicionar componente", &err, MSG_ADD_FAILED),
        }
    });
}

/// Submit the edit form against the item recorded in the session.
pub fn update(store: AppStore) {
    let (id, draft) = {
        let session = store.session().read_untracked();
        match session.editing_id() {
            Some(id) => (id, session.buffer.validate()),
            None => return,
        }
    };
    let Some(payload) = draft else {
        store_set_message(&store, StatusMessage::new(MSG_MISSING_FIELDS));
        return;
    };
    let epoch = store_current_epoch(&store);
    spawn_local(async move {
        match api::update_componente(id, &payload).await {
            Ok(_) => complete_mutation(&store, epoch, StatusMessage::new(MSG_UPDATED)),
            Err(err) => fail_mutation(&store, epoch, "editar componente", &err, MSG_UPDATE_FAILED),
        }
    });
}

/// Delete an item. Gated on an interactive confirmation; declining it
/// issues no request at all.
pub fn remove(store: AppStore, id: u32) {
    if !confirm_removal() {
        return;
    }
    let epoch = store_current_epoch(&store);
    spawn_local(async move {
        match api::delete_componente(id).await {
            Ok(()) => complete_mutation(&store, epoch, StatusMessage::new(MSG_DELETED)),
            Err(err) => fail_mutation(&store, epoch, "excluir componente", &err, MSG_DELETE_FAILED),
        }
    });
}

/// Upload a CSV for batch import. Requires a selected file; the request
/// itself is bounded by the 30s abort timer inside `api::import_csv`.
pub fn import_batch(store: AppStore, file: Option<web_sys::File>) {
    let Some(file) = file else {
        store_set_message(&store, StatusMessage::new(MSG_NO_FILE));
        return;
    };
    let epoch = store_current_epoch(&store);
    store.importing().set(true);
    spawn_local(async move {
        let outcome = api::import_csv(&file).await;
        store.importing().set(false);
        match outcome {
            Ok(summary) => complete_mutation(&store, epoch, import_success_message(summary)),
            Err(err) => {
                let message = import_failure_message(&err);
                log_error("importar CSV", &err);
                if store_current_epoch(&store) == epoch {
                    store_set_message(&store, message);
                }
            }
        }
    });
}

/// Completion half of mutate-then-sync. Session and message updates are
/// skipped when the dispatching session is no longer the active one; the
/// trailing refresh still runs because wholesale list replacement is
/// always safe.
fn complete_mutation(store: &AppStore, epoch: u32, message: StatusMessage) {
    if store_current_epoch(store) == epoch {
        store_close_session(store);
        store_set_message(store, message);
    }
    refresh(*store);
}

/// Failure half: session stays open so the user can correct and retry.
fn fail_mutation(store: &AppStore, epoch: u32, context: &str, err: &ApiError, message: &str) {
    log_error(context, err);
    if store_current_epoch(store) == epoch {
        store_set_message(store, StatusMessage::new(message));
    }
}

fn confirm_removal() -> bool {
    web_sys::window()
        .and_then(|w| w.confirm_with_message(CONFIRM_DELETE).ok())
        .unwrap_or(false)
}

fn log_error(context: &str, err: &ApiError) {
    console::error_1(&format!("Erro ao {context}: {err}").into());
}
