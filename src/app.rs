//! Inventário Robótica Frontend App
//!
//! Root component: provides the store, kicks off the initial fetch and
//! selects which modal (if any) is mounted from the session state.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{ActionBar, ActionsModal, ImportModal, InventoryTable, ItemFormModal, StatusBanner};
use crate::config;
use crate::controller;
use crate::session::{SessionState, SessionStoreFields};
use crate::store::{AppState, AppStateStoreFields};

#[component]
pub fn App() -> impl IntoView {
    let store = Store::new(AppState::default());
    provide_context(store);

    // Initial load of the canonical list
    Effect::new(move |_| {
        controller::refresh(store);
    });

    view! {
        <div class="app">
            <header class="app-header">
                <div class="header-content">
                    <h1>"🤖 " {config::app_name()}</h1>
                    <p>"Controle de componentes e materiais"</p>
                </div>
            </header>

            <div class="container">
                <StatusBanner />
                <ActionBar />
                <InventoryTable />

                // Exactly one modal can be mounted; the session state is a
                // tagged union, so layered modals are unrepresentable.
                {move || match store.session().state().get() {
                    SessionState::Closed => None,
                    SessionState::Adding => {
                        Some(view! { <ItemFormModal editing=None /> }.into_any())
                    }
                    SessionState::Editing(item) => {
                        Some(view! { <ItemFormModal editing=Some(item) /> }.into_any())
                    }
                    SessionState::ChoosingActions(item) => {
                        Some(view! { <ActionsModal item=item /> }.into_any())
                    }
                    SessionState::Importing => Some(view! { <ImportModal /> }.into_any()),
                }}
            </div>
        </div>
    }
}
