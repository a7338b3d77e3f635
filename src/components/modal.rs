//! Shared Modal Shell
//!
//! Overlay plus header chrome. Clicking the overlay or the × dismisses
//! the active session; clicks inside the dialog are stopped so they do
//! not bubble into the overlay handler.

use leptos::prelude::*;

use crate::store::{store_close_session, use_app_store};

#[component]
pub fn ModalShell(
    #[prop(into)] title: String,
    #[prop(optional)] wide: bool,
    children: Children,
) -> impl IntoView {
    let store = use_app_store();
    let dialog_class = if wide { "modal modal-wide" } else { "modal" };

    view! {
        <div class="modal-overlay" on:click=move |_| store_close_session(&store)>
            <div class=dialog_class on:click=|ev| ev.stop_propagation()>
                <div class="modal-header">
                    <h3>{title}</h3>
                    <button class="btn-fechar" on:click=move |_| store_close_session(&store)>
                        "×"
                    </button>
                </div>
                <div class="modal-body">{children()}</div>
            </div>
        </div>
    }
}
