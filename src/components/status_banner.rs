//! Status Banner Component
//!
//! Shows the single transient status message; a click dismisses it
//! unconditionally.

use leptos::prelude::*;

use crate::store::{store_clear_message, use_app_store, AppStateStoreFields};

#[component]
pub fn StatusBanner() -> impl IntoView {
    let store = use_app_store();

    view! {
        {move || {
            store.message().get().map(|msg| {
                let class = if msg.is_error() { "mensagem erro" } else { "mensagem sucesso" };
                view! {
                    <div class=class on:click=move |_| store_clear_message(&store)>
                        {msg.text().to_string()}
                        " "
                        <span class="fechar">"×"</span>
                    </div>
                }
            })
        }}
    }
}
