//! Per-item Action Sheet
//!
//! Opened by tapping an item row in the compact presentation; offers
//! edit, delete and back. Delete closes the sheet first, then runs the
//! confirmation-gated removal, as the full-size row actions do.

use leptos::prelude::*;

use super::{format_data_cadastro, quantity_level, ModalShell};
use crate::controller;
use crate::models::Componente;
use crate::store::{store_close_session, store_open_editing, use_app_store};

#[component]
pub fn ActionsModal(item: Componente) -> impl IntoView {
    let store = use_app_store();
    let id = item.id;
    let title = format!("🔧 {}", item.componente);
    let value_class = format!("info-value {}", quantity_level(item.quantidade));
    let cadastro = format_data_cadastro(&item.data_cadastro);
    let quantidade = item.quantidade;
    let edit_item = item.clone();

    view! {
        <ModalShell title=title>
            <div class="info-componente">
                <div class="info-item">
                    <span class="info-label">"Quantidade:"</span>
                    <span class=value_class>{quantidade}</span>
                </div>
                <div class="info-item">
                    <span class="info-label">"Cadastrado em:"</span>
                    <span class="info-value">{cadastro}</span>
                </div>
            </div>

            <div class="acoes-mobile">
                <button
                    class="btn btn-primary btn-large"
                    on:click=move |_| store_open_editing(&store, edit_item.clone())
                >
                    "✏️ Editar Componente"
                </button>
                <button
                    class="btn btn-excluir btn-large"
                    on:click=move |_| {
                        store_close_session(&store);
                        controller::remove(store, id);
                    }
                >
                    "🗑️ Excluir Componente"
                </button>
                <button
                    class="btn btn-secondary btn-large"
                    on:click=move |_| store_close_session(&store)
                >
                    "↩️ Voltar"
                </button>
            </div>
        </ModalShell>
    }
}
