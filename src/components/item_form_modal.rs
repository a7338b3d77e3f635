//! Add/Edit Form Modal
//!
//! One form for both sessions; the draft lives in the store's edit
//! buffer, so field edits mutate it in place without a state transition.

use leptos::prelude::*;

use super::{format_data_cadastro, ModalShell};
use crate::controller;
use crate::models::Componente;
use crate::session::SessionStoreFields;
use crate::store::{store_close_session, use_app_store, AppStateStoreFields};

#[component]
pub fn ItemFormModal(editing: Option<Componente>) -> impl IntoView {
    let store = use_app_store();
    let is_edit = editing.is_some();
    let title = if is_edit { "✏️ Editar Componente" } else { "➕ Adicionar Novo Componente" };
    let submit_label = if is_edit { "Atualizar" } else { "Adicionar" };

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if is_edit {
            controller::update(store);
        } else {
            controller::create(store);
        }
    };

    let last_write = editing.map(|item| {
        view! {
            <div class="info-alteracao">
                <p>
                    <strong>"Última alteração: "</strong>
                    {format_data_cadastro(&item.data_cadastro)}
                </p>
            </div>
        }
    });

    view! {
        <ModalShell title=title>
            <form on:submit=on_submit>
                <div class="form-group">
                    <label for="componente">"Nome do Componente:"</label>
                    <input
                        type="text"
                        id="componente"
                        placeholder="Ex: Arduino Uno, Sensor Ultrassônico..."
                        prop:value=move || store.session().buffer().read().componente.clone()
                        on:input=move |ev| {
                            store.session().buffer().write().componente = event_target_value(&ev);
                        }
                    />
                </div>
                <div class="form-group">
                    <label for="quantidade">"Quantidade:"</label>
                    <input
                        type="number"
                        id="quantidade"
                        min="0"
                        placeholder="0"
                        prop:value=move || store.session().buffer().read().quantidade.clone()
                        on:input=move |ev| {
                            store.session().buffer().write().quantidade = event_target_value(&ev);
                        }
                    />
                </div>

                {last_write}

                <div class="modal-actions">
                    <button type="submit" class="btn btn-primary">{submit_label}</button>
                    <button
                        type="button"
                        class="btn btn-secondary"
                        on:click=move |_| store_close_session(&store)
                    >
                        "Cancelar"
                    </button>
                </div>
            </form>
        </ModalShell>
    }
}
