//! Inventory Table Component
//!
//! Canonical list rendering: item count badge, empty state, quantity
//! badges, desktop row actions, and tap-to-open action sheet on the name
//! cell for the compact presentation.

use leptos::prelude::*;

use super::quantity_level;
use crate::controller;
use crate::models::Componente;
use crate::store::{store_open_actions, store_open_editing, use_app_store, AppStateStoreFields};

#[component]
pub fn InventoryTable() -> impl IntoView {
    let store = use_app_store();

    view! {
        <div class="painel-inventario">
            <div class="painel-header">
                <h2>"📦 Inventário Atual"</h2>
                <span class="badge">{move || store.items().get().len()} " itens"</span>
            </div>

            <Show
                when=move || store.items().read().is_empty()
                fallback=move || {
                    view! {
                        <div class="tabela-container">
                            <table class="tabela-inventario">
                                <thead>
                                    <tr>
                                        <th>"Componente"</th>
                                        <th>"Quantidade"</th>
                                        <th class="acoes-header desktop-only">"Ações"</th>
                                    </tr>
                                </thead>
                                <tbody>
                                    <For
                                        each=move || store.items().get()
                                        key=|item| item.id
                                        children=move |item: Componente| {
                                            view! { <ItemRow item=item /> }
                                        }
                                    />
                                </tbody>
                            </table>
                        </div>
                    }
                }
            >
                <div class="vazio">
                    <div class="vazio-icon">"📋"</div>
                    <h3>"Nenhum componente cadastrado"</h3>
                    <p>"Comece adicionando um componente manualmente ou importando um CSV."</p>
                </div>
            </Show>
        </div>
    }
}

#[component]
fn ItemRow(item: Componente) -> impl IntoView {
    let store = use_app_store();
    let id = item.id;
    let quantidade = item.quantidade;
    let badge_class = format!("quantidade-badge {}", quantity_level(quantidade));
    let open_item = item.clone();
    let edit_item = item.clone();

    view! {
        <tr>
            <td
                class="componente-nome clickable"
                on:click=move |_| store_open_actions(&store, open_item.clone())
            >
                {item.componente.clone()}
            </td>
            <td class="quantidade">
                <span class=badge_class>{quantidade}</span>
            </td>
            <td class="acoes desktop-only">
                <button
                    class="btn btn-editar"
                    title="Editar"
                    on:click=move |_| store_open_editing(&store, edit_item.clone())
                >
                    "✏️"
                </button>
                <button
                    class="btn btn-excluir"
                    title="Excluir"
                    on:click=move |_| controller::remove(store, id)
                >
                    "🗑️"
                </button>
            </td>
        </tr>
    }
}
