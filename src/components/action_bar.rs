//! Action Bar Component

use leptos::prelude::*;

use crate::store::{store_open_adding, store_open_importing, use_app_store};

#[component]
pub fn ActionBar() -> impl IntoView {
    let store = use_app_store();

    view! {
        <div class="barra-acoes">
            <button class="btn btn-primary" on:click=move |_| store_open_adding(&store)>
                "➕ Adicionar Componente"
            </button>
            <button class="btn btn-success" on:click=move |_| store_open_importing(&store)>
                "📁 Importar CSV"
            </button>
        </div>
    }
}
