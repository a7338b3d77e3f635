//! CSV Import Modal
//!
//! File selection is local to this component; when the modal unmounts the
//! handle is dropped, so a reopened dialog always starts empty.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

use super::ModalShell;
use crate::controller;
use crate::store::{store_close_session, use_app_store, AppStateStoreFields};

const CSV_EXAMPLE: &str = "Componente,Quantidade\nArduino Uno,15\nSensor Ultrassônico,25\nLED Vermelho,100";

#[component]
pub fn ImportModal() -> impl IntoView {
    let store = use_app_store();
    let csv_file = RwSignal::new_local(None::<web_sys::File>);

    let on_change = move |ev: web_sys::Event| {
        let target = ev.target().unwrap();
        let input: web_sys::HtmlInputElement = target.unchecked_into();
        csv_file.set(input.files().and_then(|files| files.get(0)));
    };

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        controller::import_batch(store, csv_file.get_untracked());
    };

    let submit_disabled = move || store.importing().get() || csv_file.read().is_none();

    view! {
        <ModalShell title="📁 Importar Componentes via CSV" wide=true>
            <div class="info-csv">
                <h4>"📋 Formato do CSV:"</h4>
                <ul>
                    <li><strong>"Coluna 1: "</strong>"Componente (nome do item)"</li>
                    <li><strong>"Coluna 2: "</strong>"Quantidade (número)"</li>
                    <li><strong>"Formato esperado:"</strong></li>
                </ul>
                <div class="csv-example">
                    <pre>{CSV_EXAMPLE}</pre>
                </div>
            </div>

            <form on:submit=on_submit>
                <div class="form-group">
                    <label for="csvFile" class="file-label">
                        <div class="file-upload-area">
                            {move || match csv_file.get() {
                                Some(file) => view! {
                                    <div class="file-selected">"✅"</div>
                                    <div class="file-info">
                                        <strong>{file.name()}</strong>
                                        <span>{format!("{:.2} KB", file.size() / 1024.0)}</span>
                                    </div>
                                }.into_any(),
                                None => view! {
                                    <div class="file-placeholder">"📁"</div>
                                    <div class="file-instructions">
                                        <strong>"Clique para selecionar o arquivo"</strong>
                                        <span>"ou arraste e solte aqui"</span>
                                    </div>
                                }.into_any(),
                            }}
                        </div>
                        <input
                            type="file"
                            id="csvFile"
                            accept=".csv,text/csv"
                            class="file-input-hidden"
                            on:change=on_change
                        />
                    </label>
                </div>

                <div class="modal-actions">
                    <button type="submit" class="btn btn-success" disabled=submit_disabled>
                        {move || if store.importing().get() {
                            view! { <span class="spinner"></span> "Importando..." }.into_any()
                        } else {
                            view! { "🚀 Importar CSV" }.into_any()
                        }}
                    </button>
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
