//! View Components
//!
//! Presentation layer over the store; no state of its own beyond
//! per-component form plumbing.

mod action_bar;
mod actions_modal;
mod import_modal;
mod inventory_table;
mod item_form_modal;
mod modal;
mod status_banner;

pub use action_bar::ActionBar;
pub use actions_modal::ActionsModal;
pub use import_modal::ImportModal;
pub use inventory_table::InventoryTable;
pub use item_form_modal::ItemFormModal;
pub use modal::ModalShell;
pub use status_banner::StatusBanner;

use wasm_bindgen::JsValue;

/// Render a service timestamp in the pt-BR locale.
pub fn format_data_cadastro(raw: &str) -> String {
    let date = js_sys::Date::new(&JsValue::from_str(raw));
    String::from(date.to_locale_string("pt-BR", &JsValue::UNDEFINED))
}

/// Stock-level styling suffix: empty, running low (< 5), or normal.
pub fn quantity_level(quantidade: u32) -> &'static str {
    match quantidade {
        0 => "zero",
        1..=4 => "baixa",
        _ => "",
    }
}
