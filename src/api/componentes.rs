//! Componente CRUD Bindings

use wasm_bindgen::JsValue;
use web_sys::{Headers, RequestInit};

use super::{decode_json, request, send, ApiError};
use crate::config;
use crate::models::{Componente, ComponentePayload, ListEnvelope};

fn json_init(method: &str, payload: &ComponentePayload) -> Result<RequestInit, ApiError> {
    let body = serde_json::to_string(payload).map_err(|e| ApiError::Decode(e.to_string()))?;
    let headers = Headers::new().map_err(ApiError::from_js)?;
    headers
        .append("Content-Type", "application/json")
        .map_err(ApiError::from_js)?;
    let init = RequestInit::new();
    init.set_method(method);
    init.set_headers(headers.as_ref());
    init.set_body(&JsValue::from_str(&body));
    Ok(init)
}

pub async fn list_componentes() -> Result<Vec<Componente>, ApiError> {
    let url = format!("{}/componentes", config::api_url());
    let init = RequestInit::new();
    init.set_method("GET");
    let resp = send(request(&url, &init)?).await?;
    let envelope: ListEnvelope = decode_json(&resp).await?;
    Ok(envelope.data)
}

pub async fn create_componente(payload: &ComponentePayload) -> Result<Componente, ApiError> {
    let url = format!("{}/componentes", config::api_url());
    let init = json_init("POST", payload)?;
    let resp = send(request(&url, &init)?).await?;
    decode_json(&resp).await
}

pub async fn update_componente(id: u32, payload: &ComponentePayload) -> Result<Componente, ApiError> {
    let url = format!("{}/componentes/{id}", config::api_url());
    let init = json_init("PUT", payload)?;
    let resp = send(request(&url, &init)?).await?;
    decode_json(&resp).await
}

pub async fn delete_componente(id: u32) -> Result<(), ApiError> {
    let url = format!("{}/componentes/{id}", config::api_url());
    let init = RequestInit::new();
    init.set_method("DELETE");
    send(request(&url, &init)?).await?;
    Ok(())
}
