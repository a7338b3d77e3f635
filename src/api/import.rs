//! CSV Batch Import Binding
//!
//! Streams the selected file as a multipart payload. The request carries
//! an abort signal fired by a parallel timer, bounding the upload at 30s.

use gloo_timers::future::TimeoutFuture;
use wasm_bindgen_futures::spawn_local;
use web_sys::{AbortController, File, FormData, RequestInit};

use super::{decode_json, request, send, ApiError};
use crate::config;
use crate::models::ImportSummary;

pub const IMPORT_TIMEOUT_MS: u32 = 30_000;

pub async fn import_csv(file: &File) -> Result<ImportSummary, ApiError> {
    let url = format!("{}/importar-csv", config::api_url());
    let form = FormData::new().map_err(ApiError::from_js)?;
    form.append_with_blob("csvFile", file)
        .map_err(ApiError::from_js)?;

    // The browser sets the multipart content type (with boundary) itself.
    let init = RequestInit::new();
    init.set_method("POST");
    init.set_body(form.as_ref());

    let controller = AbortController::new().map_err(ApiError::from_js)?;
    init.set_signal(Some(&controller.signal()));
    spawn_local(async move {
        TimeoutFuture::new(IMPORT_TIMEOUT_MS).await;
        // No-op if the fetch already settled.
        controller.abort();
    });

    let resp = send(request(&url, &init)?).await?;
    decode_json(&resp).await
}
