//! Inventory Service Bindings
//!
//! Fetch wrappers around the remote REST API, organized by concern.

mod componentes;
mod import;

pub use componentes::*;
pub use import::*;

use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, Response};

use crate::models::ErrorBody;

/// Failure talking to the inventory service
#[derive(Debug, Clone, thiserror::Error)]
pub enum ApiError {
    /// The fetch promise rejected (network down, CORS, aborted request)
    #[error("falha de rede: {0}")]
    Network(String),
    /// The service answered with a non-2xx status
    #[error("serviço respondeu {code}")]
    Status { code: u16, message: Option<String> },
    /// The response body could not be decoded
    #[error("resposta inválida: {0}")]
    Decode(String),
}

impl ApiError {
    /// Error text supplied by the service itself, when it sent one.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            ApiError::Status { message, .. } => message.as_deref(),
            _ => None,
        }
    }

    fn from_js(value: JsValue) -> Self {
        ApiError::Network(format!("{value:?}"))
    }
}

fn request(url: &str, init: &RequestInit) -> Result<Request, ApiError> {
    Request::new_with_str_and_init(url, init).map_err(ApiError::from_js)
}

/// Dispatch a request and map non-2xx statuses to `ApiError::Status`,
/// probing the body for a service-provided error message.
async fn send(req: Request) -> Result<Response, ApiError> {
    let window = web_sys::window().ok_or_else(|| ApiError::Network("sem window".to_string()))?;
    let value = JsFuture::from(window.fetch_with_request(&req))
        .await
        .map_err(ApiError::from_js)?;
    let resp: Response = value.dyn_into().map_err(ApiError::from_js)?;
    if resp.ok() {
        return Ok(resp);
    }
    let code = resp.status();
    let message = decode_json::<ErrorBody>(&resp)
        .await
        .ok()
        .and_then(|body| body.error);
    Err(ApiError::Status { code, message })
}

/// Decode a response body as JSON into `T`.
async fn decode_json<T: serde::de::DeserializeOwned>(resp: &Response) -> Result<T, ApiError> {
    let promise = resp.json().map_err(ApiError::from_js)?;
    let value = JsFuture::from(promise).await.map_err(ApiError::from_js)?;
    serde_wasm_bindgen::from_value(value).map_err(|e| ApiError::Decode(e.to_string()))
}
