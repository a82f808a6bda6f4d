//! Fetch Transport
//!
//! Sends delete requests with `window.fetch`. Only the response status is
//! read; the body is left alone.

use async_trait::async_trait;
use resource_delete::{DeleteRequest, DeleteTransport, TransportError};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Headers, Request, RequestInit, Response};

use crate::js::error_message;

pub struct FetchTransport;

fn build_request(request: &DeleteRequest) -> Result<Request, JsValue> {
    let headers = Headers::new()?;
    for (name, value) in request.headers() {
        headers.set(name, value)?;
    }

    let init = RequestInit::new();
    init.set_method(request.method());
    init.set_headers(&headers);
    if let Some(body) = request.body() {
        init.set_body(&JsValue::from_str(body));
    }

    Request::new_with_str_and_init(request.endpoint(), &init)
}

#[async_trait(?Send)]
impl DeleteTransport for FetchTransport {
    async fn send(&self, request: &DeleteRequest) -> Result<u16, TransportError> {
        let window = web_sys::window()
            .ok_or_else(|| TransportError::Unavailable("no window".to_string()))?;
        let js_request = build_request(request)
            .map_err(|e| TransportError::Fetch(error_message(&e)))?;

        let value = JsFuture::from(window.fetch_with_request(&js_request))
            .await
            .map_err(|e| TransportError::Fetch(error_message(&e)))?;
        let response: Response = value
            .dyn_into()
            .map_err(|v| TransportError::InvalidResponse(error_message(&v)))?;

        Ok(response.status())
    }
}
