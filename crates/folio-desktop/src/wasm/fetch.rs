//! Network calls for the article feed and the e-mail relay

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};

use crate::error::{ContactError, ContentError};

fn describe(value: JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}

async fn send(request: &Request) -> Result<Response, String> {
    let window = web_sys::window().ok_or_else(|| "no window".to_string())?;
    let response = JsFuture::from(window.fetch_with_request(request))
        .await
        .map_err(describe)?;
    response.dyn_into::<Response>().map_err(describe)
}

/// GET `url` and return the body text
pub async fn get_text(url: &str) -> Result<String, ContentError> {
    let init = RequestInit::new();
    init.set_method("GET");
    init.set_mode(RequestMode::Cors);
    let request = Request::new_with_str_and_init(url, &init)
        .map_err(|e| ContentError::Network(describe(e)))?;

    let response = send(&request).await.map_err(ContentError::Network)?;
    if !response.ok() {
        return Err(ContentError::HttpStatus(response.status()));
    }

    let text = response
        .text()
        .map_err(|e| ContentError::Network(describe(e)))?;
    let body = JsFuture::from(text)
        .await
        .map_err(|e| ContentError::Network(describe(e)))?;
    body.as_string()
        .ok_or_else(|| ContentError::Decode("response body is not text".to_string()))
}

/// POST a JSON body, succeeding on any 2xx answer
pub async fn post_json(url: &str, body: &str) -> Result<(), ContactError> {
    let init = RequestInit::new();
    init.set_method("POST");
    init.set_mode(RequestMode::Cors);
    init.set_body(&JsValue::from_str(body));
    let request = Request::new_with_str_and_init(url, &init)
        .map_err(|e| ContactError::Network(describe(e)))?;
    request
        .headers()
        .set("Content-Type", "application/json")
        .map_err(|e| ContactError::Network(describe(e)))?;

    let response = send(&request).await.map_err(ContactError::Network)?;
    if !response.ok() {
        return Err(ContactError::Relay(response.status()));
    }
    Ok(())
}
