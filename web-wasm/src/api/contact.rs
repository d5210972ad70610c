//! Contact form submission
//!
//! One POST of the form fields as JSON to the form-relay endpoint. The
//! endpoint is an opaque external service: any OK-class response counts as
//! delivered, everything else is a failure the caller surfaces.

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};

use portfolio_common::ContactFields;

const FORM_ENDPOINT: &str = "https://formspree.io/your-email@example.com";

/// Send the message. Ok(()) on an OK-class response, Err otherwise.
pub async fn submit_contact(fields: &ContactFields) -> Result<(), JsValue> {
    let body = serde_json::to_string(fields).map_err(|e| JsValue::from_str(&e.to_string()))?;

    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_mode(RequestMode::Cors);
    opts.set_body(&JsValue::from_str(&body));

    let request = Request::new_with_str_and_init(FORM_ENDPOINT, &opts)?;
    request.headers().set("Content-Type", "application/json")?;

    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let resp_value = JsFuture::from(window.fetch_with_request(&request)).await?;
    let resp: Response = resp_value.dyn_into()?;

    if !resp.ok() {
        return Err(JsValue::from_str(&format!(
            "form relay error: {}",
            resp.status()
        )));
    }

    Ok(())
}
