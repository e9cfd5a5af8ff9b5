//! Todo API Bindings
//!
//! Fetch-based wrappers around the remote REST collection, organized by
//! resource. Loading and error toasts are layered on by the controller.

mod todos;

use std::future::Future;
use std::pin::Pin;

use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Headers, Request, RequestInit, Response};

use crate::error::ApiError;

// Re-export all public items
pub use todos::*;

const NO_CONTENT: u16 = 204;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    pub fn as_str(self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
        }
    }
}

/// Pending response body from a [`Transport`]
pub type ResponseFuture = Pin<Box<dyn Future<Output = Result<Option<String>, ApiError>>>>;

/// Sends one request and yields the response body. The endpoints in this
/// module only talk to the network through it.
pub trait Transport {
    fn send(&self, method: Method, url: &str, body: Option<String>) -> ResponseFuture;
}

/// Browser `fetch`
#[derive(Debug, Clone, Copy, Default)]
pub struct FetchTransport;

impl Transport for FetchTransport {
    fn send(&self, method: Method, url: &str, body: Option<String>) -> ResponseFuture {
        let url = url.to_string();
        Box::pin(async move { request(method, &url, body).await })
    }
}

/// Issue one JSON request. Any non-2xx status is an error; a 204 or an
/// empty body comes back as `None`.
pub async fn request(method: Method, url: &str, body: Option<String>) -> Result<Option<String>, ApiError> {
    log::debug!("[API] {} {}", method.as_str(), url);

    let headers = Headers::new().map_err(ApiError::from_js)?;
    headers
        .set("Content-Type", "application/json")
        .map_err(ApiError::from_js)?;

    let init = RequestInit::new();
    init.set_method(method.as_str());
    init.set_headers(&headers);
    if let Some(body) = body.as_deref() {
        init.set_body(&body.into());
    }

    let request = Request::new_with_str_and_init(url, &init).map_err(ApiError::from_js)?;
    let window = web_sys::window().ok_or_else(|| ApiError::Network("no window available".to_string()))?;

    let response: Response = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(ApiError::from_js)?
        .dyn_into()
        .map_err(ApiError::from_js)?;

    let status = response.status();
    if !response.ok() {
        return Err(ApiError::Status(status));
    }
    if status == NO_CONTENT {
        return Ok(None);
    }

    let text = JsFuture::from(response.text().map_err(ApiError::from_js)?)
        .await
        .map_err(ApiError::from_js)?;
    Ok(text.as_string().filter(|t| !t.trim().is_empty()))
}
