//! `fetch`-based requests to the login and chat endpoints.

use serde::de::DeserializeOwned;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, Response};

use super::describe;
use crate::api::{
    ChatRequest, ChatResponse, LoginReply, LoginRequest, LoginResponse,
};
use crate::error::ChatError;
use crate::session::SessionToken;

/// POST the login form. Non-2xx answers with a JSON body are replies.
pub(crate) async fn login(
    url: &str,
    request: &LoginRequest,
) -> Result<LoginReply, ChatError> {
    let response =
        post_json(url, &serde_json::to_string(request)?, None).await?;
    let ok = response.ok();
    let body: LoginResponse = read_json(&response).await?;
    Ok(LoginReply { ok, body })
}

/// POST a chat message with the bearer token.
pub(crate) async fn chat(
    url: &str,
    token: &SessionToken,
    request: &ChatRequest,
) -> Result<ChatResponse, ChatError> {
    let response =
        post_json(url, &serde_json::to_string(request)?, Some(token)).await?;
    if !response.ok() {
        log::warn!("chat endpoint answered {}", response.status());
    }
    read_json(&response).await
}

async fn post_json(
    url: &str,
    body: &str,
    token: Option<&SessionToken>,
) -> Result<Response, ChatError> {
    let init = RequestInit::new();
    init.set_method("POST");
    init.set_body(&JsValue::from_str(body));

    let request =
        Request::new_with_str_and_init(url, &init).map_err(network)?;
    let headers = request.headers();
    headers
        .set("Content-Type", "application/json")
        .map_err(network)?;
    if let Some(token) = token {
        headers
            .set("Authorization", &token.bearer_header())
            .map_err(network)?;
    }

    let window = web_sys::window()
        .ok_or_else(|| ChatError::Dom("no global window".into()))?;
    let value = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(network)?;
    value
        .dyn_into::<Response>()
        .map_err(|_| ChatError::Network("fetch yielded no Response".into()))
}

async fn read_json<T: DeserializeOwned>(
    response: &Response,
) -> Result<T, ChatError> {
    let promise = response.text().map_err(decode)?;
    let text = JsFuture::from(promise).await.map_err(decode)?;
    let text = text
        .as_string()
        .ok_or_else(|| ChatError::Decode("response body is not text".into()))?;
    Ok(serde_json::from_str(&text)?)
}

fn network(value: JsValue) -> ChatError {
    ChatError::Network(describe(&value))
}

fn decode(value: JsValue) -> ChatError {
    ChatError::Decode(describe(&value))
}
