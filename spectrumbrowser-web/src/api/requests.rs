use log::info;
use spectrumbrowser::ClientError;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Headers, Request, RequestInit, RequestMode, Response};

/// POST `body` as JSON to `url` and return the response body as text.
/// A non-2xx status is an error carrying the status and body.
pub async fn http_post_json(
    url: &str,
    body: &str,
) -> Result<String, ClientError> {
    info!("http_post_json: {}", url);
    let window = web_sys::window().ok_or(ClientError::Transport(
        "No window available".to_string(),
    ))?;

    let mut request_init = RequestInit::new();
    request_init.method("POST");
    request_init.mode(RequestMode::Cors);

    let headers = Headers::new()?;
    headers.set("Content-Type", "application/json")?;
    request_init.headers(&headers);
    request_init.body(Some(&JsValue::from_str(body)));

    let request = Request::new_with_str_and_init(url, &request_init)?;
    let response_js =
        JsFuture::from(window.fetch_with_request(&request)).await?;
    let response: Response = response_js.dyn_into()?;

    let status = response.status();
    let text = JsFuture::from(response.text()?)
        .await?
        .as_string()
        .unwrap_or_default();

    if (200..300).contains(&status) {
        Ok(text)
    } else {
        Err(ClientError::Status(status, text))
    }
}
