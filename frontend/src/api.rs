//! HTTP calls to the CSV backend.
//!
//! Both functions resolve to `Result<_, ApiError>` so the component only has
//! one error shape to render. A non-2xx answer is read as text and handed to
//! `ApiError::rejected`, which pulls the `message` field out of the JSON body.

use gloo_console::{error, log};
use gloo_net::http::{Request, Response};
use wasm_bindgen::JsValue;
use web_sys::{File, FormData};

use common::config::ClientConfig;
use common::error::ApiError;
use common::model::upload::UPLOAD_FIELD;
use common::model::user::User;
use common::requests::{endpoint, UsersResponse, FILES_PATH, SEARCH_PARAM, USERS_PATH};

/// Sends `file` as the `file` field of a multipart body to the files endpoint.
pub async fn upload_file(config: &ClientConfig, file: &File) -> Result<(), ApiError> {
    let form = FormData::new().map_err(js_error)?;
    form.append_with_blob_and_filename(UPLOAD_FIELD, file, &file.name())
        .map_err(js_error)?;

    let url = endpoint(&config.api_base_url, FILES_PATH);
    log!("POST", &url, file.name());

    let response = Request::post(&url)
        .body(form)
        .map_err(network_error)?
        .send()
        .await
        .map_err(network_error)?;

    if response.ok() {
        Ok(())
    } else {
        Err(rejection(response).await)
    }
}

/// Fetches the users matching `query`. The query is URL-encoded by the
/// request builder.
pub async fn fetch_users(config: &ClientConfig, query: &str) -> Result<Vec<User>, ApiError> {
    let url = endpoint(&config.api_base_url, USERS_PATH);
    log!("GET", &url, query);

    let response = Request::get(&url)
        .query([(SEARCH_PARAM, query)])
        .send()
        .await
        .map_err(network_error)?;

    if !response.ok() {
        return Err(rejection(response).await);
    }

    response
        .json::<UsersResponse>()
        .await
        .map(|body| body.data)
        .map_err(|e| ApiError::Decode(e.to_string()))
}

async fn rejection(response: Response) -> ApiError {
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    let err = ApiError::rejected(status, &body);
    error!(format!("{} {} -> {}: {}", response.url(), status, response.status_text(), err));
    err
}

fn network_error(err: gloo_net::Error) -> ApiError {
    ApiError::Network(err.to_string())
}

fn js_error(value: JsValue) -> ApiError {
    ApiError::Network(
        value
            .as_string()
            .unwrap_or_else(|| format!("{:?}", value)),
    )
}
