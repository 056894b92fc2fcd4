use std::{sync::Arc, time::Duration};

use axum::{
    Router,
    body::Body,
    extract::State,
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
    routing::post,
};

use crate::{foundation::error::TextcardResult, render::encode::encode_jpeg, service::ImageService};

/// JSON body accepted by `POST /create`.
///
/// Decoding is lenient: a missing or `null` `text` is empty, unknown fields are ignored, and the
/// key also matches as `Text` or `TEXT`.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct CreateImageRequest {
    /// Text to draw.
    #[serde(alias = "Text", alias = "TEXT", deserialize_with = "null_as_empty")]
    pub text: String,
}

impl CreateImageRequest {
    /// Decode the first JSON value in `bytes`. Anything after it is ignored, and a top-level
    /// `null` yields the default request.
    pub fn from_json(bytes: &[u8]) -> serde_json::Result<Self> {
        match serde_json::Deserializer::from_slice(bytes)
            .into_iter::<Option<Self>>()
            .next()
        {
            Some(req) => req.map(Option::unwrap_or_default),
            None => Err(serde::de::Error::custom("empty request body")),
        }
    }
}

fn null_as_empty<'de, D>(d: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::Deserialize as _;
    Option::<String>::deserialize(d).map(Option::unwrap_or_default)
}

/// Shared, read-only state handed to every request.
#[derive(Clone)]
pub struct AppState {
    /// Renderer invoked once per request.
    pub service: Arc<dyn ImageService>,
    /// Budget for reading the request body.
    pub read_timeout: Duration,
    /// Budget for rendering and encoding the response.
    pub write_timeout: Duration,
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("read_timeout", &self.read_timeout)
            .field("write_timeout", &self.write_timeout)
            .finish_non_exhaustive()
    }
}

/// Build the HTTP router: `POST /create` only.
pub fn router(state: AppState) -> Router {
    tracing::info!("registering handlers");
    Router::new()
        .route("/create", post(create_image))
        .with_state(state)
}

async fn create_image(State(state): State<AppState>, body: Body) -> Response {
    let bytes = match tokio::time::timeout(
        state.read_timeout,
        axum::body::to_bytes(body, usize::MAX),
    )
    .await
    {
        Ok(Ok(bytes)) => bytes,
        Ok(Err(e)) => {
            tracing::error!(error = %e, "could not read request body");
            return StatusCode::BAD_REQUEST.into_response();
        }
        Err(_) => {
            tracing::error!(timeout = ?state.read_timeout, "timed out reading request body");
            return StatusCode::REQUEST_TIMEOUT.into_response();
        }
    };

    let req = match CreateImageRequest::from_json(&bytes) {
        Ok(req) => req,
        Err(e) => {
            tracing::error!(error = %e, "could not decode request body");
            return StatusCode::BAD_REQUEST.into_response();
        }
    };

    let service = Arc::clone(&state.service);
    let job = tokio::task::spawn_blocking(move || -> TextcardResult<Vec<u8>> {
        let canvas = service.create_image(&req.text)?;
        encode_jpeg(&canvas)
    });

    let jpeg = match tokio::time::timeout(state.write_timeout, job).await {
        Ok(Ok(Ok(jpeg))) => jpeg,
        Ok(Ok(Err(e))) => {
            tracing::error!(error = %e, kind = e.kind(), "could not create image");
            return StatusCode::INTERNAL_SERVER_ERROR.into_response();
        }
        Ok(Err(e)) => {
            tracing::error!(error = %e, "render task failed");
            return StatusCode::INTERNAL_SERVER_ERROR.into_response();
        }
        Err(_) => {
            tracing::error!(timeout = ?state.write_timeout, "timed out creating image");
            return StatusCode::SERVICE_UNAVAILABLE.into_response();
        }
    };

    let len = jpeg.len();
    (
        StatusCode::CREATED,
        [
            (header::CONTENT_TYPE, HeaderValue::from_static("image/jpeg")),
            (header::CONTENT_LENGTH, HeaderValue::from(len)),
        ],
        jpeg,
    )
        .into_response()
}

#[cfg(test)]
#[path = "../../tests/unit/server/handler.rs"]
mod tests;
