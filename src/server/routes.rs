use axum::{
    body::Bytes,
    extract::{DefaultBodyLimit, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use serde::Serialize;
use serde_json::{json, Value};

use crate::{pipelines::text_classification::Prediction, utils::text::truncate_for_log};

use super::state::AppState;

/// The only route served
pub static PREDICT_PATH: &str = "/predict";

/// Input text longer than this is cut in prediction logs
const LOGGED_TEXT_CHARS: usize = 1000;

/// Build the application router
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route(PREDICT_PATH, post(predict))
        .layer(DefaultBodyLimit::disable())
        .with_state(state)
}

/// Why a request body carries no usable text
#[derive(Debug, PartialEq, Eq)]
pub enum Rejection {
    /// The body is not JSON
    InvalidJson,

    /// `text` is absent, or a falsy JSON value (`null`, `false`, `0`, `""`, `[]`, `{}`)
    TextRequired,

    /// `text` is present and truthy but not a string
    TextNotString,
}

impl Rejection {
    fn message(&self) -> &'static str {
        match self {
            Rejection::InvalidJson => "invalid JSON body",
            Rejection::TextRequired => "text required",
            Rejection::TextNotString => "text must be a string",
        }
    }
}

/// Pull the `text` field out of a raw body. Unknown fields are ignored, and
/// anything other than a JSON object carries no text.
pub fn extract_text(body: &[u8]) -> Result<String, Rejection> {
    let value: Value = serde_json::from_slice(body).map_err(|_| Rejection::InvalidJson)?;

    let text = match value {
        Value::Object(mut fields) => fields.remove("text").unwrap_or(Value::Null),
        _ => Value::Null,
    };

    match text {
        Value::String(text) if !text.is_empty() => Ok(text),
        other if is_falsy(&other) => Err(Rejection::TextRequired),
        _ => Err(Rejection::TextNotString),
    }
}

fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::Object(fields) => fields.is_empty(),
    }
}

/// `POST /predict`
///
/// The body is decoded as JSON whatever its `Content-Type`.
async fn predict(State(state): State<AppState>, body: Bytes) -> Response {
    let text = match extract_text(&body) {
        Ok(text) => text,
        Err(rejection) => {
            log::debug!("Rejecting request: {rejection:?}");

            return error(StatusCode::BAD_REQUEST, rejection.message());
        }
    };

    let pipeline = state.pipeline.clone();
    let input = text.clone();
    let classified = tokio::task::spawn_blocking(move || pipeline.classify(&input)).await;

    let classification = match classified {
        Ok(Ok(classification)) => classification,
        Ok(Err(err)) => {
            log::error!("predict error: {err}");

            return error(StatusCode::INTERNAL_SERVER_ERROR, "prediction failed");
        }
        Err(err) => {
            log::error!("predict worker failed: {err}");

            return error(StatusCode::INTERNAL_SERVER_ERROR, "prediction failed");
        }
    };

    let prediction = Prediction::lenient(&classification, state.precision);

    log_prediction(&text, &prediction);

    (StatusCode::OK, Json(prediction)).into_response()
}

fn error(status: StatusCode, message: &str) -> Response {
    (status, Json(json!({ "error": message }))).into_response()
}

/// One prediction, as recorded in the server log
#[derive(Serialize)]
struct PredictionLog<'a> {
    timestamp: String,
    text: String,
    prediction: &'a Prediction,
}

fn log_prediction(text: &str, prediction: &Prediction) {
    let record = PredictionLog {
        timestamp: chrono::Utc::now().to_rfc3339(),
        text: truncate_for_log(text, LOGGED_TEXT_CHARS),
        prediction,
    };

    match serde_json::to_string(&record) {
        Ok(line) => log::info!("PREDICTION: {line}"),
        Err(err) => log::warn!("Unable to serialize prediction log: {err}"),
    }
}
