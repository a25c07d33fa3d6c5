//! Generic request adapters
//!
//! Each adapter binds the request input, hands it to a business-logic
//! callback and turns the outcome into a [`BaseResponse`] envelope:
//!
//! | Adapter         | Path id | Body | Success |
//! |-----------------|---------|------|---------|
//! | `create`        | no      | yes  | 201     |
//! | `update`        | yes     | yes  | 200     |
//! | `delete`        | yes     | no   | 200     |
//! | `get_by_id`     | yes     | no   | 200     |
//! | `get_by_filter` | no      | yes  | 200     |
//!
//! Malformed bodies are rejected with 400, and `delete`/`get_by_id` reject a
//! zero id with 404, in both cases before the callback runs. Callback errors are answered with the
//! status chosen by [`StatusTranslate`].

use std::fmt::Display;
use std::future::Future;

use axum::{
    body::Bytes,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{de::DeserializeOwned, Serialize};

use crate::api::errors::{translate_error_to_status_code, StatusTranslate};
use crate::api::response::{BaseResponse, ResultCode, ValidationIssue};

/// Binds a JSON body and passes it to `caller`, answering 201 Created
pub async fn create<Ti, To, E, F, Fut>(body: Bytes, caller: F) -> Response
where
    Ti: DeserializeOwned,
    To: Serialize,
    E: StatusTranslate + Display,
    F: FnOnce(Ti) -> Fut,
    Fut: Future<Output = Result<To, E>>,
{
    let req = match bind_json::<Ti>(&body) {
        Ok(req) => req,
        Err(rejection) => return rejection,
    };

    match caller(req).await {
        Ok(res) => respond(StatusCode::CREATED, BaseResponse::ok(res)),
        Err(err) => callback_failure(&err),
    }
}

/// Binds a JSON body and the path id and passes both to `caller`
///
/// Unlike `delete` and `get_by_id` there is no missing-id check here: a zero
/// id reaches the callback, which decides what it means.
pub async fn update<Ti, To, E, F, Fut>(id: i64, body: Bytes, caller: F) -> Response
where
    Ti: DeserializeOwned,
    To: Serialize,
    E: StatusTranslate + Display,
    F: FnOnce(i64, Ti) -> Fut,
    Fut: Future<Output = Result<To, E>>,
{
    let req = match bind_json::<Ti>(&body) {
        Ok(req) => req,
        Err(rejection) => return rejection,
    };

    match caller(id, req).await {
        Ok(res) => respond(StatusCode::OK, BaseResponse::ok(res)),
        Err(err) => callback_failure(&err),
    }
}

/// Passes the path id to `caller`; the success envelope carries no data
pub async fn delete<E, F, Fut>(id: i64, caller: F) -> Response
where
    E: StatusTranslate + Display,
    F: FnOnce(i64) -> Fut,
    Fut: Future<Output = Result<(), E>>,
{
    if id == 0 {
        return missing_id();
    }

    match caller(id).await {
        Ok(()) => respond(
            StatusCode::OK,
            BaseResponse::<()>::new(None, true, ResultCode::Success),
        ),
        Err(err) => callback_failure(&err),
    }
}

/// Passes the path id to `caller` and returns its result
pub async fn get_by_id<To, E, F, Fut>(id: i64, caller: F) -> Response
where
    To: Serialize,
    E: StatusTranslate + Display,
    F: FnOnce(i64) -> Fut,
    Fut: Future<Output = Result<To, E>>,
{
    if id == 0 {
        return missing_id();
    }

    match caller(id).await {
        Ok(res) => respond(StatusCode::OK, BaseResponse::ok(res)),
        Err(err) => callback_failure(&err),
    }
}

/// Binds a JSON filter body and returns whatever `caller` finds
pub async fn get_by_filter<Ti, To, E, F, Fut>(body: Bytes, caller: F) -> Response
where
    Ti: DeserializeOwned,
    To: Serialize,
    E: StatusTranslate + Display,
    F: FnOnce(Ti) -> Fut,
    Fut: Future<Output = Result<To, E>>,
{
    let req = match bind_json::<Ti>(&body) {
        Ok(req) => req,
        Err(rejection) => return rejection,
    };

    match caller(req).await {
        Ok(res) => respond(StatusCode::OK, BaseResponse::ok(res)),
        Err(err) => callback_failure(&err),
    }
}

/// Deserializes a request body, or builds the 400 response for it
///
/// The `Content-Type` header is not consulted.
pub fn bind_json<T: DeserializeOwned>(body: &[u8]) -> Result<T, Response> {
    serde_json::from_slice(body).map_err(|err| {
        tracing::debug!(error = %err, "rejecting request body");
        respond(
            StatusCode::BAD_REQUEST,
            BaseResponse::<()>::with_validation_error(
                ResultCode::ValidationError,
                vec![ValidationIssue::from(&err)],
            ),
        )
    })
}

fn missing_id() -> Response {
    tracing::debug!("rejecting request without a resource id");
    respond(
        StatusCode::NOT_FOUND,
        BaseResponse::<()>::new(None, false, ResultCode::ValidationError),
    )
}

fn callback_failure<E: StatusTranslate + Display>(err: &E) -> Response {
    let status = translate_error_to_status_code(err);
    tracing::warn!(status = status.as_u16(), error = %err, "request callback failed");
    respond(
        status,
        BaseResponse::<()>::with_error(ResultCode::InternalError, err.to_string()),
    )
}

fn respond<T: Serialize>(status: StatusCode, envelope: BaseResponse<T>) -> Response {
    (status, Json(envelope)).into_response()
}
