//! Error response rendering shared by both services.
//!
//! Each service owns the wording of its fallback body; this module only
//! knows how to turn a body into a 500 and how to render error details.

use std::any::Any;
use std::error::Error as StdError;

use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};

/// A `500 Internal Server Error` with a plain-text body.
pub fn internal_error(body: String) -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
        body,
    )
        .into_response()
}

/// Render an error followed by all of its sources, joined by `": "`.
pub fn error_chain(err: &(dyn StdError + 'static)) -> String {
    let mut rendered = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        let text = cause.to_string();
        // hyper and reqwest sometimes repeat the inner message in the outer one.
        if !rendered.ends_with(&text) {
            rendered.push_str(": ");
            rendered.push_str(&text);
        }
        source = cause.source();
    }
    rendered
}

/// Best-effort message out of a panic payload.
pub fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&'static str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "handler panicked".to_string()
    }
}
