//! `GET /retrieveData`.

use axum::{extract::State, Json};

use crate::inner::error::InnerError;
use crate::inner::InnerState;
use crate::model::DataResponse;

/// The value served when processing succeeds.
pub const GREETING: &str = "hi there!";

pub async fn retrieve_data(
    State(state): State<InnerState>,
) -> Result<Json<DataResponse>, InnerError> {
    if state.failure.should_fail() {
        tracing::debug!(probability = state.failure.probability(), "Injecting processing error");
        return Err(InnerError::processing());
    }

    Ok(Json(DataResponse::new(GREETING)))
}
