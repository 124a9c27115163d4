//! `GET /data1` and `GET /data2`.

use axum::{extract::State, Json};

use crate::edge::error::EdgeError;
use crate::edge::mapping::{map_error, DATA2_MAPPINGS};
use crate::edge::EdgeState;
use crate::model::DataResponse;

/// Naive relay: every failure reaches the fallback as-is.
pub async fn data1(State(state): State<EdgeState>) -> Result<Json<DataResponse>, EdgeError> {
    let data = state.inner.retrieve_data().await?;
    Ok(Json(data))
}

/// Mapped relay: known failure categories get descriptive messages.
pub async fn data2(State(state): State<EdgeState>) -> Result<Json<DataResponse>, EdgeError> {
    state
        .inner
        .retrieve_data()
        .await
        .map(Json)
        .map_err(|err| map_error(DATA2_MAPPINGS, err))
}
