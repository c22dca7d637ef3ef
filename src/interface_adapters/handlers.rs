use crate::domain::errors::CollectInfoError;
use crate::interface_adapters::protocol::{
    CollectInfoRequest, CollectInfoResponse, ErrorResponse, FAILURE_MESSAGE, SUCCESS_MESSAGE,
};
use crate::interface_adapters::state::AppState;
use crate::use_cases::collect_info::CollectInfoUseCase;
use axum::{Json, extract::State, http::StatusCode};
use std::sync::Arc;

// Record the submitted info and echo it back.
#[tracing::instrument(
    name = "collect_info",
    skip_all,
    fields(has_info = payload.info.is_some())
)]
pub async fn collect_info(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<CollectInfoRequest>,
) -> Result<Json<CollectInfoResponse>, (StatusCode, Json<ErrorResponse>)> {
    let use_case = CollectInfoUseCase {
        sink: state.sink.clone(),
    };

    let result = use_case.execute(payload.info).map_err(map_collect_error)?;

    Ok(Json(CollectInfoResponse {
        message: SUCCESS_MESSAGE.to_string(),
        data: result.data,
    }))
}

fn map_collect_error(err: CollectInfoError) -> (StatusCode, Json<ErrorResponse>) {
    tracing::error!(error = %err, "failed to collect info");
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorResponse {
            message: FAILURE_MESSAGE.to_string(),
            error: err.to_string(),
        }),
    )
}
