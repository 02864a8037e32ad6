use axum::{extract::State, http::StatusCode, Json};
use launchkit_core::{CampaignInput, NewCampaignInput};
use serde::Serialize;

use super::{map_db_error, ApiError, AppState};

#[derive(Debug, Serialize)]
pub(super) struct InputEnvelope {
    input: CampaignInput,
}

#[derive(Debug, Serialize)]
pub(super) struct InputsEnvelope {
    inputs: Vec<CampaignInput>,
}

pub(super) async fn create_input(
    State(state): State<AppState>,
    Json(new): Json<NewCampaignInput>,
) -> Result<(StatusCode, Json<InputEnvelope>), ApiError> {
    let input = launchkit_db::create_input(&state.pool, &new)
        .await
        .map_err(|e| map_db_error(&e))?;
    Ok((StatusCode::CREATED, Json(InputEnvelope { input })))
}

pub(super) async fn list_inputs(
    State(state): State<AppState>,
) -> Result<Json<InputsEnvelope>, ApiError> {
    let inputs = launchkit_db::list_inputs(&state.pool)
        .await
        .map_err(|e| map_db_error(&e))?;
    Ok(Json(InputsEnvelope { inputs }))
}
