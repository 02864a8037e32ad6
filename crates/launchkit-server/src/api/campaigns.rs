use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use launchkit_core::{Campaign, NewCampaign};
use serde::Serialize;

use super::{map_db_error, ApiError, AppState};

#[derive(Debug, Serialize)]
pub(super) struct CampaignEnvelope {
    campaign: Campaign,
}

#[derive(Debug, Serialize)]
pub(super) struct CampaignsEnvelope {
    campaigns: Vec<Campaign>,
}

pub(super) async fn create_campaign(
    State(state): State<AppState>,
    Json(new): Json<NewCampaign>,
) -> Result<(StatusCode, Json<CampaignEnvelope>), ApiError> {
    let campaign = launchkit_db::create_campaign(&state.pool, &new)
        .await
        .map_err(|e| map_db_error(&e))?;
    Ok((StatusCode::CREATED, Json(CampaignEnvelope { campaign })))
}

pub(super) async fn get_campaign(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<CampaignEnvelope>, ApiError> {
    let campaign = launchkit_db::get_campaign(&state.pool, &id)
        .await
        .map_err(|e| map_db_error(&e))?;
    Ok(Json(CampaignEnvelope { campaign }))
}

pub(super) async fn list_campaigns(
    State(state): State<AppState>,
) -> Result<Json<CampaignsEnvelope>, ApiError> {
    let campaigns = launchkit_db::list_campaigns(&state.pool)
        .await
        .map_err(|e| map_db_error(&e))?;
    Ok(Json(CampaignsEnvelope { campaigns }))
}
