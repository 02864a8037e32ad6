//! Store operations for the `campaign_inputs` collection.

use chrono::{DateTime, Utc};
use launchkit_core::{CampaignInput, NewCampaignInput, UploadMeta};
use sqlx::SqlitePool;
use uuid::Uuid;

use crate::DbError;

#[derive(Debug, sqlx::FromRow)]
struct CampaignInputRow {
    id: String,
    business_idea: String,
    target_audience: String,
    unique_value_proposition: String,
    tag: Option<String>,
    uploads: String,
    created_at: DateTime<Utc>,
}

impl CampaignInputRow {
    fn into_input(self) -> Result<CampaignInput, DbError> {
        let uploads: Vec<UploadMeta> =
            serde_json::from_str(&self.uploads).map_err(|source| DbError::CorruptSection {
                column: "uploads",
                source,
            })?;
        Ok(CampaignInput {
            id: self.id,
            business_idea: self.business_idea,
            target_audience: self.target_audience,
            unique_value_proposition: self.unique_value_proposition,
            tag: self.tag,
            uploads,
            created_at: self.created_at,
        })
    }
}

fn require_non_blank(value: &str, field: &'static str) -> Result<(), DbError> {
    if value.trim().is_empty() {
        return Err(DbError::MissingField(field));
    }
    Ok(())
}

/// Insert a founder submission and return the stored record.
///
/// Assigns the id and creation timestamp. Only upload metadata is
/// persisted; file bytes never reach the store.
///
/// # Errors
///
/// Returns [`DbError::MissingField`] (nothing written) when any of the
/// three required fields is blank, or [`DbError::Sqlx`] on store failure.
pub async fn create_input(
    pool: &SqlitePool,
    new: &NewCampaignInput,
) -> Result<CampaignInput, DbError> {
    require_non_blank(&new.business_idea, "business_idea")?;
    require_non_blank(&new.target_audience, "target_audience")?;
    require_non_blank(&new.unique_value_proposition, "unique_value_proposition")?;

    let id = Uuid::new_v4().to_string();
    let created_at = Utc::now();
    let uploads_json =
        serde_json::to_string(&new.uploads).map_err(|source| DbError::CorruptSection {
            column: "uploads",
            source,
        })?;

    sqlx::query(
        "INSERT INTO campaign_inputs \
             (id, business_idea, target_audience, unique_value_proposition, tag, uploads, created_at) \
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
    )
    .bind(&id)
    .bind(&new.business_idea)
    .bind(&new.target_audience)
    .bind(&new.unique_value_proposition)
    .bind(&new.tag)
    .bind(&uploads_json)
    .bind(created_at)
    .execute(pool)
    .await?;

    Ok(CampaignInput {
        id,
        business_idea: new.business_idea.clone(),
        target_audience: new.target_audience.clone(),
        unique_value_proposition: new.unique_value_proposition.clone(),
        tag: new.tag.clone(),
        uploads: new.uploads.clone(),
        created_at,
    })
}

/// List all founder submissions, newest first.
///
/// # Errors
///
/// Returns [`DbError::Sqlx`] on store failure.
pub async fn list_inputs(pool: &SqlitePool) -> Result<Vec<CampaignInput>, DbError> {
    let rows: Vec<CampaignInputRow> = sqlx::query_as(
        "SELECT id, business_idea, target_audience, unique_value_proposition, tag, uploads, created_at \
         FROM campaign_inputs \
         ORDER BY created_at DESC, rowid DESC",
    )
    .fetch_all(pool)
    .await?;

    rows.into_iter().map(CampaignInputRow::into_input).collect()
}
