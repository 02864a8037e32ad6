//! Store operations for the `campaigns` collection.
//!
//! Structured sections are stored as JSON text columns; absent sections
//! stay NULL rather than being filled with empty objects, so presence
//! checks survive a round trip.

use chrono::{DateTime, Utc};
use launchkit_core::{Campaign, NewCampaign};
use serde::de::DeserializeOwned;
use serde::Serialize;
use sqlx::SqlitePool;
use uuid::Uuid;

use crate::DbError;

#[derive(Debug, sqlx::FromRow)]
struct CampaignRow {
    id: String,
    title: String,
    tag: Option<String>,
    personas: Option<String>,
    messaging: Option<String>,
    channels: Option<String>,
    calendar: Option<String>,
    budget_kpis: Option<String>,
    competitors: Option<String>,
    risk_analysis: Option<String>,
    created_at: DateTime<Utc>,
}

fn parse_section<T: DeserializeOwned>(
    column: &'static str,
    raw: Option<String>,
) -> Result<Option<T>, DbError> {
    raw.map(|json| {
        serde_json::from_str(&json).map_err(|source| DbError::CorruptSection { column, source })
    })
    .transpose()
}

fn encode_section<T: Serialize>(
    column: &'static str,
    value: Option<&T>,
) -> Result<Option<String>, DbError> {
    value
        .map(|v| {
            serde_json::to_string(v).map_err(|source| DbError::CorruptSection { column, source })
        })
        .transpose()
}

impl CampaignRow {
    fn into_campaign(self) -> Result<Campaign, DbError> {
        Ok(Campaign {
            id: self.id,
            title: self.title,
            tag: self.tag,
            personas: parse_section("personas", self.personas)?,
            messaging: parse_section("messaging", self.messaging)?,
            channels: parse_section("channels", self.channels)?,
            calendar: parse_section("calendar", self.calendar)?,
            budget_kpis: parse_section("budget_kpis", self.budget_kpis)?,
            competitors: parse_section("competitors", self.competitors)?,
            risk_analysis: parse_section("risk_analysis", self.risk_analysis)?,
            created_at: self.created_at,
        })
    }
}

const SELECT_COLUMNS: &str = "id, title, tag, personas, messaging, channels, calendar, \
                              budget_kpis, competitors, risk_analysis, created_at";

/// Insert a generated campaign and return the stored record.
///
/// The five core sections (`personas`, `messaging`, `channels`,
/// `calendar`, `budget_kpis`) are required; `competitors` and
/// `risk_analysis` may be absent.
///
/// # Errors
///
/// Returns [`DbError::MissingField`] (nothing written) when the title or
/// a required section is missing, or [`DbError::Sqlx`] on store failure.
pub async fn create_campaign(pool: &SqlitePool, new: &NewCampaign) -> Result<Campaign, DbError> {
    if new.title.trim().is_empty() {
        return Err(DbError::MissingField("title"));
    }
    let sections = &new.sections;
    let personas = sections
        .personas
        .as_ref()
        .ok_or(DbError::MissingField("personas"))?;
    let messaging = sections
        .messaging
        .as_ref()
        .ok_or(DbError::MissingField("messaging"))?;
    let channels = sections
        .channels
        .as_ref()
        .ok_or(DbError::MissingField("channels"))?;
    let calendar = sections
        .calendar
        .as_ref()
        .ok_or(DbError::MissingField("calendar"))?;
    let budget_kpis = sections
        .budget_kpis
        .as_ref()
        .ok_or(DbError::MissingField("budget_kpis"))?;

    let id = Uuid::new_v4().to_string();
    let created_at = Utc::now();

    sqlx::query(
        "INSERT INTO campaigns \
             (id, title, tag, personas, messaging, channels, calendar, \
              budget_kpis, competitors, risk_analysis, created_at) \
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11)",
    )
    .bind(&id)
    .bind(&new.title)
    .bind(&new.tag)
    .bind(encode_section("personas", Some(personas))?)
    .bind(encode_section("messaging", Some(messaging))?)
    .bind(encode_section("channels", Some(channels))?)
    .bind(encode_section("calendar", Some(calendar))?)
    .bind(encode_section("budget_kpis", Some(budget_kpis))?)
    .bind(encode_section("competitors", sections.competitors.as_ref())?)
    .bind(encode_section(
        "risk_analysis",
        sections.risk_analysis.as_ref(),
    )?)
    .bind(created_at)
    .execute(pool)
    .await?;

    get_campaign(pool, &id).await
}

/// Fetch a single campaign by id.
///
/// # Errors
///
/// Returns [`DbError::NotFound`] when no record matches, or
/// [`DbError::Sqlx`] on store failure.
pub async fn get_campaign(pool: &SqlitePool, id: &str) -> Result<Campaign, DbError> {
    let row: Option<CampaignRow> = sqlx::query_as(&format!(
        "SELECT {SELECT_COLUMNS} FROM campaigns WHERE id = ?1"
    ))
    .bind(id)
    .fetch_optional(pool)
    .await?;

    row.ok_or(DbError::NotFound)?.into_campaign()
}

/// List all campaigns ordered by creation time descending.
///
/// Ties on `created_at` are broken by insertion recency so "newest
/// first" holds even for same-instant inserts.
///
/// # Errors
///
/// Returns [`DbError::Sqlx`] on store failure.
pub async fn list_campaigns(pool: &SqlitePool) -> Result<Vec<Campaign>, DbError> {
    let rows: Vec<CampaignRow> = sqlx::query_as(&format!(
        "SELECT {SELECT_COLUMNS} FROM campaigns ORDER BY created_at DESC, rowid DESC"
    ))
    .fetch_all(pool)
    .await?;

    rows.into_iter().map(CampaignRow::into_campaign).collect()
}
