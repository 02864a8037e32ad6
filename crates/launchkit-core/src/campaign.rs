//! Generated campaign artifact types.
//!
//! Every section of a campaign is optional at the type level: the
//! generator output varies and older records may predate a section.
//! Consumers check presence per field rather than trusting the shape.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Title used when a submission somehow reaches generation with an
/// empty business idea.
pub const UNTITLED_CAMPAIGN_TITLE: &str = "Untitled";

/// A single audience persona produced by the generator.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Persona {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub demographics: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pain_points: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub behaviors: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub goals: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preferred_channels: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GoogleAds {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub headline: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmailCampaign {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
}

/// Messaging copy across the supported channels.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Messaging {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub google_ads: Option<GoogleAds>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linkedin_post: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email_campaign: Option<EmailCampaign>,
}

/// One entry in the content calendar.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarItem {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub day: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub activity: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BudgetKpi {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lean_budget_proposal: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kpis: Option<Vec<String>>,
}

/// Generator-assessed launch risk on a 0-10 scale.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskAnalysis {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub risk_score: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub justification: Option<String>,
}

/// The structured artifact returned by the external generator. Unknown
/// fields in the response are ignored.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GeneratedSections {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub personas: Option<Vec<Persona>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub messaging: Option<Messaging>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub channels: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub calendar: Option<Vec<CalendarItem>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub budget_kpis: Option<BudgetKpi>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub competitors: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub risk_analysis: Option<RiskAnalysis>,
}

/// Payload for creating a `campaigns` record. The store assigns `id`
/// and `created_at` and requires the five core sections to be present.
///
/// Deserialization is lenient (missing fields default) so that the
/// store's own required-field validation decides what a missing field
/// means, rather than the JSON layer.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct NewCampaign {
    pub title: String,
    pub tag: Option<String>,
    #[serde(flatten)]
    pub sections: GeneratedSections,
}

/// A persisted campaign. Created exactly once per successful pipeline
/// run and never mutated afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Campaign {
    pub id: String,
    pub title: String,
    pub tag: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub personas: Option<Vec<Persona>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub messaging: Option<Messaging>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub channels: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub calendar: Option<Vec<CalendarItem>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub budget_kpis: Option<BudgetKpi>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub competitors: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub risk_analysis: Option<RiskAnalysis>,
    pub created_at: DateTime<Utc>,
}
