//! Raw founder submission types and the fixed input-screen option sets.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The fixed target-audience choices offered on the input screen.
///
/// The final entry is the "Other" sentinel; choosing it activates the
/// free-text custom audience field.
pub const AUDIENCE_OPTIONS: [&str; 10] = [
    "Small Businesses (1-50 employees)",
    "Medium Enterprises (51-500 employees)",
    "Large Corporations (500+ employees)",
    "Individual Consumers (B2C)",
    "Tech Startups",
    "E-commerce Businesses",
    "Healthcare Organizations",
    "Educational Institutions",
    "Non-profit Organizations",
    "Other (specify below)",
];

/// Sentinel audience option that unlocks the free-text custom audience field.
pub const CUSTOM_AUDIENCE_SENTINEL: &str = "Other (specify below)";

/// Rotating example prompts shown in the business idea field.
pub const BUSINESS_IDEA_PROMPTS: [&str; 5] = [
    "AI-powered customer service platform",
    "Sustainable fashion marketplace",
    "Remote team collaboration tool",
    "Health tracking mobile app",
    "Local food delivery service",
];

/// Rotating example prompts shown in the custom audience field.
pub const CUSTOM_AUDIENCE_PROMPTS: [&str; 5] = [
    "Freelancers and consultants",
    "Pet owners aged 25-45",
    "College students",
    "Rural small business owners",
    "Gaming enthusiasts",
];

/// Rotating example prompts shown in the value proposition field.
pub const VALUE_PROPOSITION_PROMPTS: [&str; 5] = [
    "Save customers 50% time with AI automation",
    "Zero waste packaging for eco-conscious consumers",
    "24/7 support with 99% uptime guarantee",
    "Personalized learning paths for every student",
    "Same-day delivery within 10 miles",
];

/// Resolve the audience value persisted and sent to the generator.
///
/// When the sentinel option is selected the trimmed custom text replaces
/// it; otherwise the selection is used as-is.
#[must_use]
pub fn resolve_audience(selection: &str, custom: &str) -> String {
    if selection == CUSTOM_AUDIENCE_SENTINEL {
        custom.trim().to_string()
    } else {
        selection.to_string()
    }
}

/// Metadata for an attached file. Never carries file bytes; the bytes go
/// only to the generator call, not into the record store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadMeta {
    pub name: String,
    pub mime_type: String,
    pub size_bytes: i64,
}

/// An attached file held in form state: metadata plus the raw bytes
/// forwarded to the generator.
#[derive(Debug, Clone)]
pub struct UploadAttachment {
    pub meta: UploadMeta,
    pub bytes: Vec<u8>,
}

impl UploadAttachment {
    #[must_use]
    pub fn new(name: impl Into<String>, mime_type: impl Into<String>, bytes: Vec<u8>) -> Self {
        let size_bytes = i64::try_from(bytes.len()).unwrap_or(i64::MAX);
        Self {
            meta: UploadMeta {
                name: name.into(),
                mime_type: mime_type.into(),
                size_bytes,
            },
            bytes,
        }
    }
}

/// Payload for creating a `campaign_inputs` record. The store assigns
/// `id` and `created_at`.
/// Missing fields default on deserialization; the store's validation
/// is the authority on required fields.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct NewCampaignInput {
    pub business_idea: String,
    pub target_audience: String,
    pub unique_value_proposition: String,
    pub tag: Option<String>,
    pub uploads: Vec<UploadMeta>,
}

/// A persisted founder submission. Immutable once created; there is no
/// update or delete path.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CampaignInput {
    pub id: String,
    pub business_idea: String,
    pub target_audience: String,
    pub unique_value_proposition: String,
    pub tag: Option<String>,
    pub uploads: Vec<UploadMeta>,
    pub created_at: DateTime<Utc>,
}
