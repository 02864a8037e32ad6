//! Shared domain types and configuration for the launchkit workspace.

mod campaign;
mod config;
mod input;

pub use campaign::{
    BudgetKpi, CalendarItem, Campaign, EmailCampaign, GeneratedSections, GoogleAds, Messaging,
    NewCampaign, Persona, RiskAnalysis, UNTITLED_CAMPAIGN_TITLE,
};
pub use config::{load_app_config, load_app_config_from_env, AppConfig, ConfigError};
pub use input::{
    resolve_audience, CampaignInput, NewCampaignInput, UploadAttachment, UploadMeta,
    AUDIENCE_OPTIONS, BUSINESS_IDEA_PROMPTS, CUSTOM_AUDIENCE_PROMPTS, CUSTOM_AUDIENCE_SENTINEL,
    VALUE_PROPOSITION_PROMPTS,
};
