//! Three-stage generation pipeline: persist input → invoke generator →
//! persist campaign.
//!
//! Each stage is gated on the prior one and there are no retries. A
//! stage-1 record is never rolled back by later failures: capturing the
//! raw submission is worth more than cross-stage atomicity against an
//! untrusted, potentially slow generator.

use launchkit_core::{Campaign, CampaignInput, NewCampaign, UNTITLED_CAMPAIGN_TITLE};
use launchkit_db::DbError;
use launchkit_generator::{GenerationRequest, GeneratorClient, GeneratorError};
use sqlx::SqlitePool;
use thiserror::Error;

use crate::form::{FormError, InputForm};

/// Navigation target produced by a successful submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Dashboard(String),
}

/// Everything a successful submission produced.
#[derive(Debug)]
pub struct SubmissionOutcome {
    pub input: CampaignInput,
    pub campaign: Campaign,
    pub route: Route,
}

/// One human-readable failure per stage. The caller keeps the form
/// state intact and stays on the input screen.
#[derive(Debug, Error)]
pub enum SubmissionError {
    #[error(transparent)]
    Form(#[from] FormError),
    #[error("could not save your input: {0}")]
    SaveInput(#[source] DbError),
    #[error("strategy generation failed: {0}")]
    Generate(#[source] GeneratorError),
    #[error("could not save the generated campaign: {0}")]
    SaveCampaign(#[source] DbError),
}

/// Run the full submission pipeline for a validated form.
///
/// # Errors
///
/// Returns the first stage failure; no later stage runs after a
/// failure, and no compensating rollback is attempted.
pub async fn submit(
    pool: &SqlitePool,
    generator: &GeneratorClient,
    form: &InputForm,
) -> Result<SubmissionOutcome, SubmissionError> {
    let payload = form.payload()?;

    // Stage 1: capture the raw submission (metadata only, no file bytes).
    let input = launchkit_db::create_input(pool, &payload)
        .await
        .map_err(SubmissionError::SaveInput)?;
    tracing::info!(input_id = %input.id, "submission captured");

    // Stage 2: the generator gets the resolved inputs plus raw bytes.
    let request = GenerationRequest {
        business_idea: payload.business_idea.clone(),
        target_audience: payload.target_audience.clone(),
        value_proposition: payload.unique_value_proposition.clone(),
        files: form.uploads().to_vec(),
    };
    let sections = generator.generate(&request).await.map_err(|e| {
        tracing::error!(input_id = %input.id, error = %e, "generation failed; input record retained");
        SubmissionError::Generate(e)
    })?;

    // Stage 3: persist the artifact and hand back the dashboard route.
    let title = campaign_title(&payload.business_idea);
    let campaign = launchkit_db::create_campaign(
        pool,
        &NewCampaign {
            title,
            tag: None,
            sections,
        },
    )
    .await
    .map_err(SubmissionError::SaveCampaign)?;

    tracing::info!(campaign_id = %campaign.id, "campaign generated");
    let route = Route::Dashboard(campaign.id.clone());
    Ok(SubmissionOutcome {
        input,
        campaign,
        route,
    })
}

/// Campaign title derived from the business idea; a blank idea gets the
/// "Untitled" sentinel.
fn campaign_title(business_idea: &str) -> String {
    if business_idea.trim().is_empty() {
        UNTITLED_CAMPAIGN_TITLE.to_string()
    } else {
        business_idea.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn campaign_title_mirrors_the_business_idea() {
        assert_eq!(campaign_title("AI CRM"), "AI CRM");
    }

    #[test]
    fn blank_business_idea_falls_back_to_the_untitled_sentinel() {
        assert_eq!(campaign_title(""), UNTITLED_CAMPAIGN_TITLE);
        assert_eq!(campaign_title("   "), UNTITLED_CAMPAIGN_TITLE);
    }
}
