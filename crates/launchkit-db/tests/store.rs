//! Integration tests for the record store against a real SQLite database.

use launchkit_core::{
    BudgetKpi, GeneratedSections, Messaging, NewCampaign, NewCampaignInput, Persona, RiskAnalysis,
    UploadMeta,
};
use launchkit_db::DbError;
use sqlx::SqlitePool;

fn sample_input(idea: &str) -> NewCampaignInput {
    NewCampaignInput {
        business_idea: idea.to_string(),
        target_audience: "Tech Startups".to_string(),
        unique_value_proposition: "Saves 10 hours/week".to_string(),
        tag: None,
        uploads: vec![],
    }
}

fn complete_sections() -> GeneratedSections {
    GeneratedSections {
        personas: Some(vec![Persona {
            name: Some("Founder".to_string()),
            demographics: Some("25-40, urban".to_string()),
            ..Persona::default()
        }]),
        messaging: Some(Messaging {
            linkedin_post: Some("Launching soon.".to_string()),
            ..Messaging::default()
        }),
        channels: Some(vec!["LinkedIn".to_string(), "Email".to_string()]),
        calendar: Some(vec![]),
        budget_kpis: Some(BudgetKpi {
            kpis: Some(vec!["CTR 2.5%".to_string()]),
            ..BudgetKpi::default()
        }),
        competitors: None,
        risk_analysis: None,
    }
}

fn sample_campaign(title: &str) -> NewCampaign {
    NewCampaign {
        title: title.to_string(),
        tag: None,
        sections: complete_sections(),
    }
}

#[sqlx::test(migrations = "../../migrations")]
async fn create_input_assigns_id_and_persists_uploads_metadata(pool: SqlitePool) {
    let mut new = sample_input("AI CRM");
    new.uploads.push(UploadMeta {
        name: "deck.pdf".to_string(),
        mime_type: "application/pdf".to_string(),
        size_bytes: 2048,
    });

    let created = launchkit_db::create_input(&pool, &new)
        .await
        .expect("create input");
    assert!(!created.id.is_empty());

    let listed = launchkit_db::list_inputs(&pool).await.expect("list inputs");
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].id, created.id);
    assert_eq!(listed[0].uploads.len(), 1);
    assert_eq!(listed[0].uploads[0].name, "deck.pdf");
    assert_eq!(listed[0].uploads[0].size_bytes, 2048);
}

#[sqlx::test(migrations = "../../migrations")]
async fn create_input_rejects_each_missing_required_field(pool: SqlitePool) {
    let cases: Vec<(NewCampaignInput, &str)> = vec![
        (
            NewCampaignInput {
                business_idea: "   ".to_string(),
                ..sample_input("x")
            },
            "business_idea",
        ),
        (
            NewCampaignInput {
                target_audience: String::new(),
                ..sample_input("AI CRM")
            },
            "target_audience",
        ),
        (
            NewCampaignInput {
                unique_value_proposition: "\t".to_string(),
                ..sample_input("AI CRM")
            },
            "unique_value_proposition",
        ),
    ];

    for (new, field) in cases {
        let err = launchkit_db::create_input(&pool, &new)
            .await
            .expect_err("validation should fail");
        assert!(
            matches!(err, DbError::MissingField(f) if f == field),
            "expected MissingField({field}), got {err:?}"
        );
    }

    // Nothing may be written by failed validations.
    let listed = launchkit_db::list_inputs(&pool).await.expect("list inputs");
    assert!(listed.is_empty());
}

#[sqlx::test(migrations = "../../migrations")]
async fn list_inputs_orders_newest_first(pool: SqlitePool) {
    for idea in ["first", "second", "third"] {
        launchkit_db::create_input(&pool, &sample_input(idea))
            .await
            .expect("create input");
    }

    let listed = launchkit_db::list_inputs(&pool).await.expect("list inputs");
    let ideas: Vec<&str> = listed.iter().map(|i| i.business_idea.as_str()).collect();
    assert_eq!(ideas, vec!["third", "second", "first"]);
}

#[sqlx::test(migrations = "../../migrations")]
async fn create_campaign_requires_core_sections(pool: SqlitePool) {
    let mut new = sample_campaign("AI CRM");
    new.sections.messaging = None;

    let err = launchkit_db::create_campaign(&pool, &new)
        .await
        .expect_err("validation should fail");
    assert!(matches!(err, DbError::MissingField("messaging")));
    assert!(err.is_validation());

    let listed = launchkit_db::list_campaigns(&pool)
        .await
        .expect("list campaigns");
    assert!(listed.is_empty());
}

#[sqlx::test(migrations = "../../migrations")]
async fn create_campaign_round_trips_sections_and_absence(pool: SqlitePool) {
    let mut new = sample_campaign("AI CRM");
    new.sections.risk_analysis = Some(RiskAnalysis {
        risk_score: Some(3),
        justification: Some("narrow niche".to_string()),
    });

    let created = launchkit_db::create_campaign(&pool, &new)
        .await
        .expect("create campaign");

    let fetched = launchkit_db::get_campaign(&pool, &created.id)
        .await
        .expect("get campaign");
    assert_eq!(fetched.title, "AI CRM");
    assert_eq!(fetched.tag, None);
    let personas = fetched.personas.expect("personas");
    assert_eq!(personas[0].name.as_deref(), Some("Founder"));
    assert_eq!(
        fetched.risk_analysis.expect("risk").risk_score,
        Some(3),
        "explicit risk analysis survives the round trip"
    );
    // competitors was never set and must stay absent, not become empty.
    assert!(fetched.competitors.is_none());
}

#[sqlx::test(migrations = "../../migrations")]
async fn get_campaign_unknown_id_is_not_found(pool: SqlitePool) {
    let err = launchkit_db::get_campaign(&pool, "no-such-id")
        .await
        .expect_err("lookup should fail");
    assert!(matches!(err, DbError::NotFound));
}

#[sqlx::test(migrations = "../../migrations")]
async fn list_campaigns_orders_newest_first(pool: SqlitePool) {
    for title in ["alpha", "beta", "gamma"] {
        launchkit_db::create_campaign(&pool, &sample_campaign(title))
            .await
            .expect("create campaign");
    }

    let listed = launchkit_db::list_campaigns(&pool)
        .await
        .expect("list campaigns");
    let titles: Vec<&str> = listed.iter().map(|c| c.title.as_str()).collect();
    assert_eq!(titles, vec!["gamma", "beta", "alpha"]);
}
