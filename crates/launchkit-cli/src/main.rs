use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use launchkit_app::{
    DashboardController, DashboardState, InputForm, SectionView,
};
use launchkit_core::UploadAttachment;
use launchkit_generator::GeneratorClient;
use sqlx::SqlitePool;

#[derive(Debug, Parser)]
#[command(name = "launchkit-cli")]
#[command(about = "LaunchKit command line interface")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Submit a founder idea through the full generation pipeline.
    Submit {
        #[arg(long)]
        idea: String,
        /// One of the fixed audience options.
        #[arg(long)]
        audience: String,
        /// Free-text audience; required with the "Other (specify below)" option.
        #[arg(long)]
        custom_audience: Option<String>,
        #[arg(long)]
        value_proposition: String,
        /// Files forwarded to the generator (metadata only is stored).
        #[arg(long = "file")]
        files: Vec<PathBuf>,
    },
    /// List generated campaigns, newest first, with headline stats.
    History,
    /// Print the dashboard view of one campaign.
    Show { id: String },
    /// List captured founder submissions, newest first.
    Inputs,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let config = launchkit_core::load_app_config()?;
    let pool = launchkit_db::connect_pool(
        &config.database_url,
        launchkit_db::PoolConfig::from_app_config(&config),
    )
    .await?;
    launchkit_db::run_migrations(&pool).await?;

    let cli = Cli::parse();
    match cli.command {
        Commands::Submit {
            idea,
            audience,
            custom_audience,
            value_proposition,
            files,
        } => {
            run_submit(
                &pool,
                &config,
                &idea,
                &audience,
                custom_audience.as_deref(),
                &value_proposition,
                &files,
            )
            .await
        }
        Commands::History => run_history(&pool).await,
        Commands::Show { id } => run_show(&pool, &id).await,
        Commands::Inputs => run_inputs(&pool).await,
    }
}

/// Map a file extension to the mime type sent to the generator.
fn mime_for_path(path: &Path) -> &'static str {
    match path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase)
        .as_deref()
    {
        Some("pdf") => "application/pdf",
        Some("txt") => "text/plain",
        Some("md") => "text/markdown",
        Some("csv") => "text/csv",
        Some("png") => "image/png",
        Some("jpg" | "jpeg") => "image/jpeg",
        Some("docx") => {
            "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
        }
        _ => "application/octet-stream",
    }
}

async fn load_attachment(path: &Path) -> anyhow::Result<UploadAttachment> {
    let bytes = tokio::fs::read(path)
        .await
        .map_err(|e| anyhow::anyhow!("cannot read '{}': {e}", path.display()))?;
    let name = path
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| anyhow::anyhow!("'{}' has no usable file name", path.display()))?;
    Ok(UploadAttachment::new(name, mime_for_path(path), bytes))
}

async fn run_submit(
    pool: &SqlitePool,
    config: &launchkit_core::AppConfig,
    idea: &str,
    audience: &str,
    custom_audience: Option<&str>,
    value_proposition: &str,
    files: &[PathBuf],
) -> anyhow::Result<()> {
    let mut form = InputForm::new();
    form.business_idea_mut().edit(idea);
    form.select_audience(audience)?;
    if let Some(custom) = custom_audience {
        form.custom_audience_mut().edit(custom);
    }
    form.value_proposition_mut().edit(value_proposition);
    for path in files {
        form.add_upload(load_attachment(path).await?);
    }

    let generator = GeneratorClient::new(&config.generator_url, &config.generator_user_agent)?;
    let outcome = launchkit_app::submit(pool, &generator, &form).await?;

    println!("input captured: {}", outcome.input.id);
    println!("campaign created: {}", outcome.campaign.id);
    println!("title: {}", outcome.campaign.title);
    Ok(())
}

async fn run_history(pool: &SqlitePool) -> anyhow::Result<()> {
    let campaigns = launchkit_db::list_campaigns(pool).await?;
    if campaigns.is_empty() {
        println!("no campaigns yet");
        return Ok(());
    }

    let now = chrono::Utc::now();
    println!(
        "{} campaigns — {} active (30d), {} tags",
        campaigns.len(),
        launchkit_app::active_count(&campaigns, now),
        launchkit_app::distinct_tag_count(&campaigns)
    );
    for campaign in &campaigns {
        println!(
            "{}  {}  {}",
            campaign.id,
            launchkit_app::format_created_at(campaign.created_at),
            launchkit_app::display_title(campaign)
        );
    }
    Ok(())
}

async fn run_show(pool: &SqlitePool, id: &str) -> anyhow::Result<()> {
    let mut controller = DashboardController::new();
    // An explicit id never produces a route change; only the state matters here.
    let _route = controller.resolve(pool, Some(id)).await;

    match controller.state() {
        DashboardState::Selected(vm) => {
            println!("{} ({})", vm.campaign.title, vm.campaign.id);
            println!(
                "created: {}",
                launchkit_app::format_created_at(vm.campaign.created_at)
            );

            match vm.personas() {
                SectionView::Data(personas) => println!("personas: {}", personas.len()),
                SectionView::NoData => println!("personas: no data"),
            }
            match vm.channels() {
                SectionView::Data(channels) => println!("channels: {}", channels.join(", ")),
                SectionView::NoData => println!("channels: no data"),
            }
            match vm.calendar() {
                SectionView::Data(items) => println!("calendar: {} entries", items.len()),
                SectionView::NoData => println!("calendar: no data"),
            }

            let risk_tag = if vm.risk.is_placeholder() {
                " (placeholder)"
            } else {
                ""
            };
            if let Some(score) = vm.risk.value.risk_score {
                println!("risk score: {score}/10{risk_tag}");
            }
            let competitors_tag = if vm.competitors.is_placeholder() {
                " (placeholder)"
            } else {
                ""
            };
            println!(
                "competitors{competitors_tag}: {}",
                vm.competitors.value.join(", ")
            );
            Ok(())
        }
        DashboardState::Empty => {
            println!("no campaigns yet");
            Ok(())
        }
        DashboardState::Error(message) => Err(anyhow::anyhow!("{message}")),
        DashboardState::Loading => Err(anyhow::anyhow!("dashboard resolution did not complete")),
    }
}

async fn run_inputs(pool: &SqlitePool) -> anyhow::Result<()> {
    let inputs = launchkit_db::list_inputs(pool).await?;
    if inputs.is_empty() {
        println!("no inputs yet");
        return Ok(());
    }
    for input in &inputs {
        println!(
            "{}  {}  {} ({} files)",
            input.id,
            launchkit_app::format_created_at(input.created_at),
            input.business_idea,
            input.uploads.len()
        );
    }
    Ok(())
}
