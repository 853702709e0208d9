//! Main entry point for the mindfulness poster engine CLI

use std::sync::Arc;

use anyhow::{bail, Context};
use chrono::Utc;
use clap::Parser;
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use poster_engine::catalog::series::PROMPT_SUGGESTIONS;
use poster_engine::catalog::{ContentSeries, GenerationModel};
use poster_engine::cli::{Cli, Commands, EngineCommand, SetupCommand};
use poster_engine::config::Settings;
use poster_engine::export::FileExporter;
use poster_engine::orchestrator::{GenerationRecord, Orchestrator};
use poster_engine::store::{keys, KvStore};
use poster_engine::transport::{ApiClient, Transport, Unconfigured};
use poster_engine::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    // Load configuration
    let settings = match &cli.config {
        Some(path) => Settings::load_from_path(path)?,
        None => Settings::load()?,
    };

    // Initialize logging
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(settings.logging.level.clone()));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer())
        .init();

    let mut store = KvStore::open(&settings.storage.state_path);
    let advanced_default: bool = store.get(keys::ADVANCED_CONTROLS).unwrap_or(false);
    let developer_mode: bool = store.get(keys::DEVELOPER_MODE).unwrap_or(false);

    match cli.command {
        Commands::Setup(command) => run_setup(command, &mut store)?,
        Commands::Engine(command) => {
            let app = build_app(settings, store)?;
            run_engine(command, &app, advanced_default, developer_mode).await?;
        }
    }

    Ok(())
}

fn run_setup(command: SetupCommand, store: &mut KvStore) -> anyhow::Result<()> {
    match command {
        SetupCommand::SetKey { key } => {
            store.set(keys::API_KEY, &key)?;
            println!("API key stored.");
        }
        SetupCommand::Prefs {
            advanced,
            developer,
        } => {
            if let Some(value) = advanced {
                store.set(keys::ADVANCED_CONTROLS, &value)?;
            }
            if let Some(value) = developer {
                store.set(keys::DEVELOPER_MODE, &value)?;
            }
            println!(
                "advanced controls: {}",
                store.get::<bool>(keys::ADVANCED_CONTROLS).unwrap_or(false)
            );
            println!(
                "developer mode:    {}",
                store.get::<bool>(keys::DEVELOPER_MODE).unwrap_or(false)
            );
        }
        SetupCommand::Suggest => {
            let today = ContentSeries::for_date(Utc::now().date_naive());
            println!("Today's series: {} {}", today.emblem(), today.id());
            println!("Series starter: {}", today.suggested_prompt());
            println!();
            println!("Prompt suggestions:");
            for suggestion in PROMPT_SUGGESTIONS {
                println!("  - {}", suggestion);
            }
        }
    }

    Ok(())
}

/// Wire the transport and orchestrator. A missing API key does not fail
/// here; generation commands surface the missing credential instead.
fn build_app(settings: Settings, store: KvStore) -> anyhow::Result<AppState> {
    let stored_key: Option<String> = store
        .get::<String>(keys::API_KEY)
        .filter(|k| !k.trim().is_empty());
    let configured_key = Some(settings.api.key.clone()).filter(|k| !k.trim().is_empty());

    let mut store = store;
    if stored_key.is_none() {
        if let Some(key) = &configured_key {
            // First use of a configured key: keep it in the local store.
            if let Err(e) = store.set(keys::API_KEY, key) {
                tracing::warn!(error = %e, "Failed to persist API key");
            }
        }
    }

    let transport: Arc<dyn Transport> = match stored_key.or(configured_key) {
        Some(key) => Arc::new(ApiClient::new(
            settings.api.endpoint.clone(),
            key,
            settings.api.timeout_secs,
        )?),
        None => Arc::new(Unconfigured),
    };

    let orchestrator = Arc::new(Orchestrator::new(transport, store));
    Ok(AppState {
        settings,
        orchestrator,
    })
}

async fn run_engine(
    command: EngineCommand,
    app: &AppState,
    advanced_default: bool,
    developer_mode: bool,
) -> anyhow::Result<()> {
    let defaults = app.settings.generation.resolved()?;

    match command {
        EngineCommand::Generate { prompt, selection } => {
            let input = selection.compose_input(prompt, advanced_default, 1, &defaults);
            let records = app.orchestrator.generate(&input).await?;
            report_generation(app, &records, developer_mode)?;
        }
        EngineCommand::Batch {
            prompt,
            count,
            selection,
        } => {
            let count = count.unwrap_or(app.settings.generation.batch_count).max(1);
            let input = selection.compose_input(prompt, advanced_default, count, &defaults);
            let records = app.orchestrator.generate(&input).await?;
            report_generation(app, &records, developer_mode)?;
        }
        EngineCommand::Regenerate { id, selection } => {
            let input = selection.compose_input(String::new(), advanced_default, 1, &defaults);
            let records = app.orchestrator.regenerate(id, &input).await?;
            report_generation(app, &records, developer_mode)?;
        }
        EngineCommand::Gallery => {
            let records = app.orchestrator.records();
            if records.is_empty() {
                println!("No stored posters.");
            }
            for record in records {
                print_record(&record);
            }
        }
        EngineCommand::Delete { id } => {
            app.orchestrator.delete(id)?;
            println!("Deleted {}", id);
        }
        EngineCommand::Export { id } => {
            let record = app
                .orchestrator
                .record(id)
                .with_context(|| format!("record not found: {}", id))?;
            let data = record
                .image_data
                .with_context(|| format!("record {} has no stored image data", id))?;
            let exporter = FileExporter::new(app.settings.storage.export_dir.clone());
            let path = exporter.save(&data).await?;
            println!("Exported to {}", path.display());
        }
        EngineCommand::Logs => {
            println!("Daily cost: ${:.4}", app.orchestrator.daily_cost());
            let entries = app.orchestrator.log_entries();
            if entries.is_empty() {
                println!("No requests logged yet.");
            }
            for entry in entries {
                println!("{}", serde_json::to_string_pretty(&entry)?);
            }
        }
    }

    Ok(())
}

fn report_generation(
    app: &AppState,
    records: &[GenerationRecord],
    developer_mode: bool,
) -> anyhow::Result<()> {
    if records.is_empty() {
        bail!("generation returned no retrievable images");
    }

    info!(count = records.len(), "Stored new posters");
    for record in records {
        print_record(record);
    }

    if developer_mode {
        if let Some(entry) = app.orchestrator.log_entries().first() {
            println!("--- request log ---");
            println!("{}", serde_json::to_string_pretty(entry)?);
        }
        println!("Daily cost: ${:.4}", app.orchestrator.daily_cost());
    }

    Ok(())
}

fn print_record(record: &GenerationRecord) {
    let series = record
        .series
        .map(|s| format!("{} {}", s.emblem(), s.id()))
        .unwrap_or_else(|| "-".to_string());
    let cost = record
        .cost
        .map(|c| format!("${:.4}", c))
        .unwrap_or_else(|| "-".to_string());
    let data = record
        .image_data
        .as_ref()
        .map(|d| format!("{} bytes", d.len()))
        .unwrap_or_else(|| "no data".to_string());

    println!(
        "{}  {}  {}  {}  {}  {}  \"{}\"",
        record.id,
        record.created_at.format("%Y-%m-%d %H:%M:%S"),
        GenerationModel::display_name_for(&record.model),
        record.aspect_ratio.id(),
        series,
        format!("{} / {}", cost, data),
        record.prompt,
    );
}
