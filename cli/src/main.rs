//! CLI entrypoint for agora
//!
//! Wires all layers together using dependency injection: loads the merged
//! configuration, builds one scene per configured player, drives the day
//! loop, and prints the standings hand-off payload.

use anyhow::{Context, Result, bail};
use agora_application::{
    DayCycleScene, MetricTable, NoMetricTable, NoTranscript, Player, Scene, ScenePorts,
    TranscriptLog, collect_standings, read_directory, shared_directory,
};
use agora_domain::StoreAddress;
use agora_infrastructure::{
    ChatPlayer, ConfigLoader, CsvMetricTable, FsPromptCatalog, HttpVenueStore, JsonlTranscript,
};
use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "agora", version, about = "Day-cycle market scenes driven by language-model agents")]
struct Cli {
    /// Path to a TOML config file (merged over agora.toml and defaults)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Number of days to simulate (overrides config)
    #[arg(short, long)]
    days: Option<u64>,

    /// Experiment name used for the log directory (overrides config)
    #[arg(long)]
    exp_name: Option<String>,

    /// Directory holding the prompt templates
    #[arg(long, default_value = "prompts/day_cycle")]
    prompts: PathBuf,

    /// Increase log verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress the standings printout
    #[arg(short, long)]
    quiet: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    let mut config = ConfigLoader::load(cli.config.as_ref())
        .map_err(|e| anyhow::anyhow!(e))
        .context("loading configuration")?;
    if let Some(days) = cli.days {
        config.simulation.days = days;
    }
    if let Some(exp_name) = cli.exp_name {
        config.simulation.exp_name = exp_name;
    }
    if config.players.is_empty() {
        bail!("no players configured; add [[players]] entries to agora.toml");
    }

    // === Dependency Injection ===
    // Fail fast on the template set before anything else is wired up
    let catalog = Arc::new(
        FsPromptCatalog::load(&cli.prompts)
            .with_context(|| format!("loading prompt catalog from {}", cli.prompts.display()))?,
    );
    let store = Arc::new(HttpVenueStore::new(config.store.host.clone()));
    let api_key = std::env::var(&config.llm.api_key_env).ok();
    let directory = shared_directory();

    // One scene (and one store address) per configured player
    let mut scenes = Vec::new();
    for (i, player_config) in config.players.iter().enumerate() {
        let home = StoreAddress(config.store.base_address + i as u16);
        let log_dir = config
            .logging
            .dir
            .join(&config.simulation.exp_name)
            .join(format!("day_cycle_{}", home));

        let transcript: Arc<dyn TranscriptLog> =
            match JsonlTranscript::new(log_dir.join("messages.jsonl")) {
                Some(t) => Arc::new(t),
                None => Arc::new(NoTranscript),
            };
        let metrics: Arc<dyn MetricTable> = match CsvMetricTable::new(&log_dir) {
            Some(t) => Arc::new(t),
            None => Arc::new(NoMetricTable),
        };

        let model = player_config
            .model
            .clone()
            .unwrap_or_else(|| config.llm.model.clone());
        let player: Arc<dyn Player> = Arc::new(ChatPlayer::new(
            player_config.name.clone(),
            player_config.persona.clone(),
            model,
            config.llm.api_base.clone(),
            api_key.clone(),
        ));

        let ports = ScenePorts {
            store: store.clone(),
            prompts: catalog.clone(),
            transcript,
            metrics,
        };
        let scene = DayCycleScene::new(
            home,
            vec![player],
            config.pipeline(),
            directory.clone(),
            ports,
            config.engine,
        )?;
        scenes.push(scene);
    }

    info!(
        "running {} day(s) across {} venue(s)",
        config.simulation.days,
        scenes.len()
    );

    for day in 0..config.simulation.days {
        for scene in scenes.iter_mut() {
            let home = scene.home();
            scene
                .run(None)
                .await
                .with_context(|| format!("day {} failed for venue at {}", day, home))?;
        }
    }

    // Hand-off payload for a downstream scene
    let snapshot = read_directory(&directory).clone();
    let standings = collect_standings(store.as_ref(), catalog.as_ref(), &snapshot).await?;

    if !cli.quiet {
        println!("{}", serde_json::to_string_pretty(&standings)?);
    }

    Ok(())
}
