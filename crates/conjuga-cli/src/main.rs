//! `conjuga`: drill verb conjugations from the terminal.

mod cli;
mod commands;
mod tracing_setup;

use std::sync::Arc;

use anyhow::Context;
use clap::Parser;

use conjuga_catalog::Catalog;
use conjuga_core::config::ConjugaConfig;
use conjuga_core::models::PreferenceFlags;
use conjuga_feedback::GeminiGateway;
use conjuga_session::DrillEngine;
use conjuga_storage::StorageEngine;

use cli::{Cli, Commands};

fn load_config(cli: &Cli) -> anyhow::Result<ConjugaConfig> {
    match &cli.config {
        Some(path) => ConjugaConfig::from_file(path)
            .with_context(|| format!("loading config from {}", path.display())),
        None => Ok(ConjugaConfig::default()),
    }
}

fn build_engine(config: &ConjugaConfig) -> anyhow::Result<DrillEngine> {
    let catalog = Catalog::builtin().context("loading built-in catalog")?;
    let store = StorageEngine::from_config(&config.storage)
        .with_context(|| format!("opening database {}", config.storage.db_path))?;

    let mut engine = DrillEngine::new(Arc::new(catalog), Arc::new(store), config.session.clone());

    if config.feedback.enabled {
        match GeminiGateway::from_feedback_config(&config.feedback) {
            Ok(gateway) => engine = engine.with_gateway(Arc::new(gateway)),
            Err(e) => tracing::warn!(error = %e, "sentence feedback disabled"),
        }
    }
    Ok(engine)
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = load_config(&cli)?;
    tracing_setup::init_tracing(&config.observability);

    let engine = build_engine(&config)?;
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Commands::Drill { batch_size } => {
            let batch_size = batch_size.unwrap_or(config.session.batch_size);
            let stdin = std::io::stdin();
            commands::drill::run(&engine, &cli.learner, batch_size, &mut stdin.lock(), &mut out)
        }
        Commands::Records => commands::records::run(&engine, &cli.learner, &mut out),
        Commands::Sentences => commands::sentences::run(&engine, &cli.learner, &mut out),
        Commands::Prefs {
            verb,
            tense,
            never_show,
            always_show,
            show_primarily,
        } => {
            let flags = PreferenceFlags {
                never_show,
                always_show,
                show_primarily,
            };
            commands::prefs::run(&engine, &cli.learner, &verb, &tense, flags, &mut out)
        }
    }
}
