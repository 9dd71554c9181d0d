//! Texture Search - command-line front end.
//!
//! Runs the two-stage assistant search for a query or category and renders
//! the resulting texture cards.

use std::process::ExitCode;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;

mod cli;
mod render;

use cli::{Cli, Commands, OutputArgs, ServiceArgs};
use texture_client::{ClientConfig, MessagesClient};
use texture_core::{AssistantBackend, SearchSession, TrustPolicy};
use texture_types::{Category, SearchQuery};

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    texture_core::logger::init_logger(&cli.log_level);

    let (query, output, service) = match cli.command {
        Commands::Categories => {
            render::print_categories();
            return Ok(ExitCode::SUCCESS);
        },
        Commands::Search { query, output, service } => {
            let joined = query.join(" ");
            let query = SearchQuery::new(&joined).context("Search query is empty")?;
            (query, output, service)
        },
        Commands::Category { id, output, service } => {
            let category = Category::find(&id).with_context(|| {
                format!("Unknown category '{id}'. Run `texture-search categories` to list them.")
            })?;
            (SearchQuery::from_category(category), output, service)
        },
    };

    let session = build_session(service)?;
    run(&session, &query, &output).await
}

fn build_session(service: ServiceArgs) -> Result<SearchSession> {
    let mut config = ClientConfig::from_env();
    if let Some(key) = service.api_key {
        config.api_key = key;
    }
    if let Some(url) = service.base_url {
        config.base_url = url;
    }
    if let Some(model) = service.model {
        config.model = model;
    }
    if let Some(secs) = service.timeout {
        config.timeout_secs = secs;
    }

    let client = MessagesClient::new(config).context("Invalid client configuration")?;
    let backend = Arc::new(AssistantBackend::new(client, TrustPolicy::default()));
    Ok(SearchSession::new(backend.clone(), backend))
}

async fn run(
    session: &SearchSession,
    query: &SearchQuery,
    output: &OutputArgs,
) -> Result<ExitCode> {
    if !output.json {
        eprintln!("Searching for free 4K {query} textures...");
    }

    let Some(state) = session.run(query).await else {
        // Single-run CLI: nothing can supersede this search.
        tracing::warn!("Search result was superseded");
        return Ok(ExitCode::SUCCESS);
    };

    if render::print_state(&state, output.json, output.preview)? {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::FAILURE)
    }
}
