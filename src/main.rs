use anyhow::Context;
use clap::Parser;
use jazznode_search::cli::{Cli, Commands};
use jazznode_search::config::Config;
use jazznode_search::dataset::load_dataset;
use jazznode_search::format::render_view;
use jazznode_search::search::{SearchView, search};
use jazznode_search::server::{SearchServer, SearchState};
use rmcp::{ServiceExt, transport::stdio};
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr to avoid interfering with MCP protocol on stdout
    jazznode_search::tracing::init(cli.verbose);

    let mut config = Config::discover(cli.config.as_deref()).context("Failed to load config")?;
    if let Some(data) = cli.data {
        config.data_path = Some(data);
    }
    if let Some(locale) = cli.locale {
        config.locale = locale;
    }

    let data_path = config
        .data_path
        .clone()
        .context("No dataset configured; pass --data or set data_path in the config file")?;
    let data = Arc::new(load_dataset(&data_path)?);

    match cli.command {
        Commands::Serve => {
            tracing::info!("Starting jazznode-search MCP server");

            let server = SearchServer::new(SearchState::new(data, config));
            let service = server.serve(stdio()).await.inspect_err(|e| {
                tracing::error!("Error serving MCP server: {:?}", e);
            })?;

            service.waiting().await?;
        }
        Commands::Query {
            query,
            filter,
            per_group,
            limit,
            json,
        } => {
            config
                .override_limits(per_group, limit)
                .context("Invalid display limits")?;

            let results = search(&query, &data, filter);
            if json {
                let output = serde_json::to_string_pretty(&results)
                    .context("Failed to serialize results")?;
                println!("{}", output);
            } else {
                let view = SearchView::build(&results, filter, config.limits);
                print!("{}", render_view(&query, &view, &config.locale));
            }
        }
    }

    Ok(())
}
