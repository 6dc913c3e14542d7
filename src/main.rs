mod cli;

use std::fs::File;
use std::io;
use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Commands};

use tallyfin::config;
use tallyfin::render::{JsonRenderer, Renderer, TextRenderer};
use tallyfin::reports::{JobOutcome, ReportJob, ReportKind};
use tallyfin_api::{ApiClient, Credentials};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    // Respect RUST_LOG env var if set, otherwise use defaults based on verbose flag
    let env_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| {
        if cli.verbose {
            "tallyfin=trace,tallyfin_api=debug".to_string()
        } else {
            "tallyfin=debug,tallyfin_api=info".to_string()
        }
    });

    tracing_subscriber::fmt()
        .with_env_filter(&env_filter)
        .init();

    match cli.command {
        Commands::Run {
            kind,
            url,
            api_key,
            user,
            json,
            output,
        } => {
            let rt = tokio::runtime::Runtime::new()?;
            rt.block_on(run_report(
                &kind,
                url,
                api_key,
                user,
                json,
                output.as_deref(),
                cli.config.as_deref(),
            ))
        }
        Commands::Kinds => list_kinds(),
        Commands::Validate {
            config: config_path,
        } => {
            let path = config_path.or(cli.config);
            validate_config(path.as_deref())
        }
        Commands::Version => {
            println!("tallyfin {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
    }
}

async fn run_report(
    kind: &str,
    url: Option<String>,
    api_key: Option<String>,
    user: Option<String>,
    json: bool,
    output: Option<&Path>,
    config_path: Option<&Path>,
) -> Result<()> {
    let config = config::load_config_or_default(config_path)?;

    let kind: ReportKind = kind.parse().map_err(|_| {
        anyhow::anyhow!("Unknown report kind '{kind}' (list them with `tallyfin kinds`)")
    })?;

    // CLI flags win over config values
    let url = url
        .or_else(|| (!config.instance.url.is_empty()).then(|| config.instance.url.clone()))
        .context("No server URL configured; pass --url or set instance.url in the config")?;
    let api_key = api_key
        .or_else(|| (!config.instance.api_key.is_empty()).then(|| config.instance.api_key.clone()))
        .context("No API token configured; pass --api-key or set instance.api_key in the config")?;

    let admin_user = match user.or_else(|| config.instance.user_id.clone()) {
        Some(id) => id,
        None => discover_admin_user(&url, &api_key).await?,
    };

    let credentials = Credentials::new(url, api_key, admin_user);

    let json = json || config.output.format == "json";
    let renderer: Arc<dyn Renderer> = match output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create output file: {:?}", path))?;
            if json {
                Arc::new(JsonRenderer::new(file))
            } else {
                Arc::new(TextRenderer::new(file))
            }
        }
        None => {
            if json {
                Arc::new(JsonRenderer::new(io::stdout()))
            } else {
                Arc::new(TextRenderer::new(io::stdout()))
            }
        }
    };

    let job = ReportJob::spawn(credentials, kind, renderer);
    tracing::info!(job = %job.id(), kind = %kind, "report requested");

    match job.wait().await {
        JobOutcome::Success(_) => Ok(()),
        JobOutcome::PartialFailure(model) => {
            eprintln!(
                "warning: {} items failed metadata fetch; their correlations are missing",
                model.failed_items.len()
            );
            Ok(())
        }
        JobOutcome::Failure(error) => Err(error).context(format!("Report '{kind}' failed")),
    }
}

/// Pick the first administrator account from the `Users` endpoint.
async fn discover_admin_user(url: &str, api_key: &str) -> Result<String> {
    let probe = ApiClient::new(Credentials::new(url, api_key, ""));
    let users = probe
        .users()
        .await
        .context("Failed to list users while discovering the admin account")?;

    users
        .into_iter()
        .find(|u| u.policy.is_administrator)
        .map(|u| u.id)
        .context("No administrator account found; pass --user explicitly")
}

fn list_kinds() -> Result<()> {
    println!("Available report kinds:\n");
    for kind in ReportKind::ALL {
        println!("  {:<16} {}", kind.as_str(), kind.description());
    }
    Ok(())
}

fn validate_config(path: Option<&Path>) -> Result<()> {
    match path {
        Some(p) => {
            println!("Validating config: {:?}", p);
            let config = config::load_config(p)?;
            println!("✓ Configuration is valid");
            println!(
                "  Instance: {}",
                if config.instance.url.is_empty() {
                    "(not set)"
                } else {
                    &config.instance.url
                }
            );
            println!(
                "  API key: {}",
                if config.instance.api_key.is_empty() {
                    "(not set)"
                } else {
                    "(set)"
                }
            );
            println!("  Output format: {}", config.output.format);
        }
        None => {
            println!("No config file specified, using defaults");
            let config = config::Config::default();
            println!("Default output format: {}", config.output.format);
        }
    }

    Ok(())
}
