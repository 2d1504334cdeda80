//! infra-preflight - validate declared VPC network configuration against cloud state
//!
//! Exit codes: 0 when the configuration is valid, 1 when validation errors
//! were found, 2 when inputs could not be loaded, 3 when a cloud operation
//! failed.

use anyhow::Context;
use clap::Parser;
use infra_preflight::cli::{AddRouteArgs, Args, Command, ValidateArgs, render_report};
use infra_preflight::config::Settings;
use infra_preflight::utils::logging::init_logging;
use infra_preflight::{
    ConfigValidator, InfrastructureConfig, NetworkConfig, PreflightError, SnapshotProbe,
    ValidationContext, add_default_route,
};
use std::process::ExitCode;
use std::sync::Arc;
use tracing::{error, info};

#[tokio::main]
async fn main() -> ExitCode {
    let _ = dotenvy::dotenv();
    let args = Args::parse();

    let settings = match load_settings(&args).await {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            return ExitCode::from(2);
        }
    };

    if let Err(e) = init_logging(settings.logging()) {
        eprintln!("Error: {}", e);
        return ExitCode::from(2);
    }

    info!(build = %infra_preflight::build_info(), "Starting");
    let result = match &args.command {
        Command::Validate(validate) => run_validate(&settings, validate).await,
        Command::AddRoute(add_route) => run_add_route(add_route).await.map(|()| true),
    };

    match result {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(1),
        Err(e) => {
            error!("{:#}", e);
            eprintln!("Error: {:#}", e);
            let input_error = e
                .downcast_ref::<PreflightError>()
                .is_none_or(PreflightError::is_input_error);
            if input_error {
                ExitCode::from(2)
            } else {
                ExitCode::from(3)
            }
        }
    }
}

async fn load_settings(args: &Args) -> anyhow::Result<Settings> {
    let mut settings = match &args.settings {
        Some(path) => Settings::from_file(path).await?.with_env_overrides()?,
        None => Settings::from_env()?,
    };
    if let Some(level) = &args.log_level {
        settings.preflight.logging.level = level.clone();
    }
    if let Command::Validate(ValidateArgs {
        timeout_secs: Some(timeout_secs),
        ..
    }) = &args.command
    {
        settings.preflight.probe.timeout_secs = *timeout_secs;
    }
    settings.validate()?;
    Ok(settings)
}

/// Returns whether the configuration is valid
async fn run_validate(settings: &Settings, args: &ValidateArgs) -> anyhow::Result<bool> {
    let config: NetworkConfig = InfrastructureConfig::from_file(&args.config)
        .await
        .with_context(|| format!("loading {}", args.config.display()))?
        .into();
    let probe = SnapshotProbe::from_file(&args.state)
        .await
        .with_context(|| format!("loading {}", args.state.display()))?;

    let ctx = ValidationContext::with_timeout(settings.probe().timeout());

    let validator = ConfigValidator::new(Arc::new(probe));
    let errors = validator.validate(&ctx, &config).await;

    let format = args.output.unwrap_or(settings.output().format);
    println!("{}", render_report(&errors, format)?);

    info!(errors = errors.len(), "Validation finished");
    Ok(errors.is_empty())
}

async fn run_add_route(args: &AddRouteArgs) -> anyhow::Result<()> {
    let client = SnapshotProbe::from_file(&args.state)
        .await
        .with_context(|| format!("loading {}", args.state.display()))?;

    add_default_route(&client, &args.vpc_id, &args.gateway_id, &args.destination).await?;
    client.save(&args.state).await?;

    info!(vpc_id = %args.vpc_id, destination = %args.destination, "Route added");
    Ok(())
}
