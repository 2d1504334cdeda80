//! CLI argument definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::config::models::Format;

#[derive(Parser, Debug)]
#[command(name = "infra-preflight")]
#[command(version)]
#[command(about = crate::DESCRIPTION, long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    /// Settings file (YAML)
    #[arg(short, long, global = true, env = "PREFLIGHT_SETTINGS")]
    pub settings: Option<PathBuf>,

    /// Overrides the configured log level
    #[arg(long, global = true)]
    pub log_level: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Validate an infrastructure config against a cloud snapshot
    Validate(ValidateArgs),
    /// Add a route to the VPC's only route table
    AddRoute(AddRouteArgs),
}

#[derive(Parser, Debug)]
pub struct ValidateArgs {
    /// Infrastructure config (YAML, or JSON with a .json extension)
    #[arg(short, long)]
    pub config: PathBuf,

    /// Cloud state snapshot (YAML)
    #[arg(long)]
    pub state: PathBuf,

    #[arg(short, long, value_enum)]
    pub output: Option<Format>,

    /// Deadline for all probe calls in seconds (1..=3600)
    #[arg(long)]
    pub timeout_secs: Option<u64>,
}

#[derive(Parser, Debug)]
pub struct AddRouteArgs {
    /// Cloud state snapshot (YAML), updated in place
    #[arg(long)]
    pub state: PathBuf,

    #[arg(long)]
    pub vpc_id: String,

    #[arg(long)]
    pub gateway_id: String,

    /// Destination CIDR block
    #[arg(long)]
    pub destination: String,
}
