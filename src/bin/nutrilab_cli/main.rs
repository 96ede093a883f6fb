// ABOUTME: NutriLab CLI - command-line front end for supplement recommendations
// ABOUTME: Scores profiles, walks quiz answers to results, and browses the reference data
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriLab
//!
//! Usage:
//! ```bash
//! # Recommend for a symptom and a goal
//! nutrilab-cli recommend --symptom fatigue --goal heart_health --age 46-60 --gender femme
//!
//! # Vegan profile, top 5, human-readable output
//! nutrilab-cli --format pretty recommend --goal heart_health --diet vegan --top 5
//!
//! # Convert saved quiz answers and score them
//! nutrilab-cli quiz --answers answers.json
//!
//! # Browse the catalog
//! nutrilab-cli catalog list --category sleep --vegan
//! nutrilab-cli catalog show ashwagandha
//!
//! # Search symptom categories
//! nutrilab-cli symptoms search anxiety
//!
//! # Validate an override data directory
//! nutrilab-cli --data-dir ./data validate
//! ```

mod commands;
mod helpers;

use clap::{Parser, Subcommand};
use helpers::display::{print_error, OutputFormat};
use nutrilab::catalog::ReferenceData;
use nutrilab::config::IntelligenceConfig;
use nutrilab::constants::{env_config, service_names};
use nutrilab::errors::{AppError, AppResult};
use nutrilab::intelligence::SupplementRecommendationEngine;
use nutrilab::logging::LoggingConfig;
use std::env;
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;
use tracing::{debug, info};

type Result<T> = AppResult<T>;

#[derive(Parser)]
#[command(
    name = "nutrilab-cli",
    version,
    about = "NutriLab supplement recommendation CLI",
    long_about = "Ranks supplements from symptoms, goals, and lifestyle factors, and browses the reference data the scores are computed from."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Directory overriding the bundled data files (falls back to `NUTRILAB_DATA_DIR`)
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Output style
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Json)]
    format: OutputFormat,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Score a profile and print a recommendation report
    Recommend(commands::recommend::RecommendArgs),

    /// Convert saved quiz answers and score them
    Quiz {
        /// JSON file with quiz answers
        #[arg(long)]
        answers: PathBuf,

        /// Number of recommendations
        #[arg(long)]
        top: Option<usize>,
    },

    /// Supplement catalog commands
    Catalog {
        #[command(subcommand)]
        action: CatalogCommand,
    },

    /// Symptom category commands
    Symptoms {
        #[command(subcommand)]
        action: SymptomsCommand,
    },

    /// Load and validate the reference data, then print counts
    Validate,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum CatalogCommand {
    /// List supplements
    List {
        /// Only supplements tagged with this category
        #[arg(long)]
        category: Option<String>,

        /// Only vegan supplements
        #[arg(long)]
        vegan: bool,
    },

    /// Show one supplement
    Show {
        /// Supplement id
        id: String,
    },
}

#[non_exhaustive]
#[derive(Subcommand)]
enum SymptomsCommand {
    /// Search categories by id, name, or keyword
    Search {
        /// Search text
        query: String,
    },

    /// List every category
    List,
}

fn load_data(data_dir: Option<PathBuf>) -> Result<Arc<ReferenceData>> {
    let dir = data_dir.or_else(|| env::var(env_config::DATA_DIR).ok().map(PathBuf::from));
    match dir {
        Some(dir) => {
            info!(dir = %dir.display(), "Using reference data override");
            Ok(Arc::new(ReferenceData::load_dir(&dir)?))
        }
        None => {
            debug!("Using bundled reference data");
            ReferenceData::bundled()
        }
    }
}

fn engine(data: Arc<ReferenceData>) -> Result<SupplementRecommendationEngine> {
    let config = IntelligenceConfig::load().map_err(AppError::from)?;
    Ok(SupplementRecommendationEngine::with_config(
        data,
        config.recommendation_engine,
    ))
}

fn run(cli: Cli) -> Result<()> {
    let data = load_data(cli.data_dir)?;
    let format = cli.format;

    match cli.command {
        Command::Recommend(args) => {
            commands::recommend::run(&engine(data)?, args, format)?;
        }
        Command::Quiz { answers, top } => {
            commands::quiz::run(&engine(data)?, &answers, top, format)?;
        }
        Command::Catalog { action } => match action {
            CatalogCommand::List { category, vegan } => {
                commands::catalog::list(&data, category.as_deref(), vegan, format)?;
            }
            CatalogCommand::Show { id } => {
                commands::catalog::show(&data, &id, format)?;
            }
        },
        Command::Symptoms { action } => match action {
            SymptomsCommand::Search { query } => {
                commands::symptoms::search(&data, &query, format)?;
            }
            SymptomsCommand::List => {
                commands::symptoms::list(&data, format)?;
            }
        },
        Command::Validate => {
            commands::validate::run(&data, format)?;
        }
    }

    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let mut logging = LoggingConfig::from_env().with_service_name(service_names::NUTRILAB_CLI);
    if cli.verbose {
        logging = logging.with_level("debug");
    }
    if let Err(error) = logging.init() {
        eprintln!("Failed to initialize logging: {error}");
    }

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            print_error(error);
            ExitCode::FAILURE
        }
    }
}
