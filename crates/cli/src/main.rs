//! subsidy-cli — command-line front-end for the subsidy rule engine.
//!
//! Stands in for the desktop application: validates the rule
//! configuration, answers eligibility queries, checks grant
//! combinations for conflicts, and runs the hot-reload watcher.

use std::collections::BTreeSet;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing::info;

use subsidy_engine::{
    ConflictChecker, EligibilityEvaluator, LandContext, PersonAttributes, RuleStore, RuleWatcher,
};

// ── CLI ─────────────────────────────────────────────────────────────

/// Subsidy rule engine — eligibility and conflict queries over the JSON rule files.
#[derive(Parser, Debug)]
#[command(name = "subsidy-cli", version, about)]
struct Cli {
    /// Directory containing subsidy_rules.json and conflict_rules.json.
    #[arg(long, env = "SUBSIDY_CONFIG_DIR", default_value = "config")]
    config_dir: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Load and validate the rule configuration, reporting counts.
    Validate,
    /// List the subsidy rules a person qualifies for.
    Eligible {
        /// Age of the person.
        #[arg(long)]
        age: u32,
        /// Land type of the parcel under consideration.
        #[arg(long)]
        land_type: String,
    },
    /// Check a proposed subsidy combination for conflicts.
    Check {
        /// Subsidy ids of the proposed combination.
        #[arg(required = true)]
        ids: Vec<String>,
    },
    /// Watch the config directory and hot-reload rules until Ctrl-C.
    Watch {
        /// Debounce interval for filesystem events, in milliseconds.
        #[arg(long, default_value_t = 500)]
        debounce_ms: u64,
    },
}

// ── main ────────────────────────────────────────────────────────────

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let store = Arc::new(
        RuleStore::open(cli.config_dir.as_str())
            .with_context(|| format!("failed to load rules from '{}'", cli.config_dir))?,
    );

    match cli.command {
        Command::Validate => {
            let rules = store.snapshot();
            println!(
                "ok: {} subsidy rules, {} conflict rules",
                rules.subsidy_rules().len(),
                rules.conflict_rules().len()
            );
        }
        Command::Eligible { age, land_type } => {
            let evaluator = EligibilityEvaluator::new(Arc::clone(&store));
            let person = PersonAttributes {
                age,
                land_type: land_type.clone(),
                ..Default::default()
            };
            let land = LandContext { land_type };
            let matches = evaluator.eligible(&person, &land);
            println!("{}", serde_json::to_string_pretty(&matches)?);
        }
        Command::Check { ids } => {
            let checker = ConflictChecker::new(Arc::clone(&store));
            let candidates: BTreeSet<String> = ids.into_iter().collect();
            match checker.first_conflict(&candidates) {
                Some(c) => {
                    println!(
                        "conflict: {} <-> {} ({})",
                        c.subsidy_id, c.conflicting_subsidy_id, c.description
                    );
                    std::process::exit(1);
                }
                None => println!("no conflict"),
            }
        }
        Command::Watch { debounce_ms } => {
            let _watcher = RuleWatcher::spawn_with_debounce(
                Arc::clone(&store),
                Duration::from_millis(debounce_ms),
            )?;
            info!(config_dir = %cli.config_dir, "watching for rule changes, Ctrl-C to exit");
            tokio::signal::ctrl_c().await?;
            info!("shutting down");
        }
    }

    Ok(())
}
