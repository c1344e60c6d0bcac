// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]
#![allow(clippy::multiple_crate_versions)]

mod error;
mod fetcher;
mod render;

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use clap::{Parser, Subcommand};
use foia_finder::{Pick, ResolveOutcome, SelectionResolver, SelectionState};
use foia_finder_catalog::{CatalogStore, load_catalog};
use foia_finder_domain::ComponentId;
use tracing::{info, warn};

use crate::error::CliError;
use crate::fetcher::FileDetailFetcher;
use crate::render::{render_checkboxes, render_selection};

/// FOIA Agency Finder - preview where to send a FOIA request
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the JSON catalog of agencies and agency components.
    #[arg(short, long)]
    catalog: PathBuf,

    /// Path to a JSON map of component ids to detail payloads.
    /// Without it every component detail fetch fails.
    #[arg(short, long)]
    details: Option<PathBuf>,

    /// Artificial latency added to each detail fetch, in milliseconds.
    #[arg(long, default_value_t = 0)]
    fetch_delay_ms: u64,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
enum Command {
    /// Select an agency and optionally build a component filter.
    ///
    /// Filter options apply in order: --select-all, --select-none, then
    /// each --toggle.
    Agency {
        /// The agency abbreviation.
        abbreviation: String,

        /// Toggle a component in the report filter (repeatable).
        #[arg(long = "toggle", value_name = "COMPONENT_ID")]
        toggles: Vec<i64>,

        /// Select every component of the agency.
        #[arg(long)]
        select_all: bool,

        /// Clear the component selection.
        #[arg(long)]
        select_none: bool,
    },
    /// Select a single agency component and preview its contacts.
    Component {
        /// The component id.
        id: i64,
    },
}

impl Command {
    fn pick(&self) -> Pick {
        match self {
            Self::Agency { abbreviation, .. } => Pick::agency(abbreviation),
            Self::Component { id } => Pick::component(ComponentId::new(*id)),
        }
    }

    const fn edits_filter(&self) -> bool {
        match self {
            Self::Agency {
                toggles,
                select_all,
                select_none,
                ..
            } => !toggles.is_empty() || *select_all || *select_none,
            Self::Component { .. } => false,
        }
    }
}

/// Resolves the command's pick and applies its filter edits.
///
/// # Errors
///
/// Returns an error if the pick cannot be resolved, or if filter edits
/// are requested for an agency that has no filter or name a component
/// outside it.
async fn run(
    resolver: &SelectionResolver<FileDetailFetcher>,
    command: &Command,
) -> Result<String, CliError> {
    let state: SelectionState = match resolver.resolve(command.pick()).await? {
        ResolveOutcome::Committed(state) => state,
        ResolveOutcome::Superseded => {
            warn!("Pick was superseded before it resolved");
            resolver.selection()
        }
    };

    let mut out: String = render_selection(&state);

    if let Command::Agency {
        abbreviation,
        toggles,
        select_all,
        select_none,
    } = command
    {
        if !resolver.has_filter() {
            if command.edits_filter() {
                return Err(CliError::NoFilter(abbreviation.clone()));
            }
            return Ok(out);
        }
        if *select_all {
            resolver.select_all_components();
        }
        if *select_none {
            resolver.select_no_components();
        }
        for &id in toggles {
            resolver.checked_toggle_component(ComponentId::new(id))?;
        }
        out.push_str("Report filter:\n");
        out.push_str(&render_checkboxes(&resolver.filter_checkboxes()));
    }

    Ok(out)
}

fn build_resolver(args: &Args) -> Result<SelectionResolver<FileDetailFetcher>, CliError> {
    let catalog: CatalogStore = load_catalog(&args.catalog)?;
    let delay: Duration = Duration::from_millis(args.fetch_delay_ms);
    let fetcher: FileDetailFetcher = match &args.details {
        Some(path) => FileDetailFetcher::from_path(path, delay)?,
        None => {
            info!("No detail file given; component details are unavailable");
            FileDetailFetcher::new(std::collections::HashMap::new(), delay)
        }
    };
    Ok(SelectionResolver::new(Arc::new(catalog), fetcher))
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command-line arguments
    let args: Args = Args::parse();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    info!("Starting FOIA Agency Finder");

    let resolver: SelectionResolver<FileDetailFetcher> = build_resolver(&args)?;
    let output: String = run(&resolver, &args.command).await?;
    print!("{output}");
    Ok(())
}
