//! # Media Companion CLI (`mcx`)
//!
//! The `mcx` binary exposes the filter-criteria compiler and the view-mode
//! registry on the command line, for scripting and for checking what a
//! filter panel will send to the query layer.
//!
//! ## Usage
//!
//! ```bash
//! mcx --config ./config/mcx.toml <command>
//! ```
//!
//! ## Commands
//!
//! | Command | Description |
//! |---------|-------------|
//! | `mcx compile <entity>` | Compile a JSON filter selection into an entity filter |
//! | `mcx view-modes <entity>` | List the view modes an entity offers |
//! | `mcx entities` | List entity types, timeline support and dimensions |
//! | `mcx timeline [bucket]` | Resolve a timeline bucket to its date range |
//!
//! ## Examples
//!
//! ```bash
//! # Compile a gallery filter from stdin
//! echo '{"favorite":true,"tagIds":["t1"]}' | mcx compile gallery
//!
//! # Compile a scene filter for March 2024 on the timeline
//! mcx compile scene --selection filters.json --period 2024-03
//!
//! # Which view modes does an image list offer?
//! mcx view-modes image
//! ```

mod compile;
mod config;
mod logging;
mod registry;
mod timeline;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Media Companion CLI — compile media-library filter selections into
/// backend query predicates.
///
/// All commands accept a `--config` flag pointing to a TOML configuration
/// file. A missing file means built-in defaults.
#[derive(Parser)]
#[command(
    name = "mcx",
    about = "Media Companion — compile media-library filter selections into query predicates",
    version
)]
struct Cli {
    /// Path to configuration file (TOML).
    #[arg(long, global = true, default_value = "./config/mcx.toml")]
    config: PathBuf,

    /// Enable debug logging on stderr.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Top-level CLI commands.
#[derive(Subcommand)]
enum Commands {
    /// Compile a filter selection for one entity type.
    ///
    /// Reads the selection JSON (`favorite`, `organized`, `rating`, `date`,
    /// `tagIds`, `performerIds`, `galleryIds`, `studioIds`) and prints the
    /// entity filter the query layer expects.
    Compile {
        /// Entity type (`scene`, `gallery`, `image`, `clip`, `performer`,
        /// `tag`, `studio`). Defaults to `filters.default_entity`.
        entity: Option<String>,

        /// Selection file; `-` or omitted reads stdin.
        #[arg(long, short)]
        selection: Option<PathBuf>,

        /// Timeline bucket (`YYYY`, `YYYY-MM`, `YYYY-MM-DD`) that replaces
        /// the selection's date range.
        #[arg(long)]
        period: Option<String>,

        /// Pretty-print the JSON output.
        #[arg(long)]
        pretty: bool,
    },

    /// List the view modes an entity type offers.
    ViewModes {
        /// Entity type key.
        entity: String,

        /// Print as JSON.
        #[arg(long)]
        json: bool,
    },

    /// List entity types with timeline support and supported dimensions.
    Entities,

    /// Resolve a timeline bucket to its inclusive date range.
    Timeline {
        /// Bucket key (`YYYY`, `YYYY-MM`, `YYYY-MM-DD`). When omitted, the
        /// bucket containing `--date` is used.
        bucket: Option<String>,

        /// Bucket size used with `--date`: `year`, `month`, or `day`.
        #[arg(long, default_value = "month")]
        granularity: String,

        /// Date (`YYYY-MM-DD`) to locate; defaults to today.
        #[arg(long)]
        date: Option<String>,

        /// Print as JSON.
        #[arg(long)]
        json: bool,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    // Commands that don't require config
    match &cli.command {
        Commands::ViewModes { entity, json } => return registry::list_view_modes(entity, *json),
        Commands::Entities => return registry::list_entities(),
        Commands::Timeline {
            bucket,
            granularity,
            date,
            json,
        } => {
            return timeline::run_timeline(
                bucket.as_deref(),
                granularity,
                date.as_deref(),
                *json,
            )
        }
        Commands::Compile { .. } => {}
    }

    let cfg = config::load_or_default(&cli.config)?;

    if let Commands::Compile {
        entity,
        selection,
        period,
        pretty,
    } = cli.command
    {
        compile::run_compile(
            &cfg,
            entity.as_deref(),
            selection.as_deref(),
            period.as_deref(),
            pretty,
        )?;
    }

    Ok(())
}
