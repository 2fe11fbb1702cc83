//! `uqdemo-enumerate`: Draws the multi-indices of the linear enumeration rule.
//!
//! **Usage:**
//! ```text
//! uqdemo-enumerate [--dimension <d>] [--format svg|json] [--out <path>] by-rank [--count <n>] [--label-offset <f>]
//! uqdemo-enumerate [--dimension <d>] [--format svg|json] [--out <path>] by-stratum [--max-stratum <n>]
//! uqdemo-enumerate [--dimension <d>] [--format svg|json] list [--count <n>]
//! ```
//!
//! Without `--out` the chart is printed to stdout.

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use uqdemo_explorer::{MultiIndexEnumerationExplorer, DEFAULT_LABEL_OFFSET};
use uqdemo_multiindex::{EnumerationFunction, LinearEnumerateFunction};
use uqdemo_plot::{FigureOptions, SvgView, ViewOptions};

/// Draw the multi-indices of the linear enumeration rule.
#[derive(Parser)]
#[command(
    name = "uqdemo-enumerate",
    about = "Draw the multi-indices of the linear enumeration rule"
)]
struct Args {
    /// Number of inputs of the enumeration rule.
    #[arg(long, default_value_t = 2)]
    dimension: usize,

    /// Output format of the chart.
    #[arg(long, value_enum, default_value_t = Format::Svg)]
    format: Format,

    /// File to write the chart to (default: stdout).
    #[arg(long)]
    out: Option<PathBuf>,

    /// Figure width in inches.
    #[arg(long, default_value_t = 4.0)]
    width: f64,

    /// Figure height in inches.
    #[arg(long, default_value_t = 4.0)]
    height: f64,

    /// Draw the legend inside the axes instead of next to them.
    #[arg(long)]
    legend_inside: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Plot the first multi-indices, each labelled with its rank.
    ByRank {
        /// Number of leading ranks to plot.
        #[arg(long, default_value_t = 20)]
        count: usize,
        /// Displacement of each rank label from its marker.
        #[arg(long, default_value_t = DEFAULT_LABEL_OFFSET)]
        label_offset: f64,
    },
    /// Plot the first strata, one colour per stratum.
    ByStratum {
        /// Number of strata to plot.
        #[arg(long, default_value_t = 5)]
        max_stratum: usize,
    },
    /// Print ranks and multi-indices without drawing (a JSON array with
    /// `--format json`).
    List {
        /// Number of leading ranks to print.
        #[arg(long, default_value_t = 10)]
        count: usize,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Svg,
    Json,
}

fn main() -> Result<()> {
    uqdemo_clients::init_tracing();
    let args = Args::parse();

    let rule = LinearEnumerateFunction::new(args.dimension)?;
    let explorer = MultiIndexEnumerationExplorer::with_svg(&rule);
    let options = ViewOptions {
        figure: FigureOptions {
            width_in: args.width,
            height_in: args.height,
            ..FigureOptions::default()
        },
        legend: if args.legend_inside {
            None
        } else {
            ViewOptions::default().legend
        },
    };

    let view: SvgView = match args.command {
        Command::ByRank {
            count,
            label_offset,
        } => explorer.draw_by_rank_with(count, label_offset, &options)?,
        Command::ByStratum { max_stratum } => {
            explorer.draw_by_stratum_with(max_stratum, &options)?
        }
        Command::List { count } => {
            match args.format {
                Format::Json => println!(
                    "{}",
                    serde_json::to_string_pretty(&uqdemo_clients::rank_listing(&rule, count))?
                ),
                Format::Svg => {
                    for rank in 0..count {
                        let m = rule.call(rank);
                        println!("{rank:>6}  {m}  degree {}", m.total_degree());
                    }
                }
            }
            return Ok(());
        }
    };

    let output = match args.format {
        Format::Svg => view.into_svg(),
        Format::Json => {
            serde_json::to_string_pretty(&uqdemo_plot::serializer::json::to_json(view.chart()))?
        }
    };

    match args.out {
        Some(path) => {
            uqdemo_plot::writer::write(&path, &output)?;
            tracing::info!(path = %path.display(), "chart written");
        }
        None => print!("{output}"),
    }
    Ok(())
}
