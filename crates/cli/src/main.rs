//! Stowage container load planner CLI

mod report;

use anyhow::Context;
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use stowage::core::LoadRequest;
use stowage::{catalog, ContainerKind, ItemDefinition, PackResult, Packer, ShelfPacker};

use crate::report::PackReport;

#[derive(Parser)]
#[command(name = "stowage")]
#[command(about = "Plan how items are loaded into a shipping container")]
#[command(version)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the standard container sizes
    Containers,

    /// Pack an item list into one container
    Pack {
        /// Item list: CSV with the standard columns, or a JSON load request
        input: PathBuf,

        /// Container type (20ft, 40ft, 40ft HC); overrides the request's container
        #[arg(short, long)]
        container: Option<String>,

        /// Output file for the JSON pack report
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Reject rows with non-positive dimensions, weight or quantity
        #[arg(long)]
        strict: bool,

        /// Print every placement
        #[arg(short, long)]
        list: bool,
    },

    /// Pack an item list into every standard container and compare
    Compare {
        /// Item list: CSV with the standard columns, or a JSON load request
        input: PathBuf,

        /// Reject rows with non-positive dimensions, weight or quantity
        #[arg(long)]
        strict: bool,
    },
}

/// Requested load, summed over every unit of every row.
#[derive(Debug, Clone, Copy, PartialEq)]
struct LoadTotals {
    units: usize,
    volume: f64,
    weight: f64,
}

impl LoadTotals {
    fn of(items: &[ItemDefinition]) -> Self {
        items.iter().fold(
            Self {
                units: 0,
                volume: 0.0,
                weight: 0.0,
            },
            |acc, item| Self {
                units: acc.units.saturating_add(item.quantity()),
                volume: acc.volume + item.unit_volume() * item.quantity() as f64,
                weight: acc.weight + item.total_weight(),
            },
        )
    }
}

/// Items read from an input file, plus the container a JSON request named.
#[derive(Debug)]
struct Input {
    items: Vec<ItemDefinition>,
    container: Option<ContainerKind>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Containers => {
            println!("Standard containers (interior, mm):");
            println!("{:-<60}", "");
            for spec in stowage::core::registry() {
                let env = &spec.envelope;
                println!(
                    "  {:<10} {:>6} x {:>5} x {:>5}  ({:.1} m3)",
                    spec.name,
                    env.length(),
                    env.width(),
                    env.height(),
                    env.volume() / 1e9
                );
            }
        }

        Commands::Pack {
            input,
            container,
            output,
            strict,
            list,
        } => {
            let input = read_input(&input, strict)?;
            let kind = resolve_container(container.as_deref(), input.container)?;
            print_load(&LoadTotals::of(&input.items));

            let result = ShelfPacker::new().pack(&input.items, &kind.envelope());

            print_result(kind, &result);
            if list {
                print_placements(&result);
            }

            if let Some(path) = output {
                let json = PackReport::new(Some(kind), &result).to_json()?;
                std::fs::write(&path, json)
                    .with_context(|| format!("writing report to {}", path.display()))?;
                println!("Report saved to: {}", path.display());
            }
        }

        Commands::Compare { input, strict } => {
            let input = read_input(&input, strict)?;
            print_load(&LoadTotals::of(&input.items));
            let results = ShelfPacker::new().pack_registry(&input.items);

            println!("Container Comparison:");
            println!("{:-<60}", "");
            for (kind, result) in &results {
                println!(
                    "  {:<10} placed={:<5} dropped={:<5} util={}",
                    kind.name(),
                    result.placed_count(),
                    result.dropped_count(),
                    result.utilization_percent()
                );
            }

            if let Some((kind, _)) = results.iter().find(|(_, r)| r.all_placed()) {
                println!("\nSmallest container holding every unit: {}", kind);
            } else {
                println!("\nNo single standard container holds every unit.");
            }
        }
    }

    Ok(())
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

/// Reads items from a CSV file or a `.json` load request.
fn read_input(path: &Path, strict: bool) -> anyhow::Result<Input> {
    let is_json = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

    let input = if is_json {
        let request = LoadRequest::from_json_path(path)
            .with_context(|| format!("reading load request {}", path.display()))?;
        Input {
            items: request.item_definitions(),
            container: request.container_kind()?,
        }
    } else {
        Input {
            items: catalog::load_csv_path(path)
                .with_context(|| format!("loading item table {}", path.display()))?,
            container: None,
        }
    };

    if strict {
        for (row, item) in input.items.iter().enumerate() {
            item.validate()
                .with_context(|| format!("row {} failed strict validation", row + 1))?;
        }
    }

    if input.items.is_empty() {
        log::warn!("{} contains no items", path.display());
    }

    Ok(input)
}

/// Picks the container: the command-line flag wins over the request,
/// and the 20ft container is the fallback.
fn resolve_container(
    flag: Option<&str>,
    requested: Option<ContainerKind>,
) -> anyhow::Result<ContainerKind> {
    match (flag, requested) {
        (Some(name), _) => Ok(name.parse()?),
        (None, Some(kind)) => Ok(kind),
        (None, None) => Ok(ContainerKind::Standard20),
    }
}

fn print_load(totals: &LoadTotals) {
    println!(
        "Load: {} units, {:.2} m3, {:.1} kg",
        totals.units,
        totals.volume / 1e9,
        totals.weight
    );
}

fn print_result(kind: ContainerKind, result: &PackResult) {
    println!(
        "Packed {} of {} units into {} ({} dropped, {} utilization)",
        result.placed_count(),
        result.requested_count(),
        kind,
        result.dropped_count(),
        result.utilization_percent()
    );

    let unplaced = result.unplaced_ids();
    if !unplaced.is_empty() {
        println!("  Not fully placed: {}", unplaced.join(", "));
    }
}

fn print_placements(result: &PackResult) {
    println!(
        "  {:<16} {:>4} {:>8} {:>8} {:>8}   {:>6} x {:>6} x {:>6}",
        "item", "#", "x", "y", "z", "l", "w", "h"
    );
    for p in result.placements() {
        println!(
            "  {:<16} {:>4} {:>8} {:>8} {:>8}   {:>6} x {:>6} x {:>6}",
            p.item_id,
            p.instance,
            p.x(),
            p.y(),
            p.z(),
            p.length(),
            p.width(),
            p.height()
        );
    }
}
