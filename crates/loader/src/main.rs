//! stockgrid command line tool

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::{Path, PathBuf};
use stockgrid_core::{
    BoundsMode, DuplicatePolicy, ItemType, LayoutConfig, WarehouseScene,
};
use stockgrid_loader::{convert_legacy_str, InventoryDocument, SceneLoader};
use stockgrid_layout::SampleWarehouse;

#[derive(Parser)]
#[command(name = "stockgrid")]
#[command(about = "Warehouse stock layout and scene tools")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write the sample warehouse scene
    Sample {
        #[command(flatten)]
        layout: LayoutArgs,

        /// Output file (stdout when omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Write the raw inventory document instead of the scene
        #[arg(long)]
        document: bool,
    },

    /// Build a scene from a locations/packs JSON file
    Convert {
        /// Inventory document or bare location array
        input: PathBuf,

        #[command(flatten)]
        layout: LayoutArgs,

        /// Output file (stdout when omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Print statistics of a scene file or URL
    Stats {
        /// Scene file path or http(s) URL
        source: String,
    },

    /// Keep only items matching type and weight filters
    Filter {
        /// Scene file path or http(s) URL
        source: String,

        /// Item types to keep (comma separated)
        #[arg(short = 't', long = "type", value_delimiter = ',')]
        types: Vec<ItemType>,

        /// Minimum weight (inclusive)
        #[arg(long)]
        min_weight: Option<f64>,

        /// Maximum weight (inclusive)
        #[arg(long)]
        max_weight: Option<f64>,

        /// Output file (stdout when omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Convert a legacy location-list file
    Legacy {
        /// Legacy JSON file
        input: PathBuf,

        /// Output file (stdout when omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[derive(Args)]
struct LayoutArgs {
    /// Gap between neighbouring items
    #[arg(long, default_value = "0.02")]
    spacing: f64,

    /// Seed for the presentational count/weight draws
    #[arg(long)]
    seed: Option<u64>,

    /// Fail a location on duplicate sequence numbers instead of skipping
    #[arg(long)]
    reject_duplicates: bool,

    /// Reject items that leave their bin
    #[arg(long)]
    clamp_to_bin: bool,
}

impl LayoutArgs {
    fn config(&self) -> anyhow::Result<LayoutConfig> {
        let mut config = LayoutConfig::new().with_spacing(self.spacing);
        if self.reject_duplicates {
            config = config.with_duplicate_policy(DuplicatePolicy::Reject);
        }
        if self.clamp_to_bin {
            config = config.with_bounds_mode(BoundsMode::ClampToBin);
        }
        config.validate()?;
        Ok(config)
    }

    fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Sample {
            layout,
            output,
            document,
        } => {
            if document {
                write_json(&InventoryDocument::sample(), output.as_deref())?;
            } else {
                let config = layout.config()?;
                let scene = SampleWarehouse::new().scene(&config, &mut layout.rng());
                log::info!("sample scene: {} items", scene.items.len());
                write_json(&scene, output.as_deref())?;
            }
        }

        Commands::Convert {
            input,
            layout,
            output,
        } => {
            let config = layout.config()?;
            let doc = SceneLoader::new()
                .load_document(&input)
                .with_context(|| format!("loading {}", input.display()))?;

            let (scene, result) = doc.build_scene(&config, &mut layout.rng());
            if !result.all_placed() {
                log::warn!("{} records were left out of the scene", result.rejected_count());
            }
            log::info!(
                "converted {} locations and {} packs into {} items",
                doc.locations.len(),
                doc.packs.len(),
                scene.items.len()
            );
            write_json(&scene, output.as_deref())?;
        }

        Commands::Stats { source } => {
            let scene = SceneLoader::new()
                .load(&source)
                .with_context(|| format!("loading {}", source))?;
            print_statistics(&scene);
        }

        Commands::Filter {
            source,
            types,
            min_weight,
            max_weight,
            output,
        } => {
            let mut scene = SceneLoader::new()
                .load(&source)
                .with_context(|| format!("loading {}", source))?;
            let before = scene.items.len();

            if !types.is_empty() {
                scene = scene.filter_by_type(&types);
            }
            if min_weight.is_some() || max_weight.is_some() {
                scene = scene.filter_by_weight(
                    min_weight.unwrap_or(f64::NEG_INFINITY),
                    max_weight.unwrap_or(f64::INFINITY),
                );
            }

            log::info!("kept {} of {} items", scene.items.len(), before);
            write_json(&scene, output.as_deref())?;
        }

        Commands::Legacy { input, output } => {
            let json = std::fs::read_to_string(&input)
                .with_context(|| format!("reading {}", input.display()))?;
            let scene = convert_legacy_str(&json)?;
            log::info!("converted {} legacy locations", scene.items.len());
            write_json(&scene, output.as_deref())?;
        }
    }

    Ok(())
}

fn write_json<T: serde::Serialize>(value: &T, output: Option<&Path>) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(value)?;
    match output {
        Some(path) => {
            std::fs::write(path, json)?;
            println!("Saved to: {}", path.display());
        }
        None => println!("{}", json),
    }
    Ok(())
}

fn print_statistics(scene: &WarehouseScene) {
    let stats = scene.statistics();

    println!("Scene: {}", scene.name);
    println!("{:-<40}", "");
    println!(
        "  Dimensions:     {} x {} x {}",
        scene.dimensions.width, scene.dimensions.length, scene.dimensions.height
    );
    println!("  Items:          {}", stats.total_items);
    println!("  Total count:    {}", stats.total_count);
    println!("  Total weight:   {:.1}", stats.total_weight);
    println!("  Average weight: {:.2}", stats.average_weight);
    println!("  By type:");
    for (item_type, count) in &stats.items_by_type {
        println!("    {:<10} {}", item_type.as_str(), count);
    }

    let outside = scene.out_of_bounds(1e-6);
    if !outside.is_empty() {
        println!("  Outside scene bounds: {}", outside.join(", "));
    }
}
