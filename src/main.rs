//! Tourpack - Command Line Interface
//!
//! This is the main entry point for the package recommendation tool.
//! Run with `--help` to see all available options.

use clap::Parser;
use std::error::Error;
use std::path::PathBuf;

use tourpack::{
    data::load_catalog,
    display::{display_package, display_regions, format_limit},
    models::Region,
};

/// Command-line arguments for Tourpack.
#[derive(Parser, Debug)]
#[command(name = "tourpack")]
#[command(author, version, about = "Recommend the most valuable touristic package for a region", long_about = None)]
struct Args {
    /// Directory containing the catalog CSV files
    #[arg(short, long, default_value = "data")]
    data_dir: PathBuf,

    /// Region code to build the package for
    #[arg(short, long, required_unless_present = "list_regions")]
    region: Option<String>,

    /// Maximum total duration in days (unbounded if omitted)
    #[arg(long, allow_negative_numbers = true)]
    max_days: Option<i64>,

    /// Maximum total cost (unbounded if omitted)
    #[arg(long, allow_negative_numbers = true)]
    max_budget: Option<f64>,

    /// List the available regions and exit
    #[arg(long, default_value = "false")]
    list_regions: bool,
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();

    if !args.data_dir.exists() {
        eprintln!(
            "Error: data directory '{}' not found.",
            args.data_dir.display()
        );
        std::process::exit(1);
    }

    let catalog = load_catalog(&args.data_dir)?;

    println!("Tourpack - Touristic Package Optimizer");
    println!("================================================================");
    println!();
    println!(
        "Loaded {} regions, {} tours, {} attractions.",
        catalog.list_regions().len(),
        catalog.tours().len(),
        catalog.attraction_count()
    );
    let skipped = catalog.link_report().skipped;
    if skipped > 0 {
        println!("[WARNING] {} tour/attraction records could not be resolved.", skipped);
    }

    if args.list_regions {
        display_regions(catalog.list_regions());
        return Ok(());
    }

    let Some(region_id) = args.region else {
        return Ok(());
    };

    println!();
    println!("Configuration:");
    println!("  Region:          {}", region_id);
    println!("  Max Days:        {}", format_limit(args.max_days));
    println!("  Max Budget:      {}", format_limit(args.max_budget));

    let region = catalog.region(&region_id).cloned().unwrap_or_else(|| Region {
        id: region_id.clone(),
        name: "Unknown region".to_string(),
    });

    let (package, stats) =
        catalog.build_package_with_stats(&region_id, args.max_days, args.max_budget);
    display_package(&region, &package, &stats);

    Ok(())
}
