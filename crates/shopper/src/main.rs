use anyhow::{Context, Result};
use clap::Parser;
use log::{error, info};
use std::io::Write;
use std::path::PathBuf;

use shopper::constants::{DEFAULT_CONFIG_PATH, DEFAULT_LIST_PATH, DEFAULT_OUTPUT_DIR};
use shopper::{
    Config, RenderOptions, UnmatchedPolicy, plan_trip, read_shopping_list, render_route_map,
    save_route_map_to_dir, write_report,
};

#[derive(Parser)]
#[command(author, version, about = "Sort a shopping list by store zone and draw the walking route", long_about = None)]
struct Args {
    /// Configuration file path (map and zones)
    #[arg(short = 'c', long = "config", default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    /// Shopping list CSV with Item,Category columns
    #[arg(short = 'l', long = "list", default_value = DEFAULT_LIST_PATH)]
    list: PathBuf,

    /// Directory for the timestamped route overlay
    #[arg(short = 'o', long = "output", default_value = DEFAULT_OUTPUT_DIR)]
    output_dir: PathBuf,

    /// Exact overlay path (overrides --output)
    #[arg(long = "svg")]
    svg: Option<PathBuf>,

    /// List items whose category has no zone (overrides config)
    #[arg(long = "unmatched", value_enum)]
    unmatched: Option<UnmatchedPolicy>,

    /// Print the plan as JSON instead of the text listing
    #[arg(long = "json")]
    json: bool,

    /// Skip writing the route overlay
    #[arg(long = "no-render")]
    no_render: bool,

    /// Also outline zones that are not on the route
    #[arg(long = "all-zones")]
    all_zones: bool,
}

fn main() {
    // Initialize logger - defaults to RUST_LOG if set, otherwise INFO
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .try_init();

    let args = Args::parse();
    if let Err(e) = run(&args) {
        error!("Error: {e:#}");
        std::process::exit(1);
    }
}

fn run(args: &Args) -> Result<()> {
    let config = Config::load_from_file(&args.config)?;
    let registry = config.registry()?;

    let entries = read_shopping_list(&args.list)
        .with_context(|| format!("failed to read shopping list {}", args.list.display()))?;
    info!("Loaded {} items from {}", entries.len(), args.list.display());

    let plan = plan_trip(
        entries.into_iter().map(|e| (e.item, e.category)),
        &registry,
    )?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    if args.json {
        serde_json::to_writer_pretty(&mut out, &plan)?;
        writeln!(out)?;
    } else {
        let policy = args.unmatched.unwrap_or(config.report.unmatched);
        write_report(&plan, policy, &mut out)?;
    }

    if args.no_render {
        return Ok(());
    }

    let opt = RenderOptions {
        show_all_zones: args.all_zones,
        ..Default::default()
    };
    let path = match &args.svg {
        Some(path) => {
            render_route_map(&plan, &registry, &config.map, &opt, path)
                .with_context(|| format!("failed to write overlay {}", path.display()))?;
            path.clone()
        }
        None => save_route_map_to_dir(&plan, &registry, &config.map, &opt, &args.output_dir)
            .with_context(|| format!("failed to write overlay to {}", args.output_dir.display()))?,
    };
    info!("Route map saved to: {}", path.display());

    Ok(())
}
