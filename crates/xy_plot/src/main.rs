use anyhow::{Context, Result};
use clap::Parser;
use log::{error, info};
use std::{io::Write, path::PathBuf};

use xy_plot::{
    Axis, Config, Dataset, RunOutcome, SaveOnlyDisplay, ViewerDisplay,
    constants::UNKNOWN_GRAPH_TYPE, render::load_system_font, run,
};

#[derive(Parser)]
#[command(author, version, about = "Plot an XY-model configuration", long_about = None)]
struct Args {
    /// The graph type. (can be: `grid`, `hierarchical`)
    #[arg(short = 'g', long = "graph", value_name = "graph_type", default_value = "grid")]
    graph: String,

    /// Axis held at zero for the cross-section (x, y or z)
    #[arg(short = 'a', long = "axis")]
    axis: Option<String>,

    /// Directory holding <name>.txt and <name>_adj.txt
    #[arg(short = 'r', long = "results-dir")]
    results_dir: Option<PathBuf>,

    /// Directory the PNG figures are written to
    #[arg(short = 'o', long = "output-dir")]
    output_dir: Option<PathBuf>,

    /// Configuration file path
    #[arg(short = 'c', long = "config")]
    config: Option<PathBuf>,

    /// Write the figures without opening a viewer
    #[arg(long = "no-view")]
    no_view: bool,
}

fn main() {
    // Initialize logger - defaults to RUST_LOG if set, otherwise INFO
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .try_init();

    let args = Args::parse();

    match try_main(args) {
        Ok(RunOutcome::Rendered { .. }) => {}
        Ok(RunOutcome::UnknownGraphType) => std::process::exit(1),
        Err(e) => {
            error!("Error: {e}");
            for cause in e.chain().skip(1) {
                error!("  caused by: {cause}");
            }
            let _ = std::io::stderr().flush();
            std::process::exit(1);
        }
    }
}

fn try_main(args: Args) -> Result<RunOutcome> {
    // unknown names stop before the config file or --axis are read
    if args.graph.parse::<Dataset>().is_err() {
        println!("{UNKNOWN_GRAPH_TYPE}");
        return Ok(RunOutcome::UnknownGraphType);
    }

    let mut config = match &args.config {
        Some(path) => Config::load_from_file(path)?,
        None => Config::from_env()?,
    };
    if let Some(axis) = &args.axis {
        config.axis = axis.parse::<Axis>()?;
    }
    if let Some(dir) = args.results_dir {
        config.results_dir = dir;
    }
    if let Some(dir) = args.output_dir {
        config.output_dir = dir;
    }

    let mut stdout = std::io::stdout();
    let result = if args.no_view {
        let mut display = SaveOnlyDisplay::new(&config.output_dir);
        run(&args.graph, &config, load_system_font, &mut stdout, &mut display)
    } else {
        let mut display = ViewerDisplay::new(&config.output_dir, config.viewer.clone());
        run(&args.graph, &config, load_system_font, &mut stdout, &mut display)
    };
    let outcome = result.with_context(|| format!("failed to plot `{}`", args.graph))?;

    if let RunOutcome::Rendered { side, .. } = outcome {
        info!("Done (L = {side})");
    }
    Ok(outcome)
}
