use anyhow::Result;
use clap::Parser;
use casim_lib::app::{App, OutputFormat};
use casim_lib::model::config::CoDiConfig;
use casim_lib::model::metrics;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Custom config file path
    #[arg(short, long, default_value = "config.toml")]
    config: String,

    /// Number of steps to run (overrides run.max_steps)
    #[arg(short, long)]
    steps: Option<u64>,

    /// RNG seed (overrides lattice.seed)
    #[arg(long)]
    seed: Option<u64>,

    /// Displayed X slice (overrides display.layer)
    #[arg(short, long)]
    layer: Option<usize>,

    /// Print stats as JSON lines
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    metrics::init_logging();
    let args = Args::parse();

    let mut config = CoDiConfig::load(&args.config)?;
    if let Some(steps) = args.steps {
        config.run.max_steps = steps;
    }
    if let Some(seed) = args.seed {
        config.lattice.seed = Some(seed);
    }
    if let Some(layer) = args.layer {
        config.display.layer = layer;
    }

    let format = if args.json {
        OutputFormat::JsonLines
    } else {
        OutputFormat::Text
    };

    let mut app = App::new(config, format)?;
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    app.run(&mut out)?;
    Ok(())
}
