use std::env;
use std::error::Error;
use std::fs::File;
use std::path::PathBuf;

use clap::Parser;
use stanza::renderer::console::Console;
use stanza::renderer::Renderer;
use tracing::{debug, info};

use fivestat::data;
use fivestat::forecast::{Config, ForecastEngine};
use fivestat::form::FormConfig;
use fivestat::print;
use fivestat::projection::HomeAdvantage;
use fivestat::scoregrid::DEFAULT_MAX_GOALS;

/// Scoreline sub-range handed to the presentation layer; scores beyond 5 per
/// side are too rare to display.
const DISPLAY_GOALS: usize = 6;

#[derive(Debug, clap::Parser, Clone)]
struct Args {
    /// file to source historical results from
    #[clap(short = 'r', long)]
    history: PathBuf,

    /// file to source upcoming fixtures from
    #[clap(short = 'f', long)]
    fixtures: PathBuf,

    /// form window size in matches
    #[clap(long, default_value_t = 20)]
    window: usize,

    /// weight of recent form versus the baseline rating
    #[clap(long, default_value_t = 0.65)]
    alpha: f64,

    /// scoreline grid bound (exclusive) per side
    #[clap(long, default_value_t = DEFAULT_MAX_GOALS)]
    max_goals: usize,

    /// additive home-advantage adjustment to the home side's expected goals
    #[clap(long)]
    home_advantage: Option<f64>,

    /// print the scoreline grid for each fixture
    #[clap(long)]
    grid: bool,

    /// write forecast records to a JSON file
    #[clap(short = 'o', long)]
    output: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn Error>> {
    if env::var("RUST_BACKTRACE").is_err() {
        env::set_var("RUST_BACKTRACE", "full")
    }
    if env::var("RUST_LOG").is_err() {
        env::set_var("RUST_LOG", "info")
    }
    tracing_subscriber::fmt::init();

    let args = Args::parse();
    debug!("args: {args:?}");

    let results = data::read_match_results(&args.history)?;
    let fixtures = data::read_fixtures(&args.fixtures)?;
    info!(
        "loaded {} historical results and {} upcoming fixtures",
        results.len(),
        fixtures.len()
    );

    let config = Config {
        form: FormConfig {
            window: args.window,
            alpha: args.alpha,
        },
        max_goals: args.max_goals,
        home_advantage: args
            .home_advantage
            .map(HomeAdvantage::Additive)
            .unwrap_or_default(),
    };
    let engine = ForecastEngine::try_new(&results, config)?;
    info!(
        "derived home advantage: {:+.3} (applied only via --home-advantage)",
        engine.ratings().home_advantage
    );

    let forecasts = engine.forecast_all(&fixtures);
    println!(
        "{}",
        Console::default().render(&print::summary_table(&forecasts))
    );
    if args.grid {
        for forecast in &forecasts {
            println!(
                "{}",
                Console::default().render(&print::scoregrid_table(forecast, DISPLAY_GOALS))
            );
        }
    }

    if let Some(output) = &args.output {
        let records: Vec<_> = forecasts
            .iter()
            .map(|forecast| forecast.to_record(DISPLAY_GOALS))
            .collect();
        serde_json::to_writer_pretty(File::create(output)?, &records)?;
        info!("wrote {} records to {}", records.len(), output.display());
    }
    Ok(())
}
