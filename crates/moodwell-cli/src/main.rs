use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "moodwell-cli", version, about = "Moodwell CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Average mood and trend for a period
    Summary(commands::SeriesArgs),
    /// Smoothed mood curve points
    Curve {
        #[command(flatten)]
        series: commands::SeriesArgs,
        /// Print the projected sample points instead of the smoothed curve
        #[arg(long)]
        raw: bool,
    },
    /// Hill fill rectangles beneath the curve
    Fills(commands::SeriesArgs),
    /// Draw the mood chart in the terminal
    Chart {
        #[command(flatten)]
        series: commands::SeriesArgs,
        /// Chart height in rows
        #[arg(long)]
        rows: Option<u32>,
        /// Chart width in columns
        #[arg(long)]
        cols: Option<u32>,
    },
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    init_logging();

    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Summary(args) => commands::summary::run(args),
        Commands::Curve { series, raw } => commands::curve::run_curve(series, raw),
        Commands::Fills(args) => commands::curve::run_fills(args),
        Commands::Chart { series, rows, cols } => commands::chart::run(series, rows, cols),
        Commands::Config { action } => commands::config::run(action),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
