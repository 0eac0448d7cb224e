use clap::Subcommand;
use moodwell_core::Config;

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Get a config value
    Get {
        /// Config key (e.g. "chart.baseline_y", "display.default_period")
        key: String,
    },
    /// Set a config value; the chart layout is validated before saving
    Set {
        /// Config key
        key: String,
        /// New value ("display.default_period" accepts the same spellings as --period)
        value: String,
    },
    /// List all config values
    List,
    /// Validate the stored config and show the chart geometry it implies
    Check,
    /// Reset config to defaults
    Reset,
}

pub fn run(action: ConfigAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        ConfigAction::Get { key } => {
            let config = Config::load()?;
            match config.get(&key) {
                Some(value) => println!("{value}"),
                None => return Err(format!("unknown key: {key}").into()),
            }
        }
        ConfigAction::Set { key, value } => {
            let mut config = Config::load()?;
            config.set(&key, &value)?;
            let stored = config.get(&key).unwrap_or(value);
            println!("{key} = {stored}");
        }
        ConfigAction::List => {
            let config = Config::load()?;
            let json = serde_json::to_string_pretty(&config)?;
            println!("{json}");
        }
        ConfigAction::Check => {
            // load_from validates, so reaching here means the file is usable
            let path = Config::path()?;
            let config = Config::load_from(&path)?;
            let chart = &config.chart;
            println!("config ok: {}", path.display());
            println!(
                "  mood range   {:.2}..{:.2} -> y {:.1}..{:.1}",
                chart.min_mood,
                chart.max_mood,
                chart.mood_to_y(chart.max_mood),
                chart.mood_to_y(chart.min_mood)
            );
            println!(
                "  baseline     y={} (mood {:.2})",
                chart.baseline_y,
                chart.y_to_mood(chart.baseline_y)
            );
            println!("  smoothing    {} steps, tension {}", chart.steps, chart.tension);
            println!(
                "  text chart   {}x{}, default period {}",
                config.display.text_rows, config.display.text_cols, config.display.default_period
            );
        }
        ConfigAction::Reset => {
            let config = Config::default();
            config.save()?;
            println!("config reset to defaults");
        }
    }
    Ok(())
}
