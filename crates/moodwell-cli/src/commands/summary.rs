use super::SeriesArgs;

pub fn run(args: SeriesArgs) -> Result<(), Box<dyn std::error::Error>> {
    let selection = args.resolve()?;
    let view = selection.dashboard.view(&selection.state);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&view.summary)?);
        return Ok(());
    }

    println!("Mood Summary ({})", view.caption);
    println!("  Average: {}", view.summary.average_text());
    println!(
        "  Change:  {} {}",
        view.summary.trend.arrow(),
        view.summary.change_text()
    );
    println!("  Samples: {}", view.summary.sample_count);
    Ok(())
}
