use moodwell_core::chart::render_text;

use super::SeriesArgs;

pub fn run(
    args: SeriesArgs,
    rows: Option<u32>,
    cols: Option<u32>,
) -> Result<(), Box<dyn std::error::Error>> {
    let selection = args.resolve()?;
    let view = selection.dashboard.view(&selection.state);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&view)?);
        return Ok(());
    }

    let display = &selection.config.display;
    let rows = rows.unwrap_or(display.text_rows) as usize;
    let cols = cols.unwrap_or(display.text_cols) as usize;

    println!(
        "\nMood Summary: {}  {} {}  ({})",
        view.summary.average_text(),
        view.summary.trend.arrow(),
        view.summary.change_text(),
        view.caption
    );
    println!("{}", "─".repeat(cols));
    print!(
        "{}",
        render_text(&view.chart, selection.dashboard.layout(), rows, cols)
    );
    println!("{}", "─".repeat(cols));
    Ok(())
}
