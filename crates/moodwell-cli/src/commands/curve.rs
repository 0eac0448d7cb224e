//! Curve and fill geometry commands.

use super::SeriesArgs;

pub fn run_curve(args: SeriesArgs, raw: bool) -> Result<(), Box<dyn std::error::Error>> {
    let selection = args.resolve()?;
    let chart = selection.dashboard.view(&selection.state).chart;
    let points = if raw { &chart.points } else { &chart.smoothed };

    if args.json {
        println!("{}", serde_json::to_string_pretty(points)?);
        return Ok(());
    }

    if points.is_empty() {
        println!("no data");
        return Ok(());
    }
    for (i, p) in points.iter().enumerate() {
        println!("{i:4}  x={:8.3}  y={:8.3}", p.x, p.y);
    }
    Ok(())
}

pub fn run_fills(args: SeriesArgs) -> Result<(), Box<dyn std::error::Error>> {
    let selection = args.resolve()?;
    let chart = selection.dashboard.view(&selection.state).chart;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&chart.fills)?);
        return Ok(());
    }

    let layout = &selection.config.chart;
    println!(
        "{} of {} curve segments filled (baseline y={}, mood {:.2})",
        chart.fills.len(),
        chart.lines.len(),
        layout.baseline_y,
        layout.y_to_mood(layout.baseline_y)
    );
    for seg in &chart.fills {
        println!(
            "{:4}  x={:8.3}  w={:6.3}  y={:8.3}..{:8.3}  h={:7.3}  peak={:.2}",
            seg.index,
            seg.x,
            seg.width,
            seg.top,
            seg.bottom,
            seg.height(),
            layout.y_to_mood(seg.top)
        );
    }
    Ok(())
}
