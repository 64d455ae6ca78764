// File: crates/demo/src/main.rs
// Summary: Demo loads a telemetry CSV, tracks every field and renders line and box-plot PNGs.

use anyhow::{bail, Context, Result};
use chart_core::{ChartController, ChartType, DataPoint, MemoryScaling, TelemetryContainer, TelemetryUnit};
use chart_render_skia::{theme, RenderOptions, SkiaTarget};
use log::{info, warn};
use std::path::{Path, PathBuf};

struct Args {
    input: PathBuf,
    range: Option<(i32, i32)>,
    memory: MemoryScaling,
    theme: String,
}

fn main() -> Result<()> {
    env_logger::init();

    let args = parse_args(std::env::args().skip(1))?;
    println!("Using input file: {}", args.input.display());

    let source = load_telemetry_csv(&args.input)
        .with_context(|| format!("failed to load CSV '{}'", args.input.display()))?;
    if source.fields().is_empty() {
        bail!("no telemetry fields loaded; check headers/delimiter.");
    }
    for field in source.fields() {
        println!("  {:<16} {:<9} {} samples", field.title, field.unit.name(), field.len());
    }

    let mut chart = ChartController::new(SkiaTarget::new());
    chart.set_memory_scaling(&source, args.memory);
    for field in source.fields() {
        chart.add_data(&source, field.id)?;
    }

    let (start, end) = args.range.unwrap_or_else(|| full_extent(&source));
    chart.set_range(&source, start, end);
    info!("range {}..{}, memory in {}", start, end, args.memory.suffix());

    for axis in chart.axes().iter().filter(|a| a.visible) {
        if let Some((lo, hi)) = axis.display {
            println!("Axis {:<7} [{}, {}]", axis.title, lo, hi);
        }
    }

    let opts = RenderOptions { theme: theme::find(&args.theme), ..RenderOptions::default() };

    let out_line = out_name_with(&args.input, "line");
    chart.target().render_to_png(&opts, &out_line)?;
    println!("Wrote {}", out_line.display());

    chart.set_type(ChartType::BoxPlot);
    let out_box = out_name_with(&args.input, "boxplot");
    chart.target().render_to_png(&opts, &out_box)?;
    println!("Wrote {}", out_box.display());

    Ok(())
}

/// `demo [csv] [--range START END] [--memory b|kb|mb|gb] [--theme NAME]`
fn parse_args(mut it: impl Iterator<Item = String>) -> Result<Args> {
    let mut args = Args {
        input: PathBuf::from("crates/demo/data/sample_telemetry.csv"),
        range: None,
        memory: MemoryScaling::default(),
        theme: "dark".to_string(),
    };
    while let Some(arg) = it.next() {
        match arg.as_str() {
            "--range" => {
                let start = it.next().context("--range needs START END")?.parse().context("bad range start")?;
                let end = it.next().context("--range needs START END")?.parse().context("bad range end")?;
                args.range = Some((start, end));
            }
            "--memory" => {
                args.memory = it.next().context("--memory needs a unit")?.parse()?;
            }
            "--theme" => {
                args.theme = it.next().context("--theme needs a name")?;
            }
            other if other.starts_with("--") => bail!("unknown option {other}"),
            path => args.input = PathBuf::from(path),
        }
    }
    Ok(args)
}

/// Load `field,unit,timestamp,value[,end]` rows. Fields are created in order of first
/// appearance; duration rows carry the interval as `value` (start) and `end`.
fn load_telemetry_csv(path: &Path) -> Result<TelemetryContainer> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;

    let headers = rdr.headers()?.iter().map(|h| h.to_lowercase()).collect::<Vec<_>>();
    let idx = |name: &str| headers.iter().position(|h| h == name);
    let (Some(i_field), Some(i_unit), Some(i_time), Some(i_value)) =
        (idx("field"), idx("unit"), idx("timestamp"), idx("value"))
    else {
        bail!("expected columns field, unit, timestamp, value; found {:?}", headers);
    };
    let i_end = idx("end");

    let mut source = TelemetryContainer::new();
    for (row, rec) in rdr.records().enumerate() {
        let rec = rec?;
        let get = |i: usize| rec.get(i).unwrap_or("");
        let parse = |i: usize| -> Result<f64> {
            get(i).parse::<f64>().with_context(|| format!("row {}: bad number '{}'", row + 1, get(i)))
        };

        let title = get(i_field);
        let unit: TelemetryUnit = get(i_unit).parse()?;
        let id = match source.find_by_title(title).map(|f| f.id) {
            Some(id) => id,
            None => source.add_field(title, unit),
        };

        let timestamp = parse(i_time)?;
        let point = match unit {
            TelemetryUnit::Duration => {
                let end = i_end.context("duration rows need an 'end' column")?;
                DataPoint::interval(timestamp, parse(i_value)?, parse(end)?)
            }
            _ => DataPoint::scalar(timestamp, parse(i_value)?),
        };

        if let Some(field) = source.field_mut(id) {
            if let Err(err) = field.push(point) {
                warn!("row {}: skipping sample for '{}': {err}", row + 1, title);
            }
        }
    }
    Ok(source)
}

/// Whole-second window covering every loaded sample.
fn full_extent(source: &TelemetryContainer) -> (i32, i32) {
    let mut lo = f64::INFINITY;
    let mut hi = f64::NEG_INFINITY;
    for field in source.fields() {
        if let (Some(first), Some(last)) = (field.data_points().first(), field.data_points().last()) {
            lo = lo.min(first.timestamp);
            hi = hi.max(last.timestamp);
        }
    }
    if !lo.is_finite() || !hi.is_finite() {
        return (0, 1);
    }
    (lo.floor() as i32, hi.ceil() as i32)
}

/// Produce output file name like target/out/chart_<stem>_<suffix>.png
fn out_name_with(input: &Path, suffix: &str) -> PathBuf {
    let stem = input.file_stem().and_then(|s| s.to_str()).unwrap_or("telemetry");
    let mut out = PathBuf::from("target/out");
    out.push(format!("chart_{}_{}.png", stem, suffix));
    out
}
