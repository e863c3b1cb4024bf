use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use rollgeom::color_utils::normalize_palette;
use rollgeom::models::{CurveRequest, IntersectionResult, TraceFrame};
use rollgeom::renderer::{CurveOverlay, SceneSnapshot};
use rollgeom::utils::delta_angle_for_elapsed;
use rollgeom::{convert_svg_to_png, generate_svg, intersection_points, BezierCurve, SceneConfig};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

#[derive(Parser, Debug)]
#[command(name = "rollgeom")]
#[command(about = "Roll a wheel around a polygon and intersect Bezier curves with lines", long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Simulate the wheel scene and write one JSON record per frame
    Roll {
        /// Scene configuration (JSON); a built-in hexagon scene is used when omitted
        #[arg(short, long, value_name = "FILE")]
        config: Option<PathBuf>,

        /// Number of frames to simulate
        #[arg(short, long, default_value_t = 120)]
        frames: u64,

        /// Output file (defaults to stdout)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },
    /// Intersect a cubic Bezier curve with a line read from a JSON request
    Intersect {
        #[arg(value_name = "FILE")]
        input: PathBuf,
    },
    /// Export a single frame of the wheel scene as SVG or PNG
    Render {
        #[arg(short, long, value_name = "FILE")]
        config: Option<PathBuf>,

        /// Scene time in milliseconds to render
        #[arg(short, long, default_value_t = 0.0)]
        time_ms: f64,

        /// Curve/line request drawn on top of the scene
        #[arg(long, value_name = "FILE")]
        curve: Option<PathBuf>,

        /// Output path; .svg writes SVG, anything else PNG
        #[arg(short, long, value_name = "FILE")]
        output: PathBuf,
    },
}

fn load_config(path: Option<&Path>) -> Result<SceneConfig> {
    let config = match path {
        Some(path) => {
            let json = fs::read_to_string(path)
                .with_context(|| format!("Failed to read config file: {path:?}"))?;
            serde_json::from_str(&json).context("Failed to parse scene config JSON")?
        }
        None => SceneConfig::default(),
    };
    config.validate().context("Invalid scene config")?;
    log::debug!("scene config: {config:?}");
    Ok(config)
}

fn load_curve_request(path: &Path) -> Result<CurveRequest> {
    let json = fs::read_to_string(path)
        .with_context(|| format!("Failed to read curve request: {path:?}"))?;
    serde_json::from_str(&json).context("Failed to parse curve request JSON")
}

fn run_roll(config: &SceneConfig, frames: u64, output: Option<&Path>) -> Result<()> {
    let mut simulator = config.build_simulator()?;
    let interval = config.frame_interval()?;
    let period = config.wheel_period()?;
    let delta_angle = delta_angle_for_elapsed(interval, period);

    let mut trace = Vec::with_capacity(frames.min(4096) as usize);
    for frame in 0..frames {
        if frame > 0 {
            simulator
                .step(delta_angle)
                .with_context(|| format!("Simulation failed at frame {frame}"))?;
        }
        let body = simulator.body();
        let state = simulator.state();
        trace.push(TraceFrame {
            frame,
            time_ms: interval.as_secs_f64() * 1000.0 * frame as f64,
            position: body.position,
            rotation: body.rotation,
            phase: state.phase,
            corner_index: state.corner_index,
            contact_point: state.contact_point,
        });
    }

    let json = serde_json::to_string_pretty(&trace).context("Failed to serialize trace")?;
    match output {
        Some(path) => {
            fs::write(path, json).with_context(|| format!("Failed to write trace: {path:?}"))?;
            println!("Wrote {} frames to {}", trace.len(), path.display());
        }
        None => println!("{json}"),
    }
    Ok(())
}

fn run_intersect(input: &Path) -> Result<()> {
    let request = load_curve_request(input)?;
    let [p0, p1, p2, p3] = request.curve;
    let curve = BezierCurve::try_new(p0, p1, p2, p3).context("Invalid curve")?;
    let hits = intersection_points(&curve, &request.line).context("Intersection failed")?;

    let results: Vec<IntersectionResult> = hits
        .into_iter()
        .map(|(t, point)| IntersectionResult { t, point })
        .collect();
    println!("{}", serde_json::to_string_pretty(&results)?);
    Ok(())
}

fn run_render(
    config: &SceneConfig,
    time_ms: f64,
    curve: Option<&Path>,
    output: &Path,
) -> Result<()> {
    if !time_ms.is_finite() || time_ms < 0.0 {
        anyhow::bail!("time must be a non-negative number of milliseconds, got {time_ms}");
    }

    let mut simulator = config.build_simulator()?;
    let elapsed = Duration::try_from_secs_f64(time_ms / 1000.0)
        .with_context(|| format!("Time {time_ms} ms is out of range"))?;
    simulator
        .step(delta_angle_for_elapsed(elapsed, config.wheel_period()?))
        .context("Simulation failed")?;

    let colours = normalize_palette(&config.wheel.colours)?;

    let request = curve.map(load_curve_request).transpose()?;
    let prepared = match &request {
        Some(req) => {
            let [p0, p1, p2, p3] = req.curve;
            let bezier = BezierCurve::try_new(p0, p1, p2, p3).context("Invalid curve")?;
            let hits = intersection_points(&bezier, &req.line).context("Intersection failed")?;
            Some((bezier, req.line, hits))
        }
        None => None,
    };

    let snapshot = SceneSnapshot {
        path: simulator.path(),
        body: simulator.body(),
        slices: config.wheel.slices,
        colours: &colours,
        overlay: prepared.as_ref().map(|(bezier, line, hits)| CurveOverlay {
            curve: bezier,
            line,
            hits,
        }),
    };
    let svg_content = generate_svg(&snapshot, None);

    let extension = output
        .extension()
        .and_then(|s| s.to_str())
        .unwrap_or("png");

    match extension.to_lowercase().as_str() {
        "svg" => {
            fs::write(output, svg_content)
                .with_context(|| format!("Failed to write SVG file: {output:?}"))?;
        }
        _ => {
            convert_svg_to_png(&svg_content, output, None)
                .with_context(|| format!("Failed to convert to PNG: {output:?}"))?;
        }
    }

    println!("Rendered frame at {time_ms} ms to {}", output.display());
    Ok(())
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    match args.command {
        Command::Roll {
            config,
            frames,
            output,
        } => {
            let config = load_config(config.as_deref())?;
            run_roll(&config, frames, output.as_deref())
        }
        Command::Intersect { input } => run_intersect(&input),
        Command::Render {
            config,
            time_ms,
            curve,
            output,
        } => {
            let config = load_config(config.as_deref())?;
            run_render(&config, time_ms, curve.as_deref(), &output)
        }
    }
}
