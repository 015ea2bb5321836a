use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use polars::prelude::*;
use tracing_subscriber::fmt::SubscriberBuilder;

use hull2::geom2::rand::{draw_points, CloudCfg, CloudShape, ReplayToken};
use hull2::observe::{HullCfg, HullObserver, Style};
use hull2::{compute_hull_with, Vec2};

mod provenance;

#[derive(Parser)]
#[command(name = "cli")]
#[command(about = "Divide-and-conquer convex hull runner and point-cloud generator")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Write a seeded random point cloud to a CSV with x,y columns
    Gen {
        #[arg(long, default_value_t = 1000)]
        count: usize,
        #[arg(long, value_enum, default_value_t = ShapeArg::Square)]
        shape: ShapeArg,
        /// Spatial scale: half-extent, sigma, or radius depending on shape
        #[arg(long, default_value_t = 1.0)]
        scale: f64,
        #[arg(long, default_value_t = 0)]
        seed: u64,
        #[arg(long, default_value_t = 0)]
        index: u64,
        #[arg(long)]
        out: String,
    },
    /// Compute the hull of a CSV point set and write it as JSON
    Run {
        #[arg(long)]
        input: String,
        #[arg(long)]
        out: String,
        /// Log intermediate sub-hulls and tangents as they are found
        #[arg(long)]
        animate: bool,
        /// Pause between animation steps, in milliseconds
        #[arg(long, default_value_t = 250)]
        step_delay_ms: u64,
    },
    /// Print a provenance JSON block
    Report,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum ShapeArg {
    Square,
    Gaussian,
    Circle,
}

impl ShapeArg {
    fn to_shape(self, scale: f64) -> CloudShape {
        match self {
            ShapeArg::Square => CloudShape::UniformSquare { half_extent: scale },
            ShapeArg::Gaussian => CloudShape::Gaussian { sigma: scale },
            ShapeArg::Circle => CloudShape::CircleRim { radius: scale },
        }
    }
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Gen {
            count,
            shape,
            scale,
            seed,
            index,
            out,
        } => gen(count, shape, scale, seed, index, out),
        Action::Run {
            input,
            out,
            animate,
            step_delay_ms,
        } => run(input, out, animate, step_delay_ms),
        Action::Report => report(),
    }
}

fn gen(count: usize, shape: ShapeArg, scale: f64, seed: u64, index: u64, out: String) -> Result<()> {
    tracing::info!(count, ?shape, scale, seed, index, out, "gen");
    let cfg = CloudCfg {
        count,
        shape: shape.to_shape(scale),
    };
    let pts = draw_points(cfg, ReplayToken { seed, index });
    let xs: Vec<f64> = pts.iter().map(|p| p.x).collect();
    let ys: Vec<f64> = pts.iter().map(|p| p.y).collect();
    let mut df = df!("x" => xs, "y" => ys)?;

    ensure_parent(&out)?;
    let mut file = std::fs::File::create(&out).with_context(|| format!("creating {out}"))?;
    CsvWriter::new(&mut file).finish(&mut df)?;

    provenance::write_sidecar(
        &out,
        provenance::Payload::new(serde_json::json!({
            "command": "gen",
            "count": count,
            "shape": format!("{shape:?}"),
            "scale": scale,
            "seed": seed,
            "index": index,
        })),
    )?;
    Ok(())
}

fn run(input: String, out: String, animate: bool, step_delay_ms: u64) -> Result<()> {
    tracing::info!(input, out, animate, step_delay_ms, "run");
    let points = read_points_csv(&input)?;
    tracing::info!(n = points.len(), "points loaded");

    let cfg = HullCfg {
        animate,
        step_delay: Duration::from_millis(step_delay_ms),
        ..HullCfg::default()
    };
    let mut obs = TraceObserver {
        delay: if animate { cfg.step_delay } else { Duration::ZERO },
    };
    let hull = compute_hull_with(&points, &cfg, &mut obs)
        .with_context(|| format!("computing hull of {input}"))?;

    let vertices: Vec<[f64; 2]> = hull.vertices().iter().map(|p| [p.x, p.y]).collect();
    let doc = serde_json::json!({
        "input_points": points.len(),
        "hull_vertices": vertices.len(),
        "vertices": vertices,
    });
    ensure_parent(&out)?;
    std::fs::write(&out, serde_json::to_vec_pretty(&doc)?)
        .with_context(|| format!("writing {out}"))?;

    provenance::write_sidecar(
        &out,
        provenance::Payload::new(serde_json::json!({
            "command": "run",
            "input": input,
            "animate": animate,
            "step_delay_ms": step_delay_ms,
            "input_points": points.len(),
            "hull_vertices": vertices.len(),
        })),
    )?;
    Ok(())
}

fn report() -> Result<()> {
    let obj = serde_json::json!({
        "code_rev": provenance::current_git_rev(),
        "hull2_version": hull2::VERSION,
    });
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}

/// Observer that narrates the computation through the log and, when a delay
/// is set, paces the events for step-by-step watching.
struct TraceObserver {
    delay: Duration,
}

impl TraceObserver {
    fn pace(&self) {
        if !self.delay.is_zero() {
            std::thread::sleep(self.delay);
        }
    }
}

impl HullObserver for TraceObserver {
    fn hull(&mut self, edges: &[hull2::geom2::Seg2], style: Style) {
        tracing::info!(
            edges = edges.len(),
            color = ?style.color,
            transient = style.transient,
            "hull"
        );
        if style.transient {
            self.pace();
        }
    }

    fn tangent(&mut self, edge: hull2::geom2::Seg2, style: Style) {
        tracing::info!(
            from = ?(edge.a.x, edge.a.y),
            to = ?(edge.b.x, edge.b.y),
            color = ?style.color,
            "tangent"
        );
        self.pace();
    }

    fn timing(&mut self, label: &str, seconds: f64) {
        tracing::info!(label, seconds, "timing");
    }
}

fn ensure_parent(path: &str) -> Result<()> {
    if let Some(parent) = Path::new(path).parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
    }
    Ok(())
}

/// Read a point set from a CSV with x and y columns (any numeric type).
fn read_points_csv(input: &str) -> Result<Vec<Vec2<f64>>> {
    let lf = LazyCsvReader::new(input)
        .with_infer_schema_length(Some(100))
        .finish()
        .with_context(|| format!("reading {input}"))?;
    let df = lf.collect()?;
    let xs = df.column("x")?.cast(&DataType::Float64)?;
    let ys = df.column("y")?.cast(&DataType::Float64)?;
    let xs = xs.f64()?;
    let ys = ys.f64()?;
    let mut points = Vec::with_capacity(df.height());
    for (x, y) in xs.into_iter().zip(ys.into_iter()) {
        match (x, y) {
            (Some(x), Some(y)) => points.push(Vec2::new(x, y)),
            _ => anyhow::bail!("null coordinate in {input}"),
        }
    }
    Ok(points)
}
