use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use std::path::Path;
use tracing_subscriber::fmt::SubscriberBuilder;

use polyff::math::{to_c3, R3};
use polyff::{shapes, Polyhedron};

#[derive(Parser)]
#[command(name = "polyff")]
#[command(about = "Form-factor demo driver and shape inspector")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Sample |F(q)| along a ray q = t·dir on a logarithmic t grid
    Scan {
        /// Shape name, e.g. cube, octahedron, decahedron
        #[arg(long)]
        shape: String,
        /// Shape parameters (edge, or edge,height,... where applicable)
        #[arg(long, value_delimiter = ',', default_value = "1.0")]
        params: Vec<f64>,
        /// Ray direction, three comma-separated components
        #[arg(long, value_delimiter = ',', default_value = "0,0,1")]
        dir: Vec<f64>,
        #[arg(long, default_value_t = 0.2)]
        from: f64,
        #[arg(long, default_value_t = 200.0)]
        to: f64,
        /// Multiplicative step of the t grid
        #[arg(long, default_value_t = 1.002)]
        factor: f64,
        /// Optional JSON output path; stdout gets plain "t |F|" lines either way
        #[arg(long)]
        out: Option<String>,
    },
    /// Print volume and enclosing radius of a shape as JSON
    Info {
        #[arg(long)]
        shape: String,
        #[arg(long, value_delimiter = ',', default_value = "1.0")]
        params: Vec<f64>,
    },
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Scan {
            shape,
            params,
            dir,
            from,
            to,
            factor,
            out,
        } => scan(&shape, &params, &dir, from, to, factor, out.as_deref()),
        Action::Info { shape, params } => info(&shape, &params),
    }
}

fn param(params: &[f64], i: usize, default: f64) -> f64 {
    params.get(i).copied().unwrap_or(default)
}

fn make_shape(name: &str, params: &[f64]) -> Result<Polyhedron> {
    let edge = param(params, 0, 1.0);
    let body = match name {
        "tetrahedron" => shapes::tetrahedron(edge),
        "octahedron" => shapes::octahedron(edge),
        "cube" => shapes::cube(edge),
        "pave" => shapes::pave(edge, param(params, 1, 1.0), param(params, 2, 1.0)),
        "tribipyramid" => shapes::triangular_bipyramid(edge),
        "tribipyramid-elongated" => {
            shapes::elongated_triangular_bipyramid(edge, param(params, 1, 1.0))
        }
        "tribifrustum" => {
            shapes::triangular_bifrustum(edge, param(params, 1, 1.0), param(params, 2, 0.5))
        }
        "decahedron" => shapes::decahedron(edge),
        "decahedron-elongated" => shapes::elongated_decahedron(edge, param(params, 1, 1.0)),
        "pentabifrustum" => {
            shapes::pentagonal_bifrustum(edge, param(params, 1, 1.0), param(params, 2, 0.5))
        }
        "nanorod" => {
            shapes::capped_pentagonal_prism(edge, param(params, 1, 2.0), param(params, 2, 0.5))
        }
        other => bail!("unknown shape {other:?}"),
    };
    body.with_context(|| format!("constructing shape {name:?}"))
}

fn scan(
    name: &str,
    params: &[f64],
    dir: &[f64],
    from: f64,
    to: f64,
    factor: f64,
    out: Option<&str>,
) -> Result<()> {
    if dir.len() != 3 {
        bail!("--dir needs exactly three components");
    }
    if !(from > 0.0) || !(to > from) || !(factor > 1.0) {
        bail!("need 0 < from < to and factor > 1");
    }
    let direction = R3::new(dir[0], dir[1], dir[2]).normalize();
    let body = make_shape(name, params)?;
    tracing::info!(shape = name, ?params, "scan");

    let mut rows = Vec::new();
    let mut t = from;
    while t < to {
        let q = to_c3(direction * t);
        let f = body
            .formfactor(&q)
            .with_context(|| format!("evaluating F at t={t}"))?;
        println!("{t} {}", f.norm());
        rows.push(serde_json::json!([t, f.norm()]));
        t *= factor;
    }

    if let Some(out) = out {
        let count = rows.len();
        let doc = serde_json::json!({
            "shape": name,
            "params": params,
            "dir": [direction.x, direction.y, direction.z],
            "volume": body.volume(),
            "radius": body.radius(),
            "rows": rows,
        });
        let out_path = Path::new(out);
        if let Some(parent) = out_path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        std::fs::write(out_path, serde_json::to_vec_pretty(&doc)?)?;
        tracing::info!(out, rows = count, "wrote scan");
    }
    Ok(())
}

fn info(name: &str, params: &[f64]) -> Result<()> {
    let body = make_shape(name, params)?;
    let doc = serde_json::json!({
        "shape": name,
        "params": params,
        "volume": body.volume(),
        "radius": body.radius(),
    });
    println!("{}", serde_json::to_string_pretty(&doc)?);
    Ok(())
}
