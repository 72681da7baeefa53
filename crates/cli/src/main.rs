use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use rlepoly::prelude::*;
use serde::Serialize;
use serde_json::json;
use tracing_subscriber::fmt::SubscriberBuilder;

mod provenance;
mod runs;

#[derive(Parser)]
#[command(name = "rlepoly")]
#[command(about = "Exterior polygons of run-length encoded label objects")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Trace every label of a run table and write the polygons as JSON
    Vectorize(VectorizeArgs),
    /// Print a small provenance JSON block
    Report,
}

#[derive(Args, Debug)]
struct VectorizeArgs {
    /// CSV with integer columns label,line,start,length
    #[arg(long)]
    input: PathBuf,
    #[arg(long)]
    out: PathBuf,
    /// Output coordinates of raster index (0, 0), as `x,y`
    #[arg(long, value_parser = parse_f64_pair, default_value = "0,0")]
    origin: (f64, f64),
    /// Output units per pixel, as `x,y`
    #[arg(long, value_parser = parse_f64_pair, default_value = "1,1")]
    spacing: (f64, f64),
    /// Raster index of the region the runs are expressed in, as `column,line`
    #[arg(long, value_parser = parse_i64_pair, default_value = "0,0")]
    start_index: (i64, i64),
    /// Treat diagonal contacts as separate pieces
    #[arg(long)]
    four_connected: bool,
    /// Drop vertices within this distance of their neighbours' chord
    #[arg(long)]
    simplify: Option<f64>,
}

fn parse_pair<T: std::str::FromStr>(s: &str) -> Result<(T, T), String>
where
    T::Err: std::fmt::Display,
{
    let (a, b) = s
        .split_once(',')
        .ok_or_else(|| format!("expected `a,b`, got `{s}`"))?;
    let parse = |v: &str| v.trim().parse::<T>().map_err(|e| format!("`{v}`: {e}"));
    Ok((parse(a)?, parse(b)?))
}

fn parse_f64_pair(s: &str) -> Result<(f64, f64), String> {
    parse_pair(s)
}

fn parse_i64_pair(s: &str) -> Result<(i64, i64), String> {
    parse_pair(s)
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Vectorize(args) => vectorize_cmd(args),
        Action::Report => report(),
    }
}

/// One traced object as written to the output JSON.
#[derive(Debug, Serialize)]
struct LabelPolygon {
    label: i64,
    vertices: Vec<[f64; 2]>,
}

impl VectorizeArgs {
    fn cfg(&self) -> VectorizeCfg {
        VectorizeCfg {
            trace: TraceCfg {
                connectivity: if self.four_connected {
                    Connectivity::Four
                } else {
                    Connectivity::Eight
                },
                max_steps: None,
            },
            origin: Vec2::new(self.origin.0, self.origin.1),
            spacing: Vec2::new(self.spacing.0, self.spacing.1),
            simplify_tol: self.simplify,
        }
    }
}

/// Trace each object with the step cap. Objects that fail are logged and
/// returned by label instead of aborting the batch.
fn vectorize_objects(
    objects: BTreeMap<i64, Vec<Run>>,
    start_index: (i64, i64),
    cfg: &VectorizeCfg,
) -> (Vec<LabelPolygon>, Vec<i64>) {
    let mut polygons = Vec::with_capacity(objects.len());
    let mut skipped = Vec::new();
    for (label, runs) in objects {
        let object = LabelObject::new(runs).with_start_index(start_index.0, start_index.1);
        match try_vectorize(&object, cfg) {
            Ok(poly) => polygons.push(LabelPolygon {
                label,
                vertices: poly.vertices.iter().map(|v| [v.x, v.y]).collect(),
            }),
            Err(err) => {
                tracing::warn!(label, error = %err, "object_skipped");
                skipped.push(label);
            }
        }
    }
    (polygons, skipped)
}

fn vectorize_cmd(args: VectorizeArgs) -> Result<()> {
    tracing::info!(input = %args.input.display(), out = %args.out.display(), "vectorize");
    let objects = runs::read_runs_csv(&args.input)?;
    let (polygons, skipped) = vectorize_objects(objects, args.start_index, &args.cfg());

    if let Some(parent) = args.out.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating output dir {}", parent.display()))?;
        }
    }
    std::fs::write(&args.out, serde_json::to_vec_pretty(&polygons)?)
        .with_context(|| format!("writing {}", args.out.display()))?;

    let params = json!({
        "input": args.input.to_string_lossy(),
        "origin": [args.origin.0, args.origin.1],
        "spacing": [args.spacing.0, args.spacing.1],
        "start_index": [args.start_index.0, args.start_index.1],
        "four_connected": args.four_connected,
        "simplify": args.simplify,
        "objects": polygons.len(),
        "skipped": skipped,
    });
    let prov = provenance::write_sidecar(&args.out, params)?;
    tracing::info!(
        objects = polygons.len(),
        skipped = skipped.len(),
        provenance = %prov.display(),
        "vectorize_done"
    );
    Ok(())
}

fn report() -> Result<()> {
    let obj = provenance::block(json!({}), &[] as &[&Path]);
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pairs_parse_with_spaces_and_signs() {
        assert_eq!(parse_f64_pair("1.5, -2").unwrap(), (1.5, -2.0));
        assert_eq!(parse_i64_pair("-3,4").unwrap(), (-3, 4));
        assert!(parse_f64_pair("1.5").is_err());
        assert!(parse_i64_pair("a,1").is_err());
    }

    #[test]
    fn cli_flags_build_cfg() {
        let cmd = Cmd::try_parse_from([
            "rlepoly",
            "vectorize",
            "--input",
            "runs.csv",
            "--out",
            "polys.json",
            "--spacing",
            "0.5,-0.5",
            "--four-connected",
            "--simplify",
            "0.1",
        ])
        .unwrap();
        let Action::Vectorize(args) = cmd.action else {
            panic!("expected vectorize");
        };
        let cfg = args.cfg();
        assert_eq!(cfg.trace.connectivity, Connectivity::Four);
        assert_eq!(cfg.spacing, Vec2::new(0.5, -0.5));
        assert_eq!(cfg.origin, Vec2::zeros());
        assert_eq!(cfg.simplify_tol, Some(0.1));
        assert_eq!(args.start_index, (0, 0));
    }

    #[test]
    fn objects_are_traced_in_label_order() {
        let mut objects = BTreeMap::new();
        objects.insert(9, vec![Run::new(0, 0, 2), Run::new(1, 0, 2)]);
        objects.insert(2, vec![Run::new(5, 5, 1)]);
        let (polys, skipped) =
            vectorize_objects(objects, (10, 0), &VectorizeCfg::default());
        assert!(skipped.is_empty());
        assert_eq!(polys.len(), 2);
        assert_eq!(polys[0].label, 2);
        assert_eq!(polys[0].vertices[0], [14.5, 4.5]);
        assert_eq!(polys[1].vertices.len(), 4);
    }

    #[test]
    fn step_limit_skips_object() {
        let mut objects = BTreeMap::new();
        objects.insert(1, vec![Run::new(0, 0, 3), Run::new(1, 0, 3)]);
        let cfg = VectorizeCfg {
            trace: TraceCfg {
                max_steps: Some(1),
                ..TraceCfg::default()
            },
            ..VectorizeCfg::default()
        };
        let (polys, skipped) = vectorize_objects(objects, (0, 0), &cfg);
        assert!(polys.is_empty());
        assert_eq!(skipped, vec![1]);
    }

    #[test]
    fn far_apart_lines_skip_only_that_object() {
        let mut objects = BTreeMap::new();
        objects.insert(1, vec![Run::new(0, 0, 1), Run::new(1 << 61, 0, 1)]);
        objects.insert(2, vec![Run::new(0, 0, 1)]);
        let (polys, skipped) = vectorize_objects(objects, (0, 0), &VectorizeCfg::default());
        assert_eq!(skipped, vec![1]);
        assert_eq!(polys.len(), 1);
        assert_eq!(polys[0].label, 2);
    }

    #[test]
    fn vectorize_writes_polygons_and_sidecar() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("runs.csv");
        std::fs::write(&input, "label,line,start,length\n4,0,0,1\n").unwrap();
        let out = dir.path().join("nested").join("polys.json");
        let cmd = Cmd::try_parse_from([
            "rlepoly",
            "vectorize",
            "--input",
            input.to_str().unwrap(),
            "--out",
            out.to_str().unwrap(),
        ])
        .unwrap();
        let Action::Vectorize(args) = cmd.action else {
            panic!("expected vectorize");
        };
        vectorize_cmd(args).unwrap();
        let written: serde_json::Value =
            serde_json::from_slice(&std::fs::read(&out).unwrap()).unwrap();
        assert_eq!(written[0]["label"], 4);
        assert_eq!(written[0]["vertices"].as_array().unwrap().len(), 4);
        assert_eq!(written[0]["vertices"][0][0], -0.5);
        assert!(dir.path().join("nested").join("polys.provenance.json").exists());
    }
}
