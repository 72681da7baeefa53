//! Trace a few random blobs and print their outlines as quick sanity output.
//!
//! Usage:
//!   cargo run -p rlepoly --example trace_blob -- eight
//!   cargo run -p rlepoly --example trace_blob -- four
//!
//! Prints run count, vertex count and area per sample, then the first
//! sample as ASCII art with `#` for object pixels.

use rlepoly::prelude::*;
use rlepoly::rle::rand::{draw_blob, BlobCfg, ReplayToken};

fn main() {
    let mode = std::env::args().nth(1).unwrap_or_else(|| "eight".to_string());
    let connectivity = match mode.as_str() {
        "eight" => Connectivity::Eight,
        "four" => Connectivity::Four,
        _ => {
            eprintln!("usage: trace_blob [eight|four]");
            return;
        }
    };
    let blob = BlobCfg {
        width: 16,
        height: 10,
        steps: 40,
        walkers: 3,
    };
    let cfg = VectorizeCfg {
        trace: TraceCfg {
            connectivity,
            max_steps: None,
        },
        ..VectorizeCfg::default()
    };
    for i in 0..5 {
        let obj = draw_blob(blob, ReplayToken { seed: 2025, index: i });
        let poly = vectorize_with(&obj, &cfg);
        println!(
            "sample {i}: runs={}, pixels={}, vertices={}, area={}",
            obj.runs.len(),
            obj.store().pixel_count(),
            poly.len(),
            poly.area()
        );
        if i == 0 {
            print_ascii(&obj, blob.width, blob.height);
        }
    }
}

fn print_ascii(obj: &LabelObject, width: usize, height: usize) {
    let store = obj.store();
    for line in 0..height as i64 {
        let row: String = (0..width as i64)
            .map(|col| if store.run_at(line, col).is_some() { '#' } else { '.' })
            .collect();
        println!("{row}");
    }
}
