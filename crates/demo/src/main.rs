// File: crates/demo/src/main.rs
// Summary: Demo loads a names dataset, looks up the requested names, and renders
// their rank trends as one overlaid PNG chart.

use anyhow::{Context, Result};
use nametrend_core::{Graph, NameIndex};
use nametrend_render_skia::{render_to_png, RenderOptions};
use std::path::PathBuf;

fn main() -> Result<()> {
    // Accept dataset path plus names from CLI, or fall back to the sample set
    let mut args = std::env::args().skip(1);
    let path = args
        .next()
        .unwrap_or_else(|| "data/names-sample.txt".to_string());
    let mut names: Vec<String> = args.collect();
    if names.is_empty() {
        names = vec!["Eric".to_string(), "Samantha".to_string()];
    }

    println!("Using dataset file: {path}");
    let text = std::fs::read_to_string(&path)
        .with_context(|| format!("failed to read dataset '{path}'"))?;

    let (index, skipped) = NameIndex::load_lossy(&text);
    println!("Loaded {} names", index.len());
    for err in &skipped {
        println!("  skipped {err}");
    }
    if index.is_empty() {
        anyhow::bail!("no entries loaded — check the dataset format.");
    }

    let mut graph = Graph::new();
    for name in &names {
        match index.lookup(name) {
            Some(entry) => {
                println!("{entry}");
                graph.add_entry(entry);
            }
            None => println!("{name}: not found"),
        }
    }

    let opts = RenderOptions::default();
    let scene = graph.render_plan(opts.width as f64, opts.height as f64);

    let out = PathBuf::from("target/out/nametrend.png");
    render_to_png(&scene, &opts, &out)?;
    println!("Wrote {}", out.display());

    Ok(())
}
