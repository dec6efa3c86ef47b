// File: crates/nametrend-core/src/chart.rs
// Summary: Active-series graph and the scene-building render pipeline.

use crate::entry::RankEntry;
use crate::geometry::Point;
use crate::palette::{self, color_for};
use crate::scale::{DecadeScale, RankScale};
use crate::scene::{DrawCmd, Scene};
use crate::types::{Rgba, NDECADES, START_DECADE};

/// The list of series currently on display: references into the entry set
/// owned by the index, in insertion order, duplicates allowed.
#[derive(Clone, Debug, Default)]
pub struct Graph<'a> {
    entries: Vec<&'a RankEntry>,
}

impl<'a> Graph<'a> {
    pub fn new() -> Self {
        Self { entries: Vec::new() }
    }

    /// Append one entry. The graph is not redrawn here; callers ask for a
    /// fresh plan via [`Graph::render_plan`] whenever the list or the
    /// canvas size changes.
    pub fn add_entry(&mut self, entry: &'a RankEntry) {
        self.entries.push(entry);
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn entries(&self) -> &[&'a RankEntry] {
        &self.entries
    }

    pub fn render_plan(&self, width: f64, height: f64) -> Scene {
        render(&self.entries, width, height)
    }
}

/// Build the full drawing plan for the given series on a canvas of the
/// given size: grid, then decade labels, then each series in list order.
///
/// Pure and idempotent; the scene is recomputed from scratch on every call
/// and depends only on the arguments.
pub fn render(series: &[&RankEntry], width: f64, height: f64) -> Scene {
    let mut scene = Scene::new();
    draw_grid(&mut scene, width, height);
    draw_decade_labels(&mut scene, width, height);
    for (k, entry) in series.iter().enumerate() {
        draw_entry(&mut scene, entry, k, width, height);
    }
    scene
}

// ---- helpers ----------------------------------------------------------------

fn draw_grid(scene: &mut Scene, width: f64, height: f64) {
    let xs = DecadeScale::new(width);
    for i in 0..NDECADES {
        scene.push(DrawCmd::Line {
            from: Point::new(xs.x(i), 0.0),
            to: Point::new(xs.x(i), height),
            color: palette::GRID,
        });
    }

    let ys = RankScale::new(height);
    for y in [ys.top, ys.bottom] {
        scene.push(DrawCmd::Line {
            from: Point::new(0.0, y),
            to: Point::new(width, y),
            color: palette::GRID,
        });
    }
}

fn draw_decade_labels(scene: &mut Scene, width: f64, height: f64) {
    let xs = DecadeScale::new(width);
    for i in 0..NDECADES {
        let year = START_DECADE + 10 * i as i32;
        scene.push(DrawCmd::Text {
            text: year.to_string(),
            anchor: Point::new(xs.x(i), height),
            color: palette::AXIS_LABEL,
        });
    }
}

/// Plot one entry's line graph a segment at a time, labelling each plot
/// point, with an extra label on the final point (fence post).
fn draw_entry(scene: &mut Scene, entry: &RankEntry, k: usize, width: f64, height: f64) {
    let xs = DecadeScale::new(width);
    let ys = RankScale::new(height);
    let color = color_for(k);

    for decade in 0..NDECADES - 1 {
        let from_rank = entry.rank(decade);
        let to_rank = entry.rank(decade + 1);
        let from = Point::new(xs.x(decade), ys.y(from_rank));
        let to = Point::new(xs.x(decade + 1), ys.y(to_rank));

        scene.push(DrawCmd::Line { from, to, color });
        scene.push(point_label(entry, from, from_rank, color));

        if decade == NDECADES - 2 {
            scene.push(point_label(entry, to, to_rank, color));
        }
    }
}

/// Label text is the verbatim name followed by the rank, or `*` for a
/// decade where the name was unranked.
fn point_label(entry: &RankEntry, at: Point, rank: u32, color: Rgba) -> DrawCmd {
    let text = if rank == 0 {
        format!("{} *", entry.name())
    } else {
        format!("{} {}", entry.name(), rank)
    };
    DrawCmd::Text { text, anchor: at, color }
}
