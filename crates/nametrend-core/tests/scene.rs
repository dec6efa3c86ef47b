// File: crates/nametrend-core/tests/scene.rs
// Purpose: Validate the render plan: grid, labels, segment geometry, colors, order.

use nametrend_core::chart::{render, Graph};
use nametrend_core::entry::RankEntry;
use nametrend_core::palette::color_for;
use nametrend_core::scene::DrawCmd;
use nametrend_core::types::{GRAPH_MARGIN, NDECADES};

const W: f64 = 400.0;
const H: f64 = 200.0;

fn eric() -> RankEntry {
    RankEntry::new("Eric", [363, 302, 245, 246, 252, 191, 147, 120, 120, 76, 51])
}

fn samantha() -> RankEntry {
    RankEntry::new("Samantha", [0, 0, 0, 0, 0, 0, 272, 107, 26, 5, 7])
}

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn empty_plan_is_grid_and_decade_labels() {
    let scene = render(&[], W, H);
    // NDECADES verticals, two margin lines, NDECADES year labels
    assert_eq!(scene.len(), NDECADES + 2 + NDECADES);

    let dx = W / NDECADES as f64;
    for (i, cmd) in scene[..NDECADES].iter().enumerate() {
        match cmd {
            DrawCmd::Line { from, to, .. } => {
                assert!(close(from.x, i as f64 * dx));
                assert!(close(from.y, 0.0));
                assert!(close(to.x, i as f64 * dx));
                assert!(close(to.y, H));
            }
            other => panic!("expected grid line, got {other:?}"),
        }
    }

    for (cmd, want_y) in scene[NDECADES..NDECADES + 2]
        .iter()
        .zip([GRAPH_MARGIN, H - GRAPH_MARGIN])
    {
        match cmd {
            DrawCmd::Line { from, to, .. } => {
                assert!(close(from.x, 0.0) && close(to.x, W));
                assert!(close(from.y, want_y) && close(to.y, want_y));
            }
            other => panic!("expected margin line, got {other:?}"),
        }
    }

    for (i, cmd) in scene[NDECADES + 2..].iter().enumerate() {
        match cmd {
            DrawCmd::Text { text, anchor, .. } => {
                assert_eq!(text, &(1900 + 10 * i as i32).to_string());
                assert!(close(anchor.x, i as f64 * dx));
                assert!(close(anchor.y, H));
            }
            other => panic!("expected decade label, got {other:?}"),
        }
    }
}

#[test]
fn eric_first_segment_geometry() {
    let entry = eric();
    let scene = render(&[&entry], W, H);
    let chrome = NDECADES + 2 + NDECADES;

    // deltaX = 400/11, deltaY = (150-50)/1000 = 0.1
    match &scene[chrome] {
        DrawCmd::Line { from, to, color } => {
            assert!(close(from.x, 0.0));
            assert!(close(from.y, 86.3));
            assert!(close(to.x, W / NDECADES as f64));
            assert!(close(to.y, 80.2));
            assert_eq!(*color, color_for(0));
        }
        other => panic!("expected first segment, got {other:?}"),
    }
    match &scene[chrome + 1] {
        DrawCmd::Text { text, anchor, color } => {
            assert_eq!(text, "Eric 363");
            assert!(close(anchor.x, 0.0) && close(anchor.y, 86.3));
            assert_eq!(*color, color_for(0));
        }
        other => panic!("expected first point label, got {other:?}"),
    }
}

#[test]
fn one_series_emits_segments_and_fencepost_labels() {
    let entry = eric();
    let scene = render(&[&entry], W, H);
    let chrome = NDECADES + 2 + NDECADES;

    let lines = scene[chrome..]
        .iter()
        .filter(|c| matches!(c, DrawCmd::Line { .. }))
        .count();
    let labels = scene[chrome..]
        .iter()
        .filter(|c| matches!(c, DrawCmd::Text { .. }))
        .count();
    assert_eq!(lines, NDECADES - 1);
    assert_eq!(labels, NDECADES);

    // The closing fence-post label carries the final decade's rank.
    match scene.last().unwrap() {
        DrawCmd::Text { text, anchor, .. } => {
            assert_eq!(text, "Eric 51");
            assert!(close(anchor.x, (NDECADES - 1) as f64 * W / NDECADES as f64));
        }
        other => panic!("expected fence-post label, got {other:?}"),
    }
}

#[test]
fn sentinel_points_pin_to_bottom_margin_and_star_labels() {
    let entry = samantha();
    let scene = render(&[&entry], W, H);

    for cmd in &scene {
        if let DrawCmd::Text { text, anchor, .. } = cmd {
            if text.starts_with("Samantha") && text.ends_with('*') {
                assert_eq!(anchor.y, H - GRAPH_MARGIN);
            }
        }
    }

    // Decades 0..=5 are unranked: exactly 6 starred labels.
    let starred = scene
        .iter()
        .filter(|c| matches!(c, DrawCmd::Text { text, .. } if text == "Samantha *"))
        .count();
    assert_eq!(starred, 6);

    // The first segment runs along the bottom margin line.
    let chrome = NDECADES + 2 + NDECADES;
    match &scene[chrome] {
        DrawCmd::Line { from, to, .. } => {
            assert_eq!(from.y, H - GRAPH_MARGIN);
            assert_eq!(to.y, H - GRAPH_MARGIN);
        }
        other => panic!("expected sentinel segment, got {other:?}"),
    }
}

#[test]
fn colors_cycle_every_four_series() {
    for k in 0..8 {
        assert_eq!(color_for(k), color_for(k + 4));
    }
    assert_ne!(color_for(0), color_for(1));
    assert_ne!(color_for(1), color_for(2));
    assert_ne!(color_for(2), color_for(3));
}

#[test]
fn series_take_color_by_list_position() {
    let a = eric();
    let b = samantha();
    let scene = render(&[&a, &b], W, H);
    let chrome = NDECADES + 2 + NDECADES;
    let per_series = (NDECADES - 1) * 2 + 1;

    match &scene[chrome] {
        DrawCmd::Line { color, .. } => assert_eq!(*color, color_for(0)),
        other => panic!("expected line, got {other:?}"),
    }
    match &scene[chrome + per_series] {
        DrawCmd::Line { color, .. } => assert_eq!(*color, color_for(1)),
        other => panic!("expected line, got {other:?}"),
    }
}

#[test]
fn duplicate_entries_plot_twice_and_clear_resets() {
    let entry = eric();
    let mut graph = Graph::new();
    graph.add_entry(&entry);
    graph.add_entry(&entry);

    let chrome = NDECADES + 2 + NDECADES;
    let per_series = (NDECADES - 1) * 2 + 1;
    let scene = graph.render_plan(W, H);
    assert_eq!(scene.len(), chrome + 2 * per_series);

    graph.clear();
    let scene = graph.render_plan(W, H);
    assert_eq!(scene.len(), chrome);
    assert!(scene
        .iter()
        .all(|c| !matches!(c, DrawCmd::Text { text, .. } if text.starts_with("Eric"))));
}

#[test]
fn render_is_pure() {
    let a = eric();
    let b = samantha();
    let series: Vec<&RankEntry> = vec![&a, &b];
    assert_eq!(render(&series, W, H), render(&series, W, H));
    // Same list on a resized canvas is recomputed from scratch.
    assert_ne!(render(&series, W, H), render(&series, 2.0 * W, H));
}
