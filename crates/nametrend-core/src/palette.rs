// File: crates/nametrend-core/src/palette.rs
// Summary: Fixed series color rotation and chart chrome colors.

use crate::types::Rgba;

/// Grid and margin line color.
pub const GRID: Rgba = Rgba::opaque(60, 60, 70);
/// Decade label color.
pub const AXIS_LABEL: Rgba = Rgba::opaque(20, 20, 30);

const CYAN: Rgba = Rgba::opaque(0, 255, 255);
const BLUE: Rgba = Rgba::opaque(0, 0, 255);
const MAGENTA: Rgba = Rgba::opaque(255, 0, 255);
const GREEN: Rgba = Rgba::opaque(0, 255, 0);

/// The four-hue rotation applied to plotted series, in fixed order.
const SERIES_CYCLE: [Rgba; 4] = [CYAN, BLUE, MAGENTA, GREEN];

/// Color for the series at zero-based position `index` in the active list.
/// Pure function of `index % 4`; a series changes color when the list order
/// changes, e.g. after a clear and re-add.
#[inline]
pub fn color_for(index: usize) -> Rgba {
    SERIES_CYCLE[index % SERIES_CYCLE.len()]
}
