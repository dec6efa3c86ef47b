// File: crates/nametrend-core/src/lib.rs
// Summary: Core library entry point; exports the dataset model and renderer API.

pub mod chart;
pub mod dataset;
pub mod entry;
pub mod geometry;
pub mod index;
pub mod palette;
pub mod scale;
pub mod scene;
pub mod types;

pub use chart::{render, Graph};
pub use dataset::{parse_dataset, parse_dataset_lossy, FormatError};
pub use entry::RankEntry;
pub use geometry::Point;
pub use index::{canonicalize, NameIndex};
pub use palette::color_for;
pub use scene::{DrawCmd, Scene};
pub use types::Rgba;
