// File: crates/figure-core/src/lib.rs
// Summary: Core library entry point; exports the data model and the one-shot page renderer.

pub mod axis;
pub mod bars;
pub mod chart;
pub mod dataset;
pub mod error;
pub mod geometry;
pub mod grid;
pub mod layout;
pub mod render;
pub mod request;
pub mod scale;
pub mod series;
pub mod stats;
pub mod style;
pub mod text;
pub mod theme;
pub mod types;
pub mod view;

pub use axis::{AxisSpec, ScaleKind};
pub use bars::BarGroup;
pub use chart::Chart;
pub use dataset::{Dataset, XDomain};
pub use error::RenderError;
pub use render::render;
pub use request::{OutputFormat, RenderRequest};
pub use series::Series;
pub use stats::Summary;
pub use style::{ChartKind, Hatch, LegendPosition, LegendSpec, Marker, SeriesStyle, StyleSpec};
pub use theme::Theme;
pub use view::ViewState;
