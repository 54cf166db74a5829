mod plot;
pub use plot::GlucosePlot;

mod brush;
pub use brush::BrushStrip;

mod stats_table;
pub use stats_table::DailyStatsTable;

pub mod scale;

/// Shared horizontal geometry so the brush strip lines up with the plot.
pub(crate) const CHART_WIDTH: f64 = 1160.0;
pub(crate) const MARGIN_LEFT: f64 = 56.0;
pub(crate) const MARGIN_RIGHT: f64 = 24.0;
pub(crate) const INNER_WIDTH: f64 = CHART_WIDTH - MARGIN_LEFT - MARGIN_RIGHT;
