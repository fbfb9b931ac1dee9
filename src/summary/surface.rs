//! The plotting-surface seam.
//!
//! The histogram summary issues draw calls against a [`PlotSurface`] and
//! never touches windowing, files, or display itself. Production code uses
//! [`SvgSurface`](super::svg::SvgSurface); tests use [`RecordingSurface`]
//! to assert on the calls instead of parsing rendered output.

use crate::color::{Rgb, Rgba};

/// One bar of a rendered histogram.
#[derive(Debug, Clone, PartialEq)]
pub struct HistogramBar {
    /// Bin or category label shown under the bar.
    pub label: String,
    /// Number of good values in the bin.
    pub count: usize,
}

/// Dimensions of the subplot grid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridLayout {
    pub rows: usize,
    pub cols: usize,
    /// Cell width in surface units.
    pub cell_width: f64,
    /// Cell height in surface units.
    pub cell_height: f64,
}

/// A grid-of-axes rendering target.
///
/// Calls arrive in a fixed order: `begin_grid` once, then for each subplot
/// `begin_cell`, the cell's draw calls, `end_cell`, and finally `finish`.
pub trait PlotSurface {
    /// Allocate the subplot grid.
    fn begin_grid(&mut self, layout: GridLayout);

    /// Make the cell at `index` (row-major) the active axes.
    fn begin_cell(&mut self, index: usize);

    /// Draw a histogram of the good values in the active cell.
    fn draw_histogram(&mut self, bars: &[HistogramBar], color: Rgb);

    /// Shade the vertical fraction `[0, fraction]` across the full x range,
    /// behind the bars, to flag the proportion of bad values.
    fn shade_bad_fraction(&mut self, fraction: f64, color: Rgba);

    /// Label the active cell's x axis.
    fn set_xlabel(&mut self, label: &str);

    /// Title the active cell.
    fn set_title(&mut self, title: &str);

    /// Deactivate the current cell.
    fn end_cell(&mut self);

    /// Finalize layout; no draw calls follow.
    fn finish(&mut self);
}

/// A recorded draw call, for assertions in tests.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCall {
    BeginGrid(GridLayout),
    BeginCell(usize),
    Histogram {
        bars: Vec<HistogramBar>,
        color: Rgb,
    },
    ShadeBadFraction {
        fraction: f64,
        color: Rgba,
    },
    Xlabel(String),
    Title(String),
    EndCell,
    Finish,
}

/// Surface that records every draw call it receives.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    calls: Vec<DrawCall>,
}

impl RecordingSurface {
    /// Create an empty recording surface.
    pub fn new() -> Self {
        Self::default()
    }

    /// All calls received so far.
    pub fn calls(&self) -> &[DrawCall] {
        &self.calls
    }

    /// Titles set across all cells, in order.
    pub fn titles(&self) -> Vec<&str> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                DrawCall::Title(t) => Some(t.as_str()),
                _ => None,
            })
            .collect()
    }

    /// X-axis labels set across all cells, in order.
    pub fn xlabels(&self) -> Vec<&str> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                DrawCall::Xlabel(l) => Some(l.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Shaded bad fractions across all cells, in order.
    pub fn bad_fractions(&self) -> Vec<f64> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                DrawCall::ShadeBadFraction { fraction, .. } => Some(*fraction),
                _ => None,
            })
            .collect()
    }

    /// The grid layout, if one was allocated.
    pub fn layout(&self) -> Option<GridLayout> {
        self.calls.iter().find_map(|c| match c {
            DrawCall::BeginGrid(layout) => Some(*layout),
            _ => None,
        })
    }
}

impl PlotSurface for RecordingSurface {
    fn begin_grid(&mut self, layout: GridLayout) {
        self.calls.push(DrawCall::BeginGrid(layout));
    }

    fn begin_cell(&mut self, index: usize) {
        self.calls.push(DrawCall::BeginCell(index));
    }

    fn draw_histogram(&mut self, bars: &[HistogramBar], color: Rgb) {
        self.calls.push(DrawCall::Histogram {
            bars: bars.to_vec(),
            color,
        });
    }

    fn shade_bad_fraction(&mut self, fraction: f64, color: Rgba) {
        self.calls.push(DrawCall::ShadeBadFraction { fraction, color });
    }

    fn set_xlabel(&mut self, label: &str) {
        self.calls.push(DrawCall::Xlabel(label.to_string()));
    }

    fn set_title(&mut self, title: &str) {
        self.calls.push(DrawCall::Title(title.to_string()));
    }

    fn end_cell(&mut self) {
        self.calls.push(DrawCall::EndCell);
    }

    fn finish(&mut self) {
        self.calls.push(DrawCall::Finish);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recording_surface_keeps_call_order() {
        let mut surface = RecordingSurface::new();
        surface.begin_grid(GridLayout {
            rows: 1,
            cols: 3,
            cell_width: 4.0,
            cell_height: 2.0,
        });
        surface.begin_cell(0);
        surface.set_title("radius lacks 1/2 (50%)");
        surface.end_cell();
        surface.finish();

        assert_eq!(surface.calls().len(), 5);
        assert_eq!(surface.titles(), ["radius lacks 1/2 (50%)"]);
        assert_eq!(surface.layout().unwrap().cols, 3);
        assert!(matches!(surface.calls().last(), Some(DrawCall::Finish)));
    }
}
