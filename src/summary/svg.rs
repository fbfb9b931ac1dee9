//! Self-contained SVG implementation of [`PlotSurface`].
//!
//! Produces a single SVG document with one subplot per grid cell: bars for
//! the good-value histogram, a translucent band over the bad fraction, and
//! the title/label text. Surface units map to pixels at a fixed scale, so
//! the 2:1 cell aspect requested by the summary is preserved.

use crate::color::{Rgb, Rgba};

use super::surface::{GridLayout, HistogramBar, PlotSurface};

/// Pixels per surface unit.
const PX_PER_UNIT: f64 = 80.0;

/// Padding inside each cell, in pixels (top is larger for the title).
const PAD_TOP: f64 = 24.0;
const PAD_BOTTOM: f64 = 22.0;
const PAD_SIDE: f64 = 10.0;

/// Gap between adjacent bars, in pixels.
const BAR_GAP: f64 = 2.0;

#[derive(Debug, Default)]
struct Cell {
    index: usize,
    bars: Vec<HistogramBar>,
    bar_color: Option<Rgb>,
    shade: Option<(f64, Rgba)>,
    xlabel: Option<String>,
    title: Option<String>,
}

/// Plot surface that renders to an SVG string.
#[derive(Debug, Default)]
pub struct SvgSurface {
    layout: Option<GridLayout>,
    cells: Vec<Cell>,
    current: Option<Cell>,
    finished: bool,
}

impl SvgSurface {
    /// Create an empty surface.
    pub fn new() -> Self {
        Self::default()
    }

    /// Render the accumulated draw calls to an SVG document.
    pub fn into_svg(self) -> String {
        if !self.finished {
            tracing::debug!("rendering a surface that was never finished");
        }

        let layout = match self.layout {
            Some(l) => l,
            None => {
                return "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"0\" height=\"0\"/>\n"
                    .to_string()
            }
        };

        let cell_w = layout.cell_width * PX_PER_UNIT;
        let cell_h = layout.cell_height * PX_PER_UNIT;
        let width = cell_w * layout.cols as f64;
        let height = cell_h * layout.rows.max(1) as f64;

        let mut out = String::new();
        out.push_str(&format!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{:.0}\" height=\"{:.0}\" \
             viewBox=\"0 0 {:.0} {:.0}\" font-family=\"sans-serif\">\n",
            width, height, width, height
        ));
        out.push_str("<rect width=\"100%\" height=\"100%\" fill=\"white\"/>\n");

        for cell in &self.cells {
            let col = cell.index % layout.cols;
            let row = cell.index / layout.cols;
            let x0 = col as f64 * cell_w;
            let y0 = row as f64 * cell_h;
            out.push_str(&format!(
                "<g transform=\"translate({:.1},{:.1})\">\n",
                x0, y0
            ));
            render_cell(&mut out, cell, cell_w, cell_h);
            out.push_str("</g>\n");
        }

        out.push_str("</svg>\n");
        out
    }
}

fn render_cell(out: &mut String, cell: &Cell, cell_w: f64, cell_h: f64) {
    let plot_w = cell_w - 2.0 * PAD_SIDE;
    let plot_h = cell_h - PAD_TOP - PAD_BOTTOM;
    let plot_bottom = PAD_TOP + plot_h;

    // Bad-fraction band first, behind the bars.
    if let Some((fraction, color)) = &cell.shade {
        let band_h = plot_h * fraction.clamp(0.0, 1.0);
        out.push_str(&format!(
            "<rect x=\"{:.1}\" y=\"{:.1}\" width=\"{:.1}\" height=\"{:.1}\" \
             fill=\"{}\" fill-opacity=\"{:.3}\"/>\n",
            PAD_SIDE,
            plot_bottom - band_h,
            plot_w,
            band_h,
            css_rgb(color.r, color.g, color.b),
            color.a,
        ));
    }

    if !cell.bars.is_empty() {
        let max_count = cell.bars.iter().map(|b| b.count).max().unwrap_or(1).max(1);
        let bar_w = plot_w / cell.bars.len() as f64;
        let fill = cell
            .bar_color
            .map(|c| css_rgb(c.r, c.g, c.b))
            .unwrap_or_else(|| "black".to_string());

        for (i, bar) in cell.bars.iter().enumerate() {
            let h = plot_h * bar.count as f64 / max_count as f64;
            out.push_str(&format!(
                "<rect x=\"{:.1}\" y=\"{:.1}\" width=\"{:.1}\" height=\"{:.1}\" fill=\"{}\">\
                 <title>{}: {}</title></rect>\n",
                PAD_SIDE + bar_w * i as f64 + BAR_GAP / 2.0,
                plot_bottom - h,
                (bar_w - BAR_GAP).max(1.0),
                h,
                fill,
                escape(&bar.label),
                bar.count,
            ));
        }
    }

    // Axis line.
    out.push_str(&format!(
        "<line x1=\"{:.1}\" y1=\"{:.1}\" x2=\"{:.1}\" y2=\"{:.1}\" stroke=\"#999\"/>\n",
        PAD_SIDE,
        plot_bottom,
        PAD_SIDE + plot_w,
        plot_bottom,
    ));

    if let Some(title) = &cell.title {
        out.push_str(&format!(
            "<text x=\"{:.1}\" y=\"15\" font-size=\"12\" text-anchor=\"middle\">{}</text>\n",
            cell_w / 2.0,
            escape(title),
        ));
    }

    if let Some(xlabel) = &cell.xlabel {
        out.push_str(&format!(
            "<text x=\"{:.1}\" y=\"{:.1}\" font-size=\"11\" text-anchor=\"middle\" \
             fill=\"#333\">{}</text>\n",
            cell_w / 2.0,
            cell_h - 6.0,
            escape(xlabel),
        ));
    }
}

fn css_rgb(r: f64, g: f64, b: f64) -> String {
    format!(
        "rgb({},{},{})",
        (r * 255.0).round() as u8,
        (g * 255.0).round() as u8,
        (b * 255.0).round() as u8
    )
}

fn escape(s: &str) -> String {
    s.replace('&', "&amp;").replace('<', "&lt;").replace('>', "&gt;")
}

impl PlotSurface for SvgSurface {
    fn begin_grid(&mut self, layout: GridLayout) {
        self.layout = Some(layout);
    }

    fn begin_cell(&mut self, index: usize) {
        self.current = Some(Cell {
            index,
            ..Cell::default()
        });
    }

    fn draw_histogram(&mut self, bars: &[HistogramBar], color: Rgb) {
        if let Some(cell) = &mut self.current {
            cell.bars = bars.to_vec();
            cell.bar_color = Some(color);
        }
    }

    fn shade_bad_fraction(&mut self, fraction: f64, color: Rgba) {
        if let Some(cell) = &mut self.current {
            cell.shade = Some((fraction, color));
        }
    }

    fn set_xlabel(&mut self, label: &str) {
        if let Some(cell) = &mut self.current {
            cell.xlabel = Some(label.to_string());
        }
    }

    fn set_title(&mut self, title: &str) {
        if let Some(cell) = &mut self.current {
            cell.title = Some(title.to_string());
        }
    }

    fn end_cell(&mut self) {
        if let Some(cell) = self.current.take() {
            self.cells.push(cell);
        }
    }

    fn finish(&mut self) {
        self.finished = true;
    }
}
