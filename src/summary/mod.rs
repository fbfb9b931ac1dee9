//! Histogram-based data-quality summary for populations.
//!
//! `plot_histograms` renders one histogram per required column into a
//! 3-wide grid, shading each subplot with the fraction of missing or
//! invalid values so gaps in a population stand out at a glance.
//!
//! - [`surface`] - the `PlotSurface` collaborator trait and test double
//! - [`svg`] - a self-contained SVG implementation of the surface

pub mod surface;
pub mod svg;

pub use surface::{DrawCall, GridLayout, HistogramBar, PlotSurface, RecordingSurface};
pub use svg::SvgSurface;

use std::collections::BTreeSet;

use crate::color::{resolve_color, Rgba};
use crate::error::Result;
use crate::population::{Column, ColumnData, ColumnKind, Population};

/// Categorical columns with this many or more distinct values are excluded
/// from the rendered grid (an unbounded category axis is unreadable).
pub const MAX_CATEGORY_LEVELS: usize = 50;

/// Fixed width of the subplot grid.
const GRID_COLUMNS: usize = 3;

/// Equal-width bins used for quantitative histograms.
const QUANTITATIVE_BINS: usize = 10;

/// Cells are twice as wide as tall: width 2·scale, height scale.
const CELL_SCALE: f64 = 2.0;

/// Partition the required columns into (quantitative, categorical).
///
/// Columns come back in `required` order within each partition. Every
/// required column must exist and be non-empty; kinds come from the
/// population's declared schema, never from probing values.
pub fn split_columns<'a>(
    pop: &'a Population,
    required: &[String],
) -> Result<(Vec<&'a Column>, Vec<&'a Column>)> {
    let mut quant = Vec::new();
    let mut qual = Vec::new();

    for name in required {
        let col = pop.require_column(name)?;
        match col.kind() {
            ColumnKind::Quantitative => quant.push(col),
            ColumnKind::Categorical => qual.push(col),
        }
    }

    Ok((quant, qual))
}

/// Per-column summary statistics feeding one subplot.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnSummary {
    /// Column name.
    pub name: String,
    /// Declared kind.
    pub kind: ColumnKind,
    /// Total number of rows.
    pub total: usize,
    /// Number of missing/invalid rows.
    pub bad: usize,
    /// Histogram of the good rows.
    pub bars: Vec<HistogramBar>,
}

impl ColumnSummary {
    /// Proportion of rows that are missing/invalid.
    pub fn bad_fraction(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            self.bad as f64 / self.total as f64
        }
    }

    /// Subplot title, e.g. `"radius lacks 2/4 (50%)"`.
    pub fn title(&self) -> String {
        format!(
            "{} lacks {}/{} ({:.0}%)",
            self.name,
            self.bad,
            self.total,
            self.bad_fraction() * 100.0
        )
    }
}

/// Summarize one column: good mask, bad count, histogram bars.
///
/// Quantitative columns treat non-finite values as bad and bin the finite
/// ones into equal-width bins. Categorical columns treat missing entries as
/// bad and give each distinct value its own bar, sorted by label.
pub fn summarize_column(col: &Column) -> ColumnSummary {
    match col.data() {
        ColumnData::Quantitative(values) => {
            let good: Vec<f64> = values.iter().copied().filter(|v| v.is_finite()).collect();
            ColumnSummary {
                name: col.name().to_string(),
                kind: ColumnKind::Quantitative,
                total: values.len(),
                bad: values.len() - good.len(),
                bars: bin_quantitative(&good, QUANTITATIVE_BINS),
            }
        }
        ColumnData::Categorical(values) => {
            let good: Vec<&str> = values.iter().flatten().map(String::as_str).collect();
            ColumnSummary {
                name: col.name().to_string(),
                kind: ColumnKind::Categorical,
                total: values.len(),
                bad: values.len() - good.len(),
                bars: bin_categorical(&good),
            }
        }
    }
}

/// Number of distinct non-missing values in a categorical column.
fn distinct_levels(values: &[Option<String>]) -> usize {
    values
        .iter()
        .flatten()
        .map(String::as_str)
        .collect::<BTreeSet<_>>()
        .len()
}

/// Choose and order the columns to render.
///
/// Categorical columns with fewer than [`MAX_CATEGORY_LEVELS`] distinct
/// values come first, then every quantitative column; order within each
/// group follows `required`.
pub fn select_columns<'a>(
    pop: &'a Population,
    required: &[String],
) -> Result<Vec<&'a Column>> {
    let (quant, qual) = split_columns(pop, required)?;

    let mut cols = Vec::with_capacity(quant.len() + qual.len());
    for col in qual {
        match col.data() {
            ColumnData::Categorical(values) => {
                let levels = distinct_levels(values);
                if levels < MAX_CATEGORY_LEVELS {
                    cols.push(col);
                } else {
                    tracing::debug!(
                        column = col.name(),
                        levels,
                        "skipping categorical column with too many levels"
                    );
                }
            }
            ColumnData::Quantitative(_) => unreachable!("split_columns partitions by kind"),
        }
    }
    cols.extend(quant);

    Ok(cols)
}

/// Render histograms of all the required columns in the population.
///
/// These can help see what's missing and what's there: each subplot shows
/// the distribution of good values in black, a translucent red band over
/// the vertical fraction of bad values, and a title with the bad counts.
pub fn plot_histograms(
    pop: &Population,
    required: &[String],
    surface: &mut dyn PlotSurface,
) -> Result<()> {
    let cols = select_columns(pop, required)?;

    let nrows = cols.len().div_ceil(GRID_COLUMNS);
    surface.begin_grid(GridLayout {
        rows: nrows,
        cols: GRID_COLUMNS,
        cell_width: 2.0 * CELL_SCALE,
        cell_height: CELL_SCALE,
    });

    let bar_color = resolve_color("black")?;
    let shade_color = bad_band_color()?;

    for (i, col) in cols.iter().enumerate() {
        let summary = summarize_column(col);

        surface.begin_cell(i);
        surface.draw_histogram(&summary.bars, bar_color);
        surface.shade_bad_fraction(summary.bad_fraction(), shade_color);
        surface.set_xlabel(&summary.name);
        surface.set_title(&summary.title());
        surface.end_cell();
    }

    surface.finish();
    Ok(())
}

/// Translucent red used for the bad-fraction band.
fn bad_band_color() -> Result<Rgba> {
    Ok(resolve_color("red")?.with_alpha(0.5))
}

/// Bin finite values into `nbins` equal-width bins spanning their range.
fn bin_quantitative(good: &[f64], nbins: usize) -> Vec<HistogramBar> {
    if good.is_empty() {
        return Vec::new();
    }

    let lo = good.iter().copied().fold(f64::INFINITY, f64::min);
    let hi = good.iter().copied().fold(f64::NEG_INFINITY, f64::max);

    if lo == hi {
        return vec![HistogramBar {
            label: fmt_edge(lo),
            count: good.len(),
        }];
    }

    let width = (hi - lo) / nbins as f64;
    let mut counts = vec![0usize; nbins];
    for &v in good {
        // The top edge belongs to the last bin.
        let idx = (((v - lo) / width) as usize).min(nbins - 1);
        counts[idx] += 1;
    }

    counts
        .into_iter()
        .enumerate()
        .map(|(i, count)| HistogramBar {
            label: format!(
                "{}–{}",
                fmt_edge(lo + width * i as f64),
                fmt_edge(lo + width * (i + 1) as f64)
            ),
            count,
        })
        .collect()
}

/// One bar per distinct category value, sorted by label.
fn bin_categorical(good: &[&str]) -> Vec<HistogramBar> {
    let mut counts = std::collections::BTreeMap::<&str, usize>::new();
    for &v in good {
        *counts.entry(v).or_insert(0) += 1;
    }
    counts
        .into_iter()
        .map(|(label, count)| HistogramBar {
            label: label.to_string(),
            count,
        })
        .collect()
}

/// Compact bin-edge formatting for axis labels.
fn fmt_edge(x: f64) -> String {
    let abs = x.abs();
    if abs != 0.0 && (abs >= 10_000.0 || abs < 0.001) {
        return format!("{:.2e}", x);
    }
    let s = format!("{:.3}", x);
    let s = s.trim_end_matches('0').trim_end_matches('.');
    s.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::population::Population;

    fn names(cols: &[&Column]) -> Vec<String> {
        cols.iter().map(|c| c.name().to_string()).collect()
    }

    fn required(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    fn mixed_population() -> Population {
        Population::new(
            "confirmed",
            vec![
                Column::quantitative("radius", vec![1.0, f64::NAN, 3.0, f64::NAN]),
                Column::categorical(
                    "method",
                    vec![
                        Some("transit".into()),
                        Some("rv".into()),
                        Some("transit".into()),
                        None,
                    ],
                ),
            ],
        )
        .unwrap()
    }

    #[test]
    fn split_partitions_by_declared_kind() {
        let pop = mixed_population();
        let (quant, qual) = split_columns(&pop, &required(&["radius", "method"])).unwrap();
        assert_eq!(names(&quant), ["radius"]);
        assert_eq!(names(&qual), ["method"]);
    }

    #[test]
    fn split_errors_on_missing_required_column() {
        let pop = mixed_population();
        assert!(split_columns(&pop, &required(&["mass"])).is_err());
    }

    #[test]
    fn quantitative_bad_fraction_counts_non_finite() {
        let pop = mixed_population();
        let summary = summarize_column(pop.column("radius").unwrap());
        assert_eq!(summary.total, 4);
        assert_eq!(summary.bad, 2);
        assert_eq!(summary.bad_fraction(), 0.5);
    }

    #[test]
    fn infinities_count_as_bad() {
        let col = Column::quantitative("flux", vec![1.0, f64::INFINITY, f64::NEG_INFINITY]);
        let summary = summarize_column(&col);
        assert_eq!(summary.bad, 2);
    }

    #[test]
    fn categorical_bad_fraction_counts_missing() {
        let pop = mixed_population();
        let summary = summarize_column(pop.column("method").unwrap());
        assert_eq!(summary.bad, 1);
        assert_eq!(summary.bad_fraction(), 0.25);
    }

    #[test]
    fn title_shows_counts_and_percentage() {
        let pop = mixed_population();
        let summary = summarize_column(pop.column("radius").unwrap());
        assert_eq!(summary.title(), "radius lacks 2/4 (50%)");
    }

    #[test]
    fn categorical_bars_are_sorted_counts() {
        let pop = mixed_population();
        let summary = summarize_column(pop.column("method").unwrap());
        assert_eq!(
            summary.bars,
            vec![
                HistogramBar {
                    label: "rv".into(),
                    count: 1
                },
                HistogramBar {
                    label: "transit".into(),
                    count: 2
                },
            ]
        );
    }

    #[test]
    fn quantitative_bins_cover_all_good_values() {
        let col = Column::quantitative("x", (0..100).map(f64::from).collect());
        let summary = summarize_column(&col);
        assert_eq!(summary.bars.len(), 10);
        let total: usize = summary.bars.iter().map(|b| b.count).sum();
        assert_eq!(total, 100);
        // Top edge lands in the last bin, not out of range.
        assert_eq!(summary.bars.last().unwrap().count, 10);
    }

    #[test]
    fn constant_column_gets_a_single_bar() {
        let col = Column::quantitative("x", vec![7.0; 5]);
        let summary = summarize_column(&col);
        assert_eq!(summary.bars.len(), 1);
        assert_eq!(summary.bars[0].count, 5);
    }

    #[test]
    fn select_orders_categorical_before_quantitative() {
        let pop = mixed_population();
        let cols = select_columns(&pop, &required(&["radius", "method"])).unwrap();
        assert_eq!(names(&cols), ["method", "radius"]);
    }

    #[test]
    fn select_drops_categorical_with_too_many_levels() {
        let wide: Vec<Option<String>> = (0..MAX_CATEGORY_LEVELS).map(|i| Some(format!("host-{i}"))).collect();
        let pop = Population::new(
            "wide",
            vec![
                Column::categorical("host", wide),
                Column::quantitative("radius", (0..MAX_CATEGORY_LEVELS).map(|i| i as f64).collect()),
            ],
        )
        .unwrap();

        let cols = select_columns(&pop, &required(&["host", "radius"])).unwrap();
        assert_eq!(names(&cols), ["radius"]);
    }

    #[test]
    fn select_keeps_categorical_just_under_the_limit() {
        let narrow: Vec<Option<String>> =
            (0..MAX_CATEGORY_LEVELS - 1).map(|i| Some(format!("host-{i}"))).collect();
        let pop = Population::new(
            "narrow",
            vec![Column::categorical("host", narrow)],
        )
        .unwrap();

        let cols = select_columns(&pop, &required(&["host"])).unwrap();
        assert_eq!(names(&cols), ["host"]);
    }

    #[test]
    fn plot_histograms_issues_expected_draw_calls() {
        let pop = mixed_population();
        let mut surface = RecordingSurface::new();

        plot_histograms(&pop, &required(&["radius", "method"]), &mut surface).unwrap();

        let layout = surface.layout().unwrap();
        assert_eq!(layout.cols, 3);
        assert_eq!(layout.rows, 1);
        assert_eq!(layout.cell_width, 2.0 * layout.cell_height);

        // Categorical first, then quantitative.
        assert_eq!(surface.xlabels(), ["method", "radius"]);
        assert_eq!(surface.bad_fractions(), [0.25, 0.5]);
        assert_eq!(
            surface.titles(),
            ["method lacks 1/4 (25%)", "radius lacks 2/4 (50%)"]
        );
        assert!(matches!(surface.calls().last(), Some(DrawCall::Finish)));
    }

    #[test]
    fn plot_histograms_grid_rows_grow_with_columns() {
        let cols: Vec<Column> = (0..7)
            .map(|i| Column::quantitative(format!("c{i}"), vec![1.0, 2.0]))
            .collect();
        let req: Vec<String> = (0..7).map(|i| format!("c{i}")).collect();
        let pop = Population::new("many", cols).unwrap();

        let mut surface = RecordingSurface::new();
        plot_histograms(&pop, &req, &mut surface).unwrap();

        assert_eq!(surface.layout().unwrap().rows, 3); // ceil(7/3)
    }

    #[test]
    fn fmt_edge_trims_and_switches_to_scientific() {
        assert_eq!(fmt_edge(1.0), "1");
        assert_eq!(fmt_edge(0.25), "0.25");
        assert_eq!(fmt_edge(0.0), "0");
        assert!(fmt_edge(1.0e-7).contains('e'));
        assert!(fmt_edge(1.0e7).contains('e'));
    }
}
