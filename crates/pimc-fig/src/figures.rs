//! The two study figures: the log-log convergence plot and the
//! sampling-distribution panel grid. Both are pure functions from numeric
//! inputs to an SVG document string.

use std::f64::consts::PI;

use pimc_core::{ErrorInfo, PimcError};
use pimc_mc::ExperimentResult;
use pimc_study::{sigma_theory, DistributionPanel};

use crate::svg;

const CONVERGENCE_WIDTH: f64 = 900.0;
const CONVERGENCE_HEIGHT: f64 = 540.0;
const PANEL_WIDTH: f64 = 480.0;
const PANEL_HEIGHT: f64 = 450.0;
const MARGIN: f64 = 48.0;

const BACKGROUND: &str = "#ffffff";
const GRID: &str = "#e5e7eb";
const FRAME: &str = "#374151";
const SERIES: &str = "#3b82f6";
const REFERENCE: &str = "#ef4444";

/// A pixel rectangle together with the data ranges it displays.
struct Frame {
    left: f64,
    top: f64,
    width: f64,
    height: f64,
    x_min: f64,
    x_max: f64,
    y_min: f64,
    y_max: f64,
}

impl Frame {
    fn new(
        left: f64,
        top: f64,
        width: f64,
        height: f64,
        (x_min, x_max): (f64, f64),
        (y_min, y_max): (f64, f64),
    ) -> Result<Frame, PimcError> {
        let finite = [x_min, x_max, y_min, y_max].iter().all(|v| v.is_finite());
        if !finite || x_max <= x_min || y_max <= y_min {
            return Err(PimcError::Figure(
                ErrorInfo::new("degenerate-range", "figure axis range is empty or not finite")
                    .with_context("x", format!("{x_min}..{x_max}"))
                    .with_context("y", format!("{y_min}..{y_max}")),
            ));
        }
        Ok(Frame {
            left,
            top,
            width,
            height,
            x_min,
            x_max,
            y_min,
            y_max,
        })
    }

    fn map_x(&self, v: f64) -> f64 {
        self.left + (v - self.x_min) / (self.x_max - self.x_min) * self.width
    }

    fn map_y(&self, v: f64) -> f64 {
        self.top + (1.0 - (v - self.y_min) / (self.y_max - self.y_min)) * self.height
    }

    fn map(&self, (x, y): (f64, f64)) -> (f64, f64) {
        (self.map_x(x), self.map_y(y))
    }

    fn outline(&self) -> String {
        svg::frame_rect(self.left, self.top, self.width, self.height, FRAME)
    }
}

fn span(values: impl Iterator<Item = f64>) -> (f64, f64) {
    values.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
        (lo.min(v), hi.max(v))
    })
}

fn pad((lo, hi): (f64, f64), fraction: f64) -> (f64, f64) {
    let pad = (hi - lo) * fraction;
    (lo - pad, hi + pad)
}

/// Renders the log-log error-vs-n figure: the swept errors as a marked
/// polyline over the theoretical sigma(n) reference curve.
pub fn render_convergence_svg(rows: &[ExperimentResult]) -> Result<String, PimcError> {
    let empirical: Vec<(f64, f64)> = rows
        .iter()
        .filter(|row| row.error > 0.0)
        .map(|row| ((row.n as f64).log10(), row.error.log10()))
        .collect();
    if empirical.len() < 2 {
        return Err(PimcError::Figure(
            ErrorInfo::new(
                "too-few-points",
                "convergence figure needs at least two positive-error rows",
            )
            .with_context("rows", rows.len().to_string()),
        ));
    }
    let reference: Vec<(f64, f64)> = rows
        .iter()
        .map(|row| ((row.n as f64).log10(), sigma_theory(row.n).log10()))
        .collect();

    let x_range = span(empirical.iter().chain(reference.iter()).map(|p| p.0));
    let y_range = pad(
        span(empirical.iter().chain(reference.iter()).map(|p| p.1)),
        0.05,
    );
    let frame = Frame::new(
        MARGIN,
        MARGIN,
        CONVERGENCE_WIDTH - 2.0 * MARGIN,
        CONVERGENCE_HEIGHT - 2.0 * MARGIN,
        x_range,
        y_range,
    )?;

    let mut body = svg::filled_rect(0.0, 0.0, CONVERGENCE_WIDTH, CONVERGENCE_HEIGHT, BACKGROUND);
    body.push_str(&decade_grid(&frame));
    let curve: Vec<(f64, f64)> = reference.iter().map(|&p| frame.map(p)).collect();
    body.push_str(&svg::polyline(&curve, REFERENCE, 2.0));
    let series: Vec<(f64, f64)> = empirical.iter().map(|&p| frame.map(p)).collect();
    body.push_str(&svg::polyline(&series, SERIES, 2.0));
    for &(x, y) in &series {
        body.push_str(&svg::circle(x, y, 3.0, SERIES));
    }
    body.push_str(&frame.outline());
    Ok(svg::document(CONVERGENCE_WIDTH, CONVERGENCE_HEIGHT, &body))
}

/// Grid lines at every integer log10 decade inside the frame.
fn decade_grid(frame: &Frame) -> String {
    let mut grid = String::new();
    let mut exponent = frame.x_min.ceil() as i64;
    while (exponent as f64) <= frame.x_max {
        let x = frame.map_x(exponent as f64);
        grid.push_str(&svg::line(
            x,
            frame.top,
            x,
            frame.top + frame.height,
            GRID,
            1.0,
        ));
        exponent += 1;
    }
    let mut exponent = frame.y_min.ceil() as i64;
    while (exponent as f64) <= frame.y_max {
        let y = frame.map_y(exponent as f64);
        grid.push_str(&svg::line(
            frame.left,
            y,
            frame.left + frame.width,
            y,
            GRID,
            1.0,
        ));
        exponent += 1;
    }
    grid
}

/// Renders the sampling-distribution grid: one column per sample size, the
/// density histogram with its normal overlay on top and the Q-Q plot with
/// its fit line below.
pub fn render_distributions_svg(panels: &[DistributionPanel]) -> Result<String, PimcError> {
    if panels.is_empty() {
        return Err(PimcError::Figure(ErrorInfo::new(
            "empty-series",
            "distribution figure needs at least one panel",
        )));
    }
    let width = PANEL_WIDTH * panels.len() as f64;
    let height = PANEL_HEIGHT * 2.0;
    let mut body = svg::filled_rect(0.0, 0.0, width, height, BACKGROUND);
    for (column, panel) in panels.iter().enumerate() {
        let x_offset = column as f64 * PANEL_WIDTH;
        body.push_str(&histogram_panel(panel, x_offset, 0.0)?);
        body.push_str(&qq_panel(panel, x_offset, PANEL_HEIGHT)?);
    }
    Ok(svg::document(width, height, &body))
}

fn histogram_panel(
    panel: &DistributionPanel,
    x_offset: f64,
    y_offset: f64,
) -> Result<String, PimcError> {
    let hist = &panel.histogram;
    let x_range = (hist.edges[0], hist.edges[hist.edges.len() - 1]);
    let overlay_peak = panel.overlay.iter().map(|&(_, d)| d).fold(0.0_f64, f64::max);
    let y_range = (0.0, hist.max_density().max(overlay_peak) * 1.05);
    let frame = Frame::new(
        x_offset + MARGIN,
        y_offset + MARGIN,
        PANEL_WIDTH - 2.0 * MARGIN,
        PANEL_HEIGHT - 2.0 * MARGIN,
        x_range,
        y_range,
    )?;

    let mut body = String::new();
    let base = frame.map_y(0.0);
    for (bin, &density) in hist.densities.iter().enumerate() {
        let x0 = frame.map_x(hist.edges[bin]);
        let x1 = frame.map_x(hist.edges[bin + 1]);
        let top = frame.map_y(density);
        body.push_str(&svg::filled_rect(x0, top, x1 - x0, base - top, SERIES));
    }
    if !panel.overlay.is_empty() {
        let curve: Vec<(f64, f64)> = panel.overlay.iter().map(|&p| frame.map(p)).collect();
        body.push_str(&svg::polyline(&curve, REFERENCE, 2.0));
    }
    if frame.x_min < PI && PI < frame.x_max {
        let x = frame.map_x(PI);
        body.push_str(&svg::dashed_line(
            x,
            frame.top,
            x,
            frame.top + frame.height,
            REFERENCE,
            1.0,
        ));
    }
    body.push_str(&frame.outline());
    Ok(body)
}

fn qq_panel(
    panel: &DistributionPanel,
    x_offset: f64,
    y_offset: f64,
) -> Result<String, PimcError> {
    let qq = &panel.qq;
    let x_range = pad(span(qq.theoretical.iter().copied()), 0.05);
    let y_range = pad(span(qq.ordered.iter().copied()), 0.05);
    let frame = Frame::new(
        x_offset + MARGIN,
        y_offset + MARGIN,
        PANEL_WIDTH - 2.0 * MARGIN,
        PANEL_HEIGHT - 2.0 * MARGIN,
        x_range,
        y_range,
    )?;

    let mut body = String::new();
    body.push_str(&svg::line(
        frame.map_x(frame.x_min),
        frame.map_y(qq.fit.at(frame.x_min)),
        frame.map_x(frame.x_max),
        frame.map_y(qq.fit.at(frame.x_max)),
        REFERENCE,
        2.0,
    ));
    for (&t, &o) in qq.theoretical.iter().zip(qq.ordered.iter()) {
        let (x, y) = frame.map((t, o));
        body.push_str(&svg::circle(x, y, 2.5, SERIES));
    }
    body.push_str(&frame.outline());
    Ok(body)
}
