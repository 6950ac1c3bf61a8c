//! Contour plot of an objective with optimizer trajectories overlaid.
//!
//! The surface is drawn over the plane spanned by the first two
//! coordinates; any further coordinates are held at the center of their
//! bounds. Rendering goes to SVG.

use crate::error::{Error, Result};
use crate::objective::Objective;
use crate::path::Path;
use crate::space::Bounds;
use plotters::prelude::*;
use std::fmt::Display;

const PALETTE: [RGBColor; 6] = [RED, GREEN, BLUE, MAGENTA, CYAN, BLACK];

/// Plot appearance.
#[derive(Debug, Clone)]
pub struct PlotOptions {
    pub title: String,
    /// Image size in pixels.
    pub width: u32,
    pub height: u32,
    /// Grid points per axis.
    pub resolution: usize,
    /// Number of contour bands.
    pub levels: usize,
}

impl Default for PlotOptions {
    fn default() -> Self {
        Self {
            title: "Comparison of optimization paths".to_string(),
            width: 1000,
            height: 800,
            resolution: 100,
            levels: 30,
        }
    }
}

impl PlotOptions {
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn with_resolution(mut self, n: usize) -> Self {
        self.resolution = n;
        self
    }

    pub fn with_levels(mut self, n: usize) -> Self {
        self.levels = n;
        self
    }
}

/// One grid cell and the contour band its center falls into.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cell {
    pub x: (f64, f64),
    pub y: (f64, f64),
    pub level: usize,
}

/// Objective sampled on a regular grid over the first two dimensions.
#[derive(Debug, Clone)]
pub struct ContourGrid {
    pub cells: Vec<Cell>,
    pub min: f64,
    pub max: f64,
}

impl ContourGrid {
    pub fn sample<O>(
        objective: &O,
        bounds: &Bounds,
        resolution: usize,
        levels: usize,
    ) -> Result<Self>
    where
        O: Objective + ?Sized,
    {
        check_plane(bounds)?;
        if resolution == 0 {
            return Err(Error::invalid("resolution", "must be at least 1"));
        }
        if levels == 0 {
            return Err(Error::invalid("levels", "must be at least 1"));
        }

        let (x0, x1) = bounds.ranges()[0];
        let (y0, y1) = bounds.ranges()[1];
        let dx = (x1 - x0) / resolution as f64;
        let dy = (y1 - y0) / resolution as f64;
        let mut point = bounds.center();

        let mut raw = Vec::with_capacity(resolution * resolution);
        for i in 0..resolution {
            for j in 0..resolution {
                let cx = x0 + i as f64 * dx;
                let cy = y0 + j as f64 * dy;
                point[0] = cx + 0.5 * dx;
                point[1] = cy + 0.5 * dy;
                raw.push(((cx, cx + dx), (cy, cy + dy), objective.evaluate(&point)));
            }
        }

        let min = raw.iter().map(|c| c.2).fold(f64::INFINITY, f64::min);
        let max = raw.iter().map(|c| c.2).fold(f64::NEG_INFINITY, f64::max);
        let span = max - min;

        let cells = raw
            .into_iter()
            .map(|(x, y, v)| {
                let level = if span > 0.0 {
                    (((v - min) / span * levels as f64) as usize).min(levels - 1)
                } else {
                    0
                };
                Cell { x, y, level }
            })
            .collect();

        Ok(Self { cells, min, max })
    }
}

/// Renders the objective surface and the labelled paths to an SVG file.
pub fn render_paths<O>(
    objective: &O,
    bounds: &Bounds,
    paths: &[(&str, &Path)],
    options: &PlotOptions,
    output: &std::path::Path,
) -> Result<()>
where
    O: Objective + ?Sized,
{
    let grid = ContourGrid::sample(objective, bounds, options.resolution, options.levels)?;
    let mut projected = Vec::with_capacity(paths.len());
    for &(label, path) in paths {
        let dim = path.first().0.len();
        if dim != bounds.dim() {
            return Err(Error::DimensionMismatch {
                expected: bounds.dim(),
                actual: dim,
            });
        }
        projected.push((label, path.project(0, 1)?));
    }

    let (x0, x1) = bounds.ranges()[0];
    let (y0, y1) = bounds.ranges()[1];

    let root = SVGBackend::new(output, (options.width, options.height)).into_drawing_area();
    root.fill(&WHITE).map_err(render_err)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(&options.title, ("sans-serif", 24))
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(50)
        .build_cartesian_2d(x0..x1, y0..y1)
        .map_err(render_err)?;

    chart
        .configure_mesh()
        .x_desc("x1")
        .y_desc("x2")
        .draw()
        .map_err(render_err)?;

    chart
        .draw_series(grid.cells.iter().map(|cell| {
            Rectangle::new(
                [(cell.x.0, cell.y.0), (cell.x.1, cell.y.1)],
                band_color(cell.level, options.levels).filled(),
            )
        }))
        .map_err(render_err)?;

    for (i, (label, points)) in projected.iter().enumerate() {
        let color = PALETTE[i % PALETTE.len()];
        chart
            .draw_series(LineSeries::new(points.iter().copied(), color.stroke_width(2)))
            .map_err(render_err)?
            .label(*label)
            .legend(move |(x, y)| {
                PathElement::new(vec![(x, y), (x + 20, y)], color.stroke_width(2))
            });
        chart
            .draw_series(points.iter().map(|&p| Circle::new(p, 3, color.filled())))
            .map_err(render_err)?;
    }

    chart
        .configure_series_labels()
        .background_style(WHITE.mix(0.8))
        .border_style(&BLACK)
        .draw()
        .map_err(render_err)?;

    root.present().map_err(render_err)?;
    tracing::debug!("Wrote plot with {} paths to {}", paths.len(), output.display());
    Ok(())
}

fn check_plane(bounds: &Bounds) -> Result<()> {
    if bounds.dim() < 2 {
        return Err(Error::invalid(
            "bounds",
            format!("plotting needs at least 2 dimensions, got {}", bounds.dim()),
        ));
    }
    for (i, &(lo, hi)) in bounds.ranges()[..2].iter().enumerate() {
        if lo >= hi {
            return Err(Error::invalid(
                "bounds",
                format!("plotted dimension {i} has an empty range [{lo}, {hi}]"),
            ));
        }
    }
    Ok(())
}

/// Dark purple for the lowest band through to pale yellow for the highest.
fn band_color(level: usize, levels: usize) -> HSLColor {
    let t = if levels > 1 {
        level as f64 / (levels - 1) as f64
    } else {
        0.0
    };
    HSLColor(0.75 - 0.6 * t, 0.6, 0.3 + 0.5 * t)
}

fn render_err<E: Display>(e: E) -> Error {
    Error::Render(e.to_string())
}
