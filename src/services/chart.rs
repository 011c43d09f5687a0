//! Line-and-marker chart of a trajectory.
//!
//! Rendering goes through [`ChartRenderer`] so the command layer does not care
//! whether a chart is written to disk, skipped, or captured in a test.

use crate::domain::models::{ChartConfig, Trajectory};
use crate::services::stats::max_altitude;
use plotters::prelude::*;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

pub trait ChartRenderer {
    /// Renders `trajectory` under `title`, returning where the chart went, if anywhere.
    fn render(&self, trajectory: &Trajectory, title: &str) -> anyhow::Result<Option<PathBuf>>;
}

pub fn chart_title(start: u64) -> String {
    "Syracuse".to_string() + " (n = " + &start.to_string() + " )"
}

/// Writes an SVG chart and optionally opens it in the platform viewer.
pub struct SvgChart {
    pub config: ChartConfig,
    /// Explicit file path; otherwise `<output_dir>/syracuse_n<start>.svg`.
    pub output: Option<PathBuf>,
}

impl SvgChart {
    pub fn chart_path(&self, start: u64) -> PathBuf {
        if let Some(path) = &self.output {
            return path.clone();
        }
        self.config
            .output_dir
            .clone()
            .unwrap_or_else(std::env::temp_dir)
            .join(format!("syracuse_n{}.svg", start))
    }
}

impl ChartRenderer for SvgChart {
    fn render(&self, trajectory: &Trajectory, title: &str) -> anyhow::Result<Option<PathBuf>> {
        let svg = render_svg(trajectory.values(), title, &self.config)?;
        let path = self.chart_path(trajectory.start());
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&path, svg)?;
        tracing::info!(path = %path.display(), "wrote chart");

        if self.config.show {
            if let Err(e) = open_in_viewer(&path) {
                tracing::warn!(path = %path.display(), error = %e, "could not open chart viewer");
            }
        }
        Ok(Some(path))
    }
}

/// Used for `--no-plot`.
pub struct NoChart;

impl ChartRenderer for NoChart {
    fn render(&self, _trajectory: &Trajectory, _title: &str) -> anyhow::Result<Option<PathBuf>> {
        Ok(None)
    }
}

/// Renders `values` against their indices as an SVG document.
pub fn render_svg(values: &[u64], title: &str, config: &ChartConfig) -> anyhow::Result<String> {
    anyhow::ensure!(!values.is_empty(), "cannot chart an empty trajectory");

    // y runs on f64: integer tick generation overflows for maxima near u64::MAX
    let points: Vec<(u64, f64)> = values
        .iter()
        .enumerate()
        .map(|(i, &v)| (i as u64, v as f64))
        .collect();
    let x_max = (values.len() as u64 - 1).max(1);
    let y_max = max_altitude(values) as f64;
    let y_top = y_max * 1.05 + 1.0;

    let mut svg = String::new();
    {
        let root = SVGBackend::with_string(&mut svg, (config.width, config.height))
            .into_drawing_area();
        root.fill(&WHITE)?;

        let mut chart = ChartBuilder::on(&root)
            .caption(title, ("sans-serif", 24))
            .margin(20)
            .x_label_area_size(40)
            .y_label_area_size(60)
            .build_cartesian_2d(0u64..x_max, 0f64..y_top)?;

        chart.configure_mesh().x_desc("x").y_desc("y").draw()?;

        chart.draw_series(LineSeries::new(points.iter().copied(), &BLUE))?;
        chart.draw_series(
            points
                .iter()
                .map(|&p| Circle::new(p, config.marker_size, BLUE.filled())),
        )?;

        root.present()?;
    }
    Ok(svg)
}

fn open_in_viewer(path: &Path) -> std::io::Result<()> {
    let mut cmd = if cfg!(target_os = "macos") {
        Command::new("open")
    } else if cfg!(target_os = "windows") {
        let mut c = Command::new("cmd");
        c.args(["/C", "start", ""]);
        c
    } else {
        Command::new("xdg-open")
    };
    cmd.arg(path)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()?;
    Ok(())
}
