//! Frequency polygon rendered as a standalone SVG document.

use crate::frequency::FrequencyDistribution;
use crate::report::format_number;
use std::fmt;
use std::path::Path;

const WIDTH: f64 = 640.0;
const HEIGHT: f64 = 480.0;
const MARGIN_LEFT: f64 = 64.0;
const MARGIN_RIGHT: f64 = 24.0;
const MARGIN_TOP: f64 = 48.0;
const MARGIN_BOTTOM: f64 = 56.0;
const Y_TICKS: f64 = 5.0;

/// Polygon through the bin midpoints, closed by a zero-count point one bin width beyond each end.
#[derive(Debug, Clone, PartialEq)]
pub struct FrequencyPolygon {
    xs: Vec<f64>,
    ys: Vec<f64>,
}

impl FrequencyPolygon {
    pub fn from_distribution(dist: &FrequencyDistribution) -> Self {
        let h = dist.bin_width();
        let mids = dist.midpoints();
        let first = mids.first().map_or(0.0, |&m| m - h);
        let last = mids.last().map_or(0.0, |&m| m + h);

        let xs = std::iter::once(first)
            .chain(mids.iter().copied())
            .chain(std::iter::once(last))
            .collect();
        let ys = std::iter::once(0.0)
            .chain(dist.counts().iter().map(|&c| c as f64))
            .chain(std::iter::once(0.0))
            .collect();
        Self { xs, ys }
    }

    pub fn xs(&self) -> &[f64] {
        &self.xs
    }

    pub fn ys(&self) -> &[f64] {
        &self.ys
    }

    /// Horizontal axis range, padded by 5% of the data span on each side.
    pub fn x_bounds(&self) -> (f64, f64) {
        let (min, max) = min_max(&self.xs);
        let pad = (max - min) * 0.05;
        (min - pad, max + pad)
    }

    /// Vertical axis range, from zero to 10% above the highest count.
    pub fn y_bounds(&self) -> (f64, f64) {
        let (_, max) = min_max(&self.ys);
        (0.0, (max * 1.1).max(1.0))
    }

    /// Writes the SVG document produced by the `Display` implementation.
    pub fn write_svg<P: AsRef<Path>>(&self, path: P) -> std::io::Result<()> {
        std::fs::write(path, self.to_string())
    }
}

impl fmt::Display for FrequencyPolygon {
    fn fmt(&self, out: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (x0, x1) = self.x_bounds();
        let (y0, y1) = self.y_bounds();
        let plot_w = WIDTH - MARGIN_LEFT - MARGIN_RIGHT;
        let plot_h = HEIGHT - MARGIN_TOP - MARGIN_BOTTOM;
        let px = |x: f64| MARGIN_LEFT + (x - x0) / (x1 - x0) * plot_w;
        let py = |y: f64| MARGIN_TOP + plot_h - (y - y0) / (y1 - y0) * plot_h;

        writeln!(
            out,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}" font-family="sans-serif" font-size="12">"#,
            w = WIDTH,
            h = HEIGHT
        )?;
        writeln!(
            out,
            r#"<rect width="{}" height="{}" fill="white"/>"#,
            WIDTH, HEIGHT
        )?;
        writeln!(
            out,
            r#"<text x="{}" y="{}" text-anchor="middle" font-size="16">Frequency Polygon</text>"#,
            WIDTH / 2.0,
            MARGIN_TOP / 2.0
        )?;

        let step = (y1 / Y_TICKS).ceil().max(1.0);
        let mut tick = 0.0;
        while tick <= y1 {
            let y = py(tick);
            writeln!(
                out,
                r##"<line class="grid" x1="{:.2}" y1="{:.2}" x2="{:.2}" y2="{:.2}" stroke="#dddddd"/>"##,
                MARGIN_LEFT,
                y,
                WIDTH - MARGIN_RIGHT,
                y
            )?;
            writeln!(
                out,
                r#"<text x="{:.2}" y="{:.2}" text-anchor="end">{}</text>"#,
                MARGIN_LEFT - 6.0,
                y + 4.0,
                tick
            )?;
            tick += step;
        }

        for &x in &self.xs {
            writeln!(
                out,
                r#"<text x="{:.2}" y="{:.2}" text-anchor="middle">{}</text>"#,
                px(x),
                HEIGHT - MARGIN_BOTTOM + 18.0,
                format_number(x)
            )?;
        }
        writeln!(
            out,
            r#"<path d="M {l} {t} V {b} H {r}" fill="none" stroke="black"/>"#,
            l = MARGIN_LEFT,
            t = MARGIN_TOP,
            b = HEIGHT - MARGIN_BOTTOM,
            r = WIDTH - MARGIN_RIGHT
        )?;
        writeln!(
            out,
            r#"<text x="{:.2}" y="{:.2}" text-anchor="middle">Values</text>"#,
            MARGIN_LEFT + plot_w / 2.0,
            HEIGHT - 12.0
        )?;
        writeln!(
            out,
            r#"<text x="16" y="{y:.2}" text-anchor="middle" transform="rotate(-90 16 {y:.2})">Frequency</text>"#,
            y = MARGIN_TOP + plot_h / 2.0
        )?;

        let points = self
            .xs
            .iter()
            .zip(self.ys.iter())
            .map(|(&x, &y)| format!("{:.2},{:.2}", px(x), py(y)))
            .collect::<Vec<_>>();
        writeln!(
            out,
            r##"<polyline points="{}" fill="none" stroke="#1f77b4" stroke-width="2"/>"##,
            points.join(" ")
        )?;
        for (&x, &y) in self.xs.iter().zip(self.ys.iter()) {
            writeln!(
                out,
                r##"<circle cx="{:.2}" cy="{:.2}" r="4" fill="#1f77b4"/>"##,
                px(x),
                py(y)
            )?;
        }
        writeln!(out, "</svg>")
    }
}

fn min_max(xs: &[f64]) -> (f64, f64) {
    xs.iter()
        .fold((std::f64::INFINITY, std::f64::NEG_INFINITY), |(lo, hi), &x| {
            (lo.min(x), hi.max(x))
        })
}
