//! Text rendering of the statistics and frequency distribution tables.

use crate::frequency::FrequencyDistribution;
use crate::statistics::Statistics;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Cell, CellAlignment, Table};
use std::io::{self, Write};

/// One table column: a header, the alignment of its cells and the already formatted cells.
#[derive(Debug, Clone)]
pub struct Column {
    pub header: String,
    pub alignment: CellAlignment,
    pub cells: Vec<String>,
}

impl Column {
    pub fn new(header: &str, alignment: CellAlignment, cells: Vec<String>) -> Self {
        Self {
            header: header.to_owned(),
            alignment,
            cells,
        }
    }
}

pub fn format_number(x: f64) -> String {
    format!("{:.1}", x)
}

/// Lays out `columns` side by side; shorter columns are padded with empty cells.
pub fn render_table(columns: &[Column]) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(columns.iter().map(|c| Cell::new(&c.header)));

    let rows_len = columns.iter().map(|c| c.cells.len()).max().unwrap_or(0);
    for row in 0..rows_len {
        table.add_row(columns.iter().map(|c| {
            Cell::new(c.cells.get(row).map_or("", String::as_str)).set_alignment(c.alignment)
        }));
    }
    table
}

pub fn statistics_table(stats: &Statistics) -> Table {
    let names = [
        "Arithmetic Mean",
        "Geometric Mean",
        "Mode",
        "Median",
        "Sample Standard Deviation",
        "Sample Variance",
    ];
    let values = vec![
        format_number(stats.arithmetic_mean()),
        format_number(stats.geometric_mean()),
        stats.mode().to_string(),
        format_number(stats.median()),
        format_number(stats.sample_stdev()),
        format_number(stats.sample_variance()),
    ];
    render_table(&[
        Column::new(
            "Statistic",
            CellAlignment::Left,
            names.iter().map(|&s| s.to_owned()).collect(),
        ),
        Column::new("Value", CellAlignment::Right, values),
    ])
}

pub fn frequency_table(dist: &FrequencyDistribution) -> Table {
    fn with_total(mut cells: Vec<String>, total: &str) -> Vec<String> {
        cells.push(total.to_owned());
        cells
    }

    let counts = dist.counts().iter().map(|c| c.to_string()).collect();
    let midpoints = dist.midpoints().iter().copied().map(format_number).collect();
    let cumulative_counts = dist
        .cumulative_counts()
        .iter()
        .map(|c| c.to_string())
        .collect();
    let percentages = dist.percentages().iter().copied().map(format_number).collect();
    let cumulative_percentages = dist
        .cumulative_percentages()
        .iter()
        .copied()
        .map(format_number)
        .collect();
    let total_percentage = dist.percentages().iter().sum::<f64>();

    render_table(&[
        Column::new(
            "Values",
            CellAlignment::Left,
            with_total(dist.labels().to_vec(), "Total"),
        ),
        Column::new(
            "Fi",
            CellAlignment::Right,
            with_total(counts, &dist.total().to_string()),
        ),
        Column::new("xi", CellAlignment::Right, with_total(midpoints, "-")),
        Column::new("Fac", CellAlignment::Right, with_total(cumulative_counts, "-")),
        Column::new(
            "Fi (%)",
            CellAlignment::Right,
            with_total(percentages, &format_number(total_percentage)),
        ),
        Column::new(
            "FacR (%)",
            CellAlignment::Right,
            with_total(cumulative_percentages, "-"),
        ),
    ])
}

/// Writes the observations, both tables and the weighted mean.
pub fn write_report<W: Write>(
    mut writer: W,
    values: &[f64],
    stats: &Statistics,
    dist: &FrequencyDistribution,
) -> io::Result<()> {
    let values = values
        .iter()
        .copied()
        .map(format_number)
        .collect::<Vec<_>>();
    writeln!(writer, "Values: [{}]", values.join(", "))?;
    writeln!(writer)?;
    writeln!(writer, "Statistics Table")?;
    writeln!(writer, "{}", statistics_table(stats))?;
    writeln!(writer)?;
    writeln!(writer, "Frequency Distribution Table")?;
    writeln!(writer, "{}", frequency_table(dist))?;
    writeln!(writer)?;
    writeln!(
        writer,
        "Weighted Mean: {}",
        format_number(dist.weighted_mean())
    )?;
    Ok(())
}
