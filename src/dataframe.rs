use crate::config::SessionConfig;
use anyhow::{Result, bail};
use std::{
    collections::HashSet,
    fmt,
    io::{self, Write},
};

const MIN_COL_WIDTH: usize = 3;

/// A single cell of a [`DataFrame`].
#[derive(Debug, PartialEq, Clone)]
pub enum Value {
    Long(i64),
    Double(f64),
    Str(String),
    Null,
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Long(val) => write!(f, "{val}"),
            Value::Double(val) => write!(f, "{val}"),
            Value::Str(val) => write!(f, "{val}"),
            Value::Null => write!(f, "null"),
        }
    }
}

impl From<i64> for Value {
    fn from(val: i64) -> Self {
        Value::Long(val)
    }
}

impl From<f64> for Value {
    fn from(val: f64) -> Self {
        Value::Double(val)
    }
}

impl From<&str> for Value {
    fn from(val: &str) -> Self {
        Value::Str(val.to_string())
    }
}

/// A fully materialized table: named columns and rows of [`Value`]s.
#[derive(Debug, PartialEq, Clone)]
pub struct DataFrame {
    columns: Vec<String>,
    rows: Vec<Vec<Value>>,
}

impl DataFrame {
    /// Build a frame, checking that the column names are unique and that
    /// every row has one value per column.
    pub fn new(columns: Vec<String>, rows: Vec<Vec<Value>>) -> Result<Self> {
        if columns.is_empty() {
            bail!("frame must have at least one column");
        }
        let mut seen = HashSet::new();
        for name in &columns {
            if !seen.insert(name.as_str()) {
                bail!("duplicate column name {name:?}");
            }
        }
        let n_cols = columns.len();
        for (i_row, row) in rows.iter().enumerate() {
            if row.len() != n_cols {
                bail!(
                    "row {i_row} must have {n_cols} values, but has {}",
                    row.len()
                );
            }
        }
        Ok(Self { columns, rows })
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn count(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn collect(&self) -> &[Vec<Value>] {
        &self.rows
    }

    /// Print the table to stdout with the default layout (20 rows, cells cut
    /// at 20 characters). Use [`DataFrame::write_show`] for other settings.
    pub fn show(&self) -> io::Result<()> {
        let defaults = SessionConfig::default();
        self.write_show(&mut io::stdout().lock(), defaults.show_rows, defaults.truncate)
    }

    /// Write [`DataFrame::show_string`] followed by an empty line.
    pub fn write_show<W: Write>(
        &self,
        out: &mut W,
        n_rows: usize,
        truncate: usize,
    ) -> io::Result<()> {
        writeln!(out, "{}", self.show_string(n_rows, truncate))
    }

    /// Render the first `n_rows` rows as an ASCII table.
    ///
    /// With `truncate > 0` long cells are cut to `truncate` characters and
    /// everything is right-aligned; with `truncate == 0` cells are kept whole
    /// and left-aligned.
    pub fn show_string(&self, n_rows: usize, truncate: usize) -> String {
        let shown = &self.rows[..n_rows.min(self.rows.len())];

        let mut cells: Vec<Vec<String>> = Vec::with_capacity(shown.len() + 1);
        cells.push(self.columns.clone());
        for row in shown {
            cells.push(row.iter().map(Value::to_string).collect());
        }
        for cell in cells.iter_mut().flatten() {
            *cell = truncate_cell(cell, truncate);
        }

        let mut col_widths = vec![MIN_COL_WIDTH; self.columns.len()];
        for row in &cells {
            for (width, cell) in col_widths.iter_mut().zip(row) {
                *width = (*width).max(cell.chars().count());
            }
        }

        let sep: String = col_widths
            .iter()
            .map(|&width| "-".repeat(width))
            .fold(String::from("+"), |acc, dashes| acc + &dashes + "+")
            + "\n";

        let render_row = |row: &[String]| {
            let padded: Vec<String> = row
                .iter()
                .zip(&col_widths)
                .map(|(cell, &width)| {
                    if truncate > 0 {
                        format!("{cell:>width$}")
                    } else {
                        format!("{cell:<width$}")
                    }
                })
                .collect();
            format!("|{}|\n", padded.join("|"))
        };

        let mut out = String::new();
        out.push_str(&sep);
        out.push_str(&render_row(&cells[0]));
        out.push_str(&sep);
        for row in &cells[1..] {
            out.push_str(&render_row(row));
        }
        out.push_str(&sep);

        if self.rows.len() > n_rows {
            let noun = if n_rows == 1 { "row" } else { "rows" };
            out.push_str(&format!("only showing top {n_rows} {noun}\n"));
        }

        out
    }
}

fn truncate_cell(cell: &str, truncate: usize) -> String {
    if truncate == 0 || cell.chars().count() <= truncate {
        return cell.to_string();
    }
    if truncate < 4 {
        cell.chars().take(truncate).collect()
    } else {
        cell.chars().take(truncate - 3).collect::<String>() + "..."
    }
}
