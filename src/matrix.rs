// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Dense row-major matrix shared by the matrix representations

use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Matrix {
    rows: usize,
    cols: usize,
    data: Vec<f64>,
}

impl Matrix {
    pub(crate) fn zeros(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            data: vec![0.0; rows * cols],
        }
    }

    pub(crate) fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Caller checks bounds
    pub(crate) fn get(&self, row: usize, col: usize) -> f64 {
        self.data[row * self.cols + col]
    }

    pub(crate) fn set(&mut self, row: usize, col: usize, value: f64) {
        self.data[row * self.cols + col] = value;
    }

    pub(crate) fn row(&self, row: usize) -> &[f64] {
        &self.data[row * self.cols..(row + 1) * self.cols]
    }

    pub(crate) fn column(&self, col: usize) -> Vec<f64> {
        (0..self.rows).map(|r| self.get(r, col)).collect()
    }
}

/// Split a value into its integer part and its fractional part (from the dot).
///
/// Whole numbers print as `1.` so every cell has a dot to align on.
fn cell_parts(value: f64) -> (String, String) {
    // fold -0.0 into 0.0
    let value = if value == 0.0 { 0.0 } else { value };
    let text = if value.is_finite() && value.fract() == 0.0 {
        format!("{value:.0}.")
    } else {
        format!("{value}")
    };
    match text.find('.') {
        Some(dot) => (text[..dot].to_string(), text[dot..].to_string()),
        None => (text, String::new()),
    }
}

/// NumPy-style layout: `[[0. 1.]\n [0. 0.]]`, integer parts right-aligned,
/// fractional parts left-aligned.
impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.rows == 0 {
            return f.write_str("[]");
        }

        let cells: Vec<(String, String)> = self.data.iter().copied().map(cell_parts).collect();
        let int_width = cells.iter().map(|(i, _)| i.len()).max().unwrap_or(0);
        let frac_width = cells.iter().map(|(_, d)| d.len()).max().unwrap_or(0);

        f.write_str("[")?;
        for row in 0..self.rows {
            if row > 0 {
                f.write_str("\n ")?;
            }
            f.write_str("[")?;
            for col in 0..self.cols {
                if col > 0 {
                    f.write_str(" ")?;
                }
                let (int, frac) = &cells[row * self.cols + col];
                write!(f, "{int:>int_width$}{frac:<frac_width$}")?;
            }
            f.write_str("]")?;
        }
        f.write_str("]")
    }
}
