use crate::error::{Result, XyPlotError};

use log::debug;
use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

/// Square matrix of spin angles, row-major
#[derive(Debug, Clone, PartialEq)]
pub struct ScalarField {
    side: usize,
    values: Vec<f64>,
}

impl ScalarField {
    /// Builds a field from rows, checking that they form a non-empty square
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self> {
        let side = rows.len();
        if side == 0 {
            return Err(XyPlotError::Shape("scalar field is empty".to_string()));
        }

        let mut values = Vec::with_capacity(side * side);
        for (r, row) in rows.into_iter().enumerate() {
            if row.len() != side {
                return Err(XyPlotError::Shape(format!(
                    "scalar field row {} has {} values, expected {}",
                    r + 1,
                    row.len(),
                    side
                )));
            }
            values.extend(row);
        }

        Ok(Self { side, values })
    }

    /// Lattice side length L
    pub fn side(&self) -> usize {
        self.side
    }

    pub fn value(&self, row: usize, col: usize) -> f64 {
        self.values[row * self.side + col]
    }

    pub fn rows(&self) -> impl Iterator<Item = &[f64]> {
        self.values.chunks_exact(self.side)
    }

    pub fn min(&self) -> f64 {
        self.values.iter().copied().fold(f64::INFINITY, f64::min)
    }

    pub fn max(&self) -> f64 {
        self.values.iter().copied().fold(f64::NEG_INFINITY, f64::max)
    }
}

/// Reads a whitespace-delimited float matrix from a file
pub fn read_scalar_field<P: AsRef<Path>>(path: P) -> Result<ScalarField> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| XyPlotError::OpenFile {
        path: path.to_path_buf(),
        source,
    })?;
    let field = read_scalar_field_from_reader(file)?;
    debug!("read {}x{} field from {}", field.side, field.side, path.display());
    Ok(field)
}

/// Blank lines are skipped, every other line is one matrix row.
pub fn read_scalar_field_from_reader<R: Read>(reader: R) -> Result<ScalarField> {
    let mut rows = Vec::new();

    for (i, line) in BufReader::new(reader).lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        rows.push(parse_row(&line, i + 1)?);
    }

    ScalarField::from_rows(rows)
}

fn parse_row(line: &str, line_number: usize) -> Result<Vec<f64>> {
    line.split_whitespace()
        .map(|token| {
            token.parse().map_err(|source| XyPlotError::FieldParse {
                line: line_number,
                token: token.to_string(),
                source,
            })
        })
        .collect()
}
