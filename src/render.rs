// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! ASCII renderer
//!
//! Walks a grid of cells row by row, asks the escape-time evaluator
//! about the point each cell samples, and turns the answer into a
//! printable character.  Points that never escape are blank; points
//! that do cycle through the 94 printable ASCII characters by escape
//! count.

use itertools::iproduct;
use num::Complex;

use crate::error::GridError;
use crate::escape::{evaluate, EscapeResult};
use crate::planes::{Cell, GridParams, PlaneMapper};

const BLANK: u8 = 32;
const PRINTABLE: usize = 94;

/// The character for a point that escaped after `count` iterations.
pub fn count_char(count: usize) -> char {
    (BLANK + (count % PRINTABLE) as u8) as char
}

/// The character for an evaluator result.  Escape count is ignored
/// for points that never escaped.
pub fn escape_char(result: &EscapeResult) -> char {
    if result.escaped {
        count_char(result.count)
    } else {
        BLANK as char
    }
}

/// Holds a validated set of grid parameters.  Once built, it cannot
/// be changed; every call recomputes the whole grid from scratch.
#[derive(Debug)]
pub struct AsciiRenderer {
    plane: PlaneMapper,
    limit: usize,
    threshold: f64,
}

impl AsciiRenderer {
    /// Requires the iteration limit, the escape threshold, the
    /// left-lower and right-upper corners of the complex window, and
    /// the number of columns and rows to sample it with.
    pub fn new(params: &GridParams) -> Result<Self, GridError> {
        params.validate()?;
        let plane = PlaneMapper::new(
            params.stepsx,
            params.stepsy,
            params.leftlower,
            params.rightupper,
        )?;
        Ok(AsciiRenderer {
            plane,
            limit: params.iterations,
            threshold: params.threshold,
        })
    }

    /// Columns and rows of the output.
    pub fn dimensions(&self) -> (usize, usize) {
        (self.plane.integral_plane.0, self.plane.integral_plane.1)
    }

    fn cells<'a>(&'a self) -> impl Iterator<Item = EscapeResult> + 'a {
        iproduct!(0..self.plane.integral_plane.1, 0..self.plane.integral_plane.0).map(
            move |(row, column)| {
                let c: Complex<f64> = self.plane.cell_to_point(&Cell(column, row));
                evaluate(self.limit, self.threshold, c)
            },
        )
    }

    /// Every evaluator result, row-major from the top row.
    pub fn escape_grid(&self) -> Vec<EscapeResult> {
        let mut grid = Vec::with_capacity(self.plane.len());
        grid.extend(self.cells());
        grid
    }

    /// The rendered grid, one string per row.
    pub fn lines(&self) -> Vec<String> {
        let (width, height) = self.dimensions();
        debug!(
            "rendering {}x{} cells, limit {}, threshold {}",
            width, height, self.limit, self.threshold
        );
        let mut lines = Vec::with_capacity(height);
        let mut line = String::with_capacity(width);
        for result in self.cells() {
            line.push(escape_char(&result));
            if line.len() == width {
                lines.push(line);
                line = String::with_capacity(width);
            }
        }
        lines
    }

    /// Sum of the character codes of every cell.  Gives a benchmark
    /// run something to produce without printing the grid.
    pub fn checksum(&self) -> u64 {
        self.cells()
            .fold(0, |sum, result| sum + u64::from(escape_char(&result) as u8))
    }
}

/// Renders the grid described by the raw parameters in one call.
#[allow(clippy::too_many_arguments)]
pub fn render(
    iterations: usize,
    threshold: f64,
    xmin: f64,
    xmax: f64,
    stepsx: usize,
    ymin: f64,
    ymax: f64,
    stepsy: usize,
) -> Result<Vec<String>, GridError> {
    let params = GridParams {
        iterations,
        threshold,
        leftlower: Complex::new(xmin, ymin),
        rightupper: Complex::new(xmax, ymax),
        stepsx,
        stepsy,
    };
    Ok(AsciiRenderer::new(&params)?.lines())
}
