// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Contains the GridParams struct, which describes everything a
//! render needs to know, and the PlaneMapper, which describes a
//! relationship between a grid of cells with an origin at 0,0 and a
//! window on the complex plane defined by its leftlower and
//! rightupper corners.
use num::Complex;

use crate::error::GridError;

/// Largest number of columns or rows along either axis.
pub const MAX_STEPS: usize = 65_535;
/// Largest number of cells in a whole grid.
pub const MAX_CELLS: usize = 1 << 26;

/// Describes the number of columns and rows of the character grid.
/// The grid is assumed to start at 0,0.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct IntegralPlane(pub usize, pub usize);

/// Describes the lower-left corner and upper-right corner of the
/// Complex plane, treating the real part of each value as the
/// x-component and the imaginary part of each value as the
/// y-component.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ComplexPlane(pub Complex<f64>, pub Complex<f64>);

/// Describes the column, row of a cell in the grid.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Cell(pub usize, pub usize);

/// The full set of knobs for a render.  The defaults are the
/// constants the benchmark runs with.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct GridParams {
    /// The maximum number of iterations per point.
    pub iterations: usize,
    /// The magnitude beyond which a point is considered escaped.
    pub threshold: f64,
    /// (xmin, ymin)
    pub leftlower: Complex<f64>,
    /// (xmax, ymax)
    pub rightupper: Complex<f64>,
    /// Number of columns, mapped to the real axis.
    pub stepsx: usize,
    /// Number of rows, mapped to the imaginary axis.
    pub stepsy: usize,
}

impl Default for GridParams {
    fn default() -> Self {
        GridParams {
            iterations: 1000,
            threshold: 1000.0,
            leftlower: Complex::new(-2.1, -1.2),
            rightupper: Complex::new(1.0, 1.2),
            stepsx: 200,
            stepsy: 100,
        }
    }
}

impl GridParams {
    /// Checks every parameter, returning the first one found to be
    /// unusable.
    pub fn validate(&self) -> Result<(), GridError> {
        if self.iterations == 0 {
            return Err(GridError::invalid("iterations", "must be greater than zero"));
        }
        if !self.threshold.is_finite() || self.threshold <= 0.0 {
            return Err(GridError::invalid(
                "threshold",
                "must be a finite number greater than zero",
            ));
        }
        check_steps(self.stepsx, self.stepsy)?;
        let corners = [self.leftlower, self.rightupper];
        if corners.iter().any(|c| !c.re.is_finite() || !c.im.is_finite()) {
            return Err(GridError::invalid(
                "bounds",
                "plane corners must be finite numbers",
            ));
        }
        Ok(())
    }
}

// Every grid allocation is sized from these two numbers, so they are
// bounded before anything is built.
fn check_steps(stepsx: usize, stepsy: usize) -> Result<(), GridError> {
    if stepsx == 0 {
        return Err(GridError::invalid("stepsx", "must be greater than zero"));
    }
    if stepsy == 0 {
        return Err(GridError::invalid("stepsy", "must be greater than zero"));
    }
    if stepsx > MAX_STEPS || stepsy > MAX_STEPS {
        return Err(GridError::invalid(
            "size",
            &format!("each axis must have at most {} steps", MAX_STEPS),
        ));
    }
    match stepsx.checked_mul(stepsy) {
        Some(cells) if cells <= MAX_CELLS => Ok(()),
        _ => Err(GridError::invalid(
            "size",
            &format!("grid must have at most {} cells", MAX_CELLS),
        )),
    }
}

/// Contains the definitions of two planes: the integral grid of
/// character cells, and the complex window being sampled.  Maps cells
/// from one to points in the other.
#[derive(Debug)]
pub struct PlaneMapper {
    /// The column and row count of the grid.
    pub integral_plane: IntegralPlane,
    /// The two coordinates defining the complex window, left-lower
    /// and right-upper
    pub complex_plane: ComplexPlane,
    // Width and height of the complex window.
    span: (f64, f64),
}

impl PlaneMapper {
    /// Constructor.  Takes the grid size and the two points
    /// describing the complex window.
    pub fn new(
        width: usize,
        height: usize,
        leftlower: Complex<f64>,
        rightupper: Complex<f64>,
    ) -> Result<PlaneMapper, GridError> {
        check_steps(width, height)?;

        Ok(PlaneMapper {
            integral_plane: IntegralPlane(width, height),
            complex_plane: ComplexPlane(leftlower, rightupper),
            span: (rightupper.re - leftlower.re, rightupper.im - leftlower.im),
        })
    }

    /// The total number of cells in the grid.
    pub fn len(&self) -> usize {
        self.integral_plane.0 * self.integral_plane.1
    }

    /// Describes that the grid is of a size.
    pub fn is_empty(&self) -> bool {
        self.integral_plane.0 == 0 || self.integral_plane.1 == 0
    }

    /// Given a cell of the grid, find the point on the complex plane
    /// it samples.  The cell's left-lower corner is used, so column
    /// `width` would land on the right edge of the window but is never
    /// asked for.
    pub fn cell_to_point(&self, cell: &Cell) -> Complex<f64> {
        let origin = self.complex_plane.0;
        // Keep this operation order; the golden grid depends on it.
        Complex::new(
            origin.re + (cell.0 as f64) * self.span.0 / (self.integral_plane.0 as f64),
            origin.im + (cell.1 as f64) * self.span.1 / (self.integral_plane.1 as f64),
        )
    }
}
