// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The escape-time evaluator.  Take a point on the complex plane and
//! repeatedly square it and add it back to itself, measuring how many
//! rounds it takes before the magnitude passes a threshold.  That
//! count is the "velocity" used to pick a character for the point.

use num::Complex;

/// What happened to a point: how many iterations it survived, and
/// whether it got out.  When `escaped` is false, `count` is the
/// iteration limit.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct EscapeResult {
    /// The iteration on which the orbit escaped, or the limit.
    pub count: usize,
    /// True if the orbit passed the threshold before the limit.
    pub escaped: bool,
}

/// This is our classic iterator function.  The orbit starts at the
/// point itself rather than at zero, and the escape test runs on the
/// freshly computed value before it replaces the old one, so a point
/// that leaves on the first update reports a count of zero.
pub fn evaluate(limit: usize, threshold: f64, c: Complex<f64>) -> EscapeResult {
    let bailout = threshold * threshold;
    let mut z = c;
    for i in 0..limit {
        let next = z * z + c;
        if next.norm_sqr() > bailout {
            return EscapeResult {
                count: i,
                escaped: true,
            };
        }
        z = next;
    }
    EscapeResult {
        count: limit,
        escaped: false,
    }
}
