// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The other benchmark: a nested loop doing nothing but integer
//! arithmetic, as a baseline for how fast a language spins.

use std::hint::black_box;

/// Outer loop count of the standard run.
pub const OUTER: u32 = 10_000;
/// Inner loop count of the standard run.
pub const INNER: u32 = 1_000;

/// Runs `z = 2*z + j` for every `j` in `0..inner`, `outer` times
/// over, starting from zero.  Overflow wraps.  The accumulator goes
/// through `black_box` on every step so the optimizer can't fold the
/// loop into a constant.
pub fn arithmetic_loop(outer: u32, inner: u32) -> i32 {
    let mut z: i32 = 0;
    for _ in 0..outer {
        for j in 0..inner {
            z = black_box(z.wrapping_mul(2).wrapping_add(j as i32));
        }
    }
    z
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_loops_leave_zero() {
        assert_eq!(arithmetic_loop(0, 1000), 0);
        assert_eq!(arithmetic_loop(1000, 0), 0);
    }

    #[test]
    fn short_loops_by_hand() {
        assert_eq!(arithmetic_loop(1, 3), 4);
        assert_eq!(arithmetic_loop(2, 3), 36);
    }

    #[test]
    fn overflow_wraps() {
        assert_eq!(arithmetic_loop(3, 40), -41);
        assert_eq!(arithmetic_loop(OUTER, INNER), -1001);
    }
}
