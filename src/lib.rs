#![deny(missing_docs)]
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! ASCII Mandelbrot benchmark kernels
//!
//! The Mandelbrot set is the set of points on the complex plane that
//! stay bounded when repeatedly squared and added back to themselves.
//! Points outside the set run off to infinity, some slowly and some
//! quickly, and the number of rounds it takes them to cross a
//! threshold is the "escape time" used to draw them.  Here the
//! drawing is a grid of printable characters, one per sampled point,
//! with the set itself left blank.
//!
//! This crate also carries a trivial integer arithmetic loop.  Both
//! kernels exist to be timed: they are sequential, deterministic, and
//! produce the same output for the same parameters every time.

extern crate itertools;
extern crate num;
extern crate failure;
#[macro_use]
extern crate log;

pub mod arith;
pub mod error;
pub mod escape;
pub mod planes;
pub mod render;

pub use arith::arithmetic_loop;
pub use error::GridError;
pub use escape::{evaluate, EscapeResult};
pub use planes::{GridParams, PlaneMapper};
pub use render::{count_char, escape_char, render, AsciiRenderer};
