// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The one thing that can go wrong before rendering starts: a grid
//! described with parameters that make no sense.

use failure::Fail;

/// Errors raised while building a renderer.
#[derive(Debug, Fail, Clone, PartialEq)]
pub enum GridError {
    /// A grid parameter was out of its allowed range.
    #[fail(display = "invalid parameter `{}`: {}", name, reason)]
    InvalidParameter {
        /// Name of the offending parameter.
        name: &'static str,
        /// What was wrong with it.
        reason: String,
    },
}

impl GridError {
    pub(crate) fn invalid(name: &'static str, reason: &str) -> Self {
        GridError::InvalidParameter {
            name,
            reason: reason.to_string(),
        }
    }
}
