// Copyright (C) 2024-2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use thiserror::Error;

use crate::attribute::Attribute;

/// Errors the engine surfaces to its caller.
///
/// Coordinate problems never appear here: out-of-range rows and columns are
/// clamped at the operation boundary, so there is no "cursor out of bounds"
/// error visible to the caller.
#[derive(Debug, Error, Eq, PartialEq, Clone)]
pub enum TerminalError {
    #[error("Unsupported SGR attribute: {0:?}")]
    UnsupportedAttribute(Attribute),
}
