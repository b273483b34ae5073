// Copyright (C) 2024-2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use cellterm_common::colors::Rgb;

/// Display attributes of a single cell.
///
/// `wrap` marks the last cell of a soft-wrapped line: the logical line
/// continues on the row below. It is set by the print path, never by SGR.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct CellFlags {
    pub bold: bool,
    pub underline: bool,
    pub inverse: bool,
    pub wrap: bool,
}

/// One cell of the grid.
///
/// `ch == '\0'` means empty/erased. `fg`/`bg` of `None` mean the renderer's
/// default color for that plane.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Cell {
    pub ch: char,
    pub fg: Option<Rgb>,
    pub bg: Option<Rgb>,
    pub flags: CellFlags,
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            ch: '\0',
            fg: None,
            bg: None,
            flags: CellFlags::default(),
        }
    }
}

impl Cell {
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.ch == '\0'
    }

    /// Copy of this cell with the character erased. Used when an operation
    /// paints with the pen without writing a glyph.
    #[must_use]
    pub const fn blank(&self) -> Self {
        Self { ch: '\0', ..*self }
    }
}
