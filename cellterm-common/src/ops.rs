// Copyright (C) 2024-2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use core::fmt;

/// ED (Erase in Display) modes.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum EraseDisplay {
    /// From the cursor to the end of the screen.
    Below,
    /// From the start of the screen to and including the cursor.
    Above,
    /// The whole visible screen.
    Complete,
    /// Drop the storage layer's scrollback; the visible screen is untouched.
    Scrollback,
}

/// EL (Erase in Line) modes.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum EraseLine {
    /// From the cursor to the end of the row.
    Right,
    /// From the start of the row up to (not including) the cursor.
    Left,
    /// The whole row.
    Complete,
}

/// TBC (Tab Clear) modes.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum TabClear {
    /// Clear the stop at the cursor column.
    Current,
    /// Clear every stop.
    All,
    /// Anything else the parser saw; logged and ignored.
    Unknown(usize),
}

impl fmt::Display for EraseDisplay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Below => write!(f, "below"),
            Self::Above => write!(f, "above"),
            Self::Complete => write!(f, "complete"),
            Self::Scrollback => write!(f, "scrollback"),
        }
    }
}

impl fmt::Display for EraseLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Right => write!(f, "right"),
            Self::Left => write!(f, "left"),
            Self::Complete => write!(f, "complete"),
        }
    }
}
