// Copyright (C) 2024-2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use conv2::ValueInto;
use std::fmt;

/// A resolved palette color.
///
/// Cells carry `Option<Rgb>`; `None` means "use the renderer's default for
/// this plane" (foreground or background).
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({}, {}, {})", self.r, self.g, self.b)
    }
}

/// The 16 base ANSI colors (xterm defaults), indices 0-7 normal, 8-15 bright.
const ANSI_TABLE: [Rgb; 16] = [
    Rgb::new(0, 0, 0),       // black
    Rgb::new(205, 0, 0),     // red
    Rgb::new(0, 205, 0),     // green
    Rgb::new(205, 205, 0),   // yellow
    Rgb::new(0, 0, 238),     // blue
    Rgb::new(205, 0, 205),   // magenta
    Rgb::new(0, 205, 205),   // cyan
    Rgb::new(229, 229, 229), // white
    Rgb::new(127, 127, 127), // bright black
    Rgb::new(255, 0, 0),     // bright red
    Rgb::new(0, 255, 0),     // bright green
    Rgb::new(255, 255, 0),   // bright yellow
    Rgb::new(92, 92, 255),   // bright blue
    Rgb::new(255, 0, 255),   // bright magenta
    Rgb::new(0, 255, 255),   // bright cyan
    Rgb::new(255, 255, 255), // bright white
];

/// Resolve an indexed color (0-255) against the fixed palette.
///
/// 0-15 come from the base ANSI table, 16-231 from the 6x6x6 color cube,
/// 232-255 from the grayscale ramp.
// https://stackoverflow.com/questions/69138165/how-to-get-the-rgb-values-of-a-256-color-palette-terminal-color
#[must_use]
pub fn lookup_color_by_index(index: usize) -> Rgb {
    match index {
        0..=15 => ANSI_TABLE[index],
        232..=255 => {
            let value = (2056 + 2570 * (index - 232)) / 256;

            // use conv2 crate to ensure safe casting
            let value: u8 = value.value_into().unwrap_or(0);
            Rgb::new(value, value, value)
        }
        16..=231 => {
            let r = cube_component(index, 36).value_into().unwrap_or(0);
            let g = cube_component(index, 6).value_into().unwrap_or(0);
            let b = cube_component(index, 1).value_into().unwrap_or(0);
            Rgb::new(r, g, b)
        }
        // out of palette range; saturate to the last grayscale entry
        _ => Rgb::new(238, 238, 238),
    }
}

#[must_use]
pub const fn cube_component(value: usize, modifier: usize) -> usize {
    let i = ((value - 16) / modifier) % 6;

    if i == 0 { 0 } else { (14135 + 10280 * i) / 256 }
}
