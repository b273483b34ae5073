// Copyright (C) 2024-2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use anyhow::Result;

/// SGR (Select Graphic Rendition) attributes the engine applies to the pen.
///
/// This is the typed surface a parser hands to `Terminal::set_attribute`
/// after decoding a `CSI ... m` sequence. Indexed-color variants carry the
/// palette index; direct-color variants carry the RGB payload.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Default)]
pub enum Attribute {
    #[default]
    Unset,
    Bold,
    Underline,
    Inverse,
    DirectColorFg {
        r: u8,
        g: u8,
        b: u8,
    },
    DirectColorBg {
        r: u8,
        g: u8,
        b: u8,
    },
    /// Standard 8-color foreground, index 0-7.
    EightColorFg(u8),
    /// Standard 8-color background, index 0-7.
    EightColorBg(u8),
    /// Bright 8-color foreground, index 0-7.
    EightBrightColorFg(u8),
    /// Bright 8-color background, index 0-7.
    EightBrightColorBg(u8),
    /// 256-color foreground, full palette index.
    Color256Fg(u8),
    /// 256-color background, full palette index.
    Color256Bg(u8),
    Unknown(usize),
}

impl Attribute {
    /// Map a bare SGR parameter to an attribute.
    ///
    /// Parameters that require a color payload (38, 48) cannot be built from
    /// a bare code; use [`Self::from_code_color`] for those.
    #[must_use]
    pub fn from_code(code: usize) -> Self {
        match code {
            0 => Self::Unset,
            1 => Self::Bold,
            4 => Self::Underline,
            7 => Self::Inverse,
            30..=37 => Self::EightColorFg(u8::try_from(code - 30).unwrap_or(0)),
            38 => {
                error!(
                    "SGR 38 carries a color payload and cannot be built from a bare code; treating as unknown"
                );
                Self::Unknown(code)
            }
            40..=47 => Self::EightColorBg(u8::try_from(code - 40).unwrap_or(0)),
            48 => {
                error!(
                    "SGR 48 carries a color payload and cannot be built from a bare code; treating as unknown"
                );
                Self::Unknown(code)
            }
            90..=97 => Self::EightBrightColorFg(u8::try_from(code - 90).unwrap_or(0)),
            100..=107 => Self::EightBrightColorBg(u8::try_from(code - 100).unwrap_or(0)),
            _ => Self::Unknown(code),
        }
    }

    /// Build a direct-color attribute from an SGR code (38 or 48) and RGB
    /// components.
    ///
    /// # Errors
    /// Will return an error if any of the components are greater than `u8::MAX`.
    pub fn from_code_color(code: usize, r: usize, g: usize, b: usize) -> Result<Self> {
        let r = u8::try_from(r)?;
        let g = u8::try_from(g)?;
        let b = u8::try_from(b)?;

        match code {
            38 => Ok(Self::DirectColorFg { r, g, b }),
            48 => Ok(Self::DirectColorBg { r, g, b }),
            _ => Ok(Self::Unknown(code)),
        }
    }
}
