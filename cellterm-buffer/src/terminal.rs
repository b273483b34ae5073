// Copyright (C) 2024-2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use cellterm_common::{
    attribute::Attribute,
    colors::{Rgb, lookup_color_by_index},
    error::TerminalError,
    modes::Modes,
    ops::{EraseDisplay, EraseLine, TabClear},
};

use crate::{
    cell::{Cell, CellFlags},
    cursor::{Cursor, CursorPos},
    screen::Screen,
    tabstops::{TABSTOP_INTERVAL, TabStops},
};

/// DECSTBM top and bottom margins, 0-indexed, inclusive.
/// When disabled, the region is full-screen: [0, rows-1].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ScrollRegion {
    pub top: usize,
    pub bottom: usize,
}

impl ScrollRegion {
    #[must_use]
    pub const fn contains(&self, y: usize) -> bool {
        y >= self.top && y <= self.bottom
    }
}

/// The terminal emulation core.
///
/// A parser decodes control sequences and calls the operations below; a
/// renderer reads the screen back out. The core itself does no I/O, holds no
/// threads, and allocates only on creation and resize.
///
/// Row/column pairs on the public surface (`set_cursor_pos`,
/// `set_scrolling_region`, `set_cursor_col`) are 1-indexed with 0 normalized
/// to 1, the way the wire protocol carries them; internal state is 0-indexed.
pub struct Terminal {
    screen: Screen,
    tabs: TabStops,
    cursor: Cursor,
    saved_cursor: Cursor,
    region: ScrollRegion,
    modes: Modes,
    cols: usize,
    rows: usize,
}

impl Terminal {
    /// Create a core with a blank `cols x rows` screen.
    ///
    /// # Panics
    /// Panics if either dimension is zero.
    #[must_use]
    pub fn new(cols: usize, rows: usize) -> Self {
        assert!(cols > 0 && rows > 0, "terminal dimensions must be nonzero");

        let term = Self {
            screen: Screen::new(cols, rows),
            tabs: TabStops::new(cols, TABSTOP_INTERVAL),
            cursor: Cursor::default(),
            saved_cursor: Cursor::default(),
            region: ScrollRegion {
                top: 0,
                bottom: rows - 1,
            },
            modes: Modes::default(),
            cols,
            rows,
        };

        term.debug_assert_invariants();
        term
    }

    /// Internal consistency checks for debug builds.
    ///
    /// Called from the mutating entry points. In release builds it compiles
    /// down to a no-op.
    #[cfg(debug_assertions)]
    fn debug_assert_invariants(&self) {
        debug_assert!(
            self.cursor.pos.x < self.cols,
            "cursor.pos.x {} out of bounds for cols {}",
            self.cursor.pos.x,
            self.cols
        );
        debug_assert!(
            self.cursor.pos.y < self.rows,
            "cursor.pos.y {} out of bounds for rows {}",
            self.cursor.pos.y,
            self.rows
        );
        debug_assert!(
            self.region.top <= self.region.bottom,
            "region.top {} must be <= region.bottom {}",
            self.region.top,
            self.region.bottom
        );
        debug_assert!(
            self.region.bottom < self.rows,
            "region.bottom {} must be < rows {}",
            self.region.bottom,
            self.rows
        );
        if self.cursor.pending_wrap {
            debug_assert_eq!(
                self.cursor.pos.x,
                self.cols - 1,
                "pending_wrap requires the cursor to sit on the last column"
            );
        }
        debug_assert_eq!(self.screen.cols(), self.cols);
        debug_assert_eq!(self.screen.rows(), self.rows);
    }

    // In release builds this is a no-op, so we can call it freely.
    #[cfg(not(debug_assertions))]
    #[inline]
    const fn debug_assert_invariants(&self) {}

    // ----------------------------------------------------------
    // Accessors
    // ----------------------------------------------------------

    #[must_use]
    pub const fn cols(&self) -> usize {
        self.cols
    }

    #[must_use]
    pub const fn rows(&self) -> usize {
        self.rows
    }

    #[must_use]
    pub const fn screen(&self) -> &Screen {
        &self.screen
    }

    #[must_use]
    pub const fn cursor(&self) -> &Cursor {
        &self.cursor
    }

    #[must_use]
    pub const fn region(&self) -> ScrollRegion {
        self.region
    }

    #[must_use]
    pub const fn modes(&self) -> Modes {
        self.modes
    }

    #[must_use]
    pub const fn tabstops(&self) -> &TabStops {
        &self.tabs
    }

    /// Origin mode (DECOM).
    pub const fn set_origin_mode(&mut self, on: bool) {
        self.modes.origin = on;
    }

    /// Autowrap mode (DECAWM).
    pub const fn set_autowrap(&mut self, on: bool) {
        self.modes.autowrap = on;
    }

    /// Reverse video (DECSCNM). Stored for the renderer; nothing in the core
    /// consults it.
    pub const fn set_reverse_colors(&mut self, on: bool) {
        self.modes.reverse_colors = on;
    }

    /// Plain-text rendition of the visible screen, rows joined by `\n`.
    #[must_use]
    pub fn plain_string(&self) -> String {
        self.screen.contents()
    }

    // ----------------------------------------------------------
    // Print
    // ----------------------------------------------------------

    /// Write one character at the cursor with the current pen.
    ///
    /// A pending wrap is honored first (autowrap permitting): the cell under
    /// the cursor is marked as a soft break, the cursor indexes to the next
    /// row, and the character lands at column 0. A print into the last
    /// column leaves the cursor *on* that column with `pending_wrap` raised;
    /// the line advances only if another character arrives.
    pub fn print(&mut self, c: char) {
        if self.cursor.pending_wrap && self.modes.autowrap {
            let pos = self.cursor.pos;
            self.screen.cell_mut(pos.y, pos.x).flags.wrap = true;
            self.index();
            self.cursor.pos.x = 0;
        }

        let pen = self.cursor.pen;
        let pos = self.cursor.pos;
        let cell = self.screen.cell_mut(pos.y, pos.x);
        *cell = pen;
        cell.ch = c;

        self.cursor.pos.x += 1;
        if self.cursor.pos.x == self.cols {
            self.cursor.pos.x = self.cols - 1;
            self.cursor.pending_wrap = true;
        }

        self.debug_assert_invariants();
    }

    // ----------------------------------------------------------
    // Cursor motion
    // ----------------------------------------------------------

    /// CUB - move left, saturating at the left edge. A count of 0 moves 1.
    pub fn cursor_left(&mut self, n: usize) {
        self.cursor.pos.x = self.cursor.pos.x.saturating_sub(n.max(1));
        self.cursor.pending_wrap = false;
        self.debug_assert_invariants();
    }

    /// CUF - move right, clamped to the last column. Never wraps.
    pub fn cursor_right(&mut self, n: usize) {
        self.cursor.pos.x = (self.cursor.pos.x + n).min(self.cols - 1);
        self.cursor.pending_wrap = false;
        self.debug_assert_invariants();
    }

    /// CUD - move down, clamped to the last row. Never scrolls.
    pub fn cursor_down(&mut self, n: usize) {
        self.cursor.pos.y = (self.cursor.pos.y + n).min(self.rows - 1);
        self.debug_assert_invariants();
    }

    /// CUU - move up, saturating at the top row. Never scrolls.
    pub fn cursor_up(&mut self, n: usize) {
        self.cursor.pos.y = self.cursor.pos.y.saturating_sub(n);
        self.debug_assert_invariants();
    }

    /// BS - one column left, stopping at the left edge.
    pub fn backspace(&mut self) {
        self.cursor.pos.x = self.cursor.pos.x.saturating_sub(1);
        self.cursor.pending_wrap = false;
        self.debug_assert_invariants();
    }

    /// CR - column 0.
    pub const fn carriage_return(&mut self) {
        self.cursor.pos.x = 0;
        self.cursor.pending_wrap = false;
    }

    /// LF - same motion as IND. LNM is the parser's concern.
    pub fn linefeed(&mut self) {
        self.index();
    }

    /// NEL - CR then IND.
    pub fn next_line(&mut self) {
        self.carriage_return();
        self.index();
    }

    /// CUP/HVP - absolute position, 1-indexed, 0 normalized to 1.
    ///
    /// With origin mode on, the row is relative to the region top and
    /// clamped to the region bottom. Columns are unaffected by origin mode
    /// (left/right margins are not implemented).
    pub fn set_cursor_pos(&mut self, row: usize, col: usize) {
        let row = row.max(1);
        let col = col.max(1);

        self.cursor.pos.x = col.min(self.cols) - 1;
        self.cursor.pos.y = if self.modes.origin {
            (self.region.top + row).min(self.region.bottom + 1) - 1
        } else {
            row.min(self.rows) - 1
        };
        self.cursor.pending_wrap = false;

        self.debug_assert_invariants();
    }

    /// CHA - absolute column on the current row, 1-indexed.
    pub fn set_cursor_col(&mut self, col: usize) {
        let col = col.max(1);
        self.cursor.pos.x = col.min(self.cols) - 1;
        self.cursor.pending_wrap = false;
        self.debug_assert_invariants();
    }

    // ----------------------------------------------------------
    // Index / scroll
    // ----------------------------------------------------------

    /// IND - move down one row.
    ///
    /// At the physical bottom the screen scrolls up, but only when the
    /// cursor is inside the scrolling region; outside it the motion is a
    /// no-op. Elsewhere the cursor simply steps down.
    pub fn index(&mut self) {
        self.cursor.pending_wrap = false;

        if self.cursor.pos.y == self.rows - 1 {
            if self.region.contains(self.cursor.pos.y) {
                self.scroll_up(1);
            }
        } else {
            self.cursor.pos.y += 1;
        }

        self.debug_assert_invariants();
    }

    /// RI - move up one row; at the top row the region scrolls down.
    pub fn reverse_index(&mut self) {
        if self.cursor.pos.y == 0 {
            self.scroll_down(1);
        } else {
            self.cursor.pos.y -= 1;
        }

        self.debug_assert_invariants();
    }

    /// Shift the visible screen up by `n` rows; displaced top rows go to the
    /// storage layer's scrollback and blank rows appear at the bottom.
    pub fn scroll_up(&mut self, n: usize) {
        self.screen.scroll_up(n);
    }

    /// Scroll the region down by `n` rows: blank rows appear at the region
    /// top and rows fall off the region bottom. The cursor is preserved.
    pub fn scroll_down(&mut self, n: usize) {
        let saved = self.cursor.pos;
        self.cursor.pos = CursorPos {
            x: saved.x,
            y: self.region.top,
        };
        self.insert_lines(n);
        self.cursor.pos = saved;
        self.debug_assert_invariants();
    }

    // ----------------------------------------------------------
    // Insert / delete
    // ----------------------------------------------------------

    /// IL - insert `n` blank lines at the cursor row, shifting rows down
    /// within the scrolling region and discarding at the region bottom.
    /// Outside the region this is a no-op. The cursor moves to column 0.
    pub fn insert_lines(&mut self, n: usize) {
        let y = self.cursor.pos.y;
        if !self.region.contains(y) {
            return;
        }

        self.cursor.pos.x = 0;
        self.cursor.pending_wrap = false;

        let remaining = self.region.bottom - y + 1;
        let k = n.min(remaining);
        if k == 0 {
            return;
        }

        for r in ((y + k)..=self.region.bottom).rev() {
            self.screen.copy_row(r, r - k);
        }

        let blank = self.cursor.pen.blank();
        for r in y..y + k {
            self.screen.row_mut(r).fill(blank);
        }

        self.debug_assert_invariants();
    }

    /// DL - delete `n` lines at the cursor row, shifting rows up within the
    /// scrolling region and filling the region bottom with pen-styled
    /// blanks. Outside the region this is a no-op. The cursor moves to
    /// column 0.
    pub fn delete_lines(&mut self, n: usize) {
        let y = self.cursor.pos.y;
        if !self.region.contains(y) {
            return;
        }

        self.cursor.pos.x = 0;
        self.cursor.pending_wrap = false;

        let remaining = self.region.bottom - y + 1;
        let k = n.min(remaining);
        if k == 0 {
            return;
        }

        for r in y..(self.region.bottom + 1 - k) {
            self.screen.copy_row(r, r + k);
        }

        let blank = self.cursor.pen.blank();
        for r in (self.region.bottom + 1 - k)..=self.region.bottom {
            self.screen.row_mut(r).fill(blank);
        }

        self.debug_assert_invariants();
    }

    /// ICH - insert `n` pen-styled blanks at the cursor, shifting the rest
    /// of the row right. Cells pushed past the edge are discarded. The
    /// cursor does not move.
    pub fn insert_chars(&mut self, n: usize) {
        if n == 0 {
            return;
        }

        let CursorPos { x, y } = self.cursor.pos;
        let n = n.min(self.cols - x);
        let cols = self.cols;
        let blank = self.cursor.pen.blank();

        let row = self.screen.row_mut(y);
        row.copy_within(x..cols - n, x + n);
        row[x..x + n].fill(blank);
    }

    /// DCH - delete `n` cells at the cursor, shifting the rest of the row
    /// left and erasing the exposed right tail. The cursor does not move.
    pub fn delete_chars(&mut self, n: usize) {
        if n == 0 {
            return;
        }

        let CursorPos { x, y } = self.cursor.pos;
        let n = n.min(self.cols - x);
        let cols = self.cols;

        let row = self.screen.row_mut(y);
        row.copy_within(x + n..cols, x);
        for cell in &mut row[cols - n..] {
            cell.ch = '\0';
        }
    }

    /// ECH - erase `n` cells starting at the cursor, painting with the pen.
    /// The cursor does not move.
    pub fn erase_chars(&mut self, n: usize) {
        let CursorPos { x, y } = self.cursor.pos;
        let end = (x + n).min(self.cols);
        let blank = self.cursor.pen.blank();

        self.screen.row_mut(y)[x..end].fill(blank);
    }

    // ----------------------------------------------------------
    // Erase
    // ----------------------------------------------------------

    /// ED - erase part or all of the display, painting with the pen.
    pub fn erase_display(&mut self, mode: EraseDisplay) {
        let blank = self.cursor.pen.blank();
        let CursorPos { x, y } = self.cursor.pos;

        match mode {
            EraseDisplay::Complete => self.screen.visible_mut().fill(blank),
            EraseDisplay::Below => {
                self.screen.row_mut(y)[x..].fill(blank);
                for r in y + 1..self.rows {
                    self.screen.row_mut(r).fill(blank);
                }
            }
            EraseDisplay::Above => {
                self.screen.row_mut(y)[..=x].fill(blank);
                for r in 0..y {
                    self.screen.row_mut(r).fill(blank);
                }
            }
            EraseDisplay::Scrollback => self.screen.clear_scrollback(),
        }
    }

    /// EL - erase part or all of the current row, painting with the pen.
    pub fn erase_line(&mut self, mode: EraseLine) {
        let blank = self.cursor.pen.blank();
        let CursorPos { x, y } = self.cursor.pos;
        let row = self.screen.row_mut(y);

        match mode {
            EraseLine::Right => row[x..].fill(blank),
            EraseLine::Left => row[..x].fill(blank),
            EraseLine::Complete => row.fill(blank),
        }
    }

    // ----------------------------------------------------------
    // Scrolling region
    // ----------------------------------------------------------

    /// DECSTBM - set the scrolling region, 1-indexed inclusive. A bottom of
    /// 0 means the last row; degenerate bounds reset to full screen. The
    /// cursor is homed through `set_cursor_pos`, so origin mode places it at
    /// the region's top-left.
    pub fn set_scrolling_region(&mut self, top: usize, bottom: usize) {
        let t = top.max(1);
        let b = if bottom == 0 {
            self.rows
        } else {
            bottom.min(self.rows)
        };

        let (t, b) = if t >= b { (1, self.rows) } else { (t, b) };

        self.region = ScrollRegion {
            top: t - 1,
            bottom: b - 1,
        };

        self.set_cursor_pos(1, 1);
    }

    // ----------------------------------------------------------
    // Save / restore
    // ----------------------------------------------------------

    /// DECSC - snapshot the cursor: position, pen, and pending wrap.
    pub const fn save_cursor(&mut self) {
        self.saved_cursor = self.cursor;
    }

    /// DECRC - restore the last snapshot. With no prior save this yields
    /// the default cursor. The restored position is clamped in case the
    /// screen shrank since the save.
    pub fn restore_cursor(&mut self) {
        self.cursor = self.saved_cursor;
        self.cursor.pos.x = self.cursor.pos.x.min(self.cols - 1);
        self.cursor.pos.y = self.cursor.pos.y.min(self.rows - 1);
        if self.cursor.pos.x != self.cols - 1 {
            self.cursor.pending_wrap = false;
        }
        self.debug_assert_invariants();
    }

    // ----------------------------------------------------------
    // SGR
    // ----------------------------------------------------------

    /// SGR - apply an attribute to the pen.
    ///
    /// # Errors
    /// Returns [`TerminalError::UnsupportedAttribute`] for unknown variants
    /// and for 8/bright color indices above 7; the pen is left unchanged.
    pub fn set_attribute(&mut self, attr: Attribute) -> Result<(), TerminalError> {
        let pen = &mut self.cursor.pen;

        match attr {
            Attribute::Unset => {
                pen.fg = None;
                pen.bg = None;
                pen.flags = CellFlags::default();
            }
            Attribute::Bold => pen.flags.bold = true,
            Attribute::Underline => pen.flags.underline = true,
            Attribute::Inverse => pen.flags.inverse = true,
            Attribute::DirectColorFg { r, g, b } => pen.fg = Some(Rgb::new(r, g, b)),
            Attribute::DirectColorBg { r, g, b } => pen.bg = Some(Rgb::new(r, g, b)),
            Attribute::EightColorFg(idx) if idx < 8 => {
                pen.fg = Some(lookup_color_by_index(usize::from(idx)));
            }
            Attribute::EightColorBg(idx) if idx < 8 => {
                pen.bg = Some(lookup_color_by_index(usize::from(idx)));
            }
            Attribute::EightBrightColorFg(idx) if idx < 8 => {
                pen.fg = Some(lookup_color_by_index(usize::from(idx) + 8));
            }
            Attribute::EightBrightColorBg(idx) if idx < 8 => {
                pen.bg = Some(lookup_color_by_index(usize::from(idx) + 8));
            }
            Attribute::Color256Fg(idx) => {
                pen.fg = Some(lookup_color_by_index(usize::from(idx)));
            }
            Attribute::Color256Bg(idx) => {
                pen.bg = Some(lookup_color_by_index(usize::from(idx)));
            }
            _ => return Err(TerminalError::UnsupportedAttribute(attr)),
        }

        Ok(())
    }

    // ----------------------------------------------------------
    // Tabs
    // ----------------------------------------------------------

    /// HT - walk the cursor right to the next tab stop, printing spaces.
    /// Stops at the last column regardless of stops.
    pub fn horizontal_tab(&mut self) {
        loop {
            if self.cursor.pos.x == self.cols - 1 {
                break;
            }
            self.print(' ');
            if self.tabs.get(self.cursor.pos.x) {
                break;
            }
        }
    }

    /// HTS - set a stop at the cursor column.
    pub fn tab_set(&mut self) {
        self.tabs.set(self.cursor.pos.x);
    }

    /// TBC - clear the stop under the cursor, or all stops.
    pub fn tab_clear(&mut self, mode: TabClear) {
        match mode {
            TabClear::Current => self.tabs.unset(self.cursor.pos.x),
            TabClear::All => self.tabs.clear_all(),
            TabClear::Unknown(mode) => {
                warn!("ignoring unknown tab clear mode {mode}");
            }
        }
    }

    // ----------------------------------------------------------
    // Whole-screen operations
    // ----------------------------------------------------------

    /// DECALN - screen alignment pattern: reset the scrolling region, home
    /// the cursor, and fill the screen with neutral 'E' cells.
    pub fn decaln(&mut self) {
        self.set_scrolling_region(1, self.rows);

        let cell = Cell {
            ch: 'E',
            ..Cell::default()
        };
        self.screen.visible_mut().fill(cell);

        self.debug_assert_invariants();
    }

    /// Resize the screen. The storage layer truncates or pads rows (no
    /// reflow), the scrolling region resets to full screen, tab stops are
    /// re-seeded when the width changes, and the cursor clamps to the new
    /// bounds.
    ///
    /// # Panics
    /// Panics if either dimension is zero.
    pub fn resize(&mut self, cols: usize, rows: usize) {
        assert!(cols > 0 && rows > 0, "terminal dimensions must be nonzero");

        if cols != self.cols {
            self.tabs = TabStops::new(cols, TABSTOP_INTERVAL);
        }

        self.screen.resize(cols, rows);
        self.cols = cols;
        self.rows = rows;
        self.region = ScrollRegion {
            top: 0,
            bottom: rows - 1,
        };

        self.cursor.pos.x = self.cursor.pos.x.min(cols - 1);
        self.cursor.pos.y = self.cursor.pos.y.min(rows - 1);
        if self.cursor.pos.x != cols - 1 {
            self.cursor.pending_wrap = false;
        }

        self.debug_assert_invariants();
    }
}
