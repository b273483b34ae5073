// cellterm-buffer/tests/terminal_tests.rs

use cellterm_buffer::cursor::CursorPos;
use cellterm_buffer::terminal::{ScrollRegion, Terminal};

fn print_str(term: &mut Terminal, s: &str) {
    for c in s.chars() {
        term.print(c);
    }
}

fn crlf(term: &mut Terminal) {
    term.carriage_return();
    term.linefeed();
}

#[test]
fn plain_print_no_controls() {
    let mut term = Terminal::new(80, 80);
    print_str(&mut term, "hello");

    assert_eq!(term.plain_string(), "hello");
    assert_eq!(term.cursor().pos, CursorPos { x: 5, y: 0 });
}

#[test]
fn soft_wrap_marks_the_break() {
    let mut term = Terminal::new(3, 80);
    print_str(&mut term, "hello");

    assert_eq!(term.plain_string(), "hel\nlo");
    assert_eq!(term.cursor().pos, CursorPos { x: 2, y: 1 });
    assert!(term.screen().cell(0, 2).flags.wrap);
    assert!(!term.screen().cell(0, 1).flags.wrap);
}

#[test]
fn lf_and_cr_move_to_the_next_line() {
    let mut term = Terminal::new(80, 80);
    print_str(&mut term, "hello");
    crlf(&mut term);
    print_str(&mut term, "world");

    assert_eq!(term.plain_string(), "hello\nworld");
    assert_eq!(term.cursor().pos, CursorPos { x: 5, y: 1 });
}

#[test]
fn delete_lines_pulls_rows_up() {
    let mut term = Terminal::new(80, 80);
    for s in ["A", "B", "C"] {
        print_str(&mut term, s);
        crlf(&mut term);
    }
    print_str(&mut term, "D");

    term.cursor_up(2);
    term.delete_lines(1);
    print_str(&mut term, "E");
    crlf(&mut term);

    assert_eq!(term.plain_string(), "A\nE\nD");
    assert_eq!(term.cursor().pos, CursorPos { x: 0, y: 2 });
}

#[test]
fn insert_lines_respects_the_region() {
    let mut term = Terminal::new(2, 6);
    for (i, s) in ["A", "B", "C", "D", "E"].iter().enumerate() {
        print_str(&mut term, s);
        if i < 4 {
            crlf(&mut term);
        }
    }

    term.set_scrolling_region(1, 2);
    term.set_cursor_pos(1, 1);
    term.insert_lines(1);
    print_str(&mut term, "X");

    assert_eq!(term.plain_string(), "X\nA\nC\nD\nE");
}

#[test]
fn reverse_index_at_top_scrolls_down() {
    let mut term = Terminal::new(2, 5);
    print_str(&mut term, "A");
    crlf(&mut term);
    print_str(&mut term, "B");
    crlf(&mut term);
    crlf(&mut term);

    term.set_cursor_pos(1, 1);
    term.reverse_index();
    print_str(&mut term, "D");
    crlf(&mut term);

    term.set_cursor_pos(1, 1);
    term.reverse_index();
    print_str(&mut term, "E");
    crlf(&mut term);

    assert_eq!(term.plain_string(), "E\nD\nA\nB");
}

#[test]
fn decaln_resets_region_and_fills_the_screen() {
    let mut term = Terminal::new(2, 2);
    print_str(&mut term, "A");
    crlf(&mut term);
    print_str(&mut term, "B");

    term.decaln();

    assert_eq!(term.plain_string(), "EE\nEE");
    assert_eq!(term.cursor().pos, CursorPos { x: 0, y: 0 });
    assert_eq!(term.region(), ScrollRegion { top: 0, bottom: 1 });
}

#[test]
fn horizontal_tab_walks_to_the_next_stop() {
    let mut term = Terminal::new(80, 5);
    print_str(&mut term, "1");

    term.horizontal_tab();
    assert_eq!(term.cursor().pos.x, 7);

    term.horizontal_tab();
    assert_eq!(term.cursor().pos.x, 15);
}

#[test]
fn origin_mode_clamps_to_the_region() {
    let mut term = Terminal::new(80, 80);
    term.set_origin_mode(true);
    term.set_scrolling_region(10, 80);

    term.set_cursor_pos(0, 0);
    assert_eq!(term.cursor().pos, CursorPos { x: 0, y: 9 });

    term.set_cursor_pos(100, 0);
    assert_eq!(term.cursor().pos, CursorPos { x: 0, y: 79 });
}

#[test]
fn cursor_motion_saturates_at_the_edges() {
    let mut term = Terminal::new(10, 5);

    term.cursor_right(99);
    assert_eq!(term.cursor().pos.x, 9);
    term.cursor_down(99);
    assert_eq!(term.cursor().pos.y, 4);
    term.cursor_left(99);
    assert_eq!(term.cursor().pos.x, 0);
    term.cursor_up(99);
    assert_eq!(term.cursor().pos.y, 0);

    // a count of 0 still moves one column left
    term.cursor_right(3);
    term.cursor_left(0);
    assert_eq!(term.cursor().pos.x, 2);

    term.backspace();
    assert_eq!(term.cursor().pos.x, 1);
    term.backspace();
    term.backspace();
    assert_eq!(term.cursor().pos.x, 0);
}

#[test]
fn cursor_down_never_scrolls() {
    let mut term = Terminal::new(4, 3);
    print_str(&mut term, "top");

    term.cursor_down(50);
    term.cursor_down(50);

    assert_eq!(term.cursor().pos.y, 2);
    assert_eq!(term.plain_string(), "top");
}

#[test]
fn index_steps_down_then_scrolls_at_the_bottom() {
    let mut term = Terminal::new(2, 3);
    print_str(&mut term, "A");
    crlf(&mut term);
    print_str(&mut term, "B");
    crlf(&mut term);
    print_str(&mut term, "C");

    // cursor is on the last row; the next index scrolls
    assert_eq!(term.cursor().pos.y, 2);
    term.index();

    assert_eq!(term.plain_string(), "B\nC");
    assert_eq!(term.cursor().pos.y, 2);
    assert_eq!(term.screen().scrollback().len(), 1);
}

#[test]
fn index_outside_the_region_at_the_bottom_is_a_noop() {
    let mut term = Terminal::new(2, 5);
    print_str(&mut term, "A");
    term.set_scrolling_region(1, 2);
    term.set_cursor_pos(5, 1);

    term.index();

    assert_eq!(term.cursor().pos.y, 4);
    assert_eq!(term.plain_string(), "A");
    assert!(term.screen().scrollback().is_empty());
}

#[test]
fn insert_and_delete_lines_outside_the_region_are_noops() {
    let mut term = Terminal::new(2, 5);
    for (i, s) in ["A", "B", "C", "D", "E"].iter().enumerate() {
        print_str(&mut term, s);
        if i < 4 {
            crlf(&mut term);
        }
    }

    term.set_scrolling_region(2, 3);
    term.set_cursor_pos(5, 2); // below the region

    term.insert_lines(1);
    assert_eq!(term.plain_string(), "A\nB\nC\nD\nE");

    term.delete_lines(1);
    assert_eq!(term.plain_string(), "A\nB\nC\nD\nE");

    // the guarded no-op leaves the cursor alone too
    assert_eq!(term.cursor().pos, CursorPos { x: 1, y: 4 });
}

#[test]
fn insert_then_delete_restores_rows_through_blanks() {
    let mut term = Terminal::new(4, 6);
    print_str(&mut term, "one");
    term.next_line();
    print_str(&mut term, "two");

    term.set_cursor_pos(1, 1);
    term.insert_lines(2);
    term.delete_lines(2);

    assert_eq!(term.plain_string(), "one\ntwo");
}

#[test]
fn scroll_down_preserves_the_cursor() {
    let mut term = Terminal::new(4, 4);
    print_str(&mut term, "top");
    term.set_cursor_pos(3, 2);

    term.scroll_down(1);

    assert_eq!(term.cursor().pos, CursorPos { x: 1, y: 2 });
    assert_eq!(term.plain_string(), "\ntop");
}

#[test]
fn linefeed_does_not_reset_the_column() {
    let mut term = Terminal::new(10, 4);
    print_str(&mut term, "ab");
    term.linefeed();
    print_str(&mut term, "cd");

    assert_eq!(term.cursor().pos, CursorPos { x: 4, y: 1 });
    // the column carried over: "cd" starts under the gap left by "ab"
    assert!(term.screen().cell(1, 0).is_empty());
    assert_eq!(term.screen().cell(1, 2).ch, 'c');
    assert_eq!(term.screen().cell(1, 3).ch, 'd');
}

#[test]
fn next_line_resets_the_column() {
    let mut term = Terminal::new(10, 4);
    print_str(&mut term, "ab");
    term.next_line();
    print_str(&mut term, "cd");

    assert_eq!(term.cursor().pos, CursorPos { x: 2, y: 1 });
    assert_eq!(term.plain_string(), "ab\ncd");
}

#[test]
fn set_cursor_col_stays_on_the_row() {
    let mut term = Terminal::new(10, 4);
    term.set_cursor_pos(3, 5);

    term.set_cursor_col(8);
    assert_eq!(term.cursor().pos, CursorPos { x: 7, y: 2 });

    term.set_cursor_col(0);
    assert_eq!(term.cursor().pos, CursorPos { x: 0, y: 2 });

    term.set_cursor_col(99);
    assert_eq!(term.cursor().pos, CursorPos { x: 9, y: 2 });
}

#[test]
fn wrap_after_region_scroll_stays_inside() {
    // printing past the last column while on the bottom row scrolls in place
    let mut term = Terminal::new(3, 2);
    print_str(&mut term, "abcdef");

    assert_eq!(term.plain_string(), "abc\ndef");
    assert_eq!(term.cursor().pos, CursorPos { x: 2, y: 1 });
    assert!(term.cursor().pending_wrap);

    print_str(&mut term, "g");
    assert_eq!(term.plain_string(), "def\ng");
    assert_eq!(term.screen().scrollback().len(), 1);
}
