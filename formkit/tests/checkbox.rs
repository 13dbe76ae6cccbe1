use std::cell::RefCell;
use std::rc::Rc;

use cellterm::{Border, Buffer, Cell, Color, Key, KeyEvent, Rect, Screen};
use formkit::{Checkbox, EventResult, FormItem, Primitive, Theme};

fn press(checkbox: &Checkbox, key: Key) -> EventResult {
    checkbox.handle_key(&KeyEvent::key(key))
}

fn record_changes(checkbox: &Checkbox) -> Rc<RefCell<Vec<bool>>> {
    let changes = Rc::new(RefCell::new(Vec::new()));
    let sink = changes.clone();
    checkbox.set_changed_func(move |checked| sink.borrow_mut().push(checked));
    changes
}

fn record_done(checkbox: &Checkbox) -> Rc<RefCell<Vec<Key>>> {
    let keys = Rc::new(RefCell::new(Vec::new()));
    let sink = keys.clone();
    checkbox.set_done_func(move |key| sink.borrow_mut().push(key));
    keys
}

fn focused(label: &str, rect: Rect) -> Checkbox {
    let checkbox = Checkbox::new();
    checkbox.set_label(label).set_rect(rect);
    checkbox.focus();
    checkbox
}

fn draw(checkbox: &Checkbox, width: u16, height: u16) -> Buffer {
    let mut buf = Buffer::new(width, height);
    checkbox.draw(&mut buf);
    buf
}

// ============================================================================
// Configuration
// ============================================================================

#[test]
fn test_defaults() {
    let checkbox = Checkbox::new();

    assert!(!checkbox.is_checked());
    assert_eq!(checkbox.label(), "");
    assert_eq!(checkbox.label_color(), Color::YELLOW);
    assert_eq!(checkbox.field_background_color(), Color::BLUE);
    assert_eq!(checkbox.field_text_color(), Color::WHITE);
    assert_eq!(checkbox.background_color(), None);
    assert!(!checkbox.has_focus());
}

#[test]
fn test_setters_chain() {
    let checkbox = Checkbox::new();
    checkbox
        .set_label("Remember me")
        .set_checked(true)
        .set_label_color(Color::RED)
        .set_field_background_color(Color::GRAY)
        .set_field_text_color(Color::BLACK);

    assert!(checkbox.is_checked());
    assert_eq!(checkbox.label(), "Remember me");
    assert_eq!(checkbox.label_color(), Color::RED);
    assert_eq!(checkbox.field_background_color(), Color::GRAY);
    assert_eq!(checkbox.field_text_color(), Color::BLACK);
}

#[test]
fn test_themed_colors() {
    let theme = Theme::new()
        .label(Color::CYAN)
        .field_background(Color::BLACK)
        .field_text(Color::GREEN)
        .background(Color::GRAY);
    let checkbox = Checkbox::themed(&theme);

    assert_eq!(checkbox.label_color(), Color::CYAN);
    assert_eq!(checkbox.field_background_color(), Color::BLACK);
    assert_eq!(checkbox.field_text_color(), Color::GREEN);
    assert_eq!(checkbox.background_color(), Some(Color::GRAY));

    checkbox.set_label("kept").set_theme(&Theme::default());
    assert_eq!(checkbox.label_color(), Color::YELLOW);
    assert_eq!(checkbox.background_color(), None);
    assert_eq!(checkbox.label(), "kept");
}

#[test]
fn test_clones_share_state() {
    let checkbox = Checkbox::new();
    let handle = checkbox.clone();

    handle.set_checked(true).set_label("shared");

    assert!(checkbox.is_checked());
    assert_eq!(checkbox.label(), "shared");
}

#[test]
fn test_focus_and_blur() {
    let checkbox = Checkbox::new();

    checkbox.focus();
    assert!(checkbox.has_focus());

    checkbox.blur();
    assert!(!checkbox.has_focus());
}

#[test]
fn test_set_rect_through_primitive() {
    let checkbox = Checkbox::new();
    let primitive: &dyn Primitive = &checkbox;

    primitive.set_rect(Rect::new(3, 4, 20, 1));

    assert_eq!(primitive.rect(), Rect::new(3, 4, 20, 1));
}

// ============================================================================
// Input
// ============================================================================

#[test]
fn test_accept_scenario() {
    let checkbox = focused("Accept", Rect::new(0, 0, 20, 1));
    let changes = record_changes(&checkbox);
    let done = record_done(&checkbox);

    assert_eq!(press(&checkbox, Key::Char(' ')), EventResult::Consumed);
    assert!(checkbox.is_checked());
    assert_eq!(*changes.borrow(), vec![true]);

    assert_eq!(press(&checkbox, Key::Char(' ')), EventResult::Consumed);
    assert!(!checkbox.is_checked());
    assert_eq!(*changes.borrow(), vec![true, false]);

    assert_eq!(press(&checkbox, Key::Tab), EventResult::Consumed);
    assert_eq!(*done.borrow(), vec![Key::Tab]);
    assert!(!checkbox.is_checked());
    assert_eq!(changes.borrow().len(), 2);
}

#[test]
fn test_toggle_count_matches_parity() {
    let checkbox = focused("Parity", Rect::new(0, 0, 20, 1));
    let changes = record_changes(&checkbox);

    let keys = [
        Key::Char(' '),
        Key::Enter,
        Key::Enter,
        Key::Char(' '),
        Key::Char(' '),
        Key::Enter,
        Key::Char(' '),
    ];
    for (i, key) in keys.iter().enumerate() {
        press(&checkbox, *key);
        let toggles = i + 1;
        assert_eq!(changes.borrow().len(), toggles);
        assert_eq!(checkbox.is_checked(), toggles % 2 == 1);
        assert_eq!(changes.borrow()[i], checkbox.is_checked());
    }
}

#[test]
fn test_enter_toggles_like_space() {
    let checkbox = Checkbox::new();
    let changes = record_changes(&checkbox);

    assert_eq!(press(&checkbox, Key::Enter), EventResult::Consumed);

    assert!(checkbox.is_checked());
    assert_eq!(*changes.borrow(), vec![true]);
}

#[test]
fn test_toggle_without_handler() {
    let checkbox = Checkbox::new();

    assert_eq!(press(&checkbox, Key::Char(' ')), EventResult::Consumed);
    assert!(checkbox.is_checked());
}

#[test]
fn test_done_keys_fire_once_and_keep_state() {
    for key in [Key::Tab, Key::BackTab, Key::Escape] {
        for initial in [false, true] {
            let checkbox = Checkbox::new();
            checkbox.set_checked(initial);
            let changes = record_changes(&checkbox);
            let done = record_done(&checkbox);

            assert_eq!(press(&checkbox, key), EventResult::Consumed);

            assert_eq!(*done.borrow(), vec![key]);
            assert_eq!(checkbox.is_checked(), initial);
            assert!(changes.borrow().is_empty());
        }
    }
}

#[test]
fn test_done_keys_without_handler_are_ignored() {
    let checkbox = Checkbox::new();

    for key in [Key::Tab, Key::BackTab, Key::Escape] {
        assert_eq!(press(&checkbox, key), EventResult::Ignored);
    }
    assert!(!checkbox.is_checked());
}

#[test]
fn test_backtab_with_shift_modifier() {
    let checkbox = Checkbox::new();
    let done = record_done(&checkbox);

    let event = KeyEvent::new(Key::BackTab, cellterm::Modifiers::shift());
    assert_eq!(checkbox.handle_key(&event), EventResult::Consumed);

    assert_eq!(*done.borrow(), vec![Key::BackTab]);
}

#[test]
fn test_other_printable_chars_are_ignored() {
    let checkbox = focused("Ignore", Rect::new(0, 0, 20, 1));
    let changes = record_changes(&checkbox);
    let done = record_done(&checkbox);

    for ch in ['a', 'x', 'X', '1', '\t', '\u{3000}'] {
        assert_eq!(press(&checkbox, Key::Char(ch)), EventResult::Ignored);
    }

    assert!(!checkbox.is_checked());
    assert!(changes.borrow().is_empty());
    assert!(done.borrow().is_empty());
}

#[test]
fn test_other_keys_are_ignored() {
    let checkbox = Checkbox::new();
    checkbox.set_checked(true);
    let changes = record_changes(&checkbox);
    let done = record_done(&checkbox);

    for key in [
        Key::Up,
        Key::Down,
        Key::Left,
        Key::Right,
        Key::Backspace,
        Key::Delete,
        Key::F(1),
        Key::Unknown,
    ] {
        assert_eq!(press(&checkbox, key), EventResult::Ignored);
    }

    assert!(checkbox.is_checked());
    assert!(changes.borrow().is_empty());
    assert!(done.borrow().is_empty());
}

#[test]
fn test_set_checked_does_not_fire_changed() {
    let checkbox = Checkbox::new();
    let changes = record_changes(&checkbox);

    checkbox.set_checked(true).set_checked(false).set_checked(true);

    assert!(checkbox.is_checked());
    assert!(changes.borrow().is_empty());
}

#[test]
fn test_changed_handler_sees_committed_state() {
    let checkbox = Checkbox::new();
    let handle = checkbox.clone();
    let observed = Rc::new(RefCell::new(Vec::new()));
    let sink = observed.clone();
    checkbox.set_changed_func(move |checked| {
        sink.borrow_mut().push((checked, handle.is_checked()));
    });

    press(&checkbox, Key::Char(' '));
    press(&checkbox, Key::Enter);

    assert_eq!(*observed.borrow(), vec![(true, true), (false, false)]);
}

#[test]
fn test_changed_handler_may_reset_state() {
    let checkbox = Checkbox::new();
    let handle = checkbox.clone();
    let calls = Rc::new(RefCell::new(0));
    let counter = calls.clone();
    checkbox.set_changed_func(move |_| {
        *counter.borrow_mut() += 1;
        handle.set_checked(false);
    });

    press(&checkbox, Key::Char(' '));
    assert!(!checkbox.is_checked());

    // Handler stays installed after re-entering the checkbox
    press(&checkbox, Key::Char(' '));
    assert_eq!(*calls.borrow(), 2);
    assert!(!checkbox.is_checked());
}

#[test]
fn test_set_changed_func_replaces_previous() {
    let checkbox = Checkbox::new();
    let first = record_changes(&checkbox);
    let second = record_changes(&checkbox);

    press(&checkbox, Key::Char(' '));

    assert!(first.borrow().is_empty());
    assert_eq!(*second.borrow(), vec![true]);
}

#[test]
fn test_handler_replaced_from_inside_itself() {
    let checkbox = Checkbox::new();
    let handle = checkbox.clone();
    let replacement = Rc::new(RefCell::new(Vec::new()));
    let sink = replacement.clone();
    checkbox.set_changed_func(move |_| {
        let sink = sink.clone();
        handle.set_changed_func(move |checked| sink.borrow_mut().push(checked));
    });

    press(&checkbox, Key::Char(' '));
    assert!(replacement.borrow().is_empty());

    press(&checkbox, Key::Char(' '));
    assert_eq!(*replacement.borrow(), vec![false]);
}

#[test]
fn test_done_handler_may_blur() {
    let checkbox = focused("Blur", Rect::new(0, 0, 10, 1));
    let handle = checkbox.clone();
    checkbox.set_done_func(move |_| handle.blur());

    press(&checkbox, Key::Tab);

    assert!(!checkbox.has_focus());
}

// ============================================================================
// Form item
// ============================================================================

#[test]
fn test_form_attributes_through_trait() {
    let checkbox = Checkbox::new();
    let item: &dyn FormItem = &checkbox;

    item.set_form_attributes("Name", Color::WHITE, Color::BLACK, Color::YELLOW, Color::GRAY);

    assert_eq!(item.label(), "Name");
    assert_eq!(checkbox.label_color(), Color::WHITE);
    assert_eq!(checkbox.background_color(), Some(Color::BLACK));
    assert_eq!(checkbox.field_text_color(), Color::YELLOW);
    assert_eq!(checkbox.field_background_color(), Color::GRAY);
}

#[test]
fn test_finished_func_is_done_func() {
    let first = Checkbox::new();
    let second = Checkbox::new();
    let keys = Rc::new(RefCell::new(Vec::new()));

    let items: Vec<Box<dyn FormItem>> = vec![Box::new(first.clone()), Box::new(second.clone())];
    for (index, item) in items.iter().enumerate() {
        let sink = keys.clone();
        item.set_form_attributes("", Color::YELLOW, Color::BLACK, Color::WHITE, Color::BLUE)
            .set_finished_func(Box::new(move |key| sink.borrow_mut().push((index, key))));
    }

    press(&first, Key::Tab);
    press(&second, Key::BackTab);
    press(&second, Key::Escape);

    assert_eq!(
        *keys.borrow(),
        vec![(0, Key::Tab), (1, Key::BackTab), (1, Key::Escape)]
    );
}

#[test]
fn test_inherent_finished_func() {
    let checkbox = Checkbox::new();
    let keys = Rc::new(RefCell::new(Vec::new()));
    let sink = keys.clone();
    checkbox.set_finished_func(move |key| sink.borrow_mut().push(key));

    press(&checkbox, Key::Escape);

    assert_eq!(*keys.borrow(), vec![Key::Escape]);
}

// ============================================================================
// Draw
// ============================================================================

#[test]
fn test_focused_unchecked_single_char_label() {
    let checkbox = focused("X", Rect::new(0, 0, 10, 1));
    let mut buf = Buffer::new(10, 1);
    buf.show_cursor(5, 0);

    checkbox.draw(&mut buf);

    let label = buf.get(0, 0).unwrap();
    assert_eq!(label.char, 'X');
    assert_eq!(label.fg, Color::YELLOW);

    let toggle = buf.get(1, 0).unwrap();
    assert_eq!(toggle.char, ' ');
    assert_eq!(toggle.bg, Color::WHITE);
    assert_eq!(toggle.fg, Color::BLUE);

    for x in 2..10 {
        assert_eq!(buf.get(x, 0).unwrap(), &Cell::default(), "cell {x}");
    }
    assert_eq!(buf.cursor(), None);
}

#[test]
fn test_unfocused_toggle_colors() {
    let checkbox = Checkbox::new();
    checkbox
        .set_label("Ok")
        .set_checked(true)
        .set_rect(Rect::new(0, 0, 10, 1));
    let mut buf = Buffer::new(10, 1);
    buf.show_cursor(5, 0);

    checkbox.draw(&mut buf);

    let toggle = buf.get(2, 0).unwrap();
    assert_eq!(toggle.char, 'X');
    assert_eq!(toggle.bg, Color::BLUE);
    assert_eq!(toggle.fg, Color::WHITE);
    // Unfocused checkboxes leave the cursor alone
    assert_eq!(buf.cursor(), Some((5, 0)));
}

#[test]
fn test_set_checked_then_draw() {
    for checked in [true, false] {
        let checkbox = Checkbox::new();
        let changes = record_changes(&checkbox);
        checkbox
            .set_label("Go")
            .set_rect(Rect::new(0, 0, 6, 1))
            .set_checked(checked);

        let buf = draw(&checkbox, 6, 1);

        let expected = if checked { 'X' } else { ' ' };
        assert_eq!(buf.get(2, 0).unwrap().char, expected);
        assert_eq!(buf.get(2, 0).unwrap().bg, Color::BLUE);
        assert!(changes.borrow().is_empty());
    }
}

#[test]
fn test_draw_is_idempotent() {
    let checkbox = focused("Twice", Rect::new(1, 1, 12, 3));
    checkbox
        .set_border(Border::Rounded)
        .set_title("T")
        .set_background_color(Color::GRAY)
        .set_checked(true);

    let mut buf = Buffer::new(14, 5);
    checkbox.draw(&mut buf);
    let first = buf.clone();
    checkbox.draw(&mut buf);

    assert_eq!(buf, first);
    assert!(checkbox.is_checked());
    assert!(checkbox.has_focus());
}

#[test]
fn test_draw_at_offset() {
    let checkbox = Checkbox::new();
    checkbox
        .set_label("Hi")
        .set_checked(true)
        .set_rect(Rect::new(3, 2, 6, 1));

    let buf = draw(&checkbox, 10, 4);

    assert_eq!(buf.get(3, 2).unwrap().char, 'H');
    assert_eq!(buf.get(4, 2).unwrap().char, 'i');
    assert_eq!(buf.get(5, 2).unwrap().char, 'X');
    assert_eq!(buf.get(2, 2).unwrap(), &Cell::default());
}

#[test]
fn test_bordered_draw_uses_inner_rect() {
    let checkbox = Checkbox::new();
    checkbox
        .set_label("Ok")
        .set_checked(true)
        .set_border(Border::Single)
        .set_rect(Rect::new(0, 0, 8, 3));

    let buf = draw(&checkbox, 8, 3);

    assert_eq!(buf.get(0, 0).unwrap().char, '┌');
    assert_eq!(buf.get(7, 2).unwrap().char, '┘');
    assert_eq!(buf.get(1, 1).unwrap().char, 'O');
    assert_eq!(buf.get(2, 1).unwrap().char, 'k');
    assert_eq!(buf.get(3, 1).unwrap().char, 'X');
    assert_eq!(buf.get(7, 1).unwrap().char, '│');
}

#[test]
fn test_long_label_leaves_room_for_toggle() {
    let checkbox = Checkbox::new();
    checkbox
        .set_label("Accept")
        .set_checked(true)
        .set_rect(Rect::new(0, 0, 5, 1));

    let buf = draw(&checkbox, 8, 1);

    let row: String = (0..5).map(|x| buf.get(x, 0).unwrap().char).collect();
    assert_eq!(row, "Acc…X");
    assert_eq!(buf.get(5, 0).unwrap(), &Cell::default());
}

#[test]
fn test_single_column_draws_only_toggle() {
    let checkbox = Checkbox::new();
    checkbox
        .set_label("Hidden")
        .set_checked(true)
        .set_rect(Rect::new(0, 0, 1, 1));

    let buf = draw(&checkbox, 3, 1);

    assert_eq!(buf.get(0, 0).unwrap().char, 'X');
    assert_eq!(buf.get(1, 0).unwrap(), &Cell::default());
}

#[test]
fn test_zero_height_draws_nothing() {
    let checkbox = focused("Nothing", Rect::new(0, 0, 10, 0));
    checkbox.set_checked(true);

    let buf = draw(&checkbox, 10, 2);

    assert_eq!(buf, Buffer::new(10, 2));
}

#[test]
fn test_zero_width_draws_nothing() {
    let checkbox = focused("Nothing", Rect::new(2, 0, 0, 1));
    checkbox.set_checked(true);

    let buf = draw(&checkbox, 10, 2);

    assert_eq!(buf, Buffer::new(10, 2));
}

#[test]
fn test_bordered_without_interior_skips_content() {
    // 2 wide leaves no interior columns, 2 tall leaves no interior rows
    for rect in [Rect::new(0, 0, 2, 3), Rect::new(0, 0, 6, 2), Rect::new(0, 0, 1, 1)] {
        let checkbox = focused("Label", rect);
        checkbox.set_border(Border::Single).set_checked(true);
        let mut buf = Buffer::new(8, 4);
        buf.show_cursor(7, 3);

        checkbox.draw(&mut buf);

        for y in 0..4 {
            for x in 0..8 {
                let ch = buf.get(x, y).unwrap().char;
                assert!(ch != 'X' && ch != 'L', "content drawn at ({x}, {y}) for {rect:?}");
            }
        }
        assert_eq!(buf.cursor(), Some((7, 3)));
    }
}

#[test]
fn test_draw_outside_screen_does_not_panic() {
    let checkbox = focused("Far away", Rect::new(u16::MAX - 2, u16::MAX - 1, 10, 5));
    checkbox.set_border(Border::Double).set_background_color(Color::RED);

    let buf = draw(&checkbox, 4, 4);

    assert_eq!(buf, Buffer::new(4, 4));
}

#[test]
fn test_form_background_fills_frame() {
    let checkbox = Checkbox::new();
    checkbox
        .set_form_attributes("A", Color::WHITE, Color::GRAY, Color::BLACK, Color::CYAN)
        .set_rect(Rect::new(0, 0, 4, 1));

    let buf = draw(&checkbox, 5, 1);

    assert_eq!(buf.get(0, 0).unwrap().bg, Color::GRAY);
    assert_eq!(buf.get(0, 0).unwrap().fg, Color::WHITE);
    assert_eq!(buf.get(1, 0).unwrap().bg, Color::CYAN);
    assert_eq!(buf.get(1, 0).unwrap().fg, Color::BLACK);
    assert_eq!(buf.get(3, 0).unwrap().bg, Color::GRAY);
    assert_eq!(buf.get(4, 0).unwrap(), &Cell::default());
}

#[test]
fn test_draw_through_trait_object() {
    let checkbox = Checkbox::new();
    checkbox.set_label("Dyn").set_rect(Rect::new(0, 0, 6, 1));
    let primitive: Box<dyn Primitive> = Box::new(checkbox);
    let mut buf = Buffer::new(6, 1);
    let screen: &mut dyn Screen = &mut buf;

    primitive.draw(screen);

    assert_eq!(buf.get(0, 0).unwrap().char, 'D');
    assert_eq!(buf.get(3, 0).unwrap().bg, Color::BLUE);
}
