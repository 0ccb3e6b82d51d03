//! Tests for the terminal demo: key handling, simulated keyboard and rendering.

use super::*;
use crate::model::{Height, PanelId};
use ratatui::backend::TestBackend;

// ===== Test Helpers =====

fn create_test_app() -> TuiApp<TestBackend> {
    let terminal = Terminal::new(TestBackend::new(80, 30)).unwrap();
    TuiApp::with_terminal(terminal, &ResolvedConfig::default())
}

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn ctrl(c: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
}

fn buffer_to_string(buffer: &ratatui::buffer::Buffer) -> String {
    let area = buffer.area();
    let mut lines = Vec::new();
    for y in area.top()..area.bottom() {
        let mut line = String::new();
        for x in area.left()..area.right() {
            line.push_str(buffer[(x, y)].symbol());
        }
        lines.push(line.trim_end().to_string());
    }
    lines.join("\n")
}

fn rendered(app: &mut TuiApp<TestBackend>) -> String {
    app.draw().unwrap();
    buffer_to_string(app.terminal().backend().buffer())
}

fn h(v: f64) -> Height {
    Height::new(v).unwrap()
}

// ===== Error conversion =====

#[test]
fn tui_error_from_io_error() {
    let io_err = io::Error::other("test error");
    let tui_err: TuiError = io_err.into();
    assert!(matches!(tui_err, TuiError::Io(_)));
}

// ===== Simulated keyboard =====

#[test]
fn tab_raises_keyboard_after_pump() {
    let mut app = create_test_app();

    app.handle_key(key(KeyCode::Tab));
    assert_eq!(app.mode(), Mode::Typing { keyboard_height: None });
    assert!(app.host().is_focused());

    assert!(app.pump_keyboard());
    assert_eq!(
        app.mode(),
        Mode::Typing {
            keyboard_height: Some(h(291.0))
        }
    );
    assert_eq!(app.host().bottom_inset(), 291.0);
    assert!(!app.pump_keyboard(), "queue drained");
}

#[test]
fn opening_emoji_from_typing_keeps_panel_after_keyboard_hides() {
    let mut app = create_test_app();
    app.handle_key(key(KeyCode::Tab));
    app.pump_keyboard();

    app.handle_key(ctrl('e'));
    assert!(app.pump_keyboard(), "focus release queues will-hide");

    assert!(matches!(app.mode(), Mode::EmojiPicker { .. }));
    assert_eq!(app.host().visible_panel(), Some(PanelId::Emoji));
    assert_eq!(app.host().bottom_inset(), 400.0);
}

#[test]
fn keyboard_button_in_emoji_panel_restores_known_height() {
    let mut app = create_test_app();
    app.handle_key(key(KeyCode::Tab));
    app.pump_keyboard();
    app.handle_key(ctrl('e'));
    app.pump_keyboard();

    app.handle_key(key(KeyCode::Tab));
    assert_eq!(
        app.mode(),
        Mode::Typing {
            keyboard_height: Some(h(291.0))
        }
    );
    assert_eq!(app.host().visible_panel(), None);
}

#[test]
fn esc_dismisses_keyboard_back_to_idle() {
    let mut app = create_test_app();
    app.handle_key(key(KeyCode::Tab));
    app.pump_keyboard();

    app.handle_key(key(KeyCode::Esc));
    app.pump_keyboard();

    assert!(matches!(app.mode(), Mode::Idle { .. }));
    assert!(!app.host().is_focused());
    assert_eq!(app.host().bottom_inset(), 34.0);
}

// ===== Draft editing =====

#[test]
fn typing_edits_draft_and_enter_sends() {
    let mut app = create_test_app();
    app.handle_key(key(KeyCode::Tab));
    app.pump_keyboard();

    for c in "hiq".chars() {
        assert!(!app.handle_key(key(KeyCode::Char(c))), "q types while typing");
    }
    app.handle_key(key(KeyCode::Backspace));
    assert_eq!(app.draft(), "hi");

    app.handle_key(key(KeyCode::Enter));
    assert_eq!(app.draft(), "");
    assert_eq!(app.messages().last().map(String::as_str), Some("me: hi"));
}

#[test]
fn characters_are_ignored_when_not_typing() {
    let mut app = create_test_app();
    app.handle_key(key(KeyCode::Char('x')));
    assert_eq!(app.draft(), "");
}

#[test]
fn blank_draft_is_not_sent() {
    let mut app = create_test_app();
    app.handle_key(key(KeyCode::Tab));
    app.handle_key(key(KeyCode::Char(' ')));
    app.handle_key(key(KeyCode::Enter));
    assert_eq!(app.messages().len(), 1);
}

// ===== Quit =====

#[test]
fn q_quits_when_not_typing() {
    let mut app = create_test_app();
    assert!(app.handle_key(key(KeyCode::Char('q'))));
}

#[test]
fn ctrl_c_quits_while_typing() {
    let mut app = create_test_app();
    app.handle_key(key(KeyCode::Tab));
    assert!(app.handle_key(ctrl('c')));
}

// ===== Scrolling and the observer =====

#[test]
fn state_change_scrolls_to_bottom() {
    let mut app = create_test_app();
    app.handle_key(key(KeyCode::Tab));
    for i in 0..40 {
        for c in format!("m{i}").chars() {
            app.handle_key(key(KeyCode::Char(c)));
        }
        app.handle_key(key(KeyCode::Enter));
    }
    app.handle_key(key(KeyCode::Esc));

    app.handle_key(key(KeyCode::Up));
    app.handle_key(key(KeyCode::Up));
    assert_eq!(app.scroll_from_bottom(), 2);

    app.handle_key(ctrl('p'));
    assert_eq!(app.scroll_from_bottom(), 0, "observer snaps to newest");
}

#[test]
fn scrolling_up_collapses_the_bar() {
    let mut app = create_test_app();
    app.handle_key(ctrl('p'));
    assert!(matches!(app.mode(), Mode::PlusMenu { .. }));

    app.handle_key(key(KeyCode::Up));
    assert!(matches!(app.mode(), Mode::Idle { .. }));
    assert_eq!(app.scroll_from_bottom(), 0, "nothing to scroll yet");
}

// ===== Rendering =====

#[test]
fn idle_frame_shows_buttons_and_placeholder() {
    let mut app = create_test_app();
    let screen = rendered(&mut app);

    assert!(screen.contains("Conversation"));
    assert!(screen.contains("[voice]"));
    assert!(screen.contains("[emoji]"));
    assert!(screen.contains("[plus]"));
    assert!(screen.contains("Message"));
    assert!(screen.contains("idle(34)"));
}

#[test]
fn emoji_panel_frame_swaps_button_to_keyboard() {
    let mut app = create_test_app();
    app.handle_key(ctrl('e'));
    let screen = rendered(&mut app);

    assert!(screen.contains("😀"));
    assert!(screen.contains("[keyboard]"));
    assert!(!screen.contains("[emoji]"));
    assert!(screen.contains("emoji_picker"));
}

#[test]
fn recording_frame_shows_hold_to_talk() {
    let mut app = create_test_app();
    app.handle_key(ctrl('v'));
    let screen = rendered(&mut app);

    assert!(screen.contains("Hold to talk"));
    assert!(screen.contains("[keyboard]"));
}

#[test]
fn typing_frame_shows_keyboard_and_draft() {
    let mut app = create_test_app();
    app.handle_key(key(KeyCode::Tab));
    app.pump_keyboard();
    for c in "hello".chars() {
        app.handle_key(key(KeyCode::Char(c)));
    }
    let screen = rendered(&mut app);

    assert!(screen.contains(" keyboard "));
    assert!(screen.contains("q w e r t y u i o p"));
    assert!(screen.contains("hello_"));
    assert!(screen.contains("typing(291)"));
}

#[test]
fn help_line_lists_bound_keys() {
    let help = help_line(&KeyBindings::default());
    insta::assert_snapshot!(help, @"^v voice  ^e emoji  ^p plus  Tab keyboard  Esc dismiss  q/^c quit");
}
