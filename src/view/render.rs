//! Frame rendering for the terminal demo.
//!
//! Pure function of the app state: nothing here talks to the controller.

use crate::model::{ButtonState, Mode, PanelId};
use crate::view::constants::{
    BUTTON_WIDTH, COMPOSER_ROW_HEIGHT, HELP_LINE_HEIGHT, rows_for_points,
};
use crate::view::host::TerminalHost;
use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use unicode_width::UnicodeWidthChar;

const EMOJI_ROWS: [&str; 3] = ["😀 😂 😍 🥲 😎 🤔", "👍 👏 🙏 💪 🎉 ❤️", "🍕 ☕ 🌧️ 🌈 🚀 ⭐"];
const PLUS_ITEMS: &str = "Photo   Camera   Location   File";
const KEYBOARD_ROWS: [&str; 3] = [
    "q w e r t y u i o p",
    " a s d f g h j k l",
    "  z x c v b n m",
];
const PLACEHOLDER: &str = "Message";
const HOLD_TO_TALK: &str = "Hold to talk";

/// Everything one frame shows.
pub struct ComposerView<'a> {
    /// Mode to draw.
    pub mode: Mode,
    /// Host view state: buttons, panel, inset.
    pub host: &'a TerminalHost,
    /// Sent messages, oldest first.
    pub messages: &'a [String],
    /// Lines scrolled up from the newest message.
    pub scroll_from_bottom: usize,
    /// Unsent text.
    pub draft: &'a str,
    /// Error shown above the help line.
    pub status: Option<&'a str>,
    /// Key help text.
    pub help: &'a str,
}

struct Areas {
    conversation: Rect,
    composer: Rect,
    panel: Rect,
    help: Rect,
}

fn split(area: Rect, panel_rows: u16) -> Areas {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(3),
            Constraint::Length(COMPOSER_ROW_HEIGHT),
            Constraint::Length(panel_rows),
            Constraint::Length(HELP_LINE_HEIGHT),
        ])
        .split(area);
    Areas {
        conversation: chunks[0],
        composer: chunks[1],
        panel: chunks[2],
        help: chunks[3],
    }
}

/// Visible conversation rows inside the border for a frame of `area`.
pub fn conversation_rows(area: Rect, bottom_inset: f64) -> usize {
    let areas = split(area, rows_for_points(bottom_inset));
    usize::from(areas.conversation.height.saturating_sub(2))
}

/// Draw one frame.
pub fn render(frame: &mut Frame, view: &ComposerView<'_>) {
    let areas = split(frame.area(), rows_for_points(view.host.bottom_inset()));

    render_conversation(frame, areas.conversation, view);
    render_composer(frame, areas.composer, view);
    render_panel(frame, areas.panel, view.host);
    render_help(frame, areas.help, view);
}

fn render_conversation(frame: &mut Frame, area: Rect, view: &ComposerView<'_>) {
    let visible = usize::from(area.height.saturating_sub(2));
    let top = view
        .messages
        .len()
        .saturating_sub(visible)
        .saturating_sub(view.scroll_from_bottom);
    let lines: Vec<Line> = view
        .messages
        .iter()
        .map(|m| Line::from(m.as_str()))
        .collect();

    let paragraph = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title(" Conversation "))
        .scroll((u16::try_from(top).unwrap_or(u16::MAX), 0));
    frame.render_widget(paragraph, area);
}

fn button(state: &ButtonState) -> Paragraph<'static> {
    let label = state.icon().unwrap_or(state.action.id());
    let style = if state.selected {
        Style::default().add_modifier(Modifier::REVERSED)
    } else {
        Style::default()
    };
    Paragraph::new(Span::styled(format!("[{label}]"), style))
        .block(Block::default().borders(Borders::ALL))
}

/// Longest suffix of `text` that fits in `width` columns.
fn tail_fitting(text: &str, width: usize) -> &str {
    let mut used = 0;
    let mut start = text.len();
    for (idx, c) in text.char_indices().rev() {
        used += c.width().unwrap_or(0);
        if used > width {
            break;
        }
        start = idx;
    }
    &text[start..]
}

fn render_composer(frame: &mut Frame, area: Rect, view: &ComposerView<'_>) {
    let cells = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(BUTTON_WIDTH),
            Constraint::Min(1),
            Constraint::Length(BUTTON_WIDTH),
            Constraint::Length(BUTTON_WIDTH),
        ])
        .split(area);

    let buttons = view.host.buttons();
    if let [left, emoji, plus] = buttons {
        frame.render_widget(button(left), cells[0]);
        frame.render_widget(button(emoji), cells[2]);
        frame.render_widget(button(plus), cells[3]);
    }

    let field_width = usize::from(cells[1].width.saturating_sub(3));
    let content = if matches!(view.mode, Mode::Recording { .. }) {
        Line::from(Span::styled(
            HOLD_TO_TALK,
            Style::default().add_modifier(Modifier::BOLD),
        ))
    } else if view.draft.is_empty() && !view.host.is_focused() {
        Line::from(Span::styled(
            PLACEHOLDER,
            Style::default().fg(Color::DarkGray),
        ))
    } else {
        let mut spans = vec![Span::raw(tail_fitting(view.draft, field_width))];
        if view.host.is_focused() {
            spans.push(Span::styled(
                "_",
                Style::default().add_modifier(Modifier::SLOW_BLINK),
            ));
        }
        Line::from(spans)
    };

    frame.render_widget(
        Paragraph::new(content).block(Block::default().borders(Borders::ALL)),
        cells[1],
    );
}

fn render_panel(frame: &mut Frame, area: Rect, host: &TerminalHost) {
    if area.height == 0 {
        return;
    }

    let (title, rows): (&str, Vec<&str>) = match host.visible_panel() {
        Some(PanelId::Emoji) => (" emoji ", EMOJI_ROWS.to_vec()),
        Some(PanelId::Plus) => (" plus ", vec![PLUS_ITEMS]),
        Some(PanelId::Voice) => (" voice ", Vec::new()),
        None if host.is_focused() => (" keyboard ", KEYBOARD_ROWS.to_vec()),
        None => return,
    };

    let lines: Vec<Line> = rows.into_iter().map(Line::from).collect();
    frame.render_widget(
        Paragraph::new(lines).block(Block::default().borders(Borders::TOP).title(title)),
        area,
    );
}

fn render_help(frame: &mut Frame, area: Rect, view: &ComposerView<'_>) {
    let mut spans = vec![
        Span::styled(
            format!(" {} ", view.mode),
            Style::default().add_modifier(Modifier::REVERSED),
        ),
        Span::raw(" "),
    ];
    if let Some(status) = view.status {
        spans.push(Span::styled(status, Style::default().fg(Color::Red)));
        spans.push(Span::raw(" "));
    }
    spans.push(Span::styled(view.help, Style::default().fg(Color::DarkGray)));
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tail_fitting_keeps_whole_text_when_it_fits() {
        assert_eq!(tail_fitting("hello", 10), "hello");
    }

    #[test]
    fn tail_fitting_drops_leading_chars() {
        assert_eq!(tail_fitting("hello world", 5), "world");
    }

    #[test]
    fn tail_fitting_counts_wide_chars() {
        assert_eq!(tail_fitting("ab😀😀", 4), "😀😀");
        assert_eq!(tail_fitting("ab😀😀", 3), "😀");
    }

    #[test]
    fn tail_fitting_zero_width() {
        assert_eq!(tail_fitting("abc", 0), "");
    }
}
