//! Interactive terminal demo (impure shell).
//!
//! A chat screen with the composer bar at the bottom. The bar's panels,
//! buttons and bottom inset are driven entirely by the controller through
//! [`TerminalHost`].

pub mod constants;
pub mod host;
mod render;

pub use host::TerminalHost;
pub use render::{ComposerView, conversation_rows};

use crate::config::{KeyBindings, ResolvedConfig};
use crate::controller::{Controller, SideEffectError};
use crate::model::{ComposerAction, ComposerInput, KeyAction, Mode};
use crossterm::{
    ExecutableCommand,
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::cell::Cell;
use std::io::{self, Stdout};
use std::rc::Rc;
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, info};

/// Errors that can occur during TUI operations
#[derive(Debug, Error)]
pub enum TuiError {
    /// IO error during terminal operations
    #[error("Terminal IO error: {0}")]
    Io(#[from] io::Error),
}

const WELCOME: &str = "Tab opens the keyboard. Ctrl+e, Ctrl+p and Ctrl+v open the panels.";

/// Main TUI application
///
/// Generic over backend to support testing with TestBackend
pub struct TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    terminal: Terminal<B>,
    controller: Controller<TerminalHost>,
    key_bindings: KeyBindings,
    help: String,
    draft: String,
    messages: Vec<String>,
    /// Shared with the mode observer, which snaps back to the newest message.
    scroll_from_bottom: Rc<Cell<usize>>,
    status: Option<String>,
}

impl TuiApp<CrosstermBackend<Stdout>> {
    /// Put the terminal in raw mode on the alternate screen and build the app.
    pub fn new(config: &ResolvedConfig) -> Result<Self, TuiError> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        stdout.execute(EnterAlternateScreen)?;
        let terminal = Terminal::new(CrosstermBackend::new(stdout))?;
        Ok(Self::with_terminal(terminal, config))
    }

    /// Run the main event loop
    ///
    /// Returns when the user quits. Simulated keyboard notifications are
    /// drained on every tick, standing in for the system's animation delay.
    pub fn run(&mut self) -> Result<(), TuiError> {
        const TICK: Duration = Duration::from_millis(100);

        self.draw()?;

        loop {
            let mut dirty = false;
            if event::poll(TICK)? {
                match event::read()? {
                    Event::Key(key) if key.kind == KeyEventKind::Press => {
                        if self.handle_key(key) {
                            return Ok(());
                        }
                        dirty = true;
                    }
                    Event::Resize(..) => dirty = true,
                    _ => {}
                }
            }

            if self.pump_keyboard() {
                dirty = true;
            }
            if dirty {
                self.draw()?;
            }
        }
    }
}

impl<B> TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    /// Build the app on an already-initialized terminal.
    pub fn with_terminal(terminal: Terminal<B>, config: &ResolvedConfig) -> Self {
        let metrics = config.metrics();
        let host = TerminalHost::new(
            config.keyboard_height,
            metrics.safe_area_inset,
            Mode::initial(metrics.safe_area_inset),
        );
        let mut controller = Controller::new(host, metrics);

        let scroll_from_bottom = Rc::new(Cell::new(0));
        let sink = Rc::clone(&scroll_from_bottom);
        controller.subscribe(move |_| sink.set(0));

        let key_bindings = KeyBindings::default();
        let help = help_line(&key_bindings);

        Self {
            terminal,
            controller,
            key_bindings,
            help,
            draft: String::new(),
            messages: vec![WELCOME.to_string()],
            scroll_from_bottom,
            status: None,
        }
    }

    /// Current composer mode.
    pub fn mode(&self) -> Mode {
        self.controller.mode()
    }

    /// The terminal host the controller drives.
    pub fn host(&self) -> &TerminalHost {
        self.controller.host()
    }

    /// Text typed but not yet sent.
    pub fn draft(&self) -> &str {
        &self.draft
    }

    /// Sent messages, oldest first.
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    /// Lines scrolled up from the newest message.
    pub fn scroll_from_bottom(&self) -> usize {
        self.scroll_from_bottom.get()
    }

    /// Last host failure, shown in the status line.
    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    /// The underlying terminal, for inspecting test backends.
    pub fn terminal(&self) -> &Terminal<B> {
        &self.terminal
    }

    /// Handle a single key press.
    ///
    /// Returns true if the app should quit.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        if self.mode().keyboard_visible() {
            if let KeyCode::Char(c) = key.code {
                if !key
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
                {
                    self.draft.push(c);
                    return false;
                }
            }
        }

        let Some(action) = self.key_bindings.get(key) else {
            return false;
        };

        match action {
            KeyAction::Quit => return true,
            KeyAction::Composer(composer_action) => self.dispatch(composer_action.into()),
            KeyAction::Dismiss => self.dispatch(ComposerInput::Dismiss),
            KeyAction::ScrollUp => {
                let max = self.max_scroll();
                let next = (self.scroll_from_bottom.get() + 1).min(max);
                self.dispatch(ComposerInput::Dismiss);
                self.scroll_from_bottom.set(next);
            }
            KeyAction::ScrollDown => {
                self.dispatch(ComposerInput::Dismiss);
                let current = self.scroll_from_bottom.get();
                self.scroll_from_bottom.set(current.saturating_sub(1));
            }
            KeyAction::SendDraft => self.send_draft(),
            KeyAction::DeleteBackward => {
                if self.mode().keyboard_visible() {
                    self.draft.pop();
                }
            }
        }
        false
    }

    /// Feed queued keyboard notifications back into the controller.
    ///
    /// Returns true if any were delivered.
    pub fn pump_keyboard(&mut self) -> bool {
        let mut delivered = false;
        while let Some(signal) = self.controller.host_mut().take_keyboard_signal() {
            debug!(%signal, "delivering simulated keyboard notification");
            self.dispatch(signal.into());
            delivered = true;
        }
        delivered
    }

    fn dispatch(&mut self, input: ComposerInput) {
        match self.controller.apply(input) {
            Ok(_) => self.status = None,
            Err(SideEffectError { failures, .. }) => {
                let first = failures
                    .first()
                    .map(ToString::to_string)
                    .unwrap_or_default();
                self.status = Some(first);
            }
        }
    }

    fn send_draft(&mut self) {
        let text = self.draft.trim();
        if text.is_empty() {
            return;
        }
        self.messages.push(format!("me: {text}"));
        self.draft.clear();
        self.scroll_from_bottom.set(0);
    }

    fn max_scroll(&self) -> usize {
        let rows = self
            .terminal
            .size()
            .map(|size| {
                conversation_rows(
                    ratatui::layout::Rect::new(0, 0, size.width, size.height),
                    self.host().bottom_inset(),
                )
            })
            .unwrap_or(0);
        self.messages.len().saturating_sub(rows)
    }

    /// Render the current frame
    pub fn draw(&mut self) -> Result<(), TuiError> {
        let view = ComposerView {
            mode: self.controller.mode(),
            host: self.controller.host(),
            messages: &self.messages,
            scroll_from_bottom: self.scroll_from_bottom.get(),
            draft: &self.draft,
            status: self.status.as_deref(),
            help: &self.help,
        };
        self.terminal.draw(|frame| render::render(frame, &view))?;
        Ok(())
    }
}

fn key_label(key: &KeyEvent) -> String {
    let base = match key.code {
        KeyCode::Char(c) => c.to_string(),
        KeyCode::Tab => "Tab".to_string(),
        KeyCode::Esc => "Esc".to_string(),
        KeyCode::Enter => "Enter".to_string(),
        KeyCode::Backspace => "Bksp".to_string(),
        KeyCode::Up => "↑".to_string(),
        KeyCode::Down => "↓".to_string(),
        other => format!("{other:?}"),
    };
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        format!("^{base}")
    } else {
        base
    }
}

/// One-line key hint built from the active bindings.
pub fn help_line(bindings: &KeyBindings) -> String {
    let entries = [
        (KeyAction::Composer(ComposerAction::ToggleVoice), "voice"),
        (KeyAction::Composer(ComposerAction::ToggleEmoji), "emoji"),
        (KeyAction::Composer(ComposerAction::TogglePlus), "plus"),
        (
            KeyAction::Composer(ComposerAction::RequestKeyboard),
            "keyboard",
        ),
        (KeyAction::Dismiss, "dismiss"),
        (KeyAction::Quit, "quit"),
    ];

    entries
        .iter()
        .filter_map(|(action, label)| {
            let keys = bindings.keys_for(*action);
            if keys.is_empty() {
                return None;
            }
            let keys: Vec<String> = keys.iter().map(key_label).collect();
            Some(format!("{} {label}", keys.join("/")))
        })
        .collect::<Vec<_>>()
        .join("  ")
}

/// Set up the terminal, run the demo and always restore the terminal.
///
/// Note: Logging must be initialized by caller before calling this function.
pub fn run(config: &ResolvedConfig) -> Result<(), TuiError> {
    info!(
        keyboard_height = %config.keyboard_height,
        safe_area_inset = %config.safe_area_inset,
        "starting terminal composer"
    );
    let result = TuiApp::new(config).and_then(|mut app| app.run());

    restore_terminal()?;

    result
}

/// Restore terminal to normal state
fn restore_terminal() -> Result<(), TuiError> {
    disable_raw_mode()?;
    io::stdout().execute(LeaveAlternateScreen)?;
    Ok(())
}

#[cfg(test)]
#[path = "app_tests.rs"]
mod tests;
