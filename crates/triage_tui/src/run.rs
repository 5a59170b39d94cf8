//! TUI run loop: terminal setup, event handling, draw. Optional message feed.
//!
//! Key events are read in a dedicated thread so the main loop never blocks on
//! terminal input; this keeps the UI responsive when the feed hangs or the
//! terminal is slow.

use std::io;
use std::sync::mpsc;
use std::time::Duration;

use crossterm::event::{
    self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, KeyModifiers,
    MouseEventKind,
};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use tokio::sync::mpsc as tokio_mpsc;
use tracing::{info, warn};

use triage_core::ChatMessage;

use crate::state::{Screen, TuiState};
use crate::view;

/// Run the TUI standalone: alternate screen, raw mode, event loop. No feed;
/// Enter echoes the submitted text back as an assistant reply.
pub fn run_tui(mut state: TuiState) -> anyhow::Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    state.push_trace_line("[log] TUI started (echo mode). Ctrl+D for runtime logs.".to_string());
    let result = run_loop(&mut terminal, &mut state, None, None, None);

    execute!(terminal.backend_mut(), DisableMouseCapture, LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    disable_raw_mode()?;

    result
}

/// Run the TUI with a message feed: incoming [ChatMessage]s arrive on
/// `message_rx`, user submissions go out on `submit_tx`. If `log_rx` is
/// provided, runtime log lines (tracing) are pushed to the debug traces
/// screen (Ctrl+D).
pub fn run_tui_with_feed(
    mut state: TuiState,
    mut message_rx: tokio_mpsc::Receiver<ChatMessage>,
    submit_tx: tokio_mpsc::Sender<String>,
    log_rx: Option<tokio_mpsc::Receiver<String>>,
) -> anyhow::Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    state.push_trace_line("[log] TUI started with feed. Ctrl+D shows tracing output.".to_string());
    let result = run_loop(
        &mut terminal,
        &mut state,
        Some(&mut message_rx),
        Some(&submit_tx),
        log_rx,
    );

    execute!(terminal.backend_mut(), DisableMouseCapture, LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    disable_raw_mode()?;

    result
}

const STATUS_TIMEOUT: Duration = Duration::from_secs(5);

fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    state: &mut TuiState,
    mut message_rx: Option<&mut tokio_mpsc::Receiver<ChatMessage>>,
    submit_tx: Option<&tokio_mpsc::Sender<String>>,
    mut log_rx: Option<tokio_mpsc::Receiver<String>>,
) -> anyhow::Result<()> {
    let (key_tx, key_rx) = mpsc::channel();
    let _reader = std::thread::spawn(move || {
        loop {
            if event::poll(Duration::from_millis(50)).unwrap_or(false)
                && let Ok(ev) = event::read()
            {
                let _ = key_tx.send(ev);
            }
        }
    });

    loop {
        // Drain runtime log lines into debug traces (multi-line logs split)
        if let Some(ref mut rx) = log_rx {
            while let Ok(line) = rx.try_recv() {
                for l in line.split('\n') {
                    state.push_trace_line(l.to_string());
                }
            }
        }
        // Drain incoming messages from the feed
        if let Some(ref mut rx) = message_rx {
            while let Ok(message) = rx.try_recv() {
                state.push_message(message);
            }
        }
        if state.auto_scroll {
            state.scroll = 0;
        }

        // Status timeout: clear transient status after 5s
        if let Some(set_at) = state.status_set_at
            && set_at.elapsed() > STATUS_TIMEOUT
        {
            state.status.clear();
            state.status_set_at = None;
            state.needs_redraw = true;
        }

        if state.needs_redraw {
            terminal.draw(|f| view::draw(f, state, f.area()))?;
            state.needs_redraw = false;
        }

        if let Ok(ev) = key_rx.try_recv() {
            match ev {
                Event::Key(e) => {
                    if e.kind != KeyEventKind::Press {
                        continue;
                    }
                    match e.code {
                        KeyCode::Char('d') if e.modifiers.contains(KeyModifiers::CONTROL) => {
                            state.screen = match state.screen {
                                Screen::Main => Screen::DebugTraces,
                                Screen::DebugTraces => Screen::Main,
                            };
                            state.needs_redraw = true;
                        }
                        KeyCode::Char('c') if e.modifiers.contains(KeyModifiers::CONTROL) => break,
                        KeyCode::Char('q') if state.input_buffer.is_empty() => break,
                        KeyCode::Esc if state.screen == Screen::DebugTraces => {
                            state.screen = Screen::Main;
                            state.needs_redraw = true;
                        }
                        KeyCode::Up if state.screen == Screen::DebugTraces => {
                            state.trace_scroll_up(1)
                        }
                        KeyCode::Down if state.screen == Screen::DebugTraces => {
                            state.trace_scroll_down(1)
                        }
                        KeyCode::PageUp if state.screen == Screen::DebugTraces => {
                            state.trace_scroll_up(10)
                        }
                        KeyCode::PageDown if state.screen == Screen::DebugTraces => {
                            state.trace_scroll_down(10)
                        }
                        KeyCode::Up if state.screen == Screen::Main => state.scroll_up(1),
                        KeyCode::Down if state.screen == Screen::Main => state.scroll_down(1),
                        KeyCode::PageUp if state.screen == Screen::Main => state.scroll_up(5),
                        KeyCode::PageDown if state.screen == Screen::Main => state.scroll_down(5),
                        KeyCode::Enter if state.screen == Screen::Main => {
                            submit_input(state, submit_tx);
                        }
                        KeyCode::Backspace if state.screen == Screen::Main => {
                            state.input_backspace()
                        }
                        KeyCode::Char('u')
                            if e.modifiers.contains(KeyModifiers::CONTROL)
                                && state.screen == Screen::Main =>
                        {
                            state.input_clear_line()
                        }
                        KeyCode::Char('k')
                            if e.modifiers.contains(KeyModifiers::CONTROL)
                                && state.screen == Screen::Main =>
                        {
                            state.input_kill_to_end()
                        }
                        KeyCode::Char('y')
                            if e.modifiers.contains(KeyModifiers::CONTROL)
                                && state.input_buffer.is_empty()
                                && state.screen == Screen::Main =>
                        {
                            copy_last_reply_to_clipboard(state);
                        }
                        KeyCode::Char('d')
                            if state.input_buffer.is_empty() && state.screen == Screen::Main =>
                        {
                            if state.toggle_last_details() {
                                info!("details toggled");
                            }
                        }
                        KeyCode::Char(c) if state.screen == Screen::Main => state.input_insert(c),
                        KeyCode::Left if state.screen == Screen::Main => state.input_cursor_left(),
                        KeyCode::Right if state.screen == Screen::Main => {
                            state.input_cursor_right()
                        }
                        KeyCode::Home if state.screen == Screen::Main => state.input_cursor_home(),
                        KeyCode::End if state.screen == Screen::Main => state.input_cursor_end(),
                        KeyCode::Delete if state.screen == Screen::Main => state.input_delete(),
                        _ => {}
                    }
                }
                Event::Resize(_, _) => {
                    state.cache_dirty = true;
                    state.needs_redraw = true;
                }
                Event::Mouse(me) => match me.kind {
                    MouseEventKind::ScrollUp => {
                        if state.screen == Screen::DebugTraces {
                            state.trace_scroll_up(3);
                        } else {
                            state.scroll_up(3);
                        }
                        state.needs_redraw = true;
                    }
                    MouseEventKind::ScrollDown => {
                        if state.screen == Screen::DebugTraces {
                            state.trace_scroll_down(3);
                        } else {
                            state.scroll_down(3);
                        }
                        state.needs_redraw = true;
                    }
                    _ => {}
                },
                _ => {}
            }
        } else {
            std::thread::sleep(Duration::from_millis(50));
        }
    }
    Ok(())
}

/// Submit the current input line: push it as a user message and hand it to the
/// feed, or echo it back when running standalone. A full feed channel surfaces
/// in the header status instead of dropping the submission silently.
fn submit_input(state: &mut TuiState, submit_tx: Option<&tokio_mpsc::Sender<String>>) {
    let line = state.input_take();
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return;
    }
    info!(chars = trimmed.chars().count(), "message submitted");
    state.push_user(trimmed.to_string());
    match submit_tx {
        Some(tx) => {
            if let Err(err) = tx.try_send(trimmed.to_string()) {
                warn!(%err, "could not hand submission to the feed");
                state.status = "Could not send message".to_string();
                state.has_error = true;
                state.status_set_at = Some(std::time::Instant::now());
                state.needs_redraw = true;
            }
        }
        None => {
            state.push_assistant(format!("You said: {}", trimmed), None);
        }
    }
}

/// Copy the last assistant reply to the system clipboard (Ctrl+Y, input empty).
fn copy_last_reply_to_clipboard(state: &mut TuiState) {
    let text = state.last_assistant_text().unwrap_or_default().to_string();
    if text.is_empty() {
        return;
    }
    if cli_clipboard::set_contents(text).is_ok() {
        state.status = "Copied to clipboard".to_string();
        state.status_set_at = Some(std::time::Instant::now());
        state.needs_redraw = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state_with_input(text: &str) -> TuiState {
        let mut state = TuiState::new();
        for c in text.chars() {
            state.input_insert(c);
        }
        state
    }

    #[test]
    fn submit_echoes_without_feed() {
        let mut state = state_with_input("hi");
        submit_input(&mut state, None);
        assert_eq!(state.messages.len(), 2);
        assert!(state.input_buffer.is_empty());
        assert!(!state.has_error);
    }

    #[test]
    fn submit_sends_to_feed() {
        let (tx, mut rx) = tokio_mpsc::channel::<String>(8);
        let mut state = state_with_input("hi");
        submit_input(&mut state, Some(&tx));
        assert_eq!(rx.try_recv().ok().as_deref(), Some("hi"));
        assert_eq!(state.messages.len(), 1);
        assert!(!state.has_error);
    }

    #[test]
    fn full_feed_surfaces_error_in_status() {
        let (tx, _rx) = tokio_mpsc::channel::<String>(1);
        tx.try_send("occupied".to_string()).unwrap();
        let mut state = state_with_input("hi");
        submit_input(&mut state, Some(&tx));
        assert!(state.has_error);
        assert!(!state.status.is_empty());
        assert!(state.status_set_at.is_some());
        assert_eq!(state.messages.len(), 1);
    }

    #[test]
    fn blank_input_is_ignored() {
        let mut state = state_with_input("   ");
        submit_input(&mut state, None);
        assert!(state.messages.is_empty());
        assert!(state.input_buffer.is_empty());
    }
}
