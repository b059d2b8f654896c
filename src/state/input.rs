//! Input Module - Event source and UI-substrate control state.
//!
//! Bridges crossterm's event system with the widget's four logical events:
//!
//! - `ChangeClicked` - Enter, or a click on the Change button
//! - `IgnoreClicked` - Esc, or a click on the Ignore button
//! - `SuggestionSelected` - Up/Down, or a click on a suggestion row
//! - `WordEdited` - typed edits, collapsed by a 500 ms debounce
//!
//! This module also owns the live state of the two interactive controls (the
//! text input's edit buffer and the suggestion list's selection), the way a
//! DOM input owns its value between renders. The derivation layer never reads
//! any of it ambiently - everything it needs arrives as a `WidgetEvent`, and
//! the renderer reads the control signals only to draw the controls.
//!
//! This layer cannot fail: events come from the terminal, and routing is
//! total.

use std::cell::RefCell;
use std::io::{self, stdout};
use std::time::{Duration, Instant};

use crossterm::event::{
    poll, read, DisableMouseCapture, EnableMouseCapture, Event as CrosstermEvent, KeyCode,
    KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use crossterm::execute;
use spark_signals::{signal, Signal};
use tracing::trace;

use crate::types::{HitRegion, HitTarget, SuggestionOption};

/// Inactivity window before a typed edit is emitted.
pub const DEBOUNCE_DELAY: Duration = Duration::from_millis(500);

// =============================================================================
// WIDGET EVENTS
// =============================================================================

/// The four logical events the state derivation folds over.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WidgetEvent {
    ChangeClicked,
    IgnoreClicked,
    /// Carries the chosen suggestion text.
    SuggestionSelected(String),
    /// Carries the typed text, after the debounce window has elapsed.
    WordEdited(String),
}

/// What the router wants the runtime to do with a raw terminal event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputAction {
    /// Feed this widget event into the store.
    Emit(WidgetEvent),
    /// Ctrl+C - graceful shutdown.
    Shutdown,
    /// Terminal was resized.
    Resize(u16, u16),
    /// Consumed (or irrelevant) without producing a widget event.
    None,
}

// =============================================================================
// DEBOUNCER
// =============================================================================

/// Timer-based suspension of the word-edit stream.
///
/// Each edit re-arms the deadline; `poll` releases the pending value once the
/// inactivity window has elapsed. Intermediate values are collapsed - only
/// the latest survives.
#[derive(Debug, Default)]
pub struct Debouncer {
    pending: Option<String>,
    deadline: Option<Instant>,
}

impl Debouncer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an edit and re-arm the deadline.
    pub fn note(&mut self, value: String, now: Instant) {
        self.pending = Some(value);
        self.deadline = Some(now + DEBOUNCE_DELAY);
    }

    /// Release the pending value if the window has elapsed.
    pub fn poll(&mut self, now: Instant) -> Option<String> {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                self.pending.take()
            }
            _ => None,
        }
    }

    /// Drop any pending value without emitting it.
    pub fn clear(&mut self) {
        self.pending = None;
        self.deadline = None;
    }

    pub fn is_armed(&self) -> bool {
        self.pending.is_some()
    }
}

// =============================================================================
// CONTROL STATE
// =============================================================================

thread_local! {
    // The text input's live buffer. Signals so the renderer repaints per edit.
    static EDIT_VALUE: Signal<String> = signal(String::new());
    static EDIT_CURSOR: Signal<usize> = signal(0);

    // The suggestion control's selection, None = "no selection".
    static SELECTION: Signal<Option<usize>> = signal(None);

    // Options the suggestion control was last rendered with. Bound by the
    // render effect, read when routing Up/Down and row clicks.
    static BOUND_OPTIONS: RefCell<Vec<SuggestionOption>> = const { RefCell::new(Vec::new()) };

    // Hit regions of the last frame, for mouse routing.
    static HIT_REGIONS: RefCell<Vec<HitRegion>> = const { RefCell::new(Vec::new()) };

    static DEBOUNCER: RefCell<Debouncer> = RefCell::new(Debouncer::new());
}

pub fn edit_value_signal() -> Signal<String> {
    EDIT_VALUE.with(|s| s.clone())
}

pub fn edit_cursor_signal() -> Signal<usize> {
    EDIT_CURSOR.with(|s| s.clone())
}

pub fn selection_signal() -> Signal<Option<usize>> {
    SELECTION.with(|s| s.clone())
}

pub fn selection() -> Option<usize> {
    SELECTION.with(|s| s.get())
}

pub fn edit_value() -> String {
    EDIT_VALUE.with(|s| s.get())
}

/// Bind the options the suggestion control is currently showing.
/// Called by the render effect - the driver keeps the control in sync with
/// what was actually drawn.
pub fn bind_options(options: Vec<SuggestionOption>) {
    BOUND_OPTIONS.with(|o| *o.borrow_mut() = options);
}

/// Publish the hit regions of the frame that was just drawn.
pub fn set_hit_regions(regions: Vec<HitRegion>) {
    HIT_REGIONS.with(|r| *r.borrow_mut() = regions);
}

/// Find the hit target under a terminal coordinate.
pub fn hit_test(x: u16, y: u16) -> Option<HitTarget> {
    HIT_REGIONS.with(|regions| {
        regions
            .borrow()
            .iter()
            .find(|r| r.contains(x, y))
            .map(|r| r.target)
    })
}

/// `UiCommand::ClearSelection` - reset the suggestion control.
pub fn clear_selection() {
    SELECTION.with(|s| s.set(None));
}

/// `UiCommand::ClearInput` - reset the input control, cancelling any
/// in-flight debounced edit (the advance supersedes it).
pub fn clear_input() {
    EDIT_VALUE.with(|s| s.set(String::new()));
    EDIT_CURSOR.with(|s| s.set(0));
    DEBOUNCER.with(|d| d.borrow_mut().clear());
}

/// Release the pending word edit if the debounce window has elapsed.
pub fn poll_debounce(now: Instant) -> Option<WidgetEvent> {
    DEBOUNCER
        .with(|d| d.borrow_mut().poll(now))
        .map(WidgetEvent::WordEdited)
}

/// Reset all control state (for testing).
pub fn reset_input_state() {
    clear_selection();
    clear_input();
    bind_options(Vec::new());
    set_hit_regions(Vec::new());
}

// =============================================================================
// EVENT ROUTING
// =============================================================================

/// Route one raw terminal event.
pub fn route_event(event: CrosstermEvent, now: Instant) -> InputAction {
    match event {
        CrosstermEvent::Key(key) => route_key(key, now),
        CrosstermEvent::Mouse(mouse) => route_mouse(mouse),
        CrosstermEvent::Resize(w, h) => InputAction::Resize(w, h),
        _ => InputAction::None,
    }
}

fn route_key(key: KeyEvent, now: Instant) -> InputAction {
    if key.kind != KeyEventKind::Press {
        return InputAction::None;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) {
        if let KeyCode::Char('c') = key.code {
            return InputAction::Shutdown;
        }
        // Don't route other modified chars into the input.
        return InputAction::None;
    }

    match key.code {
        KeyCode::Enter => InputAction::Emit(WidgetEvent::ChangeClicked),
        KeyCode::Esc => InputAction::Emit(WidgetEvent::IgnoreClicked),
        KeyCode::Up => move_selection(-1),
        KeyCode::Down => move_selection(1),
        KeyCode::Char(ch) => {
            insert_char(ch, now);
            InputAction::None
        }
        KeyCode::Backspace => {
            delete_backward(now);
            InputAction::None
        }
        KeyCode::Delete => {
            delete_forward(now);
            InputAction::None
        }
        KeyCode::Left => {
            move_cursor(-1);
            InputAction::None
        }
        KeyCode::Right => {
            move_cursor(1);
            InputAction::None
        }
        KeyCode::Home => {
            EDIT_CURSOR.with(|s| s.set(0));
            InputAction::None
        }
        KeyCode::End => {
            let len = EDIT_VALUE.with(|s| s.get()).chars().count();
            EDIT_CURSOR.with(|s| s.set(len));
            InputAction::None
        }
        _ => InputAction::None,
    }
}

fn route_mouse(mouse: MouseEvent) -> InputAction {
    if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
        return InputAction::None;
    }

    match hit_test(mouse.column, mouse.row) {
        Some(HitTarget::ChangeButton) => InputAction::Emit(WidgetEvent::ChangeClicked),
        Some(HitTarget::IgnoreButton) => InputAction::Emit(WidgetEvent::IgnoreClicked),
        Some(HitTarget::SuggestionRow(index)) => select_row(index),
        None => InputAction::None,
    }
}

/// Move the selection by one row and emit the selected text.
fn move_selection(delta: i32) -> InputAction {
    let count = BOUND_OPTIONS.with(|o| o.borrow().len());
    if count == 0 {
        return InputAction::None;
    }

    let next = match SELECTION.with(|s| s.get()) {
        None => 0,
        Some(current) => {
            let raw = current as i32 + delta;
            raw.clamp(0, count as i32 - 1) as usize
        }
    };

    select_row(next)
}

/// Set the selection and mirror the picked text into the input control,
/// superseding any in-flight typed edit.
fn select_row(index: usize) -> InputAction {
    let text = BOUND_OPTIONS.with(|o| o.borrow().get(index).map(|opt| opt.value.clone()));
    let Some(text) = text else {
        return InputAction::None;
    };

    trace!(index, value = %text, "selection moved");
    SELECTION.with(|s| s.set(Some(index)));
    EDIT_VALUE.with(|s| s.set(text.clone()));
    EDIT_CURSOR.with(|s| s.set(text.chars().count()));
    DEBOUNCER.with(|d| d.borrow_mut().clear());

    InputAction::Emit(WidgetEvent::SuggestionSelected(text))
}

// =============================================================================
// TEXT EDITING
// =============================================================================

fn insert_char(ch: char, now: Instant) {
    let value = EDIT_VALUE.with(|s| s.get());
    let mut chars: Vec<char> = value.chars().collect();
    let cursor = EDIT_CURSOR.with(|s| s.get()).min(chars.len());

    chars.insert(cursor, ch);
    let new_value: String = chars.into_iter().collect();

    EDIT_VALUE.with(|s| s.set(new_value.clone()));
    EDIT_CURSOR.with(|s| s.set(cursor + 1));
    DEBOUNCER.with(|d| d.borrow_mut().note(new_value, now));
}

fn delete_backward(now: Instant) {
    let value = EDIT_VALUE.with(|s| s.get());
    let mut chars: Vec<char> = value.chars().collect();
    let cursor = EDIT_CURSOR.with(|s| s.get()).min(chars.len());

    if cursor == 0 {
        return;
    }

    chars.remove(cursor - 1);
    let new_value: String = chars.into_iter().collect();

    EDIT_VALUE.with(|s| s.set(new_value.clone()));
    EDIT_CURSOR.with(|s| s.set(cursor - 1));
    DEBOUNCER.with(|d| d.borrow_mut().note(new_value, now));
}

fn delete_forward(now: Instant) {
    let value = EDIT_VALUE.with(|s| s.get());
    let mut chars: Vec<char> = value.chars().collect();
    let cursor = EDIT_CURSOR.with(|s| s.get()).min(chars.len());

    if cursor >= chars.len() {
        return;
    }

    chars.remove(cursor);
    let new_value: String = chars.into_iter().collect();

    EDIT_VALUE.with(|s| s.set(new_value.clone()));
    DEBOUNCER.with(|d| d.borrow_mut().note(new_value, now));
}

fn move_cursor(delta: i32) {
    let len = EDIT_VALUE.with(|s| s.get()).chars().count() as i32;
    let current = EDIT_CURSOR.with(|s| s.get()) as i32;
    EDIT_CURSOR.with(|s| s.set((current + delta).clamp(0, len) as usize));
}

// =============================================================================
// TERMINAL POLLING
// =============================================================================

/// Non-blocking event check with timeout.
pub fn poll_event(timeout: Duration) -> io::Result<Option<CrosstermEvent>> {
    if poll(timeout)? {
        Ok(Some(read()?))
    } else {
        Ok(None)
    }
}

/// Enable mouse capture.
pub fn enable_mouse() -> io::Result<()> {
    execute!(stdout(), EnableMouseCapture)
}

/// Disable mouse capture.
pub fn disable_mouse() -> io::Result<()> {
    execute!(stdout(), DisableMouseCapture)
}

// =============================================================================
// Tests
// =============================================================================
