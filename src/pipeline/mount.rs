//! Mount API - Application lifecycle and render effect.
//!
//! The entry point for running the widget. `mount` wires the reactive
//! pipeline to the terminal and installs the ONE render effect; `tick`
//! advances the event loop one step; `run` blocks until shutdown.
//!
//! # Example
//!
//! ```ignore
//! let handle = typofix::pipeline::mount::mount()?;
//! typofix::pipeline::mount::run(&handle)?;
//! handle.unmount();
//! ```

use std::io;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use spark_signals::effect;
use tracing::{debug, info};

use super::frame::create_frame_derived;
use super::terminal::{detect_terminal_size, set_terminal_size};
use super::ui_state::create_ui_state_derived;
use crate::renderer::DiffRenderer;
use crate::state::input::{self, InputAction, WidgetEvent};
use crate::state::store;
use crate::types::UiCommand;

// =============================================================================
// Mount Handle
// =============================================================================

/// Handle returned by mount() that allows unmounting.
///
/// Holds the render effect's stop function and the running flag (cleared on
/// Ctrl+C or unmount).
pub struct MountHandle {
    stop_effect: Option<Box<dyn FnOnce()>>,
    running: Arc<AtomicBool>,
}

impl MountHandle {
    /// Stop the render effect and restore the terminal.
    pub fn unmount(mut self) {
        self.running.store(false, Ordering::SeqCst);

        let _ = input::disable_mouse();
        let _ = disable_raw_mode();

        if let Some(stop) = self.stop_effect.take() {
            stop();
        }

        // A fresh renderer can still emit the exit sequences.
        let _ = DiffRenderer::new().exit_fullscreen();
        info!("unmounted");
    }

    /// Check if still running.
    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::SeqCst)
    }

    /// Request graceful shutdown (sets running to false).
    pub fn stop(&self) {
        self.running.store(false, Ordering::SeqCst);
    }
}

impl Drop for MountHandle {
    fn drop(&mut self) {
        // Best effort terminal restore if unmount was skipped
        let _ = input::disable_mouse();
        let _ = disable_raw_mode();

        if let Some(stop) = self.stop_effect.take() {
            stop();
        }
    }
}

// =============================================================================
// Mount Function
// =============================================================================

/// Mount the widget.
///
/// Sets up terminal size detection, the reactive pipeline (store signals ->
/// UiState -> frame -> renderer), raw mode, mouse capture, and the render
/// effect. Returns a MountHandle for the event loop and cleanup.
pub fn mount() -> io::Result<MountHandle> {
    detect_terminal_size();

    let ui_state = create_ui_state_derived();
    let frame = create_frame_derived(ui_state.clone());

    let running = Arc::new(AtomicBool::new(true));
    let running_clone = running.clone();

    let mut renderer = DiffRenderer::new();
    renderer.enter_fullscreen()?;
    enable_raw_mode()?;
    input::enable_mouse()?;

    // The ONE render effect: re-runs whenever any signal the frame reads
    // changes, draws the frame, and publishes the control bindings the
    // router needs (hit regions and the options under the selection).
    let stop_fn = effect(move || {
        if !running_clone.load(Ordering::SeqCst) {
            return;
        }

        let result = frame.get();

        // Apply control bindings (side effect!)
        input::set_hit_regions(result.hit_regions.clone());
        input::bind_options(ui_state.get().options.clone());

        // Render to terminal (side effect!)
        let _ = renderer.render(&result.buffer);
    });

    info!("mounted");
    Ok(MountHandle {
        stop_effect: Some(Box::new(stop_fn)),
        running,
    })
}

/// Unmount and clean up.
pub fn unmount(handle: MountHandle) {
    handle.unmount();
}

// =============================================================================
// Event Loop
// =============================================================================

/// Run the event loop once (non-blocking).
///
/// Polls the terminal with a short timeout (~60fps), routes the event, and
/// flushes any debounced word edit whose window has elapsed.
///
/// Returns `Ok(false)` once shutdown has been requested.
pub fn tick(handle: &MountHandle) -> io::Result<bool> {
    if !handle.is_running() {
        return Ok(false);
    }

    let now = Instant::now();

    if let Some(event) = input::poll_event(Duration::from_millis(16))? {
        match input::route_event(event, now) {
            InputAction::Emit(widget_event) => dispatch(widget_event),
            InputAction::Shutdown => {
                info!("shutdown requested");
                handle.stop();
            }
            InputAction::Resize(width, height) => {
                debug!(width, height, "terminal resized");
                set_terminal_size(width, height);
            }
            InputAction::None => {}
        }
    }

    if let Some(widget_event) = input::poll_debounce(Instant::now()) {
        dispatch(widget_event);
    }

    Ok(handle.is_running())
}

/// Run the event loop (blocking until stopped).
pub fn run(handle: &MountHandle) -> io::Result<()> {
    while tick(handle)? {
        // Keep processing events
    }
    Ok(())
}

/// Feed one widget event into the store and run the effect commands it
/// returns against the UI substrate.
fn dispatch(event: WidgetEvent) {
    for command in store::apply_event(event) {
        match command {
            UiCommand::ClearSelection => input::clear_selection(),
            UiCommand::ClearInput => input::clear_input(),
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
