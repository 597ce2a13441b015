//! Component trait - shared interface of everything drawn on the page
//!
//! Components turn terminal events into Actions and paint themselves; the
//! App owns the clocks and the scroll state and hands components what they
//! need through their `draw_with` render contexts.

use crate::action::Action;
use anyhow::Result;
use crossterm::event::{KeyEvent, MouseEvent};
use ratatui::{layout::Rect, Frame};

/// Trait for UI components
///
/// A component lives from `init` until `teardown`:
/// 1. `init` - Mounted; owned timers start
/// 2. `handle_key_event` / `handle_mouse_event` - Events become Actions
/// 3. `update` - Actions change state, possibly emitting a follow-up
/// 4. `draw` - Paint the current state
/// 5. `teardown` - Unmounted; nothing scheduled may fire afterwards
pub trait Component {
    /// Start the component's clocks
    fn init(&mut self) -> Result<()> {
        Ok(())
    }

    /// Translate a key press into an Action
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let _ = key;
        Ok(None)
    }

    /// Translate a click or wheel movement into an Action
    fn handle_mouse_event(&mut self, mouse: MouseEvent) -> Result<Option<Action>> {
        let _ = mouse;
        Ok(None)
    }

    /// Apply an Action. A returned Action is processed next.
    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        let _ = action;
        Ok(None)
    }

    /// Paint into `area`. No state changes beyond hit-test bookkeeping.
    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()>;

    /// Unmount the component, cancelling anything scheduled
    fn teardown(&mut self) {}
}
