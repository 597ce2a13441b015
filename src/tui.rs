//! Terminal User Interface management
//!
//! Handles terminal setup, teardown, and frame-paced event polling.
//! Wraps ratatui's Terminal for a cleaner interface.

use anyhow::Result;
use crossterm::{
    cursor,
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
    terminal::{self, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::{
    io::{self, Stdout},
    ops::{Deref, DerefMut},
    time::{Duration, Instant},
};
use tracing::debug;

/// Terminal wrapper for managing the TUI lifecycle
pub struct Tui {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    pacer: FramePacer,
    entered: bool,
}

impl Tui {
    pub fn new() -> Result<Self> {
        let backend = CrosstermBackend::new(io::stdout());
        let terminal = Terminal::new(backend)?;
        Ok(Self {
            terminal,
            pacer: FramePacer::new(Duration::from_millis(16), Instant::now()),
            entered: false,
        })
    }

    /// Set the time between frames
    pub fn with_frame_interval(mut self, interval: Duration) -> Self {
        self.pacer = FramePacer::new(interval, Instant::now());
        self
    }

    /// Enter the alternate screen and enable raw mode
    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        crossterm::execute!(
            io::stdout(),
            EnterAlternateScreen,
            EnableMouseCapture,
            cursor::Hide
        )?;
        self.terminal.clear()?;
        self.entered = true;
        debug!("terminal entered");
        Ok(())
    }

    /// Exit the alternate screen and disable raw mode
    ///
    /// Also called automatically on Drop.
    pub fn exit(&mut self) -> Result<()> {
        if !self.entered {
            return Ok(());
        }
        self.entered = false;
        terminal::disable_raw_mode()?;
        crossterm::execute!(
            io::stdout(),
            LeaveAlternateScreen,
            DisableMouseCapture,
            cursor::Show
        )?;
        debug!("terminal restored");
        Ok(())
    }

    /// Poll for the next event
    ///
    /// Returns `Some(Event)` if an event arrives before the next frame is
    /// due, or `None` when it is time to draw a frame.
    pub fn next_event(&mut self) -> Result<Option<Event>> {
        loop {
            let timeout = self.pacer.timeout(Instant::now());
            if timeout.is_zero() || !event::poll(timeout)? {
                self.pacer.frame_taken(Instant::now());
                return Ok(None);
            }

            let event = event::read()?;
            if is_wanted(&event) {
                return Ok(Some(event));
            }
        }
    }

    /// Draw to the terminal using the provided closure
    pub fn draw<F>(&mut self, f: F) -> Result<()>
    where
        F: FnOnce(&mut ratatui::Frame),
    {
        self.terminal.draw(f)?;
        Ok(())
    }
}

/// Key releases and repeats are dropped (Windows reports both)
fn is_wanted(event: &Event) -> bool {
    !matches!(event, Event::Key(key) if key.kind != KeyEventKind::Press)
}

impl Deref for Tui {
    type Target = Terminal<CrosstermBackend<Stdout>>;

    fn deref(&self) -> &Self::Target {
        &self.terminal
    }
}

impl DerefMut for Tui {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.terminal
    }
}

impl Drop for Tui {
    fn drop(&mut self) {
        // Best effort cleanup on drop
        let _ = self.exit();
    }
}

/// Keeps frames on a fixed cadence regardless of how many events arrive
#[derive(Debug, Clone, Copy)]
struct FramePacer {
    interval: Duration,
    next_frame: Instant,
}

impl FramePacer {
    fn new(interval: Duration, now: Instant) -> Self {
        Self {
            interval: interval.max(Duration::from_millis(1)),
            next_frame: now,
        }
    }

    /// How long events may be waited for before the next frame is due
    fn timeout(&self, now: Instant) -> Duration {
        self.next_frame.saturating_duration_since(now)
    }

    /// Schedule the frame after this one. A late frame does not cause a
    /// burst of catch-up frames.
    fn frame_taken(&mut self, now: Instant) {
        self.next_frame += self.interval;
        if self.next_frame <= now {
            self.next_frame = now + self.interval;
        }
    }
}
