//! Ring buffer of recent game events.
//!
//! Keeps the last few [`GameEvent`]s as short text lines so a host without a
//! debug probe (the simulator) can show what the state machine did. Firmware
//! logs the same events through defmt instead.
//!
//! # Usage
//!
//! ```ignore
//! let mut log = EventLog::new();
//! if let Some(event) = game.update(now, &INPUT, &mut start, &mut lcd)? {
//!     log.record(now, &event);
//! }
//! for line in log.iter() {
//!     draw_line(line);
//! }
//! ```

use core::fmt::{self, Write};

use heapless::{Deque, String};

use crate::game::GameEvent;

/// Maximum number of lines kept.
pub const EVENT_LOG_SIZE: usize = 6;

/// Maximum characters per line.
pub const EVENT_LINE_LENGTH: usize = 40;

/// Ring buffer of formatted event lines.
pub struct EventLog {
    buffer: Deque<String<EVENT_LINE_LENGTH>, EVENT_LOG_SIZE>,
}

impl EventLog {
    /// Create an empty log.
    pub const fn new() -> Self { Self { buffer: Deque::new() } }

    /// Push a raw line. The oldest line is dropped when full; long lines are
    /// truncated.
    pub fn push(
        &mut self,
        msg: &str,
    ) {
        if self.buffer.is_full() {
            self.buffer.pop_front();
        }

        let mut line: String<EVENT_LINE_LENGTH> = String::new();
        Truncating(&mut line).write_str(msg).ok();
        self.buffer.push_back(line).ok();
    }

    /// Record an event with its timestamp, e.g. `"12.3s Crash: score 45, 40 frames"`.
    pub fn record(
        &mut self,
        now_ms: u64,
        event: &GameEvent,
    ) {
        let mut line: String<EVENT_LINE_LENGTH> = String::new();
        write!(Truncating(&mut line), "{}.{}s {event}", now_ms / 1000, (now_ms % 1000) / 100).ok();
        self.push(&line);
    }

    /// Lines from oldest to newest.
    pub fn iter(&self) -> impl Iterator<Item = &str> { self.buffer.iter().map(|line| line.as_str()) }

    #[inline]
    pub fn len(&self) -> usize { self.buffer.len() }

    #[inline]
    pub fn is_empty(&self) -> bool { self.buffer.is_empty() }
}

/// Writer that keeps characters until the line is full and drops the rest.
///
/// `heapless::String` rejects a whole `write_str` fragment that does not fit,
/// which would cut formatted lines at the last argument boundary.
struct Truncating<'a>(&'a mut String<EVENT_LINE_LENGTH>);

impl Write for Truncating<'_> {
    fn write_str(
        &mut self,
        s: &str,
    ) -> fmt::Result {
        for c in s.chars() {
            if self.0.push(c).is_err() {
                break;
            }
        }
        Ok(())
    }
}

impl Default for EventLog {
    fn default() -> Self { Self::new() }
}
