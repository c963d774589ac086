//! Low-level input collection: crossterm polling, mouse wheel coalescing, and
//! translation into primitive events that the higher-level input service can consume.

use crate::error::Result;
use ratatui::crossterm::event::{self, Event, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use std::collections::VecDeque;
use std::time::{Duration, Instant};

/// Quiet period that ends a wheel burst.
const DEFAULT_COALESCE_WINDOW_MS: u64 = 12;
/// Rows moved by a single mouse wheel tick.
const MOUSE_SCROLL_ROWS: u64 = 3;
/// Poll timeout used when the caller does not provide one.
const DEFAULT_POLL_TIMEOUT_MS: u64 = 50;

/// Direction of a scroll step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollDirection {
    Up,
    Down,
}

/// Low-level events surfaced by the raw input collector.
#[derive(Debug, Clone, PartialEq)]
pub enum RawInputEvent {
    Key(KeyEvent),
    Resize {
        width: u16,
        height: u16,
    },
    Scroll {
        direction: ScrollDirection,
        lines: u64,
    },
    /// Left button press at a screen cell
    Click {
        column: u16,
        row: u16,
    },
}

/// Folds a burst of wheel ticks into one scroll, so a fast flick moves the school
/// list once by the whole distance instead of redrawing per tick.
#[derive(Debug, Clone)]
struct WheelCoalescer {
    window: Duration,
    burst: Option<WheelBurst>,
}

/// Ticks received in one direction, and when the latest one arrived.
#[derive(Debug, Clone, Copy)]
struct WheelBurst {
    direction: ScrollDirection,
    ticks: u64,
    last_tick: Instant,
}

impl WheelBurst {
    fn into_event(self) -> RawInputEvent {
        RawInputEvent::Scroll {
            direction: self.direction,
            lines: self.ticks.saturating_mul(MOUSE_SCROLL_ROWS),
        }
    }
}

impl WheelCoalescer {
    fn new(window: Duration) -> Self {
        Self {
            window,
            burst: None,
        }
    }

    /// Record one tick. Reversing direction ends the current burst, which is returned.
    fn tick(&mut self, direction: ScrollDirection, now: Instant) -> Option<RawInputEvent> {
        if let Some(burst) = self.burst.as_mut().filter(|b| b.direction == direction) {
            burst.ticks = burst.ticks.saturating_add(1);
            burst.last_tick = now;
            return None;
        }
        self.burst
            .replace(WheelBurst {
                direction,
                ticks: 1,
                last_tick: now,
            })
            .map(WheelBurst::into_event)
    }

    /// End the burst once the wheel has been quiet for the whole window.
    fn settle(&mut self, now: Instant) -> Option<RawInputEvent> {
        let quiet = self
            .burst
            .is_some_and(|burst| now.duration_since(burst.last_tick) >= self.window);
        if quiet {
            self.finish()
        } else {
            None
        }
    }

    fn finish(&mut self) -> Option<RawInputEvent> {
        self.burst.take().map(WheelBurst::into_event)
    }
}

/// Reads terminal events for the school browser: keys, resizes, left clicks and
/// coalesced wheel scrolls, in arrival order.
#[derive(Debug)]
pub struct RawInputCollector {
    wheel: WheelCoalescer,
    pending_events: VecDeque<RawInputEvent>,
}

impl Default for RawInputCollector {
    fn default() -> Self {
        Self::new()
    }
}

impl RawInputCollector {
    /// Create a collector with the default coalescing window.
    pub fn new() -> Self {
        Self::with_window(Duration::from_millis(DEFAULT_COALESCE_WINDOW_MS))
    }

    /// Collector whose wheel bursts end after `window` of quiet.
    pub fn with_window(window: Duration) -> Self {
        Self {
            wheel: WheelCoalescer::new(window),
            pending_events: VecDeque::new(),
        }
    }

    /// Feed an event that did not come from crossterm polling.
    pub fn process_event(&mut self, event: Event) {
        self.enqueue_event(event);
    }

    /// Next ready event without touching the terminal: a settled wheel burst, then
    /// anything already queued.
    pub fn try_flush(&mut self) -> Option<RawInputEvent> {
        self.wheel
            .settle(Instant::now())
            .or_else(|| self.pending_events.pop_front())
    }

    /// Next event, waiting up to `timeout` (50 ms when `None`) for the terminal.
    pub fn poll_event(&mut self, timeout: Option<Duration>) -> Result<Option<RawInputEvent>> {
        if let Some(event) = self.try_flush() {
            return Ok(Some(event));
        }

        let poll_timeout = timeout.unwrap_or(Duration::from_millis(DEFAULT_POLL_TIMEOUT_MS));

        if !event::poll(poll_timeout)? {
            return Ok(self.try_flush());
        }

        let event = event::read()?;
        self.enqueue_event(event);
        Ok(self.pending_events.pop_front())
    }

    fn enqueue_event(&mut self, event: Event) {
        match event {
            Event::Key(key_event) => {
                self.flush_pending_scroll();
                self.pending_events.push_back(RawInputEvent::Key(key_event));
            }
            Event::Resize(width, height) => {
                self.flush_pending_scroll();
                self.pending_events
                    .push_back(RawInputEvent::Resize { width, height });
            }
            Event::Mouse(mouse_event) => self.handle_mouse_event(mouse_event),
            _ => {}
        }
    }

    fn handle_mouse_event(&mut self, mouse_event: MouseEvent) {
        let direction = match mouse_event.kind {
            MouseEventKind::ScrollUp => ScrollDirection::Up,
            MouseEventKind::ScrollDown => ScrollDirection::Down,
            MouseEventKind::Down(MouseButton::Left) => {
                // A click acts on the list as scrolled so far.
                self.flush_pending_scroll();
                self.pending_events.push_back(RawInputEvent::Click {
                    column: mouse_event.column,
                    row: mouse_event.row,
                });
                return;
            }
            _ => return,
        };

        if let Some(scroll) = self.wheel.tick(direction, Instant::now()) {
            self.pending_events.push_back(scroll);
        }
    }

    fn flush_pending_scroll(&mut self) {
        if let Some(scroll) = self.wheel.finish() {
            self.pending_events.push_back(scroll);
        }
    }
}
