/* src/engine/src/motion.rs */

use std::time::Duration;

use serde_json::{Value, json};

/// Fixed duration of the cosmetic loading screen. Nothing is actually
/// loaded during this window.
pub const LOADING_GATE_MS: u64 = 1700;

/// Scroll offset (px) past which the back-to-top control shows.
pub const BACK_TO_TOP_OFFSET: f64 = 320.0;

/// Scroll offset (px) past which the header condenses.
pub const HEADER_CONDENSE_OFFSET: f64 = 18.0;

/// Default visible-area fraction that fires a section entrance.
pub const ENTRANCE_THRESHOLD: f64 = 0.3;

/// Fraction of the scrollable track covered by the current offset,
/// clamped to [0, 1]. A document no taller than its viewport has no
/// track, which reads as zero progress — never a division error.
pub fn scroll_progress(offset: f64, document_height: f64, viewport_height: f64) -> f64 {
  let track = document_height - viewport_height;
  if track <= 0.0 {
    return 0.0;
  }
  (offset / track).clamp(0.0, 1.0)
}

pub fn back_to_top_visible(offset: f64) -> bool {
  offset > BACK_TO_TOP_OFFSET
}

pub fn header_condensed(offset: f64) -> bool {
  offset > HEADER_CONDENSE_OFFSET
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntranceState {
  Hidden,
  Visible,
}

/// One-way entrance flag for an animated section.
///
/// The first time the section's visible fraction reaches its threshold
/// the state flips to `Visible` and stays there for the lifetime of the
/// mount — scrolling the section back out of view must not reset it.
/// Each section owns its own flag; there is no cross-section state.
#[derive(Debug, Clone, Copy)]
pub struct Entrance {
  threshold: f64,
  state: EntranceState,
}

impl Entrance {
  pub fn new(threshold: f64) -> Self {
    Self { threshold, state: EntranceState::Hidden }
  }

  pub fn state(&self) -> EntranceState {
    self.state
  }

  /// Feed one intersection observation. Idempotent; safe at any
  /// callback frequency.
  pub fn observe(&mut self, visible_fraction: f64) -> EntranceState {
    if self.state == EntranceState::Hidden && visible_fraction >= self.threshold {
      self.state = EntranceState::Visible;
    }
    self.state
  }
}

impl Default for Entrance {
  fn default() -> Self {
    Self::new(ENTRANCE_THRESHOLD)
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateState {
  Loading,
  Ready,
}

/// Timer-driven loading gate: `Loading` until the fixed delay elapses,
/// then `Ready` forever. The transition depends on nothing but time.
#[derive(Debug, Clone, Copy)]
pub struct LoadingGate {
  reveal_after: Duration,
  state: GateState,
}

impl LoadingGate {
  pub fn new() -> Self {
    Self::with_delay(Duration::from_millis(LOADING_GATE_MS))
  }

  pub fn with_delay(reveal_after: Duration) -> Self {
    Self { reveal_after, state: GateState::Loading }
  }

  pub fn state(&self) -> GateState {
    self.state
  }

  /// Advance the gate given the time elapsed since mount.
  pub fn poll(&mut self, elapsed: Duration) -> GateState {
    if elapsed >= self.reveal_after {
      self.state = GateState::Ready;
    }
    self.state
  }
}

impl Default for LoadingGate {
  fn default() -> Self {
    Self::new()
  }
}

/// Motion constants as page data, for the client runtime to mirror.
pub fn constants() -> Value {
  json!({
    "loading_ms": LOADING_GATE_MS,
    "back_to_top_px": BACK_TO_TOP_OFFSET,
    "header_px": HEADER_CONDENSE_OFFSET,
    "entrance_threshold": ENTRANCE_THRESHOLD,
  })
}
