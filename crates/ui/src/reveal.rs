//! Progressive reveal of assistant text that is already fully known.
//!
//! The transport delivers assistant content in bursts, so showing it directly
//! would jump. Instead the view keeps a cursor into the latest known content
//! and advances it on a fixed tick, faster when far behind, so the text
//! appears to arrive steadily and still catches up after a large burst.

// Step sizes by backlog: big after a burst, single characters for the tail.
const BURST_STEP: usize = 5;
const CATCHUP_STEP: usize = 2;
const SMOOTH_STEP: usize = 1;

/// Cursor-based scheduler for revealing one streaming message
///
/// State is a character count into the current target string, keyed by the
/// target message's id so the cursor resets exactly when the streaming
/// message's identity changes and never on a mere re-render. The scheduler
/// owns no timer: the app's event loop ticks it at a fixed cadence and stops
/// consulting it once [`RevealScheduler::release`] ran.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RevealScheduler {
    target_id: Option<String>,
    revealed: usize,
}

impl RevealScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Step size for a given backlog of unrevealed characters
    fn step_for(remaining: usize) -> usize {
        if remaining > 50 {
            BURST_STEP
        } else if remaining > 10 {
            CATCHUP_STEP
        } else {
            SMOOTH_STEP
        }
    }

    /// Point the scheduler at a streaming message
    ///
    /// A new identity resets the cursor to zero; retargeting the same id is a
    /// no-op so content growth keeps the cursor where it was.
    pub fn retarget(&mut self, id: &str) {
        if self.target_id.as_deref() != Some(id) {
            self.target_id = Some(id.to_string());
            self.revealed = 0;
        }
    }

    /// Drop the current target and its cursor
    pub fn release(&mut self) {
        self.target_id = None;
        self.revealed = 0;
    }

    /// Id of the message currently being revealed
    pub fn target_id(&self) -> Option<&str> {
        self.target_id.as_deref()
    }

    /// Count of characters currently revealed
    pub fn revealed(&self) -> usize {
        self.revealed
    }

    /// Advance the cursor one tick against the latest known content
    ///
    /// Returns whether the cursor moved. The target may have grown since the
    /// last tick, or shrunk if the transport replaced it; a shrink clamps the
    /// cursor instead of leaving it past the end.
    pub fn tick(&mut self, target: &str) -> bool {
        let total = target.chars().count();
        if self.revealed > total {
            self.revealed = total;
            return true;
        }
        if self.revealed == total {
            return false;
        }

        let remaining = total - self.revealed;
        self.revealed = (self.revealed + Self::step_for(remaining)).min(total);
        true
    }

    /// Whether the whole target is on screen
    pub fn is_caught_up(&self, target: &str) -> bool {
        self.revealed >= target.chars().count()
    }

    /// The revealed prefix of `target`, sliced on a character boundary
    pub fn visible_prefix<'a>(&self, target: &'a str) -> &'a str {
        match target.char_indices().nth(self.revealed) {
            Some((byte_idx, _)) => &target[..byte_idx],
            None => target,
        }
    }
}
