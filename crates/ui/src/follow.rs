//! Viewport auto-follow for the transcript.
//!
//! New content pulls the viewport to the bottom only while the viewer was
//! already at (or near) the bottom; scrolling away disengages following until
//! the viewer comes back within the threshold or jumps explicitly. Scroll
//! commands are queued here and resolved by the renderer after the next
//! layout, so they act on post-update geometry rather than stale rows.

/// Rows from the bottom still counted as "near bottom"
pub const FOLLOW_THRESHOLD: usize = 20;

/// A measurement of the scrollable transcript region, in wrapped rows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Viewport {
    /// First visible row
    pub scroll_top: usize,
    /// Visible row count
    pub client_height: usize,
    /// Total row count of the laid-out transcript
    pub scroll_height: usize,
}

impl Viewport {
    pub fn new(scroll_top: usize, client_height: usize, scroll_height: usize) -> Self {
        Self { scroll_top, client_height, scroll_height }
    }

    /// Rows between the bottom edge of the view and the end of the content
    pub fn distance_from_bottom(&self) -> usize {
        self.scroll_height.saturating_sub(self.scroll_top + self.client_height)
    }

    /// Largest valid scroll offset
    pub fn max_scroll_top(&self) -> usize {
        self.scroll_height.saturating_sub(self.client_height)
    }
}

/// Decides whether content changes may move the viewport
///
/// Owns the "near bottom" boolean. It is recomputed from live geometry on
/// every user scroll and on the first laid-out frame, and is otherwise only
/// set as a side effect of an explicit jump to bottom. Auto-follow fires on
/// exactly two triggers: the message count grew, or the transient status
/// indicator appeared. Text growth inside an existing message is deliberately
/// not a trigger, so a long reveal does not fight the viewer's scroll.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FollowController {
    near_bottom: bool,
    measured: bool,
    threshold: usize,
    prev_message_count: usize,
    prev_status_visible: bool,
    pending_scroll: bool,
}

impl FollowController {
    /// A controller that follows until the viewer scrolls away
    ///
    /// Starts in the following state; the first real measurement happens once
    /// geometry exists, deferred past the initial layout.
    pub fn new() -> Self {
        Self::with_threshold(FOLLOW_THRESHOLD)
    }

    pub fn with_threshold(threshold: usize) -> Self {
        Self {
            near_bottom: true,
            measured: false,
            threshold,
            prev_message_count: 0,
            prev_status_visible: false,
            pending_scroll: false,
        }
    }

    /// Recompute "near bottom" from live geometry
    ///
    /// Called from every user-driven scroll and from the first laid-out
    /// frame. Boundary is inclusive: a distance equal to the threshold still
    /// counts as near.
    pub fn observe(&mut self, viewport: Viewport) {
        self.near_bottom = viewport.distance_from_bottom() <= self.threshold;
        self.measured = true;
    }

    pub fn is_near_bottom(&self) -> bool {
        self.near_bottom
    }

    /// Whether the initial deferred measurement is still outstanding
    pub fn needs_initial_measure(&self) -> bool {
        !self.measured
    }

    /// Re-evaluate auto-follow after the inputs changed
    ///
    /// Queues a scroll-to-bottom command iff the viewer is engaged and one of
    /// the two triggers fired. Anything else (text growth, status
    /// disappearing, shrinking lists) updates the observations and commands
    /// nothing.
    pub fn on_content_change(&mut self, message_count: usize, status_visible: bool) {
        let new_message = message_count > self.prev_message_count;
        let status_appeared = status_visible && !self.prev_status_visible;
        self.prev_message_count = message_count;
        self.prev_status_visible = status_visible;

        if (new_message || status_appeared) && self.near_bottom {
            self.pending_scroll = true;
        }
    }

    /// Unconditionally scroll to the bottom and re-engage following
    pub fn jump_to_bottom(&mut self) {
        self.near_bottom = true;
        self.measured = true;
        self.pending_scroll = true;
    }

    /// Consume the queued scroll command, if any
    ///
    /// The renderer calls this after layout, when post-update geometry is
    /// known, and moves the viewport itself.
    pub fn take_pending_scroll(&mut self) -> bool {
        std::mem::take(&mut self.pending_scroll)
    }

    /// The jump affordance is shown exactly while following is disengaged
    pub fn shows_jump_affordance(&self) -> bool {
        self.measured && !self.near_bottom
    }
}

impl Default for FollowController {
    fn default() -> Self {
        Self::new()
    }
}
