use super::TranscriptView;
use crate::follow::Viewport;

impl TranscriptView {
    /// Scroll towards older content
    ///
    /// User-driven, so the follow controller re-measures: moving away from
    /// the bottom disengages auto-follow.
    pub fn scroll_up(&mut self, rows: usize) {
        self.scroll_top = self.scroll_top.saturating_sub(rows);
        self.observe_scroll();
    }

    /// Scroll towards newer content
    pub fn scroll_down(&mut self, rows: usize) {
        let max = self.max_scroll_top();
        self.scroll_top = (self.scroll_top + rows).min(max);
        self.observe_scroll();
    }

    /// Explicit jump to the newest content, re-engaging auto-follow
    ///
    /// The actual viewport move is deferred to the next layout pass like any
    /// other follow command.
    pub fn jump_to_bottom(&mut self) {
        self.follow.jump_to_bottom();
    }

    /// Current scroll offset in wrapped rows
    pub fn scroll_top(&self) -> usize {
        self.scroll_top
    }

    /// Whether the viewer is currently engaged with the bottom
    pub fn is_following(&self) -> bool {
        self.follow.is_near_bottom()
    }

    /// Whether to present the jump-to-bottom affordance
    pub fn shows_jump_affordance(&self) -> bool {
        self.follow.shows_jump_affordance()
    }

    /// Resolve scroll state against freshly laid-out geometry
    ///
    /// Called once per frame after the transcript's rows are built, when the
    /// real post-update height is known. Clamps the offset, performs the
    /// deferred first measurement, and consumes any queued follow command.
    /// Returns the offset the frame should render with.
    pub fn apply_layout(&mut self, total_rows: usize, viewport_rows: usize) -> usize {
        self.layout = Some((total_rows, viewport_rows));
        let max = self.max_scroll_top();
        if self.scroll_top > max {
            self.scroll_top = max;
        }
        if self.follow.needs_initial_measure() {
            self.follow.observe(self.current_viewport());
        }
        if self.follow.take_pending_scroll() {
            self.scroll_top = max;
            self.follow.observe(self.current_viewport());
        }
        self.scroll_top
    }

    fn max_scroll_top(&self) -> usize {
        match self.layout {
            Some((total, viewport_rows)) => Viewport::new(0, viewport_rows, total).max_scroll_top(),
            None => 0,
        }
    }

    fn current_viewport(&self) -> Viewport {
        match self.layout {
            Some((total, viewport_rows)) => Viewport::new(self.scroll_top, viewport_rows, total),
            None => Viewport::default(),
        }
    }

    /// Re-measure after a user-driven scroll, when geometry exists
    fn observe_scroll(&mut self) {
        if self.layout.is_some() {
            self.follow.observe(self.current_viewport());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rill_core::Message;

    fn view_with_messages(count: usize) -> TranscriptView {
        let mut view = TranscriptView::new();
        let messages = (0..count).map(|i| Message::user(format!("u{}", i), "hello there")).collect();
        view.set_messages(messages);
        view
    }

    #[test]
    fn test_initial_layout_lands_at_bottom() {
        let mut view = view_with_messages(5);
        // pending follow from the first content change, resolved post-layout
        let offset = view.apply_layout(100, 30);
        assert_eq!(offset, 70);
        assert!(view.is_following());
    }

    #[test]
    fn test_scrolling_up_disengages_follow() {
        let mut view = view_with_messages(5);
        view.apply_layout(100, 30);
        assert!(view.is_following());

        view.scroll_up(60);
        assert_eq!(view.scroll_top(), 10);
        assert!(!view.is_following());
        assert!(view.shows_jump_affordance());
    }

    #[test]
    fn test_new_content_does_not_move_disengaged_viewport() {
        let mut view = view_with_messages(5);
        view.apply_layout(100, 30);
        view.scroll_up(60);

        let mut messages: Vec<Message> = view.messages().to_vec();
        messages.push(Message::user("u99", "another"));
        view.set_messages(messages);

        let offset = view.apply_layout(110, 30);
        assert_eq!(offset, 10);
    }

    #[test]
    fn test_new_content_follows_engaged_viewport_after_layout() {
        let mut view = view_with_messages(5);
        view.apply_layout(100, 30);

        let mut messages: Vec<Message> = view.messages().to_vec();
        messages.push(Message::user("u99", "another"));
        view.set_messages(messages);

        // the command measures post-update geometry, not the stale 100 rows
        let offset = view.apply_layout(110, 30);
        assert_eq!(offset, 80);
    }

    #[test]
    fn test_scrolling_back_within_threshold_reengages() {
        let mut view = view_with_messages(5);
        view.apply_layout(100, 30);
        view.scroll_up(60);
        assert!(!view.is_following());

        view.scroll_down(45);
        // distance from bottom is 100 - 55 - 30 = 15, inside the threshold
        assert!(view.is_following());
        assert!(!view.shows_jump_affordance());
    }

    #[test]
    fn test_jump_to_bottom_applies_next_layout() {
        let mut view = view_with_messages(5);
        view.apply_layout(100, 30);
        view.scroll_up(80);
        assert!(!view.is_following());

        view.jump_to_bottom();
        let offset = view.apply_layout(100, 30);
        assert_eq!(offset, 70);
        assert!(view.is_following());
    }

    #[test]
    fn test_offset_clamps_when_content_shrinks() {
        let mut view = view_with_messages(5);
        view.apply_layout(100, 30);
        view.scroll_up(40);

        let offset = view.apply_layout(40, 30);
        assert_eq!(offset, 10);
    }

    #[test]
    fn test_short_content_never_scrolls() {
        let mut view = view_with_messages(2);
        let offset = view.apply_layout(10, 30);
        assert_eq!(offset, 0);
        assert!(view.is_following());

        view.scroll_down(5);
        assert_eq!(view.scroll_top(), 0);
    }

    #[test]
    fn test_scroll_before_any_layout_is_safe() {
        let mut view = view_with_messages(3);
        view.scroll_up(10);
        view.scroll_down(10);
        assert_eq!(view.scroll_top(), 0);
        // geometry unavailable: still in the default following state
        assert!(view.is_following());
    }
}
