//! End-to-end behavior of the display engine against a scripted conversation:
//! content flows in as wholesale list replacements, frames are laid out, and
//! the viewport either follows or holds depending on where the viewer is.

use rill_core::{AgentStatus, Message, TranscriptUpdate};
use rill_ui::{Theme, TranscriptRenderer, TranscriptView};

/// Build one frame at the given size and resolve scroll state against it
fn frame(view: &mut TranscriptView, width: usize, height: usize) -> (usize, usize) {
    let lines = TranscriptRenderer::new(view, Theme::palette()).build_lines(width);
    let total = lines.len();
    let offset = view.apply_layout(total, height);
    (offset, total)
}

fn long_conversation() -> Vec<Message> {
    let mut messages = Vec::new();
    for i in 0..30 {
        messages.push(Message::user(
            format!("u{}", i),
            "a question with enough words in it to wrap across a couple of rows",
        ));
        messages.push(Message::assistant(
            format!("a{}", i),
            "an answer with enough words in it to wrap across a couple of rows",
        ));
    }
    messages
}

#[test]
fn follows_new_content_until_the_viewer_scrolls_away() {
    let mut view = TranscriptView::new();
    let mut messages = long_conversation();
    view.set_messages(messages.clone());

    // first frame lands pinned to the bottom
    let (offset, total) = frame(&mut view, 40, 20);
    assert!(total > 20);
    assert_eq!(offset, total - 20);
    assert!(view.is_following());

    // the viewer scrolls far up; a new arrival must not move the viewport
    view.scroll_up(60);
    assert!(!view.is_following());
    let held = view.scroll_top();

    messages.push(Message::assistant("a-late", "a late arrival while browsing"));
    view.set_messages(messages.clone());
    let (offset, _) = frame(&mut view, 40, 20);
    assert_eq!(offset, held);
    assert!(view.shows_jump_affordance());

    // jumping back re-engages following for the next arrival
    view.jump_to_bottom();
    let (offset, total) = frame(&mut view, 40, 20);
    assert_eq!(offset, total - 20);

    messages.push(Message::user("u-next", "one more question"));
    view.set_messages(messages);
    let (offset, total) = frame(&mut view, 40, 20);
    assert_eq!(offset, total - 20);
}

#[test]
fn status_indicator_pulls_an_engaged_viewport_down() {
    let mut view = TranscriptView::new();
    view.set_messages(long_conversation());
    frame(&mut view, 40, 20);
    assert!(view.is_following());

    view.apply_update(TranscriptUpdate::Status {
        active: true,
        text: "assembling an answer".to_string(),
        status: AgentStatus::Planning,
    });
    let (offset, total) = frame(&mut view, 40, 20);
    assert_eq!(offset, total - 20);

    // while disengaged the same indicator appearing moves nothing
    view.apply_update(TranscriptUpdate::Status {
        active: false,
        text: String::new(),
        status: AgentStatus::Unspecified,
    });
    view.scroll_up(60);
    let held = view.scroll_top();
    view.apply_update(TranscriptUpdate::Status {
        active: true,
        text: "working again".to_string(),
        status: AgentStatus::Executing,
    });
    let (offset, _) = frame(&mut view, 40, 20);
    assert_eq!(offset, held);
}

#[test]
fn reveal_prefix_grows_monotonically_to_the_full_text() {
    let mut view = TranscriptView::new();
    let text = "streaming ".repeat(12);
    view.set_messages(vec![
        Message::user("u1", "go"),
        Message::assistant("a1", text.clone()),
    ]);

    let message = view.last().unwrap().clone();
    let full = text.chars().count();
    let mut seen = 0;
    let mut ticks = 0;
    while view.shows_reveal_cursor(&message) {
        view.tick_reveal();
        let now = view.visible_content(&message).chars().count();
        assert!(now >= seen);
        assert!(now <= full);
        seen = now;
        ticks += 1;
        assert!(ticks <= full, "reveal failed to terminate");
    }
    assert_eq!(view.visible_content(&message), text.as_str());
}

#[test]
fn burst_growth_catches_up_without_overshoot() {
    let mut view = TranscriptView::new();
    let mut messages = vec![Message::assistant("a1", "short start")];
    view.set_messages(messages.clone());
    while view.tick_reveal() {}

    // the transport delivers a large burst onto the same identity
    let grown = format!("short start{}", " and a great deal more text".repeat(8));
    messages[0] = messages[0].clone().with_content(grown.clone());
    view.set_messages(messages);

    let message = view.last().unwrap().clone();
    let before = view.visible_content(&message).chars().count();
    assert_eq!(before, "short start".chars().count());

    view.tick_reveal();
    let after = view.visible_content(&message).chars().count();
    // far behind: the scheduler takes its largest step, nothing bigger
    assert_eq!(after, before + 5);

    while view.tick_reveal() {}
    assert_eq!(view.visible_content(&message), grown.as_str());
}
